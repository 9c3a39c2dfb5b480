//! Utility functions for code generation and request handling.
//!
//! - [`code_generator`] - Short code generation and alias rules
//! - [`client_ip`] - Client address resolution for visit analytics
//! - [`db_error`] - SQLx error translation

pub mod client_ip;
pub mod code_generator;
pub mod db_error;
