//! Utility functions for code generation, URL validation and error mapping.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Absolute URL checks for link targets
//! - [`db_error`] - Classification of database errors

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
