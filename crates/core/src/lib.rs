//! Shared domain types for trackboard.
//!
//! Holds the primary key alias, the domain error type, input validation
//! glue, and the filesystem-backed icon store used by link types.

pub mod error;
pub mod icons;
pub mod types;
pub mod validation;
