//! Base types and error handling.
//!
//! Provides the error taxonomy shared by the header, profile, and
//! resolution layers. All errors here are configuration-time errors;
//! nothing in this module represents a network failure.

pub mod error;

pub use error::{Error, Result};

/// Overlay the `Option` fields of two records, the higher-precedence side
/// winning per field. Used by the options types to implement merge
/// precedence without listing every field at each call site.
macro_rules! overlay_fields {
    ($base:expr, $over:expr, { $($field:ident),* $(,)? }) => {
        Self {
            $($field: $over.$field.clone().or_else(|| $base.$field.clone()),)*
        }
    };
}

pub(crate) use overlay_fields;
