//! HTTP header handling for fingerprint emulation.
//!
//! The wire-level header sequence (order and casing) is part of a client's
//! fingerprint, so this module keeps its own ordered, case-preserving
//! container instead of relying on `http::HeaderMap` normalization.

pub mod orderedheaders;

pub use orderedheaders::{OrderedHeaderMap, OrigHeaderName};
