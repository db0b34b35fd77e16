//! # mimicnet
//!
//! A browser fingerprint emulation engine for Rust HTTP stacks.
//!
//! `mimicnet` models every protocol parameter an anti-bot system observes
//! before the first byte of application data: ClientHello shape, HTTP/2
//! SETTINGS order and values, pseudo-header order, and the exact order and
//! casing of request headers. It resolves layered overrides into one
//! effective parameter set and projects it onto a BoringSSL connector and
//! protocol codec options.
//!
//! ## Features
//!
//! - **Profile Catalog**: Chrome, Edge, Opera, Firefox, Safari, and OkHttp
//!   across multiple versions, with OS overlays
//! - **TLS Fingerprinting**: ciphers, curves, GREASE, extension
//!   permutation, ALPS, certificate compression
//! - **HTTP/2 Fingerprinting**: SETTINGS order, pseudo-header order,
//!   priority trees, window sizes
//! - **Ordered Headers**: insertion-order, casing-preserving header map
//!   with wire-order templates
//! - **Layered Overrides**: request over client over profile, merged
//!   field-by-field
//!
//! ## Quick Start
//!
//! ```rust
//! use mimicnet::{apply, resolve, EmulationFactory, Profile};
//!
//! let profile = Profile::Chrome131.emulation();
//! let effective = resolve(Some(&profile), None, None).unwrap();
//! let config = apply(&effective);
//! assert!(config.tls.alpn_wire().is_some());
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Core types and error definitions
//! - [`http`] - Ordered, casing-preserving header containers
//! - [`tls`] - TLS fingerprint parameter types
//! - [`emulation`] - Profiles, option records, and the resolver
//! - [`negotiate`] - Projection onto BoringSSL and codec configuration

pub mod base;
pub mod emulation;
pub mod http;
pub mod negotiate;
pub mod tls;

pub use base::{Error, Result};
pub use emulation::{
    resolve, EffectiveParameters, Emulation, EmulationBuilder, EmulationFactory, EmulationOption,
    Http1Options, Http2Options, Os, Profile,
};
pub use http::{OrderedHeaderMap, OrigHeaderName};
pub use negotiate::{apply, ConnectionConfig, TlsConnectConfig};
pub use tls::{AlpnProtocol, AlpsProtocol, CertCompressionAlg, TlsOptions, TlsVersion};
