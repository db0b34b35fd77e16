//! Browser emulation module.
//!
//! Provides browser fingerprint emulation combining:
//! - TLS fingerprinting (cipher suites, extensions, curves)
//! - HTTP/1.1 options
//! - HTTP/2 fingerprinting (settings order, priorities, pseudo-order)
//! - Default headers in exact wire order and casing

pub mod http1;
pub mod http2;
pub mod profiles;
pub mod resolve;

pub use http1::{Http1Options, Http1OptionsBuilder};
pub use http2::{Http2Options, Http2OptionsBuilder};
pub use profiles::{Os, Profile};
pub use resolve::{resolve, EffectiveParameters};

use crate::base::Result;
use crate::http::{OrderedHeaderMap, OrigHeaderName};
use crate::tls::{AlpnProtocol, TlsOptions};

/// Factory trait for creating emulation configurations.
///
/// Allows different types (profile enums, option records) to provide
/// emulation configurations. Implemented by the predefined browser profiles
/// and by the options types themselves for one-off partial configs.
pub trait EmulationFactory {
    /// Create an [`Emulation`] from this factory.
    fn emulation(self) -> Emulation;
}

/// HTTP emulation configuration for mimicking a specific client.
///
/// Combines TLS, HTTP/1.1, and HTTP/2 options with default headers and an
/// optional wire-order/casing template. All parameter blocks are optional;
/// an unset block inherits the next precedence level during resolution.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct Emulation {
    /// TLS fingerprint options.
    pub tls_options: Option<TlsOptions>,
    /// HTTP/1.1 protocol options.
    pub http1_options: Option<Http1Options>,
    /// HTTP/2 protocol options.
    pub http2_options: Option<Http2Options>,
    /// Default headers, in wire order with original casing.
    pub headers: OrderedHeaderMap,
    /// Literal header casing/order template for HTTP/1 emission.
    pub orig_headers: Option<Vec<OrigHeaderName>>,
}

impl Emulation {
    /// Create a new builder.
    #[inline]
    pub fn builder() -> EmulationBuilder {
        EmulationBuilder::default()
    }

    #[inline]
    pub fn tls_options(&self) -> Option<&TlsOptions> {
        self.tls_options.as_ref()
    }

    #[inline]
    pub fn http1_options(&self) -> Option<&Http1Options> {
        self.http1_options.as_ref()
    }

    #[inline]
    pub fn http2_options(&self) -> Option<&Http2Options> {
        self.http2_options.as_ref()
    }

    #[inline]
    pub fn headers(&self) -> &OrderedHeaderMap {
        &self.headers
    }

    #[inline]
    pub fn orig_headers(&self) -> Option<&[OrigHeaderName]> {
        self.orig_headers.as_deref()
    }
}

/// Builder for [`Emulation`].
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct EmulationBuilder {
    emulation: Emulation,
}

impl EmulationBuilder {
    #[inline]
    pub fn tls_options(mut self, opts: TlsOptions) -> Self {
        self.emulation.tls_options = Some(opts);
        self
    }

    #[inline]
    pub fn http1_options(mut self, opts: Http1Options) -> Self {
        self.emulation.http1_options = Some(opts);
        self
    }

    #[inline]
    pub fn http2_options(mut self, opts: Http2Options) -> Self {
        self.emulation.http2_options = Some(opts);
        self
    }

    #[inline]
    pub fn headers(mut self, headers: OrderedHeaderMap) -> Self {
        self.emulation.headers = headers;
        self
    }

    /// Add a single default header.
    ///
    /// Fails with [`Error::MalformedHeaderName`](crate::base::Error::MalformedHeaderName)
    /// or [`Error::MalformedHeaderValue`](crate::base::Error::MalformedHeaderValue)
    /// at mutation time, before any connection is attempted.
    #[inline]
    pub fn header(mut self, name: &str, value: &str) -> Result<Self> {
        self.emulation.headers.insert(name, value)?;
        Ok(self)
    }

    /// Set the literal header casing/order template from raw names.
    ///
    /// Fails with [`Error::MalformedHeaderName`](crate::base::Error::MalformedHeaderName)
    /// on the first invalid name.
    pub fn orig_headers<'a, I>(mut self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.emulation.orig_headers = Some(
            names
                .into_iter()
                .map(OrigHeaderName::new)
                .collect::<Result<Vec<_>>>()?,
        );
        Ok(self)
    }

    /// Set the casing/order template from already-validated names.
    pub fn orig_header_names<I>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = OrigHeaderName>,
    {
        self.emulation.orig_headers = Some(names.into_iter().collect());
        self
    }

    #[inline]
    pub fn build(self) -> Emulation {
        self.emulation
    }
}

impl EmulationFactory for Emulation {
    #[inline]
    fn emulation(self) -> Emulation {
        self
    }
}

impl EmulationFactory for TlsOptions {
    #[inline]
    fn emulation(self) -> Emulation {
        Emulation::builder().tls_options(self).build()
    }
}

impl EmulationFactory for Http1Options {
    #[inline]
    fn emulation(self) -> Emulation {
        Emulation::builder().http1_options(self).build()
    }
}

impl EmulationFactory for Http2Options {
    #[inline]
    fn emulation(self) -> Emulation {
        Emulation::builder().http2_options(self).build()
    }
}

/// A profile reference with optional OS overlay and per-use flags.
///
/// Used at client or request granularity to select a catalogued profile
/// while tweaking how it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmulationOption {
    /// The catalogued profile to emulate.
    pub emulation: Profile,
    /// OS overlay; `None` uses the profile family's native OS.
    pub emulation_os: Option<Os>,
    /// Apply the profile's default headers (on by default).
    pub default_headers: bool,
    /// Drop HTTP/2 emulation and advertise HTTP/1.1 only.
    pub skip_http2: bool,
}

impl EmulationOption {
    pub fn builder() -> EmulationOptionBuilder {
        EmulationOptionBuilder::default()
    }
}

impl Default for EmulationOption {
    fn default() -> Self {
        Self {
            emulation: Profile::default(),
            emulation_os: None,
            default_headers: true,
            skip_http2: false,
        }
    }
}

/// Builder for [`EmulationOption`].
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct EmulationOptionBuilder {
    option: EmulationOption,
}

impl EmulationOptionBuilder {
    pub fn emulation(mut self, profile: Profile) -> Self {
        self.option.emulation = profile;
        self
    }

    pub fn emulation_os(mut self, os: Os) -> Self {
        self.option.emulation_os = Some(os);
        self
    }

    pub fn default_headers(mut self, enabled: bool) -> Self {
        self.option.default_headers = enabled;
        self
    }

    pub fn skip_http2(mut self, enabled: bool) -> Self {
        self.option.skip_http2 = enabled;
        self
    }

    pub fn build(self) -> EmulationOption {
        self.option
    }
}

impl EmulationFactory for EmulationOption {
    fn emulation(self) -> Emulation {
        let os = self
            .emulation_os
            .unwrap_or_else(|| self.emulation.native_os());
        let mut emulation = self.emulation.emulation_for(os);

        if self.skip_http2 {
            emulation.http2_options = None;
            if let Some(tls) = emulation.tls_options.as_mut() {
                tls.alpn_protocols = Some(vec![AlpnProtocol::Http1]);
                tls.alps_protocols = None;
            }
        }
        if !self.default_headers {
            emulation.headers.clear();
            emulation.orig_headers = None;
        }
        emulation
    }
}

impl EmulationFactory for Profile {
    #[inline]
    fn emulation(self) -> Emulation {
        self.emulation_for(self.native_os())
    }
}
