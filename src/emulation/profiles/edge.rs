//! Microsoft Edge browser profiles.
//!
//! Edge is Chromium with different branding: the ClientHello and HTTP/2
//! shape are identical to the matching Chrome release, only the User-Agent
//! and `sec-ch-ua` brand list differ.

use crate::emulation::profiles::chrome::{
    chromium_headers, chromium_http2_options, chromium_tls_options, chromium_ua,
    CHROMIUM_ORIG_HEADERS,
};
use crate::emulation::profiles::{orig_header_list, Os};
use crate::emulation::{Emulation, EmulationFactory};

/// Edge browser versions for emulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Edge {
    /// Edge 127
    V127,
    /// Edge 131
    V131,
    /// Edge 134
    V134,
    /// Edge 140 (latest)
    V140,
}

impl Default for Edge {
    fn default() -> Self {
        Edge::V140
    }
}

impl Edge {
    /// Full version string used in the User-Agent.
    pub fn version_string(self) -> &'static str {
        match self {
            Edge::V127 => "127.0.0.0",
            Edge::V131 => "131.0.0.0",
            Edge::V134 => "134.0.0.0",
            Edge::V140 => "140.0.0.0",
        }
    }

    /// Get all supported versions.
    pub fn all_versions() -> &'static [Edge] {
        &[Edge::V127, Edge::V131, Edge::V134, Edge::V140]
    }

    fn curves(self) -> &'static str {
        match self {
            Edge::V127 => "X25519Kyber768Draft00:X25519:P-256:P-384",
            _ => "X25519MLKEM768:X25519:P-256:P-384",
        }
    }

    /// Build the emulation for this version with an OS overlay.
    pub fn emulation_for(self, os: Os) -> Emulation {
        let major = match self.version_string().split('.').next() {
            Some(m) => m,
            None => "140",
        };
        let sec_ch_ua = format!(
            "\"Chromium\";v=\"{major}\", \"Microsoft Edge\";v=\"{major}\", \"Not=A?Brand\";v=\"24\""
        );
        let ua = format!(
            "{} Edg/{}",
            chromium_ua(self.version_string(), os),
            self.version_string()
        );

        Emulation::builder()
            .tls_options(chromium_tls_options(self.curves(), matches!(self, Edge::V140)))
            .http2_options(chromium_http2_options())
            .headers(chromium_headers(&ua, &sec_ch_ua, os))
            .orig_header_names(orig_header_list(CHROMIUM_ORIG_HEADERS))
            .build()
    }
}

impl EmulationFactory for Edge {
    fn emulation(self) -> Emulation {
        self.emulation_for(Os::Windows)
    }
}
