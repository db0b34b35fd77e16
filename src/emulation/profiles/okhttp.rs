//! OkHttp client profiles.
//!
//! OkHttp is a programmatic client, not a browser: a short header block,
//! no GREASE permutation games, and a large initial window. OkHttp 3 never
//! offers TLS 1.3 suites in its default spec; 4 and later do.

use crate::emulation::http2::{PseudoId, PseudoOrder, SettingId, SettingsOrder};
use crate::emulation::profiles::{header_block, orig_header_list, Os};
use crate::emulation::{Emulation, EmulationFactory, Http2Options};
use crate::http::OrderedHeaderMap;
use crate::tls::{AlpnProtocol, TlsOptions, TlsVersion};

/// OkHttp client versions for emulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum OkHttp {
    /// OkHttp 3.14
    V3_14,
    /// OkHttp 4.10
    V4_10,
    /// OkHttp 4.12
    V4_12,
    /// OkHttp 5 (latest)
    V5,
}

impl Default for OkHttp {
    fn default() -> Self {
        OkHttp::V5
    }
}

impl OkHttp {
    /// Version string used in the User-Agent.
    pub fn version_string(self) -> &'static str {
        match self {
            OkHttp::V3_14 => "3.14.9",
            OkHttp::V4_10 => "4.10.0",
            OkHttp::V4_12 => "4.12.0",
            OkHttp::V5 => "5.0.0",
        }
    }

    /// Get all supported versions.
    pub fn all_versions() -> &'static [OkHttp] {
        &[OkHttp::V3_14, OkHttp::V4_10, OkHttp::V4_12, OkHttp::V5]
    }

    fn ciphers(self) -> &'static str {
        match self {
            OkHttp::V3_14 => OKHTTP3_CIPHERS,
            _ => OKHTTP4_CIPHERS,
        }
    }

    pub(crate) fn emulation_for(self, _os: Os) -> Emulation {
        Emulation::builder()
            .tls_options(okhttp_tls_options(self.ciphers()))
            .http2_options(okhttp_http2_options())
            .headers(okhttp_headers(self.version_string()))
            .orig_header_names(orig_header_list(OKHTTP_ORIG_HEADERS))
            .build()
    }
}

impl EmulationFactory for OkHttp {
    fn emulation(self) -> Emulation {
        self.emulation_for(Os::Android)
    }
}

const OKHTTP3_CIPHERS: &str = "ECDHE-ECDSA-AES128-GCM-SHA256:\
    ECDHE-RSA-AES128-GCM-SHA256:ECDHE-ECDSA-AES256-GCM-SHA384:\
    ECDHE-RSA-AES256-GCM-SHA384:ECDHE-ECDSA-CHACHA20-POLY1305:\
    ECDHE-RSA-CHACHA20-POLY1305:ECDHE-ECDSA-AES128-SHA:\
    ECDHE-RSA-AES128-SHA:ECDHE-ECDSA-AES256-SHA:ECDHE-RSA-AES256-SHA:\
    AES128-GCM-SHA256:AES256-GCM-SHA384:AES128-SHA:AES256-SHA";

const OKHTTP4_CIPHERS: &str = "TLS_AES_128_GCM_SHA256:TLS_AES_256_GCM_SHA384:\
    TLS_CHACHA20_POLY1305_SHA256:ECDHE-ECDSA-AES128-GCM-SHA256:\
    ECDHE-RSA-AES128-GCM-SHA256:ECDHE-ECDSA-AES256-GCM-SHA384:\
    ECDHE-RSA-AES256-GCM-SHA384:ECDHE-ECDSA-CHACHA20-POLY1305:\
    ECDHE-RSA-CHACHA20-POLY1305:ECDHE-RSA-AES128-SHA:ECDHE-RSA-AES256-SHA:\
    AES128-GCM-SHA256:AES256-GCM-SHA384:AES128-SHA:AES256-SHA";

const OKHTTP_SIGALGS: &str = "ecdsa_secp256r1_sha256:rsa_pss_rsae_sha256:rsa_pkcs1_sha256:\
    ecdsa_secp384r1_sha384:rsa_pss_rsae_sha384:rsa_pkcs1_sha384:\
    rsa_pss_rsae_sha512:rsa_pkcs1_sha512:rsa_pkcs1_sha1";

const OKHTTP_ORIG_HEADERS: &[&str] = &["User-Agent", "Accept", "Accept-Encoding", "Connection"];

fn okhttp_tls_options(ciphers: &'static str) -> TlsOptions {
    TlsOptions::builder()
        .alpn_protocols([AlpnProtocol::Http2, AlpnProtocol::Http1])
        .min_tls_version(TlsVersion::TLS_1_2)
        .max_tls_version(TlsVersion::TLS_1_3)
        .cipher_list(ciphers)
        .curves_list("X25519:P-256:P-384")
        .sigalgs_list(OKHTTP_SIGALGS)
        .grease_enabled(false)
        .permute_extensions(false)
        .session_ticket(true)
        .build()
}

fn okhttp_http2_options() -> Http2Options {
    Http2Options::builder()
        .initial_window_size(16777216)
        .initial_connection_window_size(16777216)
        .max_concurrent_streams(100)
        .headers_pseudo_order(
            PseudoOrder::builder()
                .push(PseudoId::Method)
                .push(PseudoId::Path)
                .push(PseudoId::Authority)
                .push(PseudoId::Scheme)
                .build(),
        )
        .settings_order(
            SettingsOrder::builder()
                .push(SettingId::HeaderTableSize)
                .push(SettingId::MaxConcurrentStreams)
                .push(SettingId::InitialWindowSize)
                .build(),
        )
        .build()
}

fn okhttp_headers(version: &str) -> OrderedHeaderMap {
    let ua = format!("okhttp/{version}");
    header_block(&[
        ("User-Agent", &ua),
        ("Accept", "*/*"),
        ("Accept-Encoding", "gzip"),
        ("Connection", "keep-alive"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_okhttp3_has_no_tls13_suites() {
        assert!(!OkHttp::V3_14.ciphers().contains("TLS_AES_128_GCM_SHA256"));
        assert!(OkHttp::V4_12.ciphers().contains("TLS_AES_128_GCM_SHA256"));
    }

    #[test]
    fn test_minimal_header_block() {
        let emu = OkHttp::V4_12.emulation_for(Os::Android);
        assert_eq!(emu.headers().len(), 4);
        let ua = emu.headers().get("user-agent").unwrap();
        assert_eq!(ua, "okhttp/4.12.0");
    }

    #[test]
    fn test_large_initial_window() {
        let emu = OkHttp::V5.emulation_for(Os::Android);
        let h2 = emu.http2_options().unwrap();
        assert_eq!(h2.initial_window_size, Some(16777216));
    }
}
