//! Chrome browser profiles.
//!
//! Chrome is the reference Chromium fingerprint; Edge and Opera reuse the
//! shared helpers here and change branding only. Post-quantum curve
//! preferences changed across releases, so the curve list is keyed by
//! version.

use crate::emulation::http2::{
    PseudoId, PseudoOrder, SettingId, SettingsOrder, StreamDependency, StreamId,
};
use crate::emulation::profiles::{header_block, orig_header_list, Os};
use crate::emulation::{Emulation, EmulationFactory, Http2Options};
use crate::http::OrderedHeaderMap;
use crate::tls::{AlpnProtocol, AlpsProtocol, CertCompressionAlg, TlsOptions, TlsVersion};

/// Chrome browser versions for emulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Chrome {
    /// Chrome 120
    V120,
    /// Chrome 124
    V124,
    /// Chrome 128
    V128,
    /// Chrome 131
    V131,
    /// Chrome 134
    V134,
    /// Chrome 137
    V137,
    /// Chrome 140 (latest)
    V140,
}

impl Default for Chrome {
    fn default() -> Self {
        Chrome::V140
    }
}

impl Chrome {
    /// Full version string used in the User-Agent.
    pub fn version_string(self) -> &'static str {
        match self {
            Chrome::V120 => "120.0.0.0",
            Chrome::V124 => "124.0.0.0",
            Chrome::V128 => "128.0.0.0",
            Chrome::V131 => "131.0.0.0",
            Chrome::V134 => "134.0.0.0",
            Chrome::V137 => "137.0.0.0",
            Chrome::V140 => "140.0.0.0",
        }
    }

    /// Get all supported versions.
    pub fn all_versions() -> &'static [Chrome] {
        &[
            Chrome::V120,
            Chrome::V124,
            Chrome::V128,
            Chrome::V131,
            Chrome::V134,
            Chrome::V137,
            Chrome::V140,
        ]
    }

    /// Curve preference list for this release.
    ///
    /// 124 introduced Kyber768 hybrid key exchange, 131 replaced it with
    /// the standardized ML-KEM hybrid.
    fn curves(self) -> &'static str {
        match self {
            Chrome::V120 => "X25519:P-256:P-384",
            Chrome::V124 | Chrome::V128 => "X25519Kyber768Draft00:X25519:P-256:P-384",
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
            "\"Chromium\";v=\"{major}\", \"Google Chrome\";v=\"{major}\", \"Not=A?Brand\";v=\"24\""
        );
        Emulation::builder()
            .tls_options(chromium_tls_options(
                self.curves(),
                matches!(self, Chrome::V137 | Chrome::V140),
            ))
            .http2_options(chromium_http2_options())
            .headers(chromium_headers(
                &chromium_ua(self.version_string(), os),
                &sec_ch_ua,
                os,
            ))
            .orig_header_names(orig_header_list(CHROMIUM_ORIG_HEADERS))
            .build()
    }
}

impl EmulationFactory for Chrome {
    fn emulation(self) -> Emulation {
        self.emulation_for(Os::Windows)
    }
}

const CHROMIUM_CIPHERS: &str = "TLS_AES_128_GCM_SHA256:TLS_AES_256_GCM_SHA384:\
    TLS_CHACHA20_POLY1305_SHA256:\
    ECDHE-ECDSA-AES128-GCM-SHA256:ECDHE-RSA-AES128-GCM-SHA256:\
    ECDHE-ECDSA-AES256-GCM-SHA384:ECDHE-RSA-AES256-GCM-SHA384:\
    ECDHE-ECDSA-CHACHA20-POLY1305:ECDHE-RSA-CHACHA20-POLY1305:\
    ECDHE-RSA-AES128-SHA:ECDHE-RSA-AES256-SHA:\
    AES128-GCM-SHA256:AES256-GCM-SHA384:AES128-SHA:AES256-SHA";

const CHROMIUM_SIGALGS: &str = "ecdsa_secp256r1_sha256:rsa_pss_rsae_sha256:rsa_pkcs1_sha256:\
    ecdsa_secp384r1_sha384:rsa_pss_rsae_sha384:rsa_pkcs1_sha384:\
    rsa_pss_rsae_sha512:rsa_pkcs1_sha512";

/// Wire order and casing of a Chromium navigation request over HTTP/1.1.
pub(crate) const CHROMIUM_ORIG_HEADERS: &[&str] = &[
    "sec-ch-ua",
    "sec-ch-ua-mobile",
    "sec-ch-ua-platform",
    "Upgrade-Insecure-Requests",
    "User-Agent",
    "Accept",
    "Sec-Fetch-Site",
    "Sec-Fetch-Mode",
    "Sec-Fetch-User",
    "Sec-Fetch-Dest",
    "Accept-Encoding",
    "Accept-Language",
];

/// Shared Chromium ClientHello shape.
pub(crate) fn chromium_tls_options(curves: &str, alps_new_codepoint: bool) -> TlsOptions {
    TlsOptions::builder()
        .alpn_protocols([AlpnProtocol::Http2, AlpnProtocol::Http1])
        .alps_protocols([AlpsProtocol::Http2])
        .alps_use_new_codepoint(alps_new_codepoint)
        .min_tls_version(TlsVersion::TLS_1_2)
        .max_tls_version(TlsVersion::TLS_1_3)
        .cipher_list(CHROMIUM_CIPHERS)
        .curves_list(curves)
        .sigalgs_list(CHROMIUM_SIGALGS)
        .certificate_compression_algorithms([CertCompressionAlg::Brotli])
        .grease_enabled(true)
        .permute_extensions(true)
        .enable_ech_grease(true)
        .enable_ocsp_stapling(true)
        .enable_signed_cert_timestamps(true)
        .session_ticket(true)
        .pre_shared_key(true)
        .build()
}

/// Shared Chromium HTTP/2 shape.
pub(crate) fn chromium_http2_options() -> Http2Options {
    Http2Options::builder()
        .initial_window_size(6291456)
        .initial_connection_window_size(15728640)
        .header_table_size(65536)
        .max_header_list_size(262144)
        .max_concurrent_streams(1000)
        .enable_push(false)
        .headers_stream_dependency(StreamDependency::new(StreamId::ZERO, 255, true))
        .headers_pseudo_order(
            PseudoOrder::builder()
                .push(PseudoId::Method)
                .push(PseudoId::Authority)
                .push(PseudoId::Scheme)
                .push(PseudoId::Path)
                .build(),
        )
        .settings_order(
            SettingsOrder::builder()
                .push(SettingId::HeaderTableSize)
                .push(SettingId::EnablePush)
                .push(SettingId::MaxConcurrentStreams)
                .push(SettingId::InitialWindowSize)
                .push(SettingId::MaxFrameSize)
                .push(SettingId::MaxHeaderListSize)
                .build(),
        )
        .build()
}

/// Chromium User-Agent line for a version and OS.
///
/// Mobile builds carry the `Mobile` token before the Safari suffix, matching
/// the `sec-ch-ua-mobile: ?1` hint the same overlay produces.
pub(crate) fn chromium_ua(version: &str, os: Os) -> String {
    let mobile = if os.is_mobile() { " Mobile" } else { "" };
    format!(
        "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{version}{mobile} Safari/537.36",
        os.chromium_ua_platform(),
    )
}

/// Shared Chromium navigation headers with per-OS hints. The User-Agent is
/// passed in whole so rebranded builds (Edge, Opera) can extend it.
pub(crate) fn chromium_headers(ua: &str, sec_ch_ua: &str, os: Os) -> OrderedHeaderMap {
    let mobile = if os.is_mobile() { "?1" } else { "?0" };

    header_block(&[
        ("sec-ch-ua", sec_ch_ua),
        ("sec-ch-ua-mobile", mobile),
        ("sec-ch-ua-platform", os.sec_ch_ua_platform()),
        ("Upgrade-Insecure-Requests", "1"),
        ("User-Agent", ua),
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,\
             image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7",
        ),
        ("Sec-Fetch-Site", "none"),
        ("Sec-Fetch-Mode", "navigate"),
        ("Sec-Fetch-User", "?1"),
        ("Sec-Fetch-Dest", "document"),
        ("Accept-Encoding", "gzip, deflate, br, zstd"),
        ("Accept-Language", "en-US,en;q=0.9"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curves_by_version() {
        assert_eq!(Chrome::V120.curves(), "X25519:P-256:P-384");
        assert!(Chrome::V124.curves().starts_with("X25519Kyber768Draft00"));
        assert!(Chrome::V131.curves().starts_with("X25519MLKEM768"));
        assert!(Chrome::V140.curves().starts_with("X25519MLKEM768"));
    }

    #[test]
    fn test_emulation_shape() {
        let emu = Chrome::V131.emulation_for(Os::Windows);
        let tls = emu.tls_options().unwrap();
        assert_eq!(tls.grease_enabled, Some(true));
        assert_eq!(tls.permute_extensions, Some(true));

        let h2 = emu.http2_options().unwrap();
        assert_eq!(h2.initial_window_size, Some(6291456));
        assert_eq!(h2.enable_push, Some(false));

        let ua = emu.headers().get("user-agent").unwrap();
        assert!(ua.to_str().unwrap().contains("Chrome/131.0.0.0"));
        assert!(emu.orig_headers().is_some());
    }

    #[test]
    fn test_mobile_overlay_agrees_with_hints() {
        let android = Chrome::V131.emulation_for(Os::Android);
        let ua = android.headers().get("user-agent").unwrap().to_str().unwrap();
        assert!(ua.contains("Chrome/131.0.0.0 Mobile Safari/537.36"));
        assert_eq!(android.headers().get("sec-ch-ua-mobile").unwrap(), "?1");

        let desktop = Chrome::V131.emulation_for(Os::Windows);
        let ua = desktop.headers().get("user-agent").unwrap().to_str().unwrap();
        assert!(!ua.contains("Mobile"));
        assert_eq!(desktop.headers().get("sec-ch-ua-mobile").unwrap(), "?0");
    }

    #[test]
    fn test_os_overlay_changes_headers_only() {
        let win = Chrome::V131.emulation_for(Os::Windows);
        let mac = Chrome::V131.emulation_for(Os::MacOs);
        assert_ne!(
            win.headers().get("user-agent"),
            mac.headers().get("user-agent")
        );
        assert_eq!(
            win.http2_options().unwrap().initial_window_size,
            mac.http2_options().unwrap().initial_window_size
        );
        assert_eq!(
            win.tls_options().unwrap().curves_list,
            mac.tls_options().unwrap().curves_list
        );
    }
}
