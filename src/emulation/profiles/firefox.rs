//! Firefox browser profiles.
//!
//! Firefox uses NSS rather than BoringSSL, which shows in its ClientHello:
//! no GREASE, no extension permutation, delegated credentials, a record
//! size limit, and ffdhe groups in the curve list. Its HTTP/2 layer still
//! builds the classic RFC 7540 priority tree after the preface.

use crate::emulation::http2::{
    Priorities, Priority, PseudoId, PseudoOrder, SettingId, SettingsOrder, StreamDependency,
    StreamId,
};
use crate::emulation::profiles::{header_block, orig_header_list, Os};
use crate::emulation::{Emulation, EmulationFactory, Http2Options};
use crate::http::OrderedHeaderMap;
use crate::tls::{AlpnProtocol, CertCompressionAlg, TlsOptions, TlsVersion};

/// Firefox browser versions for emulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Firefox {
    /// Firefox 128 (ESR)
    V128,
    /// Firefox 133
    V133,
    /// Firefox 135
    V135,
    /// Firefox 139 (latest)
    V139,
}

impl Default for Firefox {
    fn default() -> Self {
        Firefox::V139
    }
}

impl Firefox {
    /// Version string used in the User-Agent.
    pub fn version_string(self) -> &'static str {
        match self {
            Firefox::V128 => "128.0",
            Firefox::V133 => "133.0",
            Firefox::V135 => "135.0",
            Firefox::V139 => "139.0",
        }
    }

    /// Get all supported versions.
    pub fn all_versions() -> &'static [Firefox] {
        &[Firefox::V128, Firefox::V133, Firefox::V135, Firefox::V139]
    }

    /// ML-KEM hybrid key exchange shipped in 132.
    fn curves(self) -> &'static str {
        match self {
            Firefox::V128 => "X25519:P-256:P-384:P-521:ffdhe2048:ffdhe3072",
            _ => "X25519MLKEM768:X25519:P-256:P-384:P-521:ffdhe2048:ffdhe3072",
        }
    }

    /// Build the emulation for this version with an OS overlay.
    pub fn emulation_for(self, os: Os) -> Emulation {
        Emulation::builder()
            .tls_options(firefox_tls_options(self.curves()))
            .http2_options(firefox_http2_options())
            .headers(firefox_headers(self.version_string(), os))
            .orig_header_names(orig_header_list(FIREFOX_ORIG_HEADERS))
            .build()
    }
}

impl EmulationFactory for Firefox {
    fn emulation(self) -> Emulation {
        self.emulation_for(Os::Windows)
    }
}

const FIREFOX_CIPHERS: &str = "TLS_AES_128_GCM_SHA256:TLS_CHACHA20_POLY1305_SHA256:\
    TLS_AES_256_GCM_SHA384:\
    ECDHE-ECDSA-AES128-GCM-SHA256:ECDHE-RSA-AES128-GCM-SHA256:\
    ECDHE-ECDSA-CHACHA20-POLY1305:ECDHE-RSA-CHACHA20-POLY1305:\
    ECDHE-ECDSA-AES256-GCM-SHA384:ECDHE-RSA-AES256-GCM-SHA384:\
    ECDHE-ECDSA-AES256-SHA:ECDHE-ECDSA-AES128-SHA:\
    ECDHE-RSA-AES128-SHA:ECDHE-RSA-AES256-SHA:\
    AES128-GCM-SHA256:AES256-GCM-SHA384:AES128-SHA:AES256-SHA";

const FIREFOX_SIGALGS: &str = "ecdsa_secp256r1_sha256:ecdsa_secp384r1_sha384:\
    ecdsa_secp521r1_sha512:rsa_pss_rsae_sha256:rsa_pss_rsae_sha384:rsa_pss_rsae_sha512:\
    rsa_pkcs1_sha256:rsa_pkcs1_sha384:rsa_pkcs1_sha512:ecdsa_sha1:rsa_pkcs1_sha1";

const FIREFOX_DELEGATED_CREDENTIALS: &str = "ecdsa_secp256r1_sha256:ecdsa_secp384r1_sha384:\
    ecdsa_secp521r1_sha512:ecdsa_sha1";

const FIREFOX_ORIG_HEADERS: &[&str] = &[
    "User-Agent",
    "Accept",
    "Accept-Language",
    "Accept-Encoding",
    "Upgrade-Insecure-Requests",
    "Sec-Fetch-Dest",
    "Sec-Fetch-Mode",
    "Sec-Fetch-Site",
    "Sec-Fetch-User",
    "Priority",
];

fn firefox_tls_options(curves: &str) -> TlsOptions {
    TlsOptions::builder()
        .alpn_protocols([AlpnProtocol::Http2, AlpnProtocol::Http1])
        .min_tls_version(TlsVersion::TLS_1_2)
        .max_tls_version(TlsVersion::TLS_1_3)
        .cipher_list(FIREFOX_CIPHERS)
        .curves_list(curves)
        .sigalgs_list(FIREFOX_SIGALGS)
        .delegated_credentials(FIREFOX_DELEGATED_CREDENTIALS)
        .certificate_compression_algorithms([
            CertCompressionAlg::Zlib,
            CertCompressionAlg::Brotli,
            CertCompressionAlg::Zstd,
        ])
        .record_size_limit(0x4001)
        .key_shares_limit(2)
        .grease_enabled(false)
        .permute_extensions(false)
        .enable_ech_grease(true)
        .enable_ocsp_stapling(true)
        .session_ticket(true)
        .psk_dhe_ke(false)
        .build()
}

fn firefox_http2_options() -> Http2Options {
    Http2Options::builder()
        .initial_window_size(131072)
        .initial_connection_window_size(12582912)
        .header_table_size(65536)
        .max_frame_size(16384)
        .initial_stream_id(15)
        .headers_stream_dependency(StreamDependency::new(StreamId::from(13), 41, false))
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
                .push(SettingId::InitialWindowSize)
                .push(SettingId::MaxFrameSize)
                .build(),
        )
        .priorities(
            Priorities::builder()
                .push(Priority::new(
                    StreamId::from(3),
                    StreamDependency::new(StreamId::ZERO, 200, false),
                ))
                .push(Priority::new(
                    StreamId::from(5),
                    StreamDependency::new(StreamId::ZERO, 100, false),
                ))
                .push(Priority::new(
                    StreamId::from(7),
                    StreamDependency::new(StreamId::ZERO, 0, false),
                ))
                .push(Priority::new(
                    StreamId::from(9),
                    StreamDependency::new(StreamId::from(7), 0, false),
                ))
                .push(Priority::new(
                    StreamId::from(11),
                    StreamDependency::new(StreamId::from(3), 0, false),
                ))
                .push(Priority::new(
                    StreamId::from(13),
                    StreamDependency::new(StreamId::ZERO, 240, false),
                ))
                .build(),
        )
        .build()
}

fn firefox_headers(version: &str, os: Os) -> OrderedHeaderMap {
    let ua = match os {
        Os::Windows => format!(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:{version}) Gecko/20100101 Firefox/{version}"
        ),
        Os::MacOs => format!(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:{version}) Gecko/20100101 Firefox/{version}"
        ),
        Os::Linux => format!(
            "Mozilla/5.0 (X11; Linux x86_64; rv:{version}) Gecko/20100101 Firefox/{version}"
        ),
        Os::Android => format!(
            "Mozilla/5.0 (Android 13; Mobile; rv:{version}) Gecko/{version} Firefox/{version}"
        ),
        Os::Ios => format!(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_7 like Mac OS X) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) FxiOS/{version} Mobile/15E148 Safari/605.1.15"
        ),
    };

    header_block(&[
        ("User-Agent", &ua),
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,\
             image/png,image/svg+xml,*/*;q=0.8",
        ),
        ("Accept-Language", "en-US,en;q=0.5"),
        ("Accept-Encoding", "gzip, deflate, br, zstd"),
        ("Upgrade-Insecure-Requests", "1"),
        ("Sec-Fetch-Dest", "document"),
        ("Sec-Fetch-Mode", "navigate"),
        ("Sec-Fetch-Site", "none"),
        ("Sec-Fetch-User", "?1"),
        ("Priority", "u=0, i"),
    ])
}
