//! Safari browser profiles.
//!
//! Safari's ClientHello keeps TLS 1.0 in the offered range, disables
//! session tickets, prefers a shorter curve list, and only advertises zlib
//! certificate compression. The `:status`-less pseudo order M,S,P,A is a
//! reliable WebKit tell.

use crate::emulation::http2::{PseudoId, PseudoOrder, SettingId, SettingsOrder};
use crate::emulation::profiles::{header_block, orig_header_list, Os};
use crate::emulation::{Emulation, EmulationFactory, Http2Options};
use crate::http::OrderedHeaderMap;
use crate::tls::{AlpnProtocol, CertCompressionAlg, TlsOptions, TlsVersion};

/// Safari browser versions for emulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Safari {
    /// Safari 17.5
    V17_5,
    /// Safari 18
    V18,
    /// Safari 18.5 (latest)
    V18_5,
}

impl Default for Safari {
    fn default() -> Self {
        Safari::V18_5
    }
}

impl Safari {
    /// Version string used in the User-Agent.
    pub fn version_string(self) -> &'static str {
        match self {
            Safari::V17_5 => "17.5",
            Safari::V18 => "18.0",
            Safari::V18_5 => "18.5",
        }
    }

    /// Get all supported versions.
    pub fn all_versions() -> &'static [Safari] {
        &[Safari::V17_5, Safari::V18, Safari::V18_5]
    }

    /// Build the emulation for this version with an OS overlay.
    pub fn emulation_for(self, os: Os) -> Emulation {
        Emulation::builder()
            .tls_options(safari_tls_options())
            .http2_options(safari_http2_options())
            .headers(safari_headers(self.version_string(), os))
            .orig_header_names(orig_header_list(SAFARI_ORIG_HEADERS))
            .build()
    }
}

impl EmulationFactory for Safari {
    fn emulation(self) -> Emulation {
        self.emulation_for(Os::MacOs)
    }
}

const SAFARI_CIPHERS: &str = "TLS_AES_128_GCM_SHA256:TLS_AES_256_GCM_SHA384:\
    TLS_CHACHA20_POLY1305_SHA256:\
    ECDHE-ECDSA-AES256-GCM-SHA384:ECDHE-ECDSA-AES128-GCM-SHA256:\
    ECDHE-ECDSA-CHACHA20-POLY1305:\
    ECDHE-RSA-AES256-GCM-SHA384:ECDHE-RSA-AES128-GCM-SHA256:\
    ECDHE-RSA-CHACHA20-POLY1305:\
    ECDHE-ECDSA-AES256-SHA:ECDHE-ECDSA-AES128-SHA:\
    ECDHE-RSA-AES256-SHA:ECDHE-RSA-AES128-SHA:\
    AES256-GCM-SHA384:AES128-GCM-SHA256:AES256-SHA:AES128-SHA";

const SAFARI_SIGALGS: &str = "ecdsa_secp256r1_sha256:rsa_pss_rsae_sha256:rsa_pkcs1_sha256:\
    ecdsa_secp384r1_sha384:ecdsa_sha1:rsa_pss_rsae_sha384:rsa_pss_rsae_sha384:\
    rsa_pkcs1_sha384:rsa_pss_rsae_sha512:rsa_pkcs1_sha512:rsa_pkcs1_sha1";

const SAFARI_ORIG_HEADERS: &[&str] = &[
    "Accept",
    "Sec-Fetch-Site",
    "Accept-Encoding",
    "Sec-Fetch-Mode",
    "User-Agent",
    "Accept-Language",
    "Sec-Fetch-Dest",
    "Priority",
];

fn safari_tls_options() -> TlsOptions {
    TlsOptions::builder()
        .alpn_protocols([AlpnProtocol::Http2, AlpnProtocol::Http1])
        .min_tls_version(TlsVersion::TLS_1_0)
        .max_tls_version(TlsVersion::TLS_1_3)
        .cipher_list(SAFARI_CIPHERS)
        .curves_list("X25519:P-256:P-384:P-521")
        .sigalgs_list(SAFARI_SIGALGS)
        .certificate_compression_algorithms([CertCompressionAlg::Zlib])
        .grease_enabled(true)
        .permute_extensions(false)
        .enable_ocsp_stapling(true)
        .enable_signed_cert_timestamps(true)
        .session_ticket(false)
        .build()
}

fn safari_http2_options() -> Http2Options {
    Http2Options::builder()
        .initial_window_size(4194304)
        .initial_connection_window_size(10551295)
        .header_table_size(4096)
        .max_concurrent_streams(100)
        .enable_push(false)
        .headers_pseudo_order(
            PseudoOrder::builder()
                .push(PseudoId::Method)
                .push(PseudoId::Scheme)
                .push(PseudoId::Path)
                .push(PseudoId::Authority)
                .build(),
        )
        .settings_order(
            SettingsOrder::builder()
                .push(SettingId::EnablePush)
                .push(SettingId::InitialWindowSize)
                .push(SettingId::MaxConcurrentStreams)
                .build(),
        )
        .build()
}

fn safari_headers(version: &str, os: Os) -> OrderedHeaderMap {
    let ua = if os == Os::Ios {
        format!(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_7 like Mac OS X) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/{version} Mobile/15E148 Safari/604.1"
        )
    } else {
        format!(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/{version} Safari/605.1.15"
        )
    };

    header_block(&[
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        ),
        ("Sec-Fetch-Site", "none"),
        ("Accept-Encoding", "gzip, deflate, br"),
        ("Sec-Fetch-Mode", "navigate"),
        ("User-Agent", &ua),
        ("Accept-Language", "en-US,en;q=0.9"),
        ("Sec-Fetch-Dest", "document"),
        ("Priority", "u=0, i"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safari_tls_shape() {
        let emu = Safari::V18.emulation_for(Os::MacOs);
        let tls = emu.tls_options().unwrap();
        assert_eq!(tls.min_tls_version, Some(TlsVersion::TLS_1_0));
        assert_eq!(tls.session_ticket, Some(false));
        assert_eq!(
            tls.certificate_compression_algorithms.as_deref(),
            Some(&[CertCompressionAlg::Zlib][..])
        );
    }

    #[test]
    fn test_ios_overlay_changes_user_agent() {
        let mac = Safari::V18.emulation_for(Os::MacOs);
        let ios = Safari::V18.emulation_for(Os::Ios);
        let mac_ua = mac.headers().get("user-agent").unwrap();
        let ios_ua = ios.headers().get("user-agent").unwrap();
        assert!(mac_ua.to_str().unwrap().contains("Macintosh"));
        assert!(ios_ua.to_str().unwrap().contains("iPhone"));
    }

    #[test]
    fn test_safari_h2_table_size() {
        let emu = Safari::V18_5.emulation_for(Os::MacOs);
        let h2 = emu.http2_options().unwrap();
        assert_eq!(h2.header_table_size, Some(4096));
        assert_eq!(h2.max_concurrent_streams, Some(100));
    }
}
