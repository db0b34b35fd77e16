//! TLS fingerprint parameter types.
//!
//! Pure data describing a ClientHello shape: versions, ALPN/ALPS, cipher and
//! curve preference strings, GREASE and extension behavior. Nothing here
//! touches a socket; the negotiation applier (see [`crate::negotiate`])
//! projects these values onto a BoringSSL connector.

pub mod options;

use std::fmt;

pub use options::{TlsOptions, TlsOptionsBuilder};

/// TLS protocol version, ordered by wire codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TlsVersion(u16);

impl TlsVersion {
    pub const TLS_1_0: TlsVersion = TlsVersion(0x0301);
    pub const TLS_1_1: TlsVersion = TlsVersion(0x0302);
    pub const TLS_1_2: TlsVersion = TlsVersion(0x0303);
    pub const TLS_1_3: TlsVersion = TlsVersion(0x0304);

    /// The wire codepoint for this version.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for TlsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TlsVersion::TLS_1_0 => f.write_str("TLSv1.0"),
            TlsVersion::TLS_1_1 => f.write_str("TLSv1.1"),
            TlsVersion::TLS_1_2 => f.write_str("TLSv1.2"),
            TlsVersion::TLS_1_3 => f.write_str("TLSv1.3"),
            TlsVersion(other) => write!(f, "TLS(0x{other:04x})"),
        }
    }
}

/// Application-Layer Protocol Negotiation identifier (RFC 7301).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlpnProtocol {
    /// `http/1.1`
    Http1,
    /// `h2`
    Http2,
    /// `h3`
    Http3,
}

impl AlpnProtocol {
    pub const fn as_str(self) -> &'static str {
        match self {
            AlpnProtocol::Http1 => "http/1.1",
            AlpnProtocol::Http2 => "h2",
            AlpnProtocol::Http3 => "h3",
        }
    }

    /// Encode a protocol list into the length-prefixed ALPN wire format.
    pub fn encode_list(protocols: &[AlpnProtocol]) -> Vec<u8> {
        let mut wire = Vec::with_capacity(protocols.len() * 9);
        for proto in protocols {
            let bytes = proto.as_str().as_bytes();
            wire.push(bytes.len() as u8);
            wire.extend_from_slice(bytes);
        }
        wire
    }
}

/// Application-Layer Protocol Settings identifier.
///
/// ALPS exchanges application settings inside the TLS handshake for a
/// protocol negotiated via ALPN; Chromium sends it for `h2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlpsProtocol {
    Http1,
    Http2,
}

impl AlpsProtocol {
    pub const fn as_str(self) -> &'static str {
        match self {
            AlpsProtocol::Http1 => "http/1.1",
            AlpsProtocol::Http2 => "h2",
        }
    }
}

/// Certificate compression algorithm (RFC 8879).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CertCompressionAlg {
    Zlib,
    Brotli,
    Zstd,
}

/// ClientHello extension codepoint, used for extension-order permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtensionType(pub u16);

impl ExtensionType {
    pub const SERVER_NAME: ExtensionType = ExtensionType(0);
    pub const STATUS_REQUEST: ExtensionType = ExtensionType(5);
    pub const SUPPORTED_GROUPS: ExtensionType = ExtensionType(10);
    pub const EC_POINT_FORMATS: ExtensionType = ExtensionType(11);
    pub const SIGNATURE_ALGORITHMS: ExtensionType = ExtensionType(13);
    pub const ALPN: ExtensionType = ExtensionType(16);
    pub const CERTIFICATE_TIMESTAMP: ExtensionType = ExtensionType(18);
    pub const PADDING: ExtensionType = ExtensionType(21);
    pub const EXTENDED_MASTER_SECRET: ExtensionType = ExtensionType(23);
    pub const RECORD_SIZE_LIMIT: ExtensionType = ExtensionType(28);
    pub const DELEGATED_CREDENTIAL: ExtensionType = ExtensionType(34);
    pub const SESSION_TICKET: ExtensionType = ExtensionType(35);
    pub const CERT_COMPRESSION: ExtensionType = ExtensionType(27);
    pub const PRE_SHARED_KEY: ExtensionType = ExtensionType(41);
    pub const EARLY_DATA: ExtensionType = ExtensionType(42);
    pub const SUPPORTED_VERSIONS: ExtensionType = ExtensionType(43);
    pub const PSK_KEY_EXCHANGE_MODES: ExtensionType = ExtensionType(45);
    pub const KEY_SHARE: ExtensionType = ExtensionType(51);
    pub const APPLICATION_SETTINGS: ExtensionType = ExtensionType(17513);
    pub const APPLICATION_SETTINGS_NEW: ExtensionType = ExtensionType(17613);
    pub const ENCRYPTED_CLIENT_HELLO: ExtensionType = ExtensionType(0xfe0d);
    pub const RENEGOTIATE: ExtensionType = ExtensionType(0xff01);
}
