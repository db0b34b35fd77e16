use thiserror::Error;

use crate::tls::TlsVersion;

/// Errors surfaced while building or resolving an emulation configuration.
///
/// Everything here is detected synchronously at configuration time, before
/// any connection attempt. Transport-level failures (handshake rejection,
/// cipher-string parse errors inside BoringSSL, connection refused) are the
/// transport layer's concern and never mapped into this enum.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested profile key is not in the registry.
    #[error("unknown emulation profile: {0:?}")]
    UnknownProfile(String),

    /// Merged TLS version bounds are inverted (min > max).
    #[error("conflicting TLS version bounds: min {min} > max {max}")]
    ConflictingVersionBounds { min: TlsVersion, max: TlsVersion },

    /// Header name contains bytes that are invalid on the wire.
    #[error("malformed header name")]
    MalformedHeaderName,

    /// Header value contains bytes that are invalid on the wire.
    #[error("malformed header value")]
    MalformedHeaderValue,

    /// BoringSSL rejected part of the connector configuration.
    #[error("SSL protocol error")]
    SslProtocolError,
}

pub type Result<T> = std::result::Result<T, Error>;
