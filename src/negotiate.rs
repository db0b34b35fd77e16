//! Negotiation applier.
//!
//! Projects resolved emulation parameters onto concrete connection
//! configuration: a BoringSSL connector shape for the handshake, protocol
//! option blocks for the HTTP/1 and HTTP/2 codecs, and the final header
//! sequence. This module owns all boring glue; everything upstream is pure
//! data.

use boring::ssl::{SslConnectorBuilder, SslOptions, SslVerifyMode, SslVersion};
use bytes::Bytes;
use tracing::debug;

use crate::base::{Error, Result};
use crate::emulation::{EffectiveParameters, Http1Options, Http2Options};
use crate::http::OrderedHeaderMap;
use crate::tls::{AlpnProtocol, TlsOptions, TlsVersion};

/// Ready-to-use connection configuration produced by [`apply`].
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct ConnectionConfig {
    /// TLS handshake configuration.
    pub tls: TlsConnectConfig,
    /// HTTP/1.1 codec options; all-unset means codec defaults.
    pub http1: Http1Options,
    /// HTTP/2 codec options; all-unset means codec defaults.
    pub http2: Http2Options,
    /// Request headers in final wire order.
    pub headers: OrderedHeaderMap,
}

/// TLS side of a [`ConnectionConfig`].
#[derive(Debug, Clone, Default)]
pub struct TlsConnectConfig {
    options: TlsOptions,
    alpn_wire: Option<Bytes>,
}

impl TlsConnectConfig {
    /// The resolved TLS options backing this config.
    pub fn options(&self) -> &TlsOptions {
        &self.options
    }

    /// The encoded ALPN protocol list, if ALPN is configured.
    pub fn alpn_wire(&self) -> Option<&[u8]> {
        self.alpn_wire.as_deref()
    }

    /// Apply the handshake shape to a BoringSSL connector builder.
    ///
    /// Cipher, curve, and sigalg strings are handed to BoringSSL verbatim;
    /// a string it rejects surfaces here as [`Error::SslProtocolError`].
    pub fn apply_to_connector(&self, builder: &mut SslConnectorBuilder) -> Result<()> {
        if let Some(min) = self.options.min_tls_version {
            builder
                .set_min_proto_version(Some(ssl_version(min)?))
                .map_err(|_| Error::SslProtocolError)?;
        }
        if let Some(max) = self.options.max_tls_version {
            builder
                .set_max_proto_version(Some(ssl_version(max)?))
                .map_err(|_| Error::SslProtocolError)?;
        }

        if let Some(ciphers) = &self.options.cipher_list {
            builder
                .set_cipher_list(ciphers)
                .map_err(|_| Error::SslProtocolError)?;
        }
        if let Some(sigalgs) = &self.options.sigalgs_list {
            builder
                .set_sigalgs_list(sigalgs)
                .map_err(|_| Error::SslProtocolError)?;
        }
        if let Some(curves) = &self.options.curves_list {
            builder
                .set_curves_list(curves)
                .map_err(|_| Error::SslProtocolError)?;
        }

        if let Some(wire) = &self.alpn_wire {
            builder
                .set_alpn_protos(wire)
                .map_err(|_| Error::SslProtocolError)?;
        }

        if let Some(grease) = self.options.grease_enabled {
            builder.set_grease_enabled(grease);
        }
        if self.options.enable_ocsp_stapling == Some(true) {
            builder.enable_ocsp_stapling();
        }
        if self.options.enable_signed_cert_timestamps == Some(true) {
            builder.enable_signed_cert_timestamps();
        }
        if self.options.session_ticket == Some(false) {
            builder.set_options(SslOptions::NO_TICKET);
        }

        // Certificate verification (use system verifier)
        builder.set_verify(SslVerifyMode::PEER);

        // Note: BoringSSL's boring crate may not expose all features required
        // for full fingerprinting (extension permutation, ECH GREASE, ALPS,
        // cert compression) via safe API yet. We configure what we can; the
        // remaining options stay available through `options()` for transports
        // with deeper bindings.

        Ok(())
    }
}

/// Project effective parameters into connection configuration.
///
/// Pure and infallible: every field is either copied through or defaulted,
/// and the version-bound check already happened during resolution. The ALPN
/// wire form is precomputed so the handshake path does no encoding.
pub fn apply(effective: &EffectiveParameters) -> ConnectionConfig {
    let options = effective.tls.clone().unwrap_or_default();
    let alpn_wire = options
        .alpn_protocols
        .as_deref()
        .filter(|protos| !protos.is_empty())
        .map(|protos| Bytes::from(AlpnProtocol::encode_list(protos)));

    debug!(
        alpn = options.alpn_protocols.is_some(),
        headers = effective.headers.len(),
        "applied emulation parameters"
    );

    ConnectionConfig {
        tls: TlsConnectConfig { options, alpn_wire },
        http1: effective.http1.unwrap_or_default(),
        http2: effective.http2.clone().unwrap_or_default(),
        headers: effective.headers.clone(),
    }
}

fn ssl_version(version: TlsVersion) -> Result<SslVersion> {
    match version {
        TlsVersion::TLS_1_0 => Ok(SslVersion::TLS1),
        TlsVersion::TLS_1_1 => Ok(SslVersion::TLS1_1),
        TlsVersion::TLS_1_2 => Ok(SslVersion::TLS1_2),
        TlsVersion::TLS_1_3 => Ok(SslVersion::TLS1_3),
        _ => Err(Error::SslProtocolError),
    }
}
