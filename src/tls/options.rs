use super::{AlpnProtocol, AlpsProtocol, CertCompressionAlg, ExtensionType, TlsVersion};
use crate::base::overlay_fields;

/// TLS fingerprint options.
///
/// Every field is optional: `None` means "inherit the next precedence level"
/// (ultimately the transport default), which is what makes partial overrides
/// at client or request granularity possible. Cipher/curve/sigalg strings use
/// BoringSSL's colon-delimited mini-language and are passed through without
/// validation; the transport reports rejection at connection time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsOptions {
    /// ALPN protocols, in preference order.
    pub alpn_protocols: Option<Vec<AlpnProtocol>>,

    /// ALPS protocols to exchange during the handshake.
    pub alps_protocols: Option<Vec<AlpsProtocol>>,

    /// Use the new ALPS codepoint (17613) instead of the original.
    pub alps_use_new_codepoint: Option<bool>,

    /// Enable TLS session tickets (RFC 5077).
    pub session_ticket: Option<bool>,

    /// Minimum TLS version.
    pub min_tls_version: Option<TlsVersion>,

    /// Maximum TLS version.
    pub max_tls_version: Option<TlsVersion>,

    /// Offer PSK cipher suites.
    pub pre_shared_key: Option<bool>,

    /// Send a GREASE Encrypted ClientHello extension when no ECH config is
    /// available.
    pub enable_ech_grease: Option<bool>,

    /// Permute ClientHello extension order.
    pub permute_extensions: Option<bool>,

    /// Enable GREASE values (RFC 8701).
    pub grease_enabled: Option<bool>,

    /// Enable OCSP stapling.
    pub enable_ocsp_stapling: Option<bool>,

    /// Enable Signed Certificate Timestamps.
    pub enable_signed_cert_timestamps: Option<bool>,

    /// Maximum TLS record size (record_size_limit extension).
    pub record_size_limit: Option<u16>,

    /// Skip session tickets when PSK is in use.
    pub psk_skip_session_ticket: Option<bool>,

    /// Maximum number of key shares in the ClientHello.
    pub key_shares_limit: Option<u8>,

    /// Offer `psk_dhe_ke` key-exchange mode.
    pub psk_dhe_ke: Option<bool>,

    /// Send the `renegotiation_info` extension.
    pub renegotiation: Option<bool>,

    /// Delegated credentials signature scheme list (RFC 9345).
    pub delegated_credentials: Option<String>,

    /// Supported curves, colon-delimited.
    pub curves_list: Option<String>,

    /// Cipher suite configuration string.
    pub cipher_list: Option<String>,

    /// Supported signature algorithms, colon-delimited.
    pub sigalgs_list: Option<String>,

    /// Certificate compression algorithms, in preference order.
    pub certificate_compression_algorithms: Option<Vec<CertCompressionAlg>>,

    /// Explicit ClientHello extension order.
    pub extension_permutation: Option<Vec<ExtensionType>>,

    /// Force AES hardware acceleration on or off.
    pub aes_hw_override: Option<bool>,

    /// Prefer ChaCha20 over AES-256 in TLS 1.3.
    pub prefer_chacha20: Option<bool>,

    /// Randomize the AES hardware acceleration override.
    pub random_aes_hw_override: Option<bool>,
}

impl TlsOptions {
    pub fn builder() -> TlsOptionsBuilder {
        TlsOptionsBuilder::default()
    }

    /// Overlay `over` onto `self`: any field `over` sets explicitly wins,
    /// unset fields fall through to `self`.
    pub(crate) fn overlaid_with(&self, over: &TlsOptions) -> TlsOptions {
        overlay_fields!(self, over, {
            alpn_protocols,
            alps_protocols,
            alps_use_new_codepoint,
            session_ticket,
            min_tls_version,
            max_tls_version,
            pre_shared_key,
            enable_ech_grease,
            permute_extensions,
            grease_enabled,
            enable_ocsp_stapling,
            enable_signed_cert_timestamps,
            record_size_limit,
            psk_skip_session_ticket,
            key_shares_limit,
            psk_dhe_ke,
            renegotiation,
            delegated_credentials,
            curves_list,
            cipher_list,
            sigalgs_list,
            certificate_compression_algorithms,
            extension_permutation,
            aes_hw_override,
            prefer_chacha20,
            random_aes_hw_override,
        })
    }
}

/// Builder for [`TlsOptions`].
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct TlsOptionsBuilder {
    config: TlsOptions,
}

impl TlsOptionsBuilder {
    pub fn alpn_protocols<I>(mut self, alpn: I) -> Self
    where
        I: IntoIterator<Item = AlpnProtocol>,
    {
        self.config.alpn_protocols = Some(alpn.into_iter().collect());
        self
    }

    pub fn alps_protocols<I>(mut self, alps: I) -> Self
    where
        I: IntoIterator<Item = AlpsProtocol>,
    {
        self.config.alps_protocols = Some(alps.into_iter().collect());
        self
    }

    pub fn alps_use_new_codepoint(mut self, enabled: bool) -> Self {
        self.config.alps_use_new_codepoint = Some(enabled);
        self
    }

    pub fn session_ticket(mut self, enabled: bool) -> Self {
        self.config.session_ticket = Some(enabled);
        self
    }

    pub fn min_tls_version(mut self, version: TlsVersion) -> Self {
        self.config.min_tls_version = Some(version);
        self
    }

    pub fn max_tls_version(mut self, version: TlsVersion) -> Self {
        self.config.max_tls_version = Some(version);
        self
    }

    pub fn pre_shared_key(mut self, enabled: bool) -> Self {
        self.config.pre_shared_key = Some(enabled);
        self
    }

    pub fn enable_ech_grease(mut self, enabled: bool) -> Self {
        self.config.enable_ech_grease = Some(enabled);
        self
    }

    pub fn permute_extensions(mut self, enabled: bool) -> Self {
        self.config.permute_extensions = Some(enabled);
        self
    }

    pub fn grease_enabled(mut self, enabled: bool) -> Self {
        self.config.grease_enabled = Some(enabled);
        self
    }

    pub fn enable_ocsp_stapling(mut self, enabled: bool) -> Self {
        self.config.enable_ocsp_stapling = Some(enabled);
        self
    }

    pub fn enable_signed_cert_timestamps(mut self, enabled: bool) -> Self {
        self.config.enable_signed_cert_timestamps = Some(enabled);
        self
    }

    pub fn record_size_limit(mut self, limit: u16) -> Self {
        self.config.record_size_limit = Some(limit);
        self
    }

    pub fn psk_skip_session_ticket(mut self, enabled: bool) -> Self {
        self.config.psk_skip_session_ticket = Some(enabled);
        self
    }

    pub fn key_shares_limit(mut self, limit: u8) -> Self {
        self.config.key_shares_limit = Some(limit);
        self
    }

    pub fn psk_dhe_ke(mut self, enabled: bool) -> Self {
        self.config.psk_dhe_ke = Some(enabled);
        self
    }

    pub fn renegotiation(mut self, enabled: bool) -> Self {
        self.config.renegotiation = Some(enabled);
        self
    }

    pub fn delegated_credentials(mut self, sigalgs: &str) -> Self {
        self.config.delegated_credentials = Some(sigalgs.to_string());
        self
    }

    pub fn curves_list(mut self, curves: &str) -> Self {
        self.config.curves_list = Some(curves.to_string());
        self
    }

    pub fn cipher_list(mut self, ciphers: &str) -> Self {
        self.config.cipher_list = Some(ciphers.to_string());
        self
    }

    pub fn sigalgs_list(mut self, sigalgs: &str) -> Self {
        self.config.sigalgs_list = Some(sigalgs.to_string());
        self
    }

    pub fn certificate_compression_algorithms<I>(mut self, algs: I) -> Self
    where
        I: IntoIterator<Item = CertCompressionAlg>,
    {
        self.config.certificate_compression_algorithms = Some(algs.into_iter().collect());
        self
    }

    pub fn extension_permutation<I>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = ExtensionType>,
    {
        self.config.extension_permutation = Some(extensions.into_iter().collect());
        self
    }

    pub fn aes_hw_override(mut self, enabled: bool) -> Self {
        self.config.aes_hw_override = Some(enabled);
        self
    }

    pub fn prefer_chacha20(mut self, enabled: bool) -> Self {
        self.config.prefer_chacha20 = Some(enabled);
        self
    }

    pub fn random_aes_hw_override(mut self, enabled: bool) -> Self {
        self.config.random_aes_hw_override = Some(enabled);
        self
    }

    pub fn build(self) -> TlsOptions {
        self.config
    }
}
