//! Opera browser profiles.
//!
//! Opera tracks Chromium releases with an offset major version. Like Edge
//! it keeps the Chromium protocol shape and changes branding only.

use crate::emulation::profiles::chrome::{
    chromium_headers, chromium_http2_options, chromium_tls_options, chromium_ua,
    CHROMIUM_ORIG_HEADERS,
};
use crate::emulation::profiles::{orig_header_list, Os};
use crate::emulation::{Emulation, EmulationFactory};

/// Opera browser versions for emulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Opera {
    /// Opera 116
    V116,
    /// Opera 117
    V117,
    /// Opera 119 (latest)
    V119,
}

impl Default for Opera {
    fn default() -> Self {
        Opera::V119
    }
}

impl Opera {
    /// Full version string used in the User-Agent.
    pub fn version_string(self) -> &'static str {
        match self {
            Opera::V116 => "116.0.0.0",
            Opera::V117 => "117.0.0.0",
            Opera::V119 => "119.0.0.0",
        }
    }

    /// The Chromium release this Opera version ships.
    fn chromium_version(self) -> &'static str {
        match self {
            Opera::V116 => "131.0.0.0",
            Opera::V117 => "132.0.0.0",
            Opera::V119 => "134.0.0.0",
        }
    }

    /// Get all supported versions.
    pub fn all_versions() -> &'static [Opera] {
        &[Opera::V116, Opera::V117, Opera::V119]
    }

    /// Build the emulation for this version with an OS overlay.
    pub fn emulation_for(self, os: Os) -> Emulation {
        let opera_major = match self.version_string().split('.').next() {
            Some(m) => m,
            None => "119",
        };
        let chromium_major = match self.chromium_version().split('.').next() {
            Some(m) => m,
            None => "134",
        };
        let sec_ch_ua = format!(
            "\"Chromium\";v=\"{chromium_major}\", \"Opera\";v=\"{opera_major}\", \"Not=A?Brand\";v=\"24\""
        );
        let ua = format!(
            "{} OPR/{}",
            chromium_ua(self.chromium_version(), os),
            self.version_string()
        );

        Emulation::builder()
            .tls_options(chromium_tls_options("X25519MLKEM768:X25519:P-256:P-384", false))
            .http2_options(chromium_http2_options())
            .headers(chromium_headers(&ua, &sec_ch_ua, os))
            .orig_header_names(orig_header_list(CHROMIUM_ORIG_HEADERS))
            .build()
    }
}

impl EmulationFactory for Opera {
    fn emulation(self) -> Emulation {
        self.emulation_for(Os::Windows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opera_branding() {
        let emu = Opera::V119.emulation_for(Os::Windows);
        let ua = emu.headers().get("user-agent").unwrap();
        assert!(ua.to_str().unwrap().contains("OPR/119.0.0.0"));
        assert!(ua.to_str().unwrap().contains("Chrome/134.0.0.0"));
    }
}
