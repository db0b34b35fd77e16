//! Browser profiles for emulation.
//!
//! A fixed catalog mapping named browser/client versions to concrete
//! protocol parameters captured from real clients: ClientHello shape,
//! SETTINGS order and values, pseudo-header order, and default header
//! blocks. Adding a profile is a data-table addition in the family module,
//! never a new type.

pub mod chrome;
pub mod edge;
pub mod firefox;
pub mod okhttp;
pub mod opera;
pub mod safari;

pub use chrome::Chrome;
pub use edge::Edge;
pub use firefox::Firefox;
pub use okhttp::OkHttp;
pub use opera::Opera;
pub use safari::Safari;

use std::fmt;
use std::str::FromStr;

use http::HeaderValue;
use tracing::debug;

use crate::base::{Error, Result};
use crate::emulation::Emulation;
use crate::http::{OrderedHeaderMap, OrigHeaderName};

/// Operating system overlay for a profile.
///
/// OS variants of the same logical browser differ only in the default
/// header set (User-Agent, client hints) and, for mobile targets, curve
/// preferences; the TLS and HTTP/2 shape stays that of the base profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Os {
    Windows,
    MacOs,
    Linux,
    Android,
    Ios,
}

impl Os {
    /// Platform token inside a Chromium-style User-Agent.
    pub(crate) fn chromium_ua_platform(self) -> &'static str {
        match self {
            Os::Windows => "Windows NT 10.0; Win64; x64",
            Os::MacOs => "Macintosh; Intel Mac OS X 10_15_7",
            Os::Linux => "X11; Linux x86_64",
            Os::Android => "Linux; Android 13; Pixel 7",
            Os::Ios => "iPhone; CPU iPhone OS 17_7 like Mac OS X",
        }
    }

    /// Value for the `sec-ch-ua-platform` client hint.
    pub(crate) fn sec_ch_ua_platform(self) -> &'static str {
        match self {
            Os::Windows => "\"Windows\"",
            Os::MacOs => "\"macOS\"",
            Os::Linux => "\"Linux\"",
            Os::Android => "\"Android\"",
            Os::Ios => "\"iOS\"",
        }
    }

    pub(crate) fn is_mobile(self) -> bool {
        matches!(self, Os::Android | Os::Ios)
    }
}

/// Stable key for every catalogued profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Profile {
    Chrome120,
    Chrome124,
    Chrome128,
    Chrome131,
    Chrome134,
    Chrome137,
    Chrome140,
    Edge127,
    Edge131,
    Edge134,
    Edge140,
    Opera116,
    Opera117,
    Opera119,
    Firefox128,
    Firefox133,
    Firefox135,
    Firefox139,
    Safari17_5,
    Safari18,
    Safari18_5,
    OkHttp3_14,
    OkHttp4_10,
    OkHttp4_12,
    OkHttp5,
}

impl Default for Profile {
    fn default() -> Self {
        Profile::Chrome140
    }
}

impl Profile {
    /// Every catalogued profile, in registry order.
    pub const ALL: &'static [Profile] = &[
        Profile::Chrome120,
        Profile::Chrome124,
        Profile::Chrome128,
        Profile::Chrome131,
        Profile::Chrome134,
        Profile::Chrome137,
        Profile::Chrome140,
        Profile::Edge127,
        Profile::Edge131,
        Profile::Edge134,
        Profile::Edge140,
        Profile::Opera116,
        Profile::Opera117,
        Profile::Opera119,
        Profile::Firefox128,
        Profile::Firefox133,
        Profile::Firefox135,
        Profile::Firefox139,
        Profile::Safari17_5,
        Profile::Safari18,
        Profile::Safari18_5,
        Profile::OkHttp3_14,
        Profile::OkHttp4_10,
        Profile::OkHttp4_12,
        Profile::OkHttp5,
    ];

    /// The registry key for this profile.
    pub fn key(self) -> &'static str {
        match self {
            Profile::Chrome120 => "chrome_120",
            Profile::Chrome124 => "chrome_124",
            Profile::Chrome128 => "chrome_128",
            Profile::Chrome131 => "chrome_131",
            Profile::Chrome134 => "chrome_134",
            Profile::Chrome137 => "chrome_137",
            Profile::Chrome140 => "chrome_140",
            Profile::Edge127 => "edge_127",
            Profile::Edge131 => "edge_131",
            Profile::Edge134 => "edge_134",
            Profile::Edge140 => "edge_140",
            Profile::Opera116 => "opera_116",
            Profile::Opera117 => "opera_117",
            Profile::Opera119 => "opera_119",
            Profile::Firefox128 => "firefox_128",
            Profile::Firefox133 => "firefox_133",
            Profile::Firefox135 => "firefox_135",
            Profile::Firefox139 => "firefox_139",
            Profile::Safari17_5 => "safari_17_5",
            Profile::Safari18 => "safari_18",
            Profile::Safari18_5 => "safari_18_5",
            Profile::OkHttp3_14 => "okhttp_3_14",
            Profile::OkHttp4_10 => "okhttp_4_10",
            Profile::OkHttp4_12 => "okhttp_4_12",
            Profile::OkHttp5 => "okhttp_5",
        }
    }

    /// The OS a profile impersonates when no overlay is requested.
    pub fn native_os(self) -> Os {
        match self {
            Profile::Safari17_5 | Profile::Safari18 | Profile::Safari18_5 => Os::MacOs,
            Profile::OkHttp3_14 | Profile::OkHttp4_10 | Profile::OkHttp4_12 | Profile::OkHttp5 => {
                Os::Android
            }
            _ => Os::Windows,
        }
    }

    /// Build the full emulation for this profile with an OS overlay.
    pub fn emulation_for(self, os: Os) -> Emulation {
        debug!(profile = self.key(), ?os, "building emulation profile");
        match self {
            Profile::Chrome120 => Chrome::V120.emulation_for(os),
            Profile::Chrome124 => Chrome::V124.emulation_for(os),
            Profile::Chrome128 => Chrome::V128.emulation_for(os),
            Profile::Chrome131 => Chrome::V131.emulation_for(os),
            Profile::Chrome134 => Chrome::V134.emulation_for(os),
            Profile::Chrome137 => Chrome::V137.emulation_for(os),
            Profile::Chrome140 => Chrome::V140.emulation_for(os),
            Profile::Edge127 => Edge::V127.emulation_for(os),
            Profile::Edge131 => Edge::V131.emulation_for(os),
            Profile::Edge134 => Edge::V134.emulation_for(os),
            Profile::Edge140 => Edge::V140.emulation_for(os),
            Profile::Opera116 => Opera::V116.emulation_for(os),
            Profile::Opera117 => Opera::V117.emulation_for(os),
            Profile::Opera119 => Opera::V119.emulation_for(os),
            Profile::Firefox128 => Firefox::V128.emulation_for(os),
            Profile::Firefox133 => Firefox::V133.emulation_for(os),
            Profile::Firefox135 => Firefox::V135.emulation_for(os),
            Profile::Firefox139 => Firefox::V139.emulation_for(os),
            Profile::Safari17_5 => Safari::V17_5.emulation_for(os),
            Profile::Safari18 => Safari::V18.emulation_for(os),
            Profile::Safari18_5 => Safari::V18_5.emulation_for(os),
            Profile::OkHttp3_14 => OkHttp::V3_14.emulation_for(os),
            Profile::OkHttp4_10 => OkHttp::V4_10.emulation_for(os),
            Profile::OkHttp4_12 => OkHttp::V4_12.emulation_for(os),
            Profile::OkHttp5 => OkHttp::V5.emulation_for(os),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Profile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Profile::ALL
            .iter()
            .copied()
            .find(|profile| profile.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownProfile(s.to_string()))
    }
}

/// Look up a profile by key and build its emulation.
///
/// Fails with [`Error::UnknownProfile`] for uncatalogued keys; never falls
/// back to a default.
pub fn lookup(key: &str) -> Result<Emulation> {
    let profile: Profile = key.parse()?;
    Ok(profile.emulation_for(profile.native_os()))
}

/// Build a casing/order template from captured header names.
/// Names with invalid bytes are skipped; catalog data is expected valid.
pub(crate) fn orig_header_list(names: &[&str]) -> Vec<OrigHeaderName> {
    names
        .iter()
        .filter_map(|name| OrigHeaderName::new(name).ok())
        .collect()
}

/// Build a default-header block from captured `(name, value)` rows.
/// Rows with invalid bytes are skipped; catalog data is expected valid.
pub(crate) fn header_block(pairs: &[(&str, &str)]) -> OrderedHeaderMap {
    pairs
        .iter()
        .filter_map(|(name, value)| {
            let name = OrigHeaderName::new(name).ok()?;
            let value = HeaderValue::from_str(value).ok()?;
            Some((name, value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for profile in Profile::ALL {
            let parsed: Profile = profile.key().parse().unwrap();
            assert_eq!(parsed, *profile);
        }
    }

    #[test]
    fn test_key_parse_is_case_insensitive() {
        let parsed: Profile = "Chrome_131".parse().unwrap();
        assert_eq!(parsed, Profile::Chrome131);
    }

    #[test]
    fn test_unknown_key_fails() {
        let err = lookup("NotARealBrowser").unwrap_err();
        assert_eq!(err, Error::UnknownProfile("NotARealBrowser".into()));
    }
}
