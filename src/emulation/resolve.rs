//! Emulation resolution.
//!
//! Collapses layered emulation configs into one effective parameter set.
//! Precedence is request over client over profile; any field a higher layer
//! leaves unset falls through to the next one, and fields nobody sets stay
//! `None` for the transport default.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::base::{Error, Result};
use crate::emulation::{Emulation, Http1Options, Http2Options};
use crate::http::{OrderedHeaderMap, OrigHeaderName};
use crate::tls::TlsOptions;

/// The collapsed output of [`resolve`]: one concrete parameter set ready to
/// hand to the connection layer.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct EffectiveParameters {
    /// Merged TLS options, `None` if no layer set any.
    pub tls: Option<TlsOptions>,
    /// Merged HTTP/1.1 options.
    pub http1: Option<Http1Options>,
    /// Merged HTTP/2 options.
    pub http2: Option<Http2Options>,
    /// Layered headers in final wire order.
    pub headers: OrderedHeaderMap,
    /// Winning casing/order template, if any layer carried one.
    pub orig_headers: Option<Vec<OrigHeaderName>>,
}

/// Merge up to three emulation layers into effective parameters.
///
/// `base` is typically a profile's emulation, `client` a client-wide
/// override, `request` a per-request override. Option blocks merge
/// field-by-field with the higher layer winning. Headers layer by logical
/// name: lower-layer entries stay in place, a higher layer's first entry
/// for a name replaces them in place and its further entries for the same
/// name append after, so repeated lines built with `append` (e.g. multiple
/// `Cookie` lines) survive within a layer. The casing/order template is
/// taken whole from the highest layer that has one, then applied to the
/// merged headers.
///
/// Fails with [`Error::ConflictingVersionBounds`] if the merged TLS version
/// range is empty.
pub fn resolve(
    base: Option<&Emulation>,
    client: Option<&Emulation>,
    request: Option<&Emulation>,
) -> Result<EffectiveParameters> {
    let layers = [base, client, request];

    let tls = merge_options(&layers, |e| e.tls_options.as_ref(), TlsOptions::overlaid_with);
    let http1 = merge_options(
        &layers,
        |e| e.http1_options.as_ref(),
        Http1Options::overlaid_with,
    );
    let http2 = merge_options(
        &layers,
        |e| e.http2_options.as_ref(),
        Http2Options::overlaid_with,
    );

    if let Some(tls) = &tls {
        if let (Some(min), Some(max)) = (tls.min_tls_version, tls.max_tls_version) {
            if min > max {
                return Err(Error::ConflictingVersionBounds { min, max });
            }
        }
    }

    let mut headers = OrderedHeaderMap::new();
    for layer in layers.into_iter().flatten() {
        // replace lower layers once per logical name, then keep this
        // layer's own duplicates
        let mut replaced = HashSet::new();
        for (name, value) in layer.headers.iter() {
            if replaced.insert(name.folded()) {
                headers.insert_entry(name.clone(), value.clone());
            } else {
                headers.append_entry(name.clone(), value.clone());
            }
        }
        trace!(entries = headers.len(), "layered headers");
    }

    let orig_headers = layers
        .iter()
        .rev()
        .flatten()
        .find_map(|layer| layer.orig_headers.clone());
    if let Some(template) = &orig_headers {
        headers.sort_by_template(template);
    }

    debug!(
        tls = tls.is_some(),
        http1 = http1.is_some(),
        http2 = http2.is_some(),
        headers = headers.len(),
        "resolved emulation layers"
    );

    Ok(EffectiveParameters {
        tls,
        http1,
        http2,
        headers,
        orig_headers,
    })
}

/// Fold one option block across the layers, lowest first.
fn merge_options<T, F, M>(layers: &[Option<&Emulation>; 3], pick: F, merge: M) -> Option<T>
where
    T: Clone,
    F: Fn(&Emulation) -> Option<&T>,
    M: Fn(&T, &T) -> T,
{
    let mut merged: Option<T> = None;
    for layer in layers.iter().flatten() {
        if let Some(options) = pick(layer) {
            merged = Some(match &merged {
                Some(lower) => merge(lower, options),
                None => options.clone(),
            });
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tls::TlsVersion;

    #[test]
    fn test_request_layer_wins() {
        let base = Emulation::builder()
            .http2_options(
                Http2Options::builder()
                    .max_concurrent_streams(100)
                    .initial_window_size(65535)
                    .build(),
            )
            .build();
        let request = Emulation::builder()
            .http2_options(Http2Options::builder().max_concurrent_streams(50).build())
            .build();

        let effective = resolve(Some(&base), None, Some(&request)).unwrap();
        let h2 = effective.http2.unwrap();
        assert_eq!(h2.max_concurrent_streams, Some(50));
        assert_eq!(h2.initial_window_size, Some(65535));
    }

    #[test]
    fn test_conflicting_version_bounds() {
        let base = Emulation::builder()
            .tls_options(
                TlsOptions::builder()
                    .min_tls_version(TlsVersion::TLS_1_3)
                    .build(),
            )
            .build();
        let request = Emulation::builder()
            .tls_options(
                TlsOptions::builder()
                    .max_tls_version(TlsVersion::TLS_1_2)
                    .build(),
            )
            .build();

        let err = resolve(Some(&base), None, Some(&request)).unwrap_err();
        assert_eq!(
            err,
            Error::ConflictingVersionBounds {
                min: TlsVersion::TLS_1_3,
                max: TlsVersion::TLS_1_2,
            }
        );
    }

    #[test]
    fn test_header_layering() {
        let base = Emulation::builder()
            .header("User-Agent", "base-agent")
            .unwrap()
            .header("Accept", "a")
            .unwrap()
            .build();
        let request = Emulation::builder().header("accept", "b").unwrap().build();

        let effective = resolve(Some(&base), None, Some(&request)).unwrap();
        let pairs: Vec<_> = effective
            .headers
            .iter()
            .map(|(n, v)| (n.as_str(), v.to_str().unwrap()))
            .collect();
        assert_eq!(pairs, [("User-Agent", "base-agent"), ("accept", "b")]);
    }

    #[test]
    fn test_appended_duplicates_survive_within_a_layer() {
        let base = Emulation::builder().header("Cookie", "stale=0").unwrap().build();
        let mut cookies = OrderedHeaderMap::new();
        cookies.append("Cookie", "a=1").unwrap();
        cookies.append("Cookie", "b=2").unwrap();
        let request = Emulation::builder().headers(cookies).build();

        let effective = resolve(Some(&base), None, Some(&request)).unwrap();
        let values: Vec<_> = effective
            .headers
            .get_all("Cookie")
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(values, ["a=1", "b=2"]);
        assert_eq!(effective.headers.len(), 2);
        assert_eq!(effective.headers.keys_len(), 1);
    }

    #[test]
    fn test_orig_headers_from_highest_layer() {
        let base = Emulation::builder()
            .header("Accept", "text/html")
            .unwrap()
            .header("User-Agent", "agent")
            .unwrap()
            .header("Cookie", "a=1")
            .unwrap()
            .orig_headers(["User-Agent", "Accept"])
            .unwrap()
            .build();
        let request = Emulation::builder()
            .orig_headers(["Cookie", "User-Agent", "Accept"])
            .unwrap()
            .build();

        let effective = resolve(Some(&base), None, Some(&request)).unwrap();
        let names: Vec<_> = effective.headers.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Cookie", "User-Agent", "Accept"]);
    }

    #[test]
    fn test_all_layers_empty() {
        let effective = resolve(None, None, None).unwrap();
        assert!(effective.tls.is_none());
        assert!(effective.http1.is_none());
        assert!(effective.http2.is_none());
        assert!(effective.headers.is_empty());
        assert!(effective.orig_headers.is_none());
    }
}
