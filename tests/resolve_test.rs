//! Integration tests for layered resolution and negotiation.

use mimicnet::{
    apply, resolve, Emulation, EmulationFactory, Error, Http2Options, Profile, TlsOptions,
    TlsVersion,
};

#[test]
fn test_precedence_request_over_client_over_profile() {
    let profile = Emulation::builder()
        .http2_options(
            Http2Options::builder()
                .max_concurrent_streams(100)
                .header_table_size(65536)
                .build(),
        )
        .build();
    let client = Emulation::builder()
        .http2_options(Http2Options::builder().header_table_size(4096).build())
        .build();
    let request = Emulation::builder()
        .http2_options(Http2Options::builder().max_concurrent_streams(50).build())
        .build();

    let effective = resolve(Some(&profile), Some(&client), Some(&request)).unwrap();
    let h2 = effective.http2.unwrap();
    assert_eq!(h2.max_concurrent_streams, Some(50));
    assert_eq!(h2.header_table_size, Some(4096));
}

#[test]
fn test_unset_fields_stay_unset_for_transport_default() {
    let profile = Emulation::builder()
        .http2_options(Http2Options::builder().enable_push(false).build())
        .build();

    let effective = resolve(Some(&profile), None, None).unwrap();
    let h2 = effective.http2.unwrap();
    assert_eq!(h2.enable_push, Some(false));
    assert!(h2.max_frame_size.is_none());
}

#[test]
fn test_conflicting_bounds_across_layers() {
    let profile = Emulation::builder()
        .tls_options(
            TlsOptions::builder()
                .min_tls_version(TlsVersion::TLS_1_2)
                .max_tls_version(TlsVersion::TLS_1_3)
                .build(),
        )
        .build();
    let request = Emulation::builder()
        .tls_options(
            TlsOptions::builder()
                .max_tls_version(TlsVersion::TLS_1_1)
                .build(),
        )
        .build();

    let err = resolve(Some(&profile), None, Some(&request)).unwrap_err();
    assert!(matches!(err, Error::ConflictingVersionBounds { .. }));
}

#[test]
fn test_bounds_valid_within_single_layer_still_checked_after_merge() {
    // each layer alone is consistent, the merge is not
    let client = Emulation::builder()
        .tls_options(
            TlsOptions::builder()
                .min_tls_version(TlsVersion::TLS_1_3)
                .max_tls_version(TlsVersion::TLS_1_3)
                .build(),
        )
        .build();
    let request = Emulation::builder()
        .tls_options(
            TlsOptions::builder()
                .min_tls_version(TlsVersion::TLS_1_0)
                .max_tls_version(TlsVersion::TLS_1_2)
                .build(),
        )
        .build();

    // request sets both bounds, so the merge is consistent again
    assert!(resolve(None, Some(&client), Some(&request)).is_ok());
}

#[test]
fn test_header_replacement_keeps_position() {
    let profile = Emulation::builder()
        .header("User-Agent", "profile-agent")
        .unwrap()
        .header("Accept", "text/html")
        .unwrap()
        .build();
    let client = Emulation::builder()
        .header("Accept", "application/json")
        .unwrap()
        .header("X-Client", "1")
        .unwrap()
        .build();

    let effective = resolve(Some(&profile), Some(&client), None).unwrap();
    let pairs: Vec<_> = effective
        .headers
        .iter()
        .map(|(n, v)| (n.as_str(), v.to_str().unwrap()))
        .collect();
    assert_eq!(
        pairs,
        [
            ("User-Agent", "profile-agent"),
            ("Accept", "application/json"),
            ("X-Client", "1"),
        ]
    );
}

#[test]
fn test_orig_template_orders_merged_headers() {
    let profile = Profile::Chrome131.emulation();
    let request = Emulation::builder()
        .header("Cookie", "session=abc")
        .unwrap()
        .orig_headers(["Cookie", "User-Agent", "Accept"])
        .unwrap()
        .build();

    let effective = resolve(Some(&profile), None, Some(&request)).unwrap();
    let names: Vec<_> = effective.headers.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names[0], "Cookie");
    assert_eq!(names[1], "User-Agent");
    assert_eq!(names[2], "Accept");
    // headers outside the template keep their relative order behind it
    assert!(names.len() > 3);
}

#[test]
fn test_apply_round_trip_from_profile() {
    let profile = Profile::Safari18.emulation();
    let effective = resolve(Some(&profile), None, None).unwrap();
    let config = apply(&effective);

    assert_eq!(
        config.tls.options().min_tls_version,
        Some(TlsVersion::TLS_1_0)
    );
    assert_eq!(config.http2.header_table_size, Some(4096));
    assert!(!config.headers.is_empty());
}
