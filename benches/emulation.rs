use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mimicnet::{apply, resolve, Emulation, EmulationFactory, Http2Options, Profile};

fn benchmark_profile_build(c: &mut Criterion) {
    c.bench_function("profile_build_chrome", |b| {
        b.iter(|| black_box(Profile::Chrome140).emulation())
    });
    c.bench_function("profile_build_firefox", |b| {
        b.iter(|| black_box(Profile::Firefox139).emulation())
    });
}

fn benchmark_resolve(c: &mut Criterion) {
    let profile = Profile::Chrome140.emulation();
    let request = Emulation::builder()
        .http2_options(Http2Options::builder().max_concurrent_streams(50).build())
        .header("Cookie", "session=abc")
        .unwrap()
        .build();

    c.bench_function("resolve_two_layers", |b| {
        b.iter(|| resolve(Some(black_box(&profile)), None, Some(black_box(&request))).unwrap())
    });
}

fn benchmark_apply(c: &mut Criterion) {
    let profile = Profile::Chrome140.emulation();
    let effective = resolve(Some(&profile), None, None).unwrap();

    c.bench_function("apply_effective_parameters", |b| {
        b.iter(|| apply(black_box(&effective)))
    });
}

criterion_group!(
    benches,
    benchmark_profile_build,
    benchmark_resolve,
    benchmark_apply
);
criterion_main!(benches);
