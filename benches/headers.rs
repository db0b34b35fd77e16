use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mimicnet::{OrderedHeaderMap, OrigHeaderName};

fn navigation_headers() -> OrderedHeaderMap {
    let mut headers = OrderedHeaderMap::new();
    headers.insert(
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7"
    ).unwrap();
    headers
        .insert("Accept-Encoding", "gzip, deflate, br, zstd")
        .unwrap();
    headers.insert("Accept-Language", "en-US,en;q=0.9").unwrap();
    headers
        .insert(
            "sec-ch-ua",
            "\"Chromium\";v=\"131\", \"Google Chrome\";v=\"131\", \"Not=A?Brand\";v=\"24\"",
        )
        .unwrap();
    headers.insert("sec-ch-ua-mobile", "?0").unwrap();
    headers.insert("sec-ch-ua-platform", "\"Windows\"").unwrap();
    headers.insert("Sec-Fetch-Dest", "document").unwrap();
    headers.insert("Sec-Fetch-Mode", "navigate").unwrap();
    headers.insert("Sec-Fetch-Site", "none").unwrap();
    headers.insert("Sec-Fetch-User", "?1").unwrap();
    headers.insert("Upgrade-Insecure-Requests", "1").unwrap();
    headers.insert(
        "User-Agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36"
    ).unwrap();
    headers
}

fn benchmark_headers_insert(c: &mut Criterion) {
    c.bench_function("headers_insert", |b| {
        b.iter(|| {
            let mut headers = OrderedHeaderMap::new();
            headers.insert("Accept", "text/html").unwrap();
            headers.insert("User-Agent", "Mozilla/5.0").unwrap();
            headers.insert("Connection", "keep-alive").unwrap();
            black_box(headers)
        })
    });
}

fn benchmark_headers_to_header_map(c: &mut Criterion) {
    let headers = navigation_headers();

    // cloning + conversion cost, simulating per-request overhead
    c.bench_function("headers_to_header_map", |b| {
        b.iter(|| black_box(headers.clone()).to_header_map())
    });
}

fn benchmark_sort_by_template(c: &mut Criterion) {
    let headers = navigation_headers();
    let template: Vec<OrigHeaderName> = [
        "sec-ch-ua",
        "sec-ch-ua-mobile",
        "sec-ch-ua-platform",
        "Upgrade-Insecure-Requests",
        "User-Agent",
        "Accept",
        "Sec-Fetch-Site",
        "Sec-Fetch-Mode",
        "Sec-Fetch-User",
        "Sec-Fetch-Dest",
        "Accept-Encoding",
        "Accept-Language",
    ]
    .iter()
    .map(|name| OrigHeaderName::new(name).unwrap())
    .collect();

    c.bench_function("headers_sort_by_template", |b| {
        b.iter(|| {
            let mut headers = black_box(headers.clone());
            headers.sort_by_template(&template);
            headers
        })
    });
}

criterion_group!(
    benches,
    benchmark_headers_insert,
    benchmark_headers_to_header_map,
    benchmark_sort_by_template
);
criterion_main!(benches);
