// Criterion benchmarks for NEMO Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nemo_match::core::{haversine_km, nearest_region, Matcher, SearchQuery};
use nemo_match::models::{Contractor, GeoPoint};

const TYPES: [&str; 5] = ["Electrician", "Plumber", "Roofer", "Painter", "Landscaper"];
const AREAS: [&str; 4] = ["Chillicothe", "Hannibal", "Kirksville", "Moberly"];

fn create_listings(count: usize) -> Vec<Contractor> {
    (0..count)
        .map(|i| Contractor {
            id: format!("c-{}", i),
            name: format!("Contractor {}", i),
            contractor_type: TYPES[i % TYPES.len()].to_string(),
            phone: "(660) 555-0100".to_string(),
            email: format!("info@contractor{}.test", i),
            website: String::new(),
            location: "Northeast Missouri".to_string(),
            service_area: vec![AREAS[i % AREAS.len()].to_string()],
            sub_types: vec![],
            image_url: String::new(),
        })
        .collect()
}

fn bench_haversine(c: &mut Criterion) {
    c.bench_function("haversine_km", |b| {
        b.iter(|| {
            haversine_km(
                black_box(GeoPoint {
                    lat: 39.7084,
                    lon: -91.3585,
                }),
                black_box(GeoPoint {
                    lat: 40.1948,
                    lon: -92.5832,
                }),
            )
        });
    });
}

fn bench_nearest_region(c: &mut Criterion) {
    c.bench_function("nearest_region", |b| {
        b.iter(|| {
            nearest_region(black_box(GeoPoint {
                lat: 39.74,
                lon: -92.47,
            }))
        });
    });
}

fn bench_search(c: &mut Criterion) {
    let matcher = Matcher::new();
    let query = SearchQuery {
        service_name: "Electricians".to_string(),
        region_name: "Hannibal".to_string(),
        name_query: None,
    };

    let mut group = c.benchmark_group("search");
    for size in [100, 1_000, 10_000] {
        let listings = create_listings(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &listings, |b, listings| {
            b.iter(|| matcher.search(black_box(listings), black_box(&query)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_haversine, bench_nearest_region, bench_search);
criterion_main!(benches);
