// Criterion benchmarks for SignSync Algo

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use signsync_algo::core::filters::search_engaged;
use signsync_algo::core::ranking::rank_by_compatibility;
use signsync_algo::core::zodiac::{classify, ZodiacSign};
use signsync_algo::models::{EngagementMetrics, Profile};

fn create_candidate(id: usize) -> Profile {
    let month = 1 + (id % 12) as u32;
    let day = 1 + (id % 28) as u32;
    Profile {
        user_id: id.to_string(),
        name: format!("User {}", id),
        age: 21 + (id % 20) as u8,
        birth_date: NaiveDate::from_ymd_opt(1990 + (id % 10) as i32, month, day).unwrap(),
        birth_time: None,
        birth_place: None,
        location: "New York, NY".to_string(),
        avatar: "/placeholder.svg".to_string(),
        bio: if id % 2 == 0 { "astrology lover" } else { "stargazer" }.to_string(),
        interests: vec![],
        engagement: Some(EngagementMetrics {
            engagement_score: (50 + id % 50) as u16,
            replies_received: (id * 7 % 1000) as u32,
            interaction_count: (id * 13 % 2000) as u32,
        }),
        last_active: None,
    }
}

fn bench_classify(c: &mut Criterion) {
    let birth = NaiveDate::from_ymd_opt(1995, 7, 23).unwrap();
    c.bench_function("classify", |b| {
        b.iter(|| classify(black_box(birth)));
    });
}

fn bench_compatibility_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_by_compatibility");
    for size in [10usize, 100, 1000] {
        let candidates: Vec<Profile> = (0..size).map(create_candidate).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &candidates, |b, cands| {
            b.iter(|| rank_by_compatibility(black_box(ZodiacSign::Leo), cands.clone()));
        });
    }
    group.finish();
}

fn bench_search_pipeline(c: &mut Criterion) {
    let candidates: Vec<Profile> = (0..1000).map(create_candidate).collect();
    c.bench_function("search_filter_then_rank", |b| {
        b.iter(|| {
            search_engaged(
                black_box(candidates.clone()),
                black_box("astro"),
                black_box(Some(ZodiacSign::Leo)),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_compatibility_ranking,
    bench_search_pipeline
);
criterion_main!(benches);
