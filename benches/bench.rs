// Criterion benchmarks for Fairway Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fairway_algo::core::{calculate_bounding_box, calculate_recommendation_score, haversine_miles};
use fairway_algo::models::{
    Amenities, Club, Difficulty, GeoPoint, GolferPreferences, PriceTier, ScoringWeights, Services,
};
use fairway_algo::Ranker;
use uuid::Uuid;

fn create_club(id: usize, lat: f64, lng: f64) -> Club {
    Club {
        id: Uuid::new_v4(),
        club_name: format!("Club {}", id),
        address: "1 Fairway Dr".to_string(),
        city: "Warren".to_string(),
        state: "MI".to_string(),
        zip_code: "48091".to_string(),
        latitude: lat,
        longitude: lng,
        price_tier: Some(if id % 3 == 0 {
            PriceTier::Budget
        } else if id % 3 == 1 {
            PriceTier::Mid
        } else {
            PriceTier::Premium
        }),
        difficulty: Some(if id % 2 == 0 {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }),
        number_of_holes: Some("18".to_string()),
        club_membership: Some("Public".to_string()),
        amenities: Amenities {
            driving_range: id % 2 == 0,
            putting_green: id % 3 == 0,
            restaurant: id % 5 == 0,
            ..Default::default()
        },
        services: Services {
            motor_cart: id % 2 == 0,
            pull_cart: id % 4 == 0,
            ..Default::default()
        },
        technologies: vec![],
        updated_at: None,
    }
}

fn create_preferences() -> GolferPreferences {
    GolferPreferences {
        preferred_price_range: Some(PriceTier::Mid),
        preferred_difficulty: Some(Difficulty::Medium),
        amenities: Amenities {
            driving_range: true,
            putting_green: true,
            ..Default::default()
        },
        services: Services {
            motor_cart: true,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn bench_haversine_miles(c: &mut Criterion) {
    c.bench_function("haversine_miles", |b| {
        b.iter(|| {
            haversine_miles(
                black_box(42.4734),
                black_box(-83.0577),
                black_box(42.48),
                black_box(-83.06),
            )
        });
    });
}

fn bench_bounding_box(c: &mut Criterion) {
    c.bench_function("bounding_box_calculation", |b| {
        b.iter(|| calculate_bounding_box(black_box(GeoPoint::new(42.4734, -83.0577)), black_box(25.0)));
    });
}

fn bench_scoring(c: &mut Criterion) {
    let club = create_club(1, 42.48, -83.06);
    let preferences = create_preferences();
    let weights = ScoringWeights::default();

    c.bench_function("calculate_recommendation_score", |b| {
        b.iter(|| {
            calculate_recommendation_score(
                black_box(&club),
                black_box(&preferences),
                black_box(7.5),
                black_box(&weights),
            )
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let ranker = Ranker::with_default_weights();
    let preferences = create_preferences();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<(Club, f64)> = (0..*candidate_count)
            .map(|i| {
                let lat_offset = (i as f64 * 0.001) % 0.5;
                let club = create_club(i, 42.4734 + lat_offset, -83.0577);
                (club, (i as f64 * 0.07) % 40.0)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("rank", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    ranker.rank(
                        black_box(&preferences),
                        black_box(candidates.clone()),
                        black_box(0),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_haversine_miles,
    bench_bounding_box,
    bench_scoring,
    bench_ranking
);

criterion_main!(benches);
