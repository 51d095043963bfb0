//! Benchmarks for the join/dedup step
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic catalog shaped like the filtered IMDb sets: every title
//! has a rating and one to three qualifying aliases.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use data_loader::{RatingAggregate, TitleAlias, TitleAttributes};
use pipeline::{FilteredSources, curate};

fn synthetic_sources(titles: usize) -> FilteredSources {
    let mut sources = FilteredSources::default();
    for i in 0..titles {
        let title_id = format!("tt{:07}", i);
        sources.titles.push(TitleAttributes {
            title_id: title_id.clone(),
            title_type: "movie".to_string(),
            primary_title: format!("Movie {}", i),
            start_year: Some(1980 + (i % 40) as i32),
            runtime_minutes: "110".to_string(),
            genres: "Action,Adventure,Drama".to_string(),
        });
        for region in ["US", "GB", "US"].iter().take(1 + i % 3) {
            sources.aliases.push(TitleAlias {
                title_id: title_id.clone(),
                region: region.to_string(),
            });
        }
        sources.ratings.push(RatingAggregate {
            title_id,
            average_rating: 6.0 + (i % 40) as f64 / 10.0,
            num_votes: 100_000 + i as u64,
        });
    }
    sources
}

fn bench_curate(c: &mut Criterion) {
    let sources = synthetic_sources(20_000);

    c.bench_function("curate_20k_titles", |b| {
        b.iter(|| {
            let curation = curate(black_box(&sources));
            black_box(curation)
        })
    });
}

criterion_group!(benches, bench_curate);
criterion_main!(benches);
