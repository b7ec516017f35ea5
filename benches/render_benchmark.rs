//! Performance benchmarks for catalog views and frame rendering
//!
//! Measures filtering and grouping over generated catalogs, and a full
//! browse-screen draw into a test backend.
//! Run with: cargo bench

use std::sync::Arc;

use bossdex::adapters::mock::{InMemoryPreferences, MockHttpClient};
use bossdex::app::App;
use bossdex::catalog::CatalogClient;
use bossdex::models::{Boss, Difficulty, Isle};
use bossdex::preferences::PreferenceStore;
use bossdex::views::{filter_bosses, group_by_isle, FilterCriteria};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Generate a catalog spread evenly across isles and difficulties
fn generate_catalog(count: usize) -> Vec<Boss> {
    (0..count)
        .map(|i| {
            let difficulty = Difficulty::from_half_steps((i % 11) as u8).unwrap_or(Difficulty::ZERO);
            let isle = Isle::ALL[i % Isle::ALL.len()];
            Boss::new(i as u32 + 1, format!("Boss number {}", i + 1), difficulty, isle)
        })
        .collect()
}

/// Benchmark search filtering with all criteria set
fn bench_filter_bosses(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_bosses");

    let mut criteria = FilterCriteria::new();
    criteria.set_search_text("number 1");
    criteria.set_isle_number(2);

    for size in [10, 100, 1000, 10000].iter() {
        let catalog = generate_catalog(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| black_box(filter_bosses(black_box(catalog), &criteria)));
        });
    }

    group.finish();
}

/// Benchmark isle grouping
fn bench_group_by_isle(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by_isle");

    for size in [10, 1000].iter() {
        let catalog = generate_catalog(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| black_box(group_by_isle(black_box(catalog)).total()));
        });
    }

    group.finish();
}

/// Benchmark drawing the browse screen with one isle expanded
fn bench_render_browse(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_browse");

    for size in [10, 200].iter() {
        let catalog = CatalogClient::new(Arc::new(MockHttpClient::new()), "http://bench.test");
        let store = PreferenceStore::load(Box::new(InMemoryPreferences::new()));
        let mut app = App::new(catalog, store);
        app.bosses = generate_catalog(*size);
        app.bosses_loaded = true;
        app.toggle_isle_expansion(Isle::One);

        let mut terminal = match Terminal::new(TestBackend::new(120, 40)) {
            Ok(t) => t,
            Err(e) => panic!("test backend: {}", e),
        };

        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                terminal
                    .draw(|f| bossdex::ui::render(f, black_box(&app)))
                    .map(|_| ())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_filter_bosses,
    bench_group_by_isle,
    bench_render_browse
);
criterion_main!(benches);
