// benches/batch.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use profile_scrape::data::{ResultSet, RowFilter};
use profile_scrape::profile::{ProfileProcessor, SampleSource};
use profile_scrape::progress::NullProgress;

fn urls(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("https://www.linkedin.com/in/user-{i}")).collect()
}

fn bench_batch(c: &mut Criterion) {
    let urls = urls(500);

    c.bench_function("batch_500_sample", |b| {
        b.iter(|| {
            let mut processor = ProfileProcessor::new(SampleSource::seeded(42))
                .with_pause(std::time::Duration::ZERO);
            let report = processor.process_batch(black_box(&urls), &mut NullProgress);
            black_box(report.rows.len())
        })
    });

    let set: ResultSet = ProfileProcessor::new(SampleSource::seeded(42))
        .with_pause(std::time::Duration::ZERO)
        .process_batch(&urls, &mut NullProgress)
        .into_result_set();

    c.bench_function("search_view_company", |b| {
        let filter = RowFilter::search("", "company 4", None);
        b.iter(|| black_box(set.view(black_box(&filter)).len()))
    });

    c.bench_function("summary", |b| {
        b.iter(|| black_box(set.summary()))
    });
}

criterion_group!(benches, bench_batch);
criterion_main!(benches);
