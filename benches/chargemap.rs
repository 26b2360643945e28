use chargemap::{
    dataset::{Dataset, models::DatasetCharger},
    engine::{Event, Session},
    repository::Repository,
    shared::{self, Coordinate},
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::{hint::black_box, sync::Arc, time::Duration};

const NAMES: [&str; 4] = ["Tesla Supercharger", "Ionity", "Vattenfall InCharge", "Circle K"];

fn synthetic_repository(count: usize) -> Repository {
    let records = (0..count)
        .map(|i| DatasetCharger {
            id: i.to_string(),
            name: format!("{} {i}", NAMES[i % NAMES.len()]),
            address: format!("Road {i}"),
            latitude: 59.0 + (i % 100) as f64 * 0.01,
            longitude: 18.0 + (i / 100) as f64 * 0.01,
            connector_types: vec!["CCS-4".into(), "Type2-2".into()],
        })
        .collect();
    Repository::new()
        .load_dataset(Dataset::new().from_records(records))
        .expect("Failed to build repository")
}

fn annotate(repository: &Repository) {
    let coordinate = Coordinate::from((59.370_136, 18.001_749));
    let _ = black_box(repository.annotate(&coordinate));
}

fn search(repository: &Repository) {
    let chargers = repository.annotate(&Coordinate::from((59.370_136, 18.001_749)));
    let _ = black_box(shared::filter_by_name("incharge", &chargers));
}

fn session_search(session: &Session) {
    let _ = black_box(session.clone().reduce(Event::QueryChanged("ionity".into())));
}

fn criterion_benchmark(c: &mut Criterion) {
    let repository = synthetic_repository(10_000);
    let session = Session::new(Arc::new(repository.clone()))
        .reduce(Event::LocationFixed(Coordinate::from((59.370_136, 18.001_749))));

    let mut group = c.benchmark_group("Proximity");

    group.measurement_time(Duration::from_secs(10));

    group.bench_function("Annotate 10k", |b| b.iter(|| annotate(&repository)));

    group.bench_function("Search 10k", |b| b.iter(|| search(&repository)));

    group.bench_function("Session search 10k", |b| b.iter(|| session_search(&session)));

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
