//! Benchmarks for the pure split stages
//! Measures parsing, normalization, partitioning and job configuration planning

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::hint::black_box;
use std::path::Path;
use survey_split::catalog::{EventCatalogs, Question, QuestionCatalog};
use survey_split::config::JobSettings;
use survey_split::core::{build_partitions, normalize_records, plan_emissions};
use survey_split::io::parse_records;

/// Synthetic export with a spread of groups, events and questions
fn create_export(rows: usize) -> String {
    let mut data = String::from("Kürzel;Q;ID;Quote;Akteursgruppe\n");
    for i in 0..rows {
        let event = if i % 3 == 0 { "W" } else { "U" };
        data.push_str(&format!(
            "G{}_{}{};Q{};c{};Antwort Nummer {};Gruppe {}\n",
            i % 7,
            event,
            i % 4,
            i % 12,
            i,
            i,
            i % 7
        ));
    }
    data
}

fn create_catalogs() -> EventCatalogs {
    let questions = |prefix: &str| {
        (0..12)
            .map(|i| Question::new(format!("Q{}", i), format!("{} Frage {}", prefix, i)))
            .collect::<Vec<_>>()
    };
    EventCatalogs::new(
        QuestionCatalog::new("workshop", questions("Workshop")).unwrap(),
        QuestionCatalog::new("survey", questions("Umfrage")).unwrap(),
    )
}

fn bench_normalize_and_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_and_partition");

    for rows in [100, 1_000, 10_000] {
        let records = parse_records(&create_export(rows), b';').unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(rows), &records, |b, records| {
            b.iter_batched(
                || records.clone(),
                |records| {
                    let normalized = normalize_records(records).unwrap();
                    black_box(build_partitions(normalized))
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_plan_emissions(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_emissions");
    let catalogs = create_catalogs();
    let settings = JobSettings::default();

    for rows in [1_000, 10_000] {
        let records = parse_records(&create_export(rows), b';').unwrap();
        let partitions = build_partitions(normalize_records(records).unwrap());
        group.bench_with_input(BenchmarkId::from_parameter(rows), &partitions, |b, partitions| {
            b.iter(|| {
                let emissions = plan_emissions(
                    partitions,
                    Path::new("/tmp/export.csv"),
                    "csv",
                    &catalogs,
                    &settings,
                )
                .unwrap();
                black_box(emissions.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize_and_partition, bench_plan_emissions);
criterion_main!(benches);
