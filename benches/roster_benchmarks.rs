//! Performance benchmarks for the employee roster.
//!
//! Covers the hot paths of a load/edit/save cycle:
//! - Building a single employee record
//! - Loading data files of 100 and 1000 rows
//! - Saving a 1000-employee roster
//! - Generating a weekly pay report
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use acme_roster::Roster;
use acme_roster::calculation::generate_pay_report;
use acme_roster::models::{Employee, IdAllocator};

/// Creates a data file body with `count` rows cycling through every kind.
fn create_data(count: usize) -> String {
    let templates = [
        "Executive,Exec {i}, exec{i}@acme-machining.com, ./images/placeholder.png, 120000, CFO",
        "Manager,Manager {i}, mgr{i}@acme-machining.com, ./images/placeholder.png, 80000, MACHINING",
        "Permanent,Machinist {i}, perm{i}@acme-machining.com, ./images/placeholder.png, 32.50, 04/01/19",
        "Temp,Temp {i}, temp{i}@acme-machining.com, ./images/placeholder.png, 18.75, 12/31/25",
    ];

    (0..count)
        .map(|i| templates[i % templates.len()].replace("{i}", &i.to_string()) + "\n")
        .collect()
}

fn create_roster(count: usize) -> Roster {
    let mut roster = Roster::new();
    roster
        .load(create_data(count).as_bytes())
        .expect("Failed to load benchmark data");
    roster
}

fn bench_single_record(c: &mut Criterion) {
    let ids = IdAllocator::new();
    c.bench_function("build_executive", |b| {
        b.iter(|| {
            Employee::executive(
                black_box(&ids),
                black_box("Elon"),
                black_box("x@acme-machining.com"),
                black_box(Decimal::from(60_000)),
                black_box("CEO"),
            )
        })
    });
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_rows");
    for count in [100usize, 1000] {
        let data = create_data(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &data, |b, data| {
            b.iter(|| {
                let mut roster = Roster::new();
                roster.load(black_box(data.as_bytes())).unwrap();
                roster
            })
        });
    }
    group.finish();
}

fn bench_save(c: &mut Criterion) {
    let roster = create_roster(1000);
    c.bench_function("save_1000_rows", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(100_000);
            roster.save(&mut buffer).unwrap();
            buffer
        })
    });
}

fn bench_pay_report(c: &mut Criterion) {
    let roster = create_roster(1000);
    c.bench_function("pay_report_1000", |b| {
        b.iter(|| generate_pay_report(black_box(&roster)))
    });
}

criterion_group!(
    benches,
    bench_single_record,
    bench_load,
    bench_save,
    bench_pay_report
);
criterion_main!(benches);
