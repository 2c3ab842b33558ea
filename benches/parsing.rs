extern crate slnscope;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use slnscope::{Framework, Project, Solution};
use std::{fs, hint::black_box, path::PathBuf};

fn sample(relative: &str) -> Vec<u8> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/samples/Method.Contracts")
        .join(relative);
    fs::read(&path).expect("Failed to read sample file")
}

/// Benchmark the `.sln` text parser on the sample solution
fn bench_parse_solution(c: &mut Criterion) {
    let data = sample("Method.Contracts.sln");

    let mut group = c.benchmark_group("solution");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("from_mem", |b| {
        b.iter(|| {
            let solution = Solution::from_mem("Method.Contracts", black_box(&data)).unwrap();
            black_box(solution)
        });
    });
    group.finish();
}

/// Benchmark the project extractor on the sample library project
fn bench_load_project(c: &mut Criterion) {
    let data = sample("Method.Contracts/Method.Contracts.csproj");

    let mut group = c.benchmark_group("project");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("load_details_from_mem", |b| {
        b.iter(|| {
            let mut project = Project::new("Method.Contracts");
            project.load_details_from_mem(black_box(&data)).unwrap();
            black_box(project)
        });
    });
    group.finish();
}

fn bench_parse_frameworks(c: &mut Criterion) {
    let monikers = [
        "net481",
        "net8.0-windows7.0",
        "netstandard2.0",
        "netcoreapp3.1",
        "net9.0-android35.0",
    ];

    c.bench_function("framework_parse", |b| {
        b.iter(|| {
            for moniker in monikers {
                black_box(Framework::parse(black_box(moniker)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_parse_solution,
    bench_load_project,
    bench_parse_frameworks
);
criterion_main!(benches);
