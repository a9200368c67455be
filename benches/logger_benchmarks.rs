//! Criterion benchmarks for fanlog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fanlog::prelude::*;

/// Writer that accepts everything and does nothing, to isolate core costs.
struct NullWriter;

impl Writer for NullWriter {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }
    fn write(&mut self, record: &Record) -> Result<()> {
        black_box(record);
        Ok(())
    }
    fn name(&self) -> &str {
        "null"
    }
}

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("with_capacity_1024", |b| {
        b.iter(|| {
            let logger = Logger::with_capacity(1024);
            black_box(logger)
        });
    });

    group.finish();
}

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let mut logger = Logger::with_capacity(8192);
    logger.register(Box::new(NullWriter)).unwrap();

    group.bench_function("info_plain", |b| {
        b.iter(|| {
            logger.info(black_box("benchmark message"));
        });
    });

    group.bench_function("info_formatted", |b| {
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            logger.info(format!("benchmark message {}", black_box(i)));
        });
    });

    group.finish();
}

fn bench_record_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_render");
    group.throughput(Throughput::Elements(1));

    let record = Record {
        timestamp: "2026/08/07 10:30:45".to_string(),
        source: "worker.rs:88".to_string(),
        message: "a log line of representative length for rendering".to_string(),
        level: Level::Info,
    };

    group.bench_function("render", |b| {
        b.iter(|| black_box(record.render()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_emission,
    bench_record_render
);
criterion_main!(benches);
