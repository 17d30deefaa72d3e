// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use logigram::format::markdown::{parse_io_events, parse_steps};
use logigram::report::aggregate;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `format.parse_steps`, `format.parse_io`, `report.aggregate`
// - Case IDs (the string after the `/`) must remain stable so results stay comparable.
fn benches_parse(c: &mut Criterion) {
    let cases = [
        ("small", fixtures::procedure(fixtures::Case::Small)),
        ("medium_dense", fixtures::procedure(fixtures::Case::MediumDense)),
        ("large_long_labels", fixtures::procedure(fixtures::Case::LargeLongLabels)),
    ];

    {
        let mut group = c.benchmark_group("format.parse_steps");
        for (case_id, text) in &cases {
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_function(*case_id, |b| {
                b.iter(|| {
                    let steps = parse_steps(black_box(text));
                    black_box(fixtures::checksum_steps(&steps))
                })
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("format.parse_io");
        let text = fixtures::io_table();
        group.bench_function("table", |b| b.iter(|| black_box(parse_io_events(black_box(text)))));
        group.finish();
    }

    {
        let mut group = c.benchmark_group("report.aggregate");
        for (case_id, text) in &cases {
            let steps = parse_steps(text);
            group.throughput(Throughput::Elements(steps.len() as u64));
            group.bench_function(*case_id, move |b| {
                b.iter(|| {
                    let actors = aggregate(black_box(&steps));
                    black_box(fixtures::checksum_actors(&actors))
                })
            });
        }
        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_parse
}
criterion_main!(benches);
