// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Logigram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use logigram::format::markdown::parse_steps;
use logigram::layout::{build_flowchart_graph, layout_flowchart, LayoutMetrics, WrapWidths};
use logigram::render::{render_flowchart, render_svg, FlowchartConfig, Theme};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `layout.flowchart`, `render.svg`, `render.png`
// - Case IDs (the string after the `/`) must remain stable so results stay comparable.
fn benches_render(c: &mut Criterion) {
    let cases = [
        ("small", parse_steps(&fixtures::procedure(fixtures::Case::Small))),
        ("medium_dense", parse_steps(&fixtures::procedure(fixtures::Case::MediumDense))),
        ("large_long_labels", parse_steps(&fixtures::procedure(fixtures::Case::LargeLongLabels))),
    ];
    let wrap = WrapWidths::default();
    let metrics = LayoutMetrics::default();
    let theme = Theme::default();

    {
        let mut group = c.benchmark_group("layout.flowchart");
        for (case_id, steps) in &cases {
            group.throughput(Throughput::Elements(steps.len() as u64));
            group.bench_function(*case_id, |b| {
                b.iter(|| {
                    let graph = build_flowchart_graph(black_box(steps), "Début", "Fin", &wrap).expect("graph");
                    let layout = layout_flowchart(&graph, &metrics);
                    black_box(layout.routes().len().wrapping_add(layout.placements().len()))
                })
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("render.svg");
        for (case_id, steps) in &cases {
            let graph = build_flowchart_graph(steps, "Début", "Fin", &wrap).expect("graph");
            let layout = layout_flowchart(&graph, &metrics);
            group.throughput(Throughput::Elements(steps.len() as u64));
            group.bench_function(*case_id, |b| {
                b.iter(|| black_box(render_svg(black_box(&graph), &layout, &theme).len()))
            });
        }
        group.finish();
    }

    {
        // Font loading dominates small charts; keep the case list short.
        let mut group = c.benchmark_group("render.png");
        group.sample_size(10);
        let config = FlowchartConfig::default();
        for (case_id, steps) in cases.iter().take(2) {
            group.bench_function(*case_id, |b| {
                b.iter(|| {
                    let image = render_flowchart(black_box(steps), "Début", "Fin", &config).expect("png");
                    black_box(image.png().len())
                })
            });
        }
        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
