//! Criterion benchmarks for computation tree evaluation over synthetic
//! models of growing size, with and without a warm memo.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tether_core::{
    ArchitectureItem, ArchitectureItemKind, ArchitectureModel, CodeItem, CodeItemKind, CodeModel,
    LinkerConfig, SimilarityConfig,
};
use tether_linker::heuristics::StandaloneHeuristic;
use tether_linker::{Aggregation, ComputationResult, ComputationTree, TraceLinkGenerator};
use tether_wordsim::WordSimEngine;

const COMPONENTS: &[&str] = &[
    "user service",
    "billing",
    "storage",
    "scheduler",
    "telemetry",
    "gateway",
    "parser",
    "renderer",
];

fn synthetic_models(arch_count: usize, code_count: usize) -> (ArchitectureModel, CodeModel) {
    let mut arch = ArchitectureModel::new("arch");
    for i in 0..arch_count {
        let name = COMPONENTS[i % COMPONENTS.len()];
        arch.push(ArchitectureItem::new(
            format!("a{i}"),
            name,
            ArchitectureItemKind::Component,
        ));
    }
    let mut code = CodeModel::new("code");
    for i in 0..code_count {
        let name = COMPONENTS[i % COMPONENTS.len()].replace(' ', "");
        code.push(CodeItem::new(
            format!("c{i}"),
            format!("{name}Impl"),
            format!("src/{name}/mod.rs"),
            CodeItemKind::Unit,
        ));
    }
    (arch, code)
}

struct PrefixOverlap;

impl StandaloneHeuristic for PrefixOverlap {
    fn name(&self) -> &str {
        "prefix_overlap"
    }

    fn assess(&self, arch: &ArchitectureItem, code: &CodeItem) -> Option<f64> {
        let shared = arch
            .name
            .bytes()
            .zip(code.name.to_lowercase().bytes())
            .take_while(|(a, b)| a == b)
            .count();
        (shared > 2).then(|| shared as f64 / arch.name.len().max(1) as f64)
    }
}

fn bench_tree_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_evaluation");
    for size in [8usize, 32, 64] {
        let (arch, code) = synthetic_models(size, size * 4);

        let mut tree = ComputationTree::new();
        let leaf = tree.standalone(Arc::new(PrefixOverlap));
        let left = tree.aggregation(Aggregation::Maximum, &[leaf]);
        let right = tree.aggregation(Aggregation::Average { weights: None }, &[leaf]);
        let root = tree.aggregation(Aggregation::Average { weights: None }, &[left, right]);

        group.bench_with_input(BenchmarkId::new("cold", size), &size, |b, _| {
            b.iter(|| black_box(tree.run(root, black_box(&arch), black_box(&code))))
        });

        group.bench_with_input(BenchmarkId::new("warm", size), &size, |b, _| {
            let mut memo = ComputationResult::new();
            tree.evaluate(root, &arch, &code, &mut memo);
            b.iter(|| black_box(tree.evaluate(root, black_box(&arch), black_box(&code), &mut memo)))
        });
    }
    group.finish();
}

fn bench_default_generator(c: &mut Criterion) {
    let engine = WordSimEngine::from_config(&SimilarityConfig::default())
        .map(Arc::new)
        .unwrap();
    let generator = TraceLinkGenerator::with_default_tree(engine, LinkerConfig::default());
    let (arch, code) = synthetic_models(8, 32);

    c.bench_function("generate_default_tree", |b| {
        b.iter(|| black_box(generator.generate(black_box(&arch), black_box(&code))))
    });
}

criterion_group!(benches, bench_tree_evaluation, bench_default_generator);
criterion_main!(benches);
