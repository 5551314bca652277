// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for treemap layout and scene building.
//!
//! Uses deterministic synthetic hierarchies shaped like the funding
//! document: a root of categories, each holding a run of weighted leaves.

use canopy_hierarchy::{Hierarchy, Node};
use canopy_scene::{Scene, SceneParams};
use canopy_treemap::{Layout, TreemapParams};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;

fn synthetic_tree(categories: usize, leaves_per_category: usize) -> Hierarchy {
    let children = (0..categories)
        .map(|c| {
            let leaves = (0..leaves_per_category)
                .map(|l| {
                    // Uneven but deterministic weights.
                    let weight = ((l * 37 + c * 11) % 97 + 1) as f64;
                    Node::leaf(format!("item-{c}-{l}"), format!("cat-{c}"), weight)
                })
                .collect();
            Node::branch(format!("cat-{c}"), leaves)
        })
        .collect();
    Hierarchy::from_root(&Node::branch("root", children)).expect("synthetic tree is valid")
}

fn layout_params() -> TreemapParams {
    TreemapParams {
        padding_top: 28.0,
        padding_right: 15.0,
        padding_inner: 3.0,
        ..TreemapParams::default()
    }
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("treemap_layout");
    for (categories, leaves) in [(18, 25), (18, 100), (50, 200)] {
        let tree = synthetic_tree(categories, leaves);
        let params = layout_params();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{categories}x{leaves}")),
            &tree,
            |b, tree| {
                b.iter(|| {
                    black_box(Layout::compute(
                        black_box(tree),
                        Size::new(1280.0, 770.0),
                        &params,
                    ))
                });
            },
        );
    }
    group.finish();
}

fn bench_scene_build(c: &mut Criterion) {
    let tree = synthetic_tree(18, 25);
    c.bench_function("scene_build_18x25", |b| {
        b.iter(|| black_box(Scene::build(black_box(&tree), SceneParams::default())));
    });
}

criterion_group!(benches, bench_layout, bench_scene_build);
criterion_main!(benches);
