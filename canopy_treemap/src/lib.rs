// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Treemap: squarified treemap layout over weighted hierarchies.
//!
//! Given a [`Hierarchy`] and a canvas size, [`Layout::compute`] assigns every
//! node an axis-aligned rectangle such that:
//!
//! - the root occupies the full canvas;
//! - the children of each branch tile their parent's rectangle — after the
//!   configured top/right/bottom/left insets — with areas proportional to
//!   their aggregate weights;
//! - adjacent siblings are separated by the configured inner gutter.
//!
//! Tiling uses the squarified algorithm (Bruls, Huizing, van Wijk): siblings
//! are laid out strip by strip along the short side of the remaining region,
//! and a strip accepts the next sibling only while that improves the worst
//! aspect ratio in the strip. Siblings are processed in document order and
//! never sorted, so the layout is deterministic for a given input ordering.
//!
//! Gutters follow the half-padding scheme: each child rectangle is shrunk by
//! half the inner gutter on all sides while the children's region is expanded
//! by the same half, so interior edges end up a full gutter apart and the
//! outermost children still touch the parent's insets.
//!
//! Degenerate inputs degrade instead of failing: if a sibling group's total
//! weight is zero, or its region has collapsed, every child receives a
//! zero-area rectangle at the region's origin.
//!
//! Only leaf rectangles are usually rendered as tiles; branch rectangles
//! exist to frame their children (the top inset leaves room for a group
//! label band).
//!
//! ## Example
//!
//! ```
//! use canopy_hierarchy::{Hierarchy, Node};
//! use canopy_treemap::{Layout, TreemapParams};
//! use kurbo::Size;
//!
//! let root = Node::branch(
//!     "root",
//!     vec![Node::leaf("a", "X", 1.0), Node::leaf("b", "X", 3.0)],
//! );
//! let tree = Hierarchy::from_root(&root).unwrap();
//! let layout = Layout::compute(&tree, Size::new(100.0, 100.0), &TreemapParams::default());
//!
//! let leaves: Vec<_> = tree.leaves().collect();
//! let ratio = layout.rect(leaves[1]).area() / layout.rect(leaves[0]).area();
//! assert!((ratio - 3.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tile;

use alloc::vec;
use alloc::vec::Vec;
use canopy_hierarchy::{Hierarchy, NodeId};
use kurbo::{Rect, Size};

/// Padding configuration for a treemap layout.
///
/// All values are in canvas units. The four outer paddings inset the region
/// a branch hands to its children; `padding_inner` is the gutter between
/// adjacent sibling rectangles. Defaults are all zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TreemapParams {
    /// Inset from a branch's top edge (label band space).
    pub padding_top: f64,
    /// Inset from a branch's right edge.
    pub padding_right: f64,
    /// Inset from a branch's bottom edge.
    pub padding_bottom: f64,
    /// Inset from a branch's left edge.
    pub padding_left: f64,
    /// Gutter between adjacent sibling rectangles.
    pub padding_inner: f64,
}

/// A computed treemap layout: one rectangle per hierarchy node.
#[derive(Clone, Debug)]
pub struct Layout {
    rects: Vec<Rect>,
}

impl Layout {
    /// Computes rectangles for every node of `tree` within `[0, 0] x size`.
    pub fn compute(tree: &Hierarchy, size: Size, params: &TreemapParams) -> Self {
        let mut layout = Self {
            rects: vec![Rect::ZERO; tree.len()],
        };
        layout.rects[tree.root().0 as usize] = size.to_rect();
        layout.position(tree, tree.root(), 0.0, params);
        layout
    }

    /// The rectangle assigned to a node.
    pub fn rect(&self, id: NodeId) -> Rect {
        self.rects[id.0 as usize]
    }

    /// Leaf rectangles paired with their ids, in document order.
    pub fn leaf_rects<'a>(
        &'a self,
        tree: &'a Hierarchy,
    ) -> impl Iterator<Item = (NodeId, Rect)> + 'a {
        tree.leaves().map(move |id| (id, self.rect(id)))
    }

    /// Finalizes `id`'s rectangle (shrinking it by the surrounding half
    /// gutter) and tiles its children into the inset interior.
    fn position(&mut self, tree: &Hierarchy, id: NodeId, half: f64, params: &TreemapParams) {
        let r = shrink(self.rects[id.0 as usize], half);
        self.rects[id.0 as usize] = r;

        let children = tree.children(id);
        if children.is_empty() {
            return;
        }

        let child_half = params.padding_inner / 2.0;
        let region = clamp_region(Rect::new(
            r.x0 + params.padding_left - child_half,
            r.y0 + params.padding_top - child_half,
            r.x1 - params.padding_right + child_half,
            r.y1 - params.padding_bottom + child_half,
        ));

        let weights: Vec<f64> = children.iter().map(|&c| tree.value(c)).collect();
        let tiles = tile::squarify(&weights, region);
        for (&child, tile) in children.iter().zip(tiles) {
            self.rects[child.0 as usize] = tile;
        }

        for &child in children {
            self.position(tree, child, child_half, params);
        }
    }
}

/// Shrinks a rectangle by `inset` on all sides, collapsing degenerate axes
/// to their midline instead of inverting.
fn shrink(r: Rect, inset: f64) -> Rect {
    clamp_region(Rect::new(
        r.x0 + inset,
        r.y0 + inset,
        r.x1 - inset,
        r.y1 - inset,
    ))
}

fn clamp_region(r: Rect) -> Rect {
    let (x0, x1) = if r.x1 < r.x0 {
        let mid = (r.x0 + r.x1) / 2.0;
        (mid, mid)
    } else {
        (r.x0, r.x1)
    };
    let (y0, y1) = if r.y1 < r.y0 {
        let mid = (r.y0 + r.y1) / 2.0;
        (mid, mid)
    } else {
        (r.y0, r.y1)
    };
    Rect::new(x0, y0, x1, y1)
}
