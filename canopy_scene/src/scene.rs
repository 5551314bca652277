// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene parameters, tiles, and the build pass.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use canopy_hierarchy::Hierarchy;
use canopy_palette::{CategoryColors, TextColor};
use canopy_treemap::{Layout, TreemapParams};
use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::legend::Legend;

/// Parameters of one render pass.
///
/// Defaults describe the funding treemap surface: a 1280 x 800 canvas with
/// 80 units of padding, a 30-unit band below the map reserved for the
/// legend, category-frame insets of 28 (top) and 15 (right), 3-unit gutters,
/// and a four-column legend of 15-unit swatches.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams {
    /// Canvas width.
    pub width: f64,
    /// Canvas height. The treemap itself gets `height - bottom_margin`.
    pub height: f64,
    /// Extra padding around the canvas in the rendered document.
    pub padding: f64,
    /// Vertical space reserved below the map for the legend band.
    pub bottom_margin: f64,
    /// Document title.
    pub title: String,
    /// Document subtitle.
    pub subtitle: String,
    /// Treemap padding configuration.
    pub treemap: TreemapParams,
    /// Number of legend columns.
    pub legend_columns: usize,
    /// Legend swatch side length.
    pub legend_swatch: f64,
    /// Vertical gap between legend rows.
    pub legend_row_gap: f64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            padding: 80.0,
            bottom_margin: 30.0,
            title: String::new(),
            subtitle: String::new(),
            treemap: TreemapParams {
                padding_top: 28.0,
                padding_right: 15.0,
                padding_inner: 3.0,
                ..TreemapParams::default()
            },
            legend_columns: 4,
            legend_swatch: 15.0,
            legend_row_gap: 2.0,
        }
    }
}

/// Identifier for a tile in a [`Scene`].
///
/// A plain index into [`Scene::tiles`], stable for the scene's lifetime.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TileId(pub u32);

impl TileId {
    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// One visible leaf rectangle with its visual encoding and metadata.
#[derive(Clone, Debug)]
pub struct Tile {
    /// Position within the map area.
    pub rect: Rect,
    /// Leaf name (also the tile label).
    pub name: String,
    /// Category tag; falls back to the top-level group name when the leaf
    /// carries none.
    pub category: String,
    /// Leaf value.
    pub value: f64,
    /// Fill color, inherited from the top-level ancestor.
    pub fill: Color,
    /// Contrast-resolved label foreground for `fill`.
    pub label_color: TextColor,
}

/// A fully encoded treemap scene: tiles plus legend.
///
/// Built once per render pass and read-only afterwards.
#[derive(Clone, Debug)]
pub struct Scene {
    /// The parameters the scene was built with.
    pub params: SceneParams,
    /// Leaf tiles in document order.
    pub tiles: Vec<Tile>,
    /// The category legend.
    pub legend: Legend,
}

impl Scene {
    /// Runs the visual-encoding pipeline over a hierarchy.
    ///
    /// Layout, color assignment, and legend derivation happen in one
    /// synchronous pass; the hierarchy is not retained. A hierarchy whose
    /// total aggregate is zero produces zero-area tiles rather than failing.
    pub fn build(tree: &Hierarchy, params: SceneParams) -> Self {
        let map_size = Size::new(params.width, (params.height - params.bottom_margin).max(0.0));
        let layout = Layout::compute(tree, map_size, &params.treemap);

        let mut colors = CategoryColors::new();
        for &top in tree.children(tree.root()) {
            colors.color_for(tree.name(top));
        }

        let tiles = tree
            .leaves()
            .map(|id| {
                let top = tree.top_level_ancestor(id);
                let fill = colors.color_for(tree.name(top));
                Tile {
                    rect: layout.rect(id),
                    name: tree.name(id).to_string(),
                    category: tree
                        .category(id)
                        .unwrap_or_else(|| tree.name(top))
                        .to_string(),
                    value: tree.value(id),
                    fill,
                    label_color: TextColor::for_background(fill),
                }
            })
            .collect();

        let legend = Legend::build(
            &colors,
            params.width,
            params.legend_columns,
            params.legend_swatch,
            params.legend_row_gap,
        );

        Self {
            params,
            tiles,
            legend,
        }
    }

    /// The tile at `id`.
    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id.idx()]
    }

    /// Resolves a pointer position (in map coordinates) to the tile under
    /// it.
    ///
    /// Tiles never overlap, so a document-order scan suffices; points in
    /// gutters or outside the map resolve to `None`.
    pub fn hit_test(&self, point: Point) -> Option<TileId> {
        self.tiles
            .iter()
            .position(|tile| tile.rect.contains(point))
            .map(|idx| TileId(idx as u32))
    }
}
