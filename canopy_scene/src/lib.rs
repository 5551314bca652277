// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Scene: the treemap presentation model.
//!
//! This crate sits between the layout/encoding stages and concrete render
//! backends, the way a display list sits between layout and a rasterizer.
//! [`Scene::build`] runs the whole visual-encoding pipeline in one
//! synchronous pass — hierarchy in, positioned and colored model out:
//!
//! 1. compute the treemap layout over the map area (canvas height minus the
//!    reserved legend band);
//! 2. assign palette colors to the top-level categories in document order;
//! 3. emit one [`Tile`] per leaf, filled with its top-level ancestor's color
//!    and labeled in the contrast-resolved foreground;
//! 4. derive the [`Legend`] with its column-major grid placement.
//!
//! The scene is pure data: no I/O, no backend types. `canopy_svg` projects
//! it to a document; an interactive host can instead drive the interaction
//! model offered here:
//!
//! - [`Scene::hit_test`] resolves a pointer position to a tile;
//! - [`HoverState`] turns a stream of hit results into enter/move/leave
//!   transitions (two states, idle and hovered — nothing else);
//! - [`Tooltip::for_tile`] produces the tooltip content and colors for the
//!   hovered tile, rebuilt on every hover; the single tooltip is always
//!   overwritten, never appended to.
//!
//! ## Example
//!
//! ```
//! use canopy_hierarchy::{Hierarchy, Node};
//! use canopy_scene::{Scene, SceneParams};
//!
//! let root = Node::branch(
//!     "root",
//!     vec![
//!         Node::branch("Games", vec![Node::leaf("P1", "Games", 100.0)]),
//!         Node::branch("Tech", vec![Node::leaf("P2", "Tech", 300.0)]),
//!     ],
//! );
//! let tree = Hierarchy::from_root(&root).unwrap();
//! let scene = Scene::build(&tree, SceneParams::default());
//! assert_eq!(scene.tiles.len(), 2);
//! assert_eq!(scene.legend.entries.len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hover;
mod legend;
mod scene;

pub use hover::{HoverEvent, HoverState, Tooltip};
pub use legend::{Legend, LegendEntry, legend_cell};
pub use scene::{Scene, SceneParams, Tile, TileId};
