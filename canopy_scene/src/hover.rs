// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state tracking and tooltip content.
//!
//! A tile's interaction model has exactly two states, idle and hovered.
//! [`HoverState::update`] consumes the hit-test result of each pointer event
//! and reports the transitions it implies; pointer moves within a tile
//! re-enter the hovered state (the host re-renders the tooltip, which is
//! idempotent), and leaving a tile returns to idle. Nothing survives a
//! render pass.
//!
//! ## Usage
//!
//! ```
//! use canopy_scene::{HoverEvent, HoverState, TileId};
//!
//! let mut hover = HoverState::new();
//!
//! // Pointer enters tile 0.
//! assert_eq!(hover.update(Some(TileId(0))), vec![HoverEvent::Enter(TileId(0))]);
//!
//! // Pointer moves within tile 0.
//! assert_eq!(hover.update(Some(TileId(0))), vec![HoverEvent::Move(TileId(0))]);
//!
//! // Pointer jumps straight to tile 1.
//! assert_eq!(
//!     hover.update(Some(TileId(1))),
//!     vec![HoverEvent::Leave(TileId(0)), HoverEvent::Enter(TileId(1))]
//! );
//!
//! // Pointer leaves the map.
//! assert_eq!(hover.update(None), vec![HoverEvent::Leave(TileId(1))]);
//! assert_eq!(hover.update(None), vec![]);
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use canopy_palette::TextColor;
use peniko::Color;

use crate::scene::{Scene, TileId};

/// A hover transition produced by [`HoverState::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// The pointer entered a tile; highlight it and show the tooltip.
    Enter(TileId),
    /// The pointer moved within the hovered tile; refresh the tooltip.
    Move(TileId),
    /// The pointer left a tile; drop the highlight and hide the tooltip.
    Leave(TileId),
}

/// Tracks which tile, if any, the pointer is over.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
    current: Option<TileId>,
}

impl HoverState {
    /// Creates an idle hover state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently hovered tile, if any.
    pub fn hovered(&self) -> Option<TileId> {
        self.current
    }

    /// Feeds one hit-test result and returns the resulting transitions.
    ///
    /// At most two events are produced (a leave followed by an enter, when
    /// the pointer jumps between adjacent tiles in a single move).
    pub fn update(&mut self, hit: Option<TileId>) -> Vec<HoverEvent> {
        let mut events = Vec::new();
        match (self.current, hit) {
            (None, None) => {}
            (None, Some(next)) => events.push(HoverEvent::Enter(next)),
            (Some(prev), None) => events.push(HoverEvent::Leave(prev)),
            (Some(prev), Some(next)) if prev == next => {
                events.push(HoverEvent::Move(next));
            }
            (Some(prev), Some(next)) => {
                events.push(HoverEvent::Leave(prev));
                events.push(HoverEvent::Enter(next));
            }
        }
        self.current = hit;
        events
    }
}

/// Tooltip content and colors for one hovered tile.
///
/// Rebuilt from the scene on every hover; the single tooltip surface is
/// overwritten each time, so the last writer always wins. The border is
/// drawn in the foreground color.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Leaf name.
    pub name: String,
    /// Leaf category.
    pub category: String,
    /// Leaf value.
    pub value: f64,
    /// Tooltip background: the tile's category color.
    pub background: Color,
    /// Text and border color, contrast-resolved against the background.
    pub foreground: TextColor,
}

impl Tooltip {
    /// Builds the tooltip for a tile.
    pub fn for_tile(scene: &Scene, id: TileId) -> Self {
        let tile = scene.tile(id);
        Self {
            name: tile.name.clone(),
            category: tile.category.clone(),
            value: tile.value,
            background: tile.fill,
            foreground: TextColor::for_background(tile.fill),
        }
    }

    /// The tooltip body as three lines of text.
    pub fn text(&self) -> String {
        alloc::format!(
            "{}\nCategory: {}\nValue: {}",
            self.name,
            self.category,
            self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneParams;
    use alloc::vec;
    use canopy_hierarchy::{Hierarchy, Node};

    #[test]
    fn idle_stays_idle_without_hits() {
        let mut hover = HoverState::new();
        assert_eq!(hover.update(None), vec![]);
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn enter_then_move_then_leave() {
        let mut hover = HoverState::new();
        let tile = TileId(3);
        assert_eq!(hover.update(Some(tile)), vec![HoverEvent::Enter(tile)]);
        assert_eq!(hover.hovered(), Some(tile));
        // Repeated moves re-enter the hovered state.
        assert_eq!(hover.update(Some(tile)), vec![HoverEvent::Move(tile)]);
        assert_eq!(hover.update(Some(tile)), vec![HoverEvent::Move(tile)]);
        assert_eq!(hover.update(None), vec![HoverEvent::Leave(tile)]);
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn jumping_between_tiles_leaves_then_enters() {
        let mut hover = HoverState::new();
        hover.update(Some(TileId(0)));
        assert_eq!(
            hover.update(Some(TileId(1))),
            vec![HoverEvent::Leave(TileId(0)), HoverEvent::Enter(TileId(1))]
        );
        assert_eq!(hover.hovered(), Some(TileId(1)));
    }

    #[test]
    fn tooltip_carries_tile_metadata_and_colors() {
        let root = Node::branch(
            "root",
            vec![Node::branch(
                "Games",
                vec![Node::leaf("P1", "Games", 100.0)],
            )],
        );
        let tree = Hierarchy::from_root(&root).unwrap();
        let scene = Scene::build(&tree, SceneParams::default());

        let tooltip = Tooltip::for_tile(&scene, TileId(0));
        assert_eq!(tooltip.name, "P1");
        assert_eq!(tooltip.category, "Games");
        assert_eq!(tooltip.value, 100.0);
        assert_eq!(tooltip.background.to_rgba8(), scene.tiles[0].fill.to_rgba8());
        assert_eq!(
            tooltip.foreground,
            TextColor::for_background(scene.tiles[0].fill)
        );
        assert_eq!(tooltip.text(), "P1\nCategory: Games\nValue: 100");
    }

    #[test]
    fn tooltip_is_rebuilt_per_tile() {
        let root = Node::branch(
            "root",
            vec![
                Node::branch("Games", vec![Node::leaf("P1", "Games", 100.0)]),
                Node::branch("Tech", vec![Node::leaf("P2", "Tech", 300.0)]),
            ],
        );
        let tree = Hierarchy::from_root(&root).unwrap();
        let scene = Scene::build(&tree, SceneParams::default());

        let a = Tooltip::for_tile(&scene, TileId(0));
        let b = Tooltip::for_tile(&scene, TileId(1));
        assert_ne!(a, b);
        assert_ne!(a.background.to_rgba8(), b.background.to_rgba8());
    }
}
