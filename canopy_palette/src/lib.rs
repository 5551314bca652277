// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Palette: ordinal category palettes and contrast resolution.
//!
//! Two small, pure pieces of the visual encoding:
//!
//! - [`CategoryColors`] maps category names to colors from a fixed, ordered
//!   palette by first-seen position. The default palette,
//!   [`DIVERGING_18`](ordinal::DIVERGING_18), concatenates the 7-class
//!   red-yellow-blue and 11-class purple-green ColorBrewer diverging
//!   schemes. When more categories appear than the palette holds,
//!   assignment cycles — deterministic and total, never a panic.
//! - [`TextColor`] picks a legible foreground (black or white) for a given
//!   background via the classic YIQ-style luma weighting, together with
//!   `#rrggbb` parsing and formatting helpers.
//!
//! Color assignment state is an explicit object constructed per render pass
//! and passed along, not a process-wide table; two passes over the same
//! document in the same order always produce the same assignment.
//!
//! ## Example
//!
//! ```
//! use canopy_palette::{CategoryColors, TextColor};
//!
//! let mut colors = CategoryColors::new();
//! let games = colors.color_for("Games");
//! // Stable for the rest of the pass.
//! assert_eq!(colors.color_for("Games"), games);
//!
//! let text = TextColor::for_background(games);
//! assert!(matches!(text, TextColor::Black | TextColor::White));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod contrast;
pub mod ordinal;

pub use contrast::{HexColorError, TextColor, luma, parse_hex_color, to_hex};
pub use ordinal::{CategoryColors, DIVERGING_18};
