// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export backend for Canopy treemap scenes.
//!
//! [`render`] turns a [`Scene`] into a standalone SVG document. This is a
//! faithful static projection of the scene, not a pixel-perfect renderer:
//!
//! - Every tile becomes a `<g class="cell">` holding the fill rectangle
//!   (with `data-name`, `data-value`, and `data-category` attributes so the
//!   document stays queryable), a label clipped to the tile bounds, and a
//!   native `<title>` carrying the tooltip text.
//! - The hover contract is projected to CSS: `.cell:hover .tile` swaps the
//!   fixed border for the black highlight stroke, and viewers surface the
//!   `<title>` as a tooltip. Interactive hosts that want the styled,
//!   pointer-following tooltip drive `canopy_scene`'s hover model directly
//!   instead; no script is embedded in the document.
//! - Title and subtitle occupy a heading band above the map; the legend
//!   renders in the band below it, at the grid offsets the scene computed.
//!
//! ## Example
//!
//! ```
//! use canopy_hierarchy::{Hierarchy, Node};
//! use canopy_scene::{Scene, SceneParams};
//!
//! let root = Node::branch(
//!     "root",
//!     vec![Node::branch("Games", vec![Node::leaf("P1", "Games", 100.0)])],
//! );
//! let tree = Hierarchy::from_root(&root).unwrap();
//! let scene = Scene::build(&tree, SceneParams::default());
//! let svg = canopy_svg::render(&scene);
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt::Write as _;

use canopy_palette::to_hex;
use canopy_scene::{Scene, SceneParams, TileId, Tooltip};

/// Stroke color of an idle tile border.
const TILE_STROKE: &str = "#d34e24";
/// Stroke color of a hovered tile border.
const HOVER_STROKE: &str = "black";

/// Renders a scene as a standalone SVG document.
pub fn render(scene: &Scene) -> String {
    let params = &scene.params;
    let doc_width = params.width + params.padding;
    // Heading band on top, map in the middle, legend band below.
    let heading = params.padding;
    let doc_height = heading + params.height + params.padding;
    let margin = params.padding / 2.0;

    let mut defs = String::new();
    let mut body = String::new();

    write_headings(&mut body, params, doc_width);
    write_map(&mut defs, &mut body, scene, margin, heading);
    write_legend(&mut body, scene, margin, heading);

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = fmt_f64(doc_width),
        h = fmt_f64(doc_height),
    );
    write_style(&mut svg);
    if !defs.is_empty() {
        svg.push_str("<defs>");
        svg.push_str(&defs);
        svg.push_str("</defs>");
    }
    svg.push_str(&body);
    svg.push_str("</svg>");
    svg
}

fn write_style(out: &mut String) {
    out.push_str("<style>");
    out.push_str("text{font-family:sans-serif;}");
    let _ = write!(
        out,
        ".cell .tile{{stroke:{TILE_STROKE};stroke-width:1;}}"
    );
    let _ = write!(
        out,
        ".cell:hover .tile{{stroke:{HOVER_STROKE};}}"
    );
    out.push_str(".label{font-size:10px;}");
    out.push_str(".legend-text{font-size:10px;}");
    out.push_str("</style>");
}

fn write_headings(out: &mut String, params: &SceneParams, doc_width: f64) {
    let center = fmt_f64(doc_width / 2.0);
    if !params.title.is_empty() {
        let _ = write!(
            out,
            "<text id=\"title\" x=\"{center}\" y=\"40\" text-anchor=\"middle\" font-size=\"28\">{}</text>",
            escape_xml(&params.title),
        );
    }
    if !params.subtitle.is_empty() {
        let _ = write!(
            out,
            "<text id=\"description\" x=\"{center}\" y=\"66\" text-anchor=\"middle\" font-size=\"16\">{}</text>",
            escape_xml(&params.subtitle),
        );
    }
}

fn write_map(defs: &mut String, out: &mut String, scene: &Scene, margin: f64, heading: f64) {
    let _ = write!(
        out,
        "<g id=\"map\" transform=\"translate({} {})\">",
        fmt_f64(margin),
        fmt_f64(heading),
    );
    for (idx, tile) in scene.tiles.iter().enumerate() {
        let r = tile.rect;
        let clip_id = alloc::format!("tile-clip{idx}");
        let _ = write!(
            defs,
            "<clipPath id=\"{clip_id}\"><rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/></clipPath>",
            fmt_f64(r.x0),
            fmt_f64(r.y0),
            fmt_f64(r.width()),
            fmt_f64(r.height()),
        );

        out.push_str("<g class=\"cell\">");
        let tooltip = Tooltip::for_tile(scene, TileId(idx as u32));
        let _ = write!(out, "<title>{}</title>", escape_xml(&tooltip.text()));
        let _ = write!(
            out,
            "<rect class=\"tile\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" data-name=\"{}\" data-value=\"{}\" data-category=\"{}\" fill=\"{}\"/>",
            fmt_f64(r.x0),
            fmt_f64(r.y0),
            fmt_f64(r.width()),
            fmt_f64(r.height()),
            escape_xml(&tile.name),
            tile.value,
            escape_xml(&tile.category),
            to_hex(tile.fill),
        );
        let _ = write!(
            out,
            "<text class=\"label\" x=\"{}\" y=\"{}\" fill=\"{}\" clip-path=\"url(#{clip_id})\">{}</text>",
            fmt_f64(r.x0 + 4.0),
            fmt_f64(r.y0 + 13.0),
            tile.label_color.as_css(),
            escape_xml(&tile.name),
        );
        out.push_str("</g>");
    }
    out.push_str("</g>");
}

fn write_legend(out: &mut String, scene: &Scene, margin: f64, heading: f64) {
    let params = &scene.params;
    let legend = &scene.legend;
    // The legend band starts just under the map, inside the reserved
    // bottom margin.
    let band_y = heading + params.height - 10.0;
    let _ = write!(
        out,
        "<g id=\"legend\" transform=\"translate({} {})\">",
        fmt_f64(margin),
        fmt_f64(band_y),
    );
    for (idx, entry) in legend.entries.iter().enumerate() {
        let origin = legend.entry_origin(idx);
        let _ = write!(
            out,
            "<g class=\"legend-item-group\" transform=\"translate({} {})\">",
            fmt_f64(origin.x),
            fmt_f64(origin.y),
        );
        let _ = write!(
            out,
            "<rect class=\"legend-item\" width=\"{s}\" height=\"{s}\" fill=\"{}\"/>",
            to_hex(entry.swatch),
            s = fmt_f64(legend.swatch_size),
        );
        let _ = write!(
            out,
            "<text class=\"legend-text\" x=\"{}\" y=\"{}\">{}</text>",
            fmt_f64(legend.swatch_size + 5.0),
            fmt_f64(legend.swatch_size - 4.0),
            escape_xml(&entry.label),
        );
        out.push_str("</g>");
    }
    out.push_str("</g>");
}

/// Escapes text for use in XML content and attribute values.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats a coordinate compactly: integers without a fraction, everything
/// else trimmed to at most three decimals.
#[allow(
    clippy::cast_possible_truncation,
    reason = "document coordinates are far below i64 range"
)]
fn fmt_f64(v: f64) -> String {
    if v.is_finite() {
        let rounded = v as i64;
        let diff = (rounded as f64) - v;
        if diff > -1e-6 && diff < 1e-6 {
            return alloc::format!("{rounded}");
        }
    } else {
        return alloc::format!("{v}");
    }

    let mut s = alloc::format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
