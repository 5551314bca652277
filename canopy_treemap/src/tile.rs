// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Squarified strip tiling for one sibling group.
//!
//! Follows Bruls et al.: fill the region strip by strip along its current
//! short side, and accept the next item into the open strip only while the
//! strip's worst aspect ratio does not get worse. Items are processed in the
//! order given; nothing is sorted.

use alloc::vec;
use alloc::vec::Vec;
use kurbo::Rect;

/// Tiles `weights` into `region`, producing one rectangle per weight, index
/// for index.
///
/// Rectangle areas are proportional to the weights. Non-positive weights —
/// and every weight, when the group's total or the region's area is zero —
/// yield a zero-area rectangle at the region's origin.
pub(crate) fn squarify(weights: &[f64], region: Rect) -> Vec<Rect> {
    let origin = Rect::new(region.x0, region.y0, region.x0, region.y0);
    let mut out = vec![origin; weights.len()];

    let total: f64 = weights.iter().copied().filter(|&w| w > 0.0).sum();
    if total <= 0.0 || region.area() <= 0.0 {
        return out;
    }
    let scale = region.area() / total;

    let mut strip = StripCursor {
        x: region.x0,
        y: region.y0,
        w: region.width(),
        h: region.height(),
    };

    // The open strip: (item index, scaled area) plus running stats.
    let mut row: Vec<(usize, f64)> = Vec::new();
    let mut row_sum = 0.0;
    let mut row_min = f64::INFINITY;
    let mut row_max = 0.0_f64;

    for (i, &weight) in weights.iter().enumerate() {
        if weight <= 0.0 {
            continue;
        }
        let area = weight * scale;
        let side = strip.w.min(strip.h);
        let current = worst_aspect(row_min, row_max, row_sum, side);
        let extended = worst_aspect(row_min.min(area), row_max.max(area), row_sum + area, side);

        if row.is_empty() || extended <= current {
            row.push((i, area));
            row_sum += area;
            row_min = row_min.min(area);
            row_max = row_max.max(area);
        } else {
            strip.flush(&row, row_sum, &mut out);
            row.clear();
            row.push((i, area));
            row_sum = area;
            row_min = area;
            row_max = area;
        }
    }
    if !row.is_empty() {
        strip.flush(&row, row_sum, &mut out);
    }
    out
}

/// The unoccupied remainder of the region being tiled.
struct StripCursor {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl StripCursor {
    /// Lays out one strip along the remainder's short side and advances past
    /// it. The strip runs horizontally when the width is the short side.
    fn flush(&mut self, row: &[(usize, f64)], row_sum: f64, out: &mut [Rect]) {
        let horizontal = self.w <= self.h;
        let short = if horizontal { self.w } else { self.h };
        if row_sum <= 0.0 || short <= 0.0 {
            for &(i, _) in row {
                out[i] = Rect::new(self.x, self.y, self.x, self.y);
            }
            return;
        }
        let thickness = row_sum / short;

        let mut offset = 0.0;
        for (k, &(i, area)) in row.iter().enumerate() {
            let mut length = area / thickness;
            // The final rectangle absorbs floating-point residue so the
            // strip tiles its span exactly.
            if k == row.len() - 1 {
                let remaining = short - offset;
                if remaining.is_finite() && remaining > 0.0 {
                    length = remaining;
                }
            }
            out[i] = if horizontal {
                Rect::new(
                    self.x + offset,
                    self.y,
                    self.x + offset + length,
                    self.y + thickness,
                )
            } else {
                Rect::new(
                    self.x,
                    self.y + offset,
                    self.x + thickness,
                    self.y + offset + length,
                )
            };
            offset += length;
        }

        if horizontal {
            self.y += thickness;
            self.h = (self.h - thickness).max(0.0);
        } else {
            self.x += thickness;
            self.w = (self.w - thickness).max(0.0);
        }
    }
}

/// Worst aspect ratio a strip of total area `sum` would have on a side of
/// length `side`, given the strip's smallest and largest item areas.
fn worst_aspect(min_area: f64, max_area: f64, sum: f64, side: f64) -> f64 {
    if sum <= 0.0 || side <= 0.0 || min_area <= 0.0 || max_area <= 0.0 {
        return f64::MAX;
    }
    let side_sq = side * side;
    let sum_sq = sum * sum;
    let a = (side_sq * max_area) / sum_sq;
    let b = sum_sq / (side_sq * min_area);
    a.max(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_item_fills_region() {
        let region = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let rects = squarify(&[7.0], region);
        assert_eq!(rects.len(), 1);
        assert!((rects[0].area() - region.area()).abs() < 1e-6);
    }

    #[test]
    fn tiles_preserve_total_area() {
        let region = Rect::new(0.0, 0.0, 50.0, 20.0);
        let rects = squarify(&[400.0, 300.0, 200.0, 100.0], region);
        let total: f64 = rects.iter().map(|r| r.area()).sum();
        assert!((total - region.area()).abs() < 1e-6, "strips must tile, got {total}");
    }

    #[test]
    fn output_is_index_aligned() {
        let region = Rect::new(0.0, 0.0, 100.0, 100.0);
        let weights = [1.0, 4.0, 2.0];
        let rects = squarify(&weights, region);
        let total: f64 = weights.iter().sum();
        for (r, w) in rects.iter().zip(weights) {
            let share = r.area() / region.area();
            assert!((share - w / total).abs() < 1e-9, "share {share} for weight {w}");
        }
    }

    #[test]
    fn zero_weights_get_zero_area_rects() {
        let region = Rect::new(10.0, 20.0, 110.0, 70.0);
        let rects = squarify(&[5.0, 0.0, 5.0], region);
        assert_eq!(rects[1], Rect::new(10.0, 20.0, 10.0, 20.0));
        let total: f64 = rects.iter().map(|r| r.area()).sum();
        assert!((total - region.area()).abs() < 1e-6, "positive weights still tile");
    }

    #[test]
    fn all_zero_weights_degrade_quietly() {
        let region = Rect::new(0.0, 0.0, 100.0, 100.0);
        for r in squarify(&[0.0, 0.0], region) {
            assert_eq!(r.area(), 0.0);
        }
    }

    #[test]
    fn degenerate_region_degrades_quietly() {
        let region = Rect::new(50.0, 50.0, 50.0, 50.0);
        for r in squarify(&[1.0, 2.0], region) {
            assert_eq!(r.area(), 0.0);
        }
    }

    #[test]
    fn rects_stay_inside_region() {
        let region = Rect::new(5.0, 5.0, 105.0, 55.0);
        let eps = 1e-9;
        for r in squarify(&[8.0, 1.0, 3.0, 2.0, 5.0], region) {
            assert!(r.x0 >= region.x0 - eps && r.x1 <= region.x1 + eps);
            assert!(r.y0 >= region.y0 - eps && r.y1 <= region.y1 + eps);
        }
    }
}
