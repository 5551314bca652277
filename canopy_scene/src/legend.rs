// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The category legend and its column-major grid placement.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use canopy_palette::CategoryColors;
use kurbo::Point;
use peniko::Color;

/// One legend row: a color swatch plus the category name.
#[derive(Clone, Debug)]
pub struct LegendEntry {
    /// Category name.
    pub label: String,
    /// Swatch color (the category's palette assignment).
    pub swatch: Color,
}

/// The legend drawn below the map: one entry per top-level category.
///
/// Entries are arranged column-major: a column is filled top to bottom
/// before the next column starts. With `n` entries over `columns` columns,
/// each column holds `ceil(n / columns)` rows.
#[derive(Clone, Debug)]
pub struct Legend {
    /// Entries in first-seen (document) order.
    pub entries: Vec<LegendEntry>,
    /// Number of columns the entries are distributed over.
    pub columns: usize,
    /// Horizontal pitch between columns.
    pub column_width: f64,
    /// Swatch side length.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
}

impl Legend {
    /// Derives a legend from a finished color assignment.
    pub(crate) fn build(
        colors: &CategoryColors,
        canvas_width: f64,
        columns: usize,
        swatch_size: f64,
        row_gap: f64,
    ) -> Self {
        let columns = columns.max(1);
        let entries = colors
            .categories()
            .map(|name| LegendEntry {
                label: name.to_string(),
                // A listed category always has an assignment.
                swatch: colors.lookup(name).unwrap_or(Color::TRANSPARENT),
            })
            .collect();
        Self {
            entries,
            columns,
            column_width: canvas_width / columns as f64,
            swatch_size,
            row_gap,
        }
    }

    /// Rows in each column: `ceil(n / columns)`.
    pub fn rows_per_column(&self) -> usize {
        self.entries.len().div_ceil(self.columns)
    }

    /// Grid cell of the entry at `index`, as `(column, row)`.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        legend_cell(index, self.entries.len(), self.columns)
    }

    /// Offset of an entry's swatch corner within the legend band.
    pub fn entry_origin(&self, index: usize) -> Point {
        let (column, row) = self.cell(index);
        Point::new(
            column as f64 * self.column_width,
            row as f64 * (self.swatch_size + self.row_gap),
        )
    }

    /// Total height of the legend band.
    pub fn band_height(&self) -> f64 {
        self.rows_per_column() as f64 * (self.swatch_size + self.row_gap)
    }
}

/// Column-major grid placement: entry `index` of `count` goes to column
/// `index / ceil(count / columns)`, row `index % ceil(count / columns)`.
pub fn legend_cell(index: usize, count: usize, columns: usize) -> (usize, usize) {
    let rows = count.div_ceil(columns.max(1)).max(1);
    (index / rows, index % rows)
}
