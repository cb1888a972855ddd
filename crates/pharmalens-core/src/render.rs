//! The pure render model: `(LoadedData, Selection) -> StyledTable`.
//!
//! The web layer only serializes the result to HTML; everything the
//! table shows is decided here.

use crate::highlight;
use crate::selection::Selection;
use crate::workbook::LoadedData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledCell {
    pub text: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StyledTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<StyledCell>>,
}

/// Apply the highlighter across the whole timeline grid.
pub fn styled_table(data: &LoadedData, selection: &Selection) -> StyledTable {
    let rows = data
        .timeline
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| StyledCell {
                    text: cell.clone().unwrap_or_default(),
                    color: highlight::cell_color(
                        cell.as_deref(),
                        &data.catalog,
                        selection,
                        &data.default_colors,
                    )
                    .map(str::to_string),
                })
                .collect()
        })
        .collect();

    StyledTable {
        headers: data.timeline.headers.clone(),
        rows,
    }
}
