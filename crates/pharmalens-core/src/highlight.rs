//! Cell highlighting.
//!
//! A single pure function from one grid cell to an optional background
//! color. No cross-cell state: the renderer may apply it to cells in any
//! order.

use std::collections::BTreeMap;

use crate::selection::Selection;
use crate::workbook::DrugCatalog;

/// Background color for one timeline cell, or `None` for no highlight.
///
/// A cell highlights iff it names a drug whose area and target are both
/// currently selected. Missing cells, unknown drugs, and drugs with a
/// missing area or target never highlight. The color comes from the
/// selection's per-area map, with the generated default as a fallback
/// (unreachable in normal operation, since the map is seeded for every
/// area).
pub fn cell_color<'a>(
    value: Option<&str>,
    catalog: &DrugCatalog,
    selection: &'a Selection,
    defaults: &'a BTreeMap<String, String>,
) -> Option<&'a str> {
    let drug = value?;
    let area = catalog.area_of(drug)?;
    let target = catalog.target_of(drug)?;

    if selection.is_area_selected(area) && selection.is_target_selected(target) {
        selection
            .colors
            .get(area)
            .or_else(|| defaults.get(area))
            .map(String::as_str)
    } else {
        None
    }
}
