//! Selection resolution.
//!
//! The UI keeps all selection state in the URL query string, so every
//! request resolves a fresh `Selection` from raw params plus the loaded
//! data. Resolution enforces the dependent-target rule: the target list
//! is derived from the selected areas, and whenever the area set changes
//! the target selection re-seeds to everything available. The area set a
//! target selection was made under travels along as the `basis`, which
//! is how a stateless request can tell "narrowed by the user" apart from
//! "stale after an area change".

use std::collections::{BTreeMap, BTreeSet};

use crate::workbook::{DrugCatalog, LoadedData};

/// Raw, untrusted selection input as it arrives in the query string.
#[derive(Debug, Clone, Default)]
pub struct SelectionParams {
    /// Repeated `area` params.
    pub areas: Vec<String>,
    /// Repeated `target` params.
    pub targets: Vec<String>,
    /// Repeated `basis` params: the area set `targets` was chosen under.
    pub basis: Vec<String>,
    /// Repeated `color` params, each `<area>:<hex>`.
    pub colors: Vec<String>,
}

/// A fully resolved selection: what the render pipeline works from.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Selected areas, normalized to area-list order, unknowns dropped.
    pub areas: Vec<String>,
    /// Sorted distinct targets of drugs in the selected areas.
    pub available_targets: Vec<String>,
    /// Selected targets, always a subset of `available_targets`.
    pub targets: BTreeSet<String>,
    /// Per-area colors: defaults overlaid with the user's overrides.
    /// Every known area has an entry.
    pub colors: BTreeMap<String, String>,
}

impl Selection {
    /// Resolve raw params against the loaded data.
    pub fn resolve(data: &LoadedData, params: &SelectionParams) -> Self {
        let areas = normalize_areas(&data.areas, &params.areas);
        let basis = normalize_areas(&data.areas, &params.basis);
        let available = available_targets(&data.catalog, &areas);

        // Reset law: a target selection only survives if it was made
        // under the area set we are resolving for.
        let targets: BTreeSet<String> = if basis == areas {
            params
                .targets
                .iter()
                .filter(|t| available.contains(*t))
                .cloned()
                .collect()
        } else {
            available.iter().cloned().collect()
        };

        let mut colors = data.default_colors.clone();
        for entry in &params.colors {
            if let Some((area, hex)) = parse_color_override(entry) {
                if let Some(slot) = colors.get_mut(area) {
                    *slot = hex.to_ascii_lowercase();
                }
            }
        }

        Self {
            areas,
            available_targets: available,
            targets,
            colors,
        }
    }

    pub fn is_area_selected(&self, area: &str) -> bool {
        self.areas.iter().any(|a| a == area)
    }

    pub fn is_target_selected(&self, target: &str) -> bool {
        self.targets.contains(target)
    }
}

/// Filter raw area params down to known areas, in area-list order.
/// Duplicates collapse for free since the known list is distinct.
fn normalize_areas(known: &[String], raw: &[String]) -> Vec<String> {
    known
        .iter()
        .filter(|a| raw.contains(*a))
        .cloned()
        .collect()
}

/// Sorted distinct non-missing targets of drugs whose area is selected.
/// Empty when no areas are selected.
pub fn available_targets(catalog: &DrugCatalog, selected_areas: &[String]) -> Vec<String> {
    if selected_areas.is_empty() {
        return Vec::new();
    }
    catalog
        .rows()
        .into_iter()
        .filter(|(_, area, _)| {
            area.is_some_and(|a| selected_areas.iter().any(|s| s == a))
        })
        .filter_map(|(_, _, target)| target.map(str::to_string))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Parse one `<area>:<hex>` override. Malformed entries resolve to `None`
/// and are dropped by the caller.
fn parse_color_override(entry: &str) -> Option<(&str, &str)> {
    let (area, hex) = entry.split_once(':')?;
    if area.is_empty() || !is_hex_color(hex) {
        return None;
    }
    Some((area, hex))
}

/// `#` followed by exactly six hex digits.
pub fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].bytes().all(|b| b.is_ascii_hexdigit())
}
