//! Workbook loading and schema binding.
//!
//! The input is a single xlsx workbook: one sheet holds the pipeline
//! timeline (header row = years, cells = drug names), a second holds the
//! per-drug detail table. The detail sheet is bound positionally — the
//! 3rd, 4th and 6th columns are Drug, Target and Therapeutic Area — but
//! the binding is validated up front so a reshuffled sheet fails loudly
//! instead of silently mapping the wrong columns.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use calamine::{open_workbook_auto, Data, Range, Reader};
use tracing::info;

use pharmalens_common::config::WorkbookConfig;
use pharmalens_common::error::{PharmalensError, Result};

use crate::palette;

/// Positional bindings into the detail sheet (0-indexed).
const DRUG_COL: usize = 2;
const TARGET_COL: usize = 3;
const AREA_COL: usize = 5;
/// The detail sheet must be at least this wide for the bindings to hold.
const MIN_DETAIL_COLUMNS: usize = 6;

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// The timeline grid: header row plus cells that are either a drug name
/// or missing.
#[derive(Debug, Clone)]
pub struct TimeSeriesTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Per-drug metadata derived from the detail sheet.
///
/// Both lookups keep `Option` values: a drug row may exist with a blank
/// area or target, and such drugs are never eligible for highlighting.
/// Duplicate drug rows resolve last-write-wins, in sheet order.
#[derive(Debug, Clone, Default)]
pub struct DrugCatalog {
    entries: HashMap<String, DrugEntry>,
}

#[derive(Debug, Clone, Default)]
struct DrugEntry {
    area: Option<String>,
    target: Option<String>,
}

impl DrugCatalog {
    pub fn insert(&mut self, drug: String, area: Option<String>, target: Option<String>) {
        self.entries.insert(drug, DrugEntry { area, target });
    }

    pub fn area_of(&self, drug: &str) -> Option<&str> {
        self.entries.get(drug)?.area.as_deref()
    }

    pub fn target_of(&self, drug: &str) -> Option<&str> {
        self.entries.get(drug)?.target.as_deref()
    }

    pub fn contains(&self, drug: &str) -> bool {
        self.entries.contains_key(drug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drug names with their area/target, sorted by drug name.
    pub fn rows(&self) -> Vec<(&str, Option<&str>, Option<&str>)> {
        let mut rows: Vec<_> = self
            .entries
            .iter()
            .map(|(drug, e)| (drug.as_str(), e.area.as_deref(), e.target.as_deref()))
            .collect();
        rows.sort_by_key(|(drug, _, _)| *drug);
        rows
    }

    /// Sorted distinct non-missing therapeutic areas.
    pub fn area_list(&self) -> Vec<String> {
        self.entries
            .values()
            .filter_map(|e| e.area.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Everything read from the workbook, immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub timeline: TimeSeriesTable,
    pub catalog: DrugCatalog,
    /// Sorted distinct areas, fixed at load.
    pub areas: Vec<String>,
    /// Generated per-area colors, fixed at load.
    pub default_colors: BTreeMap<String, String>,
}

impl LoadedData {
    /// Assemble from already-parsed tables, deriving the area list and
    /// default palette. Used by the loader and by tests that build data
    /// in memory.
    pub fn from_parts(timeline: TimeSeriesTable, catalog: DrugCatalog) -> Self {
        let areas = catalog.area_list();
        let default_colors = palette::default_palette(&areas);
        Self {
            timeline,
            catalog,
            areas,
            default_colors,
        }
    }

    /// Read and bind the configured workbook.
    ///
    /// Fatal on a missing file, missing sheet, empty sheet, or a detail
    /// sheet narrower than the positional bindings. There is no partial
    /// fallback: either the whole workbook binds or startup fails.
    pub fn load(cfg: &WorkbookConfig) -> Result<Self> {
        let mut workbook = open_workbook_auto(&cfg.path)?;
        let names = workbook.sheet_names().to_owned();

        let timeline_name = sheet_name(&names, cfg.timeline_sheet)?;
        let detail_name = sheet_name(&names, cfg.detail_sheet)?;

        let timeline_range = workbook.worksheet_range(&timeline_name)?;
        let detail_range = workbook.worksheet_range(&detail_name)?;

        let timeline = timeline_from_rows(&timeline_name, range_to_rows(&timeline_range))?;
        let catalog = catalog_from_rows(&detail_name, &range_to_rows(&detail_range))?;

        let data = Self::from_parts(timeline, catalog);
        info!(
            path = %cfg.path,
            timeline = %timeline_name,
            detail = %detail_name,
            periods = data.timeline.headers.len(),
            grid_rows = data.timeline.rows.len(),
            drugs = data.catalog.len(),
            areas = data.areas.len(),
            "workbook loaded"
        );
        Ok(data)
    }
}

fn sheet_name(names: &[String], index: usize) -> Result<String> {
    names
        .get(index)
        .cloned()
        .ok_or(PharmalensError::SheetNotFound {
            index,
            found: names.len(),
        })
}

// ---------------------------------------------------------------------------
// Cell normalization and row parsing
// ---------------------------------------------------------------------------

/// Normalize one cell to display text, or `None` when missing.
///
/// Blank cells, error cells, and whitespace-only strings are missing.
/// Integral floats drop the trailing `.0` Excel gives numeric years.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        }
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some(format!("{}", *f as i64)),
        other => Some(other.to_string()),
    }
}

fn range_to_rows(range: &Range<Data>) -> Vec<Vec<Option<String>>> {
    range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect()
}

fn timeline_from_rows(
    sheet: &str,
    mut rows: Vec<Vec<Option<String>>>,
) -> Result<TimeSeriesTable> {
    if rows.is_empty() {
        return Err(PharmalensError::EmptySheet(sheet.to_string()));
    }
    let headers = rows
        .remove(0)
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect();
    Ok(TimeSeriesTable { headers, rows })
}

fn catalog_from_rows(sheet: &str, rows: &[Vec<Option<String>>]) -> Result<DrugCatalog> {
    let Some(header) = rows.first() else {
        return Err(PharmalensError::EmptySheet(sheet.to_string()));
    };
    if header.len() < MIN_DETAIL_COLUMNS {
        return Err(PharmalensError::SchemaMismatch {
            sheet: sheet.to_string(),
            expected: MIN_DETAIL_COLUMNS,
            found: header.len(),
        });
    }

    let mut catalog = DrugCatalog::default();
    for row in &rows[1..] {
        let Some(drug) = row.get(DRUG_COL).cloned().flatten() else {
            continue;
        };
        catalog.insert(
            drug,
            row.get(AREA_COL).cloned().flatten(),
            row.get(TARGET_COL).cloned().flatten(),
        );
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<Option<String>> {
        cells
            .iter()
            .map(|c| {
                if c.is_empty() {
                    None
                } else {
                    Some(c.to_string())
                }
            })
            .collect()
    }

    fn detail_header() -> Vec<Option<String>> {
        row(&["Id", "Phase", "Drug", "Target", "Sponsor", "Therapeutic Area"])
    }

    #[test]
    fn test_detail_binding_uses_columns_2_3_5() {
        let rows = vec![
            detail_header(),
            row(&["1", "III", "Aspirin", "COX", "Acme", "Cardio"]),
        ];
        let catalog = catalog_from_rows("Details", &rows).unwrap();
        assert_eq!(catalog.area_of("Aspirin"), Some("Cardio"));
        assert_eq!(catalog.target_of("Aspirin"), Some("COX"));
    }

    #[test]
    fn test_narrow_detail_sheet_is_schema_mismatch() {
        let rows = vec![row(&["Id", "Phase", "Drug", "Target", "Sponsor"])];
        let err = catalog_from_rows("Details", &rows).unwrap_err();
        match err {
            PharmalensError::SchemaMismatch {
                sheet,
                expected,
                found,
            } => {
                assert_eq!(sheet, "Details");
                assert_eq!(expected, 6);
                assert_eq!(found, 5);
            }
            other => panic!("expected SchemaMismatch, got {other}"),
        }
    }

    #[test]
    fn test_empty_detail_sheet_is_fatal() {
        let err = catalog_from_rows("Details", &[]).unwrap_err();
        assert!(matches!(err, PharmalensError::EmptySheet(_)));
    }

    #[test]
    fn test_duplicate_drug_rows_last_write_wins() {
        let rows = vec![
            detail_header(),
            row(&["1", "II", "Aspirin", "COX", "Acme", "Cardio"]),
            row(&["2", "III", "Aspirin", "NF-kB", "Acme", "Oncology"]),
        ];
        let catalog = catalog_from_rows("Details", &rows).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.area_of("Aspirin"), Some("Oncology"));
        assert_eq!(catalog.target_of("Aspirin"), Some("NF-kB"));
    }

    #[test]
    fn test_blank_drug_cells_are_skipped() {
        let rows = vec![
            detail_header(),
            row(&["1", "II", "", "COX", "Acme", "Cardio"]),
            row(&["2", "I", "Lipitor", "HMGCR", "Acme", "Cardio"]),
        ];
        let catalog = catalog_from_rows("Details", &rows).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("Lipitor"));
    }

    #[test]
    fn test_missing_area_or_target_is_kept_as_missing() {
        let rows = vec![
            detail_header(),
            row(&["1", "II", "Aspirin", "", "Acme", "Cardio"]),
            row(&["2", "I", "Mystery", "ABC", "Acme", ""]),
        ];
        let catalog = catalog_from_rows("Details", &rows).unwrap();
        assert_eq!(catalog.target_of("Aspirin"), None);
        assert_eq!(catalog.area_of("Aspirin"), Some("Cardio"));
        assert_eq!(catalog.area_of("Mystery"), None);
    }

    #[test]
    fn test_area_list_sorted_distinct() {
        let rows = vec![
            detail_header(),
            row(&["1", "II", "B-drug", "T1", "Acme", "Oncology"]),
            row(&["2", "I", "A-drug", "T2", "Acme", "Cardio"]),
            row(&["3", "I", "C-drug", "T3", "Acme", "Oncology"]),
        ];
        let catalog = catalog_from_rows("Details", &rows).unwrap();
        assert_eq!(catalog.area_list(), vec!["Cardio", "Oncology"]);
    }

    #[test]
    fn test_timeline_splits_header_row() {
        let table = timeline_from_rows(
            "Timeline",
            vec![
                row(&["2021", "2022", "2023"]),
                row(&["Aspirin", "", "Lipitor"]),
            ],
        )
        .unwrap();
        assert_eq!(table.headers, vec!["2021", "2022", "2023"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][1], None);
    }

    #[test]
    fn test_empty_timeline_is_fatal() {
        let err = timeline_from_rows("Timeline", vec![]).unwrap_err();
        assert!(matches!(err, PharmalensError::EmptySheet(_)));
    }

    #[test]
    fn test_cell_text_normalization() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::String("  ".into())), None);
        assert_eq!(
            cell_text(&Data::String(" Aspirin ".into())),
            Some("Aspirin".to_string())
        );
        assert_eq!(cell_text(&Data::Float(2021.0)), Some("2021".to_string()));
        assert_eq!(cell_text(&Data::Float(0.5)), Some("0.5".to_string()));
        assert_eq!(cell_text(&Data::Int(7)), Some("7".to_string()));
        assert_eq!(
            cell_text(&Data::Error(calamine::CellErrorType::NA)),
            None
        );
    }

    #[test]
    fn test_from_parts_derives_palette() {
        let timeline = TimeSeriesTable {
            headers: vec!["2021".into()],
            rows: vec![vec![Some("Aspirin".into())]],
        };
        let mut catalog = DrugCatalog::default();
        catalog.insert("Aspirin".into(), Some("Cardio".into()), Some("COX".into()));
        let data = LoadedData::from_parts(timeline, catalog);
        assert_eq!(data.areas, vec!["Cardio"]);
        assert_eq!(
            data.default_colors.get("Cardio"),
            Some(&crate::palette::area_color(0, 1))
        );
    }
}
