//! pharmalens-core — the data side of Pharmalens:
//!   - Workbook loading and schema binding (calamine)
//!   - Drug → area / target lookups
//!   - Deterministic per-area color palette
//!   - Selection resolution (areas, dependent targets, color overrides)
//!   - The pure highlighting/render pipeline consumed by the web layer

pub mod highlight;
pub mod palette;
pub mod render;
pub mod selection;
pub mod workbook;

// Re-export the types the web crate works with
pub use render::{styled_table, StyledCell, StyledTable};
pub use selection::{available_targets, Selection, SelectionParams};
pub use workbook::{DrugCatalog, LoadedData, TimeSeriesTable};
