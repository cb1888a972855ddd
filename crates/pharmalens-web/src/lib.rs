//! pharmalens-web — Web GUI for Pharmalens
//! Serves the highlighted pipeline timeline:
//!   - Timeline page with area/target filters and per-area color pickers
//!   - Drug catalog listing
//!   - Embedded static assets

pub mod handlers;
pub mod router;
pub mod state;
