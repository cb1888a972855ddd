//! Timeline page — the highlighted pipeline grid with its sidebar filters.

use axum::{extract::State, response::Html};
use axum_extra::extract::Query;
use serde::Deserialize;

use pharmalens_core::{styled_table, Selection, SelectionParams, StyledTable};

use crate::handlers::escape_html;
use crate::state::SharedState;

/// Navigation HTML shared across all pages.
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

/// The selection as it arrives in the query string. Repeated keys map to
/// `Vec`s; everything is optional and unvalidated here — resolution
/// against the loaded data happens in the core crate.
#[derive(Debug, Deserialize, Default)]
pub struct ViewParams {
    #[serde(default)]
    pub area: Vec<String>,
    #[serde(default)]
    pub target: Vec<String>,
    #[serde(default)]
    pub basis: Vec<String>,
    #[serde(default)]
    pub color: Vec<String>,
}

impl From<ViewParams> for SelectionParams {
    fn from(p: ViewParams) -> Self {
        SelectionParams {
            areas: p.area,
            targets: p.target,
            basis: p.basis,
            colors: p.color,
        }
    }
}

pub async fn pipeline_page(
    State(state): State<SharedState>,
    Query(params): Query<ViewParams>,
) -> Html<String> {
    let selection = Selection::resolve(&state.data, &params.into());
    let table = styled_table(&state.data, &selection);
    Html(render_pipeline(&state, &selection, &table))
}

fn render_pipeline(state: &SharedState, selection: &Selection, table: &StyledTable) -> String {
    let data = &state.data;

    let area_checks: String = data
        .areas
        .iter()
        .map(|area| {
            let esc = escape_html(area);
            format!(
                r#"<label class="check-row"><input type="checkbox" class="area-check" value="{esc}"{checked}> {esc}</label>"#,
                checked = if selection.is_area_selected(area) { " checked" } else { "" },
            )
        })
        .collect();

    let target_checks: String = if selection.areas.is_empty() {
        r#"<p class="hint">Select a therapeutic area first.</p>"#.to_string()
    } else if selection.available_targets.is_empty() {
        r#"<p class="hint">No targets recorded for the selected areas.</p>"#.to_string()
    } else {
        selection
            .available_targets
            .iter()
            .map(|target| {
                let esc = escape_html(target);
                format!(
                    r#"<label class="check-row"><input type="checkbox" class="target-check" value="{esc}"{checked}> {esc}</label>"#,
                    checked = if selection.is_target_selected(target) { " checked" } else { "" },
                )
            })
            .collect()
    };

    let color_pickers: String = data
        .areas
        .iter()
        .map(|area| {
            let esc = escape_html(area);
            let color = selection.colors.get(area).map(String::as_str).unwrap_or("#cccccc");
            format!(
                r#"<label class="color-row"><input type="color" class="color-pick" data-area="{esc}" value="{color}"> {esc}</label>"#,
            )
        })
        .collect();

    let legend: String = if selection.areas.is_empty() {
        String::new()
    } else {
        let chips: String = selection
            .areas
            .iter()
            .map(|area| {
                let esc = escape_html(area);
                let color = selection.colors.get(area).map(String::as_str).unwrap_or("#cccccc");
                format!(
                    r#"<span class="chip"><span class="swatch" style="background-color:{color}"></span>{esc}</span>"#,
                )
            })
            .collect();
        format!(r#"<div class="legend">{chips}</div>"#)
    };

    let header_cells: String = table
        .headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h)))
        .collect();

    let body_rows: String = table
        .rows
        .iter()
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|cell| match &cell.color {
                    Some(color) => format!(
                        r#"<td style="background-color:{color}">{}</td>"#,
                        escape_html(&cell.text)
                    ),
                    None => format!("<td>{}</td>", escape_html(&cell.text)),
                })
                .collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();

    let highlighted = table
        .rows
        .iter()
        .flatten()
        .filter(|c| c.color.is_some())
        .count();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Pipeline Timeline — Pharmalens</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<div class="layout">
    <aside class="sidebar">
        <section class="sidebar-section">
            <h2>Therapeutic areas</h2>
            <div class="check-list">{area_checks}</div>
        </section>
        <section class="sidebar-section">
            <h2>Targets</h2>
            <div class="check-list">{target_checks}</div>
        </section>
        <section class="sidebar-section">
            <h2>Colors by area</h2>
            <div class="color-list">{color_pickers}</div>
        </section>
    </aside>
    <main class="main-content">
        <div class="page-header">
            <h1 class="page-title">Pipeline Timeline</h1>
            <p class="text-muted">{drugs} drugs · {areas} therapeutic areas · {highlighted} highlighted cells</p>
        </div>
        {legend}
        <div class="table-scroll">
            <table class="timeline-table">
                <thead><tr>{header_cells}</tr></thead>
                <tbody>{body_rows}</tbody>
            </table>
        </div>
    </main>
</div>
<script src="/static/js/main.js"></script>
</body>
</html>"#,
        nav = NAV_HTML,
        drugs = data.catalog.len(),
        areas = data.areas.len(),
    )
}
