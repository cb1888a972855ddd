//! Catalog page — every drug in the detail sheet with its target and area.

use axum::{extract::State, response::Html};

use crate::handlers::{escape_html, pipeline::NAV_HTML};
use crate::state::SharedState;

pub async fn catalog_page(State(state): State<SharedState>) -> Html<String> {
    let data = &state.data;

    let rows_html: String = if data.catalog.is_empty() {
        r#"<tr><td colspan="3" class="empty-note">The detail sheet holds no drug rows.</td></tr>"#
            .to_string()
    } else {
        data.catalog
            .rows()
            .into_iter()
            .map(|(drug, area, target)| {
                let area_cell = match area {
                    Some(area) => {
                        let swatch = data
                            .default_colors
                            .get(area)
                            .map(|color| {
                                format!(
                                    r#"<span class="swatch" style="background-color:{color}"></span>"#
                                )
                            })
                            .unwrap_or_default();
                        format!("{swatch}{}", escape_html(area))
                    }
                    None => r#"<span class="missing">—</span>"#.to_string(),
                };
                let target_cell = match target {
                    Some(target) => escape_html(target),
                    None => r#"<span class="missing">—</span>"#.to_string(),
                };
                format!(
                    "<tr><td>{}</td><td>{target_cell}</td><td>{area_cell}</td></tr>",
                    escape_html(drug)
                )
            })
            .collect()
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Drug Catalog — Pharmalens</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{nav}
<div class="layout">
    <main class="main-content">
        <div class="page-header">
            <h1 class="page-title">Drug Catalog</h1>
            <p class="text-muted">{drugs} drugs · {areas} therapeutic areas</p>
        </div>
        <div class="table-scroll">
            <table class="timeline-table">
                <thead><tr><th>Drug</th><th>Target</th><th>Therapeutic Area</th></tr></thead>
                <tbody>{rows_html}</tbody>
            </table>
        </div>
    </main>
</div>
</body>
</html>"#,
        nav = NAV_HTML,
        drugs = data.catalog.len(),
        areas = data.areas.len(),
    ))
}
