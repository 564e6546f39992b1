use std::collections::HashMap;

use foodshare_core::{
    util::html::escape_html,
    view::{DashboardView, RouteTableView},
};

use crate::{app::FoodshareAppError, config::ViewConfig};

use super::page_template::DASHBOARD_HTML;

/// whether the page is backed by a running server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// the slider requests a new view from the server on change
    Live,
    /// standalone file, the slider is disabled
    Snapshot,
}

/// renders the full dashboard page for a view.
pub fn render_page(
    view: &DashboardView,
    page: &ViewConfig,
    mode: PageMode,
) -> Result<String, FoodshareAppError> {
    let view_json = script_safe_json(&serde_json::to_string(view)?);
    let (live, disabled, snapshot_note) = match mode {
        PageMode::Live => ("true", "", String::new()),
        PageMode::Snapshot => (
            "false",
            "disabled",
            format!(
                r#"<p class="snapshot-note">Static snapshot at threshold {:.2}.</p>"#,
                view.threshold
            ),
        ),
    };
    let values: [(&str, String); 19] = [
        ("live", live.to_string()),
        ("disabled", disabled.to_string()),
        ("snapshot_note", snapshot_note),
        ("threshold", format!("{:.2}", view.threshold)),
        ("threshold_raw", view.threshold.to_string()),
        ("min", view.filter.min.to_string()),
        ("max", view.filter.max.to_string()),
        ("min_label", format!("{:.2}", view.filter.min)),
        ("max_label", format!("{:.2}", view.filter.max)),
        (
            "high_surplus_restaurants",
            view.summary.high_surplus_restaurants.to_string(),
        ),
        ("ngos_covered", view.summary.ngos_covered.to_string()),
        (
            "avg_route_distance_km",
            view.summary.avg_route_distance_km.to_string(),
        ),
        ("map_width", view.map.width.to_string()),
        ("map_height", view.map.height.to_string()),
        ("route_table", route_table_html(&view.table)),
        ("title", escape_html(&page.title)),
        ("description", escape_html(&page.description)),
        ("footer", escape_html(&page.footer)),
        ("view_json", view_json),
    ];
    let values = values.into_iter().collect::<HashMap<_, _>>();
    Ok(fill_template(DASHBOARD_HTML, |name| {
        values.get(name).map(String::as_str)
    }))
}

/// replaces each `{{name}}` of the template with its value in one left-to-right
/// pass. inserted text is never scanned again. unknown placeholders are kept as is.
fn fill_template<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        match after_open.find("}}") {
            Some(close) => {
                let name = &after_open[..close];
                match lookup(name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&rest[open..open + 2 + close + 2]),
                }
                rest = &after_open[close + 2..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// renders the routes table as an HTML `<table>`.
pub fn route_table_html(table: &RouteTableView) -> String {
    let mut out = String::from("<table>\n<thead><tr>");
    for header in table.headers.iter() {
        out.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in table.rows.iter() {
        out.push_str("<tr>");
        for cell in row.iter() {
            out.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>");
    out
}

/// JSON text that can sit inside a `<script>` element without closing it.
fn script_safe_json(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}
