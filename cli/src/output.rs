//! Plain-text rendering of a [`Screen`] for the terminal.

use recommend::render::{self, Body, ResultsTable, RowView, Screen, TriggerControl};

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

const GAP: &str = "  ";

/// Render the whole screen: banner, then the body panel.
pub fn screen_text(screen: &Screen) -> String {
    let mut out = String::new();
    if screen.trigger == TriggerControl::Busy {
        out.push_str("... working\n");
    }
    if let Some(banner) = &screen.banner {
        out.push_str("! ");
        out.push_str(banner);
        out.push('\n');
    }
    match &screen.body {
        Body::EmptyPrompt => {
            out.push_str(render::EMPTY_TITLE);
            out.push('\n');
            out.push_str(render::EMPTY_HINT);
            out.push('\n');
        }
        Body::Table(table) => out.push_str(&table_text(table)),
        Body::Blank => {}
    }
    out
}

/// Heading, column header, then one line per row (plus an indented
/// description line when the record has one).
pub fn table_text(table: &ResultsTable) -> String {
    let cells: Vec<[String; 5]> = table.rows.iter().map(row_cells).collect();

    let mut widths = render::COLUMNS.map(|title| title.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format!("{} ({})\n", render::RESULTS_HEADING.to_uppercase(), table.count_badge);
    out.push_str(&line(&render::COLUMNS.map(str::to_uppercase), &widths));
    for (row, cells) in table.rows.iter().zip(&cells) {
        out.push_str(&line(cells, &widths));
        if !row.description.is_empty() {
            out.push_str(GAP);
            out.push_str(&row.description);
            out.push('\n');
        }
    }
    out
}

fn row_cells(row: &RowView) -> [String; 5] {
    let name = match &row.duration_badge {
        Some(badge) => format!("{} [{badge}]", row.name),
        None => row.name.clone(),
    };
    [
        name,
        row.tags.join(", "),
        row.remote.label().to_owned(),
        row.adaptive.label().to_owned(),
        row.url.clone().unwrap_or_default(),
    ]
}

fn line(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let mut out = padded.join(GAP).trim_end().to_owned();
    out.push('\n');
    out
}
