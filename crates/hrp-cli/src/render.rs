//! Terminal rendering of field listings and prediction results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use hrp_model::{FIELDS, RiskAssessment, risk_class, risk_icon};

/// Print the intake field catalog.
pub fn print_fields() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Type"),
        header_cell("Range / Allowed"),
        header_cell("Default"),
    ]);
    apply_table_style(&mut table);
    for spec in &FIELDS {
        table.add_row(vec![
            Cell::new(spec.name).add_attribute(Attribute::Bold),
            Cell::new(spec.label),
            Cell::new(spec.kind.type_label()),
            Cell::new(spec.kind.domain_label()),
            Cell::new(spec.default.unwrap_or("")),
        ]);
    }
    println!("{table}");
}

/// Print a successful risk assessment.
pub fn print_assessment(assessment: &RiskAssessment) {
    let label = assessment.risk.label();
    let icon = risk_icon(label).glyph();

    let mut table = Table::new();
    table.set_header(vec![header_cell("Prediction Results"), header_cell("")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Probability"),
        Cell::new(assessment.probability_label()).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Risk Level"),
        level_cell(&format!("{icon} {}", assessment.risk_label()), label),
    ]);
    table.add_row(vec![Cell::new("Message"), Cell::new(&assessment.message)]);
    table.add_row(vec![
        Cell::new("Prediction"),
        Cell::new(assessment.prediction_note()),
    ]);
    println!("{table}");
}

/// Print a failed submission. The text is the service's own error when it
/// supplied one, otherwise the fixed fallback.
pub fn print_failure(message: &str) {
    eprintln!("Error: {message}");
}

fn level_cell(text: &str, label: &str) -> Cell {
    let cell = Cell::new(text).add_attribute(Attribute::Bold);
    match risk_class(label) {
        "risk-low" => cell.fg(Color::Green),
        "risk-moderate" => cell.fg(Color::Yellow),
        "risk-high" => cell.fg(Color::Red),
        _ => cell,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}
