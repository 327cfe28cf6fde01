//! Terminal summary output for indexing runs.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::IndexResult;

pub fn print_summary(result: &IndexResult) {
    let mode = if result.recursive { " (recursive)" } else { "" };
    println!("Indexed: {}{}", result.root.display(), mode);
    if result.extensions.is_empty() {
        println!("Extensions: none configured");
    } else {
        println!("Extensions: {}", result.extensions.join(", "));
    }
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Format"), header_cell("Files")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (format, count) in &result.format_counts {
        table.add_row(vec![Cell::new(format.to_string()), count_cell(*count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.frame.height()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Green)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
