use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use scrub_model::CleaningStats;

use crate::types::CleanResult;

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.source.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None if result.dry_run => println!("Output: skipped (dry run)"),
        None => {}
    }
    if let Some(path) = &result.stats_json {
        println!("Stats JSON: {}", path.display());
    }
    println!("{}", render_stats_table(&result.stats));
}

/// Render cleaning statistics as a two-column console table.
pub fn render_stats_table(stats: &CleaningStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Input rows"), Cell::new(stats.input_rows)]);
    table.add_row(vec![
        Cell::new("Null emails"),
        count_cell(stats.null_emails, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Empty emails"),
        count_cell(stats.empty_emails, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate emails"),
        count_cell(stats.duplicate_emails, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Output rows").add_attribute(Attribute::Bold),
        Cell::new(stats.output_rows).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Rows removed"),
        count_cell(stats.rows_removed, Color::Red),
    ]);
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(40);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
