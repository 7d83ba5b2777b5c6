use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cets_map::CategoryKind;
use cets_report::ConversionSummary;

pub fn print_summary(summary: &ConversionSummary) {
    println!("Dataset: {}", summary.dataset_name);
    println!("Regions: {}", summary.region_count);
    println!("Output: {}", summary.output_path.display());
    println!("{}", summary_table(summary));
}

pub fn summary_table(summary: &ConversionSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let mut total_rows = 0usize;
    for category in &summary.categories {
        total_rows += category.rows;
        if category.rows == 0 {
            table.add_row(vec![dim_cell(&category.category), dim_cell("-")]);
        } else {
            table.add_row(vec![Cell::new(&category.category), Cell::new(category.rows)]);
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
    ]);
    table
}

pub fn categories_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Category", "Description", "Columns", "Requires"]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for kind in CategoryKind::ALL {
        let requires = match kind.required_data() {
            Some(data) => data.to_string(),
            None => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(kind.name()),
            Cell::new(kind.label()),
            Cell::new(kind.columns().len()),
            Cell::new(requires),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}
