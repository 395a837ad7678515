use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tennis_cli::types::{BuildReport, FuturesSummary};

pub fn print_report(report: &BuildReport) {
    println!("Data root: {}", report.data_root);
    println!("Output: {}", report.out_dir);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Artifact"),
        header_cell("Rows"),
        header_cell("Columns"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_rows = 0usize;
    for artifact in &report.artifacts {
        total_rows += artifact.rows;
        table.add_row(vec![
            Cell::new(&artifact.file)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            count_cell(artifact.rows),
            Cell::new(artifact.columns),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    println!("Completed in {} ms", report.elapsed_ms);
}

pub fn print_futures(summary: &FuturesSummary) {
    print_report(&summary.report);
    println!("Futures matches saved: {} matches", summary.matches);
    println!("Years covered: {}", joined_or_na(&summary.years));
    println!("Tournament levels: {}", joined_or_na(&summary.levels));
}

fn joined_or_na(values: &[String]) -> String {
    if values.is_empty() {
        "N/A".to_string()
    } else {
        values.join(", ")
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn count_cell(rows: usize) -> Cell {
    if rows == 0 {
        dim_cell(rows)
    } else {
        Cell::new(rows)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
