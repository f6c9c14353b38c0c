use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rx_cli::pipeline::ReportRun;

pub fn print_summary(run: &ReportRun, top: usize) {
    println!("Input: {}", run.input.display());
    match &run.output {
        Some(path) => println!("Report: {}", path.display()),
        None => println!("Report: not written (dry run)"),
    }
    let summary = &run.summary;
    println!(
        "Records: {} read, {} skipped; {} drugs, {} prescribers",
        summary.records_read,
        summary.records_skipped,
        summary.distinct_drugs,
        summary.distinct_prescribers
    );
    if run.entries.is_empty() || top == 0 {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Drug"),
        header_cell("Prescribers"),
        header_cell("Total cost"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (index, entry) in run.entries.iter().take(top).enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&entry.drug_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(entry.prescriber_count()),
            Cell::new(entry.total_cost()),
        ]);
    }
    let hidden = run.entries.len().saturating_sub(top);
    if hidden > 0 {
        table.add_row(vec![
            dim_cell("-"),
            dim_cell(format!("{hidden} more")),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    let total_cost = run
        .entries
        .iter()
        .map(|entry| entry.total_cost())
        .fold(0i64, i64::saturating_add);
    table.add_row(vec![
        dim_cell(""),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.distinct_prescribers).add_attribute(Attribute::Bold),
        Cell::new(total_cost).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
