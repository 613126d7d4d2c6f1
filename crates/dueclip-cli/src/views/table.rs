use chrono::NaiveDate;
use comfy_table::{Attribute, Cell, Color, Row, Table};

use dueclip_core::date;
use dueclip_core::models::{Item, TemporalBucket};

pub fn display_items(items: &[&Item], today: NaiveDate) {
    if items.is_empty() {
        println!("No items yet.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Due", "Status"]);

    for item in items {
        let mut row = Row::new();
        row.add_cell(Cell::new(&item.id.to_string()[..7]));

        let name_cell = if item.completed {
            Cell::new(&item.name).add_attribute(Attribute::Dim)
        } else {
            Cell::new(&item.name)
        };
        row.add_cell(name_cell);

        let display = date::format_display(&item.date);
        // Completed items are never flagged urgent, whatever their date.
        let date_cell = if item.completed {
            Cell::new(display).add_attribute(Attribute::Dim)
        } else {
            match date::classify(&item.date, today) {
                TemporalBucket::Overdue => Cell::new(display).fg(Color::Red),
                TemporalBucket::ThisWeek => Cell::new(display).fg(Color::Yellow),
                TemporalBucket::Future => Cell::new(display),
            }
        };
        row.add_cell(date_cell);

        row.add_cell(Cell::new(if item.completed { "done" } else { "open" }));
        table.add_row(row);
    }

    println!("{table}");
}
