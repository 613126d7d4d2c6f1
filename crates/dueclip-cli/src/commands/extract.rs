use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::{OwoColorize, Style};

use dueclip_core::date;
use dueclip_core::extract::extract;

use crate::cli::ExtractCommand;

pub fn extract_text(command: ExtractCommand, today: NaiveDate) -> Result<()> {
    let result = extract(&command.text, today);

    let info_style = Style::new().blue();
    println!("{} {}", "Title:".style(info_style), result.title);
    match result.date {
        Some(canonical) => {
            println!(
                "{} {} ({}, {})",
                "Date:".style(info_style),
                canonical,
                date::format_display(&canonical).cyan(),
                date::classify(&canonical, today)
            );
        }
        None => println!("{} no date found", "Date:".style(info_style)),
    }
    Ok(())
}
