use clap::Parser;
use owo_colors::{OwoColorize, Style};

use dueclip_core::error::CoreError;
use dueclip_core::store::JsonFileStore;

mod cli;
mod commands;
mod config;
mod util;
mod views;

fn main() {
    let config = config::Config::new().unwrap_or_default();
    let cli = cli::Cli::parse();

    let today = match util::resolve_today(cli.today.as_deref()) {
        Ok(date) => date,
        Err(e) => {
            handle_error(e);
            std::process::exit(1);
        }
    };

    let mut store = JsonFileStore::new(&config.data_path);

    let result = match cli.command {
        cli::Commands::Clip(command) => {
            commands::clip::clip_text(&mut store, &config, command, today)
        }
        cli::Commands::Add(command) => {
            commands::add::add_item(&mut store, &config, command, today)
        }
        cli::Commands::List(command) => {
            commands::list::list_items(&store, &config, command, today)
        }
        cli::Commands::Done(command) => commands::done::toggle_item(&mut store, &config, command),
        cli::Commands::Delete(command) => {
            commands::delete::delete_item(&mut store, &config, command)
        }
        cli::Commands::Extract(command) => commands::extract::extract_text(command, today),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::NotFound(s) => {
                eprintln!("{} {}", "Error:".style(error_style), s);
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            CoreError::AmbiguousId(items) => {
                eprintln!("{}", "Error: Ambiguous ID.".style(error_style));
                eprintln!("Did you mean one of these?");
                for (id, name) in items {
                    eprintln!("  {} ({})", id.yellow(), name);
                }
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
