use clap::{Parser, Subcommand, ValueEnum};
use dueclip_core::models::ItemKind;

/// Deadline tracker with free-text date extraction
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Reference date for year inference and classification (YYYY-MM-DD,
    /// defaults to the current date)
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Capture highlighted text: extract a title and due date, then add the item
    Clip(ClipCommand),
    /// Add an item with an explicit name and date
    Add(AddCommand),
    /// List items
    List(ListCommand),
    /// Toggle completion of an item
    Done(DoneCommand),
    /// Delete an item
    Delete(DeleteCommand),
    /// Extract a title and date from text without storing anything
    Extract(ExtractCommand),
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum KindArg {
    Assignments,
    Exams,
}

impl From<KindArg> for ItemKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Assignments => ItemKind::Assignments,
            KindArg::Exams => ItemKind::Exams,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct ClipCommand {
    /// The highlighted text fragment
    pub text: String,
    /// Which list the item goes to
    #[clap(short, long, value_enum)]
    pub kind: Option<KindArg>,
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The name of the item
    pub name: String,
    /// The due date, in any supported format
    pub date: String,
    /// Which list the item goes to
    #[clap(short, long, value_enum)]
    pub kind: Option<KindArg>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Which list to show
    #[clap(short, long, value_enum)]
    pub kind: Option<KindArg>,
    /// Show every list
    #[clap(long)]
    pub all: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// The ID (or unique prefix) of the item
    pub id: String,
    /// Which list the item is in
    #[clap(short, long, value_enum)]
    pub kind: Option<KindArg>,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID (or unique prefix) of the item
    pub id: String,
    /// Which list the item is in
    #[clap(short, long, value_enum)]
    pub kind: Option<KindArg>,
    /// Skip the confirmation prompt
    #[clap(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ExtractCommand {
    /// The text to extract from
    pub text: String,
}
