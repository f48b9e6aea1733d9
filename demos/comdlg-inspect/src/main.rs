//! Dialog error code and identifier inspector
//!
//! Run with: cargo run --bin comdlg-inspect -- explain 0x1007

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use agentctl::{identifiers, Guid};
use comdlg::{DialogError, DialogErrorCategory};

#[derive(Parser)]
#[command(name = "comdlg-inspect")]
#[command(about = "Inspect common-dialog error codes and Agent control identifiers")]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Explain an extended error code (decimal or 0x-prefixed hex)
    Explain { code: String },

    /// Identify a GUID against the identifier table
    Identify { guid: String },

    /// Print a whole table
    List {
        #[arg(value_enum)]
        table: Table,

        /// Restrict the code table to one dialog family
        #[arg(long)]
        category: Option<Category>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Table {
    Codes,
    Identifiers,
}

#[derive(Clone, Copy, ValueEnum)]
enum Category {
    General,
    Printer,
    Font,
    FileName,
    FindReplace,
    Color,
}

impl From<Category> for DialogErrorCategory {
    fn from(category: Category) -> Self {
        match category {
            Category::General => Self::GeneralDialog,
            Category::Printer => Self::Printer,
            Category::Font => Self::Font,
            Category::FileName => Self::FileName,
            Category::FindReplace => Self::FindReplace,
            Category::Color => Self::Color,
        }
    }
}

fn parse_code(text: &str) -> Result<u32, std::num::ParseIntError> {
    let text = text.trim();
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse(),
    }
}

fn explain(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let code = parse_code(text)?;
    debug!("parsed {} as 0x{:04x}", text, code);

    match DialogError::from_code(code) {
        Some(err) => {
            println!("{} (0x{:04x})", err.symbol(), err.code());
            println!("  category: {}", err.category());
            println!("  meaning:  {}", err.description());
            Ok(())
        }
        None => {
            let category = DialogErrorCategory::of_code(code);
            println!(
                "0x{:04x} is not a defined code; it falls in the {} block (base 0x{:04x})",
                code,
                category,
                category.base()
            );
            std::process::exit(1);
        }
    }
}

fn identify(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let guid: Guid = text.parse()?;
    debug!("parsed {} as {}", text, guid);

    match identifiers::find_by_guid(&guid) {
        Some(entry) => {
            println!("{} ({})", entry.name, entry.role);
            println!("  value: {:?}", entry.guid);
            Ok(())
        }
        None => {
            println!("{:?} does not name a known Agent control entity", guid);
            std::process::exit(1);
        }
    }
}

fn list(table: Table, category: Option<Category>) {
    match table {
        Table::Codes => {
            let filter: Option<DialogErrorCategory> = category.map(Into::into);
            for err in DialogError::ALL {
                if filter.is_some_and(|c| c != err.category()) {
                    continue;
                }
                println!(
                    "0x{:04x}  {:24}  {:14}  {}",
                    err.code(),
                    err.symbol(),
                    err.category().to_string(),
                    err.description()
                );
            }
        }
        Table::Identifiers => {
            for entry in identifiers::KNOWN_IDENTIFIERS {
                println!("{:?}  {:12}  {}", entry.guid, entry.role.to_string(), entry.name);
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Explain { code } => explain(&code)?,
        Command::Identify { guid } => identify(&guid)?,
        Command::List { table, category } => list(table, category),
    }

    Ok(())
}
