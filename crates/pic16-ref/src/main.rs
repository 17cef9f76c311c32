use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};

mod catalog;
use catalog::{card, find, grouped, render_card, search, Card};

#[derive(Parser, Debug)]
#[command(author, version, about = "PIC16F84A instruction reference", long_about=None)]
struct Cli {
    /// Output format: text or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every instruction grouped by category
    List,
    /// Find instructions whose mnemonic contains TEXT (case-insensitive)
    Search {
        text: String,
    },
    /// Show a single instruction
    Show {
        mnemonic: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

const NO_MATCHES: &str = "No se encontraron instrucciones";

fn render_cards(cards: &[Card]) -> String {
    cards.iter().map(render_card).collect::<Vec<_>>().join("\n\n")
}

fn run(cli: &Cli) -> Result<String> {
    let out = match &cli.cmd {
        Command::List => {
            let groups = grouped();
            match cli.format {
                OutputFormat::Json => serde_json::to_string_pretty(&groups)?,
                OutputFormat::Text => groups
                    .iter()
                    .map(|g| format!("== {}\n\n{}", g.title, render_cards(&g.cards)))
                    .collect::<Vec<_>>()
                    .join("\n\n"),
            }
        }
        Command::Search { text } => {
            let cards: Vec<Card> = search(text).into_iter().map(card).collect();
            match cli.format {
                OutputFormat::Json => serde_json::to_string_pretty(&cards)?,
                OutputFormat::Text if cards.is_empty() => NO_MATCHES.to_string(),
                OutputFormat::Text => render_cards(&cards),
            }
        }
        Command::Show { mnemonic } => {
            let d = find(mnemonic).ok_or_else(|| anyhow!("Instrucción desconocida \"{}\"", mnemonic.to_uppercase()))?;
            let c = card(d);
            match cli.format {
                OutputFormat::Json => serde_json::to_string_pretty(&c)?,
                OutputFormat::Text => render_card(&c),
            }
        }
    };
    Ok(out)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("{}", run(&cli)?);
    Ok(())
}
