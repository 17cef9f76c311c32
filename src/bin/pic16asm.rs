use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use pic16_asm::{AsmConfig, Assembler, CompileOutput};

#[derive(Parser, Debug)]
#[command(author, version, about = "Assemble PIC16F84A source into a hex listing")]
struct Opts {
    /// Input assembly file
    #[arg(value_name = "ASMFILE")]
    input: PathBuf,
    /// Write the listing here instead of stdout (e.g. output.hex)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Reject malformed literals and destinations other than F/W/0/1
    #[arg(long)]
    strict: bool,
    /// Load assembler options from a JSON file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Output format: text listing or JSON
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn load_config(opts: &Opts) -> Result<AsmConfig> {
    let mut cfg = match &opts.config {
        Some(path) => {
            let txt = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<AsmConfig>(&txt)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => AsmConfig::default(),
    };
    if opts.strict {
        cfg = AsmConfig::strict();
    }
    Ok(cfg)
}

const NOTHING_TO_WRITE: &str = "sin instrucciones ensambladas, no hay nada que escribir";
const SUCCESS: &str = "✓ Compilación exitosa";

/// Assembles `opts.input`. The listing (or JSON) goes to `-o` or `out`; error
/// lines and status messages go to `status`.
fn run(opts: &Opts, out: &mut impl Write, status: &mut impl Write) -> Result<()> {
    let cfg = load_config(opts)?;
    tracing::debug!(?cfg, "assembler options");

    let source = std::fs::read_to_string(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;
    let program = Assembler::new(cfg).assemble(&source);
    let error_count = program.errors.len();
    let word_count = program.words.len();

    for e in &program.errors {
        writeln!(status, "{e}")?;
    }

    let rendered = match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(&program)?,
        OutputFormat::Text => CompileOutput::from(program).hex,
    };

    if rendered.is_empty() {
        writeln!(status, "{NOTHING_TO_WRITE}")?;
    } else if let Some(path) = &opts.output {
        std::fs::write(path, &rendered)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(words = word_count, "wrote {}", path.display());
    } else {
        writeln!(out, "{rendered}")?;
    }

    if error_count > 0 {
        bail!("⚠ {error_count} error(es) encontrado(s)");
    }
    if word_count > 0 {
        writeln!(status, "{SUCCESS}")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    run(&opts, &mut std::io::stdout().lock(), &mut std::io::stderr().lock())
}
