use serde::{Deserialize, Serialize};

use crate::encoder::{Encoder, Pic16Encoder};
use crate::error::{AsmError, AssemblyError};
use crate::isa::pic16::{self, InstrDesc};
use crate::listing;
use crate::number;

/// Assembler behavior switches. The default reproduces the reference tool
/// bit for bit, quirks included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsmConfig {
    /// Reject literals containing digits illegal for their base instead of
    /// reading them leniently (and as zero when nothing parses).
    pub strict_literals: bool,
    /// Reject destination selectors other than `F`, `W`, `0` and `1` instead
    /// of OR-ing their decimal value into the word unmasked.
    pub strict_destination: bool,
}

impl AsmConfig {
    pub fn strict() -> Self {
        Self {
            strict_literals: true,
            strict_destination: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedWord {
    pub address: u16,
    pub value: u16,
}

/// Words and errors of one assembly pass, both in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    pub words: Vec<EncodedWord>,
    pub errors: Vec<AssemblyError>,
}

/// What a caller of [`compile`] displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileOutput {
    pub hex: String,
    pub errors: Vec<String>,
}

impl From<Program> for CompileOutput {
    fn from(p: Program) -> Self {
        Self {
            hex: listing::render(&p.words),
            errors: p.errors.into_iter().map(|e| e.message).collect(),
        }
    }
}

/// First token of a line after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Head<'a> {
    Org,
    End,
    Instruction(&'static InstrDesc),
    Unknown(&'a str),
}

impl<'a> Head<'a> {
    /// `upper` must already be upper-cased.
    pub fn classify(upper: &'a str) -> Self {
        match upper {
            "ORG" => Head::Org,
            "END" => Head::End,
            _ => match pic16::lookup(upper) {
                Some(desc) => Head::Instruction(desc),
                None => Head::Unknown(upper),
            },
        }
    }
}

/// Token separator. A byte-order mark counts as blank space, so a source saved
/// with one still assembles its first line.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Effect of a single source line on the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank or comment-only line.
    Skipped,
    /// `ORG`: the address counter becomes this value.
    Origin(u16),
    /// `END`: stop before the next line.
    Halt,
    /// One word at the current address.
    Emitted(u16),
    Errored(AssemblyError),
}

pub struct Assembler {
    cfg: AsmConfig,
    encoder: Pic16Encoder,
}

impl Assembler {
    pub fn new(cfg: AsmConfig) -> Self {
        Self {
            cfg,
            encoder: Pic16Encoder::new(cfg),
        }
    }

    /// Classifies and encodes one physical line. `line_no` is 1-based.
    pub fn assemble_line(&self, line_no: usize, text: &str) -> LineOutcome {
        let code = match text.find(';') {
            Some(p) => &text[..p],
            None => text,
        };
        let mut tokens = code.split(is_separator).filter(|t| !t.is_empty());
        let Some(first) = tokens.next() else {
            return LineOutcome::Skipped;
        };
        let rest: Vec<&str> = tokens.collect();
        let upper = first.to_uppercase();

        match Head::classify(&upper) {
            Head::Org => self.origin(line_no, rest.first().copied()),
            Head::End => LineOutcome::Halt,
            Head::Unknown(name) => {
                let err = AsmError::UnknownMnemonic(name.to_string());
                LineOutcome::Errored(AssemblyError::new(line_no, &err))
            }
            Head::Instruction(desc) => match self.encoder.encode(desc, &rest) {
                Ok(word) => LineOutcome::Emitted(word),
                Err(err) => LineOutcome::Errored(AssemblyError::new(line_no, &err)),
            },
        }
    }

    fn origin(&self, line_no: usize, arg: Option<&str>) -> LineOutcome {
        let arg = arg.unwrap_or("");
        if self.cfg.strict_literals {
            return match number::parse_number_exact(arg) {
                Ok(v) => LineOutcome::Origin(v as u16),
                Err(err) => LineOutcome::Errored(AssemblyError::new(line_no, &err)),
            };
        }
        match number::parse_number(arg) {
            Some(v) => LineOutcome::Origin(v as u16),
            None => {
                tracing::warn!(line = line_no, arg, "ORG argument is not a number, using 0");
                LineOutcome::Origin(0)
            }
        }
    }

    /// Runs the single pass over `source`, stopping at the first `END`.
    pub fn assemble(&self, source: &str) -> Program {
        let mut program = Program::default();
        let mut address: u16 = 0;

        for (i, line) in source.split('\n').enumerate() {
            let line_no = i + 1;
            match self.assemble_line(line_no, line) {
                LineOutcome::Skipped => {}
                LineOutcome::Origin(org) => {
                    tracing::debug!(line = line_no, "ORG {org:#06x}");
                    address = org;
                }
                LineOutcome::Halt => {
                    tracing::debug!(line = line_no, "END");
                    break;
                }
                LineOutcome::Emitted(value) => {
                    tracing::debug!(line = line_no, "{address:#06x}: {value:#06x}");
                    program.words.push(EncodedWord { address, value });
                    address = address.wrapping_add(1);
                }
                LineOutcome::Errored(err) => {
                    tracing::debug!(line = line_no, "{err}");
                    program.errors.push(err);
                }
            }
        }
        program
    }
}

/// Assembles `source` with the default configuration.
pub fn compile(source: &str) -> CompileOutput {
    compile_with(source, &AsmConfig::default())
}

pub fn compile_with(source: &str, cfg: &AsmConfig) -> CompileOutput {
    Assembler::new(*cfg).assemble(source).into()
}
