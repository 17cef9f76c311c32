use serde::Serialize;
use std::fmt;

/// Line-local failure raised while classifying or encoding one source line.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    #[error("Instrucción desconocida \"{0}\"")]
    UnknownMnemonic(String),
    #[error("Falta operando")]
    MissingOperand,
    #[error("Literal inválido \"{0}\"")]
    InvalidLiteral(String),
    #[error("Destino inválido \"{0}\"")]
    InvalidDestination(String),
}

/// An error pinned to its 1-based source line. `message` is what callers show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssemblyError {
    pub line: usize,
    pub message: String,
}

impl AssemblyError {
    pub fn new(line: usize, err: &AsmError) -> Self {
        Self {
            line,
            message: format!("Línea {line}: {err}"),
        }
    }
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
