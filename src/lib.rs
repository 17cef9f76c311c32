pub mod assembler;
pub mod encoder;
pub mod error;
pub mod listing;
pub mod number;

pub mod isa {
    pub mod pic16; // PIC16F84A mid-range core
}

pub use assembler::{compile, compile_with, AsmConfig, Assembler, CompileOutput, EncodedWord, Program};
pub use encoder::{Encoder, Pic16Encoder};
pub use error::{AsmError, AssemblyError};
pub use isa::pic16::{lookup, Category, InstrDesc, TABLE};
