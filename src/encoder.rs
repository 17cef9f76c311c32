use crate::assembler::AsmConfig;
use crate::error::AsmError;
use crate::isa::pic16::{Category, InstrDesc};
use crate::number::{self, clean, masked};

pub const FILE_MASK: u16 = 0x7F;
pub const BIT_MASK: u16 = 0x07;
pub const LITERAL_MASK: u16 = 0xFF;
pub const TARGET_MASK: u16 = 0x7FF;
/// Destination bit `d` and bit index `b` both start at bit 7.
pub const FIELD_SHIFT: u32 = 7;

pub trait Encoder {
    /// Builds the machine word for `desc` from the whitespace-split operand
    /// tokens that followed the mnemonic.
    fn encode(&self, desc: &InstrDesc, operands: &[&str]) -> Result<u16, AsmError>;
}

pub struct Pic16Encoder {
    cfg: AsmConfig,
}

impl Pic16Encoder {
    pub fn new(cfg: AsmConfig) -> Self {
        Self { cfg }
    }

    fn literal(&self, token: &str) -> Result<Option<i64>, AsmError> {
        if self.cfg.strict_literals {
            number::parse_number_exact(token).map(Some)
        } else {
            Ok(number::parse_number(token))
        }
    }

    /// A required operand; absent tokens are an error, malformed ones follow
    /// the literal policy.
    fn operand(&self, token: Option<&&str>) -> Result<Option<i64>, AsmError> {
        let token = token.ok_or(AsmError::MissingOperand)?;
        self.literal(token)
    }

    /// Destination selector for two-operand byte-oriented instructions.
    /// Absent means `W`.
    fn destination(&self, token: Option<&&str>) -> Result<Option<i64>, AsmError> {
        let Some(token) = token else { return Ok(Some(0)) };
        let dest = clean(token).to_uppercase();
        match dest.as_str() {
            "F" | "1" => Ok(Some(1)),
            "W" | "0" => Ok(Some(0)),
            _ if self.cfg.strict_destination => Err(AsmError::InvalidDestination(dest.clone())),
            _ => {
                let value = number::scan(&dest, 10).map(|s| s.value);
                if let Some(v) = value.filter(|v| !(0..=1).contains(v)) {
                    tracing::warn!(dest = %dest, value = v, "destination outside 0/1 is not masked");
                }
                Ok(value)
            }
        }
    }
}

impl Default for Pic16Encoder {
    fn default() -> Self {
        Self::new(AsmConfig::default())
    }
}

impl Encoder for Pic16Encoder {
    fn encode(&self, desc: &InstrDesc, operands: &[&str]) -> Result<u16, AsmError> {
        let mut word = desc.opcode;
        match desc.category {
            Category::NoOperand => {}
            Category::JumpTarget => {
                let target = self.operand(operands.first())?;
                word |= masked(target, TARGET_MASK);
            }
            Category::Literal => {
                let k = self.operand(operands.first())?;
                word |= masked(k, LITERAL_MASK);
            }
            Category::BitOriented => {
                let f = self.operand(operands.first())?;
                let b = self.operand(operands.get(1))?;
                word |= (masked(b, BIT_MASK) << FIELD_SHIFT) | masked(f, FILE_MASK);
            }
            Category::ByteOriented => {
                let f = self.operand(operands.first())?;
                word |= masked(f, FILE_MASK);
                if desc.operands == 2 {
                    let d = self.destination(operands.get(1))?;
                    // Unmasked: out-of-range values spill into the opcode bits.
                    word |= d.map_or(0, |v| v.wrapping_shl(FIELD_SHIFT) as u16);
                }
            }
        }
        Ok(word)
    }
}
