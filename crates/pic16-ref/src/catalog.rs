use serde::Serialize;

use pic16_asm::{lookup, InstrDesc, TABLE};

/// Browsing groups. These follow how the instructions are usually taught and
/// differ from the encoder categories (CLRW sits with the file operations,
/// CALL and GOTO with the literals).
pub const GROUPS: &[(&str, &[&str])] = &[
    (
        "Operaciones con archivos",
        &[
            "ADDWF", "ANDWF", "CLRF", "CLRW", "COMF", "DECF", "DECFSZ", "INCF", "INCFSZ", "IORWF",
            "MOVF", "MOVWF", "RLF", "RRF", "SUBWF", "SWAPF", "XORWF",
        ],
    ),
    ("Operaciones con bits", &["BCF", "BSF", "BTFSC", "BTFSS"]),
    (
        "Literales y control",
        &[
            "ADDLW", "ANDLW", "CALL", "CLRWDT", "GOTO", "IORLW", "MOVLW", "RETFIE", "RETLW",
            "RETURN", "SLEEP", "SUBLW", "XORLW",
        ],
    ),
    ("Otras", &["NOP"]),
];

#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub name: &'static str,
    pub opcode: String,
    pub description: &'static str,
    pub operands: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct Group {
    pub title: &'static str,
    pub cards: Vec<Card>,
}

pub fn card(d: &InstrDesc) -> Card {
    Card {
        name: d.mnemonic,
        opcode: format!("0x{:04X}", d.opcode),
        description: d.description,
        operands: d.operands,
    }
}

pub fn render_card(c: &Card) -> String {
    format!(
        "{:<8}{}\n  {}\n  Operandos: {}",
        c.name, c.opcode, c.description, c.operands
    )
}

pub fn grouped() -> Vec<Group> {
    GROUPS
        .iter()
        .map(|&(title, names)| Group {
            title,
            cards: names.iter().filter_map(|n| lookup(n)).map(card).collect(),
        })
        .collect()
}

/// Case-insensitive substring match on the mnemonic, in table order.
pub fn search(filter: &str) -> Vec<&'static InstrDesc> {
    let needle = filter.to_lowercase();
    TABLE
        .iter()
        .filter(|d| d.mnemonic.to_lowercase().contains(&needle))
        .collect()
}

pub fn find(mnemonic: &str) -> Option<&'static InstrDesc> {
    lookup(&mnemonic.trim().to_uppercase())
}
