use serde::Serialize;

/// Operand layout of an instruction; selects how the encoder fills the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    /// `f` (7 bits) and, for two-operand forms, the destination bit `d`.
    ByteOriented,
    /// `f` (7 bits) and a bit index `b` (3 bits, at bit 7).
    BitOriented,
    /// 8-bit immediate `k`.
    Literal,
    /// 11-bit absolute program address.
    JumpTarget,
    NoOperand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstrDesc {
    pub mnemonic: &'static str,
    /// Fixed bits with every operand field cleared.
    pub opcode: u16,
    pub operands: u8,
    pub category: Category,
    pub description: &'static str,
}

/// PIC16F84A instruction set (35 mnemonics).
pub const TABLE: &[InstrDesc] = &[
    // Byte-oriented file register operations
    InstrDesc {
        mnemonic: "ADDWF",
        opcode: 0x0700,
        operands: 2,
        category: Category::ByteOriented,
        description: "Sumar W y f",
    },
    InstrDesc {
        mnemonic: "ANDWF",
        opcode: 0x0500,
        operands: 2,
        category: Category::ByteOriented,
        description: "AND lógico entre W y f",
    },
    InstrDesc {
        mnemonic: "CLRF",
        opcode: 0x0180,
        operands: 1,
        category: Category::ByteOriented,
        description: "Limpiar registro f (poner en 0)",
    },
    InstrDesc {
        mnemonic: "CLRW",
        opcode: 0x0100,
        operands: 0,
        category: Category::NoOperand,
        description: "Limpiar registro W (poner en 0)",
    },
    InstrDesc {
        mnemonic: "COMF",
        opcode: 0x0900,
        operands: 2,
        category: Category::ByteOriented,
        description: "Complementar f (invertir bits)",
    },
    InstrDesc {
        mnemonic: "DECF",
        opcode: 0x0300,
        operands: 2,
        category: Category::ByteOriented,
        description: "Decrementar f (restar 1)",
    },
    InstrDesc {
        mnemonic: "DECFSZ",
        opcode: 0x0B00,
        operands: 2,
        category: Category::ByteOriented,
        description: "Decrementar f, saltar si es 0",
    },
    InstrDesc {
        mnemonic: "INCF",
        opcode: 0x0A00,
        operands: 2,
        category: Category::ByteOriented,
        description: "Incrementar f (sumar 1)",
    },
    InstrDesc {
        mnemonic: "INCFSZ",
        opcode: 0x0F00,
        operands: 2,
        category: Category::ByteOriented,
        description: "Incrementar f, saltar si es 0",
    },
    InstrDesc {
        mnemonic: "IORWF",
        opcode: 0x0400,
        operands: 2,
        category: Category::ByteOriented,
        description: "OR inclusivo entre W y f",
    },
    InstrDesc {
        mnemonic: "MOVF",
        opcode: 0x0800,
        operands: 2,
        category: Category::ByteOriented,
        description: "Mover f a destino",
    },
    InstrDesc {
        mnemonic: "MOVWF",
        opcode: 0x0080,
        operands: 1,
        category: Category::ByteOriented,
        description: "Mover W al registro f",
    },
    InstrDesc {
        mnemonic: "NOP",
        opcode: 0x0000,
        operands: 0,
        category: Category::NoOperand,
        description: "No operación (no hace nada)",
    },
    InstrDesc {
        mnemonic: "RLF",
        opcode: 0x0D00,
        operands: 2,
        category: Category::ByteOriented,
        description: "Rotar f a la izquierda a través del carry",
    },
    InstrDesc {
        mnemonic: "RRF",
        opcode: 0x0C00,
        operands: 2,
        category: Category::ByteOriented,
        description: "Rotar f a la derecha a través del carry",
    },
    InstrDesc {
        mnemonic: "SUBWF",
        opcode: 0x0200,
        operands: 2,
        category: Category::ByteOriented,
        description: "Restar W de f",
    },
    InstrDesc {
        mnemonic: "SWAPF",
        opcode: 0x0E00,
        operands: 2,
        category: Category::ByteOriented,
        description: "Intercambiar nibbles en f",
    },
    InstrDesc {
        mnemonic: "XORWF",
        opcode: 0x0600,
        operands: 2,
        category: Category::ByteOriented,
        description: "XOR exclusivo entre W y f",
    },
    // Bit-oriented file register operations
    InstrDesc {
        mnemonic: "BCF",
        opcode: 0x1000,
        operands: 2,
        category: Category::BitOriented,
        description: "Limpiar bit en f (poner en 0)",
    },
    InstrDesc {
        mnemonic: "BSF",
        opcode: 0x1400,
        operands: 2,
        category: Category::BitOriented,
        description: "Establecer bit en f (poner en 1)",
    },
    InstrDesc {
        mnemonic: "BTFSC",
        opcode: 0x1800,
        operands: 2,
        category: Category::BitOriented,
        description: "Probar bit en f, saltar si está en 0",
    },
    InstrDesc {
        mnemonic: "BTFSS",
        opcode: 0x1C00,
        operands: 2,
        category: Category::BitOriented,
        description: "Probar bit en f, saltar si está en 1",
    },
    // Literal and control operations
    InstrDesc {
        mnemonic: "ADDLW",
        opcode: 0x3E00,
        operands: 1,
        category: Category::Literal,
        description: "Sumar literal a W",
    },
    InstrDesc {
        mnemonic: "ANDLW",
        opcode: 0x3900,
        operands: 1,
        category: Category::Literal,
        description: "AND lógico entre literal y W",
    },
    InstrDesc {
        mnemonic: "CALL",
        opcode: 0x2000,
        operands: 1,
        category: Category::JumpTarget,
        description: "Llamar subrutina",
    },
    InstrDesc {
        mnemonic: "CLRWDT",
        opcode: 0x0064,
        operands: 0,
        category: Category::NoOperand,
        description: "Limpiar temporizador watchdog",
    },
    InstrDesc {
        mnemonic: "GOTO",
        opcode: 0x2800,
        operands: 1,
        category: Category::JumpTarget,
        description: "Saltar a dirección",
    },
    InstrDesc {
        mnemonic: "IORLW",
        opcode: 0x3800,
        operands: 1,
        category: Category::Literal,
        description: "OR inclusivo entre literal y W",
    },
    InstrDesc {
        mnemonic: "MOVLW",
        opcode: 0x3000,
        operands: 1,
        category: Category::Literal,
        description: "Mover literal a W",
    },
    InstrDesc {
        mnemonic: "RETFIE",
        opcode: 0x0009,
        operands: 0,
        category: Category::NoOperand,
        description: "Retornar de interrupción",
    },
    InstrDesc {
        mnemonic: "RETLW",
        opcode: 0x3400,
        operands: 1,
        category: Category::Literal,
        description: "Retornar con literal en W",
    },
    InstrDesc {
        mnemonic: "RETURN",
        opcode: 0x0008,
        operands: 0,
        category: Category::NoOperand,
        description: "Retornar de subrutina",
    },
    InstrDesc {
        mnemonic: "SLEEP",
        opcode: 0x0063,
        operands: 0,
        category: Category::NoOperand,
        description: "Entrar en modo de bajo consumo",
    },
    InstrDesc {
        mnemonic: "SUBLW",
        opcode: 0x3C00,
        operands: 1,
        category: Category::Literal,
        description: "Restar W del literal",
    },
    InstrDesc {
        mnemonic: "XORLW",
        opcode: 0x3A00,
        operands: 1,
        category: Category::Literal,
        description: "XOR exclusivo entre literal y W",
    },
];

/// Finds the definition for an already upper-cased mnemonic.
pub fn lookup(mnemonic: &str) -> Option<&'static InstrDesc> {
    TABLE.iter().find(|d| d.mnemonic == mnemonic)
}
