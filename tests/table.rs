use pic16_asm::{lookup, Category, TABLE};

#[test]
fn table_has_35_unique_mnemonics() {
    assert_eq!(TABLE.len(), 35);
    let mut names: Vec<&str> = TABLE.iter().map(|d| d.mnemonic).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 35);
}

#[test]
fn opcode_bases_match_reference() {
    let expected: &[(&str, u16, u8)] = &[
        ("ADDWF", 0x0700, 2), ("ANDWF", 0x0500, 2), ("CLRF", 0x0180, 1), ("CLRW", 0x0100, 0),
        ("COMF", 0x0900, 2), ("DECF", 0x0300, 2), ("DECFSZ", 0x0B00, 2), ("INCF", 0x0A00, 2),
        ("INCFSZ", 0x0F00, 2), ("IORWF", 0x0400, 2), ("MOVF", 0x0800, 2), ("MOVWF", 0x0080, 1),
        ("NOP", 0x0000, 0), ("RLF", 0x0D00, 2), ("RRF", 0x0C00, 2), ("SUBWF", 0x0200, 2),
        ("SWAPF", 0x0E00, 2), ("XORWF", 0x0600, 2), ("BCF", 0x1000, 2), ("BSF", 0x1400, 2),
        ("BTFSC", 0x1800, 2), ("BTFSS", 0x1C00, 2), ("ADDLW", 0x3E00, 1), ("ANDLW", 0x3900, 1),
        ("CALL", 0x2000, 1), ("CLRWDT", 0x0064, 0), ("GOTO", 0x2800, 1), ("IORLW", 0x3800, 1),
        ("MOVLW", 0x3000, 1), ("RETFIE", 0x0009, 0), ("RETLW", 0x3400, 1), ("RETURN", 0x0008, 0),
        ("SLEEP", 0x0063, 0), ("SUBLW", 0x3C00, 1), ("XORLW", 0x3A00, 1),
    ];
    for &(name, opcode, operands) in expected {
        let d = lookup(name).unwrap_or_else(|| panic!("{name} missing"));
        assert_eq!(d.opcode, opcode, "{name}");
        assert_eq!(d.operands, operands, "{name}");
    }
}

#[test]
fn categories_agree_with_arity() {
    for d in TABLE {
        match d.category {
            Category::NoOperand => assert_eq!(d.operands, 0, "{}", d.mnemonic),
            Category::BitOriented => assert_eq!(d.operands, 2, "{}", d.mnemonic),
            Category::Literal | Category::JumpTarget => assert_eq!(d.operands, 1, "{}", d.mnemonic),
            Category::ByteOriented => assert!(d.operands >= 1, "{}", d.mnemonic),
        }
    }
    assert_eq!(lookup("CLRF").unwrap().category, Category::ByteOriented);
    assert_eq!(lookup("CALL").unwrap().category, Category::JumpTarget);
    assert_eq!(lookup("CLRW").unwrap().category, Category::NoOperand);
}

#[test]
fn lookup_is_exact_and_uppercase() {
    assert!(lookup("movlw").is_none());
    assert!(lookup("ORG").is_none());
    assert!(lookup("END").is_none());
    assert!(lookup("").is_none());
}
