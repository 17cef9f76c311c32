use pic16_asm::listing::{fmt_word, render, FOOTER, HEADER};
use pic16_asm::EncodedWord;
use pretty_assertions::assert_eq;

#[test]
fn empty_program_renders_nothing() {
    assert_eq!(render(&[]), "");
}

#[test]
fn words_are_padded_uppercase_hex() {
    assert_eq!(fmt_word(&EncodedWord { address: 0x1a, value: 0x3eff }), "001A: 3EFF");
    let out = render(&[
        EncodedWord { address: 0, value: 0x28 },
        EncodedWord { address: 0x7ff, value: 0x1c05 },
    ]);
    assert_eq!(out, format!("{HEADER}0000: 0028\n07FF: 1C05\n\n{FOOTER}"));
    assert!(!out.ends_with('\n'));
}
