use pic16_asm::number::{masked, parse_number, parse_number_exact, scan_token};
use pic16_asm::AsmError;

#[test]
fn notations() {
    assert_eq!(parse_number("0x1F"), Some(31));
    assert_eq!(parse_number("0X1f"), Some(31));
    assert_eq!(parse_number("0b101"), Some(5));
    assert_eq!(parse_number("0B11"), Some(3));
    assert_eq!(parse_number("1Fh"), Some(31));
    assert_eq!(parse_number("0AH"), Some(10));
    assert_eq!(parse_number("42"), Some(42));
}

#[test]
fn empty_and_commas() {
    assert_eq!(parse_number(""), Some(0));
    assert_eq!(parse_number("  "), Some(0));
    assert_eq!(parse_number(","), Some(0));
    assert_eq!(parse_number("0x0C,"), Some(12));
    assert_eq!(parse_number(" 1,0 "), Some(10));
}

#[test]
fn lenient_scan_keeps_leading_digits() {
    assert_eq!(parse_number("12abc"), Some(12));
    assert!(!scan_token("12abc").unwrap().complete);
    assert_eq!(parse_number("-5"), Some(-5));
    assert_eq!(parse_number("0x"), None);
    assert_eq!(parse_number("h"), None);
    assert_eq!(parse_number("abc"), None);
    assert_eq!(parse_number("0b2"), None);
}

#[test]
fn not_a_number_masks_to_zero() {
    assert_eq!(masked(None, 0xFF), 0);
    assert_eq!(masked(Some(0x1FF), 0xFF), 0xFF);
    assert_eq!(masked(Some(-1), 0x7F), 0x7F);
}

#[test]
fn exact_rejects_garbage() {
    assert_eq!(parse_number_exact("0x10"), Ok(16));
    assert_eq!(parse_number_exact(""), Ok(0));
    assert_eq!(parse_number_exact("12abc"), Err(AsmError::InvalidLiteral("12abc".into())));
    assert_eq!(parse_number_exact("zz,"), Err(AsmError::InvalidLiteral("zz".into())));
}
