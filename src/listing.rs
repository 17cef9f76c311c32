use std::fmt::Write as _;

use crate::assembler::EncodedWord;

pub const HEADER: &str = "; Código Hexadecimal Generado\n; Formato: DIRECCIÓN: CÓDIGO\n;\n";
pub const FOOTER: &str = "; Fin del programa";

/// `AAAA: CCCC`, both upper-case and zero padded.
pub fn fmt_word(w: &EncodedWord) -> String {
    format!("{:04X}: {:04X}", w.address, w.value)
}

/// Renders the listing. An empty program renders as the empty string, with no
/// header or footer.
pub fn render(words: &[EncodedWord]) -> String {
    if words.is_empty() {
        return String::new();
    }
    let mut out = String::from(HEADER);
    for w in words {
        let _ = writeln!(out, "{}", fmt_word(w));
    }
    out.push('\n');
    out.push_str(FOOTER);
    out
}
