//! Token dump formats (diagnostic, stable).
//!
//! Two renderings of a scanned token stream: a plain-text listing with
//! one lexeme per line, and a pretty-printed JSON array of records.

use lc_util::DumpFormat;
use serde::Serialize;

use crate::token::Lexeme;

/// One lexeme as it appears in the JSON dump.
#[derive(Serialize)]
struct TokenRecord {
    #[serde(rename = "type")]
    tag: &'static str,
    value: crate::token::LexValue,
    lineno: u32,
    index: usize,
}

/// Renders a token stream in the requested format.
///
/// The txt form is `<TAG> <value> <lineno> <index>`, one lexeme per
/// line. The json form is an array of
/// `{"type", "value", "lineno", "index"}` objects with two-space
/// indentation; numeric lexemes serialize their parsed value, all
/// others their matched text.
pub fn dump_tokens(lexemes: &[Lexeme], format: DumpFormat) -> String {
    match format {
        DumpFormat::Txt => lexemes
            .iter()
            .map(|lex| format!("{} {} {} {}", lex.tag.name(), lex.value.raw(), lex.lineno, lex.index))
            .collect::<Vec<_>>()
            .join("\n"),
        DumpFormat::Json => {
            let records: Vec<TokenRecord> = lexemes
                .iter()
                .map(|lex| TokenRecord {
                    tag: lex.tag.name(),
                    value: lex.value,
                    lineno: lex.lineno,
                    index: lex.index,
                })
                .collect();
            serde_json::to_string_pretty(&records).expect("token records serialize to JSON")
        }
    }
}
