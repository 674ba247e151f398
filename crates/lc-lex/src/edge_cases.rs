//! Edge case and property tests for the scanner.

use proptest::prelude::*;

use crate::{keyword_from_ident, tokenize, LexValue, Lexeme, Tag};

fn lex_all(source: &str) -> Vec<Lexeme> {
    tokenize(source).collect()
}

#[test]
fn single_char_identifier() {
    let lexemes = lex_all("x");
    assert_eq!(lexemes[0].tag, Tag::Ident);
    assert_eq!(lexemes[0].value.as_text(), Some("x"));
}

#[test]
fn very_long_identifier() {
    let name = "a".repeat(10_000);
    let lexemes = lex_all(&name);
    assert_eq!(lexemes.len(), 1);
    assert_eq!(lexemes[0].value.as_text(), Some(name.as_str()));
}

#[test]
fn underscore_leads_an_identifier() {
    let lexemes = lex_all("_tmp _ __2");
    assert_eq!(
        lexemes.iter().map(|l| l.tag).collect::<Vec<_>>(),
        [Tag::Ident, Tag::Ident, Tag::Ident]
    );
}

#[test]
fn adjacent_tokens_without_whitespace() {
    let tags: Vec<Tag> = lex_all("fib(n-1)+fib(n-2)").iter().map(|l| l.tag).collect();
    assert_eq!(
        tags,
        [
            Tag::Ident,
            Tag::LParen,
            Tag::Ident,
            Tag::Sub,
            Tag::Int,
            Tag::RParen,
            Tag::Add,
            Tag::Ident,
            Tag::LParen,
            Tag::Ident,
            Tag::Sub,
            Tag::Int,
            Tag::RParen
        ]
    );
}

#[test]
fn number_glued_to_identifier() {
    // "2x" is INT then IDENT; identifiers cannot start with a digit.
    let tags: Vec<Tag> = lex_all("2x").iter().map(|l| l.tag).collect();
    assert_eq!(tags, [Tag::Int, Tag::Ident]);
}

#[test]
fn binary_prefix_is_not_special() {
    // No binary literals in L: "0b1010" is INT(0) then IDENT("b1010").
    let lexemes = lex_all("0b1010");
    assert_eq!(lexemes[0].value, LexValue::Int(0));
    assert_eq!(lexemes[1].value.as_text(), Some("b1010"));
}

#[test]
fn comment_markers_inside_comment_are_inert() {
    assert_eq!(lex_all("// a // b @ ^\nx").len(), 1);
}

#[test]
fn error_lexeme_preserves_multibyte_characters() {
    let lexemes = lex_all("é");
    assert_eq!(lexemes[0].tag, Tag::Error);
    assert_eq!(lexemes[0].value.as_text(), Some("é"));
    assert_eq!(lexemes.len(), 1);
}

#[test]
fn errors_do_not_stop_the_scan() {
    let lexemes = lex_all("@#$ let");
    assert_eq!(
        lexemes.iter().map(|l| l.tag).collect::<Vec<_>>(),
        [Tag::Error, Tag::Error, Tag::Error, Tag::Let]
    );
}

proptest! {
    /// For every lexeme, lineno is one more than the number of
    /// newlines before its index.
    #[test]
    fn line_accounting(source in "[a-z0-3+*/^(){};,=<>!&| \n\t]{0,160}") {
        for lex in tokenize(&source) {
            let newlines = source[..lex.index].matches('\n').count() as u32;
            prop_assert_eq!(lex.lineno, newlines + 1);
        }
    }

    /// No IDENT lexeme ever carries reserved keyword text.
    #[test]
    fn keywords_and_identifiers_are_disjoint(source in "[a-z ]{0,80}") {
        for lex in tokenize(&source) {
            if lex.tag == Tag::Ident {
                let text = lex.value.as_text().unwrap();
                prop_assert!(keyword_from_ident(text).is_none());
            }
        }
    }

    /// Re-scanning the space-joined text of the scanned lexemes yields
    /// the same tags and values.
    #[test]
    fn rescanning_is_idempotent(source in "[a-z0-9.+*/^(){};,=<>!&|@ \n\t]{0,160}") {
        // Literals beyond f64's round-trip precision render differently
        // than they were written; they are not interesting here.
        prop_assume!(!source
            .as_bytes()
            .windows(16)
            .any(|w| w.iter().all(|b| b.is_ascii_digit() || *b == b'.')));

        let first: Vec<Lexeme> = tokenize(&source).collect();
        // A float whose shortest rendering needs an exponent would not
        // scan back as a single FLOAT lexeme.
        prop_assume!(first.iter().all(|lex| {
            lex.tag != Tag::Float
                || lex
                    .value
                    .raw()
                    .bytes()
                    .all(|b| b.is_ascii_digit() || b == b'.')
        }));

        let joined = first
            .iter()
            .map(|lex| lex.value.raw())
            .collect::<Vec<_>>()
            .join(" ");
        let second: Vec<Lexeme> = tokenize(&joined).collect();

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(a.tag, b.tag);
            prop_assert_eq!(&a.value, &b.value);
        }
    }

    /// The scanner terminates and assigns strictly increasing indices
    /// on arbitrary input.
    #[test]
    fn indices_strictly_increase(source in "\\PC{0,120}") {
        let mut prev: Option<usize> = None;
        for lex in tokenize(&source) {
            if let Some(p) = prev {
                prop_assert!(lex.index > p);
            }
            prev = Some(lex.index);
        }
    }
}
