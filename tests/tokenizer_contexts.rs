//! Tokenizer context interactions.
//!
//! Each case mixes at least two contexts (string, line comment, block
//! comment, continuation) and pins the exact token sequence. The dangerous
//! bugs live exactly here: a brace inside a string that starts counting
//! toward depth, or a continuation inside a comment that keeps a cell open
//! forever.

use stata_bridge::stata::lexing::{detokenize, lex};
use stata_bridge::stata::testing::factories::toks;
use stata_bridge::stata::token::TokenKind::*;

#[test]
fn test_comment_markers_inside_string_stay_string() {
    let tokens = lex("di \"a // b /* c\"");
    assert_eq!(
        tokens.tokens(),
        toks(&[(PlainText, "di "), (Str, "\"a // b /* c\"")]).as_slice()
    );
}

#[test]
fn test_continuation_inside_string_stays_string() {
    let tokens = lex("di \"x /// y\"");
    assert_eq!(
        tokens.tokens(),
        toks(&[(PlainText, "di "), (Str, "\"x /// y\"")]).as_slice()
    );
}

#[test]
fn test_continuation_inside_line_comment_stays_comment() {
    let tokens = lex("// tail ///\ndi 1");
    assert_eq!(
        tokens.tokens(),
        toks(&[
            (Comment, "// tail ///"),
            (LineBreak, "\n"),
            (PlainText, "di 1"),
        ])
        .as_slice()
    );
}

#[test]
fn test_quote_inside_line_comment_stays_comment() {
    let tokens = lex("* she said \"hi\ndi 1");
    assert_eq!(
        tokens.tokens(),
        toks(&[
            (Comment, "* she said \"hi"),
            (LineBreak, "\n"),
            (PlainText, "di 1"),
        ])
        .as_slice()
    );
}

#[test]
fn test_block_comment_hides_quotes_and_braces_across_lines() {
    let tokens = lex("/* \"open\n{ not counted\n*/ di 2");
    assert_eq!(
        tokens.tokens(),
        toks(&[
            (Comment, "/* \"open\n{ not counted\n*/"),
            (PlainText, " di 2"),
        ])
        .as_slice()
    );
}

#[test]
fn test_string_then_trailing_comment() {
    let tokens = lex("di \"x\" // note");
    assert_eq!(
        tokens.tokens(),
        toks(&[
            (PlainText, "di "),
            (Str, "\"x\""),
            (PlainText, " "),
            (Comment, "// note"),
        ])
        .as_slice()
    );
}

#[test]
fn test_compound_string_spans_lines_without_splitting() {
    let tokens = lex("di `\"one\ntwo\"'\ndi 3");
    assert_eq!(
        tokens.tokens(),
        toks(&[
            (PlainText, "di "),
            (Str, "`\"one\ntwo\"'"),
            (LineBreak, "\n"),
            (PlainText, "di 3"),
        ])
        .as_slice()
    );
}

#[test]
fn test_star_comment_after_block_close() {
    let tokens = lex("}\n* done");
    assert_eq!(
        tokens.tokens(),
        toks(&[(CloseBrace, "}"), (LineBreak, "\n"), (Comment, "* done")]).as_slice()
    );
}

#[test]
fn test_continuation_inside_braced_block() {
    let tokens = lex("if x { ///\ndi 1\n}");
    assert_eq!(
        tokens.tokens(),
        toks(&[
            (PlainText, "if x "),
            (OpenBrace, "{"),
            (PlainText, " "),
            (ContinuationMarker, "///\n"),
            (PlainText, "di 1"),
            (LineBreak, "\n"),
            (CloseBrace, "}"),
        ])
        .as_slice()
    );
}

#[test]
fn test_do_file_fragment_keeps_every_byte() {
    let source = "* load data\nsysuse auto, clear\n\nforeach v of varlist price mpg {\n    quietly su `v' // inline note\n}\n\ndi `\"done \"all\" of it\"' ///\n    _newline\n";
    assert_eq!(detokenize(&lex(source)), source);
}
