use crate::interpreter::{
    keywords::KeywordSet,
    lexer::{Token, TokenKind},
};

/// Re-synthesizes source text from a token sequence.
///
/// Tokens on the same line are joined by one space and line breaks follow the
/// recorded token lines, so diagnostics on the rendered text point at the same
/// lines as on the input. String literals are re-quoted. When `target` is
/// given, every keyword is re-spelled in that set; otherwise keywords keep
/// their original spelling. Comments are not tokens and are therefore lost.
///
/// # Example
/// ```
/// use novolang::interpreter::{keywords::KeywordSet, lexer::tokenize, render::render};
///
/// let tokens = tokenize("if (a > 5) { print(\"x\") }").unwrap();
///
/// assert_eq!(render(&tokens, Some(KeywordSet::Chinese)),
///            "如果 ( a > 5 ) { 打印 ( \"x\" ) }\n");
/// ```
#[must_use]
pub fn render(tokens: &[Token], target: Option<KeywordSet>) -> String {
    let mut out = String::new();
    let mut line = 1;
    let mut line_start = true;

    for token in tokens.iter().take_while(|t| t.kind != TokenKind::Eof) {
        while line < token.line {
            out.push('\n');
            line += 1;
            line_start = true;
        }
        if !line_start {
            out.push(' ');
        }
        line_start = false;

        match token.kind {
            TokenKind::String => {
                out.push('"');
                out.push_str(&token.text);
                out.push('"');
                line += token.text.matches('\n').count();
            },
            kind if kind.is_keyword() => {
                let spelling = target.and_then(|set| set.spell(kind)).unwrap_or(token.text.as_str());
                out.push_str(spelling);
            },
            _ => out.push_str(&token.text),
        }
    }

    if !out.is_empty() {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    const PROGRAM: &str = "var total = 0\n\
                           loop (i = 0; i < 3; i = i + 1) {\n\
                           \x20   total = total + i // running sum\n\
                           }\n\
                           if (total >= 3) print(\"big\nnumber\") else print(null)\n\
                           auto wait(1, true, false)\n";

    #[test]
    fn round_trip_in_every_set() {
        let original = tokenize(PROGRAM).unwrap();

        for set in KeywordSet::ALL {
            let rendered = render(&original, Some(set));
            let again = tokenize(&rendered).unwrap();

            assert_eq!(again.len(), original.len(), "{set}");
            for (a, b) in original.iter().zip(&again) {
                assert_eq!(a.kind, b.kind, "{set}");
                assert_eq!(a.line, b.line, "{set}");
                let expected = set.spell(a.kind).unwrap_or(a.text.as_str());
                assert_eq!(b.text, expected, "{set}");
            }
        }
    }

    #[test]
    fn untranslated_render_keeps_spellings() {
        let tokens = tokenize("如果 (x == 1)\n  print(\"a\")").unwrap();

        assert_eq!(render(&tokens, None), "如果 ( x == 1 )\nprint ( \"a\" )\n");
    }

    #[test]
    fn english_aliases_become_canonical() {
        let tokens = tokenize("for (i = 0; i < 1; i = i + 1) var x = i").unwrap();
        let rendered = render(&tokens, Some(KeywordSet::English));

        assert!(rendered.starts_with("loop ( i"));
        assert!(rendered.contains("def x = i"));
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render(&tokenize("// only a comment").unwrap(), None), "");
    }
}
