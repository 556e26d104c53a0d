//! Line lexer for level files using logos
//!
//! A level line is whitespace-separated words. A parenthesized run that starts
//! a line or follows whitespace is a comment; a `(` inside a word is not.

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'src> {
    #[regex(r"\([^)\n]*\)", |lex| {
        let s = lex.slice();
        &s[1..s.len() - 1] // Strip parens
    })]
    Comment(&'src str),

    #[regex(r"[^ \t\r\n\f]+", |lex| lex.slice())]
    Word(&'src str),
}

/// One source line split into indentation and tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexedLine<'src> {
    /// Number of leading tab characters
    pub depth: usize,
    pub tokens: Vec<Token<'src>>,
}

impl<'src> LexedLine<'src> {
    /// Words with comments removed
    pub fn words(&self) -> Vec<&'src str> {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                Token::Word(word) => Some(*word),
                Token::Comment(_) => None,
            })
            .collect()
    }

    /// The comment text if the line is nothing but a single comment
    pub fn sole_comment(&self) -> Option<&'src str> {
        match self.tokens.as_slice() {
            [Token::Comment(text)] => Some(*text),
            _ => None,
        }
    }
}

pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Token::lexer(source).filter_map(Result::ok).collect()
}

pub fn lex_line(line: &str) -> LexedLine<'_> {
    let depth = line.bytes().take_while(|b| *b == b'\t').count();
    LexedLine {
        depth,
        tokens: tokenize(&line[depth..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_and_comments() {
        let tokens = tokenize("Wall 0 0 (a wall) 0 0 0");
        assert_eq!(tokens[0], Token::Word("Wall"));
        assert_eq!(tokens[3], Token::Comment("a wall"));
        assert_eq!(tokens.len(), 7);
    }

    #[test]
    fn test_paren_inside_word_is_not_comment() {
        let tokens = tokenize("abc(def) ghi");
        assert_eq!(tokens, vec![Token::Word("abc(def)"), Token::Word("ghi")]);
    }

    #[test]
    fn test_lex_line_counts_tabs() {
        let line = lex_line("\t\tFloor 1 2 Button");
        assert_eq!(line.depth, 2);
        assert_eq!(line.words(), vec!["Floor", "1", "2", "Button"]);
    }

    #[test]
    fn test_sole_comment() {
        assert_eq!(lex_line("(My Level)").sole_comment(), Some("My Level"));
        assert_eq!(lex_line("shed (flag)").sole_comment(), None);
    }

    #[test]
    fn test_tight_parens_are_comment() {
        assert_eq!(tokenize("(c)"), vec![Token::Comment("c")]);
        assert_eq!(tokenize("()"), vec![Token::Comment("")]);
    }

    #[test]
    fn test_unclosed_paren_is_word() {
        assert_eq!(tokenize("(oops"), vec![Token::Word("(oops")]);
    }
}
