//! Tokenizer for Java-style source text.
//!
//! Only the structure needed to delimit enum declarations is recognized:
//! comments, literals, identifiers and the bracket/separator punctuation.
//! Comments and literals are single opaque tokens, so a brace inside
//! `"{"` or `/* } */` never changes nesting depth.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `/** ... */`
    DocComment,
    /// `/* ... */` or `// ...`
    Comment,
    Ident,
    /// String, char, text block or numeric literal
    Literal,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    Comma,
    Semicolon,
    At,
    Other,
}

impl TokenKind {
    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::DocComment | TokenKind::Comment)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl<'a> Token<'a> {
    pub fn is_ident(&self, name: &str) -> bool {
        self.kind == TokenKind::Ident && self.text == name
    }
}

/// Lazy token stream over a borrowed source. Cloning yields an independent
/// cursor at the same position, which is how lookahead is done.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub fn source(&self) -> &'a str {
        self.src
    }

    /// Next token that is not a comment.
    pub fn next_significant(&mut self) -> Option<Token<'a>> {
        self.find(|token| !token.kind.is_comment())
    }

    pub fn peek_significant(&self) -> Option<Token<'a>> {
        self.clone().next_significant()
    }

    /// Consume tokens up to and including the closer matching an opener that
    /// was already consumed. Returns `None` if the source ends first.
    pub fn close_group(&mut self, open: TokenKind, close: TokenKind) -> Option<Token<'a>> {
        let mut depth = 1usize;
        while let Some(token) = self.next() {
            if token.kind == open {
                depth += 1;
            } else if token.kind == close {
                depth -= 1;
                if depth == 0 {
                    return Some(token);
                }
            }
        }
        None
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.src[self.pos..];
        let trimmed = rest.trim_start();
        let start = self.pos + (rest.len() - trimmed.len());
        let first = trimmed.chars().next()?;

        let (kind, len) = match first {
            '/' if trimmed.starts_with("/**") && !trimmed.starts_with("/**/") => {
                (TokenKind::DocComment, block_comment_len(trimmed))
            }
            '/' if trimmed.starts_with("/*") => (TokenKind::Comment, block_comment_len(trimmed)),
            '/' if trimmed.starts_with("//") => (
                TokenKind::Comment,
                trimmed.find('\n').unwrap_or(trimmed.len()),
            ),
            '"' | '\'' => (TokenKind::Literal, quoted_len(trimmed, first)),
            '{' => (TokenKind::OpenBrace, 1),
            '}' => (TokenKind::CloseBrace, 1),
            '(' => (TokenKind::OpenParen, 1),
            ')' => (TokenKind::CloseParen, 1),
            ',' => (TokenKind::Comma, 1),
            ';' => (TokenKind::Semicolon, 1),
            '@' => (TokenKind::At, 1),
            c if c.is_ascii_digit() => (TokenKind::Literal, word_len(trimmed)),
            c if is_ident_start(c) => (TokenKind::Ident, word_len(trimmed)),
            c => (TokenKind::Other, c.len_utf8()),
        };

        let end = start + len;
        self.pos = end;
        Some(Token {
            kind,
            text: &self.src[start..end],
            start,
            end,
        })
    }
}

/// Inner text of a `/** ... */` token, without the delimiters.
pub fn doc_comment_body(text: &str) -> &str {
    let inner = text.strip_prefix("/**").unwrap_or(text);
    inner.strip_suffix("*/").unwrap_or(inner)
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn word_len(s: &str) -> usize {
    s.find(|c: char| !is_ident_char(c)).unwrap_or(s.len())
}

// Unterminated comments run to end of input.
fn block_comment_len(s: &str) -> usize {
    s[2..].find("*/").map_or(s.len(), |i| i + 4)
}

fn quoted_len(s: &str, quote: char) -> usize {
    if quote == '"' && s.starts_with("\"\"\"") {
        return s[3..].find("\"\"\"").map_or(s.len(), |i| i + 6);
    }

    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '\n' => return i,
            c if c == quote => return i + 1,
            _ => {}
        }
    }
    s.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src).map(|t| t.kind).collect()
    }

    #[test]
    fn test_punctuation_and_identifiers() {
        use TokenKind::*;
        assert_eq!(
            kinds("enum Color { RED(1), BLUE; }"),
            vec![
                Ident, Ident, OpenBrace, Ident, OpenParen, Literal, CloseParen, Comma, Ident,
                Semicolon, CloseBrace
            ]
        );
    }

    #[test]
    fn test_comments_are_single_tokens() {
        let tokens: Vec<_> = Lexer::new("/** doc { */ /* plain } */ // line }\nX").collect();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].kind, TokenKind::DocComment);
        assert_eq!(tokens[0].text, "/** doc { */");
        assert_eq!(tokens[1].kind, TokenKind::Comment);
        assert_eq!(tokens[2].kind, TokenKind::Comment);
        assert_eq!(tokens[2].text, "// line }");
        assert!(tokens[3].is_ident("X"));
    }

    #[test]
    fn test_empty_block_comment_is_not_doc() {
        assert_eq!(kinds("/**/ A"), vec![TokenKind::Comment, TokenKind::Ident]);
    }

    #[test]
    fn test_literals_hide_braces() {
        let tokens: Vec<_> = Lexer::new(r#""a } \" {" '}' """x{"""#).collect();
        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Literal));
        assert_eq!(tokens[0].text, r#""a } \" {""#);
        assert_eq!(tokens[1].text, "'}'");
    }

    #[test]
    fn test_unterminated_comment_runs_to_end() {
        let tokens: Vec<_> = Lexer::new("A /** open { ").collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "/** open { ");
        assert_eq!(doc_comment_body(tokens[1].text), " open { ");
    }

    #[test]
    fn test_close_group_tracks_depth() {
        let src = "{ a { b } c } tail";
        let mut lexer = Lexer::new(src);
        let open = lexer.next().unwrap();
        assert_eq!(open.kind, TokenKind::OpenBrace);
        let close = lexer.close_group(TokenKind::OpenBrace, TokenKind::CloseBrace).unwrap();
        assert_eq!(&src[open.end..close.start], " a { b } c ");
        assert!(lexer.next().unwrap().is_ident("tail"));
    }

    #[test]
    fn test_close_group_unbalanced() {
        let mut lexer = Lexer::new("( a ( b )");
        lexer.next();
        assert!(lexer.close_group(TokenKind::OpenParen, TokenKind::CloseParen).is_none());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut lexer = Lexer::new("/** c */ NAME");
        assert!(lexer.peek_significant().unwrap().is_ident("NAME"));
        assert_eq!(lexer.next().unwrap().kind, TokenKind::DocComment);
    }

    #[test]
    fn test_doc_comment_body() {
        assert_eq!(doc_comment_body("/** Warm hue */"), " Warm hue ");
        assert_eq!(doc_comment_body("/***/"), "");
    }
}
