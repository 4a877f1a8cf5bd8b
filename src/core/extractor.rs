use super::lexer::{Lexer, Token, TokenKind};

/// One `enum Name { ... }` region found in a source unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumDeclaration<'a> {
    pub name: &'a str,
    /// Text between the opening brace and its matching closing brace
    pub body: &'a str,
    /// Discovery order within the unit, starting at 0
    pub index: usize,
}

/// Lazily yield the enum declarations of `source` in source order.
///
/// The returned iterator is `Clone`, and calling this again starts a fresh
/// scan, so the sequence can be walked any number of times.
pub fn extract_enums(source: &str) -> EnumDeclarations<'_> {
    EnumDeclarations {
        lexer: Lexer::new(source),
        found: 0,
    }
}

#[derive(Debug, Clone)]
pub struct EnumDeclarations<'a> {
    lexer: Lexer<'a>,
    found: usize,
}

impl<'a> Iterator for EnumDeclarations<'a> {
    type Item = EnumDeclaration<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let source = self.lexer.source();

        while let Some(token) = self.lexer.next_significant() {
            if !token.is_ident("enum") {
                continue;
            }

            let mut ahead = self.lexer.clone();
            let Some(name) = ahead.next_significant().filter(|t| t.kind == TokenKind::Ident) else {
                continue;
            };
            let Some(open) = seek_body(&mut ahead) else {
                continue;
            };

            // Resume right after the opening brace so nested enums are found too.
            self.lexer = ahead.clone();

            let body_end = ahead
                .close_group(TokenKind::OpenBrace, TokenKind::CloseBrace)
                .map_or(source.len(), |close| close.start);

            let declaration = EnumDeclaration {
                name: name.text,
                body: &source[open.end..body_end],
                index: self.found,
            };
            self.found += 1;
            return Some(declaration);
        }

        None
    }
}

/// Advance past an optional `implements A, b.C<D>` clause to the opening
/// brace. Anything else means the keyword did not start a declaration.
fn seek_body<'a>(lexer: &mut Lexer<'a>) -> Option<Token<'a>> {
    let mut in_clause = false;
    while let Some(token) = lexer.next_significant() {
        match token.kind {
            TokenKind::OpenBrace => return Some(token),
            TokenKind::Ident if token.text == "implements" && !in_clause => in_clause = true,
            TokenKind::Ident | TokenKind::Comma if in_clause => {}
            TokenKind::Other if in_clause && matches!(token.text, "." | "<" | ">" | "?") => {}
            _ => return None,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(source: &str) -> Vec<&str> {
        extract_enums(source).map(|e| e.name).collect()
    }

    #[test]
    fn test_single_enum() {
        let source = "public enum Color {\n    RED,\n    BLUE\n}\n";
        let enums: Vec<_> = extract_enums(source).collect();
        assert_eq!(enums.len(), 1);
        assert_eq!(enums[0].name, "Color");
        assert_eq!(enums[0].body, "\n    RED,\n    BLUE\n");
        assert_eq!(enums[0].index, 0);
    }

    #[test]
    fn test_source_order() {
        let source = "enum B { X } class K {} enum A { Y } enum C { Z }";
        assert_eq!(names(source), vec!["B", "A", "C"]);
        let indexes: Vec<_> = extract_enums(source).map(|e| e.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
    }

    #[test]
    fn test_no_enum() {
        assert!(extract_enums("class Plain { int x; }").next().is_none());
        assert!(extract_enums("").next().is_none());
    }

    #[test]
    fn test_nested_braces_use_matching_closer() {
        let source = "enum Op {\n  PLUS { int apply() { return 1; } },\n  MINUS\n}\nclass After {}";
        let enums: Vec<_> = extract_enums(source).collect();
        assert_eq!(enums.len(), 1);
        assert!(enums[0].body.contains("MINUS"));
        assert!(!enums[0].body.contains("After"));
    }

    #[test]
    fn test_braces_in_comments_and_strings() {
        let source = "enum Sym {\n  /** the { char */\n  OPEN(\"{\"),\n  CLOSE('}')\n}";
        let enums: Vec<_> = extract_enums(source).collect();
        assert_eq!(enums.len(), 1);
        assert!(enums[0].body.ends_with("CLOSE('}')\n"));
    }

    #[test]
    fn test_keyword_in_comment_or_string_ignored() {
        let source = "// enum Fake { A }\nString s = \"enum Nope { B }\";\nenum Real { C }";
        assert_eq!(names(source), vec!["Real"]);
    }

    #[test]
    fn test_implements_clause() {
        let source = "enum Planet implements Comparable<Planet>, java.io.Serializable { EARTH }";
        let enums: Vec<_> = extract_enums(source).collect();
        assert_eq!(enums[0].name, "Planet");
        assert_eq!(enums[0].body, " EARTH ");
    }

    #[test]
    fn test_nested_enum_discovered_after_outer() {
        let source = "enum Outer { A; enum Inner { B } }";
        assert_eq!(names(source), vec!["Outer", "Inner"]);
    }

    #[test]
    fn test_unclosed_body_runs_to_end() {
        let enums: Vec<_> = extract_enums("enum Broken { A, B").collect();
        assert_eq!(enums[0].body, " A, B");
    }

    #[test]
    fn test_restartable() {
        let source = "enum A { X } enum B { Y }";
        let declarations = extract_enums(source);
        let first: Vec<_> = declarations.clone().collect();
        let second: Vec<_> = declarations.collect();
        assert_eq!(first, second);
        assert_eq!(names(source), vec!["A", "B"]);
    }
}
