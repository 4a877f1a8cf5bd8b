use tracing::debug;

use super::comment::normalize_comment;
use super::lexer::{doc_comment_body, Lexer, TokenKind};

/// A constant as it appears in an enum body, documented or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantDecl<'a> {
    /// Inner text of the `/** */` block directly before the constant
    pub doc: Option<&'a str>,
    pub name: &'a str,
    /// Verbatim text between the argument parentheses
    pub arguments: Option<&'a str>,
}

/// A documented enum constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstant {
    pub name: String,
    pub argument: Option<String>,
    /// Raw comment text, delimiters excluded
    pub comment: String,
    /// Declaration position among all constants of the enum
    pub position: usize,
}

impl EnumConstant {
    /// Trimmed argument text, `None` when absent or blank.
    pub fn value(&self) -> Option<&str> {
        self.argument
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn description(&self) -> String {
        normalize_comment(&self.comment)
    }
}

/// Split an enum body into its constant declarations, in source order.
///
/// The constant list ends at the first top-level `;`. Annotations between a
/// doc comment and its constant are skipped, as are constant class bodies.
pub fn tokenize_constants(body: &str) -> Vec<ConstantDecl<'_>> {
    let mut lexer = Lexer::new(body);
    let mut pending_doc = None;
    let mut decls = Vec::new();

    while let Some(token) = lexer.next() {
        match token.kind {
            TokenKind::DocComment => pending_doc = Some(doc_comment_body(token.text)),
            TokenKind::Comment => {}
            TokenKind::At => skip_annotation(&mut lexer),
            TokenKind::Ident => {
                let arguments = match lexer.peek_significant() {
                    Some(open) if open.kind == TokenKind::OpenParen => {
                        lexer.next_significant();
                        let end = lexer
                            .close_group(TokenKind::OpenParen, TokenKind::CloseParen)
                            .map_or(body.len(), |close| close.start);
                        Some(&body[open.end..end])
                    }
                    _ => None,
                };

                if lexer.peek_significant().map(|t| t.kind) == Some(TokenKind::OpenBrace) {
                    lexer.next_significant();
                    lexer.close_group(TokenKind::OpenBrace, TokenKind::CloseBrace);
                }

                decls.push(ConstantDecl {
                    doc: pending_doc.take(),
                    name: token.text,
                    arguments,
                });
            }
            TokenKind::Semicolon => break,
            _ => pending_doc = None,
        }
    }

    decls
}

/// Documented constants of an enum body. Constants without a doc comment
/// are left out.
pub fn parse_constants(body: &str) -> Vec<EnumConstant> {
    tokenize_constants(body)
        .into_iter()
        .enumerate()
        .filter_map(|(position, decl)| match decl.doc {
            Some(comment) => Some(EnumConstant {
                name: decl.name.to_string(),
                argument: decl.arguments.map(str::to_string),
                comment: comment.to_string(),
                position,
            }),
            None => {
                debug!("Skipping undocumented constant {}", decl.name);
                None
            }
        })
        .collect()
}

/// Consume `Name`, `a.b.Name` and an optional argument list after `@`.
fn skip_annotation(lexer: &mut Lexer<'_>) {
    if lexer.peek_significant().map(|t| t.kind) != Some(TokenKind::Ident) {
        return;
    }
    lexer.next_significant();

    loop {
        match lexer.peek_significant() {
            Some(dot) if dot.kind == TokenKind::Other && dot.text == "." => {
                lexer.next_significant();
                lexer.next_significant();
            }
            Some(open) if open.kind == TokenKind::OpenParen => {
                lexer.next_significant();
                lexer.close_group(TokenKind::OpenParen, TokenKind::CloseParen);
                return;
            }
            _ => return,
        }
    }
}
