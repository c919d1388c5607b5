use crate::ast::expr::{Expr, Ident};

pub mod ast;
pub mod build;
pub mod dialect;
pub mod error;
pub mod macros;
pub mod params;
pub mod render;

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: None,
        name: name.to_string(),
    })
}

/// Builds a select-list expression from user input.
///
/// Plain names (`id`) and qualified names (`u.id`) become dialect-quoted
/// identifiers; anything else (`*`, `COUNT(*)`) is emitted verbatim.
pub fn column(expr: &str) -> Expr {
    let parts: Vec<&str> = expr.split('.').collect();
    if !parts.iter().all(|p| is_plain_name(p)) {
        return Expr::Literal(expr.to_string());
    }

    match parts.as_slice() {
        [name] => ident(name),
        [qualifier, name] => Expr::Identifier(Ident {
            qualifier: Some(qualifier.to_string()),
            name: name.to_string(),
        }),
        _ => Expr::Literal(expr.to_string()),
    }
}

fn is_plain_name(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
