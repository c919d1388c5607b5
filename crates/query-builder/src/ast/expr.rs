//! Defines the AST for SQL expressions.

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or table identifier, e.g., `users` or `users.id`.
    /// Quoted by the dialect when rendered.
    Identifier(Ident),

    /// SQL emitted verbatim, e.g. `*` or a physical column expression
    /// such as `u.created_at`.
    Literal(String),

    /// A boolean SQL fragment that may reference named parameters
    /// (`:name`), e.g. `( age >= :age1 OR status IN (:status2) )`.
    Fragment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 'users' in 'users.id'
    pub name: String,              // e.g., the 'id' in 'users.id'
}
