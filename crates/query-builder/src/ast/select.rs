//! Defines the Abstract Syntax Tree (AST) for a SELECT query.

use crate::{
    ast::{
        common::{OrderDir, TableRef},
        expr::Expr,
    },
    params::Param,
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    /// The list of columns or expressions to be returned.
    /// e.g., `id`, `name`, `*`
    pub columns: Vec<Expr>,

    /// The primary table for the query.
    /// e.g., `FROM users`
    pub from: Option<FromClause>,

    /// WHERE predicates; they are AND-ed together when rendered.
    pub where_clause: Vec<Expr>,

    /// The ORDER BY clause.
    pub order_by: Vec<OrderByExpr>,

    /// The LIMIT clause.
    pub limit: Option<u64>,

    /// The OFFSET clause.
    pub offset: Option<u64>,

    /// Named parameters referenced by `Expr::Fragment` predicates.
    pub params: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub table: TableRef,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub direction: Option<OrderDir>,
}
