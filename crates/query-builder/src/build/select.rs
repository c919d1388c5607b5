//! Provides a type-safe, fluent builder for constructing `Select` ASTs.

// --- Typestate Marker Structs ---
// These zero-sized structs represent the state of the builder.
// They ensure that methods are called in the correct SQL order at compile time.

use crate::{
    ast::{
        common::{OrderDir, TableRef},
        expr::Expr,
        select::{FromClause, OrderByExpr, Select},
    },
    build::QueryBuilder,
    params::{Param, ParamType, ParamValue},
};
use tracing::warn;

/// The initial state of the builder before any clauses have been added.
#[derive(Debug, Default, Clone)]
pub struct InitialState;

/// The state after the `SELECT` clause has been added.
#[derive(Debug, Default, Clone)]
pub struct SelectState;

/// The state after the `FROM` clause has been added.
#[derive(Debug, Default, Clone)]
pub struct FromState;

// --- The Main Builder ---

#[derive(Debug, Clone)]
pub struct SelectBuilder<State> {
    ast: Select,
    state: State,
}

impl Default for SelectBuilder<InitialState> {
    fn default() -> Self {
        Self::new()
    }
}

/// Implementation for the initial state of the builder.
impl SelectBuilder<InitialState> {
    pub fn new() -> Self {
        Self {
            ast: Select::default(),
            state: InitialState,
        }
    }

    /// Adds a `SELECT` clause with a list of columns.
    /// This is the entry point for building a select query.
    pub fn select(mut self, columns: Vec<Expr>) -> SelectBuilder<SelectState> {
        self.ast.columns = columns;
        SelectBuilder {
            ast: self.ast,
            state: SelectState,
        }
    }
}

/// Implementation for the state after `SELECT` has been called.
/// The only valid next step is to specify a `FROM` table.
impl SelectBuilder<SelectState> {
    /// Adds a `FROM` clause specifying the primary table.
    pub fn from(mut self, table: TableRef, alias: Option<&str>) -> SelectBuilder<FromState> {
        self.ast.from = Some(FromClause {
            table,
            alias: alias.map(String::from),
        });
        SelectBuilder {
            ast: self.ast,
            state: FromState,
        }
    }
}

/// Implementation for the state after `FROM` has been called.
/// From here, we can add optional clauses like `WHERE`, `ORDER BY`, etc.
impl SelectBuilder<FromState> {
    /// Adds a `WHERE` predicate, AND-ed with any existing ones.
    pub fn filter(mut self, condition: Expr) -> Self {
        self.ast.where_clause.push(condition);
        self
    }

    /// Binds a named parameter referenced by a fragment predicate.
    pub fn param(mut self, param: Param) -> Self {
        self.bind(param);
        self
    }

    /// Adds an `ORDER BY` clause to the query.
    pub fn order_by(mut self, expr: Expr, direction: Option<OrderDir>) -> Self {
        self.ast.order_by.push(OrderByExpr { expr, direction });
        self
    }

    /// Adds a `LIMIT` clause to the query.
    pub fn limit(mut self, limit: u64) -> Self {
        self.ast.limit = Some(limit);
        self
    }

    /// Adds an `OFFSET` clause to the query.
    pub fn offset(mut self, offset: u64) -> Self {
        self.ast.offset = Some(offset);
        self
    }

    /// Finalizes and returns the constructed `Select` AST.
    pub fn build(self) -> Select {
        self.ast
    }

    fn bind(&mut self, param: Param) {
        match self.ast.params.iter_mut().find(|p| p.name == param.name) {
            Some(existing) => {
                warn!("Parameter `{}` was already bound; replacing it", param.name);
                *existing = param;
            }
            None => self.ast.params.push(param),
        }
    }
}

impl QueryBuilder for SelectBuilder<FromState> {
    fn and_where(&mut self, predicate: String) {
        self.ast.where_clause.push(Expr::Fragment(predicate));
    }

    fn set_parameter(&mut self, name: String, value: ParamValue, param_type: Option<ParamType>) {
        self.bind(Param {
            name,
            value,
            param_type,
        });
    }

    fn add_order_by(&mut self, column: String, direction: OrderDir) {
        self.ast.order_by.push(OrderByExpr {
            expr: Expr::Literal(column),
            direction: Some(direction),
        });
    }

    fn set_offset(&mut self, offset: u64) {
        self.ast.offset = Some(offset);
    }

    fn set_limit(&mut self, limit: u64) {
        self.ast.limit = Some(limit);
    }
}
