//! Builders for query ASTs, and the capability a criteria translator needs
//! from them.

use crate::{ast::common::OrderDir, params::ParamType, params::ParamValue};

pub mod select;

/// What a translator needs from a query under construction.
///
/// Predicates passed to [`QueryBuilder::and_where`] may reference named
/// parameters as `:name`; they are resolved against the values given to
/// [`QueryBuilder::set_parameter`] when the query is rendered.
pub trait QueryBuilder {
    /// Adds a predicate, AND-ed with the ones already present.
    fn and_where(&mut self, predicate: String);

    /// Binds `value` to `:name`, replacing any earlier binding of that name.
    fn set_parameter(&mut self, name: String, value: ParamValue, param_type: Option<ParamType>);

    /// Appends a sort key after the existing ones.
    fn add_order_by(&mut self, column: String, direction: OrderDir);

    /// Number of rows to skip.
    fn set_offset(&mut self, offset: u64);

    /// Maximum number of rows to return.
    fn set_limit(&mut self, limit: u64);
}
