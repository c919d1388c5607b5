//! Translates abstract query criteria into parameterized SQL predicates.
//!
//! [`translate`] is a pure function producing a [`Translation`];
//! [`CriteriaTranslator`] applies that result to any
//! [`QueryBuilder`](query_builder::build::QueryBuilder).

pub mod fields;
pub mod operator;
pub mod translation;
pub mod translator;

pub use fields::FieldMap;
pub use translation::{OrderBy, Translation};
pub use translator::{CriteriaTranslator, translate};
