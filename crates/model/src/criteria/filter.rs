//! The filter tree of a criteria.
//!
//! A [`Filter`] is a binary tree: combinators hold exactly two children and
//! leaves are [`Comparison`]s. A comparison can only be built through
//! [`Comparison::new`] (or one of its shorthands), which checks the operand
//! against the operator's arity, so a tree that exists is well-formed.

use crate::{
    core::value::Value,
    criteria::operator::{Arity, Operator},
    errors::CriteriaError,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Both children must hold.
    And(Box<Filter>, Box<Filter>),

    /// At least one child must hold.
    Or(Box<Filter>, Box<Filter>),

    /// A single field condition.
    Comparison(Comparison),
}

impl Filter {
    pub fn and(left: impl Into<Filter>, right: impl Into<Filter>) -> Self {
        Filter::And(Box::new(left.into()), Box::new(right.into()))
    }

    pub fn or(left: impl Into<Filter>, right: impl Into<Filter>) -> Self {
        Filter::Or(Box::new(left.into()), Box::new(right.into()))
    }

    /// Number of comparisons (leaves) in this tree.
    pub fn comparison_count(&self) -> usize {
        match self {
            Filter::And(left, right) | Filter::Or(left, right) => {
                left.comparison_count() + right.comparison_count()
            }
            Filter::Comparison(_) => 1,
        }
    }
}

impl From<Comparison> for Filter {
    fn from(comparison: Comparison) -> Self {
        Filter::Comparison(comparison)
    }
}

/// The right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    None,
    Scalar(Value),
    List(Vec<Value>),
}

impl Operand {
    fn arity(&self) -> Arity {
        match self {
            Operand::None => Arity::Nullary,
            Operand::Scalar(_) => Arity::Scalar,
            Operand::List(_) => Arity::List,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    field: String,
    operator: Operator,
    operand: Operand,
}

impl Comparison {
    pub fn new(
        field: impl Into<String>,
        operator: Operator,
        operand: Operand,
    ) -> Result<Self, CriteriaError> {
        let field = field.into();
        if field.trim().is_empty() {
            return Err(CriteriaError::EmptyField);
        }

        let expected = operator.arity();
        if expected != operand.arity() {
            let operator_name = operator.to_string();
            return Err(match (expected, operand.arity()) {
                (Arity::Nullary, _) => CriteriaError::UnexpectedValue {
                    field,
                    operator: operator_name,
                },
                (_, Arity::Nullary) => CriteriaError::MissingValue {
                    field,
                    operator: operator_name,
                },
                (Arity::List, _) => CriteriaError::ExpectedList {
                    field,
                    operator: operator_name,
                },
                (Arity::Scalar, _) => CriteriaError::ExpectedScalar {
                    field,
                    operator: operator_name,
                },
            });
        }

        Ok(Self {
            field,
            operator,
            operand,
        })
    }

    pub fn equal(field: impl Into<String>, value: impl Into<Value>) -> Result<Self, CriteriaError> {
        Self::scalar(field, Operator::Equal, value)
    }

    pub fn not_equal(
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, CriteriaError> {
        Self::scalar(field, Operator::NotEqual, value)
    }

    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Result<Self, CriteriaError> {
        Self::scalar(field, Operator::Gt, value)
    }

    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Result<Self, CriteriaError> {
        Self::scalar(field, Operator::Lt, value)
    }

    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Result<Self, CriteriaError> {
        Self::scalar(field, Operator::Gte, value)
    }

    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Result<Self, CriteriaError> {
        Self::scalar(field, Operator::Lte, value)
    }

    pub fn contains(
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, CriteriaError> {
        Self::scalar(field, Operator::Contains, value)
    }

    pub fn in_list<V: Into<Value>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Result<Self, CriteriaError> {
        let values = values.into_iter().map(Into::into).collect();
        Self::new(field, Operator::In, Operand::List(values))
    }

    pub fn not_in_list<V: Into<Value>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Result<Self, CriteriaError> {
        let values = values.into_iter().map(Into::into).collect();
        Self::new(field, Operator::NotIn, Operand::List(values))
    }

    pub fn is_null(field: impl Into<String>) -> Result<Self, CriteriaError> {
        Self::new(field, Operator::IsNull, Operand::None)
    }

    pub fn is_not_null(field: impl Into<String>) -> Result<Self, CriteriaError> {
        Self::new(field, Operator::IsNotNull, Operand::None)
    }

    fn scalar(
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
    ) -> Result<Self, CriteriaError> {
        Self::new(field, operator, Operand::Scalar(value.into()))
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operand(&self) -> &Operand {
        &self.operand
    }
}
