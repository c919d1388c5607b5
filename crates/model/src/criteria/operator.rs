use crate::errors::CriteriaError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Comparison operators understood by a criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Operator {
    Equal,
    NotEqual,
    Gt,
    Lt,
    Gte,
    Lte,
    Contains,
    In,
    NotIn,
    IsNull,
    IsNotNull,
}

/// How many values an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Nullary,
    Scalar,
    List,
}

impl Operator {
    pub const ALL: [Operator; 11] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::Gt,
        Operator::Lt,
        Operator::Gte,
        Operator::Lte,
        Operator::Contains,
        Operator::In,
        Operator::NotIn,
        Operator::IsNull,
        Operator::IsNotNull,
    ];

    pub fn arity(&self) -> Arity {
        match self {
            Operator::IsNull | Operator::IsNotNull => Arity::Nullary,
            Operator::In | Operator::NotIn => Arity::List,
            _ => Arity::Scalar,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operator::Equal => "equal",
            Operator::NotEqual => "not_equal",
            Operator::Gt => "gt",
            Operator::Lt => "lt",
            Operator::Gte => "gte",
            Operator::Lte => "lte",
            Operator::Contains => "contains",
            Operator::In => "in",
            Operator::NotIn => "not_in",
            Operator::IsNull => "is_null",
            Operator::IsNotNull => "is_not_null",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = CriteriaError;

    /// Accepts the snake_case names as well as their SQL-like spellings
    /// (`=`, `!=`, `not in`, `IS NULL`, ...), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_ascii_lowercase();

        let op = match normalized.as_str() {
            "=" | "==" | "eq" => Operator::Equal,
            "<>" | "!=" | "ne" | "neq" => Operator::NotEqual,
            ">" => Operator::Gt,
            "<" => Operator::Lt,
            ">=" => Operator::Gte,
            "<=" => Operator::Lte,
            "like" => Operator::Contains,
            name => Operator::ALL
                .into_iter()
                .find(|op| op.name() == name)
                .ok_or_else(|| CriteriaError::UnknownOperator(s.to_string()))?,
        };
        Ok(op)
    }
}

impl TryFrom<String> for Operator {
    type Error = CriteriaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
