use crate::errors::CriteriaError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OrderType {
    #[default]
    Asc,
    Desc,
}

impl FromStr for OrderType {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(OrderType::Asc),
            "desc" | "descending" => Ok(OrderType::Desc),
            _ => Err(CriteriaError::UnknownOrderType(s.to_string())),
        }
    }
}

impl TryFrom<String> for OrderType {
    type Error = CriteriaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single sort key of a criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    order_by: String,
    order_type: OrderType,
}

impl Order {
    pub fn new(order_by: impl Into<String>, order_type: OrderType) -> Result<Self, CriteriaError> {
        let order_by = order_by.into();
        if order_by.trim().is_empty() {
            return Err(CriteriaError::EmptyField);
        }
        Ok(Self {
            order_by,
            order_type,
        })
    }

    pub fn asc(order_by: impl Into<String>) -> Result<Self, CriteriaError> {
        Self::new(order_by, OrderType::Asc)
    }

    pub fn desc(order_by: impl Into<String>) -> Result<Self, CriteriaError> {
        Self::new(order_by, OrderType::Desc)
    }

    pub fn order_by(&self) -> &str {
        &self.order_by
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }
}
