//! Serialized (JSON) form of a criteria.
//!
//! Documents are deserialized as-is and only turned into a [`Criteria`] by
//! [`CriteriaDocument::into_criteria`], which goes through the validating
//! constructors.

use crate::{
    core::value::Value,
    criteria::{
        Criteria,
        filter::{Comparison, Filter, Operand},
        operator::Operator,
        order::{Order, OrderType},
    },
    errors::CriteriaError,
};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CriteriaDocument {
    #[serde(default)]
    pub filters: Vec<FilterDocument>,

    #[serde(default)]
    pub order: Vec<OrderDocument>,

    #[serde(default)]
    pub offset: Option<u64>,

    #[serde(default)]
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FilterDocument {
    And {
        and: [Box<FilterDocument>; 2],
    },
    Or {
        or: [Box<FilterDocument>; 2],
    },
    Comparison {
        field: String,
        /// Parsed in [`FilterDocument::into_filter`] so an unknown name is
        /// reported as [`CriteriaError::UnknownOperator`].
        operator: String,
        #[serde(default)]
        value: Option<serde_json::Value>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderDocument {
    pub field: String,

    #[serde(rename = "type", default)]
    pub order_type: OrderType,
}

impl CriteriaDocument {
    pub fn into_criteria(self) -> Result<Criteria, CriteriaError> {
        let filters = self
            .filters
            .into_iter()
            .map(FilterDocument::into_filter)
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = Criteria::builder().filters(filters);
        for order in self.order {
            builder = builder.order(Order::new(order.field, order.order_type)?);
        }
        if let Some(offset) = self.offset {
            builder = builder.offset(offset);
        }
        if let Some(limit) = self.limit {
            builder = builder.limit(limit);
        }

        builder.build()
    }
}

impl FilterDocument {
    pub fn into_filter(self) -> Result<Filter, CriteriaError> {
        match self {
            FilterDocument::And { and: [left, right] } => {
                Ok(Filter::and(left.into_filter()?, right.into_filter()?))
            }
            FilterDocument::Or { or: [left, right] } => {
                Ok(Filter::or(left.into_filter()?, right.into_filter()?))
            }
            FilterDocument::Comparison {
                field,
                operator,
                value,
            } => {
                let operator: Operator = operator.parse()?;
                let operand = match value {
                    None => Operand::None,
                    Some(serde_json::Value::Array(items)) => Operand::List(
                        items
                            .iter()
                            .map(Value::from_json)
                            .collect::<Result<Vec<_>, _>>()?,
                    ),
                    Some(scalar) => Operand::Scalar(Value::from_json(&scalar)?),
                };
                Ok(Comparison::new(field, operator, operand)?.into())
            }
        }
    }
}
