use thiserror::Error;

/// Raised when a criteria or one of its comparisons would be malformed.
#[derive(Debug, Error, PartialEq)]
pub enum CriteriaError {
    #[error("operator `{operator}` on field `{field}` requires a value")]
    MissingValue { field: String, operator: String },

    #[error("operator `{operator}` on field `{field}` does not take a value")]
    UnexpectedValue { field: String, operator: String },

    #[error("operator `{operator}` on field `{field}` requires a list of values")]
    ExpectedList { field: String, operator: String },

    #[error("operator `{operator}` on field `{field}` requires a single value")]
    ExpectedScalar { field: String, operator: String },

    #[error("field identifier must not be empty")]
    EmptyField,

    #[error("limit must be greater than zero")]
    ZeroLimit,

    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    #[error("unknown order type: {0}")]
    UnknownOrderType(String),
}
