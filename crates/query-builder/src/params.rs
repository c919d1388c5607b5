//! Named query parameters.

use model::core::value::Value;

/// How the renderer must bind a parameter that holds several values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// Expand the list into one placeholder per element, each bound as text.
    StringArray,
}

impl ParamType {
    pub fn name(&self) -> &'static str {
        match self {
            ParamType::StringArray => "string_array",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Scalar(Value),
    List(Vec<Value>),
}

impl ParamValue {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ParamValue::Scalar(value) => value.to_json(),
            ParamValue::List(values) => values.iter().map(Value::to_json).collect(),
        }
    }
}

impl From<Value> for ParamValue {
    fn from(value: Value) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<Vec<Value>> for ParamValue {
    fn from(values: Vec<Value>) -> Self {
        ParamValue::List(values)
    }
}

/// A value bound to a `:name` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub value: ParamValue,
    pub param_type: Option<ParamType>,
}

impl Param {
    pub fn new(name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            param_type: None,
        }
    }

    pub fn with_type(mut self, param_type: ParamType) -> Self {
        self.param_type = Some(param_type);
        self
    }
}
