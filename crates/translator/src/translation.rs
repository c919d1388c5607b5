use query_builder::{ast::common::OrderDir, build::QueryBuilder, params::Param};

/// The result of translating one criteria, independent of any builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translation {
    /// One predicate per top-level filter, in declaration order. Each may
    /// reference parameters as `:name`.
    pub predicates: Vec<String>,

    /// Bound parameters, in the order their comparisons were visited.
    pub params: Vec<Param>,

    pub order_by: Vec<OrderBy>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub direction: OrderDir,
}

impl Translation {
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Pushes every clause and parameter into `builder`.
    pub fn apply<B: QueryBuilder + ?Sized>(self, builder: &mut B) {
        for predicate in self.predicates {
            builder.and_where(predicate);
        }
        for param in self.params {
            builder.set_parameter(param.name, param.value, param.param_type);
        }
        for order in self.order_by {
            builder.add_order_by(order.column, order.direction);
        }
        if let Some(offset) = self.offset {
            builder.set_offset(offset);
        }
        if let Some(limit) = self.limit {
            builder.set_limit(limit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::value::Value;
    use query_builder::params::{ParamType, ParamValue};

    /// Records every call it receives.
    #[derive(Default)]
    struct RecordingBuilder {
        calls: Vec<String>,
    }

    impl QueryBuilder for RecordingBuilder {
        fn and_where(&mut self, predicate: String) {
            self.calls.push(format!("where {predicate}"));
        }

        fn set_parameter(
            &mut self,
            name: String,
            value: ParamValue,
            param_type: Option<ParamType>,
        ) {
            let value = value.to_json();
            self.calls.push(format!("param {name}={value} {param_type:?}"));
        }

        fn add_order_by(&mut self, column: String, direction: OrderDir) {
            let direction = direction.as_sql();
            self.calls.push(format!("order {column} {direction}"));
        }

        fn set_offset(&mut self, offset: u64) {
            self.calls.push(format!("offset {offset}"));
        }

        fn set_limit(&mut self, limit: u64) {
            self.calls.push(format!("limit {limit}"));
        }
    }

    #[test]
    fn test_apply_forwards_everything_in_order() {
        let translation = Translation {
            predicates: vec!["age >= :age1".to_string(), "id IN (:id2)".to_string()],
            params: vec![
                Param::new("age1", Value::Int(18)),
                Param::new("id2", vec![Value::Int(1), Value::Int(2)])
                    .with_type(ParamType::StringArray),
            ],
            order_by: vec![OrderBy {
                column: "created_at".to_string(),
                direction: OrderDir::Desc,
            }],
            offset: Some(10),
            limit: Some(20),
        };

        let mut builder = RecordingBuilder::default();
        translation.apply(&mut builder);

        assert_eq!(
            builder.calls,
            vec![
                "where age >= :age1",
                "where id IN (:id2)",
                "param age1=18 None",
                "param id2=[1,2] Some(StringArray)",
                "order created_at DESC",
                "offset 10",
                "limit 20",
            ]
        );
    }

    #[test]
    fn test_apply_empty_translation_does_nothing() {
        let mut builder = RecordingBuilder::default();
        Translation::default().apply(&mut builder);
        assert!(builder.calls.is_empty());
    }
}
