//! Mapping from abstract operators to SQL.

use model::criteria::operator::Operator;
use query_builder::params::ParamType;

pub fn sql_operator(op: Operator) -> &'static str {
    match op {
        Operator::Equal => "=",
        Operator::NotEqual => "<>",
        Operator::Gt => ">",
        Operator::Lt => "<",
        Operator::Gte => ">=",
        Operator::Lte => "<=",
        Operator::Contains => "LIKE",
        Operator::In => "IN",
        Operator::NotIn => "NOT IN",
        Operator::IsNull => "IS NULL",
        Operator::IsNotNull => "IS NOT NULL",
    }
}

/// Type hint to bind the operator's value with, if any.
pub fn param_type(op: Operator) -> Option<ParamType> {
    match op {
        Operator::In | Operator::NotIn => Some(ParamType::StringArray),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_operator_table() {
        let table: Vec<(Operator, &str)> = Operator::ALL
            .into_iter()
            .map(|op| (op, sql_operator(op)))
            .collect();

        assert_eq!(
            table,
            vec![
                (Operator::Equal, "="),
                (Operator::NotEqual, "<>"),
                (Operator::Gt, ">"),
                (Operator::Lt, "<"),
                (Operator::Gte, ">="),
                (Operator::Lte, "<="),
                (Operator::Contains, "LIKE"),
                (Operator::In, "IN"),
                (Operator::NotIn, "NOT IN"),
                (Operator::IsNull, "IS NULL"),
                (Operator::IsNotNull, "IS NOT NULL"),
            ]
        );
    }

    #[test]
    fn test_only_set_operators_carry_a_type() {
        for op in Operator::ALL {
            let expected = matches!(op, Operator::In | Operator::NotIn);
            assert_eq!(param_type(op).is_some(), expected, "{op}");
        }
    }
}
