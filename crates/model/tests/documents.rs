//! Criteria documents read from JSON text, as the command line loads them.

use model::{
    core::value::Value,
    criteria::{
        document::CriteriaDocument,
        filter::{Filter, Operand},
        operator::Operator,
    },
    errors::CriteriaError,
};

fn load(source: &str) -> Result<model::criteria::Criteria, CriteriaError> {
    serde_json::from_str::<CriteriaDocument>(source)
        .expect("document should deserialize")
        .into_criteria()
}

#[test]
fn test_load_sql_style_operator_aliases() {
    let criteria = load(
        r#"{
            "filters": [
                { "field": "age", "operator": ">=", "value": 18 },
                { "field": "status", "operator": "NOT IN", "value": ["banned", "deleted"] },
                { "field": "score", "operator": "<>", "value": 2.5 }
            ]
        }"#,
    )
    .unwrap();

    let operators: Vec<Operator> = criteria
        .filters()
        .iter()
        .filter_map(|f| match f {
            Filter::Comparison(c) => Some(c.operator()),
            _ => None,
        })
        .collect();
    assert_eq!(
        operators,
        vec![Operator::Gte, Operator::NotIn, Operator::NotEqual]
    );

    match &criteria.filters()[2] {
        Filter::Comparison(c) => assert_eq!(c.operand(), &Operand::Scalar(Value::Float(2.5))),
        other => panic!("expected a comparison, got {other:?}"),
    }
}

#[test]
fn test_empty_document_is_an_empty_criteria() {
    let criteria = load("{}").unwrap();

    assert!(criteria.filters().is_empty());
    assert!(!criteria.has_sorting());
    assert_eq!(criteria.offset(), None);
    assert_eq!(criteria.limit(), None);
}

#[test]
fn test_unknown_operator_is_rejected() {
    let err = load(r#"{ "filters": [ { "field": "a", "operator": "between", "value": 1 } ] }"#)
        .unwrap_err();
    assert_eq!(err, CriteriaError::UnknownOperator("between".to_string()));
}

#[test]
fn test_unknown_operator_in_nested_group_is_rejected() {
    let err = load(
        r#"{
            "filters": [
                { "or": [
                    { "field": "a", "operator": "equal", "value": 1 },
                    { "field": "b", "operator": "~=", "value": 2 }
                ]}
            ]
        }"#,
    )
    .unwrap_err();
    assert_eq!(err, CriteriaError::UnknownOperator("~=".to_string()));
}

#[test]
fn test_unknown_top_level_key_is_rejected() {
    let result = serde_json::from_str::<CriteriaDocument>(r#"{ "where": [] }"#);
    assert!(result.is_err());
}

#[test]
fn test_value_on_nullary_operator_is_rejected() {
    let err = load(r#"{ "filters": [ { "field": "a", "operator": "is_null", "value": 1 } ] }"#)
        .unwrap_err();
    assert_eq!(
        err,
        CriteriaError::UnexpectedValue {
            field: "a".to_string(),
            operator: "is_null".to_string(),
        }
    );
}
