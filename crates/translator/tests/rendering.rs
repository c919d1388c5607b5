//! Criteria applied to a select builder and rendered for each dialect.

use model::{
    core::value::Value,
    criteria::{
        Criteria,
        filter::{Comparison, Filter},
        order::Order,
    },
};
use query_builder::{
    build::select::{FromState, SelectBuilder},
    column,
    dialect::{MySql, Postgres},
    table_ref,
};
use translator::{CriteriaTranslator, FieldMap};

fn users() -> SelectBuilder<FromState> {
    SelectBuilder::new()
        .select(vec![column("*")])
        .from(table_ref!("users"), None)
}

#[test]
fn test_in_list_expands_per_element() {
    let criteria = Criteria::builder()
        .filter(Comparison::in_list("id", vec![1, 2, 3]).unwrap())
        .build()
        .unwrap();
    let fields = FieldMap::new();

    let mut builder = users();
    CriteriaTranslator::new(&mut builder, &fields).execute(&criteria);
    let (sql, params) = builder.build().to_sql(&Postgres).unwrap();

    assert_eq!(sql, r#"SELECT * FROM "users" WHERE id IN ($1, $2, $3)"#);
    assert_eq!(
        params,
        vec![Value::from("1"), Value::from("2"), Value::from("3")]
    );
}

#[test]
fn test_full_query_postgres() {
    let fields = FieldMap::new()
        .with("name", "u.name")
        .with("createdAt", "u.created_at");
    let criteria = Criteria::builder()
        .filter(Filter::and(
            Comparison::contains("name", "jo").unwrap(),
            Comparison::equal("status", "active").unwrap(),
        ))
        .filter(Comparison::is_null("deletedAt").unwrap())
        .order(Order::desc("createdAt").unwrap())
        .offset(10)
        .limit(20)
        .build()
        .unwrap();

    let mut builder = SelectBuilder::new()
        .select(vec![column("u.id"), column("u.name")])
        .from(table_ref!("app", "users"), Some("u"));
    CriteriaTranslator::new(&mut builder, &fields).execute(&criteria);
    let (sql, params) = builder.build().to_sql(&Postgres).unwrap();

    assert_eq!(
        sql,
        r#"SELECT "u"."id", "u"."name" FROM "app"."users" AS "u" WHERE (( u.name LIKE $1 AND status = $2 )) AND (deletedAt IS NULL) ORDER BY u.created_at DESC LIMIT 20 OFFSET 10"#
    );
    assert_eq!(params, vec![Value::from("%jo%"), Value::from("active")]);
}

#[test]
fn test_full_query_mysql() {
    let criteria = Criteria::builder()
        .filter(Filter::or(
            Comparison::not_in_list("status", vec!["banned"]).unwrap(),
            Comparison::gt("age", 30).unwrap(),
        ))
        .offset(5)
        .build()
        .unwrap();
    let fields = FieldMap::new();

    let mut builder = users();
    CriteriaTranslator::new(&mut builder, &fields).execute(&criteria);
    let (sql, params) = builder.build().to_sql(&MySql).unwrap();

    assert_eq!(
        sql,
        "SELECT * FROM `users` WHERE ( status NOT IN (?) OR age > ? ) LIMIT 18446744073709551615 OFFSET 5"
    );
    assert_eq!(params, vec![Value::from("banned"), Value::Int(30)]);
}

#[test]
fn test_executing_twice_keeps_earlier_bindings() {
    let first = Criteria::builder()
        .filter(Comparison::equal("id", 1).unwrap())
        .build()
        .unwrap();
    let second = Criteria::builder()
        .filter(Filter::or(
            Comparison::equal("id", 2).unwrap(),
            Comparison::is_null("id").unwrap(),
        ))
        .build()
        .unwrap();
    let third = Criteria::builder()
        .filter(Comparison::equal("id", 3).unwrap())
        .build()
        .unwrap();
    let fields = FieldMap::new();

    let mut builder = users();
    let mut translator = CriteriaTranslator::new(&mut builder, &fields);
    translator.execute(&first);
    translator.execute(&second);
    translator.execute(&third);
    let ast = builder.build();

    let names: Vec<&str> = ast.params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["id1", "id2", "id4"]);

    let (sql, params) = ast.to_sql(&Postgres).unwrap();

    assert_eq!(
        sql,
        r#"SELECT * FROM "users" WHERE (id = $1) AND (( id = $2 OR id IS NULL )) AND (id = $3)"#
    );
    assert_eq!(params, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
}
