use crate::error::CliError;
use model::core::value::Value;
use serde_json::json;
use translator::Translation;

pub fn print_translation(translation: &Translation, as_json: bool) -> Result<(), CliError> {
    if as_json {
        let json = serde_json::to_string_pretty(&translation_json(translation))
            .map_err(CliError::JsonSerialize)?;
        println!("{json}");
    } else {
        print!("{}", format_translation(translation));
    }
    Ok(())
}

pub fn print_query(sql: &str, params: &[Value], as_json: bool) -> Result<(), CliError> {
    if as_json {
        let json = serde_json::to_string_pretty(&query_json(sql, params))
            .map_err(CliError::JsonSerialize)?;
        println!("{json}");
    } else {
        print!("{}", format_query(sql, params));
    }
    Ok(())
}

fn translation_json(translation: &Translation) -> serde_json::Value {
    let params: Vec<serde_json::Value> = translation
        .params
        .iter()
        .map(|p| {
            json!({
                "name": p.name,
                "value": p.value.to_json(),
                "type": p.param_type.map(|t| t.name()),
            })
        })
        .collect();
    let order_by: Vec<serde_json::Value> = translation
        .order_by
        .iter()
        .map(|o| json!({ "column": o.column, "direction": o.direction.as_sql() }))
        .collect();

    json!({
        "predicates": translation.predicates,
        "params": params,
        "order_by": order_by,
        "offset": translation.offset,
        "limit": translation.limit,
    })
}

fn format_translation(translation: &Translation) -> String {
    let mut out = String::new();

    if !translation.predicates.is_empty() {
        out.push_str("WHERE\n");
        for predicate in &translation.predicates {
            out.push_str(&format!("  {predicate}\n"));
        }
    }
    if !translation.params.is_empty() {
        out.push_str("PARAMETERS\n");
        for param in &translation.params {
            out.push_str(&format!("  {:<16} {}", param.name, param.value.to_json()));
            if let Some(param_type) = param.param_type {
                out.push_str(&format!(" ({})", param_type.name()));
            }
            out.push('\n');
        }
    }
    if !translation.order_by.is_empty() {
        out.push_str("ORDER BY\n");
        for order in &translation.order_by {
            out.push_str(&format!("  {} {}\n", order.column, order.direction.as_sql()));
        }
    }
    if let Some(offset) = translation.offset {
        out.push_str(&format!("OFFSET {offset}\n"));
    }
    if let Some(limit) = translation.limit {
        out.push_str(&format!("LIMIT {limit}\n"));
    }

    out
}

fn query_json(sql: &str, params: &[Value]) -> serde_json::Value {
    let params: Vec<serde_json::Value> = params.iter().map(Value::to_json).collect();
    json!({ "sql": sql, "params": params })
}

fn format_query(sql: &str, params: &[Value]) -> String {
    let mut out = format!("{sql}\n");
    for (i, value) in params.iter().enumerate() {
        out.push_str(&format!("  #{:<4} {value}\n", i + 1));
    }
    out
}
