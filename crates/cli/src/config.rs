use crate::error::CliError;
use query_builder::{ast::common::TableRef, ast::expr::Expr, column, table_ref};
use serde::Deserialize;
use translator::FieldMap;

pub const DEFAULT_DIALECT: &str = "postgres";

/// Optional settings shared by all commands, read from a JSON file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub table: Option<String>,
    pub dialect: Option<String>,
    pub columns: Vec<String>,
    pub fields: FieldMap,
}

impl CliConfig {
    /// Loads the config at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&str>) -> Result<Self, CliError> {
        match path {
            Some(path) => {
                let source = std::fs::read_to_string(path)?;
                Self::from_json(&source)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(source: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Replaces the configured table and dialect with the ones given on the
    /// command line, if any.
    pub fn override_with(&mut self, table: Option<String>, dialect: Option<String>) {
        if table.is_some() {
            self.table = table;
        }
        if dialect.is_some() {
            self.dialect = dialect;
        }
    }

    pub fn dialect_name(&self) -> &str {
        self.dialect.as_deref().unwrap_or(DEFAULT_DIALECT)
    }

    /// The table to select from; `schema.table` is split on the first dot.
    pub fn table_ref(&self) -> Result<TableRef, CliError> {
        let table = self.table.as_deref().ok_or(CliError::MissingTable)?;
        Ok(match table.split_once('.') {
            Some((schema, name)) => table_ref!(schema, name),
            None => table_ref!(table),
        })
    }

    pub fn select_list(&self) -> Vec<Expr> {
        if self.columns.is_empty() {
            return vec![column("*")];
        }
        self.columns.iter().map(|c| column(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_builder::ident;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_json("{}").unwrap();

        assert_eq!(config.dialect_name(), "postgres");
        assert_eq!(config.select_list(), vec![column("*")]);
        assert!(config.fields.is_empty());
        assert!(matches!(config.table_ref(), Err(CliError::MissingTable)));
    }

    #[test]
    fn test_full_config() {
        let source = json!({
            "table": "app.users",
            "dialect": "mysql",
            "columns": ["id", "email"],
            "fields": { "createdAt": "created_at" }
        })
        .to_string();

        let config = CliConfig::from_json(&source).unwrap();

        assert_eq!(config.dialect_name(), "mysql");
        assert_eq!(config.table_ref().unwrap(), table_ref!("app", "users"));
        assert_eq!(config.select_list(), vec![ident("id"), ident("email")]);
        assert_eq!(config.fields.resolve("createdAt"), "created_at");
    }

    #[test]
    fn test_flags_override_config() {
        let mut config =
            CliConfig::from_json(r#"{ "table": "users", "dialect": "mysql" }"#).unwrap();

        config.override_with(None, Some("pg".to_string()));
        assert_eq!(config.table_ref().unwrap(), table_ref!("users"));
        assert_eq!(config.dialect_name(), "pg");

        config.override_with(Some("app.accounts".to_string()), None);
        assert_eq!(config.table_ref().unwrap(), table_ref!("app", "accounts"));
        assert_eq!(config.dialect_name(), "pg");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = CliConfig::from_json(r#"{ "tables": "users" }"#).unwrap_err();
        assert!(matches!(err, CliError::JsonDeserialize(_)));
    }
}
