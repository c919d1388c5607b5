//! Defines the core rendering trait and context for converting AST to SQL.

use crate::{
    dialect::Dialect,
    error::RenderError,
    params::{Param, ParamType, ParamValue},
};
use model::core::value::Value;
use tracing::debug;

pub mod expr;
pub mod select;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the positional parameters, resolves
/// named placeholders against the bound parameters, and provides access to
/// the dialect for syntax-specific details.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
    named: &'a [Param],
    error: Option<RenderError>,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self::with_params(dialect, &[])
    }

    pub fn with_params(dialect: &'a dyn Dialect, named: &'a [Param]) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
            named,
            error: None,
        }
    }

    /// Consumes the renderer and returns the final SQL string and parameters,
    /// or the first error met while rendering.
    pub fn finish(self) -> Result<(String, Vec<Value>), RenderError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok((self.sql, self.params)),
        }
    }

    pub fn add_param(&mut self, value: Value) {
        self.params.push(value);
        let placeholder = self.dialect.get_placeholder(self.params.len() - 1);
        self.sql.push_str(&placeholder);
    }

    /// Appends a SQL fragment, replacing each `:name` with the dialect's
    /// positional placeholder(s) for the bound parameter of that name.
    ///
    /// `::` casts and single-quoted literals are copied untouched.
    pub fn push_fragment(&mut self, fragment: &str) {
        let mut rest = fragment;
        let mut in_literal = false;

        while let Some(c) = rest.chars().next() {
            let step = c.len_utf8();

            if in_literal || c != ':' {
                if c == '\'' {
                    in_literal = !in_literal;
                }
                self.sql.push(c);
                rest = &rest[step..];
                continue;
            }

            let after = &rest[1..];
            if after.starts_with(':') {
                self.sql.push_str("::");
                rest = &after[1..];
                continue;
            }

            match self.match_param(after) {
                Some(param) => {
                    rest = &after[param.name.len()..];
                    self.bind(param);
                }
                None => {
                    let name = placeholder_name(after);
                    if name.is_empty() {
                        self.sql.push(':');
                        rest = after;
                    } else {
                        self.fail(RenderError::UnboundParameter(name.to_string()));
                        self.sql.push(':');
                        self.sql.push_str(name);
                        rest = &after[name.len()..];
                    }
                }
            }
        }
    }

    fn fail(&mut self, err: RenderError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    /// Longest bound name that `text` starts with and that is not followed
    /// by another identifier character.
    fn match_param(&self, text: &str) -> Option<&'a Param> {
        let named: &'a [Param] = self.named;
        named
            .iter()
            .filter(|p| !p.name.is_empty() && text.starts_with(p.name.as_str()))
            .filter(|p| {
                text[p.name.len()..]
                    .chars()
                    .next()
                    .is_none_or(|c| !is_name_char(c))
            })
            .max_by_key(|p| p.name.len())
    }

    fn bind(&mut self, param: &Param) {
        match (&param.value, param.param_type) {
            (ParamValue::Scalar(value), _) => self.add_param(value.clone()),
            (ParamValue::List(values), Some(ParamType::StringArray)) => {
                debug!(
                    "Expanding list parameter `{}` into {} placeholders",
                    param.name,
                    values.len()
                );
                if values.is_empty() {
                    self.sql.push_str("NULL");
                    return;
                }
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        self.sql.push_str(", ");
                    }
                    self.add_param(Value::String(value.as_string()));
                }
            }
            (ParamValue::List(_), None) => {
                self.fail(RenderError::UntypedList(param.name.clone()));
                self.sql.push(':');
                self.sql.push_str(&param.name);
            }
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn placeholder_name(text: &str) -> &str {
    let end = text
        .char_indices()
        .find(|(_, c)| !(is_name_char(*c) || *c == '.'))
        .map_or(text.len(), |(i, _)| i);
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{MySql, Postgres};

    fn render(fragment: &str, params: &[Param]) -> Result<(String, Vec<Value>), RenderError> {
        let dialect = Postgres;
        let mut renderer = Renderer::with_params(&dialect, params);
        renderer.push_fragment(fragment);
        renderer.finish()
    }

    #[test]
    fn test_scalar_placeholders_follow_appearance_order() {
        let params = vec![
            Param::new("status2", Value::from("active")),
            Param::new("name1", Value::from("%jo%")),
        ];
        let (sql, values) = render("( name LIKE :name1 AND status = :status2 )", &params).unwrap();

        assert_eq!(sql, "( name LIKE $1 AND status = $2 )");
        assert_eq!(values, vec![Value::from("%jo%"), Value::from("active")]);
    }

    #[test]
    fn test_list_parameter_expands_as_strings() {
        let params = vec![
            Param::new("id1", vec![Value::Int(1), Value::Int(2), Value::Int(3)])
                .with_type(ParamType::StringArray),
        ];
        let (sql, values) = render("id IN (:id1)", &params).unwrap();

        assert_eq!(sql, "id IN ($1, $2, $3)");
        assert_eq!(
            values,
            vec![Value::from("1"), Value::from("2"), Value::from("3")]
        );
    }

    #[test]
    fn test_empty_list_renders_null() {
        let params = vec![Param::new("id1", Vec::<Value>::new()).with_type(ParamType::StringArray)];
        let (sql, values) = render("id NOT IN (:id1)", &params).unwrap();

        assert_eq!(sql, "id NOT IN (NULL)");
        assert!(values.is_empty());
    }

    #[test]
    fn test_longest_name_wins() {
        let params = vec![
            Param::new("age1", Value::Int(1)),
            Param::new("age12", Value::Int(12)),
        ];
        let (sql, values) = render("age = :age12 OR age = :age1", &params).unwrap();

        assert_eq!(sql, "age = $1 OR age = $2");
        assert_eq!(values, vec![Value::Int(12), Value::Int(1)]);
    }

    #[test]
    fn test_casts_and_literals_are_untouched() {
        let params = vec![Param::new("day1", Value::from("2024-01-01"))];
        let (sql, values) = render(
            "created_at::date = :day1 AND note <> 'at 10:30'",
            &params,
        )
        .unwrap();

        assert_eq!(sql, "created_at::date = $1 AND note <> 'at 10:30'");
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_unbound_parameter_is_an_error() {
        let err = render("age >= :age1", &[]).unwrap_err();
        assert_eq!(err, RenderError::UnboundParameter("age1".to_string()));
    }

    #[test]
    fn test_untyped_list_is_an_error() {
        let params = vec![Param::new("id1", vec![Value::Int(1)])];
        let err = render("id IN (:id1)", &params).unwrap_err();
        assert_eq!(err, RenderError::UntypedList("id1".to_string()));
    }

    #[test]
    fn test_mysql_placeholders() {
        let params = vec![Param::new("user.name1", Value::from("bob"))];
        let dialect = MySql;
        let mut renderer = Renderer::with_params(&dialect, &params);
        renderer.push_fragment("u.name = :user.name1");
        let (sql, values) = renderer.finish().unwrap();

        assert_eq!(sql, "u.name = ?");
        assert_eq!(values, vec![Value::from("bob")]);
    }
}
