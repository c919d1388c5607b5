use crate::{
    ast::select::{FromClause, OrderByExpr, Select},
    dialect::Dialect,
    error::RenderError,
    render::{Render, Renderer},
};
use model::core::value::Value;

impl Select {
    /// Renders the query for `dialect`, resolving named parameters into
    /// positional ones.
    pub fn to_sql(&self, dialect: &dyn Dialect) -> Result<(String, Vec<Value>), RenderError> {
        let mut renderer = Renderer::with_params(dialect, &self.params);
        self.render(&mut renderer);
        renderer.finish()
    }
}

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        // 1. SELECT clause
        r.sql.push_str("SELECT ");
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            col.render(r);
        }

        // 2. FROM
        if let Some(from) = &self.from {
            r.sql.push(' ');
            from.render(r);
        }

        // 3. WHERE
        match self.where_clause.as_slice() {
            [] => {}
            [predicate] => {
                r.sql.push_str(" WHERE ");
                predicate.render(r);
            }
            predicates => {
                r.sql.push_str(" WHERE ");
                for (i, predicate) in predicates.iter().enumerate() {
                    if i > 0 {
                        r.sql.push_str(" AND ");
                    }
                    r.sql.push('(');
                    predicate.render(r);
                    r.sql.push(')');
                }
            }
        }

        // 4. ORDER BY
        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            for (i, order) in self.order_by.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                order.render(r);
            }
        }

        // 5. LIMIT / OFFSET
        let window = r.dialect.render_limit_offset(self.limit, self.offset);
        r.sql.push_str(&window);
    }
}

impl Render for FromClause {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("FROM ");
        if let Some(schema) = &self.table.schema {
            r.sql.push_str(&r.dialect.quote_identifier(schema));
            r.sql.push('.');
        }
        r.sql.push_str(&r.dialect.quote_identifier(&self.table.name));
        if let Some(alias) = &self.alias {
            r.sql.push_str(" AS ");
            r.sql.push_str(&r.dialect.quote_identifier(alias));
        }
    }
}

impl Render for OrderByExpr {
    fn render(&self, r: &mut Renderer) {
        self.expr.render(r);
        if let Some(dir) = &self.direction {
            r.sql.push(' ');
            r.sql.push_str(dir.as_sql());
        }
    }
}
