use crate::{
    fields::FieldMap,
    operator::{param_type, sql_operator},
    translation::{OrderBy, Translation},
};
use model::{
    core::value::Value,
    criteria::{
        Criteria,
        filter::{Comparison, Filter, Operand},
        operator::Operator,
        order::OrderType,
    },
};
use query_builder::{ast::common::OrderDir, build::QueryBuilder, params::Param};
use tracing::{debug, trace};

/// State threaded through one translation.
struct TranslationContext<'a> {
    fields: &'a FieldMap,

    /// Number of comparisons rendered so far; suffixes every parameter name.
    counter: usize,
    params: Vec<Param>,
}

impl<'a> TranslationContext<'a> {
    fn new(fields: &'a FieldMap, counter: usize) -> Self {
        Self {
            fields,
            counter,
            params: Vec::new(),
        }
    }
}

/// Translates `criteria` into predicates, parameters, sort keys and a row
/// window.
///
/// Each top-level filter yields one predicate. Parameter names are the
/// comparison's field followed by its 1-based position in a depth-first,
/// left-to-right walk over all filters, so names are unique within one
/// translation.
pub fn translate(criteria: &Criteria, fields: &FieldMap) -> Translation {
    translate_from(criteria, fields, 0)
}

/// Like [`translate`], but numbering continues after `counter` comparisons.
fn translate_from(criteria: &Criteria, fields: &FieldMap, counter: usize) -> Translation {
    let mut ctx = TranslationContext::new(fields, counter);

    let predicates: Vec<String> = criteria
        .filters()
        .iter()
        .map(|filter| render(filter, &mut ctx))
        .collect();

    let order_by = criteria
        .sorting()
        .iter()
        .map(|order| OrderBy {
            column: fields.resolve(order.order_by()).to_string(),
            direction: match order.order_type() {
                OrderType::Asc => OrderDir::Asc,
                OrderType::Desc => OrderDir::Desc,
            },
        })
        .collect::<Vec<_>>();

    debug!(
        "Translated criteria into {} predicate(s), {} parameter(s) and {} sort key(s)",
        predicates.len(),
        ctx.params.len(),
        order_by.len()
    );

    Translation {
        predicates,
        params: ctx.params,
        order_by,
        offset: criteria.offset(),
        limit: criteria.limit(),
    }
}

fn render(filter: &Filter, ctx: &mut TranslationContext) -> String {
    match filter {
        Filter::And(left, right) => {
            let left = render(left, ctx);
            let right = render(right, ctx);
            format!("( {left} AND {right} )")
        }
        Filter::Or(left, right) => {
            let left = render(left, ctx);
            let right = render(right, ctx);
            format!("( {left} OR {right} )")
        }
        Filter::Comparison(comparison) => render_comparison(comparison, ctx),
    }
}

fn render_comparison(comparison: &Comparison, ctx: &mut TranslationContext) -> String {
    ctx.counter += 1;

    let name = format!("{}{}", comparison.field(), ctx.counter);
    let column = ctx.fields.resolve(comparison.field());
    let operator = comparison.operator();
    let op = sql_operator(operator);

    let predicate = match comparison.operand() {
        Operand::None => format!("{column} {op}"),
        Operand::Scalar(value) => {
            let value = match operator {
                Operator::Contains => Value::String(format!("%{}%", value.as_string())),
                _ => value.clone(),
            };
            ctx.params.push(Param::new(name.as_str(), value));
            format!("{column} {op} :{name}")
        }
        Operand::List(values) => {
            let mut param = Param::new(name.as_str(), values.clone());
            param.param_type = param_type(operator);
            ctx.params.push(param);
            format!("{column} {op} (:{name})")
        }
    };

    trace!("Rendered comparison #{}: {}", ctx.counter, predicate);
    predicate
}

/// Applies translated criteria to a query builder.
///
/// Parameter numbering continues across calls to [`execute`](Self::execute),
/// so several criteria can be applied to one builder without their bindings
/// colliding.
pub struct CriteriaTranslator<'a, B: QueryBuilder + ?Sized> {
    builder: &'a mut B,
    fields: &'a FieldMap,
    counter: usize,
}

impl<'a, B: QueryBuilder + ?Sized> CriteriaTranslator<'a, B> {
    pub fn new(builder: &'a mut B, fields: &'a FieldMap) -> Self {
        Self {
            builder,
            fields,
            counter: 0,
        }
    }

    /// Translates `criteria` and pushes the result into the builder.
    pub fn execute(&mut self, criteria: &Criteria) {
        let translation = translate_from(criteria, self.fields, self.counter);
        self.counter += criteria
            .filters()
            .iter()
            .map(Filter::comparison_count)
            .sum::<usize>();
        translation.apply(&mut *self.builder);
    }
}
