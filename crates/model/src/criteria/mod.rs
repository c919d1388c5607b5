//! Abstract query criteria: a filter tree plus optional ordering, offset and
//! limit, independent of any SQL dialect.

use crate::errors::CriteriaError;
use filter::Filter;
use order::Order;

pub mod document;
pub mod filter;
pub mod operator;
pub mod order;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    filters: Vec<Filter>,
    sorting: Vec<Order>,
    offset: Option<u64>,
    limit: Option<u64>,
}

impl Criteria {
    pub fn builder() -> CriteriaBuilder {
        CriteriaBuilder::new()
    }

    /// Top-level filters; they are implicitly AND-ed together.
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn has_sorting(&self) -> bool {
        !self.sorting.is_empty()
    }

    /// Sort keys, primary first.
    pub fn sorting(&self) -> &[Order] {
        &self.sorting
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }
}

#[derive(Debug, Default)]
pub struct CriteriaBuilder {
    filters: Vec<Filter>,
    sorting: Vec<Order>,
    offset: Option<u64>,
    limit: Option<u64>,
}

impl CriteriaBuilder {
    pub fn new() -> Self {
        CriteriaBuilder {
            filters: Vec::new(),
            sorting: Vec::new(),
            offset: None,
            limit: None,
        }
    }

    pub fn filter(mut self, filter: impl Into<Filter>) -> Self {
        self.filters.push(filter.into());
        self
    }

    pub fn filters(mut self, filters: impl IntoIterator<Item = Filter>) -> Self {
        self.filters.extend(filters);
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.sorting.push(order);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<Criteria, CriteriaError> {
        if self.limit == Some(0) {
            return Err(CriteriaError::ZeroLimit);
        }

        Ok(Criteria {
            filters: self.filters,
            sorting: self.sorting,
            offset: self.offset,
            limit: self.limit,
        })
    }
}
