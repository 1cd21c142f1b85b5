//! In-memory port doubles that honour the business membership predicate.
//!
//! Each double records the serialized scoped filter it received, then answers
//! only with rows whose business lists the filter's user as a member.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use till::domain::ports::{
    AnalyticsQuery, AnalyticsQueryError, CategoryRepository, CategoryRepositoryError,
    LoginService, OrderRepository, OrderRepositoryError, TOP_PRODUCTS_LIMIT,
};
use till::domain::{
    AnalyticsSummary, BusinessId, ById, CategoryDetails, CategoryId, Error, LoginCredentials,
    Order, OrderDetails, OrderFilter, OrderId, OrderPage, ScopedFilter, SortDirection, UserId,
};

/// Business membership shared by every double.
#[derive(Clone, Default)]
pub struct Directory {
    members: Arc<Mutex<HashMap<BusinessId, HashSet<String>>>>,
}

impl Directory {
    pub fn add_member(&self, business: BusinessId, user_id: &str) {
        self.members
            .lock()
            .expect("directory lock")
            .entry(business)
            .or_default()
            .insert(user_id.to_owned());
    }

    fn is_member(&self, business: BusinessId, user_id: &str) -> bool {
        self.members
            .lock()
            .expect("directory lock")
            .get(&business)
            .is_some_and(|users| users.contains(user_id))
    }
}

/// Captured serialized filters, in call order.
#[derive(Clone, Default)]
pub struct Calls(Arc<Mutex<Vec<Value>>>);

impl Calls {
    fn record<F: serde::Serialize>(&self, filter: &ScopedFilter<F>) {
        let value = serde_json::to_value(filter).expect("scoped filter serializes");
        self.0.lock().expect("calls lock").push(value);
    }

    pub fn all(&self) -> Vec<Value> {
        self.0.lock().expect("calls lock").clone()
    }
}

/// Accepts password `pw` for any username and uses the username as user id.
#[derive(Clone, Default)]
pub struct UsernameLogin;

#[async_trait]
impl LoginService for UsernameLogin {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        if credentials.password() != "pw" {
            return Err(Error::unauthorized("invalid credentials"));
        }
        UserId::new(credentials.username()).map_err(|err| Error::invalid_request(err.to_string()))
    }
}

#[derive(Clone)]
pub struct InMemoryCategories {
    pub directory: Directory,
    pub rows: Arc<Vec<CategoryDetails>>,
    pub calls: Calls,
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn category_details(
        &self,
        filter: &ScopedFilter<ById<CategoryId>>,
    ) -> Result<Option<CategoryDetails>, CategoryRepositoryError> {
        self.calls.record(filter);
        Ok(self
            .rows
            .iter()
            .find(|row| {
                row.category.id() == filter.filter().id
                    && self
                        .directory
                        .is_member(row.category.business_id(), filter.user_id())
            })
            .cloned())
    }
}

#[derive(Clone)]
pub struct InMemoryOrders {
    pub directory: Directory,
    pub rows: Arc<Vec<OrderDetails>>,
    pub calls: Calls,
}

impl InMemoryOrders {
    fn visible<'a, F>(
        &'a self,
        filter: &'a ScopedFilter<F>,
    ) -> impl Iterator<Item = &'a OrderDetails> + 'a {
        self.rows.iter().filter(move |row| {
            self.directory
                .is_member(row.order().business_id(), filter.user_id())
        })
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn order_details(
        &self,
        filter: &ScopedFilter<ById<OrderId>>,
    ) -> Result<Option<OrderDetails>, OrderRepositoryError> {
        self.calls.record(filter);
        Ok(self
            .visible(filter)
            .find(|row| row.order().id() == filter.filter().id)
            .cloned())
    }

    async fn list_orders(
        &self,
        filter: &ScopedFilter<OrderFilter>,
        page: OrderPage,
    ) -> Result<Vec<Order>, OrderRepositoryError> {
        self.calls.record(filter);
        let mut orders: Vec<Order> = self
            .visible(filter)
            .map(|row| row.order().clone())
            .filter(|order| {
                filter
                    .filter()
                    .status
                    .is_none_or(|status| order.status() == status)
            })
            .collect();
        orders.sort_by_key(|order| (order.created_at(), order.reference().to_owned()));
        if page.sort() == SortDirection::Desc {
            orders.reverse();
        }
        orders.truncate(usize::try_from(page.limit()).expect("page limit fits usize"));
        Ok(orders)
    }
}

#[async_trait]
impl AnalyticsQuery for InMemoryOrders {
    async fn summary(
        &self,
        filter: &ScopedFilter<()>,
    ) -> Result<AnalyticsSummary, AnalyticsQueryError> {
        self.calls.record(filter);
        let visible: Vec<OrderDetails> = self.visible(filter).cloned().collect();
        Ok(AnalyticsSummary::from_orders(&visible, TOP_PRODUCTS_LIMIT))
    }
}
