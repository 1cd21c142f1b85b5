//! Sales analytics summary.

use std::collections::HashMap;

use serde::Serialize;

use super::OrderDetails;
use crate::domain::{DomainEnum, OrderStatus, ProductId};

/// Number of orders in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: OrderStatus,
    pub orders: i64,
}

/// Units and revenue attributed to one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub units: i64,
    pub revenue_cents: i64,
}

/// Page data for the analytics screen.
///
/// `order_counts` always lists every [`OrderStatus`] in declaration order,
/// with zero for statuses that have no orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    order_counts: Vec<StatusCount>,
    revenue_cents: i64,
    revenue_orders: i64,
    average_order_cents: i64,
    top_products: Vec<ProductSales>,
}

impl AnalyticsSummary {
    /// Assemble a summary from pre-aggregated figures.
    ///
    /// Statuses missing from `counts` are reported as zero; `top_products`
    /// is re-ranked by revenue, then units, then name.
    pub fn new(
        counts: impl IntoIterator<Item = StatusCount>,
        revenue_cents: i64,
        revenue_orders: i64,
        mut top_products: Vec<ProductSales>,
    ) -> Self {
        let mut by_status: HashMap<OrderStatus, i64> = HashMap::new();
        for count in counts {
            *by_status.entry(count.status).or_default() += count.orders;
        }
        let order_counts = OrderStatus::VALUES
            .iter()
            .map(|status| StatusCount {
                status: *status,
                orders: by_status.get(status).copied().unwrap_or_default(),
            })
            .collect();
        let average_order_cents = if revenue_orders > 0 {
            revenue_cents / revenue_orders
        } else {
            0
        };
        rank_products(&mut top_products);
        Self {
            order_counts,
            revenue_cents,
            revenue_orders,
            average_order_cents,
            top_products,
        }
    }

    /// Aggregate in memory from fully loaded orders.
    pub fn from_orders(orders: &[OrderDetails], top_n: usize) -> Self {
        let mut counts: HashMap<OrderStatus, i64> = HashMap::new();
        let mut revenue_cents = 0_i64;
        let mut revenue_orders = 0_i64;
        let mut products: HashMap<(Option<ProductId>, String), (i64, i64)> = HashMap::new();

        for details in orders {
            let order = details.order();
            *counts.entry(order.status()).or_default() += 1;
            if !order.counts_as_revenue() {
                continue;
            }
            revenue_cents += order.total_cents();
            revenue_orders += 1;
            for line in details.lines() {
                let key = (line.product_id(), line.product_name().to_owned());
                let entry = products.entry(key).or_default();
                entry.0 += line.quantity();
                entry.1 += line.line_total_cents();
            }
        }

        let mut top_products: Vec<ProductSales> = products
            .into_iter()
            .map(|((product_id, product_name), (units, revenue))| ProductSales {
                product_id,
                product_name,
                units,
                revenue_cents: revenue,
            })
            .collect();
        rank_products(&mut top_products);
        top_products.truncate(top_n);

        Self::new(
            counts
                .into_iter()
                .map(|(status, orders)| StatusCount { status, orders }),
            revenue_cents,
            revenue_orders,
            top_products,
        )
    }

    pub fn order_counts(&self) -> &[StatusCount] {
        &self.order_counts
    }
    pub fn revenue_cents(&self) -> i64 {
        self.revenue_cents
    }
    pub fn revenue_orders(&self) -> i64 {
        self.revenue_orders
    }
    pub fn average_order_cents(&self) -> i64 {
        self.average_order_cents
    }
    pub fn top_products(&self) -> &[ProductSales] {
        &self.top_products
    }

    /// Orders across every status.
    pub fn total_orders(&self) -> i64 {
        self.order_counts.iter().map(|count| count.orders).sum()
    }
}

fn rank_products(products: &mut [ProductSales]) {
    products.sort_by(|a, b| {
        b.revenue_cents
            .cmp(&a.revenue_cents)
            .then_with(|| b.units.cmp(&a.units))
            .then_with(|| a.product_name.cmp(&b.product_name))
    });
}
