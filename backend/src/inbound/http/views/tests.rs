//! Rendering coverage: every page reads its data through its provider.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::{
    AnalyticsContext, CategoryContext, OrderContext, OrderList, OrderStatus, OrdersContext,
    SortDirection, SupplierContext,
};
use crate::inbound::http::test_utils::samples;

#[rstest]
fn category_page_totals_stock() {
    let page = render_page::<CategoryContext, _>(samples::category_details(), render_category_page)
        .expect("bound");
    assert_eq!(page.name, "Coffee");
    assert_eq!(page.total_stock, 15);
    assert_eq!(page.products.len(), 2);
}

#[rstest]
fn supplier_page_lists_products() {
    let page = render_page::<SupplierContext, _>(samples::supplier_details(), render_supplier_page)
        .expect("bound");
    assert_eq!(page.email.as_deref(), Some("orders@roastery.test"));
    assert_eq!(page.products[0].stock_value_cents, 22_788);
}

#[rstest]
fn order_page_shows_lines_and_discount() {
    let page =
        render_page::<OrderContext, _>(samples::order_details(), render_order_page).expect("bound");
    assert_eq!(page.order.status, "completed");
    assert_eq!(page.order.total_cents, 810);
    assert_eq!(page.item_count, 2);
    assert_eq!(page.lines[0].line_total_cents, 900);
    assert_eq!(
        page.discount.as_ref().map(|d| d.discount_type),
        Some("percentage")
    );
}

#[rstest]
fn orders_page_echoes_filter_and_sort() {
    let list = OrderList {
        orders: vec![samples::order(OrderStatus::Pending, 500, 0)],
        status: Some(OrderStatus::Pending),
        sort: SortDirection::Asc,
    };
    let page = render_page::<OrdersContext, _>(list, render_orders_page).expect("bound");
    assert_eq!(page.status, Some("pending"));
    assert_eq!(page.sort, "asc");
    assert_eq!(page.orders.len(), 1);
}

#[rstest]
fn analytics_page_reports_every_status() {
    let page = render_page::<AnalyticsContext, _>(samples::analytics_summary(), render_analytics_page)
        .expect("bound");
    let statuses: Vec<_> = page.order_counts.iter().map(|c| c.status).collect();
    assert_eq!(statuses, vec!["pending", "completed", "cancelled", "refunded"]);
    assert_eq!(page.total_orders, 1);
    assert_eq!(page.revenue_cents, 810);
    assert_eq!(page.top_products[0].units, 2);
}

#[rstest]
fn page_rendered_under_the_wrong_provider_fails() {
    let err = render_page::<CategoryContext, _>(samples::category_details(), render_order_page)
        .expect_err("order data not bound");
    assert_eq!(err, MissingProviderError::of::<OrderContext>());
}

#[rstest]
fn views_read_the_bound_snapshot() {
    let data = Arc::new(samples::order_details());
    let scope = Scope::root().provide::<OrderContext>(Arc::clone(&data));
    let page = render_order_page(&scope).expect("bound");
    assert_eq!(page.order.id, *data.order().id().as_uuid());
    assert_eq!(page.order.reference, data.order().reference());
}
