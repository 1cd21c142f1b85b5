//! Page views rendered from bound page data.
//!
//! Handlers load a snapshot, bind it with a provider and call one of the
//! `render_*` functions here. Views never receive the snapshot as an
//! argument; they read it through the matching accessor, so a view rendered
//! outside its provider fails loudly instead of showing empty data.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    ContextKind, Discount, DomainEnum, MissingProviderError, Order, OrderLine, Product,
    ProductSales, Provider, Scope, StatusCount, use_analytics, use_category, use_order,
    use_orders, use_supplier,
};

/// Bind `data` for kind `K` at the root and render `view` beneath it.
pub(crate) fn render_page<K, V>(
    data: K::Data,
    view: impl FnOnce(&Scope) -> Result<V, MissingProviderError>,
) -> Result<V, MissingProviderError>
where
    K: ContextKind,
{
    let scope = Provider::<K>::new(Arc::new(data)).wrap(&Scope::root());
    view(&scope)
}

/// Product row shown on category and supplier pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: Uuid,
    pub name: String,
    pub sku: Option<String>,
    pub price_cents: i64,
    pub stock_quantity: i64,
    pub stock_value_cents: i64,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: *product.id().as_uuid(),
            name: product.name().to_owned(),
            sku: product.sku().map(str::to_owned),
            price_cents: product.price_cents(),
            stock_quantity: product.stock_quantity(),
            stock_value_cents: product.stock_value_cents(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPage {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub total_stock: i64,
    pub products: Vec<ProductView>,
}

pub fn render_category_page(scope: &Scope) -> Result<CategoryPage, MissingProviderError> {
    let details = use_category(scope)?;
    Ok(CategoryPage {
        id: *details.category.id().as_uuid(),
        name: details.category.name().to_owned(),
        description: details.category.description().map(str::to_owned),
        total_stock: details.total_stock(),
        products: details.products.iter().map(ProductView::from).collect(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPage {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub products: Vec<ProductView>,
}

pub fn render_supplier_page(scope: &Scope) -> Result<SupplierPage, MissingProviderError> {
    let details = use_supplier(scope)?;
    let supplier = &details.supplier;
    Ok(SupplierPage {
        id: *supplier.id().as_uuid(),
        name: supplier.name().to_owned(),
        email: supplier.email().map(str::to_owned),
        phone: supplier.phone().map(str::to_owned),
        products: details.products.iter().map(ProductView::from).collect(),
    })
}

/// Order header as shown in lists and on the order page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryView {
    pub id: Uuid,
    pub reference: String,
    #[schema(value_type = crate::domain::OrderStatus)]
    pub status: &'static str,
    #[schema(value_type = crate::domain::ProductOrderType)]
    pub order_type: &'static str,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for OrderSummaryView {
    fn from(order: &Order) -> Self {
        Self {
            id: *order.id().as_uuid(),
            reference: order.reference().to_owned(),
            status: order.status().as_str(),
            order_type: order.order_type().as_str(),
            subtotal_cents: order.subtotal_cents(),
            discount_cents: order.discount_cents(),
            total_cents: order.total_cents(),
            created_at: order.created_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineView {
    pub product_id: Option<Uuid>,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

impl From<&OrderLine> for OrderLineView {
    fn from(line: &OrderLine) -> Self {
        Self {
            product_id: line.product_id().map(|id| *id.as_uuid()),
            product_name: line.product_name().to_owned(),
            quantity: line.quantity(),
            unit_price_cents: line.unit_price_cents(),
            line_total_cents: line.line_total_cents(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscountView {
    pub id: Uuid,
    pub name: String,
    #[schema(value_type = crate::domain::DiscountType)]
    pub discount_type: &'static str,
    #[schema(value_type = crate::domain::DiscountScope)]
    pub scope: &'static str,
    /// Basis points for percentages, minor units for fixed amounts.
    pub value: i64,
    pub active: bool,
}

impl From<&Discount> for DiscountView {
    fn from(discount: &Discount) -> Self {
        Self {
            id: *discount.id().as_uuid(),
            name: discount.name().to_owned(),
            discount_type: discount.discount_type().as_str(),
            scope: discount.scope().as_str(),
            value: discount.value(),
            active: discount.is_active(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderPageView {
    pub order: OrderSummaryView,
    pub lines: Vec<OrderLineView>,
    pub discount: Option<DiscountView>,
    pub item_count: i64,
}

pub fn render_order_page(scope: &Scope) -> Result<OrderPageView, MissingProviderError> {
    let details = use_order(scope)?;
    Ok(OrderPageView {
        order: OrderSummaryView::from(details.order()),
        lines: details.lines().iter().map(OrderLineView::from).collect(),
        discount: details.discount().map(DiscountView::from),
        item_count: details.item_count(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrdersPage {
    pub orders: Vec<OrderSummaryView>,
    /// Status filter echoed back, if any.
    #[schema(value_type = Option<crate::domain::OrderStatus>)]
    pub status: Option<&'static str>,
    #[schema(value_type = crate::domain::SortDirection)]
    pub sort: &'static str,
}

pub fn render_orders_page(scope: &Scope) -> Result<OrdersPage, MissingProviderError> {
    let list = use_orders(scope)?;
    Ok(OrdersPage {
        orders: list.orders.iter().map(OrderSummaryView::from).collect(),
        status: list.status.map(|status| status.as_str()),
        sort: list.sort.as_str(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCountView {
    #[schema(value_type = crate::domain::OrderStatus)]
    pub status: &'static str,
    pub orders: i64,
}

impl From<&StatusCount> for StatusCountView {
    fn from(count: &StatusCount) -> Self {
        Self {
            status: count.status.as_str(),
            orders: count.orders,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductSalesView {
    pub product_id: Option<Uuid>,
    pub product_name: String,
    pub units: i64,
    pub revenue_cents: i64,
}

impl From<&ProductSales> for ProductSalesView {
    fn from(sales: &ProductSales) -> Self {
        Self {
            product_id: sales.product_id.map(|id| *id.as_uuid()),
            product_name: sales.product_name.clone(),
            units: sales.units,
            revenue_cents: sales.revenue_cents,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsPage {
    pub order_counts: Vec<StatusCountView>,
    pub total_orders: i64,
    pub revenue_cents: i64,
    pub average_order_cents: i64,
    pub top_products: Vec<ProductSalesView>,
}

pub fn render_analytics_page(scope: &Scope) -> Result<AnalyticsPage, MissingProviderError> {
    let summary = use_analytics(scope)?;
    Ok(AnalyticsPage {
        order_counts: summary
            .order_counts()
            .iter()
            .map(StatusCountView::from)
            .collect(),
        total_orders: summary.total_orders(),
        revenue_cents: summary.revenue_cents(),
        average_order_cents: summary.average_order_cents(),
        top_products: summary
            .top_products()
            .iter()
            .map(ProductSalesView::from)
            .collect(),
    })
}

#[cfg(test)]
mod tests;
