//! Row-to-domain converters.
//!
//! Conversion failures are reported as strings; each repository wraps them
//! in its own `query` error. Enumerated columns go through the same
//! [`EnumSchema`](crate::domain::EnumSchema) validators the HTTP layer uses.

use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::{
    Category, CategoryDraft, Discount, DiscountDraft, DomainEnum, Order, OrderDraft, OrderLine,
    OrderLineDraft, Product, ProductDraft, Supplier, SupplierDraft,
};

use super::models::{CategoryRow, DiscountRow, OrderLineRow, OrderRow, ProductRow, SupplierRow};

fn parse_column<T: DomainEnum>(raw: &str, column: &str) -> Result<T, String> {
    T::schema()
        .parse(raw)
        .map_err(|err| format!("{column}: {err}"))
}

pub(crate) fn row_to_category(row: CategoryRow) -> Result<Category, String> {
    Category::new(CategoryDraft {
        id: row.id.into(),
        business_id: row.business_id.into(),
        name: row.name,
        description: row.description,
    })
    .map_err(|err| err.to_string())
}

pub(crate) fn row_to_supplier(row: SupplierRow) -> Result<Supplier, String> {
    Supplier::new(SupplierDraft {
        id: row.id.into(),
        business_id: row.business_id.into(),
        name: row.name,
        email: row.email,
        phone: row.phone,
    })
    .map_err(|err| err.to_string())
}

pub(crate) fn row_to_product(row: ProductRow) -> Result<Product, String> {
    Product::new(ProductDraft {
        id: row.id.into(),
        name: row.name,
        sku: row.sku,
        price_cents: row.price_cents,
        stock_quantity: row.stock_quantity,
        category_id: row.category_id.map(Into::into),
        supplier_id: row.supplier_id.map(Into::into),
    })
    .map_err(|err| err.to_string())
}

pub(crate) fn row_to_discount(row: DiscountRow) -> Result<Discount, String> {
    Discount::new(DiscountDraft {
        id: row.id.into(),
        business_id: row.business_id.into(),
        name: row.name,
        discount_type: parse_column(&row.discount_type, "discounts.discount_type")?,
        scope: parse_column(&row.scope, "discounts.scope")?,
        value: row.value,
        active: row.active,
    })
    .map_err(|err| err.to_string())
}

pub(crate) fn row_to_order(row: OrderRow) -> Result<Order, String> {
    Order::new(OrderDraft {
        id: row.id.into(),
        business_id: row.business_id.into(),
        reference: row.reference,
        status: parse_column(&row.status, "orders.status")?,
        order_type: parse_column(&row.order_type, "orders.order_type")?,
        subtotal_cents: row.subtotal_cents,
        discount_cents: row.discount_cents,
        created_at: row.created_at,
    })
    .map_err(|err| err.to_string())
}

pub(crate) fn row_to_order_line(row: OrderLineRow) -> Result<OrderLine, String> {
    OrderLine::new(OrderLineDraft {
        product_id: row.product_id.map(Into::into),
        product_name: row.product_name,
        quantity: row.quantity,
        unit_price_cents: row.unit_price_cents,
    })
    .map_err(|err| err.to_string())
}

/// Group converted lines by order, keeping row order within each order.
pub(crate) fn group_lines(
    rows: Vec<OrderLineRow>,
) -> Result<HashMap<Uuid, Vec<OrderLine>>, String> {
    let mut grouped: HashMap<Uuid, Vec<OrderLine>> = HashMap::new();
    for row in rows {
        let order_id = row.order_id;
        grouped
            .entry(order_id)
            .or_default()
            .push(row_to_order_line(row)?);
    }
    Ok(grouped)
}

/// Collect converted rows, stopping at the first failure.
pub(crate) fn collect_rows<R, T>(
    rows: Vec<R>,
    convert: impl Fn(R) -> Result<T, String>,
) -> Result<Vec<T>, String> {
    rows.into_iter().map(convert).collect()
}
