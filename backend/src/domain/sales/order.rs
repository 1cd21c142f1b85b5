//! Orders, order lines and list pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Discount, SalesValidationError, non_empty, non_negative, positive};
use crate::domain::{BusinessId, OrderId, OrderStatus, ProductId, ProductOrderType, SortDirection};

/// Page size used when the caller does not ask for one.
pub const DEFAULT_ORDER_PAGE_SIZE: u32 = 50;
/// Upper bound on a single orders page.
pub const MAX_ORDER_PAGE_SIZE: u32 = 200;

/// Input payload for [`Order::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub id: OrderId,
    pub business_id: BusinessId,
    pub reference: String,
    pub status: OrderStatus,
    pub order_type: ProductOrderType,
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub created_at: DateTime<Utc>,
}

/// Order header as listed on the orders page.
///
/// ## Invariants
/// - `0 <= discount_cents <= subtotal_cents`.
/// - `total_cents == subtotal_cents - discount_cents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: OrderId,
    business_id: BusinessId,
    reference: String,
    status: OrderStatus,
    order_type: ProductOrderType,
    subtotal_cents: i64,
    discount_cents: i64,
    total_cents: i64,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Validate and construct an order header.
    pub fn new(draft: OrderDraft) -> Result<Self, SalesValidationError> {
        let subtotal_cents = non_negative(draft.subtotal_cents, "order.subtotal_cents")?;
        let discount_cents = non_negative(draft.discount_cents, "order.discount_cents")?;
        if discount_cents > subtotal_cents {
            return Err(SalesValidationError::DiscountExceedsSubtotal {
                discount_cents,
                subtotal_cents,
            });
        }
        Ok(Self {
            id: draft.id,
            business_id: draft.business_id,
            reference: non_empty(draft.reference, "order.reference")?,
            status: draft.status,
            order_type: draft.order_type,
            subtotal_cents,
            discount_cents,
            total_cents: subtotal_cents - discount_cents,
            created_at: draft.created_at,
        })
    }

    pub fn id(&self) -> OrderId {
        self.id
    }
    pub fn business_id(&self) -> BusinessId {
        self.business_id
    }
    pub fn reference(&self) -> &str {
        &self.reference
    }
    pub fn status(&self) -> OrderStatus {
        self.status
    }
    pub fn order_type(&self) -> ProductOrderType {
        self.order_type
    }
    pub fn subtotal_cents(&self) -> i64 {
        self.subtotal_cents
    }
    pub fn discount_cents(&self) -> i64 {
        self.discount_cents
    }
    pub fn total_cents(&self) -> i64 {
        self.total_cents
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Completed sales count towards revenue; restocks and refunds do not.
    pub fn counts_as_revenue(&self) -> bool {
        self.status == OrderStatus::Completed && self.order_type == ProductOrderType::Sale
    }
}

/// Input payload for [`OrderLine::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineDraft {
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
}

/// One line of an order. The product name is copied at sale time so lines
/// survive product deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    product_id: Option<ProductId>,
    product_name: String,
    quantity: i64,
    unit_price_cents: i64,
}

impl OrderLine {
    /// Validate and construct an order line.
    pub fn new(draft: OrderLineDraft) -> Result<Self, SalesValidationError> {
        Ok(Self {
            product_id: draft.product_id,
            product_name: non_empty(draft.product_name, "order_line.product_name")?,
            quantity: positive(draft.quantity, "order_line.quantity")?,
            unit_price_cents: non_negative(draft.unit_price_cents, "order_line.unit_price_cents")?,
        })
    }

    pub fn product_id(&self) -> Option<ProductId> {
        self.product_id
    }
    pub fn product_name(&self) -> &str {
        &self.product_name
    }
    pub fn quantity(&self) -> i64 {
        self.quantity
    }
    pub fn unit_price_cents(&self) -> i64 {
        self.unit_price_cents
    }

    pub fn line_total_cents(&self) -> i64 {
        self.quantity.saturating_mul(self.unit_price_cents)
    }
}

/// Page data for an order screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    order: Order,
    lines: Vec<OrderLine>,
    discount: Option<Discount>,
}

impl OrderDetails {
    /// Assemble order details, checking the lines add up to the subtotal.
    pub fn new(
        order: Order,
        lines: Vec<OrderLine>,
        discount: Option<Discount>,
    ) -> Result<Self, SalesValidationError> {
        let lines_cents: i64 = lines.iter().map(OrderLine::line_total_cents).sum();
        if lines_cents != order.subtotal_cents() {
            return Err(SalesValidationError::SubtotalMismatch {
                lines_cents,
                subtotal_cents: order.subtotal_cents(),
            });
        }
        Ok(Self {
            order,
            lines,
            discount,
        })
    }

    pub fn order(&self) -> &Order {
        &self.order
    }
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }
    pub fn discount(&self) -> Option<&Discount> {
        self.discount.as_ref()
    }

    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(OrderLine::quantity).sum()
    }
}

/// Entity filter for order listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

/// Ordering and size of an orders page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderPage {
    sort: SortDirection,
    limit: u32,
}

impl OrderPage {
    /// Build a page request; `None` uses [`DEFAULT_ORDER_PAGE_SIZE`].
    pub fn new(sort: SortDirection, limit: Option<u32>) -> Result<Self, SalesValidationError> {
        let limit = limit.unwrap_or(DEFAULT_ORDER_PAGE_SIZE);
        if limit == 0 || limit > MAX_ORDER_PAGE_SIZE {
            return Err(SalesValidationError::InvalidPageSize {
                value: limit,
                max: MAX_ORDER_PAGE_SIZE,
            });
        }
        Ok(Self { sort, limit })
    }

    pub fn sort(&self) -> SortDirection {
        self.sort
    }
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

impl Default for OrderPage {
    fn default() -> Self {
        Self {
            sort: SortDirection::default(),
            limit: DEFAULT_ORDER_PAGE_SIZE,
        }
    }
}

/// Page data for the orders list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderList {
    pub orders: Vec<Order>,
    pub status: Option<OrderStatus>,
    pub sort: SortDirection,
}
