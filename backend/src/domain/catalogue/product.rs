//! Sellable product.

use serde::{Deserialize, Serialize};

use super::CatalogueValidationError;
use super::validation::{non_empty, non_negative, optional_text};
use crate::domain::{CategoryId, ProductId, SupplierId};

/// Input payload for [`Product::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub id: ProductId,
    pub name: String,
    pub sku: Option<String>,
    pub price_cents: i64,
    pub stock_quantity: i64,
    pub category_id: Option<CategoryId>,
    pub supplier_id: Option<SupplierId>,
}

/// Product as shown in category and supplier pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    sku: Option<String>,
    price_cents: i64,
    stock_quantity: i64,
    category_id: Option<CategoryId>,
    supplier_id: Option<SupplierId>,
}

impl Product {
    /// Validate and construct a product.
    pub fn new(draft: ProductDraft) -> Result<Self, CatalogueValidationError> {
        Ok(Self {
            id: draft.id,
            name: non_empty(draft.name, "product.name")?,
            sku: optional_text(draft.sku),
            price_cents: non_negative(draft.price_cents, "product.price_cents")?,
            stock_quantity: non_negative(draft.stock_quantity, "product.stock_quantity")?,
            category_id: draft.category_id,
            supplier_id: draft.supplier_id,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }
    pub fn price_cents(&self) -> i64 {
        self.price_cents
    }
    pub fn stock_quantity(&self) -> i64 {
        self.stock_quantity
    }
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }
    pub fn supplier_id(&self) -> Option<SupplierId> {
        self.supplier_id
    }

    /// Stock value at list price.
    pub fn stock_value_cents(&self) -> i64 {
        self.price_cents.saturating_mul(self.stock_quantity)
    }
}
