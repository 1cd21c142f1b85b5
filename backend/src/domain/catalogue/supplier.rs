//! Supplier and its detail read model.

use serde::{Deserialize, Serialize};

use super::validation::{non_empty, optional_email, optional_text};
use super::{CatalogueValidationError, Product};
use crate::domain::{BusinessId, SupplierId};

/// Input payload for [`Supplier::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDraft {
    pub id: SupplierId,
    pub business_id: BusinessId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Supplier of products to one business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    id: SupplierId,
    business_id: BusinessId,
    name: String,
    email: Option<String>,
    phone: Option<String>,
}

impl Supplier {
    /// Validate and construct a supplier.
    pub fn new(draft: SupplierDraft) -> Result<Self, CatalogueValidationError> {
        Ok(Self {
            id: draft.id,
            business_id: draft.business_id,
            name: non_empty(draft.name, "supplier.name")?,
            email: optional_email(draft.email, "supplier.email")?,
            phone: optional_text(draft.phone),
        })
    }

    pub fn id(&self) -> SupplierId {
        self.id
    }
    pub fn business_id(&self) -> BusinessId {
        self.business_id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

/// Page data for a supplier screen: the supplier plus the products it supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDetails {
    pub supplier: Supplier,
    pub products: Vec<Product>,
}
