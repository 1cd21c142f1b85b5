//! Product category and its detail read model.

use serde::{Deserialize, Serialize};

use super::validation::{non_empty, optional_text};
use super::{CatalogueValidationError, Product};
use crate::domain::{BusinessId, CategoryId};

/// Input payload for [`Category::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub id: CategoryId,
    pub business_id: BusinessId,
    pub name: String,
    pub description: Option<String>,
}

/// Category grouping products within one business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: CategoryId,
    business_id: BusinessId,
    name: String,
    description: Option<String>,
}

impl Category {
    /// Validate and construct a category.
    pub fn new(draft: CategoryDraft) -> Result<Self, CatalogueValidationError> {
        Ok(Self {
            id: draft.id,
            business_id: draft.business_id,
            name: non_empty(draft.name, "category.name")?,
            description: optional_text(draft.description),
        })
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }
    pub fn business_id(&self) -> BusinessId {
        self.business_id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Page data for a category screen: the category plus its products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetails {
    pub category: Category,
    pub products: Vec<Product>,
}

impl CategoryDetails {
    /// Units in stock across every product in the category.
    pub fn total_stock(&self) -> i64 {
        self.products.iter().map(Product::stock_quantity).sum()
    }
}
