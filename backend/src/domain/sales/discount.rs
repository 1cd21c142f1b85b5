//! Discount definitions and their arithmetic.

use serde::{Deserialize, Serialize};

use super::{SalesValidationError, non_empty, non_negative};
use crate::domain::{BusinessId, DiscountId, DiscountScope, DiscountType};

const FULL_PERCENT_BASIS_POINTS: i64 = 10_000;

/// Input payload for [`Discount::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountDraft {
    pub id: DiscountId,
    pub business_id: BusinessId,
    pub name: String,
    pub discount_type: DiscountType,
    pub scope: DiscountScope,
    pub value: i64,
    pub active: bool,
}

/// Discount owned by a business.
///
/// ## Invariants
/// - `value` is non-negative.
/// - percentage discounts hold at most 10000 basis points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    id: DiscountId,
    business_id: BusinessId,
    name: String,
    discount_type: DiscountType,
    scope: DiscountScope,
    value: i64,
    active: bool,
}

impl Discount {
    /// Validate and construct a discount.
    pub fn new(draft: DiscountDraft) -> Result<Self, SalesValidationError> {
        let value = non_negative(draft.value, "discount.value")?;
        if draft.discount_type == DiscountType::Percentage && value > FULL_PERCENT_BASIS_POINTS {
            return Err(SalesValidationError::PercentageTooLarge { value });
        }
        Ok(Self {
            id: draft.id,
            business_id: draft.business_id,
            name: non_empty(draft.name, "discount.name")?,
            discount_type: draft.discount_type,
            scope: draft.scope,
            value,
            active: draft.active,
        })
    }

    pub fn id(&self) -> DiscountId {
        self.id
    }
    pub fn business_id(&self) -> BusinessId {
        self.business_id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn discount_type(&self) -> DiscountType {
        self.discount_type
    }
    pub fn scope(&self) -> DiscountScope {
        self.scope
    }
    pub fn value(&self) -> i64 {
        self.value
    }
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Amount taken off `subtotal_cents`, never more than the subtotal.
    ///
    /// # Examples
    /// ```
    /// use till::domain::{BusinessId, Discount, DiscountDraft, DiscountId, DiscountScope, DiscountType};
    ///
    /// let discount = Discount::new(DiscountDraft {
    ///     id: DiscountId::random(),
    ///     business_id: BusinessId::random(),
    ///     name: "Happy hour".into(),
    ///     discount_type: DiscountType::Percentage,
    ///     scope: DiscountScope::Order,
    ///     value: 1_500,
    ///     active: true,
    /// })
    /// .expect("valid discount");
    /// assert_eq!(discount.amount_off(2_000), 300);
    /// ```
    pub fn amount_off(&self, subtotal_cents: i64) -> i64 {
        let subtotal = subtotal_cents.max(0);
        let raw = match self.discount_type {
            DiscountType::Percentage => {
                // Widen so large subtotals cannot overflow before dividing.
                let scaled = i128::from(subtotal) * i128::from(self.value)
                    / i128::from(FULL_PERCENT_BASIS_POINTS);
                i64::try_from(scaled).unwrap_or(i64::MAX)
            }
            DiscountType::FixedAmount => self.value,
        };
        raw.min(subtotal)
    }

    /// Subtotal after the discount; never below zero.
    pub fn apply(&self, subtotal_cents: i64) -> i64 {
        subtotal_cents.max(0) - self.amount_off(subtotal_cents)
    }
}

/// Entity filter for discount listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiscountFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<DiscountScope>,
}
