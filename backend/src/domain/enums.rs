//! Closed string-valued domain enumerations and their validators.
//!
//! Each enumeration is declared once through `define_domain_enum!`. The
//! variant list, the wire strings, `FromStr`, serde support, the
//! [`EnumSchema`] validator and the OpenAPI schema are all generated from
//! that single declaration, so neither the accepted set nor the documented
//! one can drift from the enumeration.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use utoipa::openapi::RefOr;
use utoipa::openapi::schema::{ObjectBuilder, Schema, Type};

/// Behaviour shared by every generated domain enumeration.
pub trait DomainEnum: Copy + Eq + fmt::Debug + 'static {
    /// Name used in validation messages, e.g. `order status`.
    const NAME: &'static str;
    /// Every member, in declaration order.
    const VALUES: &'static [Self];

    /// Wire representation of the member.
    fn as_str(&self) -> &'static str;

    /// Validator accepting exactly [`Self::VALUES`].
    #[must_use]
    fn schema() -> EnumSchema<Self> {
        EnumSchema::new()
    }
}

/// Raised when input is not a member of the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {name}: {input:?} (expected one of: {})", .accepted.join(", "))]
pub struct EnumParseError {
    name: &'static str,
    input: String,
    accepted: Vec<&'static str>,
}

impl EnumParseError {
    /// Enumeration the input was checked against.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rejected raw value.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Values that would have been accepted.
    pub fn accepted(&self) -> &[&'static str] {
        &self.accepted
    }
}

/// Validator derived from a [`DomainEnum`] member list.
///
/// # Examples
/// ```
/// use till::domain::{DiscountType, DomainEnum};
///
/// let schema = DiscountType::schema();
/// assert_eq!(schema.parse("percentage"), Ok(DiscountType::Percentage));
/// assert!(schema.parse("unknown").is_err());
/// ```
pub struct EnumSchema<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T: DomainEnum> EnumSchema<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }

    /// Accept `input` only if it is exactly one member's wire string.
    pub fn parse(&self, input: &str) -> Result<T, EnumParseError> {
        T::VALUES
            .iter()
            .copied()
            .find(|value| value.as_str() == input)
            .ok_or_else(|| EnumParseError {
                name: T::NAME,
                input: input.to_owned(),
                accepted: self.accepted(),
            })
    }

    /// Wire strings this schema accepts.
    #[must_use]
    pub fn accepted(&self) -> Vec<&'static str> {
        T::VALUES.iter().map(DomainEnum::as_str).collect()
    }

    /// OpenAPI string schema listing exactly the accepted values.
    #[must_use]
    pub fn openapi(&self) -> RefOr<Schema> {
        let description = format!("One of the {} values.", T::NAME);
        Schema::Object(
            ObjectBuilder::new()
                .schema_type(Type::String)
                .description(Some(description))
                .enum_values(Some(self.accepted()))
                .build(),
        )
        .into()
    }
}

impl<T: DomainEnum> Default for EnumSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EnumSchema<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EnumSchema<T> {}

impl<T: DomainEnum> fmt::Debug for EnumSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumSchema")
            .field("name", &T::NAME)
            .field("accepted", &self.accepted())
            .finish()
    }
}

macro_rules! define_domain_enum {
    (
        $(#[$outer:meta])*
        pub enum $name:ident ($label:literal) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl DomainEnum for $name {
            const NAME: &'static str = $label;
            const VALUES: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(DomainEnum::as_str(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = EnumParseError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                <Self as DomainEnum>::schema().parse(value)
            }
        }

        impl utoipa::PartialSchema for $name {
            fn schema() -> RefOr<Schema> {
                <Self as DomainEnum>::schema().openapi()
            }
        }

        impl utoipa::ToSchema for $name {
            fn name() -> Cow<'static, str> {
                Cow::Borrowed(stringify!($name))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(DomainEnum::as_str(self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
                <Self as DomainEnum>::schema()
                    .parse(&raw)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

define_domain_enum! {
    /// Lifecycle of a sales or restock order.
    pub enum OrderStatus("order status") {
        Pending => "pending",
        Completed => "completed",
        Cancelled => "cancelled",
        Refunded => "refunded",
    }
}

define_domain_enum! {
    /// How a discount's value is interpreted.
    pub enum DiscountType("discount type") {
        /// Value is in basis points of the subtotal (`1000` = 10%).
        Percentage => "percentage",
        /// Value is an absolute amount in minor currency units.
        FixedAmount => "fixed_amount",
    }
}

define_domain_enum! {
    /// What a discount applies to.
    pub enum DiscountScope("discount scope") {
        Order => "order",
        Product => "product",
        Category => "category",
    }
}

define_domain_enum! {
    /// Ordering of list pages.
    pub enum SortDirection("sort direction") {
        Asc => "asc",
        Desc => "desc",
    }
}

define_domain_enum! {
    /// Whether an order sells stock or replenishes it.
    pub enum ProductOrderType("product order type") {
        Sale => "sale",
        Restock => "restock",
    }
}

impl Default for SortDirection {
    fn default() -> Self {
        Self::Desc
    }
}
