//! Business-scoped query predicates.
//!
//! Every tenant-owned row belongs to exactly one business, and a user sees a
//! row only when they are a member of that business. [`TenantFilter`] is the
//! declarative form of that rule:
//!
//! ```text
//! { "business": { "users": { "some": { "id": "<user id>" } } } }
//! ```
//!
//! Repository ports accept a [`ScopedFilter`], which can only be built from a
//! `TenantFilter`, so a query without tenant scoping does not type-check.
//! Outbound adapters translate the predicate into their own query language.

use serde::ser::{Error as _, SerializeMap as _};
use serde::{Serialize, Serializer};
use serde_json::Value;

const BUSINESS_KEY: &str = "business";

/// Predicate restricting a query to businesses the user belongs to.
///
/// Built fresh for every query; never cached.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use till::domain::TenantFilter;
///
/// let filter = TenantFilter::for_user("user-42");
/// assert_eq!(
///     serde_json::to_value(&filter).expect("serializes"),
///     json!({ "business": { "users": { "some": { "id": "user-42" } } } })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantFilter {
    business: BusinessMembership,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct BusinessMembership {
    users: AnyMember,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct AnyMember {
    some: MemberId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct MemberId {
    id: String,
}

impl TenantFilter {
    /// Build the membership predicate for `user_id`.
    ///
    /// Total over any input: validating the identifier is the caller's job.
    #[must_use]
    pub fn for_user(user_id: impl AsRef<str>) -> Self {
        Self {
            business: BusinessMembership {
                users: AnyMember {
                    some: MemberId {
                        id: user_id.as_ref().to_owned(),
                    },
                },
            },
        }
    }

    /// The member whose businesses are visible.
    #[must_use]
    pub fn user_id(&self) -> &str {
        self.business.users.some.id.as_str()
    }

    /// Merge this predicate with an entity-specific filter.
    #[must_use]
    pub fn scope<F>(self, filter: F) -> ScopedFilter<F> {
        ScopedFilter {
            tenant: self,
            filter,
        }
    }
}

/// Shorthand for [`TenantFilter::for_user`].
#[must_use]
pub fn scoping_filter(user_id: impl AsRef<str>) -> TenantFilter {
    TenantFilter::for_user(user_id)
}

/// Entity filter merged with a tenant predicate.
///
/// Serializes as the union of both objects. The tenant's `business` key is
/// written last and replaces any `business` key in the entity filter, so
/// entity filters cannot widen the scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedFilter<F> {
    tenant: TenantFilter,
    filter: F,
}

impl<F> ScopedFilter<F> {
    #[must_use]
    pub fn tenant(&self) -> &TenantFilter {
        &self.tenant
    }

    #[must_use]
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Shortcut for `self.tenant().user_id()`.
    #[must_use]
    pub fn user_id(&self) -> &str {
        self.tenant.user_id()
    }
}

impl<F: Serialize> Serialize for ScopedFilter<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entity = serde_json::to_value(&self.filter).map_err(S::Error::custom)?;
        let fields = match entity {
            Value::Object(fields) => fields,
            Value::Null => serde_json::Map::new(),
            other => {
                return Err(S::Error::custom(format!(
                    "entity filters must serialize to an object, got {other}"
                )));
            }
        };
        let tenant = serde_json::to_value(&self.tenant.business).map_err(S::Error::custom)?;

        let own_fields = fields.iter().filter(|(key, _)| key.as_str() != BUSINESS_KEY);
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in own_fields {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(BUSINESS_KEY, &tenant)?;
        map.end()
    }
}

/// Entity filter selecting a single row by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ById<I> {
    pub id: I,
}

impl<I> ById<I> {
    pub const fn new(id: I) -> Self {
        Self { id }
    }
}
