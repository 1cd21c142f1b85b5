//! SQL translation of the tenant scoping predicate.
//!
//! `{ business: { users: { some: { id } } } }` becomes
//! `business_id = ANY(SELECT business_id FROM business_users WHERE user_id = $1)`.
//! Every adapter query on a business-owned table filters through
//! [`member_businesses`]; tables without a `business_id` column are reached
//! only through a row that was already scoped.

use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types;

use crate::domain::TenantFilter;

use super::schema::business_users;

/// Sub-select of the businesses the filter's user belongs to.
pub(crate) fn member_businesses(
    tenant: &TenantFilter,
) -> business_users::BoxedQuery<'_, Pg, sql_types::Uuid> {
    business_users::table
        .filter(business_users::user_id.eq(tenant.user_id()))
        .select(business_users::business_id)
        .into_boxed()
}
