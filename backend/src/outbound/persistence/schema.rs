//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly. Enumerated columns are
//! plain `Varchar`; row converters parse them through the domain enum
//! schemas, and the migrations add matching `CHECK` constraints.

diesel::table! {
    /// Tenants. Every business-owned table references this one.
    businesses (id) {
        id -> Uuid,
        name -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Users known to the backend. Ids are issued by the identity provider.
    users (id) {
        id -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Membership join table behind the tenant scoping predicate.
    business_users (business_id, user_id) {
        business_id -> Uuid,
        user_id -> Varchar,
    }
}

diesel::table! {
    categories (id) {
        id -> Uuid,
        business_id -> Uuid,
        name -> Varchar,
        description -> Nullable<Text>,
    }
}

diesel::table! {
    suppliers (id) {
        id -> Uuid,
        business_id -> Uuid,
        name -> Varchar,
        email -> Nullable<Varchar>,
        phone -> Nullable<Varchar>,
    }
}

diesel::table! {
    products (id) {
        id -> Uuid,
        business_id -> Uuid,
        name -> Varchar,
        sku -> Nullable<Varchar>,
        price_cents -> Int8,
        stock_quantity -> Int8,
        category_id -> Nullable<Uuid>,
        supplier_id -> Nullable<Uuid>,
    }
}

diesel::table! {
    discounts (id) {
        id -> Uuid,
        business_id -> Uuid,
        name -> Varchar,
        /// One of `DiscountType`'s wire strings.
        discount_type -> Varchar,
        /// One of `DiscountScope`'s wire strings.
        scope -> Varchar,
        value -> Int8,
        active -> Bool,
    }
}

diesel::table! {
    orders (id) {
        id -> Uuid,
        business_id -> Uuid,
        reference -> Varchar,
        /// One of `OrderStatus`'s wire strings.
        status -> Varchar,
        /// One of `ProductOrderType`'s wire strings.
        order_type -> Varchar,
        subtotal_cents -> Int8,
        discount_cents -> Int8,
        discount_id -> Nullable<Uuid>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Order lines reach their business through `orders`.
    order_lines (id) {
        id -> Uuid,
        order_id -> Uuid,
        position -> Int4,
        product_id -> Nullable<Uuid>,
        product_name -> Varchar,
        quantity -> Int8,
        unit_price_cents -> Int8,
    }
}

diesel::joinable!(business_users -> businesses (business_id));
diesel::joinable!(business_users -> users (user_id));
diesel::joinable!(categories -> businesses (business_id));
diesel::joinable!(suppliers -> businesses (business_id));
diesel::joinable!(products -> businesses (business_id));
diesel::joinable!(products -> categories (category_id));
diesel::joinable!(products -> suppliers (supplier_id));
diesel::joinable!(discounts -> businesses (business_id));
diesel::joinable!(orders -> businesses (business_id));
diesel::joinable!(orders -> discounts (discount_id));
diesel::joinable!(order_lines -> orders (order_id));
diesel::joinable!(order_lines -> products (product_id));

diesel::allow_tables_to_appear_in_same_query!(
    businesses,
    users,
    business_users,
    categories,
    suppliers,
    products,
    discounts,
    orders,
    order_lines,
);
