//! Test helpers for inbound HTTP components.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, test, web};
use serde_json::json;

use crate::domain::ports::{FIXTURE_PASSWORD, FIXTURE_USERNAME};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{analytics, catalogue, discounts, fetcher, orders, users};

/// Session middleware with a fresh key and the `Secure` flag off.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// The `session` cookie set by a response.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// App with every `/api/v1` handler mounted over `state`.
pub fn api_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .service(
            web::scope("/api/v1")
                .service(users::login)
                .service(catalogue::category_page)
                .service(catalogue::supplier_page)
                .service(orders::orders_page)
                .service(orders::order_page)
                .service(analytics::analytics_page)
                .service(discounts::list_discounts)
                .service(fetcher::reset_fetcher),
        )
}

/// Log in as the fixture user and return the session cookie.
pub async fn login_fixture_user<S, B>(app: &S) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let request = test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({ "username": FIXTURE_USERNAME, "password": FIXTURE_PASSWORD }))
        .to_request();
    let response = test::call_service(app, request).await;
    assert!(response.status().is_success(), "fixture login failed");
    session_cookie(&response)
}

/// Sample page data shared by view and handler tests.
pub mod samples {
    use chrono::{TimeZone, Utc};

    use crate::domain::{
        AnalyticsSummary, BusinessId, Category, CategoryDetails, CategoryDraft, CategoryId,
        Discount, DiscountDraft, DiscountId, DiscountScope, DiscountType, Order, OrderDetails,
        OrderDraft, OrderId, OrderLine, OrderLineDraft, OrderStatus, Product, ProductDraft,
        ProductId, ProductOrderType, Supplier, SupplierDetails, SupplierDraft, SupplierId,
    };

    pub fn product(name: &str, price_cents: i64, stock: i64) -> Product {
        Product::new(ProductDraft {
            id: ProductId::random(),
            name: name.to_owned(),
            sku: None,
            price_cents,
            stock_quantity: stock,
            category_id: None,
            supplier_id: None,
        })
        .expect("valid product")
    }

    pub fn category_details() -> CategoryDetails {
        CategoryDetails {
            category: Category::new(CategoryDraft {
                id: CategoryId::random(),
                business_id: BusinessId::random(),
                name: "Coffee".to_owned(),
                description: Some("Beans and grounds".to_owned()),
            })
            .expect("valid category"),
            products: vec![product("Espresso", 1_899, 12), product("Decaf", 1_699, 3)],
        }
    }

    pub fn supplier_details() -> SupplierDetails {
        SupplierDetails {
            supplier: Supplier::new(SupplierDraft {
                id: SupplierId::random(),
                business_id: BusinessId::random(),
                name: "Roastery Ltd".to_owned(),
                email: Some("orders@roastery.test".to_owned()),
                phone: None,
            })
            .expect("valid supplier"),
            products: vec![product("Espresso", 1_899, 12)],
        }
    }

    pub fn discount() -> Discount {
        Discount::new(DiscountDraft {
            id: DiscountId::random(),
            business_id: BusinessId::random(),
            name: "Loyalty".to_owned(),
            discount_type: DiscountType::Percentage,
            scope: DiscountScope::Order,
            value: 1_000,
            active: true,
        })
        .expect("valid discount")
    }

    pub fn order(status: OrderStatus, subtotal_cents: i64, discount_cents: i64) -> Order {
        Order::new(OrderDraft {
            id: OrderId::random(),
            business_id: BusinessId::random(),
            reference: "T-0001".to_owned(),
            status,
            order_type: ProductOrderType::Sale,
            subtotal_cents,
            discount_cents,
            created_at: Utc
                .with_ymd_and_hms(2026, 3, 1, 9, 30, 0)
                .single()
                .expect("valid date"),
        })
        .expect("valid order")
    }

    /// Two lattes at 450 with a 10% discount.
    pub fn order_details() -> OrderDetails {
        let line = OrderLine::new(OrderLineDraft {
            product_id: Some(ProductId::random()),
            product_name: "Latte".to_owned(),
            quantity: 2,
            unit_price_cents: 450,
        })
        .expect("valid line");
        OrderDetails::new(
            order(OrderStatus::Completed, 900, 90),
            vec![line],
            Some(discount()),
        )
        .expect("lines match subtotal")
    }

    pub fn analytics_summary() -> AnalyticsSummary {
        AnalyticsSummary::from_orders(&[order_details()], 5)
    }
}
