//! Validation coverage for inventory entities.

use super::*;
use crate::domain::{BusinessId, CategoryId, ProductId, SupplierId};
use rstest::{fixture, rstest};

#[fixture]
fn product_draft() -> ProductDraft {
    ProductDraft {
        id: ProductId::random(),
        name: "Espresso beans 1kg".to_owned(),
        sku: Some("  ESP-1KG ".to_owned()),
        price_cents: 1_899,
        stock_quantity: 12,
        category_id: None,
        supplier_id: None,
    }
}

#[rstest]
fn product_trims_optional_text(product_draft: ProductDraft) {
    let product = Product::new(product_draft).expect("valid product");
    assert_eq!(product.sku(), Some("ESP-1KG"));
    assert_eq!(product.stock_value_cents(), 22_788);
}

#[rstest]
#[case(-1, 0, "product.price_cents")]
#[case(0, -3, "product.stock_quantity")]
fn product_rejects_negative_numbers(
    mut product_draft: ProductDraft,
    #[case] price: i64,
    #[case] stock: i64,
    #[case] field: &'static str,
) {
    product_draft.price_cents = price;
    product_draft.stock_quantity = stock;
    let err = Product::new(product_draft).expect_err("negative values rejected");
    assert!(matches!(err, CatalogueValidationError::NegativeValue { field: f, .. } if f == field));
}

#[rstest]
fn category_rejects_blank_name() {
    let err = Category::new(CategoryDraft {
        id: CategoryId::random(),
        business_id: BusinessId::random(),
        name: "   ".to_owned(),
        description: None,
    })
    .expect_err("blank name rejected");
    assert_eq!(
        err,
        CatalogueValidationError::EmptyField {
            field: "category.name"
        }
    );
}

#[rstest]
fn category_details_sum_stock(product_draft: ProductDraft) {
    let category = Category::new(CategoryDraft {
        id: CategoryId::random(),
        business_id: BusinessId::random(),
        name: "Coffee".to_owned(),
        description: Some(String::new()),
    })
    .expect("valid category");
    assert!(category.description().is_none());
    let details = CategoryDetails {
        category,
        products: vec![
            Product::new(product_draft.clone()).expect("valid"),
            Product::new(product_draft).expect("valid"),
        ],
    };
    assert_eq!(details.total_stock(), 24);
}

#[rstest]
#[case(Some("orders@roastery.example"), true)]
#[case(Some("   "), true)]
#[case(None, true)]
#[case(Some("roastery.example"), false)]
#[case(Some("a@b@c.example"), false)]
#[case(Some("@roastery.example"), false)]
fn supplier_email_shape(#[case] email: Option<&str>, #[case] ok: bool) {
    let result = Supplier::new(SupplierDraft {
        id: SupplierId::random(),
        business_id: BusinessId::random(),
        name: "Roastery".to_owned(),
        email: email.map(str::to_owned),
        phone: None,
    });
    assert_eq!(result.is_ok(), ok);
}
