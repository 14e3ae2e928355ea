use super::*;

/// Tests that adding a variant creates a cart line.
#[tokio::test]
async fn adds_line_to_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _shop, _category, color, product) = factory::helpers::create_catalog(db).await?;
    let variant = factory::product_variant::create_variant(db, product.id, color.id).await?;

    let repo = CartRepository::new(db);
    let cart = repo.find_or_create(user.id).await?;
    let item = repo.add_item(cart.id, variant.id, 2).await?;

    assert_eq!(item.cart_id, cart.id);
    assert_eq!(item.variant_id, variant.id);
    assert_eq!(item.quantity, 2);

    Ok(())
}

/// Tests that adding the same variant twice merges quantities into one
/// line instead of duplicating it.
#[tokio::test]
async fn merges_quantity_for_duplicate_variant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _shop, _category, color, product) = factory::helpers::create_catalog(db).await?;
    let variant = factory::product_variant::create_variant(db, product.id, color.id).await?;

    let repo = CartRepository::new(db);
    let cart = repo.find_or_create(user.id).await?;
    repo.add_item(cart.id, variant.id, 2).await?;
    let merged = repo.add_item(cart.id, variant.id, 3).await?;

    assert_eq!(merged.quantity, 5);
    assert_eq!(repo.items_with_variants(cart.id).await?.len(), 1);

    Ok(())
}

/// Tests that the service rejects adding more than the available stock.
#[tokio::test]
async fn service_rejects_insufficient_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _shop, _category, color, product) = factory::helpers::create_catalog(db).await?;
    let variant = factory::product_variant::ProductVariantFactory::new(db, product.id, color.id)
        .stock_quantity(1)
        .build()
        .await?;

    let service = CartService::new(db);
    let result = service.add_item(user.id, variant.id, 5).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
