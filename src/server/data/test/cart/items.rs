use super::*;

/// Tests that the cart is created lazily, once, on first access.
#[tokio::test]
async fn find_or_create_reuses_existing_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = CartRepository::new(db);
    let first = repo.find_or_create(user.id).await?;
    let second = repo.find_or_create(user.id).await?;

    assert_eq!(first.id, second.id);

    Ok(())
}

/// Tests that cart lines come back joined with their variants.
#[tokio::test]
async fn items_join_their_variants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _shop, _category, color, product) = factory::helpers::create_catalog(db).await?;
    let variant = factory::product_variant::create_variant(db, product.id, color.id).await?;

    let repo = CartRepository::new(db);
    let cart = repo.find_or_create(user.id).await?;
    repo.add_item(cart.id, variant.id, 1).await?;

    let items = repo.items_with_variants(cart.id).await?;
    assert_eq!(items.len(), 1);
    let (item, joined) = &items[0];
    assert_eq!(item.variant_id, variant.id);
    assert_eq!(joined.as_ref().unwrap().id, variant.id);

    Ok(())
}

/// Tests that clearing removes every line.
#[tokio::test]
async fn clear_empties_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _shop, _category, color, product) = factory::helpers::create_catalog(db).await?;
    let first = factory::product_variant::create_variant(db, product.id, color.id).await?;
    let second = factory::product_variant::create_variant(db, product.id, color.id).await?;

    let repo = CartRepository::new(db);
    let cart = repo.find_or_create(user.id).await?;
    repo.add_item(cart.id, first.id, 1).await?;
    repo.add_item(cart.id, second.id, 2).await?;

    let removed = repo.clear(cart.id).await?;
    assert_eq!(removed, 2);
    assert!(repo.items_with_variants(cart.id).await?.is_empty());

    Ok(())
}
