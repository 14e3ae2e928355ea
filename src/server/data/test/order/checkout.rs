use super::*;

/// Tests the checkout happy path: total is quantity x unit price, prices
/// are snapshotted into order items, stock is decremented and the cart is
/// emptied.
#[tokio::test]
async fn creates_order_from_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address, variant, cart) = seed_cart(db, 2).await?;

    let service = OrderService::new(db);
    let detail = service
        .checkout(
            &user,
            CheckoutDto {
                address_id: address.id,
                note: Some("leave at door".to_string()),
                voucher_code: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(detail.order.status, "PENDING");
    assert_eq!(detail.order.total_amount, 100_000);
    assert_eq!(detail.items.len(), 1);
    assert_eq!(detail.items[0].unit_price, 50_000);
    assert_eq!(detail.items[0].quantity, 2);

    let variant_after = entity::prelude::ProductVariants::find_by_id(variant.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(variant_after.stock_quantity, 8);

    let cart_repo = CartRepository::new(db);
    assert!(cart_repo.items_with_variants(cart.id).await?.is_empty());

    Ok(())
}

/// Tests that an empty cart cannot be checked out.
#[tokio::test]
async fn rejects_empty_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let address = factory::address::create_address(db, user.id).await?;

    let service = OrderService::new(db);
    let result = service
        .checkout(
            &user,
            CheckoutDto {
                address_id: address.id,
                note: None,
                voucher_code: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a claimed voucher reduces the total and is marked used in
/// the same transaction.
#[tokio::test]
async fn applies_claimed_voucher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address, _variant, _cart) = seed_cart(db, 2).await?;

    let voucher = factory::voucher::VoucherFactory::new(db)
        .discount_amount(30_000)
        .build()
        .await?;
    let voucher_repo = VoucherRepository::new(db);
    let claim = voucher_repo.create_claim(user.id, voucher.id).await?;

    let service = OrderService::new(db);
    let detail = service
        .checkout(
            &user,
            CheckoutDto {
                address_id: address.id,
                note: None,
                voucher_code: Some(voucher.code.clone()),
            },
        )
        .await
        .unwrap();

    assert_eq!(detail.order.total_amount, 70_000);

    let claim_after = entity::prelude::UserVouchers::find_by_id(claim.id)
        .one(db)
        .await?
        .unwrap();
    assert!(claim_after.used_at.is_some());

    Ok(())
}

/// Tests that a failing statement rolls the whole checkout back: no order
/// row, no order items, stock untouched.
#[tokio::test]
async fn failed_checkout_rolls_back_entirely() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address, variant, cart) = seed_cart(db, 2).await?;

    let repo = OrderRepository::new(db);
    let result = repo
        .create_from_cart(CheckoutParams {
            user_id: user.id,
            address_id: address.id,
            note: None,
            currency_unit: "VND".to_string(),
            total_amount: 100_000,
            lines: vec![
                CheckoutLine {
                    variant_id: variant.id,
                    quantity: 2,
                    unit_price: 50_000,
                    currency_unit: "VND".to_string(),
                },
                CheckoutLine {
                    // Dangling variant makes the second line insert fail.
                    variant_id: 424_242,
                    quantity: 1,
                    unit_price: 1,
                    currency_unit: "VND".to_string(),
                },
            ],
            cart_id: cart.id,
            user_voucher_id: None,
        })
        .await;

    assert!(result.is_err());

    assert_eq!(entity::prelude::Orders::find().count(db).await?, 0);
    assert_eq!(entity::prelude::OrderItems::find().count(db).await?, 0);

    let variant_after = entity::prelude::ProductVariants::find_by_id(variant.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(variant_after.stock_quantity, 10, "stock must be untouched");

    let cart_repo = CartRepository::new(db);
    assert_eq!(cart_repo.items_with_variants(cart.id).await?.len(), 1);

    Ok(())
}
