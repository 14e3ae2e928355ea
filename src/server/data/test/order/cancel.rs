use super::*;

/// Tests that cancelling a pending order restores the reserved stock.
#[tokio::test]
async fn cancel_restores_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address, variant, _cart) = seed_cart(db, 3).await?;

    let service = OrderService::new(db);
    let detail = service
        .checkout(
            &user,
            CheckoutDto {
                address_id: address.id,
                note: None,
                voucher_code: None,
            },
        )
        .await
        .unwrap();

    let cancelled = service.cancel(detail.order.id).await.unwrap();
    assert_eq!(cancelled.status, "CANCELLED");

    let variant_after = entity::prelude::ProductVariants::find_by_id(variant.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(variant_after.stock_quantity, 10);

    Ok(())
}

/// Tests that only pending orders can be cancelled.
#[tokio::test]
async fn rejects_cancel_after_shipping() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address, _variant, _cart) = seed_cart(db, 1).await?;

    let service = OrderService::new(db);
    let detail = service
        .checkout(
            &user,
            CheckoutDto {
                address_id: address.id,
                note: None,
                voucher_code: None,
            },
        )
        .await
        .unwrap();

    service
        .set_status(detail.order.id, "SHIPPED".to_string())
        .await
        .unwrap();

    let result = service.cancel(detail.order.id).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that an unknown status string is rejected.
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address, _variant, _cart) = seed_cart(db, 1).await?;

    let service = OrderService::new(db);
    let detail = service
        .checkout(
            &user,
            CheckoutDto {
                address_id: address.id,
                note: None,
                voucher_code: None,
            },
        )
        .await
        .unwrap();

    let result = service
        .set_status(detail.order.id, "TELEPORTED".to_string())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
