use super::*;

/// Tests claiming a valid voucher.
#[tokio::test]
async fn claims_valid_voucher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let voucher = factory::voucher::create_voucher(db).await?;

    let claim = VoucherService::new(db).claim(user.id, voucher.id).await.unwrap();

    assert_eq!(claim.user_id, user.id);
    assert_eq!(claim.voucher_id, voucher.id);
    assert!(claim.used_at.is_none());

    Ok(())
}

/// Tests that the same user cannot claim a voucher twice.
#[tokio::test]
async fn rejects_duplicate_claim() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let voucher = factory::voucher::create_voucher(db).await?;

    let service = VoucherService::new(db);
    service.claim(user.id, voucher.id).await.unwrap();
    let result = service.claim(user.id, voucher.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that claims stop at the usage limit.
#[tokio::test]
async fn rejects_claims_over_usage_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    let voucher = factory::voucher::VoucherFactory::new(db)
        .usage_limit(1)
        .build()
        .await?;

    let service = VoucherService::new(db);
    service.claim(first.id, voucher.id).await.unwrap();
    let result = service.claim(second.id, voucher.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that an expired voucher cannot be claimed.
#[tokio::test]
async fn rejects_expired_voucher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let voucher = factory::voucher::VoucherFactory::new(db)
        .expires_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let result = VoucherService::new(db).claim(user.id, voucher.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that claiming an absent voucher is not-found.
#[tokio::test]
async fn missing_voucher_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let result = VoucherService::new(db).claim(user.id, 424_242).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
