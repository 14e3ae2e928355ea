use super::*;

/// Tests attaching and detaching product variants from a voucher.
#[tokio::test]
async fn attach_and_detach_variants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _shop, _category, color, product) = factory::helpers::create_catalog(db).await?;
    let first = factory::product_variant::create_variant(db, product.id, color.id).await?;
    let second = factory::product_variant::create_variant(db, product.id, color.id).await?;
    let voucher = factory::voucher::create_voucher(db).await?;

    let service = VoucherService::new(db);

    let attached = service
        .attach_variants(voucher.id, &[first.id, second.id])
        .await
        .unwrap();
    assert_eq!(attached.len(), 2);

    // Attaching again is idempotent.
    let attached = service
        .attach_variants(voucher.id, &[first.id])
        .await
        .unwrap();
    assert_eq!(attached.len(), 2);

    let remaining = service
        .detach_variants(voucher.id, &[first.id])
        .await
        .unwrap();
    assert_eq!(remaining, vec![second.id]);

    Ok(())
}

/// Tests that the repository link rows round-trip through `variant_ids`.
#[tokio::test]
async fn variant_ids_reflect_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _shop, _category, color, product) = factory::helpers::create_catalog(db).await?;
    let variant = factory::product_variant::create_variant(db, product.id, color.id).await?;
    let voucher = factory::voucher::create_voucher(db).await?;

    let repo = VoucherRepository::new(db);
    assert!(repo.variant_ids(voucher.id).await?.is_empty());

    repo.attach_variants(voucher.id, &[variant.id]).await?;
    assert_eq!(repo.variant_ids(voucher.id).await?, vec![variant.id]);

    Ok(())
}
