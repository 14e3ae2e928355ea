use super::*;

/// Tests loading a product together with its variants, ordered by id.
#[tokio::test]
async fn returns_product_with_variants_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _shop, _category, color, product) = factory::helpers::create_catalog(db).await?;

    let first = factory::product_variant::create_variant(db, product.id, color.id).await?;
    let second = factory::product_variant::create_variant(db, product.id, color.id).await?;

    let repo = ProductRepository::new(db);
    let (loaded, variants) = repo.get_with_variants(product.id).await?.unwrap();

    assert_eq!(loaded.id, product.id);
    assert_eq!(variants.len(), 2);
    assert_eq!(variants[0].id, first.id);
    assert_eq!(variants[1].id, second.id);

    Ok(())
}

/// Tests that an absent product yields None rather than an error.
#[tokio::test]
async fn missing_product_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    assert!(repo.get_with_variants(424_242).await?.is_none());

    Ok(())
}
