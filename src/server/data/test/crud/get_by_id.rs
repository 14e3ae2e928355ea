use super::*;

/// Tests fetching an existing record by id.
///
/// Expected: Ok with the record
#[tokio::test]
async fn returns_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Categories)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let fetched = category_service(db).get(category.id).await.unwrap();
    assert_eq!(fetched.id, category.id);
    assert_eq!(fetched.name, category.name);

    Ok(())
}

/// Tests that an absent id is classified as not-found.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_id_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Categories)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = category_service(db).get(424_242).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
