use super::*;

/// Tests deleting an existing record.
#[tokio::test]
async fn deletes_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Categories)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let service = category_service(db);
    service.remove(category.id).await.unwrap();

    let result = service.get(category.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that deleting an absent id is classified as not-found.
#[tokio::test]
async fn missing_id_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Categories)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = category_service(db).remove(424_242).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
