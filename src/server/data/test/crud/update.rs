use super::*;

/// Tests that a partial update changes only the supplied fields.
///
/// Given a record with {name, description}, updating {name} must leave
/// description unchanged.
#[tokio::test]
async fn partial_update_leaves_unsupplied_fields_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Categories)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = category_service(db);
    let created = service
        .create(CreateCategoryParams {
            name: "Boots".to_string(),
            description: Some("Winter boots".to_string()),
        })
        .await
        .unwrap();

    let updated = service
        .update(
            created.id,
            UpdateCategoryParams {
                name: Some("Hiking boots".to_string()),
                description: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Hiking boots");
    assert_eq!(updated.description, Some("Winter boots".to_string()));
    assert_eq!(updated.created_at, created.created_at);

    Ok(())
}

/// Tests that updating an absent id is classified as not-found.
#[tokio::test]
async fn missing_id_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Categories)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = category_service(db)
        .update(
            424_242,
            UpdateCategoryParams {
                name: Some("Ghost".to_string()),
                description: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
