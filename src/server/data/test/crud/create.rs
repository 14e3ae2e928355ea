use super::*;

/// Tests that `create` persists the input and `get` returns it with a
/// generated id and timestamps.
///
/// Expected: Ok with matching fields
#[tokio::test]
async fn create_then_get_returns_persisted_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Categories)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = category_service(db);
    let created = service
        .create(CreateCategoryParams {
            name: "Sneakers".to_string(),
            description: Some("Running shoes".to_string()),
        })
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "Sneakers");
    assert_eq!(created.description, Some("Running shoes".to_string()));

    let fetched = service.get(created.id).await.unwrap();
    assert_eq!(fetched, created);

    Ok(())
}

/// Tests that a persistence failure on insert is classified as a generic
/// bad request rather than surfacing the constraint details.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn classifies_constraint_violation_as_bad_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Users)
        .with_table(entity::prelude::Addresses)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CrudService::<entity::prelude::Addresses>::new(db, "address");
    let result = service
        .create(crate::server::model::address::CreateAddressParams::from_dto(
            999_999, // no such user
            crate::model::address::CreateAddressDto {
                receiver_name: "Nobody".to_string(),
                phone: "0900000000".to_string(),
                province_id: 201,
                district_id: 1442,
                ward_code: "20101".to_string(),
                street: "1 Test Street".to_string(),
                is_default: false,
            },
        ))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
