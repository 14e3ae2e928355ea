use super::*;

/// Tests looking a user up by email.
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Users)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("lookup@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("lookup@example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that an unknown email yields None.
#[tokio::test]
async fn unknown_email_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Users)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}

/// Tests that activation flips the flag and clears the code.
#[tokio::test]
async fn activate_clears_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Users)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .active(false)
        .active_code(Some("123456".to_string()))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let activated = repo.activate(user).await?;

    assert!(activated.active);
    assert!(activated.active_code.is_none());

    Ok(())
}
