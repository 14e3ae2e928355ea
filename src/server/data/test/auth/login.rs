use super::*;

/// Tests the full signup, activation and login flow, including that the
/// issued token carries the user's id and role.
#[tokio::test]
async fn signup_activate_login_roundtrip() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Users)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();
    let service = AuthService::new(db, &jwt);

    let user = service.signup(signup_dto("flow@example.com")).await.unwrap();
    assert!(!user.active);
    let code = user.active_code.clone().expect("activation code assigned");

    // Login is rejected until the account is activated.
    let result = service
        .login(LoginDto {
            email: "flow@example.com".to_string(),
            password: "correct-horse".to_string(),
        })
        .await;
    assert!(matches!(result, Err(AppError::AuthErr(_))));

    service.check_code("flow@example.com", &code).await.unwrap();

    let (token, user) = service
        .login(LoginDto {
            email: "flow@example.com".to_string(),
            password: "correct-horse".to_string(),
        })
        .await
        .unwrap();

    let claims = jwt.verify(&token).unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.role, "USER");
    assert_eq!(claims.email, "flow@example.com");

    Ok(())
}

/// Tests that a wrong password is rejected without revealing which half
/// of the credentials failed.
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Users)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();
    let service = AuthService::new(db, &jwt);

    let user = service.signup(signup_dto("wrong@example.com")).await.unwrap();
    let code = user.active_code.clone().unwrap();
    service.check_code("wrong@example.com", &code).await.unwrap();

    let result = service
        .login(LoginDto {
            email: "wrong@example.com".to_string(),
            password: "incorrect".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests that a duplicate email cannot sign up twice.
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Users)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();
    let service = AuthService::new(db, &jwt);

    service.signup(signup_dto("dup@example.com")).await.unwrap();
    let result = service.signup(signup_dto("dup@example.com")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a wrong activation code does not activate the account.
#[tokio::test]
async fn rejects_wrong_activation_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Users)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();
    let service = AuthService::new(db, &jwt);

    service.signup(signup_dto("code@example.com")).await.unwrap();
    let result = service.check_code("code@example.com", "000000x").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests changing the password: the old one must verify, after which only
/// the new one logs in.
#[tokio::test]
async fn change_password_requires_old_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Users)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();
    let service = AuthService::new(db, &jwt);

    let user = service.signup(signup_dto("change@example.com")).await.unwrap();
    let code = user.active_code.clone().unwrap();
    let user = service.check_code("change@example.com", &code).await.unwrap();

    let result = service
        .change_password(
            user.clone(),
            ChangePasswordDto {
                old_password: "not-the-old-one".to_string(),
                new_password: "brand-new-pass".to_string(),
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    service
        .change_password(
            user,
            ChangePasswordDto {
                old_password: "correct-horse".to_string(),
                new_password: "brand-new-pass".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(service
        .login(LoginDto {
            email: "change@example.com".to_string(),
            password: "correct-horse".to_string(),
        })
        .await
        .is_err());

    assert!(service
        .login(LoginDto {
            email: "change@example.com".to_string(),
            password: "brand-new-pass".to_string(),
        })
        .await
        .is_ok());

    Ok(())
}
