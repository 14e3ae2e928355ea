use axum::http::{header, HeaderMap, HeaderValue};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, JwtKeys, Role},
};

fn jwt() -> JwtKeys {
    JwtKeys::new("guard-test-secret", 3600)
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    );
    headers
}

/// Tests that a missing Authorization header is rejected as unauthorized.
#[tokio::test]
async fn rejects_missing_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Users)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &headers, &jwt).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests that an unparseable token is rejected as unauthorized.
#[tokio::test]
async fn rejects_garbage_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Users)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();
    let headers = bearer_headers("not.a.jwt");

    let result = AuthGuard::new(db, &headers, &jwt).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that a token signed with a different secret is rejected.
#[tokio::test]
async fn rejects_token_with_wrong_signature() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Users)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let other_keys = JwtKeys::new("a-different-secret", 3600);
    let token = other_keys.issue(&user).unwrap();
    let headers = bearer_headers(&token);

    let jwt = jwt();
    let result = AuthGuard::new(db, &headers, &jwt).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests the role matrix: an ADMIN-only route rejects a USER token with
/// forbidden and accepts an ADMIN token.
#[tokio::test]
async fn enforces_exact_role_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Users)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();

    let user = factory::user::create_user(db).await?;
    let user_headers = bearer_headers(&jwt.issue(&user).unwrap());

    let result = AuthGuard::new(db, &user_headers, &jwt)
        .require(&[Role::Admin])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    let admin = factory::user::create_admin(db).await?;
    let admin_headers = bearer_headers(&jwt.issue(&admin).unwrap());

    let granted = AuthGuard::new(db, &admin_headers, &jwt)
        .require(&[Role::Admin])
        .await
        .unwrap();
    assert_eq!(granted.id, admin.id);

    Ok(())
}

/// Tests that roles do not form a hierarchy: ADMIN does not satisfy a
/// USER-only route.
#[tokio::test]
async fn admin_does_not_satisfy_user_only_route() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Users)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();
    let admin = factory::user::create_admin(db).await?;
    let headers = bearer_headers(&jwt.issue(&admin).unwrap());

    let result = AuthGuard::new(db, &headers, &jwt)
        .require(&[Role::User])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    Ok(())
}

/// Tests that an empty role set admits any authenticated active account.
#[tokio::test]
async fn empty_role_set_admits_any_active_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Users)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();
    let user = factory::user::create_user(db).await?;
    let headers = bearer_headers(&jwt.issue(&user).unwrap());

    let granted = AuthGuard::new(db, &headers, &jwt).require(&[]).await.unwrap();
    assert_eq!(granted.id, user.id);

    Ok(())
}

/// Tests that an inactive account is rejected even with a valid token.
#[tokio::test]
async fn rejects_inactive_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Users)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();
    let user = factory::user::UserFactory::new(db).active(false).build().await?;
    let headers = bearer_headers(&jwt.issue(&user).unwrap());

    let result = AuthGuard::new(db, &headers, &jwt).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountInactive(_)))
    ));

    Ok(())
}

/// Tests that a token whose subject was deleted is rejected.
#[tokio::test]
async fn rejects_deleted_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Users)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = jwt();
    let user = factory::user::create_user(db).await?;
    let headers = bearer_headers(&jwt.issue(&user).unwrap());

    use sea_orm::EntityTrait;
    entity::prelude::Users::delete_by_id(user.id).exec(db).await?;

    let result = AuthGuard::new(db, &headers, &jwt).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(_)))
    ));

    Ok(())
}
