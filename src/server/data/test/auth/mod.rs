use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::{
    model::auth::{ChangePasswordDto, LoginDto, SignupDto},
    server::{error::AppError, middleware::auth::JwtKeys, service::auth::AuthService},
};

mod login;

fn jwt() -> JwtKeys {
    JwtKeys::new("test-secret", 3600)
}

fn signup_dto(email: &str) -> SignupDto {
    SignupDto {
        email: email.to_string(),
        password: "correct-horse".to_string(),
        full_name: "Signup Tester".to_string(),
        phone: None,
    }
}
