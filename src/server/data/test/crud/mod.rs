//! Tests for the generic CRUD engine, run against the category table (any
//! single-table resource would do).

use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::catalog::{CreateCategoryParams, UpdateCategoryParams},
    service::crud::CrudService,
};

mod create;
mod delete;
mod get_by_id;
mod paginated;
mod update;

fn category_service(
    db: &sea_orm::DatabaseConnection,
) -> CrudService<'_, entity::prelude::Categories> {
    CrudService::new(db, "category")
}
