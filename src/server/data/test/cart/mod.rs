use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::cart::CartRepository, error::AppError, service::cart::CartService};

mod add_item;
mod items;
