use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::voucher::VoucherRepository, error::AppError, service::voucher::VoucherService,
};

mod claim;
mod variants;
