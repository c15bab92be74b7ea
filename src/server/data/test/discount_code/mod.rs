use crate::server::{
    data::discount_code::DiscountCodeRepository, model::discount::UpdateDiscountCodeParams,
};
use entity::prelude::DiscountCode;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod increment_times_used;
mod update;
