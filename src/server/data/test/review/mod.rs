use crate::server::{
    data::review::ReviewRepository,
    model::review::{CreateReviewParams, ReviewStatusFilter},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod approve;
mod create;
mod get_approved_by_product;
mod get_paginated;
