use crate::server::{data::page_view::PageViewRepository, model::stat::CreatePageViewParams};
use chrono::{Duration, Utc};
use entity::prelude::PageView;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_by_day_since;
mod count_by_path_since;
mod count_since;
mod create;
mod delete_older_than;
