use crate::server::{data::stat::StatRepository, model::stat::UpsertStatParams};
use entity::prelude::Stat;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
