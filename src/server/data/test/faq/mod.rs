use crate::server::{data::faq::FaqRepository, model::faq::UpsertFaqParams};
use entity::prelude::Faq;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod update;
