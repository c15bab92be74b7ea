use crate::server::data::site_content::SiteContentRepository;
use entity::prelude::SiteContent;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_prefix;
mod upsert;
