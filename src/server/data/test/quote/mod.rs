use crate::{
    model::quote::QuoteStatus,
    server::{data::quote::QuoteRepository, model::quote::CreateQuoteParams},
};
use chrono::{Duration, Utc};
use entity::prelude::Quote;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update_status;
