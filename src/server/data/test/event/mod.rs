use crate::server::data::event::EventRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod increment_member_count;
mod set_flags;
