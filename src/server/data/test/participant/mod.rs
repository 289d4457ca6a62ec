use crate::server::data::participant::ParticipantRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_event_and_user;
mod list_for_event;
