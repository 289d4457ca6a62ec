use crate::server::{
    data::{event::EventRepository, participant::ParticipantRepository},
    error::AppError,
    gateway::registry::ConnectionRegistry,
    service::participant::ParticipantService,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod accept;
mod attendance;
mod decline;
mod join;
