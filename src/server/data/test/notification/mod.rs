use crate::server::{
    data::notification::NotificationRepository,
    model::notification::{EmitNotificationParams, NotificationKind},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_pending;
mod find_by_recipient;
