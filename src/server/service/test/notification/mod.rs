use crate::server::{
    error::AppError,
    gateway::{
        registry::{ConnectionRegistry, SessionHandle},
        PushMessage,
    },
    model::notification::{EmitNotificationParams, NotificationKind},
    service::notification::NotificationService,
};
use test_utils::{builder::TestBuilder, factory};
use tokio::sync::mpsc;

mod emit;
