use super::*;

/// Tests creating an event with the owner auto-join.
///
/// The owner is joined pre-accepted, leaving the member count at one, and no
/// pending-decision notification is emitted.
///
/// Expected: Ok with member count 1 and an accepted owner participant
#[tokio::test]
async fn create_auto_joins_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = ConnectionRegistry::new();

    let (owner, _) = factory::user::create_user(db).await?;

    let service = EventService::new(db, &registry);
    let event = service.create(params(owner.id)).await?;

    assert_eq!(event.owner_id, owner.id);
    assert_eq!(event.member_count, 1);
    assert!(!event.is_canceled);
    assert!(!event.is_done);

    let owner_row = entity::prelude::EventParticipant::find()
        .filter(entity::event_participant::Column::EventId.eq(event.id))
        .filter(entity::event_participant::Column::UserId.eq(owner.id))
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert!(owner_row.accepted);

    let notifications = entity::prelude::Notification::find().all(db).await.unwrap();
    assert!(notifications.is_empty());

    Ok(())
}

/// Tests that the roster of a fresh event is empty.
///
/// The owner is a participant row but is excluded from listings.
///
/// Expected: Ok with an empty roster
#[tokio::test]
async fn fresh_event_roster_is_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = ConnectionRegistry::new();

    let (owner, _) = factory::user::create_user(db).await?;

    let event = EventService::new(db, &registry).create(params(owner.id)).await?;

    let roster = ParticipantService::new(db, &registry)
        .get_participants(event.id)
        .await?;
    assert!(roster.is_empty());

    Ok(())
}
