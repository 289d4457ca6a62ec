use super::*;

/// Tests declining a join request.
///
/// Verifies the flag-based decline: the row is kept with `declined` set, the
/// owner's pending-decision notification is removed, a MESSAGE notification
/// reaches the joining user, and the member count stays untouched.
///
/// Expected: Ok with the row flagged and the pending prompt gone
#[tokio::test]
async fn decline_flags_row_and_removes_pending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = ConnectionRegistry::new();

    let (owner, _profile, event) = factory::helpers::create_event_with_owner(db).await?;
    let (joiner, _) = factory::user::create_user(db).await?;

    let service = ParticipantService::new(db, &registry);
    let participant_id = service.join(event.id, joiner.id, false).await?;

    service.decline(participant_id).await?;

    // Declined rows are flagged, not deleted.
    let participant = ParticipantRepository::new(db)
        .get_by_id(participant_id)
        .await?
        .unwrap();
    assert!(participant.declined);
    assert!(!participant.accepted);

    // The owner's pending notification for the pair is gone.
    let pending = entity::prelude::Notification::find()
        .filter(entity::notification::Column::RecipientId.eq(owner.id))
        .filter(entity::notification::Column::EventId.eq(event.id))
        .filter(entity::notification::Column::Kind.eq("CONFIRMATION"))
        .all(db)
        .await
        .unwrap();
    assert!(pending.is_empty());

    let messages = entity::prelude::Notification::find()
        .filter(entity::notification::Column::RecipientId.eq(joiner.id))
        .filter(entity::notification::Column::Kind.eq("MESSAGE"))
        .all(db)
        .await
        .unwrap();
    assert_eq!(messages.len(), 1);

    // Decline never touches the member count.
    let updated = EventRepository::new(db).get_by_id(event.id).await?.unwrap();
    assert_eq!(updated.member_count, 0);

    Ok(())
}

/// Tests that declining after accepting does not undo the acceptance count.
///
/// Decline only applies to not-yet-accepted participants; the member count
/// is increment-only and must never be decremented by a decline.
///
/// Expected: Ok with member count still 1
#[tokio::test]
async fn decline_never_decrements_member_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = ConnectionRegistry::new();

    let (_owner, _profile, event) = factory::helpers::create_event_with_owner(db).await?;
    let (joiner, _) = factory::user::create_user(db).await?;

    let service = ParticipantService::new(db, &registry);
    let participant_id = service.join(event.id, joiner.id, false).await?;
    service.accept(participant_id).await?;

    service.decline(participant_id).await?;

    let updated = EventRepository::new(db).get_by_id(event.id).await?.unwrap();
    assert_eq!(updated.member_count, 1);

    Ok(())
}

/// Tests declining an unknown participant.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn decline_unknown_participant_fails_with_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = ConnectionRegistry::new();

    let service = ParticipantService::new(db, &registry);
    let result = service.decline(999999).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
