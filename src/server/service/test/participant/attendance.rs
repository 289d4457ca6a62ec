use super::*;

/// Tests that attend and absence are idempotent.
///
/// Repeated calls leave the participant in the last-set state with no error.
///
/// Expected: Ok on every call, last-set value wins
#[tokio::test]
async fn attend_and_absence_are_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = ConnectionRegistry::new();

    let (_owner, _joiner, _event, participant) =
        factory::helpers::create_event_with_participant(db).await?;

    let service = ParticipantService::new(db, &registry);
    let repo = ParticipantRepository::new(db);

    service.attend(participant.id).await?;
    service.attend(participant.id).await?;
    assert_eq!(
        repo.get_by_id(participant.id).await?.unwrap().attended,
        Some(true)
    );

    service.absence(participant.id).await?;
    service.absence(participant.id).await?;
    assert_eq!(
        repo.get_by_id(participant.id).await?.unwrap().attended,
        Some(false)
    );

    Ok(())
}

/// Tests marking attendance for an unknown participant.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn attendance_for_unknown_participant_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = ConnectionRegistry::new();

    let service = ParticipantService::new(db, &registry);

    assert!(matches!(
        service.attend(999999).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.absence(999999).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that the roster excludes the event owner.
///
/// Expected: Ok with only the non-owner participants listed
#[tokio::test]
async fn roster_excludes_owner() -> Result<(), AppError> {
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
    service.join(event.id, owner.id, true).await?;
    service.join(event.id, joiner.id, false).await?;

    let roster = service.get_participants(event.id).await?;

    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].user.id, joiner.id);

    Ok(())
}

/// Tests that the attendance projection partitions the roster exactly.
///
/// The two partitions together must equal the set returned by
/// `get_participants` with no overlap and no omission, ordered by first name
/// within each partition.
///
/// Expected: Ok with a clean partition of the owner-less roster
#[tokio::test]
async fn attendance_partitions_roster() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let registry = ConnectionRegistry::new();

    let (owner, _profile, event) = factory::helpers::create_event_with_owner(db).await?;
    let (carol, _) = factory::user::create_user_with_name(db, "Carol").await?;
    let (alice, _) = factory::user::create_user_with_name(db, "Alice").await?;
    let (bob, _) = factory::user::create_user_with_name(db, "Bob").await?;

    let service = ParticipantService::new(db, &registry);
    service.join(event.id, owner.id, true).await?;
    for user in [&carol, &alice, &bob] {
        let participant_id = service.join(event.id, user.id, false).await?;
        service.accept(participant_id).await?;
    }

    // Carol and Alice attended, Bob did not show up.
    let carol_participant = service.get_participant_id(event.id, carol.id).await?;
    let alice_participant = service.get_participant_id(event.id, alice.id).await?;
    let bob_participant = service.get_participant_id(event.id, bob.id).await?;
    service.attend(carol_participant).await?;
    service.attend(alice_participant).await?;
    service.absence(bob_participant).await?;

    let roster = service.get_participants(event.id).await?;
    let attendance = service.get_participant_attendance(event.id).await?;

    let attend_ids: Vec<i32> = attendance
        .attends
        .iter()
        .map(|entry| entry.user.id)
        .collect();
    let not_yet_ids: Vec<i32> = attendance
        .not_yet_attends
        .iter()
        .map(|entry| entry.user.id)
        .collect();

    // Partition: no overlap, no omission, together equal to the roster.
    assert_eq!(attend_ids.len() + not_yet_ids.len(), roster.len());
    assert!(attend_ids.iter().all(|id| !not_yet_ids.contains(id)));
    for entry in &roster {
        assert!(
            attend_ids.contains(&entry.user.id) || not_yet_ids.contains(&entry.user.id)
        );
    }

    // First-name order within each partition.
    assert_eq!(attend_ids, vec![alice.id, carol.id]);
    assert_eq!(not_yet_ids, vec![bob.id]);

    Ok(())
}
