use super::*;

/// Tests roster ordering by profile first name.
///
/// Creates participants whose profiles sort differently from their insertion
/// order.
///
/// Expected: Ok with rows ordered by first name ascending
#[tokio::test]
async fn orders_by_first_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _profile, event) = factory::helpers::create_event_with_owner(db).await?;

    let (carol, _) = factory::user::create_user_with_name(db, "Carol").await?;
    let (alice, _) = factory::user::create_user_with_name(db, "Alice").await?;
    let (bob, _) = factory::user::create_user_with_name(db, "Bob").await?;

    for user in [&carol, &alice, &bob] {
        factory::participant::create_participant(db, event.id, user.id).await?;
    }

    let repo = ParticipantRepository::new(db);
    let rows = repo.list_for_event(event.id).await?;

    let names: Vec<String> = rows
        .iter()
        .filter_map(|(_, _, profile)| profile.as_ref().map(|p| p.first_name.clone()))
        .collect();

    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);

    Ok(())
}

/// Tests that first-name ties keep insertion order.
///
/// Two participants share a first name; the one who joined first must come
/// first.
///
/// Expected: Ok with the earlier join listed before the later one
#[tokio::test]
async fn ties_keep_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, _profile, event) = factory::helpers::create_event_with_owner(db).await?;

    let (first_alex, _) = factory::user::create_user_with_name(db, "Alex").await?;
    let (second_alex, _) = factory::user::create_user_with_name(db, "Alex").await?;

    factory::participant::create_participant(db, event.id, first_alex.id).await?;
    factory::participant::create_participant(db, event.id, second_alex.id).await?;

    let repo = ParticipantRepository::new(db);
    let rows = repo.list_for_event(event.id).await?;

    let user_ids: Vec<i32> = rows.iter().map(|(p, _, _)| p.user_id).collect();
    assert_eq!(user_ids, vec![first_alex.id, second_alex.id]);

    Ok(())
}

/// Tests that every row carries its user and profile.
///
/// Expected: Ok with user and profile present on each row
#[tokio::test]
async fn joins_user_and_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, joiner, event, _participant) =
        factory::helpers::create_event_with_participant(db).await?;

    let repo = ParticipantRepository::new(db);
    let rows = repo.list_for_event(event.id).await?;

    let row = rows.iter().find(|(p, _, _)| p.user_id == joiner.id).unwrap();
    assert_eq!(row.1.as_ref().map(|u| u.id), Some(joiner.id));
    assert!(row.2.is_some());

    Ok(())
}
