use super::*;

/// Tests creating and fetching a chat room.
///
/// Expected: Ok with the created room retrievable by id
#[tokio::test]
async fn creates_and_fetches_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChatRoomRepository::new(db);
    let room = repo.create(true).await?;

    let found = repo.get_by_id(room.id).await?.unwrap();
    assert!(found.is_group);

    Ok(())
}

/// Tests that room listing is scoped to the requested kind.
///
/// Expected: Ok with only group rooms in the group listing
#[tokio::test]
async fn listing_scopes_to_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChatRoomRepository::new(db);
    let group = repo.create(true).await?;
    let direct = repo.create(false).await?;

    let groups = repo.get_all(true).await?;
    let group_ids: Vec<i32> = groups.iter().map(|r| r.id).collect();

    assert!(group_ids.contains(&group.id));
    assert!(!group_ids.contains(&direct.id));

    Ok(())
}
