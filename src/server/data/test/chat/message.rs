use super::*;

/// Tests persisting a message as a child of its room.
///
/// Expected: Ok with the message attached to the room and author
#[tokio::test]
async fn stores_message_in_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::user::create_user(db).await?;
    let room = factory::chat::create_chat_room(db, true).await?;

    let repo = MessageRepository::new(db);
    let message = repo
        .create(StoreMessageParams {
            chat_room_id: room.id,
            user_id: user.id,
            content: "hello there".to_string(),
        })
        .await?;

    assert_eq!(message.chat_room_id, room.id);
    assert_eq!(message.user_id, user.id);
    assert_eq!(message.content, "hello there");

    Ok(())
}

/// Tests reading room history newest first with an optional limit.
///
/// Expected: Ok with messages in reverse insertion order, capped by the limit
#[tokio::test]
async fn reads_history_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _) = factory::user::create_user(db).await?;
    let room = factory::chat::create_chat_room(db, true).await?;

    let first = factory::chat::create_message(db, room.id, user.id, "first").await?;
    let second = factory::chat::create_message(db, room.id, user.id, "second").await?;
    let third = factory::chat::create_message(db, room.id, user.id, "third").await?;

    let repo = MessageRepository::new(db);

    let all = repo.get_by_room(room.id, None).await?;
    let ids: Vec<i32> = all.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);

    let latest = repo.get_by_room(room.id, Some(1)).await?;
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].id, third.id);

    Ok(())
}
