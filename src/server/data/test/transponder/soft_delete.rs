use super::*;

/// Tests soft deleting a transponder.
///
/// Verifies that the transponder is no longer found through the default filter while
/// the row stays in storage with its deletion metadata.
///
/// Expected: Ok(Some) with deleted transponder
#[tokio::test]
async fn soft_deletes_transponder() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Transponder).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_transponder(db).await?;

    let repo = TransponderRepository::new(db);
    let deleted = repo
        .soft_delete(&TransponderFilter::ById(created.id))
        .await?
        .unwrap();

    assert!(deleted.deleted);
    assert_eq!(deleted.deletion_origin, Some(DeletionOrigin::Manual));
    assert!(repo
        .find_one(&TransponderFilter::ById(created.id))
        .await?
        .is_none());

    let retained = repo.find_one_including_deleted(created.id).await?.unwrap();
    assert!(retained.deleted);
    assert_eq!(retained.deleted_at, deleted.deleted_at);

    Ok(())
}

/// Tests soft deleting a transponder that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_transponder() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Transponder).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TransponderRepository::new(db);
    let result = repo
        .soft_delete(&TransponderFilter::ById(uuid::Uuid::new_v4()))
        .await?;

    assert!(result.is_none());

    Ok(())
}
