use super::*;

/// Tests soft deleting a satellite.
///
/// Verifies that the soft-delete triple is set, the satellite disappears from default
/// queries, and the row is still in storage.
///
/// Expected: Ok(Some) with deleted satellite
#[tokio::test]
async fn soft_deletes_satellite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Satellite).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_satellite(db).await?;

    let repo = SatelliteRepository::new(db);
    let deleted = repo
        .soft_delete(&SatelliteFilter::ById(created.id))
        .await?;

    assert!(deleted.is_some());
    let deleted = deleted.unwrap();
    assert!(deleted.deleted);
    assert!(deleted.deleted_at.is_some());
    assert_eq!(deleted.deletion_origin, Some(DeletionOrigin::Manual));

    assert!(repo
        .find_one(&SatelliteFilter::ById(created.id))
        .await?
        .is_none());
    let retained = repo.find_one_including_deleted(created.id).await?;
    assert!(retained.is_some_and(|s| s.deleted));

    Ok(())
}

/// Tests soft deleting an already deleted satellite.
///
/// Expected: Ok(None) and the original deletion time kept
#[tokio::test]
async fn returns_none_when_already_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Satellite).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = factory::satellite::SatelliteFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    let repo = SatelliteRepository::new(db);
    let result = repo
        .soft_delete(&SatelliteFilter::ById(deleted.id))
        .await?;

    assert!(result.is_none());
    let stored = repo.find_one_including_deleted(deleted.id).await?.unwrap();
    assert_eq!(stored.deleted_at, deleted.deleted_at);

    Ok(())
}
