use super::*;

/// Tests finding a satellite by id.
///
/// Expected: Ok(Some) with the matching satellite
#[tokio::test]
async fn finds_satellite_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Satellite).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_satellite(db).await?;
    factory::create_satellite(db).await?;

    let repo = SatelliteRepository::new(db);
    let found = repo.find_one(&SatelliteFilter::ById(created.id)).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.name, created.name);

    Ok(())
}

/// Tests finding a satellite by name.
///
/// Expected: Ok(Some) with the matching satellite
#[tokio::test]
async fn finds_satellite_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Satellite).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_satellite_named(db, "GMVSAT", "GMV Satellite").await?;

    let repo = SatelliteRepository::new(db);
    let found = repo
        .find_one(&SatelliteFilter::ByName("GMVSAT".to_string()))
        .await?;

    assert_eq!(found.map(|s| s.id), Some(created.id));

    Ok(())
}

/// Tests that the name-or-slug filter matches on either field.
///
/// Expected: Ok(Some) when only the slug matches
#[tokio::test]
async fn finds_satellite_by_name_or_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Satellite).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_satellite_named(db, "GMVSAT", "GMV Satellite").await?;

    let repo = SatelliteRepository::new(db);
    let found = repo
        .find_one(&SatelliteFilter::ByNameOrSlug {
            name: "OTHER".to_string(),
            slug: "GMV Satellite".to_string(),
        })
        .await?;

    assert_eq!(found.map(|s| s.id), Some(created.id));

    Ok(())
}

/// Tests that soft-deleted satellites are not found.
///
/// Verifies that the default filter hides the satellite while the row is still
/// reachable through the bypass lookup.
///
/// Expected: Ok(None) from find_one, Ok(Some) from find_one_including_deleted
#[tokio::test]
async fn skips_soft_deleted_satellite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Satellite).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = factory::satellite::SatelliteFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    let repo = SatelliteRepository::new(db);

    assert!(repo
        .find_one(&SatelliteFilter::ById(deleted.id))
        .await?
        .is_none());
    assert!(repo
        .find_one(&SatelliteFilter::ByName(deleted.name.clone()))
        .await?
        .is_none());
    assert!(repo
        .find_one_including_deleted(deleted.id)
        .await?
        .is_some());

    Ok(())
}

/// Tests finding a satellite that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Satellite).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SatelliteRepository::new(db);
    let found = repo
        .find_one(&SatelliteFilter::ById(uuid::Uuid::new_v4()))
        .await?;

    assert!(found.is_none());

    Ok(())
}
