use super::*;

/// Tests listing satellites.
///
/// Verifies that every non-deleted satellite is returned, ordered by name, and that
/// soft-deleted ones are left out.
///
/// Expected: Ok with the two non-deleted satellites in name order
#[tokio::test]
async fn lists_non_deleted_satellites_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Satellite).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_satellite_named(db, "ZETA", "Zeta Satellite").await?;
    factory::create_satellite_named(db, "ALPHA", "Alpha Satellite").await?;
    factory::satellite::SatelliteFactory::new(db)
        .name("BETA")
        .deleted(true)
        .build()
        .await?;

    let repo = SatelliteRepository::new(db);
    let satellites = repo.find_many(&SatelliteFilter::All).await?;

    let names: Vec<_> = satellites.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["ALPHA", "ZETA"]);

    Ok(())
}

/// Tests listing satellites from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_list_without_satellites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Satellite).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SatelliteRepository::new(db);
    let satellites = repo.find_many(&SatelliteFilter::All).await?;

    assert!(satellites.is_empty());

    Ok(())
}
