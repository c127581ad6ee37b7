use super::*;

/// Tests inserting a new satellite.
///
/// Verifies that the repository stores every field, generates an id and starts the
/// soft-delete fields cleared.
///
/// Expected: Ok with satellite stored
#[tokio::test]
async fn inserts_satellite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Satellite).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SatelliteRepository::new(db);
    let satellite = repo.insert(create_params("GMVSAT", "GMV Satellite")).await?;

    assert_eq!(satellite.name, "GMVSAT");
    assert_eq!(satellite.slug, "GMV Satellite");
    assert_eq!(satellite.orbit.longitude, -30.0);
    assert_eq!(satellite.company.as_deref(), Some("GMV"));
    assert!(!satellite.deleted);
    assert!(satellite.deleted_at.is_none());
    assert!(satellite.deletion_origin.is_none());
    assert_eq!(satellite.created_at, satellite.updated_at);

    let stored = entity::prelude::Satellite::find_by_id(satellite.id)
        .one(db)
        .await?;
    assert!(stored.is_some());
    assert_eq!(stored.unwrap().orbit_height, 35786.063);

    Ok(())
}

/// Tests that the partial unique index rejects a duplicate name.
///
/// Verifies that storage refuses a second non-deleted satellite with the same name even
/// when no service pre-check ran.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name_among_non_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SatelliteRepository::new(db);
    repo.insert(create_params("GMVSAT", "GMV Satellite")).await?;

    let result = repo.insert(create_params("GMVSAT", "Other Satellite")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that a soft-deleted satellite frees its name and slug.
///
/// Verifies that the partial unique index only covers non-deleted rows.
///
/// Expected: Ok with second satellite stored
#[tokio::test]
async fn allows_reusing_name_of_soft_deleted_satellite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::satellite::SatelliteFactory::new(db)
        .name("GMVSAT")
        .slug("GMV Satellite")
        .deleted(true)
        .build()
        .await?;

    let repo = SatelliteRepository::new(db);
    let satellite = repo.insert(create_params("GMVSAT", "GMV Satellite")).await?;

    assert_eq!(satellite.name, "GMVSAT");
    assert!(!satellite.deleted);

    Ok(())
}
