use super::*;

/// Tests updating a satellite's orbit and status.
///
/// Verifies that only the patched fields change and that `updated_at` moves forward.
///
/// Expected: Ok(Some) with updated satellite
#[tokio::test]
async fn updates_patched_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Satellite).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::satellite::SatelliteFactory::new(db)
        .company("GMV")
        .build()
        .await?;

    let repo = SatelliteRepository::new(db);
    let patch = SatellitePatch {
        status: Some(Status::Inactive),
        orbit: Some(Orbit {
            longitude: created.orbit_longitude,
            latitude: 45.0,
            inclination: 0.0,
            height: 35786.063,
        }),
        ..Default::default()
    };
    let updated = repo
        .update_one(&SatelliteFilter::ById(created.id), patch)
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.status, Status::Inactive);
    assert_eq!(updated.orbit.latitude, 45.0);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.company.as_deref(), Some("GMV"));
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests clearing a nullable field.
///
/// Expected: Ok(Some) with company cleared
#[tokio::test]
async fn clears_company_with_explicit_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Satellite).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::satellite::SatelliteFactory::new(db)
        .company("GMV")
        .build()
        .await?;

    let repo = SatelliteRepository::new(db);
    let patch = SatellitePatch {
        company: Some(None),
        ..Default::default()
    };
    let updated = repo
        .update_one(&SatelliteFilter::ById(created.id), patch)
        .await?
        .unwrap();

    assert!(updated.company.is_none());

    Ok(())
}

/// Tests that soft-deleted satellites cannot be updated.
///
/// Expected: Ok(None) and the stored row left untouched
#[tokio::test]
async fn does_not_update_soft_deleted_satellite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Satellite).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = factory::satellite::SatelliteFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    let repo = SatelliteRepository::new(db);
    let patch = SatellitePatch {
        status: Some(Status::Inactive),
        ..Default::default()
    };
    let updated = repo
        .update_one(&SatelliteFilter::ById(deleted.id), patch)
        .await?;

    assert!(updated.is_none());
    let stored = repo.find_one_including_deleted(deleted.id).await?.unwrap();
    assert_eq!(stored.status, Status::Active);

    Ok(())
}
