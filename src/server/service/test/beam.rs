use super::*;
use crate::server::{
    model::beam::{BeamFilter, UpdateBeamParams},
    service::beam::BeamService,
};
use entity::sea_orm_active_enums::LinkDirection;

/// Tests changing a beam's link direction.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_link_direction_change() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::beam::BeamFactory::new(db)
        .link_direction(LinkDirection::Uplink)
        .build()
        .await?;

    let service = BeamService::new(db);
    let result = service
        .update(
            &BeamFilter::ById(created.id),
            UpdateBeamParams {
                link_direction: Some(LinkDirection::Downlink),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests changing a beam's pattern while resending its link direction.
///
/// Expected: Ok with the new pattern
#[tokio::test]
async fn updates_pattern_with_unchanged_link_direction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_beam(db).await?;

    let service = BeamService::new(db);
    let updated = service
        .update(
            &BeamFilter::ById(created.id),
            UpdateBeamParams {
                link_direction: Some(created.link_direction),
                pattern: Some(Some("regional".to_string())),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.pattern.as_deref(), Some("regional"));

    Ok(())
}

/// Tests deleting a beam twice.
///
/// Expected: Ok on the first call, Err(NotFound) on the second
#[tokio::test]
async fn second_delete_returns_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_beam(db).await?;

    let service = BeamService::new(db);
    service.soft_delete(&BeamFilter::ById(created.id)).await?;
    let result = service.soft_delete(&BeamFilter::ById(created.id)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
