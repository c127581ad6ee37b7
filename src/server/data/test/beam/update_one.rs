use super::*;

/// Tests updating a beam's pattern.
///
/// Expected: Ok(Some) with the new pattern and the link direction unchanged
#[tokio::test]
async fn updates_pattern() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Beam).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::beam::BeamFactory::new(db)
        .link_direction(LinkDirection::Downlink)
        .pattern("spot")
        .build()
        .await?;

    let repo = BeamRepository::new(db);
    let updated = repo
        .update_one(
            &BeamFilter::ById(created.id),
            BeamPatch {
                pattern: Some(Some("regional".to_string())),
                updated_by: Some(Some("operator".to_string())),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.pattern.as_deref(), Some("regional"));
    assert_eq!(updated.updated_by.as_deref(), Some("operator"));
    assert_eq!(updated.link_direction, LinkDirection::Downlink);

    Ok(())
}

/// Tests updating a beam that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_beam() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Beam).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeamRepository::new(db);
    let updated = repo
        .update_one(&BeamFilter::ById(uuid::Uuid::new_v4()), BeamPatch::default())
        .await?;

    assert!(updated.is_none());

    Ok(())
}
