use super::*;

/// Tests finding a beam by id.
///
/// Expected: Ok(Some) with the matching beam
#[tokio::test]
async fn finds_beam_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Beam).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_beam(db).await?;

    let repo = BeamRepository::new(db);
    let found = repo.find_one(&BeamFilter::ById(created.id)).await?;

    assert_eq!(found.map(|b| b.name), Some(created.name));

    Ok(())
}

/// Tests that soft-deleted beams are not found by id or name.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_soft_deleted_beam() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Beam).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = factory::beam::BeamFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    let repo = BeamRepository::new(db);

    assert!(repo.find_one(&BeamFilter::ById(deleted.id)).await?.is_none());
    assert!(repo
        .find_one(&BeamFilter::ByName(deleted.name))
        .await?
        .is_none());

    Ok(())
}
