use super::*;

/// Tests soft deleting a beam.
///
/// Expected: Ok(Some) with the soft-delete triple set and the row retained
#[tokio::test]
async fn soft_deletes_beam() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Beam).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_beam(db).await?;

    let repo = BeamRepository::new(db);
    let deleted = repo
        .soft_delete(&BeamFilter::ById(created.id))
        .await?
        .unwrap();

    assert!(deleted.deleted);
    assert!(deleted.deleted_at.is_some());
    assert_eq!(deleted.deletion_origin, Some(DeletionOrigin::Manual));
    assert!(repo.find_one(&BeamFilter::ById(created.id)).await?.is_none());
    assert!(repo
        .find_one_including_deleted(created.id)
        .await?
        .is_some());

    Ok(())
}
