use super::*;

/// Tests finding a transponder by id.
///
/// Expected: Ok(Some) with the matching transponder
#[tokio::test]
async fn finds_transponder_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Transponder).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_transponder(db).await?;

    let repo = TransponderRepository::new(db);
    let found = repo
        .find_one(&TransponderFilter::ById(created.id))
        .await?
        .unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.ul_polarization, Polarization::H);
    assert_eq!(found.dl_polarization, Polarization::V);

    Ok(())
}

/// Tests that a soft-deleted transponder is hidden but retained.
///
/// Expected: Ok(None) from find_one, Ok(Some) from the bypass lookup
#[tokio::test]
async fn skips_soft_deleted_transponder() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Transponder).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = factory::transponder::TransponderFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    let repo = TransponderRepository::new(db);

    assert!(repo
        .find_one(&TransponderFilter::ById(deleted.id))
        .await?
        .is_none());
    assert!(repo
        .find_one(&TransponderFilter::ByName(deleted.name))
        .await?
        .is_none());
    assert!(repo
        .find_one_including_deleted(deleted.id)
        .await?
        .is_some());

    Ok(())
}
