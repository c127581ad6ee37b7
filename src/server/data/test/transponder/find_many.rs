use super::*;

/// Tests listing transponders.
///
/// Expected: Ok with only the non-deleted transponders
#[tokio::test]
async fn lists_non_deleted_transponders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Transponder).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_transponder(db).await?;
    factory::create_transponder(db).await?;
    factory::transponder::TransponderFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    let repo = TransponderRepository::new(db);
    let transponders = repo.find_many(&TransponderFilter::All).await?;

    assert_eq!(transponders.len(), 2);
    assert!(transponders.iter().all(|t| !t.deleted));

    Ok(())
}
