use super::*;

/// Tests listing beams.
///
/// Expected: Ok with only non-deleted beams, ordered by name
#[tokio::test]
async fn lists_non_deleted_beams_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Beam).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::beam::BeamFactory::new(db).name("Beam B").build().await?;
    factory::beam::BeamFactory::new(db).name("Beam A").build().await?;
    factory::beam::BeamFactory::new(db)
        .name("Beam C")
        .deleted(true)
        .build()
        .await?;

    let repo = BeamRepository::new(db);
    let beams = repo.find_many(&BeamFilter::All).await?;

    let names: Vec<_> = beams.into_iter().map(|b| b.name).collect();
    assert_eq!(names, vec!["Beam A", "Beam B"]);

    Ok(())
}
