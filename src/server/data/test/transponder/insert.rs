use super::*;

/// Tests inserting a new transponder.
///
/// Expected: Ok with every radio field stored
#[tokio::test]
async fn inserts_transponder() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Transponder).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TransponderRepository::new(db);
    let transponder = repo
        .insert(CreateTransponderParams {
            name: "Transponder X".to_string(),
            status: Status::Active,
            ul_polarization: Polarization::Lhcp,
            dl_polarization: Polarization::Rhcp,
            ul_frequency: 14000.0,
            dl_frequency: 11700.0,
            bandwidth: 36.0,
            company: None,
            created_by: None,
            updated_by: None,
            creation_origin: CreationOrigin::Inventory,
        })
        .await?;

    assert_eq!(transponder.ul_polarization, Polarization::Lhcp);
    assert_eq!(transponder.dl_polarization, Polarization::Rhcp);
    assert_eq!(transponder.ul_frequency, 14000.0);
    assert_eq!(transponder.bandwidth, 36.0);
    assert!(!transponder.deleted);

    Ok(())
}
