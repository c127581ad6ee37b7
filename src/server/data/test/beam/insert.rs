use super::*;

/// Tests inserting a new beam.
///
/// Expected: Ok with beam stored and soft-delete fields cleared
#[tokio::test]
async fn inserts_beam() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Beam).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeamRepository::new(db);
    let beam = repo
        .insert(CreateBeamParams {
            name: "Beam A".to_string(),
            link_direction: LinkDirection::Downlink,
            pattern: Some("spot".to_string()),
            created_by: None,
            updated_by: None,
            creation_origin: CreationOrigin::Manual,
        })
        .await?;

    assert_eq!(beam.name, "Beam A");
    assert_eq!(beam.link_direction, LinkDirection::Downlink);
    assert_eq!(beam.creation_origin, CreationOrigin::Manual);
    assert!(!beam.deleted);
    assert!(repo.find_one(&BeamFilter::ById(beam.id)).await?.is_some());

    Ok(())
}

/// Tests that beam names are not unique.
///
/// Expected: Ok with both beams stored
#[tokio::test]
async fn allows_duplicate_beam_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeamRepository::new(db);
    let params = CreateBeamParams {
        name: "Beam A".to_string(),
        link_direction: LinkDirection::Uplink,
        pattern: None,
        created_by: None,
        updated_by: None,
        creation_origin: CreationOrigin::Inventory,
    };

    let first = repo.insert(params.clone()).await?;
    let second = repo.insert(params).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
