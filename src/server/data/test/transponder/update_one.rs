use super::*;

/// Tests updating a transponder's bandwidth and status.
///
/// Expected: Ok(Some) with patched fields and the frequencies unchanged
#[tokio::test]
async fn updates_patched_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Transponder).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_transponder(db).await?;

    let repo = TransponderRepository::new(db);
    let updated = repo
        .update_one(
            &TransponderFilter::ById(created.id),
            TransponderPatch {
                status: Some(Status::Inactive),
                bandwidth: Some(72.0),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, Status::Inactive);
    assert_eq!(updated.bandwidth, 72.0);
    assert_eq!(updated.ul_frequency, created.ul_frequency);
    assert_eq!(updated.dl_frequency, created.dl_frequency);

    Ok(())
}
