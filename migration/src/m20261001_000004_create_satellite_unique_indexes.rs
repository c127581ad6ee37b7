use sea_orm_migration::prelude::*;

/// Satellite `name` and `slug` are only unique among rows that are not soft
/// deleted, so a deleted satellite's name can be reused.
///
/// The schema builder has no partial index support, hence the raw statements.
/// `NOT deleted` is valid for both the SQLite and Postgres boolean encodings.
const PARTIAL_INDEXES: [(&str, &str); 2] = [
    ("idx_satellite_name_not_deleted", "name"),
    ("idx_satellite_slug_not_deleted", "slug"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for (index, column) in PARTIAL_INDEXES {
            db.execute_unprepared(&format!(
                "CREATE UNIQUE INDEX IF NOT EXISTS {index} ON satellite ({column}) WHERE NOT deleted"
            ))
            .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        for (index, _) in PARTIAL_INDEXES {
            db.execute_unprepared(&format!("DROP INDEX IF EXISTS {index}"))
                .await?;
        }

        Ok(())
    }
}
