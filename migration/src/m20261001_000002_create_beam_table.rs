use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Beam::Table)
                    .if_not_exists()
                    .col(pk_uuid(Beam::Id))
                    .col(string(Beam::Name))
                    .col(string(Beam::LinkDirection))
                    .col(string_null(Beam::Pattern))
                    .col(string_null(Beam::CreatedBy))
                    .col(string_null(Beam::UpdatedBy))
                    .col(string(Beam::CreationOrigin).default("inventory"))
                    .col(boolean(Beam::Deleted).default(false))
                    .col(timestamp_with_time_zone_null(Beam::DeletedAt))
                    .col(string_null(Beam::DeletionOrigin))
                    .col(timestamp_with_time_zone(Beam::CreatedAt))
                    .col(timestamp_with_time_zone(Beam::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Beam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Beam {
    Table,
    Id,
    Name,
    LinkDirection,
    Pattern,
    CreatedBy,
    UpdatedBy,
    CreationOrigin,
    Deleted,
    DeletedAt,
    DeletionOrigin,
    CreatedAt,
    UpdatedAt,
}
