use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transponder::Table)
                    .if_not_exists()
                    .col(pk_uuid(Transponder::Id))
                    .col(string(Transponder::Name))
                    .col(string(Transponder::Status).default("active"))
                    .col(string(Transponder::UlPolarization))
                    .col(string(Transponder::DlPolarization))
                    .col(double(Transponder::UlFrequency))
                    .col(double(Transponder::DlFrequency))
                    .col(double(Transponder::Bandwidth))
                    .col(string_null(Transponder::Company))
                    .col(string_null(Transponder::CreatedBy))
                    .col(string_null(Transponder::UpdatedBy))
                    .col(string(Transponder::CreationOrigin).default("inventory"))
                    .col(boolean(Transponder::Deleted).default(false))
                    .col(timestamp_with_time_zone_null(Transponder::DeletedAt))
                    .col(string_null(Transponder::DeletionOrigin))
                    .col(timestamp_with_time_zone(Transponder::CreatedAt))
                    .col(timestamp_with_time_zone(Transponder::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transponder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Transponder {
    Table,
    Id,
    Name,
    Status,
    UlPolarization,
    DlPolarization,
    UlFrequency,
    DlFrequency,
    Bandwidth,
    Company,
    CreatedBy,
    UpdatedBy,
    CreationOrigin,
    Deleted,
    DeletedAt,
    DeletionOrigin,
    CreatedAt,
    UpdatedAt,
}
