use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Satellite::Table)
                    .if_not_exists()
                    .col(pk_uuid(Satellite::Id))
                    .col(string(Satellite::Name))
                    .col(string(Satellite::Slug))
                    .col(string(Satellite::Status).default("active"))
                    .col(double(Satellite::OrbitLongitude))
                    .col(double(Satellite::OrbitLatitude).default(0.0))
                    .col(double(Satellite::OrbitInclination).default(0.0))
                    .col(double(Satellite::OrbitHeight).default(35786.063))
                    .col(string_null(Satellite::Company))
                    .col(string_null(Satellite::CreatedBy))
                    .col(string_null(Satellite::UpdatedBy))
                    .col(string(Satellite::CreationOrigin).default("inventory"))
                    .col(boolean(Satellite::Deleted).default(false))
                    .col(timestamp_with_time_zone_null(Satellite::DeletedAt))
                    .col(string_null(Satellite::DeletionOrigin))
                    .col(timestamp_with_time_zone(Satellite::CreatedAt))
                    .col(timestamp_with_time_zone(Satellite::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Satellite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Satellite {
    Table,
    Id,
    Name,
    Slug,
    Status,
    OrbitLongitude,
    OrbitLatitude,
    OrbitInclination,
    OrbitHeight,
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
