pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_satellite_table;
mod m20261001_000002_create_beam_table;
mod m20261001_000003_create_transponder_table;
mod m20261001_000004_create_satellite_unique_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_satellite_table::Migration),
            Box::new(m20261001_000002_create_beam_table::Migration),
            Box::new(m20261001_000003_create_transponder_table::Migration),
            Box::new(m20261001_000004_create_satellite_unique_indexes::Migration),
        ]
    }
}
