//! Transponder factory for creating test transponder entities.

use crate::factory::{helpers::next_id, satellite::deletion_triple};
use chrono::Utc;
use entity::sea_orm_active_enums::{CreationOrigin, Polarization, Status};
use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test transponders with customizable fields.
///
/// Defaults describe a Ku-band transponder: 14000 MHz uplink, 11700 MHz downlink,
/// 36 MHz bandwidth, horizontal uplink and vertical downlink polarization.
pub struct TransponderFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    ul_polarization: Polarization,
    dl_polarization: Polarization,
    bandwidth: f64,
    deleted: bool,
}

impl<'a> TransponderFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Transponder {}", id),
            ul_polarization: Polarization::H,
            dl_polarization: Polarization::V,
            bandwidth: 36.0,
            deleted: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn polarizations(mut self, ul: Polarization, dl: Polarization) -> Self {
        self.ul_polarization = ul;
        self.dl_polarization = dl;
        self
    }

    pub fn bandwidth(mut self, bandwidth: f64) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Builds and inserts the transponder entity into the database.
    pub async fn build(self) -> Result<entity::transponder::Model, DbErr> {
        let now = Utc::now();
        let (deleted_at, deletion_origin) = deletion_triple(self.deleted, now);

        entity::transponder::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            status: ActiveValue::Set(Status::Active),
            ul_polarization: ActiveValue::Set(self.ul_polarization),
            dl_polarization: ActiveValue::Set(self.dl_polarization),
            ul_frequency: ActiveValue::Set(14000.0),
            dl_frequency: ActiveValue::Set(11700.0),
            bandwidth: ActiveValue::Set(self.bandwidth),
            company: ActiveValue::Set(None),
            created_by: ActiveValue::Set(None),
            updated_by: ActiveValue::Set(None),
            creation_origin: ActiveValue::Set(CreationOrigin::Inventory),
            deleted: ActiveValue::Set(self.deleted),
            deleted_at: ActiveValue::Set(deleted_at),
            deletion_origin: ActiveValue::Set(deletion_origin),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a transponder with default values.
pub async fn create_transponder(
    db: &DatabaseConnection,
) -> Result<entity::transponder::Model, DbErr> {
    TransponderFactory::new(db).build().await
}
