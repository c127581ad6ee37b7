//! Beam factory for creating test beam entities.

use crate::factory::{helpers::next_id, satellite::deletion_triple};
use chrono::Utc;
use entity::sea_orm_active_enums::{CreationOrigin, LinkDirection};
use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test beams with customizable fields.
pub struct BeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    link_direction: LinkDirection,
    pattern: Option<String>,
    deleted: bool,
}

impl<'a> BeamFactory<'a> {
    /// Creates a new BeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Beam {id}"`
    /// - link_direction: `Uplink`
    /// - pattern: `None`
    /// - deleted: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Beam {}", id),
            link_direction: LinkDirection::Uplink,
            pattern: None,
            deleted: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn link_direction(mut self, link_direction: LinkDirection) -> Self {
        self.link_direction = link_direction;
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Builds and inserts the beam entity into the database.
    pub async fn build(self) -> Result<entity::beam::Model, DbErr> {
        let now = Utc::now();
        let (deleted_at, deletion_origin) = deletion_triple(self.deleted, now);

        entity::beam::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            link_direction: ActiveValue::Set(self.link_direction),
            pattern: ActiveValue::Set(self.pattern),
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

/// Creates an uplink beam with default values.
pub async fn create_beam(db: &DatabaseConnection) -> Result<entity::beam::Model, DbErr> {
    BeamFactory::new(db).build().await
}
