//! Satellite factory for creating test satellite entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{CreationOrigin, DeletionOrigin, Status};
use sea_orm::{prelude::Uuid, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test satellites with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::satellite::SatelliteFactory;
///
/// let satellite = SatelliteFactory::new(&db)
///     .name("GMVSAT")
///     .orbit_longitude(-30.0)
///     .build()
///     .await?;
/// ```
pub struct SatelliteFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    status: Status,
    orbit_longitude: f64,
    orbit_latitude: f64,
    company: Option<String>,
    deleted: bool,
}

impl<'a> SatelliteFactory<'a> {
    /// Creates a new SatelliteFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Satellite {id}"`
    /// - slug: `"Satellite Slug {id}"`
    /// - status: `Active`
    /// - orbit: longitude `45.0`, latitude `0.0`, inclination `0.0`, height `35786.063`
    /// - company: `None`
    /// - deleted: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Satellite {}", id),
            slug: format!("Satellite Slug {}", id),
            status: Status::Active,
            orbit_longitude: 45.0,
            orbit_latitude: 0.0,
            company: None,
            deleted: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn orbit_longitude(mut self, longitude: f64) -> Self {
        self.orbit_longitude = longitude;
        self
    }

    pub fn orbit_latitude(mut self, latitude: f64) -> Self {
        self.orbit_latitude = latitude;
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Marks the satellite as soft deleted, filling the whole soft-delete triple.
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Builds and inserts the satellite entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::satellite::Model)` - Created satellite entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::satellite::Model, DbErr> {
        let now = Utc::now();
        let (deleted_at, deletion_origin) = deletion_triple(self.deleted, now);

        entity::satellite::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            status: ActiveValue::Set(self.status),
            orbit_longitude: ActiveValue::Set(self.orbit_longitude),
            orbit_latitude: ActiveValue::Set(self.orbit_latitude),
            orbit_inclination: ActiveValue::Set(0.0),
            orbit_height: ActiveValue::Set(35786.063),
            company: ActiveValue::Set(self.company),
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

/// Returns the `deleted_at`/`deletion_origin` pair matching a `deleted` flag.
pub(crate) fn deletion_triple(
    deleted: bool,
    now: DateTime<Utc>,
) -> (Option<DateTime<Utc>>, Option<DeletionOrigin>) {
    if deleted {
        (Some(now), Some(DeletionOrigin::Manual))
    } else {
        (None, None)
    }
}

/// Creates a satellite with default values.
///
/// Shorthand for `SatelliteFactory::new(db).build().await`.
pub async fn create_satellite(db: &DatabaseConnection) -> Result<entity::satellite::Model, DbErr> {
    SatelliteFactory::new(db).build().await
}

/// Creates a satellite with a specific name and slug.
///
/// # Example
///
/// ```rust,ignore
/// let satellite = create_satellite_named(&db, "GMVSAT", "GMV Satellite").await?;
/// ```
pub async fn create_satellite_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
    slug: impl Into<String>,
) -> Result<entity::satellite::Model, DbErr> {
    SatelliteFactory::new(db).name(name).slug(slug).build().await
}
