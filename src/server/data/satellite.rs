//! Satellite data repository for database operations.
//!
//! Every read and update goes through [`SatelliteRepository::non_deleted`], so soft
//! deleted satellites are invisible to the API. Only
//! `find_one_including_deleted` bypasses the filter, for inspecting retained rows.

use chrono::Utc;
use entity::sea_orm_active_enums::DeletionOrigin;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Select,
};
use uuid::Uuid;

use crate::server::model::satellite::{
    CreateSatelliteParams, Satellite, SatelliteFilter, SatellitePatch,
};

/// Repository providing database operations for satellites.
pub struct SatelliteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SatelliteRepository<'a> {
    /// Creates a new SatelliteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds a query for the satellites matching `filter` that are not soft deleted.
    fn non_deleted(filter: &SatelliteFilter) -> Select<entity::prelude::Satellite> {
        use entity::satellite::Column;

        let query =
            entity::prelude::Satellite::find().filter(Column::Deleted.eq(false));

        match filter {
            SatelliteFilter::All => query,
            SatelliteFilter::ById(id) => query.filter(Column::Id.eq(*id)),
            SatelliteFilter::ByName(name) => query.filter(Column::Name.eq(name.as_str())),
            SatelliteFilter::ByNameOrSlug { name, slug } => query.filter(
                Condition::any()
                    .add(Column::Name.eq(name.as_str()))
                    .add(Column::Slug.eq(slug.as_str())),
            ),
        }
    }

    /// Inserts a new satellite with a generated id.
    ///
    /// Timestamps are set to the current time and the soft-delete fields start cleared.
    ///
    /// # Arguments
    /// - `params` - Validated create parameters with defaults applied
    ///
    /// # Returns
    /// - `Ok(Satellite)` - The stored satellite
    /// - `Err(DbErr)` - Database error, including a unique index violation on a
    ///   duplicate name or slug among non-deleted satellites
    pub async fn insert(&self, params: CreateSatelliteParams) -> Result<Satellite, DbErr> {
        let now = Utc::now();

        let entity = entity::satellite::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            status: ActiveValue::Set(params.status),
            orbit_longitude: ActiveValue::Set(params.orbit.longitude),
            orbit_latitude: ActiveValue::Set(params.orbit.latitude),
            orbit_inclination: ActiveValue::Set(params.orbit.inclination),
            orbit_height: ActiveValue::Set(params.orbit.height),
            company: ActiveValue::Set(params.company),
            created_by: ActiveValue::Set(params.created_by),
            updated_by: ActiveValue::Set(params.updated_by),
            creation_origin: ActiveValue::Set(params.creation_origin),
            deleted: ActiveValue::Set(false),
            deleted_at: ActiveValue::Set(None),
            deletion_origin: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Satellite::from_entity(entity))
    }

    /// Finds the first non-deleted satellite matching `filter`.
    ///
    /// # Returns
    /// - `Ok(Some(Satellite))` - A matching satellite
    /// - `Ok(None)` - No non-deleted satellite matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_one(&self, filter: &SatelliteFilter) -> Result<Option<Satellite>, DbErr> {
        let entity = Self::non_deleted(filter).one(self.db).await?;

        Ok(entity.map(Satellite::from_entity))
    }

    /// Finds every non-deleted satellite matching `filter`, ordered by name.
    pub async fn find_many(&self, filter: &SatelliteFilter) -> Result<Vec<Satellite>, DbErr> {
        let entities = Self::non_deleted(filter)
            .order_by_asc(entity::satellite::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Satellite::from_entity).collect())
    }

    /// Applies `patch` to the non-deleted satellite matching `filter`.
    ///
    /// Only the fields present in the patch are written; `updated_at` is always bumped.
    ///
    /// # Returns
    /// - `Ok(Some(Satellite))` - The satellite after the update
    /// - `Ok(None)` - No non-deleted satellite matches
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_one(
        &self,
        filter: &SatelliteFilter,
        patch: SatellitePatch,
    ) -> Result<Option<Satellite>, DbErr> {
        let Some(satellite) = Self::non_deleted(filter).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::satellite::ActiveModel = satellite.into();
        if let Some(status) = patch.status {
            active_model.status = ActiveValue::Set(status);
        }
        if let Some(orbit) = patch.orbit {
            active_model.orbit_longitude = ActiveValue::Set(orbit.longitude);
            active_model.orbit_latitude = ActiveValue::Set(orbit.latitude);
            active_model.orbit_inclination = ActiveValue::Set(orbit.inclination);
            active_model.orbit_height = ActiveValue::Set(orbit.height);
        }
        if let Some(company) = patch.company {
            active_model.company = ActiveValue::Set(company);
        }
        if let Some(updated_by) = patch.updated_by {
            active_model.updated_by = ActiveValue::Set(updated_by);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Satellite::from_entity(entity)))
    }

    /// Soft deletes the non-deleted satellite matching `filter`.
    ///
    /// The row is kept; `deleted`, `deleted_at` and `deletion_origin` are set so the
    /// satellite drops out of every default query and frees its name and slug.
    ///
    /// # Returns
    /// - `Ok(Some(Satellite))` - The satellite as soft deleted
    /// - `Ok(None)` - No non-deleted satellite matches
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn soft_delete(&self, filter: &SatelliteFilter) -> Result<Option<Satellite>, DbErr> {
        let Some(satellite) = Self::non_deleted(filter).one(self.db).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut active_model: entity::satellite::ActiveModel = satellite.into();
        active_model.deleted = ActiveValue::Set(true);
        active_model.deleted_at = ActiveValue::Set(Some(now));
        active_model.deletion_origin = ActiveValue::Set(Some(DeletionOrigin::Manual));
        active_model.updated_at = ActiveValue::Set(now);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Satellite::from_entity(entity)))
    }

    /// Finds a satellite by id whether or not it has been soft deleted.
    #[cfg(test)]
    pub async fn find_one_including_deleted(&self, id: Uuid) -> Result<Option<Satellite>, DbErr> {
        let entity = entity::prelude::Satellite::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Satellite::from_entity))
    }
}
