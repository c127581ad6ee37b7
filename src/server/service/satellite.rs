//! Satellite business logic.
//!
//! Runs the checks that need stored state: the name/slug uniqueness pre-check on create
//! and, on update, merged-record validation followed by the immutable-field check.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::satellite::SatelliteRepository,
    error::AppError,
    model::satellite::{
        CreateSatelliteParams, Satellite, SatelliteFilter, UpdateSatelliteParams,
    },
};

const DUPLICATE_SATELLITE: &str =
    "The provided satellite 'name' or 'slug' already exists in database.";
const SATELLITE_NOT_FOUND: &str = "Satellite not found";

pub struct SatelliteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SatelliteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a satellite after checking that its name and slug are free.
    ///
    /// The lookup only gives an early, friendly answer. Two concurrent creates can both
    /// pass it, in which case the partial unique index rejects the second insert and the
    /// violation is reported as the same conflict.
    ///
    /// # Arguments
    /// - `params` - Validated create parameters
    ///
    /// # Returns
    /// - `Ok(Satellite)` - The created satellite
    /// - `Err(AppError::Conflict)` - A non-deleted satellite already uses the name or slug
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateSatelliteParams) -> Result<Satellite, AppError> {
        let repo = SatelliteRepository::new(self.db);

        let existing = repo
            .find_one(&SatelliteFilter::ByNameOrSlug {
                name: params.name.clone(),
                slug: params.slug.clone(),
            })
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(DUPLICATE_SATELLITE.to_string()));
        }

        let satellite = repo
            .insert(params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, DUPLICATE_SATELLITE))?;

        tracing::info!("Created satellite {} ({})", satellite.name, satellite.id);

        Ok(satellite)
    }

    /// Gets the non-deleted satellite matching `filter`.
    ///
    /// # Returns
    /// - `Ok(Satellite)` - The matching satellite
    /// - `Err(AppError::NotFound)` - No non-deleted satellite matches
    pub async fn get(&self, filter: &SatelliteFilter) -> Result<Satellite, AppError> {
        SatelliteRepository::new(self.db)
            .find_one(filter)
            .await?
            .ok_or_else(|| AppError::NotFound(SATELLITE_NOT_FOUND.to_string()))
    }

    /// Gets every non-deleted satellite, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Satellite>, AppError> {
        let satellites = SatelliteRepository::new(self.db)
            .find_many(&SatelliteFilter::All)
            .await?;

        Ok(satellites)
    }

    /// Applies a partial update to the non-deleted satellite matching `filter`.
    ///
    /// Steps run in order and stop at the first failure: lookup, validation of the
    /// merged record, then the immutable-field check. Storage is only written once all
    /// of them pass.
    ///
    /// # Returns
    /// - `Ok(Satellite)` - The satellite after the update
    /// - `Err(AppError::NotFound)` - No non-deleted satellite matches
    /// - `Err(AppError::Validation)` - The merged record is invalid
    /// - `Err(AppError::Conflict)` - The update changes `id`, `name` or `slug`
    pub async fn update(
        &self,
        filter: &SatelliteFilter,
        params: UpdateSatelliteParams,
    ) -> Result<Satellite, AppError> {
        let current = self.get(filter).await?;

        let patch = params.validate_against(&current)?;
        if let Some(message) = params.immutable_conflict(&current) {
            return Err(AppError::Conflict(message.to_string()));
        }

        let satellite = SatelliteRepository::new(self.db)
            .update_one(&SatelliteFilter::ById(current.id), patch)
            .await?
            .ok_or_else(|| AppError::NotFound(SATELLITE_NOT_FOUND.to_string()))?;

        tracing::info!("Updated satellite {} ({})", satellite.name, satellite.id);

        Ok(satellite)
    }

    /// Soft deletes the non-deleted satellite matching `filter`.
    ///
    /// # Returns
    /// - `Ok(Satellite)` - The satellite with its soft-delete fields set
    /// - `Err(AppError::NotFound)` - No non-deleted satellite matches
    pub async fn soft_delete(&self, filter: &SatelliteFilter) -> Result<Satellite, AppError> {
        let satellite = SatelliteRepository::new(self.db)
            .soft_delete(filter)
            .await?
            .ok_or_else(|| AppError::NotFound(SATELLITE_NOT_FOUND.to_string()))?;

        tracing::info!("Soft deleted satellite {} ({})", satellite.name, satellite.id);

        Ok(satellite)
    }
}
