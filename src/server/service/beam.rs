use sea_orm::DatabaseConnection;

use crate::server::{
    data::beam::BeamRepository,
    error::AppError,
    model::beam::{Beam, BeamFilter, CreateBeamParams, UpdateBeamParams},
};

const BEAM_NOT_FOUND: &str = "Beam not found";

pub struct BeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a beam. Beam names need not be unique.
    pub async fn create(&self, params: CreateBeamParams) -> Result<Beam, AppError> {
        let beam = BeamRepository::new(self.db).insert(params).await?;

        tracing::info!("Created beam {} ({})", beam.name, beam.id);

        Ok(beam)
    }

    pub async fn get(&self, filter: &BeamFilter) -> Result<Beam, AppError> {
        BeamRepository::new(self.db)
            .find_one(filter)
            .await?
            .ok_or_else(|| AppError::NotFound(BEAM_NOT_FOUND.to_string()))
    }

    /// Applies a partial update to the non-deleted beam matching `filter`.
    ///
    /// # Returns
    /// - `Ok(Beam)` - The beam after the update
    /// - `Err(AppError::NotFound)` - No non-deleted beam matches
    /// - `Err(AppError::Validation)` - The submitted name is malformed
    /// - `Err(AppError::Conflict)` - The update changes `id`, `name` or `linkDirection`
    pub async fn update(
        &self,
        filter: &BeamFilter,
        params: UpdateBeamParams,
    ) -> Result<Beam, AppError> {
        let current = self.get(filter).await?;

        let patch = params.validate_against(&current)?;
        if let Some(message) = params.immutable_conflict(&current) {
            return Err(AppError::Conflict(message.to_string()));
        }

        let beam = BeamRepository::new(self.db)
            .update_one(&BeamFilter::ById(current.id), patch)
            .await?
            .ok_or_else(|| AppError::NotFound(BEAM_NOT_FOUND.to_string()))?;

        tracing::info!("Updated beam {} ({})", beam.name, beam.id);

        Ok(beam)
    }

    pub async fn soft_delete(&self, filter: &BeamFilter) -> Result<Beam, AppError> {
        let beam = BeamRepository::new(self.db)
            .soft_delete(filter)
            .await?
            .ok_or_else(|| AppError::NotFound(BEAM_NOT_FOUND.to_string()))?;

        tracing::info!("Soft deleted beam {} ({})", beam.name, beam.id);

        Ok(beam)
    }
}
