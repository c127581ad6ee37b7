use sea_orm::DatabaseConnection;

use crate::server::{
    data::transponder::TransponderRepository,
    error::AppError,
    model::transponder::{
        CreateTransponderParams, Transponder, TransponderFilter, UpdateTransponderParams,
    },
};

const TRANSPONDER_NOT_FOUND: &str = "Transponder not found";

pub struct TransponderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransponderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTransponderParams) -> Result<Transponder, AppError> {
        let transponder = TransponderRepository::new(self.db).insert(params).await?;

        tracing::info!(
            "Created transponder {} ({})",
            transponder.name,
            transponder.id
        );

        Ok(transponder)
    }

    /// Gets the non-deleted transponder matching `filter`.
    ///
    /// # Returns
    /// - `Ok(Transponder)` - The matching transponder
    /// - `Err(AppError::NotFound)` - No non-deleted transponder matches
    pub async fn get(&self, filter: &TransponderFilter) -> Result<Transponder, AppError> {
        TransponderRepository::new(self.db)
            .find_one(filter)
            .await?
            .ok_or_else(|| AppError::NotFound(TRANSPONDER_NOT_FOUND.to_string()))
    }

    /// Applies a partial update to the non-deleted transponder matching `filter`.
    ///
    /// Frequencies and bandwidth are validated after merging with the stored values.
    /// Polarizations may be resent but must match the stored pair.
    pub async fn update(
        &self,
        filter: &TransponderFilter,
        params: UpdateTransponderParams,
    ) -> Result<Transponder, AppError> {
        let current = self.get(filter).await?;

        let patch = params.validate_against(&current)?;
        if let Some(message) = params.immutable_conflict(&current) {
            return Err(AppError::Conflict(message.to_string()));
        }

        let transponder = TransponderRepository::new(self.db)
            .update_one(&TransponderFilter::ById(current.id), patch)
            .await?
            .ok_or_else(|| AppError::NotFound(TRANSPONDER_NOT_FOUND.to_string()))?;

        tracing::info!(
            "Updated transponder {} ({})",
            transponder.name,
            transponder.id
        );

        Ok(transponder)
    }

    pub async fn soft_delete(&self, filter: &TransponderFilter) -> Result<Transponder, AppError> {
        let transponder = TransponderRepository::new(self.db)
            .soft_delete(filter)
            .await?
            .ok_or_else(|| AppError::NotFound(TRANSPONDER_NOT_FOUND.to_string()))?;

        tracing::info!(
            "Soft deleted transponder {} ({})",
            transponder.name,
            transponder.id
        );

        Ok(transponder)
    }
}
