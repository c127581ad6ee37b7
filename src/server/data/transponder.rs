//! Transponder data repository for database operations.
//!
//! Like the other fleet repositories, every read and update is scoped to transponders
//! that are not soft deleted.

use chrono::Utc;
use entity::sea_orm_active_enums::DeletionOrigin;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Select,
};
use uuid::Uuid;

use crate::server::model::transponder::{
    CreateTransponderParams, Transponder, TransponderFilter, TransponderPatch,
};

/// Repository providing database operations for transponders.
pub struct TransponderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransponderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds a query for the transponders matching `filter` that are not soft deleted.
    fn non_deleted(filter: &TransponderFilter) -> Select<entity::prelude::Transponder> {
        use entity::transponder::Column;

        let query = entity::prelude::Transponder::find().filter(Column::Deleted.eq(false));

        match filter {
            TransponderFilter::All => query,
            TransponderFilter::ById(id) => query.filter(Column::Id.eq(*id)),
            TransponderFilter::ByName(name) => query.filter(Column::Name.eq(name.as_str())),
        }
    }

    /// Inserts a new transponder.
    ///
    /// # Arguments
    /// - `params` - Validated create parameters with defaults applied
    ///
    /// # Returns
    /// - `Ok(Transponder)` - The stored transponder with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert(&self, params: CreateTransponderParams) -> Result<Transponder, DbErr> {
        let now = Utc::now();

        let entity = entity::transponder::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            status: ActiveValue::Set(params.status),
            ul_polarization: ActiveValue::Set(params.ul_polarization),
            dl_polarization: ActiveValue::Set(params.dl_polarization),
            ul_frequency: ActiveValue::Set(params.ul_frequency),
            dl_frequency: ActiveValue::Set(params.dl_frequency),
            bandwidth: ActiveValue::Set(params.bandwidth),
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

        Ok(Transponder::from_entity(entity))
    }

    pub async fn find_one(
        &self,
        filter: &TransponderFilter,
    ) -> Result<Option<Transponder>, DbErr> {
        let entity = Self::non_deleted(filter).one(self.db).await?;

        Ok(entity.map(Transponder::from_entity))
    }

    #[allow(dead_code)]
    pub async fn find_many(&self, filter: &TransponderFilter) -> Result<Vec<Transponder>, DbErr> {
        let entities = Self::non_deleted(filter)
            .order_by_asc(entity::transponder::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Transponder::from_entity).collect())
    }

    /// Applies `patch` to the non-deleted transponder matching `filter`.
    ///
    /// # Returns
    /// - `Ok(Some(Transponder))` - The transponder after the update
    /// - `Ok(None)` - No non-deleted transponder matches
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_one(
        &self,
        filter: &TransponderFilter,
        patch: TransponderPatch,
    ) -> Result<Option<Transponder>, DbErr> {
        let Some(transponder) = Self::non_deleted(filter).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::transponder::ActiveModel = transponder.into();
        if let Some(status) = patch.status {
            active_model.status = ActiveValue::Set(status);
        }
        if let Some(ul_frequency) = patch.ul_frequency {
            active_model.ul_frequency = ActiveValue::Set(ul_frequency);
        }
        if let Some(dl_frequency) = patch.dl_frequency {
            active_model.dl_frequency = ActiveValue::Set(dl_frequency);
        }
        if let Some(bandwidth) = patch.bandwidth {
            active_model.bandwidth = ActiveValue::Set(bandwidth);
        }
        if let Some(company) = patch.company {
            active_model.company = ActiveValue::Set(company);
        }
        if let Some(updated_by) = patch.updated_by {
            active_model.updated_by = ActiveValue::Set(updated_by);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Transponder::from_entity(entity)))
    }

    /// Soft deletes the non-deleted transponder matching `filter`.
    ///
    /// # Returns
    /// - `Ok(Some(Transponder))` - The transponder with its soft-delete fields set
    /// - `Ok(None)` - No non-deleted transponder matches
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn soft_delete(
        &self,
        filter: &TransponderFilter,
    ) -> Result<Option<Transponder>, DbErr> {
        let Some(transponder) = Self::non_deleted(filter).one(self.db).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut active_model: entity::transponder::ActiveModel = transponder.into();
        active_model.deleted = ActiveValue::Set(true);
        active_model.deleted_at = ActiveValue::Set(Some(now));
        active_model.deletion_origin = ActiveValue::Set(Some(DeletionOrigin::Manual));
        active_model.updated_at = ActiveValue::Set(now);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Transponder::from_entity(entity)))
    }

    /// Finds a transponder by id whether or not it has been soft deleted.
    #[cfg(test)]
    pub async fn find_one_including_deleted(
        &self,
        id: Uuid,
    ) -> Result<Option<Transponder>, DbErr> {
        let entity = entity::prelude::Transponder::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Transponder::from_entity))
    }
}
