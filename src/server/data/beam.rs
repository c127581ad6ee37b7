//! Beam data repository for database operations.
//!
//! Reads and updates only ever see beams that are not soft deleted.

use chrono::Utc;
use entity::sea_orm_active_enums::DeletionOrigin;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Select,
};
use uuid::Uuid;

use crate::server::model::beam::{Beam, BeamFilter, BeamPatch, CreateBeamParams};

/// Repository providing database operations for beams.
pub struct BeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn non_deleted(filter: &BeamFilter) -> Select<entity::prelude::Beam> {
        use entity::beam::Column;

        let query = entity::prelude::Beam::find().filter(Column::Deleted.eq(false));

        match filter {
            BeamFilter::All => query,
            BeamFilter::ById(id) => query.filter(Column::Id.eq(*id)),
            BeamFilter::ByName(name) => query.filter(Column::Name.eq(name.as_str())),
        }
    }

    /// Inserts a new beam with a generated id and fresh timestamps.
    pub async fn insert(&self, params: CreateBeamParams) -> Result<Beam, DbErr> {
        let now = Utc::now();

        let entity = entity::beam::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            link_direction: ActiveValue::Set(params.link_direction),
            pattern: ActiveValue::Set(params.pattern),
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

        Ok(Beam::from_entity(entity))
    }

    pub async fn find_one(&self, filter: &BeamFilter) -> Result<Option<Beam>, DbErr> {
        let entity = Self::non_deleted(filter).one(self.db).await?;

        Ok(entity.map(Beam::from_entity))
    }

    /// Finds every non-deleted beam matching `filter`, ordered by name.
    #[allow(dead_code)]
    pub async fn find_many(&self, filter: &BeamFilter) -> Result<Vec<Beam>, DbErr> {
        let entities = Self::non_deleted(filter)
            .order_by_asc(entity::beam::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Beam::from_entity).collect())
    }

    /// Applies `patch` to the non-deleted beam matching `filter`.
    ///
    /// # Returns
    /// - `Ok(Some(Beam))` - The beam after the update
    /// - `Ok(None)` - No non-deleted beam matches
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_one(
        &self,
        filter: &BeamFilter,
        patch: BeamPatch,
    ) -> Result<Option<Beam>, DbErr> {
        let Some(beam) = Self::non_deleted(filter).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::beam::ActiveModel = beam.into();
        if let Some(pattern) = patch.pattern {
            active_model.pattern = ActiveValue::Set(pattern);
        }
        if let Some(updated_by) = patch.updated_by {
            active_model.updated_by = ActiveValue::Set(updated_by);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Beam::from_entity(entity)))
    }

    /// Soft deletes the non-deleted beam matching `filter`, keeping the row.
    pub async fn soft_delete(&self, filter: &BeamFilter) -> Result<Option<Beam>, DbErr> {
        let Some(beam) = Self::non_deleted(filter).one(self.db).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut active_model: entity::beam::ActiveModel = beam.into();
        active_model.deleted = ActiveValue::Set(true);
        active_model.deleted_at = ActiveValue::Set(Some(now));
        active_model.deletion_origin = ActiveValue::Set(Some(DeletionOrigin::Manual));
        active_model.updated_at = ActiveValue::Set(now);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Beam::from_entity(entity)))
    }

    #[cfg(test)]
    pub async fn find_one_including_deleted(&self, id: Uuid) -> Result<Option<Beam>, DbErr> {
        let entity = entity::prelude::Beam::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Beam::from_entity))
    }
}
