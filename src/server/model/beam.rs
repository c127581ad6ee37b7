//! Beam domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{CreationOrigin, DeletionOrigin, LinkDirection};
use uuid::Uuid;

use crate::{
    model::beam::{BeamDto, BeamSummaryDto, BeamViewDto, CreateBeamDto, UpdateBeamDto},
    server::{
        error::validation::ValidationError,
        model::common::DetailLevel,
        util::validate::{check_name, is_present},
    },
};

const REQUIRED_FIELDS: &str = "'name' and 'linkDirection'";

/// Beam record as stored, including soft-delete metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Beam {
    pub id: Uuid,
    pub name: String,
    pub link_direction: LinkDirection,
    /// Free-form antenna pattern reference.
    pub pattern: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub creation_origin: CreationOrigin,
    pub deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deletion_origin: Option<DeletionOrigin>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Beam {
    pub fn from_entity(entity: entity::beam::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            link_direction: entity.link_direction,
            pattern: entity.pattern,
            created_by: entity.created_by,
            updated_by: entity.updated_by,
            creation_origin: entity.creation_origin,
            deleted: entity.deleted,
            deleted_at: entity.deleted_at,
            deletion_origin: entity.deletion_origin,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BeamDto {
        BeamDto {
            id: self.id,
            name: self.name,
            link_direction: self.link_direction.into(),
            pattern: self.pattern,
            created_by: self.created_by,
            updated_by: self.updated_by,
            creation_origin: self.creation_origin.into(),
            deleted: self.deleted,
            deleted_at: self.deleted_at,
            deletion_origin: self.deletion_origin.map(Into::into),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_summary_dto(self) -> BeamSummaryDto {
        BeamSummaryDto {
            id: self.id,
            name: self.name,
            link_direction: self.link_direction.into(),
        }
    }

    pub fn into_view_dto(self, detail: DetailLevel) -> BeamViewDto {
        match detail {
            DetailLevel::Full => BeamViewDto::Detailed(self.into_dto()),
            DetailLevel::Summary => BeamViewDto::Summary(self.into_summary_dto()),
        }
    }
}

/// Selects beams by a single criterion, always combined with `deleted = false`.
#[derive(Debug, Clone, PartialEq)]
pub enum BeamFilter {
    #[allow(dead_code)]
    All,
    ById(Uuid),
    #[allow(dead_code)]
    ByName(String),
}

#[derive(Debug, Clone)]
pub struct CreateBeamParams {
    pub name: String,
    pub link_direction: LinkDirection,
    pub pattern: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub creation_origin: CreationOrigin,
}

impl CreateBeamParams {
    /// Validates a create request and resolves its defaults.
    ///
    /// # Returns
    /// - `Ok(CreateBeamParams)` - Name and link direction present, name well formed
    /// - `Err(ValidationError)` - The first rule the input violates
    pub fn from_dto(dto: CreateBeamDto) -> Result<Self, ValidationError> {
        if !is_present(&dto.name) {
            return Err(ValidationError::MissingFields(REQUIRED_FIELDS));
        }
        let (Some(name), Some(link_direction)) = (dto.name, dto.link_direction) else {
            return Err(ValidationError::MissingFields(REQUIRED_FIELDS));
        };

        check_name("name", &name)?;

        Ok(Self {
            name: name.trim().to_string(),
            link_direction: link_direction.into(),
            pattern: dto.pattern,
            created_by: dto.created_by,
            updated_by: dto.updated_by,
            creation_origin: dto
                .creation_origin
                .map(Into::into)
                .unwrap_or(CreationOrigin::Inventory),
        })
    }
}

/// Unvalidated partial update of a beam.
#[derive(Debug, Clone, Default)]
pub struct UpdateBeamParams {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub link_direction: Option<LinkDirection>,
    pub pattern: Option<Option<String>>,
    pub updated_by: Option<Option<String>>,
}

/// Fields of a beam that an update may change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeamPatch {
    pub pattern: Option<Option<String>>,
    pub updated_by: Option<Option<String>>,
}

impl UpdateBeamParams {
    pub fn from_dto(dto: UpdateBeamDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            link_direction: dto.link_direction.map(Into::into),
            pattern: dto.pattern,
            updated_by: dto.updated_by,
        }
    }

    pub fn validate_against(&self, _current: &Beam) -> Result<BeamPatch, ValidationError> {
        if let Some(name) = &self.name {
            check_name("name", name)?;
        }

        Ok(BeamPatch {
            pattern: self.pattern.clone(),
            updated_by: self.updated_by.clone(),
        })
    }

    /// Returns the conflict message if the update would change an immutable field.
    ///
    /// A beam keeps its id, name and link direction for its whole life.
    pub fn immutable_conflict(&self, current: &Beam) -> Option<&'static str> {
        if self.id.is_some_and(|id| id != current.id) {
            return Some("Beam internal ID cannot be modified. It is immutable.");
        }
        if self
            .name
            .as_deref()
            .is_some_and(|name| name.trim() != current.name)
        {
            return Some("Beam name cannot be modified. It is immutable.");
        }
        if self
            .link_direction
            .is_some_and(|direction| direction != current.link_direction)
        {
            return Some("Beam link direction cannot be modified. It is immutable.");
        }

        None
    }
}
