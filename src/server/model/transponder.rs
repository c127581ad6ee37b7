//! Transponder domain models and parameters.
//!
//! Frequencies and bandwidth are in MHz and must stay strictly positive, both on create
//! and after an update is merged onto the stored record. Uplink and downlink
//! polarizations are fixed as a pair once the transponder exists.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{CreationOrigin, DeletionOrigin, Polarization, Status};
use uuid::Uuid;

use crate::{
    model::transponder::{
        CreateTransponderDto, TransponderDto, TransponderSummaryDto, TransponderViewDto,
        UpdateTransponderDto,
    },
    server::{
        error::validation::ValidationError,
        model::common::DetailLevel,
        util::validate::{check_name, check_positive, is_present},
    },
};

const REQUIRED_FIELDS: &str =
    "'name', 'UL_polarization', 'DL_polarization', 'UL_frequency', 'DL_frequency' and 'bandwidth'";

/// Transponder record as stored, including soft-delete metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Transponder {
    pub id: Uuid,
    pub name: String,
    pub status: Status,
    pub ul_polarization: Polarization,
    pub dl_polarization: Polarization,
    pub ul_frequency: f64,
    pub dl_frequency: f64,
    pub bandwidth: f64,
    pub company: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub creation_origin: CreationOrigin,
    pub deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deletion_origin: Option<DeletionOrigin>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transponder {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::transponder::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            status: entity.status,
            ul_polarization: entity.ul_polarization,
            dl_polarization: entity.dl_polarization,
            ul_frequency: entity.ul_frequency,
            dl_frequency: entity.dl_frequency,
            bandwidth: entity.bandwidth,
            company: entity.company,
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

    /// Converts the domain model to the full DTO for API responses.
    pub fn into_dto(self) -> TransponderDto {
        TransponderDto {
            id: self.id,
            name: self.name,
            status: self.status.into(),
            ul_polarization: self.ul_polarization.into(),
            dl_polarization: self.dl_polarization.into(),
            ul_frequency: self.ul_frequency,
            dl_frequency: self.dl_frequency,
            bandwidth: self.bandwidth,
            company: self.company,
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

    pub fn into_summary_dto(self) -> TransponderSummaryDto {
        TransponderSummaryDto {
            id: self.id,
            name: self.name,
        }
    }

    pub fn into_view_dto(self, detail: DetailLevel) -> TransponderViewDto {
        match detail {
            DetailLevel::Full => TransponderViewDto::Detailed(self.into_dto()),
            DetailLevel::Summary => TransponderViewDto::Summary(self.into_summary_dto()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransponderFilter {
    #[allow(dead_code)]
    All,
    ById(Uuid),
    #[allow(dead_code)]
    ByName(String),
}

/// Validated parameters for creating a transponder.
#[derive(Debug, Clone)]
pub struct CreateTransponderParams {
    pub name: String,
    pub status: Status,
    pub ul_polarization: Polarization,
    pub dl_polarization: Polarization,
    pub ul_frequency: f64,
    pub dl_frequency: f64,
    pub bandwidth: f64,
    pub company: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub creation_origin: CreationOrigin,
}

impl CreateTransponderParams {
    /// Validates a create request and resolves its defaults.
    ///
    /// # Returns
    /// - `Ok(CreateTransponderParams)` - Every required field present and in range
    /// - `Err(ValidationError)` - The first rule the input violates
    pub fn from_dto(dto: CreateTransponderDto) -> Result<Self, ValidationError> {
        if !is_present(&dto.name) {
            return Err(ValidationError::MissingFields(REQUIRED_FIELDS));
        }
        let (
            Some(name),
            Some(ul_polarization),
            Some(dl_polarization),
            Some(ul_frequency),
            Some(dl_frequency),
            Some(bandwidth),
        ) = (
            dto.name,
            dto.ul_polarization,
            dto.dl_polarization,
            dto.ul_frequency,
            dto.dl_frequency,
            dto.bandwidth,
        )
        else {
            return Err(ValidationError::MissingFields(REQUIRED_FIELDS));
        };

        check_name("name", &name)?;
        check_positive("UL_frequency", ul_frequency)?;
        check_positive("DL_frequency", dl_frequency)?;
        check_positive("bandwidth", bandwidth)?;

        Ok(Self {
            name: name.trim().to_string(),
            status: dto.status.map(Into::into).unwrap_or(Status::Active),
            ul_polarization: ul_polarization.into(),
            dl_polarization: dl_polarization.into(),
            ul_frequency,
            dl_frequency,
            bandwidth,
            company: dto.company,
            created_by: dto.created_by,
            updated_by: dto.updated_by,
            creation_origin: dto
                .creation_origin
                .map(Into::into)
                .unwrap_or(CreationOrigin::Inventory),
        })
    }
}

/// Unvalidated partial update of a transponder.
#[derive(Debug, Clone, Default)]
pub struct UpdateTransponderParams {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub status: Option<Status>,
    pub ul_polarization: Option<Polarization>,
    pub dl_polarization: Option<Polarization>,
    pub ul_frequency: Option<f64>,
    pub dl_frequency: Option<f64>,
    pub bandwidth: Option<f64>,
    pub company: Option<Option<String>>,
    pub updated_by: Option<Option<String>>,
}

/// Fields of a transponder that an update may change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransponderPatch {
    pub status: Option<Status>,
    pub ul_frequency: Option<f64>,
    pub dl_frequency: Option<f64>,
    pub bandwidth: Option<f64>,
    pub company: Option<Option<String>>,
    pub updated_by: Option<Option<String>>,
}

impl UpdateTransponderParams {
    pub fn from_dto(dto: UpdateTransponderDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            status: dto.status.map(Into::into),
            ul_polarization: dto.ul_polarization.map(Into::into),
            dl_polarization: dto.dl_polarization.map(Into::into),
            ul_frequency: dto.ul_frequency,
            dl_frequency: dto.dl_frequency,
            bandwidth: dto.bandwidth,
            company: dto.company,
            updated_by: dto.updated_by,
        }
    }

    /// Validates the update as if applied to `current`.
    ///
    /// Frequencies and bandwidth are checked on the merged values, so an update that
    /// leaves them out is checked against what is already stored.
    pub fn validate_against(
        &self,
        current: &Transponder,
    ) -> Result<TransponderPatch, ValidationError> {
        if let Some(name) = &self.name {
            check_name("name", name)?;
        }

        check_positive(
            "UL_frequency",
            self.ul_frequency.unwrap_or(current.ul_frequency),
        )?;
        check_positive(
            "DL_frequency",
            self.dl_frequency.unwrap_or(current.dl_frequency),
        )?;
        check_positive("bandwidth", self.bandwidth.unwrap_or(current.bandwidth))?;

        Ok(TransponderPatch {
            status: self.status,
            ul_frequency: self.ul_frequency,
            dl_frequency: self.dl_frequency,
            bandwidth: self.bandwidth,
            company: self.company.clone(),
            updated_by: self.updated_by.clone(),
        })
    }

    /// Returns the conflict message if the update would change an immutable field.
    pub fn immutable_conflict(&self, current: &Transponder) -> Option<&'static str> {
        if self.id.is_some_and(|id| id != current.id) {
            return Some("Transponder internal ID cannot be modified. It is immutable.");
        }
        if self
            .name
            .as_deref()
            .is_some_and(|name| name.trim() != current.name)
        {
            return Some("Transponder name cannot be modified. It is immutable.");
        }

        let ul_changed = self
            .ul_polarization
            .is_some_and(|p| p != current.ul_polarization);
        let dl_changed = self
            .dl_polarization
            .is_some_and(|p| p != current.dl_polarization);
        if ul_changed || dl_changed {
            return Some("Transponder polarizations cannot be modified. They are immutable.");
        }

        None
    }
}
