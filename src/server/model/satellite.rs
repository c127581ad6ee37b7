//! Satellite domain models and parameters.
//!
//! A satellite carries its orbit as a nested value. The orbit is flattened into columns
//! at the repository boundary and nested again on the way out. Create and update
//! parameters validate their own input; update parameters additionally know which
//! fields are immutable once a satellite exists.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{CreationOrigin, DeletionOrigin, Status};
use uuid::Uuid;

use crate::{
    model::satellite::{
        CreateSatelliteDto, OrbitDto, OrbitInputDto, SatelliteDto, SatelliteSummaryDto,
        SatelliteViewDto, UpdateSatelliteDto,
    },
    server::{
        error::validation::ValidationError,
        model::common::DetailLevel,
        util::validate::{check_name, check_orbit, is_present, FIELD_RULES},
    },
};

const REQUIRED_FIELDS: &str = "'name', 'slug' and 'orbit'";

/// Orbital position of a satellite with every default resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub longitude: f64,
    pub latitude: f64,
    pub inclination: f64,
    /// Height above the surface in km.
    pub height: f64,
}

impl Orbit {
    /// Builds an orbit from client input, filling defaults for everything but longitude.
    ///
    /// # Returns
    /// - `Ok(Orbit)` - Longitude was provided and every value is in range
    /// - `Err(ValidationError::MissingFields)` - Longitude was omitted
    /// - `Err(ValidationError::OrbitOutOfRange)` - A value is outside its bounds
    pub fn from_input(input: &OrbitInputDto) -> Result<Self, ValidationError> {
        let longitude = input
            .longitude
            .ok_or(ValidationError::MissingFields(REQUIRED_FIELDS))?;

        let orbit = Self {
            longitude,
            latitude: input.latitude.unwrap_or(FIELD_RULES.default_latitude),
            inclination: input.inclination.unwrap_or(FIELD_RULES.default_inclination),
            height: input.height.unwrap_or(FIELD_RULES.default_height),
        };
        orbit.validate()?;

        Ok(orbit)
    }

    /// Overlays the provided values of `input` on this orbit.
    ///
    /// The result is not validated; call [`Orbit::validate`] on the merged orbit.
    pub fn with_input(&self, input: &OrbitInputDto) -> Self {
        Self {
            longitude: input.longitude.unwrap_or(self.longitude),
            latitude: input.latitude.unwrap_or(self.latitude),
            inclination: input.inclination.unwrap_or(self.inclination),
            height: input.height.unwrap_or(self.height),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_orbit(self.longitude, self.latitude, self.height)
    }

    pub fn into_dto(self) -> OrbitDto {
        OrbitDto {
            longitude: self.longitude,
            latitude: self.latitude,
            inclination: self.inclination,
            height: self.height,
        }
    }
}

/// Satellite record as stored, including soft-delete metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    pub id: Uuid,
    /// Short code, unique among non-deleted satellites.
    pub name: String,
    /// Long name, unique among non-deleted satellites.
    pub slug: String,
    pub status: Status,
    pub orbit: Orbit,
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

impl Satellite {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Nests the flattened `orbit_*` columns back into an [`Orbit`].
    pub fn from_entity(entity: entity::satellite::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            status: entity.status,
            orbit: Orbit {
                longitude: entity.orbit_longitude,
                latitude: entity.orbit_latitude,
                inclination: entity.orbit_inclination,
                height: entity.orbit_height,
            },
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
    pub fn into_dto(self) -> SatelliteDto {
        SatelliteDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            status: self.status.into(),
            orbit: self.orbit.into_dto(),
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

    pub fn into_summary_dto(self) -> SatelliteSummaryDto {
        SatelliteSummaryDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            orbit: self.orbit.into_dto(),
        }
    }

    /// Projects the satellite to the DTO matching the requested detail level.
    pub fn into_view_dto(self, detail: DetailLevel) -> SatelliteViewDto {
        match detail {
            DetailLevel::Full => SatelliteViewDto::Detailed(self.into_dto()),
            DetailLevel::Summary => SatelliteViewDto::Summary(self.into_summary_dto()),
        }
    }
}

/// Selects satellites by a single criterion.
///
/// Repositories always combine the filter with `deleted = false`.
#[derive(Debug, Clone, PartialEq)]
pub enum SatelliteFilter {
    All,
    ById(Uuid),
    ByName(String),
    /// Matches a satellite whose name equals `name` or whose slug equals `slug`.
    ByNameOrSlug { name: String, slug: String },
}

/// Validated parameters for creating a satellite.
#[derive(Debug, Clone)]
pub struct CreateSatelliteParams {
    pub name: String,
    pub slug: String,
    pub status: Status,
    pub orbit: Orbit,
    pub company: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub creation_origin: CreationOrigin,
}

impl CreateSatelliteParams {
    /// Validates a create request and resolves its defaults.
    ///
    /// Checks run in order and the first failure is returned: required fields, name and
    /// slug format, then orbit ranges. Name and slug are stored trimmed.
    ///
    /// # Arguments
    /// - `dto` - Request body as deserialized from JSON
    ///
    /// # Returns
    /// - `Ok(CreateSatelliteParams)` - Input is valid, with defaults applied
    /// - `Err(ValidationError)` - The first rule the input violates
    pub fn from_dto(dto: CreateSatelliteDto) -> Result<Self, ValidationError> {
        if !is_present(&dto.name) || !is_present(&dto.slug) {
            return Err(ValidationError::MissingFields(REQUIRED_FIELDS));
        }
        let (Some(name), Some(slug), Some(orbit)) = (dto.name, dto.slug, dto.orbit) else {
            return Err(ValidationError::MissingFields(REQUIRED_FIELDS));
        };

        check_name("name", &name)?;
        check_name("slug", &slug)?;
        let orbit = Orbit::from_input(&orbit)?;

        Ok(Self {
            name: name.trim().to_string(),
            slug: slug.trim().to_string(),
            status: dto.status.map(Into::into).unwrap_or(Status::Active),
            orbit,
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

/// Unvalidated partial update of a satellite.
///
/// Validation needs the stored record, since the orbit is merged before range checks.
#[derive(Debug, Clone, Default)]
pub struct UpdateSatelliteParams {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub status: Option<Status>,
    pub company: Option<Option<String>>,
    pub updated_by: Option<Option<String>>,
    pub orbit: Option<OrbitInputDto>,
}

/// Fields of a satellite that an update may change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SatellitePatch {
    pub status: Option<Status>,
    pub orbit: Option<Orbit>,
    pub company: Option<Option<String>>,
    pub updated_by: Option<Option<String>>,
}

impl UpdateSatelliteParams {
    pub fn from_dto(dto: UpdateSatelliteDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            slug: dto.slug,
            status: dto.status.map(Into::into),
            company: dto.company,
            updated_by: dto.updated_by,
            orbit: dto.orbit,
        }
    }

    /// Validates the update as if applied to `current`.
    ///
    /// A submitted name or slug must still be well formed even though it may not
    /// differ from the stored one. A partial orbit is overlaid on the stored orbit and
    /// the merged result is range checked.
    ///
    /// # Returns
    /// - `Ok(SatellitePatch)` - The mutable fields to persist
    /// - `Err(ValidationError)` - The first rule the merged record violates
    pub fn validate_against(&self, current: &Satellite) -> Result<SatellitePatch, ValidationError> {
        if let Some(name) = &self.name {
            check_name("name", name)?;
        }
        if let Some(slug) = &self.slug {
            check_name("slug", slug)?;
        }

        let orbit = match &self.orbit {
            Some(input) => {
                let merged = current.orbit.with_input(input);
                merged.validate()?;
                Some(merged)
            }
            None => None,
        };

        Ok(SatellitePatch {
            status: self.status,
            orbit,
            company: self.company.clone(),
            updated_by: self.updated_by.clone(),
        })
    }

    /// Returns the conflict message if the update would change an immutable field.
    pub fn immutable_conflict(&self, current: &Satellite) -> Option<&'static str> {
        if self.id.is_some_and(|id| id != current.id) {
            return Some("Satellite internal ID cannot be modified. It is immutable.");
        }

        let name_changed = self
            .name
            .as_deref()
            .is_some_and(|name| name.trim() != current.name);
        let slug_changed = self
            .slug
            .as_deref()
            .is_some_and(|slug| slug.trim() != current.slug);
        if name_changed || slug_changed {
            return Some("Satellite name or slug cannot be modified. They are immutable.");
        }

        None
    }
}
