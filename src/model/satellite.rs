use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{
    api::deserialize_some,
    common::{CreationOriginDto, DeletionOriginDto, StatusDto},
};

/// Orbit as stored, with every default filled in.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrbitDto {
    /// Orbit longitude (positive East, negative West).
    pub longitude: f64,
    /// Orbit latitude (positive North, negative South).
    pub latitude: f64,
    pub inclination: f64,
    /// Orbit height in km.
    pub height: f64,
}

/// Orbit as submitted by clients. Missing values take their defaults on create, or keep
/// their stored values on update.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct OrbitInputDto {
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub inclination: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSatelliteDto {
    /// Satellite code or short name. Unique among non-deleted satellites.
    #[schema(example = "GMVSAT")]
    pub name: Option<String>,
    /// Long name of the satellite. Unique among non-deleted satellites.
    #[schema(example = "GMV Satellite")]
    pub slug: Option<String>,
    pub status: Option<StatusDto>,
    pub company: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub creation_origin: Option<CreationOriginDto>,
    pub orbit: Option<OrbitInputDto>,
}

/// Partial satellite update. `id`, `name` and `slug` may be sent but must match the
/// stored values.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSatelliteDto {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub status: Option<StatusDto>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub company: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub updated_by: Option<Option<String>>,
    pub orbit: Option<OrbitInputDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub status: StatusDto,
    pub orbit: OrbitDto,
    pub company: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub creation_origin: CreationOriginDto,
    pub deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deletion_origin: Option<DeletionOriginDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SatelliteSummaryDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub orbit: OrbitDto,
}

/// A satellite in either the detailed or the summary projection.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum SatelliteViewDto {
    Detailed(SatelliteDto),
    Summary(SatelliteSummaryDto),
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DeletedSatelliteDto {
    pub message: String,
    pub satellite: SatelliteDto,
}
