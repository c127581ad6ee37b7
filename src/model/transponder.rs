use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{
    api::deserialize_some,
    common::{CreationOriginDto, DeletionOriginDto, StatusDto},
};

/// Polarization of a transponder link: linear vertical (`V`), linear horizontal (`H`),
/// left-handed circular (`LHCP`) or right-handed circular (`RHCP`).
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolarizationDto {
    V,
    H,
    Lhcp,
    Rhcp,
}

/// Frequencies and bandwidth are expressed in MHz.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransponderDto {
    #[schema(example = "Transponder X")]
    pub name: Option<String>,
    pub status: Option<StatusDto>,
    #[serde(rename = "UL_polarization")]
    pub ul_polarization: Option<PolarizationDto>,
    #[serde(rename = "DL_polarization")]
    pub dl_polarization: Option<PolarizationDto>,
    #[serde(rename = "UL_frequency")]
    #[schema(example = 14000.0)]
    pub ul_frequency: Option<f64>,
    #[serde(rename = "DL_frequency")]
    #[schema(example = 11700.0)]
    pub dl_frequency: Option<f64>,
    #[schema(example = 36.0)]
    pub bandwidth: Option<f64>,
    pub company: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub creation_origin: Option<CreationOriginDto>,
}

/// Partial transponder update. `id`, `name` and both polarizations must match the stored
/// values.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransponderDto {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub status: Option<StatusDto>,
    #[serde(rename = "UL_polarization")]
    pub ul_polarization: Option<PolarizationDto>,
    #[serde(rename = "DL_polarization")]
    pub dl_polarization: Option<PolarizationDto>,
    #[serde(rename = "UL_frequency")]
    pub ul_frequency: Option<f64>,
    #[serde(rename = "DL_frequency")]
    pub dl_frequency: Option<f64>,
    pub bandwidth: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub company: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub updated_by: Option<Option<String>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransponderDto {
    pub id: Uuid,
    pub name: String,
    pub status: StatusDto,
    #[serde(rename = "UL_polarization")]
    pub ul_polarization: PolarizationDto,
    #[serde(rename = "DL_polarization")]
    pub dl_polarization: PolarizationDto,
    #[serde(rename = "UL_frequency")]
    pub ul_frequency: f64,
    #[serde(rename = "DL_frequency")]
    pub dl_frequency: f64,
    pub bandwidth: f64,
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
pub struct TransponderSummaryDto {
    pub id: Uuid,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum TransponderViewDto {
    Detailed(TransponderDto),
    Summary(TransponderSummaryDto),
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DeletedTransponderDto {
    pub message: String,
    pub transponder: TransponderDto,
}
