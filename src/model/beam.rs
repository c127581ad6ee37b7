use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{
    api::deserialize_some,
    common::{CreationOriginDto, DeletionOriginDto},
};

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LinkDirectionDto {
    Uplink,
    Downlink,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBeamDto {
    #[schema(example = "Beam A")]
    pub name: Option<String>,
    pub link_direction: Option<LinkDirectionDto>,
    pub pattern: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub creation_origin: Option<CreationOriginDto>,
}

/// Partial beam update. `id`, `name` and `linkDirection` must match the stored values.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBeamDto {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub link_direction: Option<LinkDirectionDto>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub pattern: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub updated_by: Option<Option<String>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeamDto {
    pub id: Uuid,
    pub name: String,
    pub link_direction: LinkDirectionDto,
    pub pattern: Option<String>,
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
#[serde(rename_all = "camelCase")]
pub struct BeamSummaryDto {
    pub id: Uuid,
    pub name: String,
    pub link_direction: LinkDirectionDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum BeamViewDto {
    Detailed(BeamDto),
    Summary(BeamSummaryDto),
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DeletedBeamDto {
    pub message: String,
    pub beam: BeamDto,
}
