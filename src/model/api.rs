use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Identifier of a record, returned by lookup-by-name endpoints.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct IdDto {
    pub id: Uuid,
}

/// Deserializes a present field into `Some`, leaving absent fields to `#[serde(default)]`.
///
/// Used on `Option<Option<T>>` update fields so that `"company": null` clears the
/// value while omitting `company` leaves it untouched.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
