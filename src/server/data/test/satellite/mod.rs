use crate::server::{
    data::satellite::SatelliteRepository,
    model::satellite::{CreateSatelliteParams, Orbit, SatelliteFilter, SatellitePatch},
};
use entity::{
    prelude::*,
    sea_orm_active_enums::{CreationOrigin, DeletionOrigin, Status},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_many;
mod find_one;
mod insert;
mod soft_delete;
mod update_one;

fn create_params(name: &str, slug: &str) -> CreateSatelliteParams {
    CreateSatelliteParams {
        name: name.to_string(),
        slug: slug.to_string(),
        status: Status::Active,
        orbit: Orbit {
            longitude: -30.0,
            latitude: 0.0,
            inclination: 0.0,
            height: 35786.063,
        },
        company: Some("GMV".to_string()),
        created_by: Some("operator".to_string()),
        updated_by: None,
        creation_origin: CreationOrigin::Inventory,
    }
}
