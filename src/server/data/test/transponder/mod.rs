use crate::server::{
    data::transponder::TransponderRepository,
    model::transponder::{CreateTransponderParams, TransponderFilter, TransponderPatch},
};
use entity::{
    prelude::*,
    sea_orm_active_enums::{CreationOrigin, DeletionOrigin, Polarization, Status},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_many;
mod find_one;
mod insert;
mod soft_delete;
mod update_one;
