use crate::server::{
    data::beam::BeamRepository,
    model::beam::{BeamFilter, BeamPatch, CreateBeamParams},
};
use entity::{
    prelude::*,
    sea_orm_active_enums::{CreationOrigin, DeletionOrigin, LinkDirection},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_many;
mod find_one;
mod insert;
mod soft_delete;
mod update_one;
