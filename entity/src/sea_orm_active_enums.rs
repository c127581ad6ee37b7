//! String-backed enums shared by the fleet entities.

use sea_orm::entity::prelude::*;

/// Operational status of a satellite or transponder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Status {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "inactive")]
    Inactive,
}

/// Whether a record was created by the inventory sync or by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum CreationOrigin {
    #[sea_orm(string_value = "inventory")]
    Inventory,
    #[sea_orm(string_value = "manual")]
    Manual,
}

/// Who soft deleted a record. Only manual deletion exists for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum DeletionOrigin {
    #[sea_orm(string_value = "manual")]
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum LinkDirection {
    #[sea_orm(string_value = "uplink")]
    Uplink,
    #[sea_orm(string_value = "downlink")]
    Downlink,
}

/// Antenna polarization of a transponder link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Polarization {
    /// Linear vertical
    #[sea_orm(string_value = "V")]
    V,
    /// Linear horizontal
    #[sea_orm(string_value = "H")]
    H,
    /// Left-handed circular
    #[sea_orm(string_value = "LHCP")]
    Lhcp,
    /// Right-handed circular
    #[sea_orm(string_value = "RHCP")]
    Rhcp,
}
