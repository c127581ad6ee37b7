//! SeaORM entities for the fleet inventory tables.

pub mod prelude;

pub mod beam;
pub mod satellite;
pub mod sea_orm_active_enums;
pub mod transponder;
