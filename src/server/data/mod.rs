//! Database repository layer for the fleet entities.
//!
//! This module contains repository structs that handle database operations for
//! satellites, beams and transponders. Repositories use SeaORM entity models internally
//! and return domain models to keep the data layer separate from business logic.
//! Records are never hard deleted; every default query excludes soft-deleted rows.

pub mod beam;
pub mod satellite;
pub mod transponder;

#[cfg(test)]
mod test;
