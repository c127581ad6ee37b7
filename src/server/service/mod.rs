//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Uniqueness**: Pre-checking unique fields before insert and mapping storage
//!   unique-index violations to conflicts
//! - **Update Rules**: Validating merged records and rejecting changes to immutable fields
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod beam;
pub mod satellite;
pub mod transponder;

#[cfg(test)]
mod test;
