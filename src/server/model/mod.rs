//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! fleet records and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Request validation and the immutable-field rules live on the parameter types so the
//! service can run them before touching storage.

pub mod beam;
pub mod common;
pub mod satellite;
pub mod transponder;
