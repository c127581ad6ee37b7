//! Server-side API backend and business logic.
//!
//! This module contains the backend of the fleet service: HTTP endpoints for satellites,
//! beams and transponders, the rules that guard them, and data access. The backend uses
//! Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Uniqueness checks and update rules
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, filters and parameter types with validation
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Optional authorization stub
//! - **Utilities** (`util/`) - Extractors, identifier parsing and field rules
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** rejects unauthorized requests when the stub is enabled
//! 3. **Controller** extracts input, converts DTOs to params, calls service
//! 4. **Service** validates against stored state and checks immutable fields
//! 5. **Data** queries non-deleted records, converts entities to domain models
//! 6. **Controller** projects the domain model to a DTO and returns the response
//!
//! Records are never removed through the API. Deletion sets `deleted`, `deleted_at` and
//! `deletion_origin`, and every default query filters on `deleted = false`.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
