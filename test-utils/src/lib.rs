//! Fleet Service Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the fleet
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert satellites, beams and transponders with defaults
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Satellite;
//!
//! #[tokio::test]
//! async fn test_satellite_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Satellite)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```
//!
//! Tests that depend on the partial unique indexes should use `with_migrations()` instead,
//! which builds the schema exactly as production does.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
