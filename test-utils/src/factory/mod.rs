//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating fleet entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows directly through the entity
//! `ActiveModel`, bypassing the service layer validation, so tests can also set up
//! states the API never produces on its own (such as already soft deleted rows).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let satellite = factory::create_satellite(&db).await?;
//!     let beam = factory::create_beam(&db).await?;
//!     let transponder = factory::create_transponder(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let satellite = factory::satellite::SatelliteFactory::new(&db)
//!     .name("GMVSAT")
//!     .slug("GMV Satellite")
//!     .deleted(true)
//!     .build()
//!     .await?;
//! ```

pub mod beam;
pub mod helpers;
pub mod satellite;
pub mod transponder;

// Re-export commonly used factory functions for concise usage
pub use beam::create_beam;
pub use satellite::{create_satellite, create_satellite_named};
pub use transponder::create_transponder;
