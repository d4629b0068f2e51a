//! Factory methods for serving test data.
//!
//! This module provides factory methods that mount deck guide payloads on the mock data
//! source, reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() {
//!     let server = wiremock::MockServer::start().await;
//!
//!     // Serve three default guides
//!     factory::deck_guide::mount_guides(&server, factory::helpers::guide_list(3)).await;
//! }
//! ```

pub mod deck_guide;
pub mod helpers;
