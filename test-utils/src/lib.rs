//! Deckguide Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the deck
//! guide publisher. This crate offers a builder pattern for creating test contexts backed by
//! a mock HTTP data source, plus fixtures for raw deck guide records.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring what the mock data source answers
//! - **TestContext**: Test environment owning the running mock server
//! - **fixture / factory**: Raw guide records and helpers that mount them
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_fetch() {
//!     let test = TestBuilder::new()
//!         .with_guides(factory::helpers::guide_list(2))
//!         .build()
//!         .await;
//!
//!     let url = test.guides_url();
//!     // Point the repository at `url`...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod factory;
pub mod fixture;
