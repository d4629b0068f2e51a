//! Test fixtures providing reusable test data without a running server.
//!
//! This module contains fixture functions that create in-memory JSON records for use in unit
//! tests and as payloads for factories. Unlike factories, fixtures do NOT mount anything on
//! the mock data source.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Default record
//! let guide = fixture::deck_guide::raw();
//!
//! // Record with custom fields
//! let crew = fixture::deck_guide::raw_builder()
//!     .guide_type("Crew")
//!     .dice_list(vec![vec![-1, 0, 1]])
//!     .build();
//! ```

pub mod deck_guide;
