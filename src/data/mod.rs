//! Data access layer.
//!
//! This module contains the repository that reads deck guides from the remote data source
//! and the static dice emoji table used to resolve dice IDs. Repositories return domain
//! models so the service layer never touches raw HTTP responses.

pub mod deck_guide;
pub mod dice_emoji;

#[cfg(test)]
mod test;
