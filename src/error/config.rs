use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but its value cannot be used.
    ///
    /// Check the documentation or `.env.example` file for the expected format.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// A webhook credential required for a full run was not supplied.
    ///
    /// Raised before any network call so that nothing is fetched or posted when the
    /// run could never deliver its cards.
    #[error("{0} missing")]
    MissingCredential(&'static str),
}
