//! Credential loading for the completion service.

mod credentials;

pub use credentials::{
    API_KEY_VAR, BASE_URL_VAR, Credentials, DEFAULT_ENDPOINT, read_env_file,
};
