//! Auth-domain models: login credentials, session tokens, and Authorization headers.

pub mod credentials;
pub mod header;
pub mod secret;
pub mod token;

pub use credentials::*;
pub use header::*;
pub use secret::*;
pub use token::*;
