mod config;
mod errors;
mod password;
mod store;
mod types;

pub use errors::IdentityError;
pub use password::{hash_password, verify_password};
pub use store::IdentityStore;
pub use types::Identity;
