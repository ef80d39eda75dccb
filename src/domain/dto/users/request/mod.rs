pub mod credentials;
pub mod update_user;

pub use credentials::UserCredentials;
pub use update_user::{UpdateUserRequest, UserEmailQuery};
