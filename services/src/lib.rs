pub mod error;
pub mod role_service;
pub mod store;
pub mod user_service;

pub use error::{StoreError, StoreResult};
pub use role_service::RoleService;
pub use store::{AccountProfile, AccountStore, RoleStore};
pub use user_service::UserService;
