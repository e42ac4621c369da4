pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::user::{CreateUser, UpdateUser, User};
pub use repositories::user_repository::UserRepository;
