// Authentication module
// Username/password registration, login issuing JWT bearer tokens, and the
// request guard that turns a bearer token back into a user identity

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use handlers::{login_handler, register_handler};
pub use middleware::AuthenticatedUser;
pub use models::{LoginRequest, LoginResponse, RegisterRequest, User};
pub use password::PasswordService;
pub use repository::UserRepository;
pub use service::AuthService;
pub use token::{Claims, TokenService};
