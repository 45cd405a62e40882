pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use error::TaskError;
pub use handlers::*;
pub use models::*;
pub use repository::TaskRepository;
pub use service::TaskService;
