pub mod api;
pub mod error;
pub mod export;
pub mod health;
pub mod pages;
pub mod registration;
pub mod submissions;

pub use error::AppError;
