//! Infrastructure adapters and runtime bootstrap.

pub mod blog_api;
pub mod error;
pub mod telemetry;

pub use blog_api::HttpBlogApi;
