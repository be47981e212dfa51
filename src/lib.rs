//! Headless create/edit form for a single blog post.
//!
//! [`application::BlogEditor`] decides between creating and editing from the
//! page location, loads the existing post when editing, and submits the draft
//! to the blog API, either navigating to the saved post or showing the
//! API's error message.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
