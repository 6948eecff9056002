pub mod core;
pub mod models;
pub mod pages;
pub mod services;

pub use crate::core::store::SiteStore;
pub use models::{BlogPost, ConfigUpdate, ContentField, NewBlogPost, Project, SiteConfig};
pub use pages::Route;

#[cfg(feature = "gui")]
pub mod gui;
