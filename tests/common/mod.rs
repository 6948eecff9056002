mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from safewater for tests
pub use safewater::SiteStore;
pub use safewater::models::{
    BlogPost, BrandingUpdate, ConfigUpdate, ContactUpdate, ContentField, ContentUpdate,
    NewBlogPost, Project, SeoUpdate, SiteConfig, SocialUpdate, ThemeUpdate,
};
pub use safewater::pages::{Route, percent_funded, render_text};
