mod storage;

use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::Context;
use time::OffsetDateTime;
use tracing::debug;

use crate::models::{
    self, BlogPost, ConfigUpdate, ContentField, NewBlogPost, Project, SiteConfig,
};
use storage::{ADMIN_KEY, CONFIG_KEY, POSTS_KEY, PROJECTS_KEY, SiteStorage};

struct SiteState {
    config: SiteConfig,
    posts: Vec<BlogPost>,
    projects: Vec<Project>,
    admin: bool,
}

/// Single source of truth for site configuration, content, blog posts and
/// fundraising projects. Every mutation is written through to durable
/// storage before it returns; reads are snapshots of in-memory state.
///
/// There is no ambient singleton: callers construct a store with [`open`]
/// and pass it (usually as an `Arc`) to whatever needs it.
///
/// [`open`]: SiteStore::open
pub struct SiteStore {
    storage: SiteStorage,
    state: RwLock<SiteState>,
}

impl std::fmt::Debug for SiteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read_state();
        f.debug_struct("SiteStore")
            .field("posts", &state.posts.len())
            .field("projects", &state.projects.len())
            .field("admin", &state.admin)
            .finish()
    }
}

impl SiteStore {
    /// Open (or create) the site file and rehydrate state from its four
    /// storage entries. A missing entry falls back to the seeded default; a
    /// present but malformed entry is a fatal error.
    pub async fn open<P: AsRef<Path>>(site_file: P) -> anyhow::Result<Self> {
        let storage = SiteStorage::open(&site_file).await?;

        let config = match storage.get(CONFIG_KEY).await? {
            Some(raw) => serde_json::from_str(&raw)
                .context("Stored site configuration is not valid JSON")?,
            None => models::seed_config(),
        };
        let posts = match storage.get(POSTS_KEY).await? {
            Some(raw) => {
                serde_json::from_str(&raw).context("Stored blog posts are not valid JSON")?
            }
            None => models::seed_posts(),
        };
        let projects = match storage.get(PROJECTS_KEY).await? {
            Some(raw) => {
                serde_json::from_str(&raw).context("Stored projects are not valid JSON")?
            }
            None => models::seed_projects(),
        };
        let admin = matches!(storage.get(ADMIN_KEY).await?.as_deref(), Some("true"));

        debug!(
            posts = posts.len(),
            projects = projects.len(),
            admin,
            "site store opened"
        );
        Ok(Self {
            storage,
            state: RwLock::new(SiteState {
                config,
                posts,
                projects,
                admin,
            }),
        })
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SiteState> {
        self.state.read().expect("site state lock poisoned")
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SiteState> {
        self.state.write().expect("site state lock poisoned")
    }

    pub fn config(&self) -> SiteConfig {
        self.read_state().config.clone()
    }

    pub fn content(&self, field: ContentField) -> String {
        self.read_state().config.content.get(field).to_string()
    }

    pub fn posts(&self) -> Vec<BlogPost> {
        self.read_state().posts.clone()
    }

    pub fn post(&self, id: &str) -> Option<BlogPost> {
        self.read_state().posts.iter().find(|p| p.id == id).cloned()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.read_state().projects.clone()
    }

    pub fn project(&self, id: &str) -> Option<Project> {
        self.read_state()
            .projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// UI convenience switch for edit affordances. Not an access-control
    /// boundary: it lives in the same storage it gates.
    pub fn is_admin(&self) -> bool {
        self.read_state().admin
    }

    /// Shallow-merge a partial section record into the configuration and
    /// persist the whole configuration entry.
    pub async fn update_config(&self, update: ConfigUpdate) -> anyhow::Result<()> {
        let raw = {
            let mut state = self.write_state();
            update.apply_to(&mut state.config);
            serde_json::to_string(&state.config)
                .context("Failed to serialize site configuration")?
        };
        self.storage.set(CONFIG_KEY, &raw).await
    }

    /// Set one named content string and persist the whole configuration
    /// entry.
    pub async fn update_content(&self, field: ContentField, value: String) -> anyhow::Result<()> {
        let raw = {
            let mut state = self.write_state();
            state.config.content.set(field, value);
            serde_json::to_string(&state.config)
                .context("Failed to serialize site configuration")?
        };
        self.storage.set(CONFIG_KEY, &raw).await
    }

    /// Assign a fresh id, prepend the post, and persist the collection.
    pub async fn add_post(&self, new_post: NewBlogPost) -> anyhow::Result<BlogPost> {
        let (post, raw) = {
            let mut state = self.write_state();
            let post = BlogPost {
                id: next_post_id(&state.posts),
                title: new_post.title,
                excerpt: new_post.excerpt,
                content: new_post.content,
                date: new_post.date,
                image_url: new_post.image_url,
                author: new_post.author,
            };
            state.posts.insert(0, post.clone());
            let raw =
                serde_json::to_string(&state.posts).context("Failed to serialize blog posts")?;
            (post, raw)
        };
        self.storage.set(POSTS_KEY, &raw).await?;
        debug!(id = %post.id, "blog post added");
        Ok(post)
    }

    /// Replace the post with a matching id; a no-op when the id is unknown.
    pub async fn update_post(&self, post: BlogPost) -> anyhow::Result<()> {
        let raw = {
            let mut state = self.write_state();
            if let Some(existing) = state.posts.iter_mut().find(|p| p.id == post.id) {
                *existing = post;
            }
            serde_json::to_string(&state.posts).context("Failed to serialize blog posts")?
        };
        self.storage.set(POSTS_KEY, &raw).await
    }

    /// Remove the post with a matching id; a no-op when the id is unknown.
    pub async fn delete_post(&self, id: &str) -> anyhow::Result<()> {
        let raw = {
            let mut state = self.write_state();
            state.posts.retain(|p| p.id != id);
            serde_json::to_string(&state.posts).context("Failed to serialize blog posts")?
        };
        self.storage.set(POSTS_KEY, &raw).await?;
        debug!(id, "blog post deleted");
        Ok(())
    }

    /// Replace the project with a matching id; a no-op when the id is
    /// unknown.
    pub async fn update_project(&self, project: Project) -> anyhow::Result<()> {
        let raw = {
            let mut state = self.write_state();
            if let Some(existing) = state.projects.iter_mut().find(|p| p.id == project.id) {
                *existing = project;
            }
            serde_json::to_string(&state.projects).context("Failed to serialize projects")?
        };
        self.storage.set(PROJECTS_KEY, &raw).await
    }

    /// Flip the admin flag, persist it, and return the new value.
    pub async fn toggle_admin(&self) -> anyhow::Result<bool> {
        let admin = {
            let mut state = self.write_state();
            state.admin = !state.admin;
            state.admin
        };
        self.storage
            .set(ADMIN_KEY, if admin { "true" } else { "false" })
            .await?;
        debug!(admin, "admin flag toggled");
        Ok(admin)
    }
}

/// Time-based post id, bumped past any existing id so it stays unique
/// within the collection even for same-millisecond adds.
fn next_post_id(posts: &[BlogPost]) -> String {
    let mut millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    while posts.iter().any(|p| p.id == millis.to_string()) {
        millis += 1;
    }
    millis.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_ids_bump_past_collisions() {
        let mut posts = Vec::new();
        for _ in 0..3 {
            let post = BlogPost {
                id: next_post_id(&posts),
                ..Default::default()
            };
            posts.push(post);
        }
        let mut ids: Vec<_> = posts.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
