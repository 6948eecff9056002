use safewater::SiteStore;
use safewater::models::NewBlogPost;

/// Creates a SiteStore backed by a temporary site file.
/// Returns both the store and the temp directory (which must be kept alive).
pub async fn create_test_store() -> (SiteStore, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("test-site.db");
    let store = SiteStore::open(&path)
        .await
        .expect("Failed to open test store");
    (store, dir)
}

/// Creates a NewBlogPost with test data.
pub fn make_new_post(title: &str) -> NewBlogPost {
    NewBlogPost {
        title: title.to_string(),
        excerpt: "A short excerpt.".to_string(),
        content: "The full story.".to_string(),
        date: "2024-01-15".to_string(),
        image_url: "https://example.org/cover.jpg".to_string(),
        author: "Test Author".to_string(),
    }
}
