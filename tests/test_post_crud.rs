//! Integration tests for blog post CRUD operations.

mod common;

use common::*;

#[tokio::test]
async fn test_add_post_prepends_and_assigns_fresh_id() -> anyhow::Result<()> {
    // 1. Fresh store comes seeded with example posts
    let (store, _temp_dir) = create_test_store().await;
    let existing_ids: Vec<String> = store.posts().iter().map(|p| p.id.clone()).collect();
    assert!(!existing_ids.is_empty());

    // 2. Add a new post
    let added = store.add_post(make_new_post("Borehole Drilling Update")).await?;

    // 3. The collection starts with the new post, content intact
    let posts = store.posts();
    assert_eq!(posts.len(), existing_ids.len() + 1);
    assert_eq!(posts[0].id, added.id);
    assert_eq!(posts[0].title, "Borehole Drilling Update");
    assert_eq!(posts[0].author, "Test Author");

    // 4. The id is freshly assigned and distinct from all pre-existing ids
    assert!(!added.id.is_empty());
    assert!(!existing_ids.contains(&added.id));
    Ok(())
}

#[tokio::test]
async fn test_added_posts_get_distinct_ids() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;

    // Rapid adds can land in the same millisecond; ids must still differ
    for i in 0..5 {
        store.add_post(make_new_post(&format!("Post {i}"))).await?;
    }
    let mut ids: Vec<String> = store.posts().iter().map(|p| p.id.clone()).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
    Ok(())
}

#[tokio::test]
async fn test_update_post_replaces_matching_id() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;
    let mut post = store.posts().into_iter().next().expect("seeded post");

    post.title = "Updated Title".to_string();
    post.excerpt = "Updated excerpt.".to_string();
    store.update_post(post.clone()).await?;

    let reloaded = store.post(&post.id).expect("post still present");
    assert_eq!(reloaded.title, "Updated Title");
    assert_eq!(reloaded.excerpt, "Updated excerpt.");
    // identity is stable across replacement
    assert_eq!(reloaded.id, post.id);
    Ok(())
}

#[tokio::test]
async fn test_update_post_with_unknown_id_is_noop() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;
    let before = store.posts();

    store
        .update_post(BlogPost {
            id: "no-such-post".to_string(),
            title: "Ghost".to_string(),
            ..Default::default()
        })
        .await?;

    assert_eq!(store.posts(), before);
    Ok(())
}

#[tokio::test]
async fn test_delete_post_removes_by_id() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;
    let victim = store.posts().into_iter().next().expect("seeded post");
    let count_before = store.posts().len();

    store.delete_post(&victim.id).await?;

    let posts = store.posts();
    assert_eq!(posts.len(), count_before - 1);
    assert!(posts.iter().all(|p| p.id != victim.id));
    assert!(store.post(&victim.id).is_none());
    Ok(())
}

#[tokio::test]
async fn test_delete_post_with_unknown_id_is_noop() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;
    let before = store.posts();

    store.delete_post("no-such-post").await?;

    // collection before and after are identical
    assert_eq!(store.posts(), before);
    Ok(())
}
