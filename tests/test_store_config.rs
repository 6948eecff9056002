//! Integration tests for configuration and content updates.
//!
//! Tests cover:
//! - Section isolation of partial config updates
//! - Single-field content updates
//! - The admin flag and the edit affordances it gates

mod common;

use common::*;

#[tokio::test]
async fn test_update_config_touches_only_named_section() -> anyhow::Result<()> {
    // 1. Open a fresh store with seeded defaults
    let (store, _temp_dir) = create_test_store().await;
    let before = store.config();

    // 2. Update a single branding field
    store
        .update_config(ConfigUpdate::Branding(BrandingUpdate {
            name: Some("River Trust".to_string()),
            ..Default::default()
        }))
        .await?;

    // 3. The named field changed, unmentioned fields in the section did not
    let after = store.config();
    assert_eq!(after.branding.name, "River Trust");
    assert_eq!(after.branding.tagline, before.branding.tagline);
    assert_eq!(after.branding.logo_url, before.branding.logo_url);

    // 4. Every other section is byte-identical
    assert_eq!(
        serde_json::to_string(&after.theme)?,
        serde_json::to_string(&before.theme)?
    );
    assert_eq!(
        serde_json::to_string(&after.seo)?,
        serde_json::to_string(&before.seo)?
    );
    assert_eq!(
        serde_json::to_string(&after.contact)?,
        serde_json::to_string(&before.contact)?
    );
    assert_eq!(
        serde_json::to_string(&after.social)?,
        serde_json::to_string(&before.social)?
    );
    assert_eq!(
        serde_json::to_string(&after.content)?,
        serde_json::to_string(&before.content)?
    );
    Ok(())
}

#[tokio::test]
async fn test_update_content_sets_single_field() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;
    let before = store.config();

    store
        .update_content(ContentField::HeroTitle, "Water For Everyone".to_string())
        .await?;

    let after = store.config();
    assert_eq!(after.content.hero_title, "Water For Everyone");
    assert_eq!(
        store.content(ContentField::HeroTitle),
        "Water For Everyone"
    );
    // the rest of the content section is untouched
    assert_eq!(after.content.hero_subtitle, before.content.hero_subtitle);
    assert_eq!(after.content.footer_text, before.content.footer_text);
    // and so is everything outside it
    assert_eq!(after.branding, before.branding);
    Ok(())
}

#[tokio::test]
async fn test_content_section_update_merges_partially() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;
    let before = store.config();

    store
        .update_config(ConfigUpdate::Content(ContentUpdate {
            mission_title: Some("What Drives Us".to_string()),
            ..Default::default()
        }))
        .await?;

    let after = store.config();
    assert_eq!(after.content.mission_title, "What Drives Us");
    assert_eq!(after.content.mission_text, before.content.mission_text);
    Ok(())
}

#[tokio::test]
async fn test_admin_flag_gates_edit_affordances() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;

    // 1. Fresh store starts as guest; blog pages carry no edit affordances
    assert!(!store.is_admin());
    assert!(!render_text(&store, Route::Blog).contains("[edit]"));

    // 2. Toggle on: affordances become visible
    assert!(store.toggle_admin().await?);
    assert!(store.is_admin());
    assert!(render_text(&store, Route::Blog).contains("[edit]"));

    // 3. Toggle off: they disappear again
    assert!(!store.toggle_admin().await?);
    assert!(!store.is_admin());
    assert!(!render_text(&store, Route::Blog).contains("[edit]"));
    Ok(())
}
