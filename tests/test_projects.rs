//! Integration tests for the fundraising project tracker.

mod common;

use common::*;

#[tokio::test]
async fn test_update_project_funding_and_display_percent() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;
    let mut project = store.project("p1").expect("seeded project p1");

    project.raised = 5000.0;
    project.goal = 8000.0;
    store.update_project(project).await?;

    let reloaded = store.project("p1").expect("project p1");
    assert_eq!(reloaded.raised, 5000.0);
    assert_eq!(reloaded.goal, 8000.0);
    // displayed percentage = min(100, round(5000 / 8000 * 100))
    assert_eq!(percent_funded(&reloaded), 63);
    Ok(())
}

#[tokio::test]
async fn test_raised_may_exceed_goal_but_display_clamps() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;
    let mut project = store.project("p2").expect("seeded project p2");

    project.raised = 20000.0;
    project.goal = 12000.0;
    store.update_project(project).await?;

    // stored values are untouched by the clamp
    let reloaded = store.project("p2").expect("project p2");
    assert_eq!(reloaded.raised, 20000.0);
    assert_eq!(reloaded.goal, 12000.0);
    assert_eq!(percent_funded(&reloaded), 100);
    Ok(())
}

#[tokio::test]
async fn test_update_project_with_unknown_id_is_noop() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;
    let before = store.projects();

    store
        .update_project(Project {
            id: "no-such-project".to_string(),
            title: "Ghost".to_string(),
            ..Default::default()
        })
        .await?;

    assert_eq!(store.projects(), before);
    Ok(())
}

#[tokio::test]
async fn test_other_projects_unchanged_by_update() -> anyhow::Result<()> {
    let (store, _temp_dir) = create_test_store().await;
    let others_before: Vec<Project> = store
        .projects()
        .into_iter()
        .filter(|p| p.id != "p3")
        .collect();

    let mut project = store.project("p3").expect("seeded project p3");
    project.raised += 500.0;
    store.update_project(project).await?;

    let others_after: Vec<Project> = store
        .projects()
        .into_iter()
        .filter(|p| p.id != "p3")
        .collect();
    assert_eq!(others_after, others_before);
    Ok(())
}
