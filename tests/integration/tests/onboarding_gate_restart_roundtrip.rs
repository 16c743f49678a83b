use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use squad_navigation::{commit_initial_route, NavigationService, AUTH_ROUTE, ONBOARDING_ROUTE};
use squad_onboarding::{default_slides, OnboardingFlow, OnboardingGate};
use squad_storage::FileKeyValueStore;
use tempfile::tempdir;
use tokio::sync::Mutex;

fn gate_at(path: &Path) -> OnboardingGate {
    OnboardingGate::new(Arc::new(FileKeyValueStore::new(path)))
}

#[derive(Default)]
struct RecordingNavigation {
    committed: Mutex<Vec<String>>,
}

#[async_trait]
impl NavigationService for RecordingNavigation {
    async fn replace_route(&self, path: &str) -> Result<()> {
        self.committed.lock().await.push(path.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn functional_completion_survives_process_restart() {
    let workspace = tempdir().expect("tempdir");
    let store_path = workspace.path().join(".squadlink/device-store.json");

    let first_launch = gate_at(&store_path);
    assert!(!first_launch.status().await);
    first_launch.complete().await.expect("complete");
    assert!(first_launch.status().await);

    // A new gate over the same path stands in for a restarted process.
    let second_launch = gate_at(&store_path);
    assert!(second_launch.status().await);

    second_launch.reset().await.expect("reset");
    let third_launch = gate_at(&store_path);
    assert!(!third_launch.status().await);
}

#[tokio::test]
async fn functional_startup_routes_onboarding_then_auth_across_restarts() {
    let workspace = tempdir().expect("tempdir");
    let store_path = workspace.path().join(".squadlink/device-store.json");

    let gate = gate_at(&store_path);
    let navigation = RecordingNavigation::default();
    let route = commit_initial_route(&gate, &navigation)
        .await
        .expect("first launch commit");
    assert_eq!(route, ONBOARDING_ROUTE);

    // The user skips the introductory sequence.
    let mut flow = OnboardingFlow::new(&gate, default_slides()).expect("flow");
    flow.skip().await.expect("skip");

    let restarted_gate = gate_at(&store_path);
    let route = commit_initial_route(&restarted_gate, &navigation)
        .await
        .expect("second launch commit");
    assert_eq!(route, AUTH_ROUTE);

    assert_eq!(
        *navigation.committed.lock().await,
        vec![ONBOARDING_ROUTE.to_string(), AUTH_ROUTE.to_string()]
    );
}

#[tokio::test]
async fn regression_unwritable_store_fails_complete_but_not_status() {
    let workspace = tempdir().expect("tempdir");
    // A regular file where the store's parent directory should be makes
    // every write fail while reads still see an absent store.
    let blocker = workspace.path().join("blocker");
    std::fs::write(&blocker, "occupied").expect("write blocker");
    let store_path = blocker.join("device-store.json");

    let gate = gate_at(&store_path);
    assert!(!gate.status().await);

    let error = gate.complete().await.expect_err("complete should fail");
    assert!(error
        .to_string()
        .contains("failed to persist onboarding completion"));

    assert!(!gate.status().await);
}
