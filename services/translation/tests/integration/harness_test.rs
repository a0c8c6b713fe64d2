use std::path::Path;

use sgtn_testing::fixture::{self, COMPONENT, KEY, LOCALE, MSG, NAME, VERSION};
use sgtn_testing::harness;
use sgtn_testing::root::RootSource;

#[test]
fn should_anchor_working_directory_at_project_root() {
    let harness = harness();

    assert_ne!(harness.root_source(), RootSource::NotFound);
    assert!(harness.root().join("testdata").is_dir());
    assert!(Path::new("testdata/foo.json").is_file());
}

#[test]
fn should_load_fixture_bundle_by_relative_path() {
    let root = harness().root();
    let path = format!("testdata/bundles/{NAME}/{VERSION}/{COMPONENT}/messages_{LOCALE}.json");

    let bundle = fixture::load_json(root, &path);
    assert_eq!(bundle["component"], COMPONENT);
    assert_eq!(bundle["messages"][KEY], MSG);
}

#[test]
fn should_hand_out_distinct_generators() {
    let harness = harness();
    let a = harness.rng().string(20);
    let b = harness.rng().string(20);
    assert_eq!(a.len(), 20);
    assert_ne!(a, b, "seed {}", harness.seed());
}

#[tokio::test]
async fn should_keep_clients_independent() -> anyhow::Result<()> {
    let first = harness().client()?;
    let second = harness().client()?;

    first.get("/healthz").await.assert_status_ok();
    second.get("/readyz").await.assert_status_ok();
    Ok(())
}
