use axum::http::StatusCode;
use serde_json::Value;

use sgtn_testing::client::EnvelopeExt;
use sgtn_testing::contains::position_of;
use sgtn_testing::endpoints::{GET_SUPPORTED_COMPONENTS_URL, GET_SUPPORTED_LOCALES_URL, fill};
use sgtn_testing::fixture::{COMPONENT, LOCALE, NAME, VERSION};
use sgtn_testing::harness;

fn strings(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn should_list_fixture_components() -> anyhow::Result<()> {
    let client = harness().client()?;
    let url = fill(
        GET_SUPPORTED_COMPONENTS_URL,
        &[("productName", NAME), ("version", VERSION)],
    );

    let resp = client.get(&url).await;
    resp.assert_status_ok();
    let components = strings(&resp.error_and_data().1.unwrap()["components"]);

    let about = position_of(&components, "about").expect("about listed");
    let sunglow = position_of(&components, COMPONENT).expect("sunglow listed");
    assert!(about < sunglow, "components are sorted: {components:?}");
    Ok(())
}

#[tokio::test]
async fn should_list_fixture_locales() -> anyhow::Result<()> {
    let client = harness().client()?;
    let url = fill(
        GET_SUPPORTED_LOCALES_URL,
        &[("productName", NAME), ("version", VERSION)],
    );

    let resp = client.get(&url).await;
    resp.assert_status_ok();
    let locales = strings(&resp.error_and_data().1.unwrap()["locales"]);

    for expected in [LOCALE, "fr", "zh-Hans"] {
        assert!(position_of(&locales, expected).is_some(), "{expected} missing from {locales:?}");
    }
    Ok(())
}

#[tokio::test]
async fn should_report_unknown_version() -> anyhow::Result<()> {
    let client = harness().client()?;
    let url = fill(
        GET_SUPPORTED_LOCALES_URL,
        &[("productName", NAME), ("version", "9.9.9")],
    );

    let resp = client.get(&url).expect_failure().await;
    resp.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(resp.error_and_data().0.unwrap().kind, "PRODUCT_NOT_FOUND");
    Ok(())
}
