use axum::http::StatusCode;
use serde_json::{Value, json};

use sgtn_testing::client::EnvelopeExt;
use sgtn_testing::contains::position_of;
use sgtn_testing::endpoints::{
    GET_BUNDLE_URL, GET_BUNDLES_URL, GET_KEY_URL, GET_SUPPORTED_LOCALES_URL, PUT_BUNDLES_URL,
    fill,
};
use sgtn_testing::fixture::{BUNDLE_PARAMS, COMPONENT, KEY, LOCALE, MSG, NAME, VERSION};
use sgtn_testing::harness;

fn product_url(template: &str) -> String {
    fill(template, &[("productName", NAME), ("version", VERSION)])
}

fn component_of(bundle: &Value) -> String {
    bundle["component"].as_str().unwrap_or_default().to_owned()
}

// ── GET bundle ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_fixture_bundle() -> anyhow::Result<()> {
    let client = harness().client()?;

    let resp = client.get(&fill(GET_BUNDLE_URL, &BUNDLE_PARAMS)).await;
    resp.assert_status_ok();

    let (error, data) = resp.error_and_data();
    assert_eq!(error, None);
    let data = data.expect("bundle data");
    assert_eq!(data["productName"], NAME);
    assert_eq!(data["version"], VERSION);
    assert_eq!(data["locale"], LOCALE);
    assert_eq!(data["component"], COMPONENT);
    assert_eq!(data["messages"][KEY], MSG);
    Ok(())
}

#[tokio::test]
async fn should_match_locale_case_insensitively() -> anyhow::Result<()> {
    let client = harness().client()?;
    let url = fill(
        GET_BUNDLE_URL,
        &[
            ("productName", NAME),
            ("version", VERSION),
            ("locale", "zh_hans"),
            ("component", COMPONENT),
        ],
    );

    let resp = client.get(&url).await;
    resp.assert_status_ok();
    let envelope = resp.envelope::<Value>()?;
    assert_eq!(envelope.data.unwrap()["messages"][KEY], "Message-zh-Hans");
    Ok(())
}

#[tokio::test]
async fn should_report_unknown_product() -> anyhow::Result<()> {
    let client = harness().client()?;
    let url = fill(
        GET_BUNDLE_URL,
        &[
            ("productName", "NOPE"),
            ("version", VERSION),
            ("locale", LOCALE),
            ("component", COMPONENT),
        ],
    );

    let resp = client.get(&url).expect_failure().await;
    resp.assert_status(StatusCode::NOT_FOUND);
    let (error, data) = resp.error_and_data();
    assert_eq!(data, None);
    let error = error.expect("business error");
    assert_eq!(error.code, 404);
    assert_eq!(error.kind, "PRODUCT_NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn should_report_missing_bundle() -> anyhow::Result<()> {
    let client = harness().client()?;
    let url = fill(
        GET_BUNDLE_URL,
        &[
            ("productName", NAME),
            ("version", VERSION),
            ("locale", "de"),
            ("component", COMPONENT),
        ],
    );

    let resp = client.get(&url).expect_failure().await;
    resp.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(resp.error_and_data().0.unwrap().kind, "BUNDLE_NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn should_reject_malformed_locale() -> anyhow::Result<()> {
    let client = harness().client()?;
    let url = fill(
        GET_BUNDLE_URL,
        &[
            ("productName", NAME),
            ("version", VERSION),
            ("locale", "e!n"),
            ("component", COMPONENT),
        ],
    );

    let resp = client.get(&url).expect_failure().await;
    resp.assert_status_bad_request();
    let error = resp.error_and_data().0.unwrap();
    assert_eq!(error.kind, "INVALID_LOCALE");
    assert!(error.message.contains("e!n"), "{}", error.message);
    Ok(())
}

// ── GET key ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_single_message() -> anyhow::Result<()> {
    let client = harness().client()?;
    let mut params = BUNDLE_PARAMS.to_vec();
    params.push(("key", KEY));

    let resp = client.get(&fill(GET_KEY_URL, &params)).await;
    resp.assert_status_ok();
    let data = resp.error_and_data().1.unwrap();
    assert_eq!(data["key"], KEY);
    assert_eq!(data["message"], MSG);
    Ok(())
}

#[tokio::test]
async fn should_report_missing_key() -> anyhow::Result<()> {
    let client = harness().client()?;
    let mut params = BUNDLE_PARAMS.to_vec();
    params.push(("key", "no.such.key"));

    let resp = client.get(&fill(GET_KEY_URL, &params)).expect_failure().await;
    resp.assert_status_not_found();
    assert_eq!(resp.error_and_data().0.unwrap().kind, "KEY_NOT_FOUND");
    Ok(())
}

// ── GET bundles ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_every_bundle_without_filters() -> anyhow::Result<()> {
    let client = harness().client()?;

    let resp = client.get(&product_url(GET_BUNDLES_URL)).await;
    resp.assert_status_ok();
    let data = resp.error_and_data().1.unwrap();
    let components: Vec<String> = data["bundles"]
        .as_array()
        .unwrap()
        .iter()
        .map(component_of)
        .collect();

    assert!(position_of(&components, "about").is_some(), "{components:?}");
    assert!(position_of(&components, COMPONENT).is_some(), "{components:?}");
    Ok(())
}

#[tokio::test]
async fn should_filter_bundles_by_locale_and_component() -> anyhow::Result<()> {
    let client = harness().client()?;

    let resp = client
        .get(&product_url(GET_BUNDLES_URL))
        .add_query_param("locales", "en,fr")
        .add_query_param("components", COMPONENT)
        .await;
    resp.assert_status_ok();
    let data = resp.error_and_data().1.unwrap();
    let bundles = data["bundles"].as_array().unwrap();

    assert_eq!(bundles.len(), 2);
    assert!(bundles.iter().all(|b| component_of(b) == COMPONENT));
    let locales: Vec<&str> = bundles.iter().filter_map(|b| b["locale"].as_str()).collect();
    assert_eq!(position_of(&locales, &"en"), Some(0));
    assert_eq!(position_of(&locales, &"fr"), Some(1));
    assert_eq!(position_of(&locales, &"zh-Hans"), None);
    Ok(())
}

#[tokio::test]
async fn should_report_no_matching_bundles() -> anyhow::Result<()> {
    let client = harness().client()?;

    let resp = client
        .get(&product_url(GET_BUNDLES_URL))
        .add_query_param("locales", "ja")
        .expect_failure()
        .await;
    resp.assert_status_not_found();
    assert_eq!(resp.error_and_data().0.unwrap().kind, "BUNDLE_NOT_FOUND");
    Ok(())
}

// ── PUT bundles ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_serve_uploaded_messages_alongside_fixture() -> anyhow::Result<()> {
    let harness = harness();
    let client = harness.client()?;
    let mut rng = harness.rng();
    let key = format!("generated.{}", rng.string(12));
    let message = format!("value {}", rng.int(0, 1_000_000));

    let resp = client
        .put(&product_url(PUT_BUNDLES_URL))
        .json(&json!({
            "bundles": [{
                "component": COMPONENT,
                "locale": LOCALE,
                "messages": { &key: &message },
            }]
        }))
        .await;
    resp.assert_status_ok();
    assert_eq!(resp.error_and_data().1.unwrap()["updated"], 1);

    let resp = client.get(&fill(GET_BUNDLE_URL, &BUNDLE_PARAMS)).await;
    let messages = resp.error_and_data().1.unwrap()["messages"].clone();
    assert_eq!(messages[&key], message, "seed {}", rng.seed());
    assert_eq!(messages[KEY], MSG);
    Ok(())
}

#[tokio::test]
async fn should_create_new_component_through_upload() -> anyhow::Result<()> {
    let harness = harness();
    let client = harness.client()?;
    let component = format!("generated{}", harness.rng().string(10));

    client
        .put(&product_url(PUT_BUNDLES_URL))
        .json(&json!({
            "bundles": [{
                "component": &component,
                "locale": "fr",
                "messages": { "title": "Titre" },
            }]
        }))
        .await
        .assert_status_ok();

    let params = [
        ("productName", NAME),
        ("version", VERSION),
        ("locale", "fr"),
        ("component", component.as_str()),
        ("key", "title"),
    ];
    let resp = client.get(&fill(GET_KEY_URL, &params)).await;
    resp.assert_status_ok();
    assert_eq!(resp.error_and_data().1.unwrap()["message"], "Titre");
    Ok(())
}

#[tokio::test]
async fn should_not_duplicate_locale_uploaded_with_other_casing() -> anyhow::Result<()> {
    let harness = harness();
    let client = harness.client()?;
    let key = format!("upper.{}", harness.rng().string(12));

    client
        .put(&product_url(PUT_BUNDLES_URL))
        .json(&json!({
            "bundles": [{
                "component": COMPONENT,
                "locale": LOCALE.to_uppercase(),
                "messages": { &key: "shouted" },
            }]
        }))
        .await
        .assert_status_ok();

    let resp = client.get(&product_url(GET_SUPPORTED_LOCALES_URL)).await;
    resp.assert_status_ok();
    let locales = resp.error_and_data().1.unwrap()["locales"].clone();
    let english: Vec<&str> = locales
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .filter(|l| l.eq_ignore_ascii_case(LOCALE))
        .collect();
    assert_eq!(english, vec![LOCALE]);

    let resp = client.get(&product_url(GET_BUNDLES_URL)).await;
    resp.assert_status_ok();
    let data = resp.error_and_data().1.unwrap();
    let english_sunglow: Vec<&Value> = data["bundles"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|b| {
            component_of(b) == COMPONENT
                && b["locale"].as_str().is_some_and(|l| l.eq_ignore_ascii_case(LOCALE))
        })
        .collect();
    assert_eq!(english_sunglow.len(), 1);
    assert_eq!(english_sunglow[0]["messages"][&key], "shouted");
    assert_eq!(english_sunglow[0]["messages"][KEY], MSG);
    Ok(())
}

#[tokio::test]
async fn should_reject_empty_upload() -> anyhow::Result<()> {
    let client = harness().client()?;

    let resp = client
        .put(&product_url(PUT_BUNDLES_URL))
        .json(&json!({ "bundles": [] }))
        .expect_failure()
        .await;
    resp.assert_status_bad_request();
    assert_eq!(resp.error_and_data().0.unwrap().kind, "INVALID_ARGUMENT");
    Ok(())
}
