//! End-to-end tests over a real listener, redirects left unfollowed so
//! the navigation policy is visible in the responses.

use metrics_exporter_prometheus::PrometheusBuilder;
use reqwest::StatusCode;
use std::io::Write;

use olympics_dashboard::{AppState, router};
use olympics_data::file_source::FileOlympicsSource;
use olympics_data::snapshot::CountryStore;
use olympics_data::{Country, Participation};

fn fixture() -> Vec<Country> {
    vec![
        Country {
            id: 1,
            name: "France".into(),
            participations: vec![
                Participation {
                    id: 10,
                    year: 2012,
                    city: "Londres".into(),
                    medals_count: 34,
                    athlete_count: 100,
                },
                Participation {
                    id: 11,
                    year: 2016,
                    city: "Rio de Janeiro".into(),
                    medals_count: 42,
                    athlete_count: 110,
                },
            ],
        },
        Country {
            id: 2,
            name: "Germany".into(),
            participations: vec![Participation {
                id: 20,
                year: 2012,
                city: "Londres".into(),
                medals_count: 44,
                athlete_count: 200,
            }],
        },
    ]
}

async fn spawn_app(store: CountryStore) -> String {
    let handle = PrometheusBuilder::new().build_recorder().handle();
    let app = router(AppState::new(store, handle));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .await
            .expect("serve");
    });
    format!("http://{addr}")
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("client")
}

fn loaded_store() -> CountryStore {
    let store = CountryStore::new();
    store.publish(fixture());
    store
}

fn location(resp: &reqwest::Response) -> &str {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn home_serves_the_aggregate_view() {
    let base = spawn_app(loaded_store()).await;
    let resp = client().get(format!("{base}/")).send().await.expect("get");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.expect("json");
    assert_eq!(body["numberOfCountries"].as_u64(), Some(2));
    assert_eq!(body["numberOfJOs"].as_u64(), Some(2));
    assert_eq!(body["chart"][0]["name"].as_str(), Some("France"));
    assert_eq!(body["chart"][0]["value"].as_u64(), Some(76));
    assert_eq!(body["chart"][1]["extra"]["id"].as_u64(), Some(2));
}

#[tokio::test]
async fn home_is_unavailable_until_the_data_arrives() {
    let base = spawn_app(CountryStore::new()).await;
    let resp = client().get(format!("{base}/")).send().await.expect("get");
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(resp.headers().contains_key("retry-after"));
}

#[tokio::test]
async fn detail_is_unavailable_until_the_data_arrives() {
    let base = spawn_app(CountryStore::new()).await;
    let resp = client()
        .get(format!("{base}/detail/1"))
        .send()
        .await
        .expect("get");
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(resp.headers().contains_key("retry-after"));
}

#[tokio::test]
async fn detail_serves_the_country_view() {
    let base = spawn_app(loaded_store()).await;
    let resp = client()
        .get(format!("{base}/detail/1"))
        .send()
        .await
        .expect("get");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.expect("json");
    assert_eq!(body["countryName"].as_str(), Some("France"));
    assert_eq!(body["numberOfEntries"].as_u64(), Some(2));
    assert_eq!(body["totalMedals"].as_u64(), Some(76));
    assert_eq!(body["totalAthletes"].as_u64(), Some(210));
    assert_eq!(body["lineChart"][0]["series"][0]["name"].as_str(), Some("2012"));
    assert_eq!(body["lineChart"][0]["series"][1]["value"].as_u64(), Some(42));
    assert_eq!(body["options"]["xAxisLabel"].as_str(), Some("Dates"));
}

#[tokio::test]
async fn zero_id_redirects_home_even_before_the_data_arrives() {
    // the invalid-parameter check runs before the snapshot is consulted
    let base = spawn_app(CountryStore::new()).await;
    let resp = client()
        .get(format!("{base}/detail/0"))
        .send()
        .await
        .expect("get");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
}

#[tokio::test]
async fn garbage_id_redirects_home() {
    let base = spawn_app(loaded_store()).await;
    let resp = client()
        .get(format!("{base}/detail/abc"))
        .send()
        .await
        .expect("get");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
}

#[tokio::test]
async fn unknown_id_redirects_to_the_not_found_view() {
    let base = spawn_app(loaded_store()).await;
    let resp = client()
        .get(format!("{base}/detail/999"))
        .send()
        .await
        .expect("get");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/404");
}

#[tokio::test]
async fn selection_with_a_navigable_id_goes_to_detail() {
    let base = spawn_app(loaded_store()).await;
    let resp = client()
        .get(format!("{base}/select?id=2"))
        .send()
        .await
        .expect("get");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/detail/2");
}

#[tokio::test]
async fn selection_without_a_navigable_id_is_a_noop() {
    let base = spawn_app(loaded_store()).await;
    for uri in ["/select", "/select?id=0"] {
        let resp = client()
            .get(format!("{base}{uri}"))
            .send()
            .await
            .expect("get");
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}

#[tokio::test]
async fn the_not_found_view_answers_404() {
    let base = spawn_app(loaded_store()).await;
    let resp = client()
        .get(format!("{base}/404"))
        .send()
        .await
        .expect("get");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reflects_snapshot_readiness() {
    let store = CountryStore::new();
    let base = spawn_app(store.clone()).await;

    let body: serde_json::Value = client()
        .get(format!("{base}/health"))
        .send()
        .await
        .expect("get")
        .json()
        .await
        .expect("json");
    assert_eq!(body["ready"].as_bool(), Some(false));

    store.publish(fixture());
    let body: serde_json::Value = client()
        .get(format!("{base}/health"))
        .send()
        .await
        .expect("get")
        .json()
        .await
        .expect("json");
    assert_eq!(body["ready"].as_bool(), Some(true));
    assert_eq!(body["countries"].as_u64(), Some(2));
}

#[tokio::test]
async fn metrics_endpoint_renders_prometheus_text() {
    let base = spawn_app(loaded_store()).await;
    let resp = client()
        .get(format!("{base}/metrics"))
        .send()
        .await
        .expect("get");
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
}

#[tokio::test]
async fn dataset_file_feeds_the_whole_pipeline() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    let json = serde_json::to_string(&fixture()).expect("serialize fixture");
    write!(file, "{json}").expect("write dataset");

    let store = CountryStore::new();
    let source = FileOlympicsSource::new(file.path());
    store.load_from(&source).await.expect("load");

    let base = spawn_app(store).await;
    let body: serde_json::Value = client()
        .get(format!("{base}/"))
        .send()
        .await
        .expect("get")
        .json()
        .await
        .expect("json");
    assert_eq!(body["numberOfCountries"].as_u64(), Some(2));
}
