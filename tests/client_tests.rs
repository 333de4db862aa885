use mockito::Matcher;
use serde_json::json;

use gumdrop::api::{self, CloudProvider, DoClient};
use gumdrop::catalog;
use gumdrop::error::AppError;

fn page_query(page: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("page".into(), page.into()),
        Matcher::UrlEncoded("per_page".into(), "2".into()),
    ])
}

#[tokio::test]
async fn test_images_catalog_follows_next_links() {
    let mut server = mockito::Server::new_async().await;
    let next = format!("{}/v2/images?page=2&per_page=2", server.url());
    let first = server
        .mock("GET", "/v2/images")
        .match_query(page_query("1"))
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "images": [
                    {"id": 1, "name": "22.04 (LTS) x64", "distribution": "Ubuntu", "slug": "ubuntu-22-04-x64"},
                    {"id": 2, "name": "12 x64", "distribution": "Debian", "slug": "debian-12-x64"}
                ],
                "links": {"pages": {"next": next, "last": next}},
                "meta": {"total": 3}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/v2/images")
        .match_query(page_query("2"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "images": [
                    {"id": 3, "name": "22.04 (LTS) x64", "distribution": "Ubuntu", "slug": "ubuntu-22-04-x64-v2"}
                ],
                "links": {"pages": {"first": format!("{}/v2/images?page=1&per_page=2", server.url())}},
                "meta": {"total": 3}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = DoClient::new(&server.url(), "secret-token").unwrap().with_per_page(2);
    let images = catalog::images(&client).await.unwrap();

    first.assert_async().await;
    second.assert_async().await;
    assert_eq!(images.labels(), &["Debian - 12 x64", "Ubuntu - 22.04 (LTS) x64"]);
    assert_eq!(
        images.get("Ubuntu - 22.04 (LTS) x64").unwrap().slug.as_deref(),
        Some("ubuntu-22-04-x64-v2")
    );
}

#[tokio::test]
async fn test_unauthorized_maps_to_api_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/v2/account")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"unauthorized","message":"Unable to authenticate you"}"#)
        .create_async()
        .await;

    let client = DoClient::new(&server.url(), "bad").unwrap();
    let err = api::check_account(&client).await.unwrap_err();

    match err {
        AppError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Unable to authenticate you");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_inactive_account_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/v2/account")
        .with_status(200)
        .with_body(r#"{"account":{"email":"ops@example.com","status":"warning","droplet_limit":10}}"#)
        .create_async()
        .await;

    let client = DoClient::new(&server.url(), "token").unwrap();
    let err = api::check_account(&client).await.unwrap_err();

    assert!(matches!(err, AppError::InactiveAccount(ref s) if s == "warning"));
}

#[tokio::test]
async fn test_create_volume_posts_region_name_and_size() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("POST", "/v2/volumes")
        .match_body(Matcher::PartialJson(json!({
            "region": "nyc1",
            "name": "scratch",
            "size_gigabytes": 10
        })))
        .with_status(201)
        .with_body(
            json!({
                "volume": {"id": "506f78a4-e098-11e5-ad9f-000f53306ae1", "name": "scratch",
                           "region": {"slug": "nyc1", "name": "New York 1"},
                           "size_gigabytes": 10, "droplet_ids": []}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = DoClient::new(&server.url(), "token").unwrap();
    let volume = client.create_volume("nyc1", "scratch", 10).await.unwrap();

    m.assert_async().await;
    assert_eq!(volume.id, "506f78a4-e098-11e5-ad9f-000f53306ae1");
    assert!(!volume.is_attached());
}

#[tokio::test]
async fn test_create_floating_ip_returns_address() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/v2/floating_ips")
        .match_body(Matcher::PartialJson(json!({"region": "sfo3"})))
        .with_status(202)
        .with_body(r#"{"floating_ip":{"ip":"45.55.96.47","region":{"slug":"sfo3","name":"San Francisco 3"},"droplet":null}}"#)
        .create_async()
        .await;

    let client = DoClient::new(&server.url(), "token").unwrap();
    let ip = client.create_floating_ip("sfo3").await.unwrap();

    assert_eq!(ip.ip, "45.55.96.47");
    assert!(!ip.is_assigned());
}

#[tokio::test]
async fn test_server_error_aborts_pagination() {
    let mut server = mockito::Server::new_async().await;
    let next = format!("{}/v2/sizes?page=2&per_page=2", server.url());
    let _first = server
        .mock("GET", "/v2/sizes")
        .match_query(page_query("1"))
        .with_status(200)
        .with_body(
            json!({
                "sizes": [{"slug": "s-1vcpu-1gb", "price_monthly": 6.0, "available": true, "regions": ["nyc1"]}],
                "links": {"pages": {"next": next}}
            })
            .to_string(),
        )
        .create_async()
        .await;
    let _second = server
        .mock("GET", "/v2/sizes")
        .match_query(page_query("2"))
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let client = DoClient::new(&server.url(), "token").unwrap().with_per_page(2);
    let err = catalog::sizes(&client).await.unwrap_err();

    assert!(matches!(err, AppError::Api { status: 500, .. }));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/v2/regions")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let client = DoClient::new(&server.url(), "token").unwrap();
    let err = catalog::regions(&client).await.unwrap_err();

    assert!(matches!(err, AppError::Decode(_)));
}
