use httpmock::prelude::*;
use miki_api::{
    error::Error,
    image::{ImagesQuery, ImagesResponse},
    Config, Imghoard, ImghoardClient,
};
use serde_json::json;

fn client(server: &MockServer, experimental: bool) -> ImghoardClient {
    let config = Config::default()
        .endpoint(server.url("/images"))
        .tenancy("test")
        .user_agent("MikiApiTests/1.0")
        .experimental(experimental);
    ImghoardClient::new(config).unwrap()
}

fn png(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    bytes[..8].copy_from_slice(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    bytes
}

fn gif(len: usize) -> Vec<u8> {
    let mut bytes = vec![b'0'; len];
    bytes[..6].copy_from_slice(b"GIF89a");
    bytes
}

#[tokio::test]
async fn lists_images_with_page_and_tags() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/images")
                .query_param_exists("page2")
                .query_param_exists("cat cute")
                .header("x-miki-tenancy", "test")
                .header("user-agent", "MikiApiTests/1.0");
            then.status(200).json_body(json!([
                {"ID": 1, "Tags": ["cat", "cute"], "URL": "https://cdn.miki.ai/1.png"},
                {"ID": 2, "Tags": ["cat"], "URL": "https://cdn.miki.ai/2.gif"}
            ]));
        })
        .await;

    let response = client(&server, false)
        .images_page(2, &["cat", "cute"])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.page(), 2);
    assert_eq!(response.query_tags(), ["cat", "cute"]);
    assert_eq!(response.len(), 2);
    assert_eq!(response[0].id(), 1);
    assert_eq!(response[1].url(), "https://cdn.miki.ai/2.gif");
}

#[tokio::test]
async fn first_page_has_no_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/images");
            then.status(200).json_body(json!([]));
        })
        .await;

    let response = client(&server, false).images(&[]).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.page(), 0);
    assert!(response.images().is_empty());
}

#[tokio::test]
async fn not_found_carries_reason() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/images");
            then.status(404);
        })
        .await;

    let err = client(&server, false)
        .images_page(2, &["cat", "cute"])
        .await
        .unwrap_err();

    assert!(matches!(&err, Error::Response(reason) if reason == "Not Found"));
    assert!(err.to_string().contains("Not Found"));
}

#[tokio::test]
async fn next_page_replays_tags() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/images").query_param_exists("page4");
            then.status(200).json_body(json!([]));
        })
        .await;

    let previous = ImagesResponse::new(Vec::new(), ImagesQuery::new(3, &["a"]));
    let next = client(&server, false).next_page(&previous).await.unwrap();

    mock.assert_async().await;
    assert_eq!(next.page(), 4);
    assert_eq!(next.query_tags(), ["a"]);
}

#[tokio::test]
async fn fetches_single_image() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/images/1191384925165797376");
            then.status(200).json_body(json!({
                "ID": 1_191_384_925_165_797_376_u64,
                "Tags": ["fox"],
                "URL": "https://cdn.miki.ai/fox.jpeg"
            }));
        })
        .await;

    let image = client(&server, false)
        .image(1_191_384_925_165_797_376)
        .await
        .unwrap();

    assert_eq!(image.id(), 1_191_384_925_165_797_376);
    assert_eq!(image.tags(), ["fox"]);
}

#[tokio::test]
async fn endpoint_with_trailing_slash() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/images/42");
            then.status(200)
                .json_body(json!({"ID": 42, "Tags": [], "URL": "https://cdn.miki.ai/42.png"}));
        })
        .await;

    let config = Config::default().endpoint(server.url("/images/"));
    let image = ImghoardClient::new(config).unwrap().image(42).await.unwrap();

    mock.assert_async().await;
    assert_eq!(image.id(), 42);
}

#[tokio::test]
async fn small_upload_is_inline_json() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/images")
                .header("content-type", "application/json")
                .body_includes("data:image/png;base64,iVBORw0KGgo")
                .body_includes("\"Tags\":[\"cat\"]");
            then.status(200)
                .json_body(json!({"File": "https://cdn.miki.ai/new.png"}));
        })
        .await;

    let url = client(&server, false)
        .post_image(&png(64), &["cat"])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(url, "https://cdn.miki.ai/new.png");
}

#[tokio::test]
async fn just_under_a_megabyte_stays_inline() {
    for experimental in [false, true] {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/images")
                    .header("content-type", "application/json");
                then.status(200).json_body(json!({"File": "https://cdn.miki.ai/big.png"}));
            })
            .await;

        let url = client(&server, experimental)
            .post_image(&png(999_999), &[])
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(url, "https://cdn.miki.ai/big.png");
    }
}

#[tokio::test]
async fn megabyte_needs_experimental() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/images");
            then.status(200).json_body(json!({"File": "unused"}));
        })
        .await;

    let err = client(&server, false)
        .post_image(&png(1_000_000), &["cat"])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotSupported(_)));
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn megabyte_goes_multipart_when_experimental() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/images")
                .body_includes("name=\"data-type\"")
                .body_includes("image/gif")
                .body_includes("name=\"data\"")
                .body_includes("name=\"tags\"")
                .body_includes("cat,cute");
            then.status(200)
                .json_body(json!({"File": "https://cdn.miki.ai/huge.gif"}));
        })
        .await;

    let url = client(&server, true)
        .post_image(&gif(1_000_000), &["cat", "cute"])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(url, "https://cdn.miki.ai/huge.gif");
}

#[tokio::test]
async fn unknown_format_is_rejected() {
    let server = MockServer::start_async().await;
    let err = client(&server, true)
        .post_image(&[0u8; 32], &["cat"])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnsupportedFormat));
}

#[tokio::test]
async fn failed_upload_carries_reason() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/images");
            then.status(500);
        })
        .await;

    let err = client(&server, false)
        .post_image(&png(16), &[])
        .await
        .unwrap_err();

    assert!(matches!(&err, Error::Response(reason) if reason == "Internal Server Error"));
}

#[tokio::test]
async fn uploads_from_reader() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/images")
                .body_includes("data:image/jpeg;base64,");
            then.status(200)
                .json_body(json!({"File": "https://cdn.miki.ai/read.jpeg"}));
        })
        .await;

    let bytes = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    let url = client(&server, false)
        .post_image_reader(&bytes[..], &["reader"])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(url, "https://cdn.miki.ai/read.jpeg");
}
