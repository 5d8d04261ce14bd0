//! Integration tests for the Notion client against a mock HTTP server.

use std::sync::Arc;

use deskhub_core::content::{BlockSource, PageContentService};
use deskhub_core::workspace_ports::WorkspacePort;
use deskhub_domain::{BlockKind, DeskHubError};
use deskhub_infra::NotionClient;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "secret-integration-token";

fn client(server: &MockServer) -> NotionClient {
    NotionClient::with_base_url(server.uri(), TOKEN).expect("notion client")
}

fn paragraph_json(id: &str, text: &str, has_children: bool) -> serde_json::Value {
    json!({
        "object": "block",
        "id": id,
        "type": "paragraph",
        "has_children": has_children,
        "paragraph": {"rich_text": [{"type": "text", "plain_text": text}]}
    })
}

#[tokio::test]
async fn fetch_children_sends_credentials_and_version_pin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blocks/root/children"))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .and(header("Notion-Version", "2022-06-28"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [paragraph_json("b1", "hello", false)],
            "next_cursor": null,
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let blocks = client(&server).fetch_children("root").await.unwrap();

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].id, "b1");
}

#[tokio::test]
async fn fetch_children_follows_cursor_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blocks/root/children"))
        .and(query_param("start_cursor", "cursor-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [paragraph_json("b2", "second page", false)],
            "next_cursor": null,
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/blocks/root/children"))
        .and(query_param_is_missing("start_cursor"))
        .and(query_param("page_size", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [paragraph_json("b1", "first page", false)],
            "next_cursor": "cursor-2",
            "has_more": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let blocks = client(&server).fetch_children("root").await.unwrap();

    let ids: Vec<&str> = blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b1", "b2"]);
}

#[tokio::test]
async fn rejected_credentials_surface_as_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blocks/root/children"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "object": "error",
            "code": "unauthorized",
            "message": "API token is invalid."
        })))
        .mount(&server)
        .await;

    let result = client(&server).fetch_children("root").await;
    match result {
        Err(DeskHubError::Auth(msg)) => assert!(msg.contains("401")),
        other => panic!("expected auth error, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_source_surfaces_as_network_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server); // connection refused from now on

    let notion = NotionClient::with_base_url(uri, TOKEN).expect("notion client");
    let result = notion.fetch_children("root").await;
    match result {
        Err(DeskHubError::Network(_)) => {}
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn extracts_page_text_through_the_full_engine() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blocks/page-1/children"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                paragraph_json("p1", "Hello", false),
                {
                    "object": "block",
                    "id": "h1",
                    "type": "heading_1",
                    "has_children": true,
                    "heading_1": {"rich_text": [{"plain_text": "Title"}]}
                }
            ],
            "next_cursor": null,
            "has_more": false
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/blocks/h1/children"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [paragraph_json("p2", "World", false)],
            "next_cursor": null,
            "has_more": false
        })))
        .mount(&server)
        .await;

    let service = PageContentService::new(Arc::new(client(&server)));
    let content = service.get_text("page-1").await.unwrap();

    assert_eq!(content, vec!["Hello", "**Title**", "World"]);
}

#[tokio::test]
async fn failing_subtree_fetch_fails_the_extraction() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blocks/page-1/children"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "object": "block",
                "id": "h1",
                "type": "heading_2",
                "has_children": true,
                "heading_2": {"rich_text": [{"plain_text": "Deep"}]}
            }],
            "next_cursor": null,
            "has_more": false
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/blocks/h1/children"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let service = PageContentService::new(Arc::new(client(&server)));
    let result = service.get_text("page-1").await;

    match result {
        Err(DeskHubError::Network(msg)) => assert!(msg.contains("503")),
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn search_databases_maps_titles_with_unnamed_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({"filter": {"property": "object", "value": "database"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"object": "database", "id": "db1", "title": [{"plain_text": "Tasks"}]},
                {"object": "database", "id": "db2", "title": []}
            ]
        })))
        .mount(&server)
        .await;

    let databases = client(&server).search_databases().await.unwrap();

    assert_eq!(databases.len(), 2);
    assert_eq!(databases[0].title, "Tasks");
    assert_eq!(databases[1].title, "Unnamed Database");
}

#[tokio::test]
async fn search_pages_maps_summaries() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({"filter": {"property": "object", "value": "page"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "object": "page",
                "id": "p1",
                "created_time": "2024-03-01T09:00:00.000Z",
                "last_edited_time": "2024-03-02T09:00:00.000Z",
                "url": "https://notion.example/p1",
                "properties": {"title": {"title": [{"plain_text": "Notes"}]}}
            }]
        })))
        .mount(&server)
        .await;

    let pages = client(&server).search_pages().await.unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].title, "Notes");
    assert_eq!(pages[0].created_time.as_deref(), Some("2024-03-01T09:00:00.000Z"));
}

#[tokio::test]
async fn query_database_returns_raw_records() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/databases/db1/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": "row1"}, {"id": "row2"}]
        })))
        .mount(&server)
        .await;

    let rows = client(&server).query_database("db1").await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], "row1");
}

#[tokio::test]
async fn update_page_forwards_properties_verbatim() {
    let server = MockServer::start().await;
    let properties = json!({"Status": {"select": {"name": "Done"}}});
    Mock::given(method("PATCH"))
        .and(path("/pages/p1"))
        .and(body_json(json!({"properties": properties.clone()})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "page",
            "id": "p1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client(&server).update_page("p1", properties.clone()).await.unwrap();

    assert_eq!(updated["id"], "p1");
}

#[tokio::test]
async fn missing_database_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/databases/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client(&server).database_schema("missing").await;
    match result {
        Err(DeskHubError::NotFound(_)) => {}
        other => panic!("expected not found, got {:?}", other),
    }
}
