//! Wire-level tests for the API client and the controller flows above it.

use std::sync::Arc;

use httpmock::MockServer;
use url::Url;

use vitrine::application::editor::{
    ConfirmationGate, DeleteDecision, DetailEditor, EditorOutcome,
};
use vitrine::application::list::{ListController, ListPhase};
use vitrine::application::tag_index::TagIndexLoader;
use vitrine::application::transport::{ClientError, ListQuery, ResourceClient};
use vitrine::domain::resource::{BlogPost, Project, Shape};
use vitrine::infra::api::ApiClient;

struct Always(DeleteDecision);

#[async_trait::async_trait]
impl ConfirmationGate for Always {
    async fn confirm(&self, _prompt: &str) -> DeleteDecision {
        self.0
    }
}

fn client(server: &MockServer) -> Arc<ApiClient> {
    let base = Url::parse(&server.base_url()).expect("base url");
    Arc::new(ApiClient::new(&base).expect("client"))
}

#[tokio::test]
async fn list_sends_page_search_and_tag_parameters() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/api/blogs")
            .query_param("page", "2")
            .query_param("search", "rust async")
            .query_param("tag", "systems");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"items":[],"totalPages":4}"#);
    });

    let client = client(&server);
    let query = ListQuery {
        page: 2,
        search: "rust async".into(),
        tag: "systems".into(),
    };
    let result = ResourceClient::<BlogPost>::list(client.as_ref(), &query)
        .await
        .expect("list result");

    mock.assert();
    assert!(result.items.is_empty());
    assert_eq!(result.total_pages, 4);
}

#[tokio::test]
async fn unfiltered_list_sends_empty_strings() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/api/projects")
            .query_param("page", "1")
            .query_param("search", "")
            .query_param("tag", "");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"items":[{"_id":"p1","title":"Tracer","description":"D","shape":"torus"}],"totalPages":1}"#,
            );
    });

    let client = client(&server);
    let result = ResourceClient::<Project>::list(client.as_ref(), &ListQuery::default())
        .await
        .expect("list result");

    mock.assert();
    assert_eq!(result.items[0].id, "p1");
    assert_eq!(result.items[0].shape, Shape::Torus);
}

#[tokio::test]
async fn tag_facet_uses_family_base_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/api/blogs/tags");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"["rust","wasm"]"#);
    });

    let client = client(&server);
    let tags = ResourceClient::<BlogPost>::list_tags(client.as_ref())
        .await
        .expect("tag facet");

    mock.assert();
    assert_eq!(tags, vec!["rust", "wasm"]);
}

#[tokio::test]
async fn missing_resource_maps_to_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/blogs/missing");
        then.status(404).body("no such post");
    });

    let client = client(&server);
    let err = ResourceClient::<BlogPost>::get(client.as_ref(), "missing")
        .await
        .expect_err("missing id fails");

    assert!(err.is_not_found());
}

#[tokio::test]
async fn server_failure_maps_to_transport_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/api/blogs/7");
        then.status(500).body("boom");
    });

    let client = client(&server);
    let err = ResourceClient::<BlogPost>::get(client.as_ref(), "7")
        .await
        .expect_err("server failure surfaces");

    assert!(matches!(err, ClientError::Transport { .. }));
}

#[tokio::test]
async fn create_posts_draft_without_identifier() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/api/blogs")
            .json_body_includes(r#"{"title":"T","excerpt":"E","content":"C","tags":["rust"]}"#);
        then.status(201)
            .header("content-type", "application/json")
            .body(r#"{"_id":"42","title":"T","excerpt":"E","content":"C","tags":["rust"]}"#);
    });

    let client = client(&server);
    let draft = BlogPost {
        title: "T".into(),
        excerpt: "E".into(),
        content: "C".into(),
        tags: vec!["rust".into()],
        ..BlogPost::default()
    };
    let created = ResourceClient::<BlogPost>::create(client.as_ref(), &draft)
        .await
        .expect("created post");

    mock.assert();
    assert_eq!(created.id.as_deref(), Some("42"));
}

#[tokio::test]
async fn update_patches_full_state_at_identifier_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("PATCH")
            .path("/api/projects/p1")
            .json_body_includes(r#"{"title":"Tracer","githubLink":"https://github.com/x/y"}"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"_id":"p1","title":"Tracer","description":"D","githubLink":"https://github.com/x/y","liveUrl":"","shape":"box","image":""}"#,
            );
    });

    let client = client(&server);
    let project = Project {
        id: Some("p1".into()),
        title: "Tracer".into(),
        description: "D".into(),
        github_link: "https://github.com/x/y".into(),
        ..Project::default()
    };
    let updated = ResourceClient::<Project>::update(client.as_ref(), "p1", &project)
        .await
        .expect("updated project");

    mock.assert();
    assert_eq!(updated.github_link, "https://github.com/x/y");
}

#[tokio::test]
async fn delete_requires_only_a_success_status() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("DELETE").path("/api/blogs/42");
        then.status(204);
    });

    let client = client(&server);
    ResourceClient::<BlogPost>::delete(client.as_ref(), "42")
        .await
        .expect("deleted");
    mock.assert();
}

#[tokio::test]
async fn list_controller_refreshes_against_live_endpoint() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET")
            .path("/api/blogs")
            .query_param("page", "1")
            .query_param("search", "rust")
            .query_param("tag", "");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"items":[{"_id":"1","title":"One","excerpt":"…","tags":["rust"]}],"totalPages":2}"#,
            );
    });

    let api = client(&server);
    let transport: Arc<dyn ResourceClient<BlogPost>> = api;
    let mut controller = ListController::<BlogPost>::new(transport.clone());
    controller.set_page(3);
    controller.set_search("rust");

    let loader = TagIndexLoader::<BlogPost>::new(transport);
    let ((), facet) = tokio::join!(controller.refresh(), loader.load());

    // The search change reset the page before the fetch went out.
    assert_eq!(controller.query().page, 1);
    assert_eq!(controller.phase(), ListPhase::Loaded);
    assert_eq!(controller.items().len(), 1);
    assert!(controller.can_go_next());
    // No tags route mocked: the facet degraded silently.
    assert!(facet.is_empty());
}

#[tokio::test]
async fn editor_deletes_with_the_server_assigned_identifier() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method("POST").path("/api/blogs");
        then.status(201)
            .header("content-type", "application/json")
            .body(r#"{"_id":"42","title":"T","excerpt":"E","content":"C","tags":[]}"#);
    });
    let delete = server.mock(|when, then| {
        when.method("DELETE").path("/api/blogs/42");
        then.status(200);
    });

    let transport: Arc<dyn ResourceClient<BlogPost>> = client(&server);
    let mut editor = DetailEditor::<BlogPost>::new(transport);
    editor.edit(|post| {
        post.title = "T".into();
        post.excerpt = "E".into();
        post.content = "C".into();
    });

    assert_eq!(editor.submit().await, EditorOutcome::Done);
    assert_eq!(
        editor.delete(&Always(DeleteDecision::Confirmed)).await,
        EditorOutcome::Done
    );

    create.assert();
    delete.assert();
}
