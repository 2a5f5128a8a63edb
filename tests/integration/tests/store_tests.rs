//! Store integration tests
//!
//! Drive the stores through the real client against the fake backend and
//! check state, derived views and notifications together.
//!
//! Run with: cargo test -p integration-tests --test store_tests

use std::sync::Arc;

use axum::http::Method;
use folio_client::ApiClient;
use folio_common::ApiConfig;
use folio_core::{
    validate_contact, ContactMessage, ErrorCode, ErrorInfo, ProjectQuery, SkillQuery,
    UpdateProject,
};
use folio_store::{Portfolio, ToastKind, ToastService, CONTACT_SENT_MESSAGE};
use integration_tests::{fixtures::*, toasts_of, FakeBackend, TestServer};

async fn seeded_server() -> TestServer {
    let backend = FakeBackend::new();
    backend.seed_projects(vec![
        project(1, "Storefront", "Web"),
        featured_project(2, "Field App", "Mobile"),
        project(3, "Dashboard", "Web"),
    ]);
    backend.seed_skills(vec![
        skill(10, "TypeScript", "Frontend", 4),
        skill(11, "Rust", "Backend", 5),
        skill(12, "CSS", "Frontend", 4),
        skill(13, "Vue", "Frontend", 5),
    ]);
    backend.set_profile(profile());
    TestServer::start_with(backend)
        .await
        .expect("Failed to start server")
}

#[tokio::test]
async fn test_load_all_populates_stores_and_views() {
    let server = seeded_server().await;
    let portfolio = server.portfolio().unwrap();

    assert!(portfolio.load_all().await);

    assert_eq!(
        portfolio.profile.profile().map(|p| p.name),
        Some("Jane Doe".to_string())
    );
    assert_eq!(portfolio.projects.categories().current(), vec!["Mobile", "Web"]);
    assert_eq!(portfolio.projects.featured().current()[0].id, 2);

    let groups = portfolio.skills.grouped_by_category().current();
    let frontend: Vec<_> = groups["Frontend"].iter().map(|s| s.name.as_str()).collect();
    assert_eq!(frontend, vec!["Vue", "CSS", "TypeScript"]);
    assert!(portfolio.toasts().is_empty());
}

#[tokio::test]
async fn test_server_error_on_load_is_kept_and_toasted_once() {
    let server = seeded_server().await;
    let portfolio = server.portfolio().unwrap();
    assert!(portfolio.projects.load(ProjectQuery::default()).await);

    server
        .backend
        .fail_next_with_server_error(Method::GET, "/api/projects");
    assert!(!portfolio.projects.load(ProjectQuery::default()).await);

    let state = portfolio.projects.snapshot();
    assert_eq!(
        state.loading.error,
        Some(ErrorInfo::new(
            ErrorCode::from_code("SERVER_ERROR"),
            "Internal server error"
        ))
    );
    assert!(!state.loading.is_loading);
    assert_eq!(state.projects.len(), 3, "collection left as it was");

    let errors = toasts_of(portfolio.toasts(), ToastKind::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message.as_deref(), Some("Internal server error"));
    assert_eq!(portfolio.toasts().len(), 1);
}

#[tokio::test]
async fn test_created_project_is_appended_once() {
    let server = seeded_server().await;
    let portfolio = server.portfolio().unwrap();
    portfolio.projects.load(ProjectQuery::default()).await;

    assert!(portfolio.projects.create(&new_project("Web")).await);

    let ids: Vec<_> = portfolio.projects.projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(toasts_of(portfolio.toasts(), ToastKind::Success).len(), 1);
    assert_eq!(portfolio.toasts().len(), 1);
}

#[tokio::test]
async fn test_category_view_tracks_mutations() {
    let server = seeded_server().await;
    let portfolio = server.portfolio().unwrap();
    let web = portfolio.projects.by_category("Web");
    portfolio.projects.load(ProjectQuery::default()).await;
    assert_eq!(web.current().iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);

    let update = UpdateProject {
        category: Some("Mobile".to_string()),
        ..UpdateProject::default()
    };
    assert!(portfolio.projects.update(1, &update).await);
    assert_eq!(web.current().iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);

    assert!(portfolio.projects.delete(3).await);
    assert!(web.current().is_empty());
    assert_eq!(portfolio.projects.categories().current(), vec!["Mobile"]);
}

#[tokio::test]
async fn test_failed_mutation_leaves_state_and_error_untouched() {
    let server = seeded_server().await;
    let portfolio = server.portfolio().unwrap();
    portfolio.skills.load(SkillQuery::default()).await;
    let before = portfolio.skills.snapshot();

    assert!(!portfolio.skills.create(&new_skill("Backend", 0)).await);
    assert!(!portfolio.skills.delete(999).await);

    assert_eq!(portfolio.skills.snapshot(), before);
    assert_eq!(toasts_of(portfolio.toasts(), ToastKind::Error).len(), 2);
}

#[tokio::test]
async fn test_unreachable_backend_surfaces_network_error() {
    // Grab a free port and release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = ApiConfig::new(&format!("http://127.0.0.1:{port}")).unwrap();
    let portfolio = Portfolio::new(Arc::new(ApiClient::new(config).unwrap()), ToastService::new());

    assert!(!portfolio.profile.load().await);
    let error = portfolio.profile.snapshot().loading.error.unwrap();
    assert_eq!(error.code, ErrorCode::Network);
    assert_eq!(toasts_of(portfolio.toasts(), ToastKind::Error).len(), 1);
}

#[tokio::test]
async fn test_contact_flow() {
    let server = seeded_server().await;
    let portfolio = server.portfolio().unwrap();

    let invalid = ContactMessage::new("J", "not-an-email", "Hi", "Short");
    assert!(validate_contact(&invalid).is_err());

    let message = contact_message();
    validate_contact(&message).unwrap();
    assert!(portfolio.contact.send_message(&message).await);
    assert!(portfolio.contact.snapshot().success);
    assert_eq!(server.backend.contacts().len(), 1);

    let sent = toasts_of(portfolio.toasts(), ToastKind::Success);
    assert_eq!(sent[0].message.as_deref(), Some(CONTACT_SENT_MESSAGE));

    portfolio.contact.reset();
    assert!(!portfolio.contact.snapshot().success);
    assert_eq!(server.backend.requests().len(), 1, "reset makes no request");
}

#[tokio::test]
async fn test_server_side_contact_rejection() {
    let server = seeded_server().await;
    let portfolio = server.portfolio().unwrap();

    let invalid = ContactMessage::new("J", "jane@example.com", "Bonjour", "Un message assez long");
    assert!(!portfolio.contact.send_message(&invalid).await);

    let state = portfolio.contact.snapshot();
    assert!(!state.success);
    assert_eq!(state.loading.error.map(|e| e.code.as_str().to_string()), Some("400".to_string()));
    assert_eq!(toasts_of(portfolio.toasts(), ToastKind::Error).len(), 1);
}
