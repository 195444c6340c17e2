//! Integration tests for GitHubClient
//!
//! Runs the client against a local fake of the repository listing API.

use actix_web::{web, App, HttpRequest, HttpResponse};
use repopulse::config::GitHubConfig;
use repopulse::error::FetchError;
use repopulse::github::{GitHubClient, RepositorySource};

use crate::common::RepoBuilder;

const USER_AGENT: &str = "repopulse-test";

/// Mimics GET /orgs/{org}/repos; insists on the listing query and a User-Agent
async fn list_repos(path: web::Path<String>, req: HttpRequest) -> HttpResponse {
    let org = path.into_inner();

    let agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if agent != USER_AGENT {
        return HttpResponse::Forbidden().finish();
    }

    let expected = ["sort=stars", "direction=desc"];
    if !expected.iter().all(|p| req.query_string().contains(p)) {
        return HttpResponse::BadRequest().finish();
    }

    let per_page: usize = web::Query::<std::collections::HashMap<String, String>>::from_query(
        req.query_string(),
    )
    .ok()
    .and_then(|q| q.get("per_page").and_then(|v| v.parse().ok()))
    .unwrap_or(30);

    let repos: Vec<_> = (0..10)
        .map(|i| {
            RepoBuilder::new(&format!("{org}-{i}"))
                .with_stars(1000 - i * 10)
                .json()
        })
        .take(per_page)
        .collect();

    HttpResponse::Ok().json(repos)
}

fn fake_github() -> actix_test::TestServer {
    actix_test::start(|| {
        App::new()
            .route("/orgs/{org}/repos", web::get().to(list_repos))
            .route("/api/v3/orgs/{org}/repos", web::get().to(list_repos))
            .route(
                "/broken/orgs/{org}/repos",
                web::get().to(|| async {
                    HttpResponse::Ok()
                        .content_type("application/json")
                        .body("{\"message\": \"not a list\"}")
                }),
            )
            .route(
                "/down/orgs/{org}/repos",
                web::get().to(|| async { HttpResponse::BadGateway().finish() }),
            )
            .route(
                "/null/orgs/{org}/repos",
                web::get().to(|| async {
                    HttpResponse::Ok()
                        .content_type("application/json")
                        .body("null")
                }),
            )
    })
}

fn client(api_url: String) -> GitHubClient {
    GitHubClient::new(&GitHubConfig {
        api_url,
        user_agent: USER_AGENT.to_string(),
        org_override: None,
    })
    .expect("client should build")
}

// =============================================================================
// Successful Listing Tests
// =============================================================================

#[actix_web::test]
async fn test_fetch_lists_top_repositories() {
    let srv = fake_github();
    let client = client(srv.url(""));

    let repos = client.try_fetch_top_org_repos("octocat", 3).await.unwrap();

    assert_eq!(repos.len(), 3);
    assert_eq!(repos[0].string_field("name"), "octocat-0");
    assert_eq!(repos[2].string_field("name"), "octocat-2");
}

#[actix_web::test]
async fn test_fetch_respects_base_path() {
    let srv = fake_github();
    let client = client(srv.url("/api/v3"));

    let repos = client.fetch_top_org_repos("acme", 2).await.unwrap();

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[1].string_field("name"), "acme-1");
}

#[actix_web::test]
async fn test_null_body_is_empty_listing() {
    let srv = fake_github();
    let client = client(srv.url("/null"));

    let repos = client.try_fetch_top_org_repos("octocat", 5).await.unwrap();
    assert!(repos.is_empty());
}

// =============================================================================
// Failure Tests
// =============================================================================

#[actix_web::test]
async fn test_error_status_is_reported_by_strict_fetch() {
    let srv = fake_github();
    let client = client(srv.url("/down"));

    let result = client.try_fetch_top_org_repos("octocat", 5).await;
    assert!(matches!(result, Err(FetchError::Status(502))));
}

#[actix_web::test]
async fn test_unexpected_body_is_reported_by_strict_fetch() {
    let srv = fake_github();
    let client = client(srv.url("/broken"));

    let result = client.try_fetch_top_org_repos("octocat", 5).await;
    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[actix_web::test]
async fn test_source_swallows_failures() {
    let srv = fake_github();

    for prefix in ["/down", "/broken"] {
        let client = client(srv.url(prefix));
        let repos = client.fetch_top_org_repos("octocat", 5).await.unwrap();
        assert!(repos.is_empty(), "{prefix} should yield no repositories");
    }
}

#[actix_web::test]
async fn test_connection_failure_is_swallowed() {
    // Nothing listens on port 1
    let client = client("http://127.0.0.1:1".to_string());

    let strict = client.try_fetch_top_org_repos("octocat", 5).await;
    assert!(matches!(strict, Err(FetchError::Request(_))));

    let lenient = client.fetch_top_org_repos("octocat", 5).await.unwrap();
    assert!(lenient.is_empty());
}

#[actix_web::test]
async fn test_foreign_user_agent_is_rejected() {
    let srv = fake_github();
    let client = GitHubClient::new(&GitHubConfig {
        api_url: srv.url(""),
        user_agent: "someone-else".to_string(),
        org_override: None,
    })
    .unwrap();

    let result = client.try_fetch_top_org_repos("octocat", 1).await;
    assert!(matches!(result, Err(FetchError::Status(403))));
}
