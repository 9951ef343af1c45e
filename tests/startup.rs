mod common;

use std::collections::BTreeMap;
use url_redirector::config::Config;
use url_redirector::domain::{Outcome, SourceError};
use url_redirector::server::build_redirects;

fn redirect(target: &str) -> Outcome {
    Outcome::Redirect(target.to_string())
}

fn config_with_static(routes: &[(&str, &str)]) -> Config {
    Config {
        static_routes: routes
            .iter()
            .map(|(path, url)| (path.to_string(), url.to_string()))
            .collect::<BTreeMap<_, _>>(),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_default_config_serves_builtin_routes() {
    let redirects = build_redirects(&Config::default()).await.unwrap();

    assert_eq!(
        redirects.handle("/urlshort-godoc"),
        redirect("https://godoc.org/github.com/gophercises/urlshort")
    );
    assert_eq!(redirects.handle("/unknown"), Outcome::Fallthrough);
}

#[tokio::test]
async fn test_file_layers_stack_in_order() {
    let yaml = common::write_temp_file(
        ".yml",
        "- path: /shared\n  url: https://yaml.example.com\n- path: /yaml-only\n  url: https://yaml.example.com/only\n",
    );
    let json = common::write_temp_file(
        ".json",
        r#"[{"path": "/shared", "url": "https://json.example.com"}]"#,
    );

    let mut config = config_with_static(&[
        ("/shared", "https://static.example.com"),
        ("/static-only", "https://static.example.com/only"),
    ]);
    config.yaml_path = Some(yaml.path().to_path_buf());
    config.json_path = Some(json.path().to_path_buf());

    let redirects = build_redirects(&config).await.unwrap();

    assert_eq!(redirects.handle("/shared"), redirect("https://json.example.com"));
    assert_eq!(
        redirects.handle("/yaml-only"),
        redirect("https://yaml.example.com/only")
    );
    assert_eq!(
        redirects.handle("/static-only"),
        redirect("https://static.example.com/only")
    );
}

#[tokio::test]
async fn test_malformed_yaml_aborts_startup() {
    let yaml = common::write_temp_file(".yml", "- path: /blog\n  url: [https://example.com\n");

    let mut config = config_with_static(&[("/docs", "https://example.com/docs")]);
    config.yaml_path = Some(yaml.path().to_path_buf());

    let err = build_redirects(&config).await.err().unwrap();

    assert!(matches!(err, SourceError::Parse { .. }));
    assert!(err.source_name().starts_with("YAML file"));
}

#[tokio::test]
async fn test_missing_json_file_aborts_startup() {
    let dir = tempfile::tempdir().unwrap();

    let mut config = Config::default();
    config.json_path = Some(dir.path().join("routes.json"));

    let err = build_redirects(&config).await.err().unwrap();

    assert!(matches!(err, SourceError::Unavailable { .. }));
}

#[tokio::test]
async fn test_end_to_end_over_http() {
    let yaml = common::write_temp_file(".yml", "- path: /blog\n  url: https://example.com/blog");

    let mut config = config_with_static(&[("/docs", "https://example.com/docs")]);
    config.yaml_path = Some(yaml.path().to_path_buf());

    let server = common::create_test_server(build_redirects(&config).await.unwrap());

    let response = server.get("/docs").await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/docs");

    let response = server.get("/blog").await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/blog");

    let response = server.get("/missing").await;
    response.assert_status_ok();
    response.assert_text("Hello, world!");
}

#[tokio::test]
async fn test_rebuilding_is_idempotent() {
    let json = common::write_temp_file(
        ".json",
        r#"[{"path": "/a", "url": "u1"}, {"path": "/a", "url": "u2"}, {"path": "/b", "url": "u3"}]"#,
    );

    let mut config = config_with_static(&[("/a", "u0")]);
    config.json_path = Some(json.path().to_path_buf());

    let first = build_redirects(&config).await.unwrap();
    let second = build_redirects(&config).await.unwrap();

    for path in ["/a", "/b", "/c", "/"] {
        assert_eq!(first.handle(path), second.handle(path));
    }
    assert_eq!(first.handle("/a"), redirect("u2"));
}
