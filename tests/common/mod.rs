#![allow(dead_code)]

use axum_test::TestServer;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use url_redirector::domain::Handler;
use url_redirector::routes::app_router;
use url_redirector::state::AppState;

pub const DEFAULT_BODY: &str = "Hello, world!";

pub fn create_test_server(redirects: Arc<dyn Handler>) -> TestServer {
    let state = AppState::new(redirects, DEFAULT_BODY);
    TestServer::new(app_router(state)).unwrap()
}

pub fn write_temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}
