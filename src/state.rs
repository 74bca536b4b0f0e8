/// Shared application state passed to all handlers.
/// The HTTP client is built once at startup rather than per request so its
/// connection pool is reused across fetches; clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    pub http_client: reqwest::Client,
}
