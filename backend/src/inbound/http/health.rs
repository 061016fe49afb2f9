//! Health endpoints: liveness and readiness probes for orchestration.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use tracing::warn;

use crate::domain::SharedDirectory;

/// Shared health state for readiness and liveness checks.
///
/// Readiness additionally requires the directory lock to be usable; a
/// poisoned directory takes the instance out of rotation.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
    directory: SharedDirectory,
}

impl HealthState {
    /// Start as live but not ready.
    pub fn new(directory: SharedDirectory) -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
            directory,
        }
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail fast during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Whether the server has started and the directory is usable.
    pub fn is_ready(&self) -> bool {
        if !self.ready.load(Ordering::Acquire) {
            return false;
        }
        let healthy = self.directory.is_healthy();
        if !healthy {
            warn!("directory lock poisoned; reporting not ready");
        }
        healthy
    }

    /// Return liveness state. When false, liveness probes emit 503.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Readiness probe.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe. Returns 503 once [`HealthState::mark_unhealthy`] is called.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::{fixture, rstest};

    #[fixture]
    fn health() -> web::Data<HealthState> {
        web::Data::new(HealthState::new(SharedDirectory::new()))
    }

    async fn probe(health: web::Data<HealthState>, uri: &str) -> (StatusCode, Option<String>) {
        let app = actix_test::init_service(App::new().app_data(health).service(ready).service(live)).await;
        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
        let cache = res
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        (res.status(), cache)
    }

    #[rstest]
    #[actix_web::test]
    async fn not_ready_until_marked(health: web::Data<HealthState>) {
        let (status, cache) = probe(health.clone(), "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(cache.as_deref(), Some("no-store"));

        health.mark_ready();
        let (status, _) = probe(health, "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn live_until_marked_unhealthy(health: web::Data<HealthState>) {
        let (status, _) = probe(health.clone(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);

        health.mark_unhealthy();
        let (status, cache) = probe(health, "/health/live").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(cache.as_deref(), Some("no-store"));
    }

    #[rstest]
    fn poisoned_directory_is_not_ready() {
        let directory = SharedDirectory::new();
        let health = HealthState::new(directory.clone());
        health.mark_ready();
        let _ = std::thread::spawn(move || {
            let _guard = directory.write().expect("lock");
            panic!("poison");
        })
        .join();
        assert!(!health.is_ready());
    }
}
