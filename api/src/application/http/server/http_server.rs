use std::sync::Arc;

use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use kondate_core::{application::create_service, domain::common::KondateConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::http::{
    analysis::router::analysis_routes,
    chat::router::chat_routes,
    menu::router::menu_routes,
    server::{app_state::AppState, openapi::ApiDoc},
};
use crate::args::Args;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let kondate_config = KondateConfig::from(args.as_ref().clone());
    let service = create_service(kondate_config).await?;

    Ok(AppState::new(args, service))
}

fn allowed_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid allowed origin: {}", origin);
                None
            }
        })
        .collect()
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = allowed_origins(&state.args.server.allowed_origins);
    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let root_path = state.args.server.root_path.clone();

    let mut openapi = ApiDoc::openapi();
    openapi.paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", root_path), item))
        .collect();

    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .merge(menu_routes(state.clone()))
        .merge(analysis_routes(state.clone()))
        .merge(chat_routes(state.clone()))
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);
    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_origins_are_dropped() {
        let origins = allowed_origins(&[
            "http://localhost:3000".to_string(),
            "bad\norigin".to_string(),
        ]);

        assert_eq!(origins, vec![HeaderValue::from_static("http://localhost:3000")]);
    }

    #[test]
    fn openapi_documents_every_route() {
        let openapi = ApiDoc::openapi();
        let paths: Vec<_> = openapi.paths.paths.keys().cloned().collect();

        for path in [
            "/menus",
            "/menus/today",
            "/menus/extract-from-image",
            "/analysis/regression",
            "/chat",
        ] {
            assert!(paths.iter().any(|p| p == path), "missing {path}");
        }
    }
}
