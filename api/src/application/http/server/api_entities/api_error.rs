use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use kondate_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::Conflict(_) => "E_CONFLICT",
            ApiError::BadGateway(_) => "E_BAD_GATEWAY",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound(error.to_string()),
            CoreError::AlreadyExists => ApiError::Conflict(error.to_string()),
            CoreError::Invalid(_)
            | CoreError::InsufficientData(_)
            | CoreError::DegenerateInput(_) => ApiError::BadRequest(error.to_string()),
            CoreError::ExternalServiceError(_) => ApiError::BadGateway(error.to_string()),
            CoreError::InternalServerError => ApiError::InternalServerError(error.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::BadRequest(errors.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = ApiErrorResponse {
            code: self.code().to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules before the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::post};
    use axum_test::TestServer;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, max = 10))]
        name: String,
    }

    async fn echo(ValidateJson(payload): ValidateJson<Payload>) -> String {
        payload.name
    }

    fn server() -> TestServer {
        TestServer::new(Router::new().route("/echo", post(echo))).unwrap()
    }

    #[tokio::test]
    async fn valid_payload_reaches_handler() {
        let response = server().post("/echo").json(&json!({ "name": "miso" })).await;

        response.assert_status_ok();
        response.assert_text("miso");
    }

    #[tokio::test]
    async fn invalid_payload_is_bad_request() {
        let response = server().post("/echo").json(&json!({ "name": "" })).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ApiErrorResponse = response.json();
        assert_eq!(body.code, "E_BAD_REQUEST");
        assert_eq!(body.status, 400);
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let response = server()
            .post("/echo")
            .text("{not json")
            .content_type("application/json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[test]
    fn core_errors_map_to_http_statuses() {
        let cases = [
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (CoreError::AlreadyExists, StatusCode::CONFLICT),
            (CoreError::Invalid("x".into()), StatusCode::BAD_REQUEST),
            (CoreError::InsufficientData("x".into()), StatusCode::BAD_REQUEST),
            (CoreError::DegenerateInput("x".into()), StatusCode::BAD_REQUEST),
            (
                CoreError::ExternalServiceError("x".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status_code(), status);
        }
    }
}
