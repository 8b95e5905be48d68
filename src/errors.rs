use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::analysis::AnalysisError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

fn analysis_status(err: &AnalysisError) -> StatusCode {
    match err {
        AnalysisError::InvalidWallet => StatusCode::BAD_REQUEST,
        AnalysisError::NotFound => StatusCode::NOT_FOUND,
        AnalysisError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        AnalysisError::Unauthorized
        | AnalysisError::ProviderError { .. }
        | AnalysisError::NetworkFailure(_)
        | AnalysisError::FetchFailed(_) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Analysis(e) => (analysis_status(e), e.user_message().to_string()),
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_errors_map_to_http_status() {
        assert_eq!(analysis_status(&AnalysisError::InvalidWallet), StatusCode::BAD_REQUEST);
        assert_eq!(analysis_status(&AnalysisError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            analysis_status(&AnalysisError::RateLimited),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(analysis_status(&AnalysisError::Unauthorized), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn analysis_error_becomes_json_response() {
        let resp = AppError::from(AnalysisError::NotFound).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
