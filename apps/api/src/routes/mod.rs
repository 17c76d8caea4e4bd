pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers::handle_generate_resume;
use crate::profile::handlers::handle_get_profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/profile", post(handle_get_profile))
        .route("/api/v1/resumes", post(handle_generate_resume))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::db::PostmetaSource;
    use crate::errors::AppError;
    use crate::generation::generator::ResumeGenerator;
    use crate::models::postmeta::PostmetaRow;
    use crate::profile::CandidateProfile;

    struct StaticRows(Vec<PostmetaRow>);

    #[async_trait]
    impl PostmetaSource for StaticRows {
        async fn fetch_rows(&self, post_id: u64) -> Result<Vec<PostmetaRow>, AppError> {
            Ok(self
                .0
                .iter()
                .filter(|r| r.post_id == post_id)
                .cloned()
                .collect())
        }
    }

    struct EchoGenerator;

    #[async_trait]
    impl ResumeGenerator for EchoGenerator {
        async fn generate(&self, profile: &CandidateProfile) -> Result<String, AppError> {
            let jobs = profile.experience.as_ref().map_or(0, Vec::len);
            Ok(format!("{} ({jobs} jobs)", profile.name))
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl ResumeGenerator for FailingGenerator {
        async fn generate(&self, _profile: &CandidateProfile) -> Result<String, AppError> {
            Err(AppError::Llm("upstream unavailable".to_string()))
        }
    }

    struct UnreachableRows;

    #[async_trait]
    impl PostmetaSource for UnreachableRows {
        async fn fetch_rows(&self, _post_id: u64) -> Result<Vec<PostmetaRow>, AppError> {
            Err(AppError::Internal(anyhow::anyhow!("connection refused")))
        }
    }

    fn rows() -> Vec<PostmetaRow> {
        vec![
            PostmetaRow::new(475, "member_display_name", "Jane Doe"),
            PostmetaRow::new(475, "email", "j@x.com"),
            PostmetaRow::new(475, "user_phone", "555-1212"),
            PostmetaRow::new(
                475,
                "jobsearch_field_experience_title",
                r#"a:2:{i:0;s:8:"Engineer";i:1;s:4:"Lead";}"#,
            ),
            PostmetaRow::new(
                475,
                "jobsearch_field_experience_start_date",
                r#"a:2:{i:0;s:13:"March 14 2019";i:1;s:14:"January 3 2022";}"#,
            ),
            PostmetaRow::new(
                475,
                "jobsearch_field_experience_date_prsnt",
                r#"a:2:{i:0;s:0:"";i:1;s:2:"on";}"#,
            ),
            PostmetaRow::new(888, "member_display_name", "No Contact"),
        ]
    }

    fn app(generator: Arc<dyn ResumeGenerator>) -> Router {
        build_router(AppState {
            rows: Arc::new(StaticRows(rows())),
            generator,
        })
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(Arc::new(EchoGenerator))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_profile_endpoint_returns_profile() {
        let (status, body) = post_json(
            app(Arc::new(EchoGenerator)),
            "/api/v1/profile",
            r#"{"candidateId": 475}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Jane Doe");
        assert_eq!(
            body["experience"],
            json!([
                {"title": "Engineer", "company": "", "duration": "March 2019", "description": ""},
                {"title": "Lead", "company": "", "duration": "January 2022 - Present", "description": ""}
            ])
        );
        assert!(body.get("education").is_none());
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_profile_endpoint_incomplete_candidate() {
        let (status, body) = post_json(
            app(Arc::new(EchoGenerator)),
            "/api/v1/profile",
            r#"{"candidateId": 888}"#,
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({"error": "Candidate is missing one or more mandatory fields (name, email, phone)"})
        );
    }

    #[tokio::test]
    async fn test_resume_endpoint_generates() {
        let (status, body) = post_json(
            app(Arc::new(EchoGenerator)),
            "/api/v1/resumes",
            r#"{"candidateId": 475}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["output"], "Jane Doe (2 jobs)");
        assert_eq!(body["message"], "Resume successfully created.");
        assert!(body["version"].as_str().unwrap().starts_with("resume-api "));
    }

    #[tokio::test]
    async fn test_resume_endpoint_reports_incomplete_profile() {
        let (status, body) = post_json(
            app(Arc::new(EchoGenerator)),
            "/api/v1/resumes",
            r#"{"candidateId": 888}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["output"], Value::Null);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Error: Candidate is missing"));
    }

    #[tokio::test]
    async fn test_missing_candidate_id_is_bad_request() {
        for body in [r#"{}"#, r#"{"candidateId": 0}"#] {
            let (status, response) =
                post_json(app(Arc::new(EchoGenerator)), "/api/v1/resumes", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(
                response["error"]["message"],
                "Missing 'candidateId' in request body"
            );
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let (status, body) =
            post_json(app(Arc::new(EchoGenerator)), "/api/v1/profile", "not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Invalid request body");
    }

    #[tokio::test]
    async fn test_generator_failure_reported_in_message() {
        let (status, body) = post_json(
            app(Arc::new(FailingGenerator)),
            "/api/v1/resumes",
            r#"{"candidateId": 475}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["output"], Value::Null);
        assert_eq!(body["message"], "Error: LLM error: upstream unavailable");
    }

    #[tokio::test]
    async fn test_row_fetch_failure_reported_in_message() {
        let app = build_router(AppState {
            rows: Arc::new(UnreachableRows),
            generator: Arc::new(EchoGenerator),
        });
        let (status, body) = post_json(app, "/api/v1/resumes", r#"{"candidateId": 475}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["output"], Value::Null);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Error: Internal server error: connection refused"));
    }

    #[tokio::test]
    async fn test_string_candidate_id_accepted() {
        let (status, body) = post_json(
            app(Arc::new(EchoGenerator)),
            "/api/v1/profile",
            r#"{"candidateId": "475"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_non_numeric_candidate_id_is_bad_request() {
        for body in [r#"{"candidateId": "abc"}"#, r#"{"candidateId": ""}"#, r#"{"candidateId": "0"}"#] {
            let (status, response) =
                post_json(app(Arc::new(EchoGenerator)), "/api/v1/profile", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(
                response["error"]["message"],
                "Missing 'candidateId' in request body"
            );
        }
    }
}
