//! Bulk import HTTP handlers.
//!
//! ```text
//! POST /upload-users-csv   start a background import run
//! GET  /imports/{id}       poll a run registered by the trigger
//! ```
//!
//! The trigger answers 202 before the run finishes; the returned
//! `import_id` is the handle for polling.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Error, ImportJobState, ImportSummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Response payload acknowledging a started import.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ImportStartedResponse {
    pub message: String,
    /// Handle for polling `GET /imports/{id}`.
    pub import_id: Uuid,
}

/// Response payload describing the state of one import run.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ImportStatusResponse {
    /// The run has not finished yet.
    Running { started_at: String },
    /// The run finished; per-row outcomes are in the summary.
    Completed {
        finished_at: String,
        summary: ImportSummary,
    },
    /// The run could not proceed.
    Failed {
        finished_at: String,
        message: String,
    },
}

impl From<ImportJobState> for ImportStatusResponse {
    fn from(state: ImportJobState) -> Self {
        match state {
            ImportJobState::Running { started_at } => Self::Running {
                started_at: started_at.to_rfc3339(),
            },
            ImportJobState::Completed {
                finished_at,
                summary,
            } => Self::Completed {
                finished_at: finished_at.to_rfc3339(),
                summary,
            },
            ImportJobState::Failed {
                finished_at,
                message,
            } => Self::Failed {
                finished_at: finished_at.to_rfc3339(),
                message,
            },
        }
    }
}

/// Start a background import of the configured CSV resource.
#[utoipa::path(
    post,
    path = "/upload-users-csv",
    responses(
        (status = 202, description = "Import started", body = ImportStartedResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["imports"],
    operation_id = "startImport"
)]
#[post("/upload-users-csv")]
pub async fn start_import(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let import_id = state.import_jobs.start();
    let importer = state.importer.clone();
    let jobs = state.import_jobs.clone();

    tokio::spawn(async move {
        match importer.run().await {
            Ok(summary) => jobs.complete(import_id, summary),
            Err(err) => {
                error!(%import_id, %err, "csv import run failed");
                jobs.fail(import_id, err.to_string());
            }
        }
    });

    Ok(HttpResponse::Accepted().json(ImportStartedResponse {
        message: "user import started".to_owned(),
        import_id,
    }))
}

/// Poll the state of one import run.
#[utoipa::path(
    get,
    path = "/imports/{id}",
    params(("id" = Uuid, Path, description = "Import run identifier")),
    responses(
        (status = 200, description = "Import state", body = ImportStatusResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Unknown import run", body = Error)
    ),
    tags = ["imports"],
    operation_id = "getImport"
)]
#[get("/imports/{id}")]
pub async fn get_import(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ImportStatusResponse>> {
    let raw = path.into_inner();
    let id = Uuid::parse_str(&raw).map_err(|_| {
        Error::invalid_request("import id must be a UUID").with_details(json!({
            "field": "id",
            "value": raw,
            "code": "invalid_import_id",
        }))
    })?;

    let job = state
        .import_jobs
        .get(id)
        .ok_or_else(|| Error::not_found("import run not found"))?;
    Ok(web::Json(ImportStatusResponse::from(job)))
}
