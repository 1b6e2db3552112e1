//! End-to-end behaviour of the background CSV import: trigger, poll,
//! structured summary.

mod support;

use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use async_trait::async_trait;
use serde_json::Value;
use tempfile::NamedTempFile;

use backend::domain::import::{ImportError, ImportSummary, import_users_from_csv};
use backend::domain::ports::ImportRunner;
use support::{StubImportRunner, StubUserRepository, test_app};

/// Runner reading a real CSV file into the stub repository.
struct FileImportRunner {
    repository: Arc<StubUserRepository>,
    path: PathBuf,
}

#[async_trait]
impl ImportRunner for FileImportRunner {
    async fn run(&self) -> Result<ImportSummary, ImportError> {
        import_users_from_csv(self.repository.as_ref(), &self.path).await
    }
}

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

#[actix_web::test]
async fn triggered_import_is_pollable_to_completion() {
    let repository = StubUserRepository::new();
    let file = csv_file(
        "full_name,id_document,address,city,phone_number,email\n\
         Ada Lovelace,CC100,12 Analytical Row,London,1234567,ada@example.com\n\
         Missing Email,CC200,5 Somewhere St,Leeds,7654321,\n\
         Ada Again,CC100,Other Address 44,London,1234567,ada2@example.com\n\
         Grace Hopper,CC300,9 Compiler Ave,York,2345678,grace@example.com\n",
    );
    let runner = Arc::new(FileImportRunner {
        repository: repository.clone(),
        path: file.path().to_path_buf(),
    });
    let app = actix_test::init_service(test_app(repository.clone(), runner)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/upload-users-csv")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body: Value = actix_test::read_body_json(response).await;
    let import_id = body["import_id"].as_str().expect("import id").to_owned();

    let mut status = Value::Null;
    for _ in 0..50 {
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/imports/{import_id}"))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        status = actix_test::read_body_json(response).await;
        if status["state"] != Value::from("running") {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert_eq!(status["state"], Value::from("completed"));
    let summary = &status["summary"];
    assert_eq!(summary["inserted"], Value::from(2));
    assert_eq!(summary["duplicates"], Value::from(1));
    assert_eq!(summary["skipped"], Value::from(1));
    assert_eq!(summary["failed"], Value::from(0));

    let documents: Vec<String> = repository
        .stored_users()
        .into_iter()
        .map(|u| u.id_document)
        .collect();
    assert_eq!(documents, vec!["CC100", "CC300"]);
}

#[actix_web::test]
async fn failed_runs_report_their_message() {
    let repository = StubUserRepository::new();
    let runner = StubImportRunner::failing("csv resource missing");
    let app = actix_test::init_service(test_app(repository, runner)).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/upload-users-csv")
            .to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(response).await;
    let import_id = body["import_id"].as_str().expect("import id").to_owned();

    let mut status = Value::Null;
    for _ in 0..50 {
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/imports/{import_id}"))
                .to_request(),
        )
        .await;
        status = actix_test::read_body_json(response).await;
        if status["state"] != Value::from("running") {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert_eq!(status["state"], Value::from("failed"));
    assert!(
        status["message"]
            .as_str()
            .expect("failure message")
            .contains("csv resource missing")
    );
}

#[actix_web::test]
async fn unknown_and_malformed_import_ids_are_rejected() {
    let repository = StubUserRepository::new();
    let runner = StubImportRunner::with_summary(ImportSummary::default());
    let app = actix_test::init_service(test_app(repository, runner)).await;

    let unknown = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/imports/00000000-0000-0000-0000-000000000000")
            .to_request(),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

    let malformed = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/imports/not-a-uuid")
            .to_request(),
    )
    .await;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
}
