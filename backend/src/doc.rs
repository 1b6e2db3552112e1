//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API: every
//! HTTP endpoint from the inbound layer plus the schemas they reference.
//! The generated document backs Swagger UI in debug builds.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library users backend API",
        description = "Administrative HTTP interface for the users table, \
                       its CSV bulk import, and the loans-per-user report."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::imports::start_import,
        crate::inbound::http::imports::get_import,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::reports::books_by_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::domain::Error,
        crate::domain::ErrorCode,
        crate::domain::User,
        crate::domain::LoanTally,
        crate::domain::ImportSummary,
        crate::domain::RowIssue,
        crate::inbound::http::users::UserPayload,
        crate::inbound::http::users::CreatedUserResponse,
        crate::inbound::http::users::MessageResponse,
        crate::inbound::http::imports::ImportStartedResponse,
        crate::inbound::http::imports::ImportStatusResponse,
    )),
    tags(
        (name = "users", description = "Users table administration"),
        (name = "imports", description = "Bulk CSV ingestion"),
        (name = "reports", description = "Read-only aggregates"),
        (name = "health", description = "Probes"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::OpenApi as _;

    use super::*;

    #[test]
    fn document_includes_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        for expected in [
            "/upload-users-csv",
            "/imports/{id}",
            "/upload-users",
            "/users",
            "/users/{id}",
            "/update-user/{id}",
            "/reports/books-by-user",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains_key(expected), "missing path {expected}");
        }
    }
}
