//! Reporting HTTP handlers.
//!
//! ```text
//! GET /reports/books-by-user
//! ```

use actix_web::{get, web};

use crate::domain::{Error, LoanTally};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::map_persistence_error;

/// Loans counted per user, zero-loan users included, most active first.
#[utoipa::path(
    get,
    path = "/reports/books-by-user",
    responses(
        (status = 200, description = "Loan counts per user", body = [LoanTally]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["reports"],
    operation_id = "booksByUser"
)]
#[get("/reports/books-by-user")]
pub async fn books_by_user(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<LoanTally>>> {
    let tallies = state
        .users
        .loans_per_user()
        .await
        .map_err(map_persistence_error)?;
    Ok(web::Json(tallies))
}
