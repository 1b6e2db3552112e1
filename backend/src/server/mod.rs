//! Server construction and wiring.

mod config;

pub use config::{ConfigError, ServerConfig};

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::imports::{get_import, start_import};
use crate::inbound::http::reports::books_by_user;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::middleware::RequestSpan;
use crate::outbound::persistence::{
    CsvImportRunner, DbPool, DieselUserRepository, PoolConfig, run_pending_migrations,
};

/// Assemble the application with every route registered.
///
/// Swagger UI is mounted under `/docs` in debug builds only.
pub fn build_app(
    state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    #[allow(unused_mut, reason = "reassigned when Swagger UI is mounted")]
    let mut app = App::new()
        .app_data(state)
        .app_data(health_state)
        .wrap(RequestSpan)
        .service(start_import)
        .service(get_import)
        .service(create_user)
        .service(list_users)
        .service(get_user)
        .service(update_user)
        .service(delete_user)
        .service(books_by_user)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    {
        app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    app
}

/// Run migrations, build the pools and adapters, and serve until shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    run_pending_migrations(&config.database_url)
        .await
        .map_err(std::io::Error::other)?;

    let pool_config = PoolConfig::new(&config.database_url).with_max_size(config.pool_size);
    let pool = DbPool::new(pool_config)
        .await
        .map_err(std::io::Error::other)?;

    let repository = DieselUserRepository::new(pool);
    let importer = CsvImportRunner::new(&config.database_url, &config.csv_path);
    let state = web::Data::new(HttpState::new(Arc::new(repository), Arc::new(importer)));
    let health_state = web::Data::new(HealthState::new());

    let server_state = state.clone();
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_state.clone(), server_health_state.clone())
    })
    .bind(config.bind_addr)?;

    health_state.mark_ready();
    info!(addr = %config.bind_addr, "server listening");
    server.run().await
}
