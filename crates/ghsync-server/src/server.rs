//! Server module.

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error,
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use actix_web_httpauth::middleware::HttpAuthentication;
use actix_web_prom::PrometheusMetrics;
use ghsync_config::Config;
use ghsync_core::{CoreContext, CoreModule};
use ghsync_database_interface::DbService;
use ghsync_ghapi_interface::ApiService;
use sentry_actix::Sentry;
use tracing::info;

use crate::{
    auth::{
        routes::{github_callback, github_login, remove_integration},
        validator::session_auth_validator,
        AuthProvider,
    },
    github::configure_github_handlers,
    health::health_check_route,
    metrics::build_metrics_handler,
    Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Core module.
    pub core_module: CoreModule,
    /// Database adapter.
    pub db_service: Box<dyn DbService>,
    /// API adapter.
    pub api_service: Box<dyn ApiService>,
    /// OAuth application.
    pub auth_provider: AuthProvider,
}

impl AppContext {
    /// Create new app context using adapters.
    pub fn new_with_adapters(
        config: Config,
        core_module: CoreModule,
        db_service: Box<dyn DbService>,
        api_service: Box<dyn ApiService>,
    ) -> Self {
        Self {
            auth_provider: AuthProvider::from_config(&config),
            config,
            core_module,
            db_service,
            api_service,
        }
    }

    /// Convert the context for the core module.
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            db_service: self.db_service.as_ref(),
        }
    }
}

fn build_cors(config: &Config) -> Cors {
    if config.server.cors_origin.is_empty() {
        Cors::permissive()
    } else {
        Cors::default()
            .allowed_origin(&config.server.cors_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
    prometheus: PrometheusMetrics,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = build_cors(&context.config);

    App::new()
        .app_data(context)
        .app_data(web::QueryConfig::default().error_handler(|err, _req| {
            // Display Bad Request response on invalid query strings
            error::InternalError::from_response(
                "",
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": err.to_string()
                })),
            )
            .into()
        }))
        .wrap(cors)
        .wrap(prometheus)
        .wrap(Sentry::new())
        .wrap(Logger::default())
        .service(
            web::scope("/api/auth")
                .route("/github", web::get().to(github_login))
                .route("/github/callback", web::get().to(github_callback))
                .service(
                    web::resource("/remove")
                        .wrap(HttpAuthentication::bearer(session_auth_validator))
                        .route(web::post().to(remove_integration)),
                ),
        )
        .service(
            web::scope("/api/github")
                .wrap(HttpAuthentication::bearer(session_auth_validator))
                .configure(configure_github_handlers),
        )
        .route("/health", web::get().to(health_check_route))
        .route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok().json(serde_json::json!({"message": "Welcome on ghsync!" }))
            }),
        )
}

/// Run HTTP server.
pub async fn run_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        message = "Starting server",
    );

    run_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let workers_count = context.config.server.workers_count;
    let context = Data::new(context);
    let prometheus = build_metrics_handler()?;

    let mut server =
        HttpServer::new(move || build_actix_app(context.clone(), prometheus.clone()));

    if let Some(workers) = workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}
