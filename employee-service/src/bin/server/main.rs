use std::sync::Arc;

use employee_service::config::Config;
use employee_service::domain::employee::ports::AuthenticationServicePort;
use employee_service::domain::employee::service::AuthenticationService;
use employee_service::inbound::http::router::create_router;
use employee_service::outbound::credentials::Argon2PasswordHasher;
use employee_service::outbound::credentials::JwtTokenIssuer;
use employee_service::outbound::repositories::PostgresEmployeeRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "employee-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        attempt_timeout_secs = config.auth.attempt_timeout_secs,
        hashing_memory_kib = config.hashing.memory_kib,
        hashing_iterations = config.hashing.iterations,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let hasher = auth::PasswordHasher::with_cost(
        config.hashing.memory_kib,
        config.hashing.iterations,
        config.hashing.parallelism,
    )?;

    let employee_repository = Arc::new(PostgresEmployeeRepository::new(pg_pool));
    let password_hasher = Arc::new(Argon2PasswordHasher::new(hasher)?);
    let token_issuer = Arc::new(JwtTokenIssuer::new(&config.jwt.secret));

    let authentication_service: Arc<dyn AuthenticationServicePort> =
        Arc::new(AuthenticationService::new(
            employee_repository,
            password_hasher,
            token_issuer,
            config.auth.attempt_timeout(),
        ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(authentication_service);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
