#![recursion_limit = "2048"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use labs82::app::*;
    use labs82::core::config::Config;
    use labs82::core::contact::api::{ContactApiState, contact_api_router, health_router};
    use labs82::core::contact::email::EmailNotifier;
    use labs82::core::db::repositories::ContactRepository;
    use labs82::core::db::{DbConfig, create_pool_with_migrations};
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load application config from environment variables
    let config = Config::from_env();

    // Log config status (without revealing secrets)
    tracing::info!(
        "Config loaded: database={}, sendgrid={}",
        config.has_database(),
        config.has_sendgrid_api_key()
    );

    // The contact form cannot work without the email credential, so fail at
    // boot rather than on the first submission
    let notifier = EmailNotifier::new(config.sendgrid_api_key_or_panic());

    // Connect to the database and apply migrations
    let db_config = DbConfig {
        database_url: config.database_url_or_panic().to_string(),
        ..Default::default()
    };
    let pool = match create_pool_with_migrations(&db_config).await {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!("Database setup failed: {}", err);
            std::process::exit(1);
        }
    };

    let contact_api = contact_api_router(ContactApiState {
        contact_repo: ContactRepository::new(pool.clone()),
        notifier,
    });
    let health_api = health_router(pool);

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Create ServeDir for pkg with pre-compressed file support
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    // Build the Leptos router
    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    // Build the main application router with compression
    let app = Router::new()
        .merge(contact_api)
        .merge(health_api)
        .merge(leptos_router)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    // Run our app with hyper
    log!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
