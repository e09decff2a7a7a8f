pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

mod app_state;

pub use app_state::{AppState, ContentCatalog};

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::modules::admin::adapter::incoming::web::routes::admin_scope;
use crate::modules::auth::adapter::incoming::web::routes::init_auth_routes;
use crate::modules::auth::adapter::outgoing::jwt::JwtSessionService;
use crate::modules::auth::adapter::outgoing::security::{Argon2Hasher, SchemeAwareHasher};
use crate::modules::auth::adapter::outgoing::SingleAdminVerifier;
use crate::modules::auth::application::ports::outgoing::{PasswordHasher, SessionTokenProvider};
use crate::modules::auth::application::service::LoginAdminService;
use crate::modules::blog::Blog;
use crate::modules::content::adapter::incoming::web::routes::content_scope;
use crate::modules::content::adapter::outgoing::ContentRepositoryPostgres;
use crate::modules::content::application::ContentUseCases;
use crate::modules::experience::Experience;
use crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler;
use crate::modules::project::Project;
use crate::modules::publication::Publication;
use crate::modules::skill::Skill;
use crate::shared::api::custom_json_config;

#[cfg(test)]
mod tests;

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("invalid configuration")?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Arc::new(
        Database::connect(opt)
            .await
            .context("failed to connect to database")?,
    );

    let content = ContentCatalog {
        skills: ContentUseCases::from_repository(ContentRepositoryPostgres::<Skill>::new(
            Arc::clone(&db),
        )),
        experiences: ContentUseCases::from_repository(
            ContentRepositoryPostgres::<Experience>::new(Arc::clone(&db)),
        ),
        projects: ContentUseCases::from_repository(ContentRepositoryPostgres::<Project>::new(
            Arc::clone(&db),
        )),
        publications: ContentUseCases::from_repository(
            ContentRepositoryPostgres::<Publication>::new(Arc::clone(&db)),
        ),
        blogs: ContentUseCases::from_repository(ContentRepositoryPostgres::<Blog>::new(
            Arc::clone(&db),
        )),
    };

    let session_tokens: Arc<dyn SessionTokenProvider> =
        Arc::new(JwtSessionService::new(config.session.clone()));

    let verifier = SingleAdminVerifier::new(
        &config.admin_email,
        &config.admin_password_hash,
        Arc::new(SchemeAwareHasher::default()),
    );
    let login_admin = LoginAdminService::new(Arc::new(verifier), Arc::clone(&session_tokens));

    let state = AppState::new(
        content,
        Arc::new(login_admin),
        session_tokens,
        config.public_api_url.clone(),
        config.secure_cookies,
    );

    let server_url = config.bind_address();
    info!(address = %server_url, environment = %config.environment, "Server starting");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&db)))
            .configure(configure_app(state.clone()))
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

/// Registers shared state and every route of the service.
pub fn configure_app(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        state.content.register(cfg);
        cfg.app_data(web::Data::new(Arc::clone(&state.session_tokens)))
            .app_data(custom_json_config())
            .app_data(web::Data::new(state));
        init_routes(cfg);
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    init_auth_routes(cfg);
    // Admin
    cfg.service(admin_scope());
    // Public API
    cfg.route("/api/portfolio", web::get().to(get_portfolio_handler));
    cfg.service(content_scope::<Skill>());
    cfg.service(content_scope::<Experience>());
    cfg.service(content_scope::<Project>());
    cfg.service(content_scope::<Publication>());
    cfg.service(content_scope::<Blog>());
}

/// `hash-password <password>`: prints an Argon2id PHC hash for `ADMIN_PASSWORD_HASH`.
#[cfg(not(tarpaulin_include))]
fn hash_password_command(password: Option<&str>) -> anyhow::Result<()> {
    let password = match password {
        Some(p) if !p.is_empty() => p,
        _ => anyhow::bail!("usage: portfolio_backend hash-password <password>"),
    };

    let hash = actix_web::rt::System::new()
        .block_on(Argon2Hasher::default().hash_password(password))
        .context("failed to hash password")?;

    println!("{}", hash);
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = match args.first().map(String::as_str) {
        None => start(),
        Some("hash-password") => hash_password_command(args.get(1).map(String::as_str)),
        Some(other) => Err(anyhow::anyhow!(
            "unknown command '{}'; run without arguments to serve or use 'hash-password <password>'",
            other
        )),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
