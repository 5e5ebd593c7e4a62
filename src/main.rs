// region:    --- Imports
use std::sync::Arc;
use tender_service::config::Config;
use tender_service::database::DatabaseManager;
use tender_service::state::AppState;
use tender_service::store::SqliteTenderStore;
use tender_service::tender::lifecycle::LifecyclePolicy;
use tokio::net::TcpListener;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 로드 (없으면 무시)
    dotenvy::dotenv().ok();

    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .without_time()
        .with_target(false)
        .init();

    let config = Config::load()?;
    let policy = LifecyclePolicy::from_minutes(config.grace_minutes)
        .ok_or("TENDER_GRACE_MINUTES out of range")?;

    // DatabaseManager 생성
    let db_manager = Arc::new(DatabaseManager::new(&config.database_url).await?);

    // 데이터베이스 초기화
    if let Err(e) = db_manager.initialize_database().await {
        error!("{:<12} --> 데이터베이스 초기화 실패: {:?}", "Main", e);
        return Err(e.into());
    }
    info!("{:<12} --> 데이터베이스 초기화 성공", "Main");

    let store = Arc::new(SqliteTenderStore::new(Arc::clone(&db_manager)));
    let routes_all = tender_service::create_app(AppState::new(store, policy));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!(
        "{:<12} --> Web Server: Listening on http://{}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service()).await {
        error!("{:<12} --> Server error: {}", "Main", err);
    }
    Ok(())
}
// endregion: --- Main
