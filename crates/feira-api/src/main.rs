use feira::repository::StreetMarketRepository;

use feira_api::routes;
use feira_api::state::AppState;

mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("./migrations");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        eprintln!("DATABASE_URL is not set");
        std::process::exit(1);
    });
    let api_addr = std::env::var("FEIRA_API_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
    let pool_size: usize = std::env::var("FEIRA_POOL_SIZE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(16);

    let pool = feira::create_pool_with_config(&database_url, pool_size).unwrap_or_else(|e| {
        eprintln!("failed to configure database pool: {e}");
        std::process::exit(1);
    });

    {
        let mut client = pool.get().await.unwrap_or_else(|e| {
            eprintln!("failed to connect to database: {e}");
            std::process::exit(1);
        });
        embedded::migrations::runner()
            .run_async(&mut **client)
            .await
            .unwrap_or_else(|e| {
                eprintln!("failed to run migrations: {e}");
                std::process::exit(1);
            });
    }

    let state = AppState::new(StreetMarketRepository::new(pool));
    let app = routes::router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&api_addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("failed to bind {api_addr}: {e}");
            std::process::exit(1);
        });

    tracing::info!("feira-api listening on {api_addr}");
    axum::serve(listener, app).await.unwrap();
}
