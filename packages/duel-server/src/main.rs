use std::sync::Arc;

use duel_server::{
    arena::{Arena, ArenaSettings},
    config::{Config, LogFormat},
    routes,
    state::AppState,
};
use shared::repositories::text_repository::{
    StaticTextRepository, SupabaseTextRepository, TextRepository,
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init(),
    }

    let text_repository: Arc<dyn TextRepository> = match &config.supabase {
        Some(supabase) => Arc::new(SupabaseTextRepository::new(
            &supabase.url,
            &supabase.key,
            &supabase.table,
        )),
        None => {
            warn!("Text store not configured, serving the built-in text only");
            Arc::new(StaticTextRepository::default())
        }
    };

    let settings = ArenaSettings {
        finish_on_disconnect: config.finish_on_disconnect,
    };
    let (arena, commands) = Arena::new(settings, text_repository);
    let state = AppState {
        arena: arena.handle(),
    };
    tokio::spawn(arena.run(commands));

    let app = routes::router(state);
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Duel server listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
