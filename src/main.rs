//! TimerDeck - a reducer-driven state store for named timers
//!
//! This is the main entry point for the timerdeck console application.

use tracing::info;

use timerdeck::{
    config::Config, repl, store::TimersProvider, tasks::render_loop_task, utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("timerdeck={}", config.log_level()))
        .init();

    info!("Starting timerdeck v0.1.0");

    // The provider owns the store; everything else works through its scope
    let provider = TimersProvider::new();
    let scope = provider.scope();

    // Seed timers from --preset arguments
    let ctx = scope.timers_context()?;
    for timer in config.preset_timers() {
        info!("Seeding preset timer '{}'", timer.name);
        ctx.add_timer(timer);
    }

    // Start the background render task
    if !config.no_render {
        let render_scope = scope.clone();
        tokio::spawn(async move {
            render_loop_task(render_scope).await;
        });
    }

    tokio::select! {
        result = repl::run(scope.clone()) => {
            result?;
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Shutdown complete");
    Ok(())
}
