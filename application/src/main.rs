use std::{io, sync::OnceLock};

use application::{Args, Config, Context};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || LOG_LEVEL.get().copied().unwrap_or(log::Level::WARN)
                            >= *meta.level()
                })),
        )
        .init();

    if start().await.is_err() {
        std::process::exit(1);
    }
}

async fn start() -> Result<(), ()> {
    let Args { config, page } = Args::parse().unwrap_or_else(|e| e.exit());

    let config = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(config.log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let ctx = Context::new(config).map_err(|e| {
        log::error!("failed to initialize `Context`: {e}\n{}", e.trace());
    })?;

    application::open(&ctx, page).await.map_err(|e| {
        log::debug!("`{}` error: {e}\n{}", e.code, e.trace());
        eprintln!("{e}");
    })
}
