use clinica::{
    ClinicaResult,
    cli::init,
    config::{Level, string_to_ip},
    router,
    state::AppState,
};
use migration::{Migrator, MigratorTrait};
use std::net::SocketAddr;
use tokio::net::TcpListener;
#[allow(unused_imports)]
use tracing::{debug, error, info, trace, warn};
use tracing_subscriber::{
    field::MakeExt,
    fmt::{Subscriber, format::debug_fn},
};

#[tokio::main]
async fn main() -> ClinicaResult<()> {
    let formatter =
        debug_fn(|writer, field, value| write!(writer, "{field}: {value:?}")).delimited(",");

    let config = init();
    let level: Level = config.logging().level.clone().into();

    Subscriber::builder()
        .with_max_level(level.0)
        .fmt_fields(formatter)
        .with_ansi(true)
        .init();

    let state = AppState::connect().await;

    Migrator::up(&state.db, None).await?;
    debug!("migrations applied");

    let app = router(state);

    let ip = string_to_ip(&config.network().ip).unwrap_or_else(|e| panic!("invalid ip: {e}"));
    let addr = SocketAddr::from((ip, config.network().port));

    info!("serving http on {addr}");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
