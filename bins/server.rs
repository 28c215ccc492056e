use configs::AppConfig;
use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Config file first; environment-only config when the file is missing or invalid.
fn load_config() -> anyhow::Result<(AppConfig, Option<String>)> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok((cfg, None)),
        Err(file_err) => Ok((AppConfig::from_env()?, Some(file_err.to_string()))),
    }
}

fn main() -> std::process::ExitCode {
    // .env first so RUST_LOG and registry URLs are visible to everything below
    dotenv().ok();
    let (cfg, config_err) = match load_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            common::utils::logging::init_logging_default();
            error!(service = "reservas", event = "config_invalid", error = %e, "no usable configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    common::utils::logging::init_logging(cfg.server.json_logs);
    info!(service = "reservas", event = "logger_init", json = cfg.server.json_logs, "tracing subscriber initialized");
    if let Some(e) = config_err {
        warn!(service = "reservas", event = "config_fallback", error = %e, "config file unusable, using defaults and environment");
    }

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "reservas",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "reservas", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "reservas",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "reservation service starting"
    );

    // server::run owns graceful shutdown on Ctrl+C
    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(service = "reservas", event = "stop", %service_id, pid, "server stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "reservas", event = "run_failed", error = %e, "server::run returned error");
            std::process::ExitCode::FAILURE
        }
    }
}
