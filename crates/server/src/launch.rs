use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

use crate::startup::{self, ServiceKind};

fn init_logging(service: &str) {
    // load .env first so RUST_LOG and LOG_FORMAT take effect
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service, event = "logger_init", "tracing subscriber initialized");
}

/// Process entry shared by both binaries: logging, panic hook, runtime, serve.
pub fn launch(kind: ServiceKind) -> ExitCode {
    let service = kind.descriptor().name;
    init_logging(service);

    let instance_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = kind.descriptor().version;

    std::panic::set_hook(Box::new(move |info| {
        error!(service, event = "panic", %instance_id, pid, message = %info, "unhandled panic occurred");
    }));

    let cfg = match kind.load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service, event = "config_invalid", error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service,
        event = "start",
        %instance_id,
        pid,
        version,
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "service starting"
    );

    match rt.block_on(startup::run(kind, cfg)) {
        Ok(()) => {
            info!(service, event = "stop", %instance_id, pid, "service stopped normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service, event = "run_failed", error = %e, "service exited with error");
            ExitCode::FAILURE
        }
    }
}
