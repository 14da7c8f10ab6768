//! Application builder: wires repositories, routers and listeners together.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use chrono::Utc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use recordhub_core::config::{AppConfig, ResourceConfig};
use recordhub_core::error::AppError;
use recordhub_core::traits::{Record, Repository};
use recordhub_entity::{ResourceKind, fixtures};
use recordhub_store::InMemoryRepository;

use crate::router::{build_resource_router, build_router};
use crate::state::AppState;

/// A router bound to the port it should be served on.
pub struct ListenerPlan {
    /// Name used in logs.
    pub name: String,
    /// Port to bind on `server.host`.
    pub port: u16,
    /// Fully layered router.
    pub router: Router,
}

/// Creates one independent repository per resource family, seeded when the
/// family's `seed_fixtures` flag is set.
pub fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    let coffees = open_repository(&config.resources.coffee, fixtures::coffees)?;
    let employees = open_repository(&config.resources.employee, fixtures::employees)?;
    let flights = open_repository(&config.resources.flight, fixtures::flights)?;

    Ok(AppState {
        config: Arc::new(config),
        started_at: Utc::now(),
        coffees,
        employees,
        flights,
    })
}

fn open_repository<R: Record>(
    config: &ResourceConfig,
    seed: fn() -> Vec<R>,
) -> Result<Arc<dyn Repository<R>>, AppError> {
    let repo = if config.seed_fixtures {
        InMemoryRepository::with_records(seed())?
    } else {
        InMemoryRepository::new()
    };

    info!(
        collection = R::COLLECTION,
        records = repo.len(),
        "Repository ready"
    );
    Ok(Arc::new(repo))
}

/// Decides which listeners to start.
///
/// With `server.unified_port` set, one listener serves every enabled family;
/// otherwise each enabled family gets its own port.
pub fn plan_listeners(state: &AppState) -> Result<Vec<ListenerPlan>, AppError> {
    let config = &state.config;
    let enabled: Vec<ResourceKind> = ResourceKind::ALL
        .into_iter()
        .filter(|kind| kind.config(&config.resources).enabled)
        .collect();

    if enabled.is_empty() {
        return Err(AppError::configuration("No resources are enabled"));
    }

    if let Some(port) = config.server.unified_port {
        return Ok(vec![ListenerPlan {
            name: "unified".to_string(),
            port,
            router: build_router(state.clone()),
        }]);
    }

    let mut ports = HashSet::new();
    let mut plans = Vec::with_capacity(enabled.len());
    for kind in enabled {
        let port = kind.port(&config.resources);
        if !ports.insert(port) {
            return Err(AppError::configuration(format!(
                "Port {port} is assigned to more than one resource; set distinct ports or server.unified_port"
            )));
        }
        plans.push(ListenerPlan {
            name: kind.collection().to_string(),
            port,
            router: build_resource_router(state.clone(), kind),
        });
    }

    Ok(plans)
}

/// Runs the RecordHub listeners until Ctrl+C / SIGTERM, then shuts them
/// down gracefully.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting RecordHub v{}", env!("CARGO_PKG_VERSION"));

    let host = config.server.host.clone();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = build_state(config)?;
    let plans = plan_listeners(&state)?;

    // Bind everything before serving anything so a port clash aborts start-up.
    let mut bound = Vec::with_capacity(plans.len());
    for plan in plans {
        let addr = format!("{}:{}", host, plan.port);
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
        info!(listener = %plan.name, %addr, "Listening");
        bound.push((plan, listener, addr));
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut servers = JoinSet::new();

    for (plan, listener, addr) in bound {
        let mut stop = shutdown_rx.clone();
        servers.spawn(async move {
            axum::serve(listener, plan.router)
                .with_graceful_shutdown(async move {
                    let _ = stop.wait_for(|stopped| *stopped).await;
                })
                .await
                .map_err(|e| AppError::internal(format!("Server error on {addr}: {e}")))
        });
    }

    let mut failure = None;
    tokio::select! {
        _ = shutdown_signal() => {
            info!("Shutdown signal received, starting graceful shutdown...");
        }
        Some(exited) = servers.join_next() => {
            failure = server_failure(exited);
            warn!("A listener stopped unexpectedly, shutting down the rest");
        }
    }

    let _ = shutdown_tx.send(true);

    let drain = async {
        while let Some(exited) = servers.join_next().await {
            if let Some(e) = server_failure(exited) {
                failure.get_or_insert(e);
            }
        }
    };
    if tokio::time::timeout(grace, drain).await.is_err() {
        warn!(
            grace_seconds = grace.as_secs(),
            "Graceful shutdown timed out, aborting remaining listeners"
        );
        servers.abort_all();
    }

    match failure {
        Some(e) => Err(e),
        None => {
            info!("RecordHub shut down gracefully");
            Ok(())
        }
    }
}

fn server_failure(
    exited: Result<Result<(), AppError>, tokio::task::JoinError>,
) -> Option<AppError> {
    match exited {
        Ok(Ok(())) => None,
        Ok(Err(e)) => {
            error!(error = %e, "Listener failed");
            Some(e)
        }
        Err(e) => {
            error!(error = %e, "Listener task panicked");
            Some(AppError::internal(format!("Listener task failed: {e}")))
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
