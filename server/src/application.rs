use dioxus::prelude::Element;

/// Launch the app in the browser renderer.
#[cfg(not(feature = "server"))]
pub fn launch(app: fn() -> Element) -> anyhow::Result<()> {
    dioxus::launch(app);
    Ok(())
}

/// Launch a server that renders the app and serves its static assets.
#[cfg(feature = "server")]
pub fn launch(app: fn() -> Element) -> anyhow::Result<()> {
    use anyhow::Context as _;

    let settings = crate::Settings::new().context("Failed to load settings")?;
    init_tracing(&settings.log.filter);

    tokio::runtime::Runtime::new()
        .context("Failed to start tokio runtime")?
        .block_on(serve(settings, app))
}

#[cfg(feature = "server")]
fn env_filter(filter: &str) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {filter:?}: {e}, falling back to info");
        EnvFilter::new("info")
    })
}

#[cfg(feature = "server")]
fn init_tracing(filter: &str) {
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .try_init()
    {
        eprintln!("Failed to install tracing subscriber: {e}");
    }
}

#[cfg(feature = "server")]
fn router(config: dioxus::prelude::ServeConfig, app: fn() -> Element) -> axum::Router {
    use dioxus::prelude::DioxusRouterExt;
    use tower_http::trace::TraceLayer;

    axum::Router::new()
        .serve_dioxus_application(config, app)
        .layer(TraceLayer::new_for_http())
}

#[cfg(feature = "server")]
async fn serve(settings: crate::Settings, app: fn() -> Element) -> anyhow::Result<()> {
    use anyhow::Context as _;
    use dioxus::prelude::ServeConfig;

    let config = ServeConfig::new().context("Failed to load index.html")?;
    let router = router(config, app);

    // `dx serve` picks the fullstack port and proxies to it.
    let addr = settings.server.bind_address(
        dioxus_cli_config::server_ip(),
        dioxus_cli_config::server_port(),
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .context("Server error")
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use dioxus::prelude::{ServeConfig, VNode};

    fn blank() -> Element {
        VNode::empty()
    }

    #[test]
    fn test_router_builds_with_bundled_index() {
        let config = ServeConfig::builder()
            .index_html(
                r#"<!DOCTYPE html><html><head></head><body><div id="main"></div></body></html>"#
                    .to_string(),
            )
            .build()
            .unwrap();
        let _router: axum::Router = router(config, blank);
    }

    #[test]
    fn test_invalid_log_filter_falls_back_to_info() {
        assert_eq!(env_filter("[not a filter").to_string(), "info");
        assert_eq!(env_filter("debug").to_string(), "debug");
    }
}
