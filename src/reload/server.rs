// src/reload/server.rs

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::http::header;
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, watch};
use tower_http::services::ServeDir;
use tracing::{debug, info};

use crate::reload::hub::ReloadHub;
use crate::reload::inject::inject_reload_script;

/// Client half of the reload protocol, served at `/__livereload.js` and
/// injected into every HTML page.
const RELOAD_CLIENT_JS: &str = r#"(function () {
  var scheme = location.protocol === "https:" ? "wss" : "ws";
  var socket = new WebSocket(scheme + "://" + location.host + "/__livereload");
  socket.onmessage = function (event) {
    if (event.data === "reload") {
      location.reload();
    }
  };
})();
"#;

/// A bound but not yet running reload server.
///
/// Binding is split from serving so startup fails fast on a taken port while
/// the serve loop runs as its own task.
pub struct ReloadServer {
    listener: TcpListener,
    app: Router,
}

impl ReloadServer {
    /// Bind `host:port` and prepare to serve `root` as static content with
    /// the reload endpoints mounted next to it.
    pub async fn bind(
        host: &str,
        port: u16,
        root: impl Into<PathBuf>,
        hub: ReloadHub,
    ) -> Result<Self> {
        let root = root.into();
        let addr = format!("{host}:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("binding reload server to {addr}"))?;

        info!(addr = %addr, root = ?root, "serving documentation");

        Ok(Self {
            listener,
            app: router(root, hub),
        })
    }

    /// The address actually bound, useful when `port` was 0.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until `shutdown` flips to true, then drain open connections.
    pub async fn serve(self, mut shutdown: watch::Receiver<bool>) -> Result<()> {
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(async move {
                // A dropped sender counts as shutdown too.
                let _ = shutdown.wait_for(|stop| *stop).await;
            })
            .await?;
        Ok(())
    }
}

fn router(root: PathBuf, hub: ReloadHub) -> Router {
    Router::new()
        .route("/__livereload", get(livereload_ws))
        .route("/__livereload.js", get(livereload_js))
        .fallback_service(ServeDir::new(root))
        .layer(middleware::from_fn(inject_reload_script))
        .with_state(hub)
}

async fn livereload_ws(ws: WebSocketUpgrade, State(hub): State<ReloadHub>) -> Response {
    ws.on_upgrade(move |socket| handle_client(socket, hub))
}

async fn livereload_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        RELOAD_CLIENT_JS,
    )
}

/// One connected browser: forward reload signals until either side drops.
///
/// Errors here end only this client; serving and the poll loop are
/// unaffected.
async fn handle_client(socket: WebSocket, hub: ReloadHub) {
    let mut signals = hub.subscribe();
    let (mut sender, mut receiver) = socket.split();

    debug!(clients = hub.client_count(), "reload client connected");

    loop {
        tokio::select! {
            signal = signals.recv() => {
                match signal {
                    // A lagged receiver missed signals, which still means the
                    // output changed; reload anyway.
                    Ok(()) | Err(broadcast::error::RecvError::Lagged(_)) => {
                        if sender.send(Message::Text("reload".into())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
            message = receiver.next() => {
                match message {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(err)) => {
                        debug!(error = %err, "reload client socket error");
                        break;
                    }
                    // Browsers have nothing to tell us; ignore any chatter.
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    debug!("reload client disconnected");
}
