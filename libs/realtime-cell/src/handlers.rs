use std::time::Duration;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
    Json,
};
use serde_json::{json, Value};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_store::AppState;

/// Connection instructions for portals that prefer push over polling.
#[axum::debug_handler]
pub async fn realtime_info(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!({
        "websocket_path": "/realtime/ws",
        "heartbeat_interval_secs": state.config.heartbeat_interval_secs,
        "message_format": "JSON updates tagged with a snake_case \"type\" field"
    })))
}

#[axum::debug_handler]
pub async fn handle_ws(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> Response {
    ws.on_upgrade(move |socket| run_ws(socket, state))
}

/// Per-connection loop: forward broadcast updates, answer text pings, and
/// keep the connection alive with server pings. A client that lags the
/// broadcast channel is dropped rather than served stale updates.
async fn run_ws(mut socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();
    let mut events = state.subscribe();
    let mut heartbeat = tokio::time::interval(Duration::from_secs(
        state.config.heartbeat_interval_secs.max(1),
    ));

    info!(%client_id, "realtime: client connected");

    loop {
        tokio::select! {
            msg = socket.recv() => {
                let Some(Ok(msg)) = msg else { break };
                match msg {
                    Message::Text(text) if text.as_str() == "ping" => {
                        if socket.send(Message::Text("pong".into())).await.is_err() {
                            break;
                        }
                    }
                    Message::Text(text) => {
                        debug!(%client_id, "realtime: ignoring client frame: {}", text.as_str());
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
            event = events.recv() => {
                match event {
                    Ok(event) => {
                        let payload = match serde_json::to_string(&event) {
                            Ok(payload) => payload,
                            Err(e) => {
                                warn!("realtime: failed to serialize event: {}", e);
                                continue;
                            }
                        };
                        if socket.send(Message::Text(payload.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(%client_id, skipped, "realtime: client lagged, disconnecting");
                        break;
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            _ = heartbeat.tick() => {
                if socket.send(Message::Ping(vec![].into())).await.is_err() {
                    break;
                }
            }
        }
    }

    info!(%client_id, "realtime: client disconnected");
}
