//! mapfav RPC server. JSON-RPC over stdin/stdout for the map page host.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"favorites.add", "params":{"name":"...","lat":1.0,"lon":2.0}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//! Share requests are forwarded as {"event":"share", ...} lines.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::Instant;

use mapfav::app::App;
use mapfav::platform;
use mapfav::rpc_handler::handle_method;
use mapfav::services::share::EventShare;

use serde_json::{json, Value};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Simple rate limiter: max requests per second.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn send(line: &Value) {
    let mut out = io::stdout().lock();
    if writeln!(out, "{}", line).and_then(|_| out.flush()).is_err() {
        error!("stdout closed");
    }
}

fn main() {
    // Logs go to stderr; stdout carries protocol lines only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let data_dir = platform::get_data_dir();
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        warn!(dir = %data_dir.display(), error = %e, "could not create data dir");
    }
    let db_path = platform::default_db_path();

    let mut app = match App::new(&db_path.to_string_lossy(), None) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "failed to initialize");
            send(&json!({"event": "fatal", "error": e.to_string()}));
            std::process::exit(1);
        }
    };
    app.set_share_provider(Box::new(EventShare::new(io::stdout())));
    let app = Mutex::new(app);

    send(&json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}));
    info!("ready");

    let mut rate_limiter = RateLimiter::new(200);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                send(&json!({"id": null, "error": format!("parse error: {}", e)}));
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);

        if !rate_limiter.check() {
            send(&json!({"id": id, "error": "rate limit exceeded"}));
            continue;
        }

        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(Value::Null);

        let response = match handle_method(&app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => {
                warn!(%method, %err, "request failed");
                json!({"id": id, "error": err})
            }
        };
        send(&response);
    }
    info!("stdin closed, exiting");
}
