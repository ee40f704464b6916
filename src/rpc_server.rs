//! Career Buddy RPC Server: JSON-RPC over stdin/stdout for a UI host.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"activity.track", "params":{"path":"/resume"}}
//! Response: {"id":1, "result":[...]} or {"id":1, "error":"..."}

use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::Instant;

use careerbuddy::app::{configured_log_level, App};
use careerbuddy::platform;
use careerbuddy::rpc_handler::handle_method;

use serde_json::{json, Value};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const MAX_REQUESTS_PER_SECOND: u32 = 200;

/// Fixed one-second window request limiter.
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

/// Logs go to stderr; stdout carries the protocol.
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("careerbuddy={}", default_level)));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

fn send(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() {
    let db_path = platform::default_db_path();
    if let Some(dir) = db_path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }

    init_logging(&configured_log_level(None));

    let app = match App::new(&db_path.to_string_lossy(), None) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "failed to initialize Career Buddy");
            std::process::exit(1);
        }
    };
    info!(db = %db_path.display(), "starting careerbuddy-rpc v{}", env!("CARGO_PKG_VERSION"));

    let app = Mutex::new(app);
    if let Ok(mut a) = app.lock() {
        a.startup();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if send(&mut out, &json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")})).is_err() {
        return;
    }

    let mut rate_limiter = RateLimiter::new(MAX_REQUESTS_PER_SECOND);

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!(error = %e, "stdin closed");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                if !rate_limiter.check() {
                    warn!("rate limit exceeded");
                    json!({"id": id, "error": "rate limit exceeded"})
                } else {
                    let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                    let params = req.get("params").cloned().unwrap_or(json!({}));
                    match handle_method(&app, method, &params) {
                        Ok(val) => json!({"id": id, "result": val}),
                        Err(err) => json!({"id": id, "error": err}),
                    }
                }
            }
        };

        if send(&mut out, &response).is_err() {
            break;
        }
    }
    info!("stdin closed, shutting down");
}
