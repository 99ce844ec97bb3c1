//! Tracing setup.
//!
//! Two sinks: the console for application events and an access log file for
//! the `access_log` target. In production the file is written in batches by
//! a background task.

use std::{
    env,
    io::{self, Write},
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
    time::{Duration, Instant},
};

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{header, Request, Response, Version},
    middleware::Next,
};
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::app::{client_ip, AppState};

pub const ACCESS_LOG_TARGET: &str = "access_log";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Prod,
}

impl Environment {
    pub fn from_env() -> Self {
        let raw = env::var("FOLIO_ENV")
            .or_else(|_| env::var("RUST_ENV"))
            .unwrap_or_default();
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            _ => Self::Dev,
        }
    }
}

fn log_file_path() -> PathBuf {
    env::var("LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("logs/access.log"))
}

fn append(path: &Path, data: &[u8]) -> io::Result<()> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?
        .write_all(data)
}

/// In-memory access log buffer appended to `path` on every flush.
struct Batch {
    buffer: Mutex<Vec<u8>>,
    path: PathBuf,
}

impl Batch {
    fn flush_to_file(&self) {
        let data = {
            let mut buf = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *buf)
        };
        if data.is_empty() {
            return;
        }
        if let Err(err) = append(&self.path, &data) {
            eprintln!("access log flush to {} failed: {err}", self.path.display());
        }
    }
}

/// Access log sink. `Immediate` appends every record; `Batched` buffers in
/// memory and a tokio task appends the buffer on each tick.
#[derive(Clone)]
enum AccessLogWriter {
    Immediate(Arc<PathBuf>),
    Batched(Arc<Batch>),
}

impl AccessLogWriter {
    fn immediate(path: PathBuf) -> io::Result<Self> {
        ensure_parent(&path)?;
        Ok(Self::Immediate(Arc::new(path)))
    }

    /// Must be called inside a tokio runtime.
    fn batched(path: PathBuf, flush_every: Duration) -> io::Result<Self> {
        ensure_parent(&path)?;
        let batch = Arc::new(Batch {
            buffer: Mutex::new(Vec::with_capacity(8192)),
            path,
        });
        let pending = Arc::clone(&batch);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(flush_every);
            loop {
                interval.tick().await;
                pending.flush_to_file();
            }
        });
        Ok(Self::Batched(batch))
    }

    fn guard(&self) -> LogGuard {
        match self {
            Self::Immediate(_) => LogGuard { batch: None },
            Self::Batched(batch) => LogGuard {
                batch: Some(Arc::clone(batch)),
            },
        }
    }
}

/// Keeps buffered access log lines until dropped; dropping it writes
/// whatever the flush task has not picked up yet. Hold it for the lifetime
/// of the server.
#[must_use = "dropping the guard flushes the access log immediately"]
pub struct LogGuard {
    batch: Option<Arc<Batch>>,
}

impl LogGuard {
    pub fn flush(&self) {
        if let Some(batch) = &self.batch {
            batch.flush_to_file();
        }
    }
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        self.flush();
    }
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

impl Write for AccessLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Immediate(path) => append(path, buf)?,
            Self::Batched(batch) => batch
                .buffer
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(buf),
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for AccessLogWriter {
    type Writer = AccessLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Install the server subscriber for the current environment.
pub fn init() -> anyhow::Result<LogGuard> {
    let log_path = log_file_path();
    let (writer, console_filter, mode) = match Environment::from_env() {
        Environment::Dev => (
            AccessLogWriter::immediate(log_path)?,
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("folio=debug,info")),
            "dev",
        ),
        Environment::Prod => {
            let flush_every = Duration::from_secs(
                env::var("LOG_FLUSH_INTERVAL")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            );
            (
                AccessLogWriter::batched(log_path, flush_every)?,
                EnvFilter::new("error"),
                "prod",
            )
        }
    };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_filter(console_filter);
    let guard = writer.guard();
    let file_layer = fmt::layer()
        .with_target(false)
        .with_level(false)
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(EnvFilter::new(format!("{ACCESS_LOG_TARGET}=info")));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    tracing::info!(mode, "logging initialized");
    Ok(guard)
}

/// Console-only subscriber for command line tools.
pub fn init_cli() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info,warn")),
        )
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;
    Ok(())
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "HTTP/?",
    }
}

/// `"METHOD /path HTTP/1.1" STATUS LENGTH IP "User-Agent" LATENCYms`
pub async fn access_log_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Response<Body> {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let version = request.version();
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let ip = client_ip(request.headers(), &addr, state.trust_proxy);

    let response = next.run(request).await;

    let content_length = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    tracing::info!(
        target: ACCESS_LOG_TARGET,
        "\"{} {} {}\" {} {} {} \"{}\" {}ms",
        method,
        path,
        version_label(version),
        response.status().as_u16(),
        content_length,
        ip,
        user_agent,
        start.elapsed().as_millis()
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parsing() {
        assert_eq!(Environment::parse("production"), Environment::Prod);
        assert_eq!(Environment::parse(" PROD "), Environment::Prod);
        assert_eq!(Environment::parse("staging"), Environment::Dev);
        assert_eq!(Environment::parse(""), Environment::Dev);
    }

    #[test]
    fn immediate_writer_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/access.log");
        let mut writer = AccessLogWriter::immediate(path.clone()).unwrap();
        writer.write_all(b"one\n").unwrap();
        writer.write_all(b"two\n").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "one\ntwo\n");
    }

    #[tokio::test]
    async fn guard_flushes_pending_batch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("access.log");
        let mut writer = AccessLogWriter::batched(path.clone(), Duration::from_secs(3600)).unwrap();
        let guard = writer.guard();

        writer.write_all(b"GET / 200\n").unwrap();
        writer.write_all(b"GET /project/a 404\n").unwrap();
        drop(guard);

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "GET / 200\nGET /project/a 404\n"
        );
    }

    #[test]
    fn immediate_guard_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("access.log");
        let writer = AccessLogWriter::immediate(path.clone()).unwrap();
        writer.guard().flush();
        assert!(!path.exists());
    }

    #[test]
    fn version_labels() {
        assert_eq!(version_label(Version::HTTP_11), "HTTP/1.1");
        assert_eq!(version_label(Version::HTTP_2), "HTTP/2.0");
    }
}
