//! Static file server for the mint page
//!
//! Serves the Trunk build from `MINT_DIST_DIR` (default `dist/`) on
//! `MINT_SERVER_ADDR` (default `127.0.0.1:8080`). Unknown paths fall back to
//! `index.html` so client-side routes like `/terms` survive a reload.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use lib_utils::envs::{self, get_env_or, get_env_parse};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 8080);
const DEFAULT_DIST: &str = "dist";
const INDEX_FILE: &str = "index.html";
/// A client that connects and never sends a request line is dropped after this.
const READ_TIMEOUT: Duration = Duration::from_secs(5);

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let addr = match get_env_parse::<SocketAddr>("MINT_SERVER_ADDR") {
        Ok(addr) => addr,
        Err(envs::Error::MissingEnv(_)) => SocketAddr::from(DEFAULT_ADDR),
        Err(e) => {
            error!("Invalid bind address: {}", e);
            std::process::exit(1);
        }
    };
    let dist = PathBuf::from(get_env_or("MINT_DIST_DIR", DEFAULT_DIST));

    let listener = match TcpListener::bind(addr) {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Mint page running at http://{}", addr);
    info!("Serving from {}", dist.display());

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream, &dist),
            Err(e) => warn!("Connection error: {}", e),
        }
    }
}

fn prepare_stream(stream: &TcpStream) -> std::io::Result<()> {
    stream.set_read_timeout(Some(READ_TIMEOUT))
}

fn handle_client(mut stream: TcpStream, dist: &Path) {
    if let Err(e) = prepare_stream(&stream) {
        warn!("Failed to set read timeout: {}", e);
        return;
    }

    let request_line = match BufReader::new(&mut stream).lines().next() {
        Some(Ok(line)) => line,
        _ => {
            warn!("Failed to read request line");
            return;
        }
    };

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = target.split_once('?').map_or(target, |(path, _)| path);

    let file_path = resolve_file(dist, path);
    let (status, content_type, body) = match fs::read(&file_path) {
        Ok(body) => ("200 OK", content_type(&file_path), body),
        Err(e) => {
            error!("Cannot read {}: {}", file_path.display(), e);
            (
                "404 NOT FOUND",
                "text/html; charset=utf-8",
                b"<!DOCTYPE html><html><body><h1>Not found</h1></body></html>".to_vec(),
            )
        }
    };
    info!("{} {} -> {}", path, status, file_path.display());

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        warn!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        warn!("Failed to write body: {}", e);
    }
    let _ = stream.flush();
}

/// Map a request path to a file under `dist`.
///
/// Directories, missing files and paths escaping `dist` all resolve to the
/// index page.
fn resolve_file(dist: &Path, path: &str) -> PathBuf {
    let index = dist.join(INDEX_FILE);
    let relative = Path::new(path.trim_start_matches('/'));

    if relative.as_os_str().is_empty()
        || relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
    {
        return index;
    }

    let candidate = dist.join(relative);
    if candidate.is_file() {
        candidate
    } else {
        index
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
