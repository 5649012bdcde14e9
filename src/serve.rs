//! Local preview server.
//!
//! Serves the build output with `tiny_http`:
//!
//! - static files, with `index.html` resolution for directories
//! - the generated `404.html` for unknown paths
//! - `POST` on the analytics endpoint, logged through [`LogSink`] when
//!   `[analytics]` is enabled and answered with 204 either way
//!
//! Blocks until Ctrl+C.

use crate::{
    analytics::{AnalyticsEvent, AnalyticsSink, LogSink, NoopSink, emit},
    build::NOT_FOUND_PAGE,
    config::SiteConfig,
    log,
};
use anyhow::{Context, Result, anyhow};
use std::{
    fs,
    io::Read,
    net::{IpAddr, SocketAddr},
    path::{Component, Path, PathBuf},
    sync::Arc,
};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

/// Largest analytics payload read from a request.
const MAX_EVENT_BYTES: u64 = 4096;

/// Bind the configured interface, moving up from the configured port while
/// it is taken.
pub fn bind_server(config: &SiteConfig) -> Result<(Server, SocketAddr)> {
    let interface: IpAddr = config
        .serve
        .interface
        .parse()
        .with_context(|| format!("Invalid interface `{}`", config.serve.interface))?;

    try_bind_port(interface, config.serve.port, MAX_PORT_RETRIES)
}

pub fn serve_site(server: Server, addr: SocketAddr, config: &SiteConfig) -> Result<()> {
    let server = Arc::new(server);

    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}", addr);

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, config) {
            log!("serve"; "request error: {e}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(interface: IpAddr, base_port: u16, max_retries: u16) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;

    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                let bound = server.server_addr().to_ip().unwrap_or(addr);
                return Ok((server, bound));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        max_retries,
        base_port,
        base_port.saturating_add(max_retries.saturating_sub(1)),
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}

/// Request resolution order:
/// 1. `POST` to the analytics endpoint → log event, 204
/// 2. Exact file match → serve file
/// 3. Directory with index.html → serve index.html
/// 4. Nothing found → 404 page
fn handle_request(mut request: Request, config: &SiteConfig) -> Result<()> {
    let url_path = urlencoding::decode(request.url())
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();
    let path = url_path.split(['?', '#']).next().unwrap_or_default().to_owned();

    if *request.method() == Method::Post {
        if path != config.analytics.endpoint {
            request.respond(Response::empty(StatusCode(405)))?;
            return Ok(());
        }

        let sink: &dyn AnalyticsSink = if config.analytics.enable {
            &LogSink
        } else {
            &NoopSink
        };
        let mut body = String::new();
        // An unreadable body is dropped like any other bad event
        let _ = request
            .as_reader()
            .take(MAX_EVENT_BYTES)
            .read_to_string(&mut body);
        if let Some(event) = parse_event(&body) {
            emit(sink, &event);
        }
        request.respond(Response::empty(StatusCode(204)))?;
        return Ok(());
    }

    match resolve_path(&config.build.output, &path) {
        Some(file) => serve_file(request, &file, StatusCode(200)),
        None => serve_not_found(request, &config.build.output),
    }
}

/// Decode a click event posted by the client script.
fn parse_event(body: &str) -> Option<AnalyticsEvent> {
    serde_json::from_str(body).ok()
}

/// Map a request path to a file under `root`. Paths escaping `root` resolve
/// to nothing.
fn resolve_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = Path::new(request_path.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return None;
    }

    let local = root.join(relative);
    if local.is_file() {
        return Some(local);
    }
    let index = local.join("index.html");
    index.is_file().then_some(index)
}

fn serve_file(request: Request, path: &Path, status: StatusCode) -> Result<()> {
    let content = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let response = Response::from_data(content)
        .with_status_code(status)
        .with_header(content_type(guess_content_type(path))?);
    request.respond(response)?;
    Ok(())
}

/// The built 404 page, or plain text when there is none.
fn serve_not_found(request: Request, root: &Path) -> Result<()> {
    let page = root.join(NOT_FOUND_PAGE);
    if page.is_file() {
        return serve_file(request, &page, StatusCode(404));
    }

    let response = Response::from_string("404 Not Found")
        .with_status_code(StatusCode(404))
        .with_header(content_type("text/plain; charset=utf-8")?);
    request.respond(response)?;
    Ok(())
}

fn content_type(value: &str) -> Result<Header> {
    Header::from_bytes("Content-Type", value).map_err(|()| anyhow!("invalid header `{value}`"))
}

/// Guess MIME content type from file extension.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("xml") => "application/xml; charset=utf-8",

        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",

        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",

        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain; charset=utf-8",

        _ => "application/octet-stream",
    }
}
