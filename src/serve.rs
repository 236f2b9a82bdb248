//! Development server.
//!
//! Built on `tiny_http`. Pages are rendered per request from the current
//! content store; everything else is served from the build output.
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │   Main Thread   │     │  Watcher Thread  │
//! │  (HTTP Server)  │     │  (File Monitor)  │
//! └────────┬────────┘     └────────┬─────────┘
//!          │ load()                │ store()
//!          ▼                       ▼
//!      ArcSwap<ContentStore> (replaced wholesale on reload)
//! ```

use crate::{
    config::SiteConfig,
    content::ContentStore,
    log,
    render::{self, Page, PageStatus},
    route::Route,
    watch::watch_for_changes_blocking,
};
use anyhow::{Context, Result, anyhow};
use arc_swap::ArcSwap;
use std::{
    fs,
    net::{IpAddr, SocketAddr},
    path::{Component, Path},
    sync::Arc,
};
use tiny_http::{Header, Request, Response, Server, StatusCode};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

/// Content store shared between the server and the watcher.
pub type SharedStore = Arc<ArcSwap<ContentStore>>;

/// Start the development server with optional file watching.
///
/// Blocks until Ctrl+C is received.
pub fn serve_site(config: &'static SiteConfig, store: ContentStore) -> Result<()> {
    let interface: IpAddr = config
        .serve
        .interface
        .parse()
        .with_context(|| format!("Invalid interface `{}`", config.serve.interface))?;

    let (server, addr) = try_bind_port(interface, config.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);
    let store: SharedStore = Arc::new(ArcSwap::from_pointee(store));

    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}", addr);

    if config.serve.watch {
        let store = Arc::clone(&store);
        std::thread::spawn(move || {
            if let Err(err) = watch_for_changes_blocking(config, &store) {
                log!("watch"; "{err}");
            }
        });
    }

    for request in server.incoming_requests() {
        let current = store.load();
        if let Err(e) = handle_request(request, config, &current) {
            log!("serve"; "request error: {e}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(
    interface: IpAddr,
    base_port: u16,
    max_retries: u16,
) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;

    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
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

// ============================================================================
// Request Handling
// ============================================================================

/// Response produced for a request URL, independent of the transport.
#[derive(Debug)]
struct Reply {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

impl Reply {
    fn page(page: Page) -> Self {
        let status = match page.status {
            PageStatus::Found => 200,
            PageStatus::NotFound => 404,
        };
        Self {
            status,
            content_type: "text/html; charset=utf-8",
            body: page.html.into_bytes(),
        }
    }

    fn not_found() -> Self {
        Self {
            status: 404,
            content_type: "text/plain; charset=utf-8",
            body: b"404 Not Found".to_vec(),
        }
    }
}

fn handle_request(request: Request, config: &SiteConfig, store: &ContentStore) -> Result<()> {
    let reply = respond(request.url(), config, store)?;
    let header = Header::from_bytes("Content-Type", reply.content_type)
        .map_err(|()| anyhow!("invalid content type header"))?;
    let response = Response::from_data(reply.body)
        .with_status_code(StatusCode(reply.status))
        .with_header(header);

    request.respond(response)?;
    Ok(())
}

/// Resolution order:
/// 1. `/` → home page
/// 2. `/blog/{segment}` → detail page, 404 with the not-found view on a miss
/// 3. file in the output directory (or its `index.html`)
/// 4. plain 404
fn respond(url: &str, config: &SiteConfig, store: &ContentStore) -> Result<Reply> {
    match Route::parse(url) {
        Route::Home => Ok(Reply::page(render::render_home(config, store))),
        Route::Post(segment) => Ok(Reply::page(render::render_post(config, store, &segment))),
        Route::File(path) => serve_file(&config.build.output, &path),
    }
}

fn serve_file(root: &Path, request_path: &str) -> Result<Reply> {
    let relative = Path::new(request_path);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Ok(Reply::not_found());
    }

    let mut local_path = root.join(relative);
    if local_path.is_dir() {
        local_path = local_path.join("index.html");
    }
    if !local_path.is_file() {
        return Ok(Reply::not_found());
    }

    let body = fs::read(&local_path)
        .with_context(|| format!("Failed to read {}", local_path.display()))?;
    Ok(Reply {
        status: 200,
        content_type: guess_content_type(&local_path),
        body,
    })
}

/// Guess MIME content type from file extension.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("xml") => "application/xml; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}
