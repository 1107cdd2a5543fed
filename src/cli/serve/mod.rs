//! Development server.
//!
//! Every request runs the same synchronous pipeline as the static build:
//! route resolution -> page render -> shell composition -> markup string.
//! Static assets are served straight from the assets directory through
//! the fingerprint manifest; requests under the API prefix are forwarded
//! to the configured upstream.

mod lifecycle;
mod proxy;
mod response;

use crate::{
    asset::AssetManifest,
    config::{SiteConfig, cfg},
    core::{UrlPath, is_shutdown},
    debug, log,
    page::PageId,
    route::RouteTable,
    shell,
};
use anyhow::Result;
use proxy::ApiProxy;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Everything a request handler needs, built once before the loop.
struct ServeContext {
    table: RouteTable,
    assets: AssetManifest,
    proxy: Option<ApiProxy>,
}

/// Bind, then serve until Ctrl+C.
pub fn serve_site(config: Arc<SiteConfig>) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server_for_shutdown(Arc::clone(&server));

    let assets = AssetManifest::scan(&config.build.assets)?;
    debug!("serve"; "{} asset(s) in manifest", assets.len());

    let proxy = config
        .serve
        .api_upstream
        .as_deref()
        .map(|upstream| ApiProxy::new(&config.serve.api_prefix, upstream));
    if let Some(upstream) = &config.serve.api_upstream {
        log!("serve"; "proxying {} to {}", config.serve.api_prefix, upstream);
    }

    log!("serve"; "http://{}", addr);

    let ctx = Arc::new(ServeContext {
        table: RouteTable::site(),
        assets,
        proxy,
    });

    run_request_loop(&server, ctx);
    Ok(())
}

fn run_request_loop(server: &Server, ctx: Arc<ServeContext>) {
    // Thread pool keeps a slow upstream from blocking other requests
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("failed to create thread pool");

    for request in server.incoming_requests() {
        let ctx = Arc::clone(&ctx);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &ctx) {
                log!("serve"; "request error: {e}");
            }
        });
    }
}

/// Handle a single HTTP request
fn handle_request(request: Request, ctx: &ServeContext) -> Result<()> {
    // Early exit if shutdown requested
    if is_shutdown() {
        return response::respond_unavailable(request);
    }

    // API prefix forwards to the upstream process
    if let Some(proxy) = &ctx.proxy
        && proxy.matches(request.url())
    {
        return proxy.forward(request);
    }

    // Fingerprinted asset URLs resolve back to source files on disk
    let asset_url = UrlPath::from_asset(&decode_path(request.url()));
    if let Some(source) = ctx.assets.source_for_url(asset_url.as_str()) {
        return response::respond_asset(request, source);
    }

    // Everything else goes through the route table; resolution is total,
    // so this always produces exactly one page.
    // Lock-free config read per request (supports atomic replacement)
    let config = cfg();
    let (status, html) = render_page(ctx, request.url(), &config.site.language);
    response::respond_html(request, status, html)
}

/// Resolve a request path and render the full document.
///
/// The 404 page is a normal composition; only the status code marks it.
fn render_page(ctx: &ServeContext, raw_url: &str, lang: &str) -> (u16, String) {
    let url = UrlPath::from_browser(raw_url);
    let page = ctx.table.resolve(&url);
    let status = if page == PageId::NotFound { 404 } else { 200 };

    let rendered = page.render(&ctx.assets);
    let html = shell::render_document(&rendered, &ctx.assets, lang);

    debug!("serve"; "{} -> {} ({})", url, page.name(), status);
    (status, html)
}

/// Percent-decode a raw request URL and strip the query string, without
/// page-style trailing-slash normalization.
fn decode_path(url: &str) -> String {
    use percent_encoding::percent_decode_str;
    let path = url.split('?').next().unwrap_or(url);
    percent_decode_str(path)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ServeContext {
        ServeContext {
            table: RouteTable::site(),
            assets: AssetManifest::default(),
            proxy: None,
        }
    }

    #[test]
    fn test_decode_path() {
        assert_eq!(decode_path("/images/a.png?v=2"), "/images/a.png");
        assert_eq!(decode_path("/%D1%88%D0%B8%D0%BD%D1%8B"), "/шины");
    }

    #[test]
    fn test_known_path_renders_with_200() {
        let (status, html) = render_page(&ctx(), "/", "ru");
        assert_eq!(status, 200);
        assert!(html.contains("<title>звенигородок</title>"));
    }

    #[test]
    fn test_unknown_path_renders_not_found_with_404() {
        let (status, html) = render_page(&ctx(), "/nonexistent-xyz", "ru");
        assert_eq!(status, 404);
        assert!(html.contains("Такой страницы нет"));

        // query strings do not rescue an unknown path
        let (status, _) = render_page(&ctx(), "/missing?utm=x", "ru");
        assert_eq!(status, 404);
    }

    #[test]
    fn test_exact_path_with_query_renders_with_200() {
        let (status, _) = render_page(&ctx(), "/cleaning?from=ad", "ru");
        assert_eq!(status, 200);
    }
}
