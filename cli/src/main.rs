//! Terminal front end for the storefront page.
//!
//! Stands in for a browser page: executes the controller's pending requests
//! over real HTTP and renders the resulting `View` as text. Non-2xx statuses
//! are handed to the core as data; only transport-level failures (connection
//! refused, ...) abort the command loop.

mod render;

use std::io::{self, BufRead, Write};

use storefront_core::{HttpMethod, HttpResponse, PageController, PendingFetch, ShopClient};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let base_url = std::env::var("STOREFRONT_API_URL")
        .unwrap_or_else(|_| "http://localhost:3001".to_string());
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut page = PageController::new(ShopClient::new(&base_url));

    for pending in page.open() {
        dispatch(&agent, &mut page, pending)?;
    }
    show(&page);

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("add"), Some(product_id)) => {
                let pending = page.add_to_cart(product_id)?;
                dispatch(&agent, &mut page, pending)?;
            }
            (Some("remove"), Some(product_id)) => {
                let pending = page.remove_from_cart(product_id);
                dispatch(&agent, &mut page, pending)?;
            }
            (Some("refresh"), _) => {
                for pending in page.open() {
                    dispatch(&agent, &mut page, pending)?;
                }
            }
            (Some("quit") | Some("q"), _) => break,
            (None, _) => {}
            _ => {
                println!("commands: add <productId> | remove <productId> | refresh | quit");
                prompt()?;
                continue;
            }
        }
        show(&page);
        prompt()?;
    }

    Ok(())
}

/// Execute a pending request and feed the response back into the page,
/// following the post-mutation cart refetch when the controller asks for it.
fn dispatch(
    agent: &ureq::Agent,
    page: &mut PageController,
    pending: PendingFetch,
) -> Result<(), ureq::Error> {
    let mut next = Some(pending);
    while let Some(pending) = next.take() {
        debug!(operation = %pending.operation, path = %pending.request.path, "executing");
        let response = execute(agent, pending.request)?;
        next = page.handle_response(pending.operation, response);
    }
    Ok(())
}

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
/// responses come back as data rather than `Err`, letting the core handle
/// status interpretation.
fn execute(
    agent: &ureq::Agent,
    request: storefront_core::HttpRequest,
) -> Result<HttpResponse, ureq::Error> {
    let mut response = match (request.method, request.body) {
        (HttpMethod::Get, _) => agent.get(&request.path).call()?,
        (HttpMethod::Delete, _) => agent.delete(&request.path).call()?,
        (HttpMethod::Post, Some(body)) => agent
            .post(&request.path)
            .content_type("application/json")
            .send(body.as_bytes())?,
        (HttpMethod::Post, None) => agent.post(&request.path).send_empty()?,
    };

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

fn show(page: &PageController) {
    print!("{}", render::render(&page.view()));
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
