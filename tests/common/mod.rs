//! Shared test fixtures for the wb-search integration tests.
//!
//! Provides a tiny blocking HTTP stub (`StubServer`) that answers each request
//! through a caller-supplied closure and records the request heads, plus JSON
//! builders for search responses.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use serde_json::{json, Value};
use wb_search::{RetryPolicy, WbSearch};

// ---------------------------------------------------------------------------
// StubServer
// ---------------------------------------------------------------------------

/// HTTP/1.1 stub bound to an ephemeral localhost port.
///
/// Each connection is answered with `respond(request_head)` and then closed.
/// Connections are served one at a time on a background thread that lives
/// until the test process exits.
pub struct StubServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn start<F>(respond: F) -> Self
    where
        F: Fn(&str) -> (u16, String) + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let head = read_head(&mut stream);
                if head.is_empty() {
                    continue;
                }
                log.lock().unwrap().push(head.clone());
                let (status, body) = respond(&head);
                let resp = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                let _ = stream.write_all(resp.as_bytes());
                let _ = stream.flush();
            }
        });

        Self {
            url: format!("http://{}/exactmatch/ru/common/v9/search", addr),
            requests,
        }
    }

    /// Serve `pages[n-1]` for page `n`; pages past the end are empty.
    pub fn with_pages(pages: Vec<Vec<Value>>) -> Self {
        Self::start(move |head| {
            let page: usize = page_of(head) as usize;
            let products = pages.get(page.wrapping_sub(1)).cloned().unwrap_or_default();
            (200, search_body(products))
        })
    }

    /// Raw request heads (request line + headers) in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// The `page` parameter of every request received, in arrival order.
    pub fn pages_requested(&self) -> Vec<u32> {
        self.requests().iter().map(|h| page_of(h)).collect()
    }
}

fn read_head(stream: &mut TcpStream) -> String {
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Value of query parameter `name` in the request line of `head`.
pub fn query_param(head: &str, name: &str) -> Option<String> {
    let line = head.lines().next()?;
    let target = line.split_whitespace().nth(1)?;
    let query = target.split_once('?')?.1;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

pub fn page_of(head: &str) -> u32 {
    query_param(head, "page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

/// Search client pointed at `server`, retrying without delay.
pub fn client_for(server: &StubServer, output_dir: &std::path::Path) -> WbSearch {
    WbSearch::builder()
        .endpoint(&server.url)
        .timeout(Duration::from_secs(5))
        .retry_policy(RetryPolicy::fixed(3, Duration::ZERO))
        .output_dir(output_dir)
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// JSON fixtures
// ---------------------------------------------------------------------------

/// A fully populated product entry.
pub fn product(id: u64, price_u: u64, sale_price_u: u64) -> Value {
    json!({
        "id": id,
        "name": format!("Product {id}"),
        "brand": "Acme",
        "priceU": price_u,
        "salePriceU": sale_price_u,
        "rating": 5,
        "reviewRating": 4.8,
        "supplier": "Acme Store",
        "supplierRating": 4.6,
        "feedbacks": 120,
        "promoTextCard": "HOT",
        "promoTextCat": "SALE"
    })
}

/// `count` products with ids starting at `first_id`.
pub fn products(first_id: u64, count: u64) -> Vec<Value> {
    (first_id..first_id + count)
        .map(|id| product(id, 250_000, 200_000))
        .collect()
}

pub fn search_body(products: Vec<Value>) -> String {
    json!({
        "metadata": {"name": "phone"},
        "state": 0,
        "version": 2,
        "data": {"products": products}
    })
    .to_string()
}
