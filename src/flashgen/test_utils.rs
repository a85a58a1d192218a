//! In-memory collaborators for tests: canned model output and canned HTTP
//! responses, no network involved. [`serve_once`] covers the HTTP clients
//! themselves with a single canned response on a loopback port.

use crate::controls::Controls;
use crate::error::{FlashError, Result};
use crate::fetch::Fetcher;
use crate::generate::Generator;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

/// Returns the same response for every topic.
///
/// When built with [`StaticGenerator::observing`], it also records whether
/// the load control was enabled at the moment it was called.
pub struct StaticGenerator {
    response: Result<String>,
    observed: Option<Controls>,
    load_enabled_during_call: Cell<Option<bool>>,
    topics: RefCell<Vec<String>>,
}

impl StaticGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_result(Ok(response.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_result(Err(FlashError::Generation(message.into())))
    }

    fn with_result(response: Result<String>) -> Self {
        Self {
            response,
            observed: None,
            load_enabled_during_call: Cell::new(None),
            topics: RefCell::new(Vec::new()),
        }
    }

    pub fn observing(mut self, controls: &Controls) -> Self {
        self.observed = Some(controls.clone());
        self
    }

    pub fn load_enabled_during_call(&self) -> Option<bool> {
        self.load_enabled_during_call.get()
    }

    pub fn topics(&self) -> Vec<String> {
        self.topics.borrow().clone()
    }
}

impl Generator for StaticGenerator {
    fn generate(&self, topic: &str) -> Result<String> {
        self.topics.borrow_mut().push(topic.to_string());
        if let Some(controls) = &self.observed {
            self.load_enabled_during_call
                .set(Some(controls.load_enabled()));
        }
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(FlashError::Generation(msg)) => Err(FlashError::Generation(msg.clone())),
            Err(other) => Err(FlashError::Generation(other.to_string())),
        }
    }
}

/// Serves canned bodies keyed by URL. Unknown URLs answer 404.
#[derive(Default)]
pub struct MemoryFetcher {
    responses: HashMap<String, (u16, String)>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(url.into(), (200, body.into()));
        self
    }

    pub fn with_status(mut self, url: impl Into<String>, status: u16) -> Self {
        self.responses.insert(url.into(), (status, String::new()));
        self
    }
}

impl Fetcher for MemoryFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        match self.responses.get(url) {
            Some((status, body)) if (200..300).contains(status) => Ok(body.clone()),
            Some((status, _)) => Err(FlashError::Network(format!("HTTP {} from {}", status, url))),
            None => Err(FlashError::Network(format!("HTTP 404 from {}", url))),
        }
    }
}

/// Answer exactly one HTTP/1.1 request on `127.0.0.1` with `status` (e.g.
/// `"404 Not Found"`) and `body`.
///
/// Returns the base URL (`http://127.0.0.1:<port>`) and a handle that yields
/// the raw request once it has been answered.
pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind loopback port");
    let addr = listener.local_addr().expect("listener has no address");
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("no client connected");
        let request = read_request(&stream);
        stream
            .write_all(response.as_bytes())
            .expect("failed to write response");
        request
    });
    (format!("http://{}", addr), handle)
}

/// Head plus a `Content-Length` body, so the client is never cut off mid-send.
fn read_request(stream: &TcpStream) -> String {
    let mut reader = BufReader::new(stream);
    let mut request = String::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).expect("failed to read request") == 0 {
            break;
        }
        request.push_str(&line);
        if line == "\r\n" {
            break;
        }
    }

    let length = request
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0u8; length];
    reader
        .read_exact(&mut body)
        .expect("failed to read request body");
    request.push_str(&String::from_utf8_lossy(&body));
    request
}
