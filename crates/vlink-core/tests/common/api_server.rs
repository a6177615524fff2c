//! Minimal HTTP/1.1 server standing in for the resolution API in integration tests.
//!
//! Answers every request with one canned status, content type and body, and
//! records what it received so tests can check the wire contract.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// One request as seen by the server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

pub struct ApiServer {
    /// Endpoint URL, e.g. "http://127.0.0.1:12345/api/json".
    pub url: String,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

impl ApiServer {
    pub fn requests(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }
}

/// Starts a server answering `status` with a JSON body.
pub fn start_json(status: u32, body: &str) -> ApiServer {
    start(status, Some("application/json"), body)
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start(status: u32, content_type: Option<&str>, body: &str) -> ApiServer {
    let headers = content_type
        .map(|c| vec![("Content-Type".to_string(), c.to_string())])
        .unwrap_or_default();
    start_with_headers(status, headers, body)
}

/// Starts a server answering `302 Found` with a `Location` header.
pub fn start_redirect(location: &str) -> ApiServer {
    start_with_headers(
        302,
        vec![
            ("Location".to_string(), location.to_string()),
            ("Content-Type".to_string(), "text/plain".to_string()),
        ],
        "moved",
    )
}

fn start_with_headers(status: u32, headers: Vec<(String, String)>, body: &str) -> ApiServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let headers = Arc::new(headers);
    let body = body.to_string();
    {
        let recorded = Arc::clone(&recorded);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let recorded = Arc::clone(&recorded);
                let headers = Arc::clone(&headers);
                let body = body.clone();
                thread::spawn(move || handle(stream, status, &headers, &body, &recorded));
            }
        });
    }
    ApiServer {
        url: format!("http://127.0.0.1:{}/api/json", port),
        recorded,
    }
}

/// Returns an endpoint that accepts connections but never answers.
pub fn silent_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming().flatten() {
            held.push(stream);
        }
    });
    format!("http://127.0.0.1:{}/api/json", port)
}

/// Returns an endpoint URL on a port with nothing listening.
pub fn refused_endpoint() -> String {
    let port = {
        let l = TcpListener::bind("127.0.0.1:0").expect("bind");
        l.local_addr().unwrap().port()
    };
    format!("http://127.0.0.1:{}/api/json", port)
}

fn handle(
    mut stream: TcpStream,
    status: u32,
    headers: &[(String, String)],
    body: &str,
    recorded: &Mutex<Vec<Recorded>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let request = match read_request(&mut stream) {
        Some(r) => r,
        None => return,
    };
    recorded.lock().unwrap().push(request);

    let extra: String = headers
        .iter()
        .map(|(n, v)| format!("{}: {}\r\n", n, v))
        .collect();
    let response = format!(
        "HTTP/1.1 {} Canned\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        extra,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}

fn read_request(stream: &mut TcpStream) -> Option<Recorded> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let head_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    };
    let head = std::str::from_utf8(&buf[..head_end]).ok()?.to_string();
    let mut lines = head.lines();
    let mut first = lines.next()?.split_whitespace();
    let method = first.next()?.to_string();
    let path = first.next()?.to_string();

    let mut headers = Vec::new();
    let mut content_length = 0usize;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            let (name, value) = (name.trim().to_string(), value.trim().to_string());
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            }
            headers.push((name, value));
        }
    }

    let mut body = buf[head_end + 4..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }
    body.truncate(content_length);

    Some(Recorded {
        method,
        path,
        headers,
        body,
    })
}

/// Parsed response from [`raw_request`].
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RawResponse {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Sends a raw HTTP request to `addr` and reads the response until the peer closes.
/// The request should carry `Connection: close`.
pub fn raw_request(addr: &str, request: &str) -> RawResponse {
    let mut stream = TcpStream::connect(addr).expect("connect");
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .unwrap();
    stream.write_all(request.as_bytes()).unwrap();
    let mut out = Vec::new();
    let _ = stream.read_to_end(&mut out);
    let text = String::from_utf8_lossy(&out).into_owned();

    let (head, body) = text.split_once("\r\n\r\n").unwrap_or((text.as_str(), ""));
    let mut lines = head.lines();
    let status = lines
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| panic!("no status line in: {:?}", text));
    let headers = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(n, v)| (n.trim().to_string(), v.trim().to_string()))
        .collect();
    RawResponse {
        status,
        headers,
        body: body.to_string(),
    }
}
