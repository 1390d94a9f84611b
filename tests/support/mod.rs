//! Shared helpers for integration tests: a local stand-in for the GitHub
//! REST API and small fixtures.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use crypto_box::SecretKey;
use rand_core::OsRng;
use repo_bootstrap::config::{CacheCredentials, Configuration};

/// One request as the mock server saw it. Header names are lowercased.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub reason: &'static str,
    pub body: String,
}

impl MockResponse {
    pub fn new(status: u16, reason: &'static str, body: impl Into<String>) -> Self {
        Self {
            status,
            reason,
            body: body.into(),
        }
    }

    pub fn created(body: impl Into<String>) -> Self {
        Self::new(201, "Created", body)
    }

    pub fn no_content() -> Self {
        Self::new(204, "No Content", "")
    }
}

struct Route {
    method: &'static str,
    path: String,
    response: MockResponse,
}

/// Minimal HTTP/1.1 server answering canned responses per (method, path).
///
/// One request per connection; unmatched routes get a 404.
pub struct MockGitHub {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockGitHub {
    pub fn builder() -> MockGitHubBuilder {
        MockGitHubBuilder { routes: Vec::new() }
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub struct MockGitHubBuilder {
    routes: Vec<Route>,
}

impl MockGitHubBuilder {
    pub fn route(mut self, method: &'static str, path: impl Into<String>, response: MockResponse) -> Self {
        self.routes.push(Route {
            method,
            path: path.into(),
            response,
        });
        self
    }

    pub fn start(self) -> MockGitHub {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let routes = self.routes;
        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let _ = handle(&mut stream, &routes, &recorded);
            }
        });

        MockGitHub { base_url, requests }
    }
}

fn handle(
    stream: &mut TcpStream,
    routes: &[Route],
    recorded: &Mutex<Vec<RecordedRequest>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let (method, path, headers, header_len) = loop {
        let n = stream.read(&mut chunk)?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);

        let mut parsed_headers = [httparse::EMPTY_HEADER; 64];
        let mut request = httparse::Request::new(&mut parsed_headers);
        if let Ok(httparse::Status::Complete(len)) = request.parse(&buf) {
            let method = request.method.unwrap_or_default().to_string();
            let path = request.path.unwrap_or_default().to_string();
            let headers: Vec<(String, String)> = request
                .headers
                .iter()
                .map(|h| {
                    (
                        h.name.to_ascii_lowercase(),
                        String::from_utf8_lossy(h.value).into_owned(),
                    )
                })
                .collect();
            break (method, path, headers, len);
        }
    };

    let content_length = headers
        .iter()
        .find(|(k, _)| k == "content-length")
        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[header_len..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    let response = routes
        .iter()
        .find(|route| route.method == method && route.path == path)
        .map(|route| route.response.clone())
        .unwrap_or_else(|| MockResponse::new(404, "Not Found", r#"{"message":"Not Found"}"#));

    recorded.lock().unwrap().push(RecordedRequest {
        method,
        path,
        headers,
        body,
    });

    let raw = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        response.reason,
        response.body.len(),
        response.body
    );
    stream.write_all(raw.as_bytes())?;
    stream.flush()
}

/// A repository key pair, with the public half shaped like GitHub's response.
pub struct RepoKey {
    pub secret: SecretKey,
    pub key_id: &'static str,
}

impl RepoKey {
    pub fn generate(key_id: &'static str) -> Self {
        Self {
            secret: SecretKey::generate(&mut OsRng),
            key_id,
        }
    }

    pub fn public_key_json(&self) -> String {
        serde_json::json!({
            "key_id": self.key_id,
            "key": STANDARD.encode(self.secret.public_key().as_bytes()),
        })
        .to_string()
    }

    /// Opens a base64 `encrypted_value` as GitHub would.
    pub fn open(&self, encrypted_value: &str) -> String {
        let sealed = STANDARD.decode(encrypted_value).expect("encrypted_value is not base64");
        let plain = self.secret.unseal(&sealed).expect("sealed box did not open");
        String::from_utf8(plain).expect("plaintext is not UTF-8")
    }
}

pub fn config(with_secrets: bool) -> Configuration {
    Configuration {
        template_owner: "dewinterjack".into(),
        template_repo: "t3-turbo-and-clerk".into(),
        new_owner: "acme".into(),
        new_repo: "widgets".into(),
        token: "t".into(),
        cache: with_secrets.then(|| CacheCredentials {
            token: "abc123".into(),
            team: "team1".into(),
        }),
    }
}

pub const GENERATE_PATH: &str = "/repos/dewinterjack/t3-turbo-and-clerk/generate";
pub const PUBLIC_KEY_PATH: &str = "/repos/acme/widgets/actions/secrets/public-key";

pub fn secret_path(name: &str) -> String {
    format!("/repos/acme/widgets/actions/secrets/{}", name)
}

/// Writes an executable `/bin/sh` script and returns its path.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
