//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves fixed bodies by path and answers 404 for anything else. Every
//! requested path is recorded so tests can check what was (not) fetched.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// How the server answers one path.
#[derive(Debug, Clone)]
pub enum Route {
    /// 200 with the full body.
    Body(Vec<u8>),
    /// 200 advertising `declared_len` bytes, then only `body` before closing.
    Truncated { body: Vec<u8>, declared_len: usize },
}

pub struct ImageServer {
    base_url: String,
    hits: Arc<Mutex<Vec<String>>>,
}

impl ImageServer {
    /// Starts a server in a background thread. `routes` maps paths such as
    /// "/tiles/a-aaaa.jpg" to response bodies. The server runs until the process exits.
    pub fn start(routes: Vec<(&str, Vec<u8>)>) -> Self {
        Self::start_with_routes(
            routes
                .into_iter()
                .map(|(path, body)| (path, Route::Body(body)))
                .collect(),
        )
    }

    /// Like `start` but each path can also answer with a cut-off body.
    pub fn start_with_routes(routes: Vec<(&str, Route)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes: Arc<HashMap<String, Route>> = Arc::new(
            routes
                .into_iter()
                .map(|(path, route)| (path.to_string(), route))
                .collect(),
        );
        let hits = Arc::new(Mutex::new(Vec::new()));

        let server_hits = Arc::clone(&hits);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let hits = Arc::clone(&server_hits);
                thread::spawn(move || handle(stream, &routes, &hits));
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            hits,
        }
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Paths requested so far, in arrival order.
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>, hits: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    hits.lock().unwrap().push(path.clone());

    match routes.get(&path) {
        Some(Route::Body(body)) => write_ok(&mut stream, body, body.len()),
        Some(Route::Truncated { body, declared_len }) => {
            write_ok(&mut stream, body, *declared_len)
        }
        None => {
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
        }
    }
    let _ = stream.flush();
}

fn write_ok(stream: &mut TcpStream, body: &[u8], content_length: usize) {
    let header = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: image/jpeg\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        content_length
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}
