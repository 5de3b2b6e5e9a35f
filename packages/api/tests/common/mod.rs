//! Scripted HTTP backend for integration tests.
//!
//! [`MockServer::start`] binds an ephemeral port and answers requests in
//! order with the given [`Reply`] list, recording what it received.

#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use api::ApiClient;
use store::AppConfig;
use tiny_http::{Header, Response, Server};

#[derive(Clone, Debug)]
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl Reply {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: String,
}

pub struct MockServer {
    pub url: String,
    recorded: Arc<Mutex<Vec<Recorded>>>,
}

impl MockServer {
    pub fn start(replies: Vec<Reply>) -> Self {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&recorded);

        thread::spawn(move || {
            for reply in replies {
                let Ok(mut request) = server.recv() else {
                    return;
                };
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let authorization = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Authorization"))
                    .map(|h| h.value.as_str().to_string());
                log.lock().unwrap().push(Recorded {
                    method: request.method().as_str().to_string(),
                    path: request.url().to_string(),
                    authorization,
                    body,
                });

                if let Some(delay) = reply.delay {
                    thread::sleep(delay);
                }
                let content_type =
                    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
                let response = Response::from_string(reply.body)
                    .with_status_code(reply.status)
                    .with_header(content_type);
                let _ = request.respond(response);
            }
        });

        Self {
            url: format!("http://{addr}"),
            recorded,
        }
    }

    pub fn config(&self) -> AppConfig {
        AppConfig::new(self.url.clone())
    }

    pub fn client(&self, token: Option<&str>) -> ApiClient {
        ApiClient::private(&self.config(), token).unwrap()
    }

    pub fn public_client(&self) -> ApiClient {
        ApiClient::public(&self.config()).unwrap()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }
}
