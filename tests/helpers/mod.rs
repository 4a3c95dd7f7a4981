use serde_json::json;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::JoinHandle;

/// One canned HTTP response, served in order. The stub mirrors the original
/// test approach of mocking the fetch layer with a fixed response sequence.
#[allow(dead_code)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

#[allow(dead_code)]
impl CannedResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn created() -> Self {
        Self {
            status: 201,
            body: "{}".to_string(),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: String::new(),
        }
    }

    /// Error response carrying the service's `{"message": ...}` body
    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "message": message }).to_string(),
        }
    }
}

/// What the stub saw for one request
#[allow(dead_code)]
pub struct ReceivedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[allow(dead_code)]
impl ReceivedRequest {
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Single-threaded HTTP stub: serves the given responses in order, one
/// connection each, and records every request. `finish` joins the server
/// thread and hands the recorded requests back, so a test can assert both
/// what the client sent and how it reacted. Tests must drive exactly as many
/// requests as there are canned responses.
pub struct StubServer {
    base_url: String,
    handle: Option<JoinHandle<Vec<ReceivedRequest>>>,
}

#[allow(dead_code)]
impl StubServer {
    pub fn start(responses: Vec<CannedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = std::thread::spawn(move || {
            let mut received = Vec::new();
            for response in responses {
                let (stream, _) = listener.accept().expect("Stub server accept failed");
                received.push(serve_one(stream, &response));
            }
            received
        });

        Self {
            base_url,
            handle: Some(handle),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Wait for all canned responses to be consumed and return the requests
    pub fn finish(mut self) -> Vec<ReceivedRequest> {
        self.handle
            .take()
            .expect("StubServer already finished")
            .join()
            .expect("Stub server thread panicked")
    }
}

fn serve_one(stream: TcpStream, response: &CannedResponse) -> ReceivedRequest {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader
        .read_line(&mut request_line)
        .expect("Failed to read request line");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    let mut content_type = None;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("Failed to read header");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            match name.to_ascii_lowercase().as_str() {
                "content-length" => content_length = value.parse().unwrap_or(0),
                "content-type" => content_type = Some(value.to_string()),
                _ => {}
            }
        }
    }

    let mut body = vec![0u8; content_length];
    if content_length > 0 {
        reader
            .read_exact(&mut body)
            .expect("Failed to read request body");
    }

    let mut stream = reader.into_inner();
    let reply = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason(response.status),
        response.body.len(),
        response.body,
    );
    stream
        .write_all(reply.as_bytes())
        .expect("Failed to write stub response");
    stream.flush().expect("Failed to flush stub response");

    ReceivedRequest {
        method,
        path,
        content_type,
        body,
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Unknown",
    }
}

/// JSON for one note as the service reports it
#[allow(dead_code)]
pub fn note_body(id: i64, title: &str, content: &str, image: &str) -> serde_json::Value {
    json!({ "id": id, "title": title, "content": content, "image": image })
}

/// JSON for one page of notes with pagination metadata
#[allow(dead_code)]
pub fn page_body(
    items: Vec<serde_json::Value>,
    page: u32,
    limit: u32,
    total_items: u64,
    total_pages: u32,
) -> String {
    json!({
        "items": items,
        "meta": {
            "page": page,
            "limit": limit,
            "totalItems": total_items,
            "totalPages": total_pages,
        },
    })
    .to_string()
}
