/// Scripted HTTP transport
///
/// Replays queued responses in order and records every requested URL and the
/// token it came with. Once the script is exhausted it keeps answering with the
/// fallback response.
use animepulse::modules::provider::{HttpTransport, TransportError, TransportResponse};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;

type Reply = Result<TransportResponse, TransportError>;

pub struct ScriptedTransport {
    script: Mutex<VecDeque<Reply>>,
    fallback: Reply,
    requests: Mutex<Vec<String>>,
    tokens: Mutex<Vec<CancellationToken>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::with_fallback(Ok(TransportResponse::new(500, "")))
    }

    pub fn with_fallback(fallback: Reply) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback,
            requests: Mutex::new(Vec::new()),
            tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, reply: Reply) -> &Self {
        self.script.lock().unwrap().push_back(reply);
        self
    }

    pub fn push_status(&self, status: u16) -> &Self {
        self.push(Ok(TransportResponse::new(status, "")))
    }

    pub fn push_json(&self, body: Value) -> &Self {
        self.push(Ok(TransportResponse::new(200, body.to_string())))
    }

    /// One list page holding anime records with the given ids
    pub fn push_page(&self, ids: &[i64], has_next_page: bool) -> &Self {
        self.push_json(page_body(ids, has_next_page))
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Cancellation tokens handed in with each request, in request order
    pub fn tokens(&self) -> Vec<CancellationToken> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &str, token: &CancellationToken) -> Reply {
        if token.is_cancelled() {
            return Err(TransportError::Cancelled);
        }
        self.requests.lock().unwrap().push(url.to_string());
        self.tokens.lock().unwrap().push(token.clone());

        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| self.fallback.clone())
    }
}

pub fn anime_record(id: i64) -> Value {
    json!({
        "mal_id": id,
        "title": format!("Test Anime {}", id),
        "score": 7.5,
        "type": "TV",
        "synopsis": "A test synopsis.",
        "images": { "webp": { "image_url": format!("https://cdn.test/{}.webp", id) } }
    })
}

pub fn page_body(ids: &[i64], has_next_page: bool) -> Value {
    let data: Vec<Value> = ids.iter().copied().map(anime_record).collect();
    json!({ "data": data, "pagination": { "has_next_page": has_next_page } })
}
