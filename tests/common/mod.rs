//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use event_log::{EventLogger, LogRecord, LogSink};
use tokio::net::TcpListener;

/// Sink that keeps every record in memory.
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingSink {
    #[allow(dead_code)]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn count_event(&self, event: &str) -> usize {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.fields.get("event").and_then(|v| v.as_str()) == Some(event))
            .count()
    }
}

impl LogSink for RecordingSink {
    fn emit(&self, record: &LogRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}

/// Logger wired to a fresh recording sink.
#[allow(dead_code)]
pub fn recording_logger() -> (Arc<EventLogger>, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    (Arc::new(EventLogger::new(sink.clone())), sink)
}

/// Serve `app` on an ephemeral local port.
#[allow(dead_code)]
pub async fn start_server(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    addr
}
