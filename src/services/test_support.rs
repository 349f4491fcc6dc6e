//! Mock catalog endpoint for tests. The mock server runs on its own runtime;
//! the blocking fetcher is driven from the test thread.

use std::io;
use std::sync::{Arc, Mutex};

use reqwest::blocking::Client;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path, query_param_is_missing};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use crate::config::FetchConfig;
use crate::services::fetch::Fetcher;

const APPLIST_PATH: &str = "/ISteamApps/GetAppList/v2/";

pub struct MockCatalog {
    // Declared before `rt` so expectations are verified while it is alive.
    server: MockServer,
    rt: Runtime,
}

impl MockCatalog {
    pub fn start() -> Self {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let server = rt.block_on(MockServer::start());

        MockCatalog { server, rt }
    }

    pub fn url(&self) -> String {
        format!("{}{APPLIST_PATH}", self.server.uri())
    }

    // Responses are served in mount order; each must be hit exactly `times`.
    pub fn respond(&self, status: u16, body: &str, times: u64) {
        let mock = Mock::given(method("GET"))
            .and(path(APPLIST_PATH))
            .and(query_param_is_missing("key"))
            .respond_with(ResponseTemplate::new(status).set_body_raw(body, "application/json"))
            .up_to_n_times(times)
            .expect(times);

        self.rt.block_on(mock.mount(&self.server));
    }

    pub fn requests(&self) -> Vec<Request> {
        self.rt
            .block_on(self.server.received_requests())
            .unwrap_or_default()
    }
}

pub fn local_fetcher(config: FetchConfig) -> Fetcher {
    let client = Client::builder()
        .timeout(config.timeout)
        .no_proxy()
        .build()
        .unwrap();

    Fetcher::with_client(client, config)
}

/// Collects formatted `tracing` output emitted inside `f`.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&buf);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || LogSink(Arc::clone(&sink)))
        .with_ansi(false)
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    let text = String::from_utf8_lossy(&buf.lock().unwrap()).into_owned();

    (out, text)
}

struct LogSink(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogSink {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
