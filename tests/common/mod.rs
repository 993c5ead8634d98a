//! Common test utilities for dreamstore integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use tempfile::TempDir;
use teloxide::types::ChatId;

use dreamstore::catalog::Catalog;
use dreamstore::storage::{self, DbPool};
use dreamstore::telegram::Notifier;
use dreamstore::web::{create_router, AppState};

/// Token the webhook route is mounted under in tests.
pub const TEST_BOT_TOKEN: &str = "123456:TEST-TOKEN";

/// Notifier that records the chats it was asked to welcome instead of
/// talking to Telegram. Can be flipped to fail every send.
pub struct RecordingNotifier {
    sent: Mutex<Vec<ChatId>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        RecordingNotifier {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A notifier whose every send fails after being recorded.
    pub fn failing() -> Self {
        RecordingNotifier {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Chats a welcome was sent (or attempted) to, in order.
    pub fn sent_to(&self) -> Vec<ChatId> {
        self.sent.lock().expect("notifier lock").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_welcome(&self, chat_id: ChatId) -> anyhow::Result<()> {
        self.sent.lock().expect("notifier lock").push(chat_id);
        if self.fail {
            anyhow::bail!("simulated Telegram API failure");
        }
        Ok(())
    }
}

/// A fresh pool over a temp-file database with migrations applied.
///
/// The TempDir must be kept alive for the duration of the test.
pub fn test_pool() -> (Arc<DbPool>, TempDir) {
    let temp_dir = TempDir::new().expect("create temp directory");
    let db_path = temp_dir.path().join("test.sqlite");
    let pool = storage::create_pool(db_path.to_str().expect("utf-8 path")).expect("create pool");
    (Arc::new(pool), temp_dir)
}

/// Test harness containing everything needed for HTTP-level tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Pool into the same database the server uses.
    pub pool: Arc<DbPool>,
    /// The recording notifier behind the webhook route.
    pub notifier: Arc<RecordingNotifier>,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: TempDir,
}

impl TestHarness {
    /// Harness with a recording notifier that succeeds.
    pub fn new() -> Self {
        Self::with_notifier(Arc::new(RecordingNotifier::new()))
    }

    /// Harness whose notifier fails every send.
    pub fn with_failing_notifier() -> Self {
        Self::with_notifier(Arc::new(RecordingNotifier::failing()))
    }

    fn with_notifier(notifier: Arc<RecordingNotifier>) -> Self {
        let (pool, temp_dir) = test_pool();

        let state = AppState {
            db_pool: Arc::clone(&pool),
            catalog: Arc::new(Catalog::standard()),
            notifier: Arc::clone(&notifier) as Arc<dyn Notifier>,
        };

        let server = TestServer::new(create_router(state, TEST_BOT_TOKEN)).expect("create test server");

        TestHarness {
            server,
            pool,
            notifier,
            _temp_dir: temp_dir,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
