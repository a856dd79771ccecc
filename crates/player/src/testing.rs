//! Test helpers shared by screen tests.

use charsheet_engine::{App, AppConfig};
use tempfile::TempDir;

/// App over a fresh SQLite file. Keep the `TempDir` alive for the test.
pub(crate) async fn create_test_app() -> (TempDir, App) {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        db_path: dir.path().join("sheets.db").to_str().unwrap().to_string(),
        username: "tester".to_string(),
    };
    let app = App::connect(config).await.unwrap();
    (dir, app)
}
