pub mod mock_browser;
pub mod session_utils;
pub mod test_server;

pub use mock_browser::MockBrowser;
pub use session_utils::extract_session_id;
pub use test_server::TestServer;
