use httpmock::MockServer;
use opendataug::{Client, Config};

pub const API_KEY: &str = "test-api-key";

/// Builds a client pointed at the given mock server, keyed with the
/// credentials the mocks expect.
pub fn client_for(server: &MockServer) -> Client {
    Client::with_config(Config {
        base_url: server.base_url(),
        api_key: API_KEY.to_string(),
        ..Config::default()
    })
}
