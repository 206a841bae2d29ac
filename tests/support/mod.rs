use httpmock::MockServer;
use postboard::config::{DEFAULT_USER_AGENT, RemoteSettings};
use postboard::infra::http::HttpPostsClient;
use url::Url;

pub fn client(server: &MockServer) -> HttpPostsClient {
    let settings = RemoteSettings {
        base_url: Url::parse(&server.base_url()).expect("mock base url"),
        user_agent: DEFAULT_USER_AGENT.to_string(),
    };
    HttpPostsClient::new(&settings).expect("client")
}
