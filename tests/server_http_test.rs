use httpmock::prelude::*;
use memoq_client::{
    ClientConfig, MemoQError, MemoQServer, ProjectStatus, ServiceFamily, TransportConfig,
};
use serde_json::json;

fn wsdl(operations: &[&str]) -> String {
    let ops: String = operations
        .iter()
        .map(|op| format!(r#"<wsdl:operation name="{}"><wsdl:input/></wsdl:operation>"#, op))
        .collect();
    format!(
        r#"<?xml version="1.0"?><wsdl:definitions><wsdl:portType name="IService">{}</wsdl:portType></wsdl:definitions>"#,
        ops
    )
}

fn mock_wsdl<'a>(server: &'a MockServer, path: &str, operations: &[&str]) -> httpmock::Mock<'a> {
    let body = wsdl(operations);
    server.mock(|when, then| {
        when.method(GET).path(path).query_param_exists("wsdl");
        then.status(200)
            .header("Content-Type", "text/xml")
            .body(body);
    })
}

fn facade(server: &MockServer) -> MemoQServer {
    let config = ClientConfig {
        server: memoq_client::ServerConfig {
            base_url: server.base_url(),
        },
        transport: TransportConfig {
            timeout_seconds: 5,
            ..Default::default()
        },
    };
    MemoQServer::from_config(&config).unwrap()
}

#[tokio::test]
async fn test_description_and_laziness() {
    let server = MockServer::start();
    let wsdl_mock = mock_wsdl(
        &server,
        "/memoqservices/serverproject",
        &["GetApiVersion", "ListProjects"],
    );
    let version_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/memoqservices/serverproject/GetApiVersion")
            .header("SOAPAction", "GetApiVersion");
        then.status(200).json_body(json!({"GetApiVersionResult": "9.2.5"}));
    });

    let memoq = facade(&server);
    assert_eq!(wsdl_mock.hits(), 0);
    assert_eq!(version_mock.hits(), 0);

    let text = memoq.description().await.unwrap();
    assert_eq!(text, format!("memoQ server v9.2.5 @ {}", server.base_url()));

    memoq.api_version().await.unwrap();
    wsdl_mock.assert_hits(1);
    version_mock.assert_hits(2);
}

#[tokio::test]
async fn test_all_projects_fetched_once() {
    let server = MockServer::start();
    let wsdl_mock = mock_wsdl(&server, "/memoqservices/serverproject", &["ListProjects"]);

    let all_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/memoqservices/serverproject/ListProjects")
            .json_body(json!({"filter": {"TimeClosed": "1900-01-01T00:00:00Z"}}));
        then.status(200).json_body(json!({
            "ListProjectsResult": {
                "ServerProjectInfo": [
                    {"Name": "Live", "TimeClosed": "2999-01-01T00:00:00"},
                    {"Name": "Archived", "TimeClosed": "2001-01-01T00:00:00"}
                ]
            }
        }));
    });
    let default_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/memoqservices/serverproject/ListProjects")
            .json_body(json!({}));
        then.status(200).json_body(json!([{"Name": "Live"}]));
    });

    let memoq = facade(&server);

    assert_eq!(memoq.all_projects().await.unwrap().len(), 2);
    assert_eq!(memoq.all_projects().await.unwrap().len(), 2);

    let active = memoq.active_projects().await.unwrap();
    let closed = memoq.closed_projects().await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].get_str("Name"), Some("Live"));
    assert_eq!(closed[0].get_str("Name"), Some("Archived"));
    all_mock.assert_hits(1);

    assert_eq!(memoq.projects().await.unwrap().len(), 1);
    assert_eq!(memoq.projects().await.unwrap().len(), 1);
    default_mock.assert_hits(2);
    wsdl_mock.assert_hits(1);

    let far_future = "3000-01-01T00:00:00Z".parse().unwrap();
    let closed_later = memoq
        .projects_with_status(ProjectStatus::Closed, far_future)
        .await
        .unwrap();
    assert_eq!(closed_later.len(), 2);
    all_mock.assert_hits(1);
}

#[tokio::test]
async fn test_listing_endpoints() {
    let server = MockServer::start();
    mock_wsdl(&server, "/memoqservices/security", &["ListUsers", "ListGroups"]);
    mock_wsdl(&server, "/memoqservices/livedocs", &["ListCorpora"]);
    mock_wsdl(&server, "/memoqservices/tb", &["ListTBs"]);
    mock_wsdl(&server, "/memoqservices/tm", &["ListTMs"]);

    server.mock(|when, then| {
        when.method(POST).path("/memoqservices/security/ListUsers");
        then.status(200)
            .json_body(json!([{"UserName": "admin"}, {"UserName": "pm"}]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/memoqservices/security/ListGroups");
        then.status(200).json_body(json!([{"GroupName": "Translators"}]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/memoqservices/livedocs/ListCorpora");
        then.status(200).json_body(json!([]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/memoqservices/tb/ListTBs");
        then.status(200).json_body(json!([{"Name": "Glossary"}]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/memoqservices/tm/ListTMs");
        then.status(200).body("");
    });

    let memoq = facade(&server);
    assert_eq!(memoq.users().await.unwrap().len(), 2);
    assert_eq!(memoq.groups().await.unwrap().len(), 1);
    assert!(memoq.corpora().await.unwrap().is_empty());
    assert_eq!(memoq.tbs().await.unwrap()[0].get_str("Name"), Some("Glossary"));
    assert!(memoq.tms().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_remote_fault_propagates() {
    let server = MockServer::start();
    mock_wsdl(&server, "/memoqservices/tm", &["ListTMs"]);
    let fault_mock = server.mock(|when, then| {
        when.method(POST).path("/memoqservices/tm/ListTMs");
        then.status(500).body("Authentication failed");
    });

    let memoq = facade(&server);
    let err = memoq.tms().await.unwrap_err();
    match err {
        MemoQError::RemoteFault {
            operation,
            status,
            message,
        } => {
            assert_eq!(operation, "ListTMs");
            assert_eq!(status, 500);
            assert_eq!(message, "Authentication failed");
        }
        other => panic!("unexpected error: {other}"),
    }

    // 不重試
    fault_mock.assert_hits(1);
}

#[tokio::test]
async fn test_missing_description_fails_construction() {
    let server = MockServer::start();
    let missing = server.mock(|when, then| {
        when.method(GET).path("/memoqservices/elm");
        then.status(404);
    });

    let memoq = facade(&server);
    let err = memoq.endpoint(ServiceFamily::Elm).await.unwrap_err();
    assert!(matches!(err, MemoQError::ServiceDescription { .. }));
    missing.assert_hits(1);
}

#[tokio::test]
async fn test_undeclared_operation_never_reaches_server() {
    let server = MockServer::start();
    mock_wsdl(&server, "/memoqservices/filemanager", &["BeginChunkedFileUpload"]);
    let post_mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200).json_body(json!(null));
    });

    let memoq = facade(&server);
    let proxy = memoq.endpoint(ServiceFamily::FileManager).await.unwrap();
    assert_eq!(proxy.operations(), vec!["BeginChunkedFileUpload"]);

    let err = proxy.call("DeleteEverything", json!({})).await.unwrap_err();
    assert!(matches!(err, MemoQError::UnknownOperation { .. }));
    post_mock.assert_hits(0);
}
