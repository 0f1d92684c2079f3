mod common;

use httpmock::prelude::*;
use opendataug::{Error, Parish};

fn kiwatule() -> Parish {
    Parish {
        id: "parish-1".to_string(),
        name: "Kiwatule".to_string(),
        code: "KWT".to_string(),
        subcounty_id: "subcounty-1".to_string(),
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn list_parishes_returns_records_in_order() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/parishes");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"data": [
                    {"id": "parish-1", "name": "Kiwatule", "code": "KWT", "subcounty_id": "subcounty-1"},
                    {"id": "parish-2", "name": "Bukoto", "code": "BKT", "subcounty_id": "subcounty-1"}
                ]}"#,
            );
    });

    let client = common::client_for(&server);
    let parishes = client.list_parishes().unwrap();

    mock.assert();
    assert_eq!(parishes.len(), 2);
    assert_eq!(parishes[0], kiwatule());
    assert_eq!(parishes[1].id, "parish-2");
    assert_eq!(parishes[1].name, "Bukoto");
}

#[test]
fn get_parish_returns_the_exact_record() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/parishes/parish-1");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data": {"id": "parish-1", "name": "Kiwatule", "code": "KWT", "subcounty_id": "subcounty-1"}}"#);
    });

    let client = common::client_for(&server);
    let parish = client.get_parish("parish-1").unwrap();

    mock.assert();
    assert_eq!(parish, kiwatule());
}

#[test]
fn get_parish_rejects_malformed_json() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/parishes/parish-1");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data": {"id": "parish-1", "name": "#);
    });

    let client = common::client_for(&server);
    let err = client.get_parish("parish-1").unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn list_parishes_by_subcounty_hits_the_nested_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/subcounties/subcounty-1/parishes")
            .header("x-api-key", common::API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"data": [
                    {"id": "parish-1", "name": "Kiwatule", "code": "KWT", "subcounty_id": "subcounty-1"},
                    {"id": "parish-2", "name": "Bukoto", "code": "BKT", "subcounty_id": "subcounty-1"}
                ]}"#,
            );
    });

    let client = common::client_for(&server);
    let parishes = client.list_parishes_by_subcounty("subcounty-1").unwrap();

    mock.assert();
    assert_eq!(parishes.len(), 2);
    assert_eq!(parishes[0], kiwatule());
}

#[test]
fn list_parishes_by_subcounty_decodes_an_empty_page() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/subcounties/subcounty-7/parishes");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"data": []}"#);
    });

    let client = common::client_for(&server);
    let parishes = client.list_parishes_by_subcounty("subcounty-7").unwrap();

    assert!(parishes.is_empty());
}
