//! KEGG REST client tests against a mock server

use kegg_common::KeggError;
use kegg_ingest::{KeggClient, KeggConfig};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const PFKP_ENTRY: &str = "\
ENTRY       5214              CDS       T01001
SYMBOL      PFKP, ATPF, PFK-C, PFKF
NAME        (RefSeq) phosphofructokinase, platelet
PATHWAY     hsa00010  Glycolysis / Gluconeogenesis
            hsa00030  Pentose phosphate pathway
DBLINKS     NCBI-GeneID:  5214
            HGNC:  8878
///
";

const PATHWAY_LIST: &str = "\
hsa00010\tGlycolysis / Gluconeogenesis - Homo sapiens (human)
hsa00030\tPentose phosphate pathway - Homo sapiens (human)
";

fn client_for(server: &MockServer) -> KeggClient {
    KeggClient::new(KeggConfig::with_base_url(server.uri())).expect("Failed to build client")
}

#[tokio::test]
async fn test_fetch_description() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get/hsa:5214"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PFKP_ENTRY))
        .expect(1)
        .mount(&server)
        .await;

    let description = client_for(&server)
        .fetch_description("hsa:5214")
        .await
        .expect("Failed to fetch entry");

    assert_eq!(description.entry().unwrap(), ["5214", "CDS", "T01001"]);
    assert_eq!(description.pathways().len(), 2);
    assert_eq!(description.pathways()[1], ["hsa00030", "Pentose phosphate pathway"]);
    assert_eq!(description.dblinks()[1], ["HGNC:", "8878"]);
    assert!(description.get("NAME").is_none());
}

#[tokio::test]
async fn test_fetch_description_lines_strips_newlines() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get/hsa:5214"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PFKP_ENTRY))
        .mount(&server)
        .await;

    let lines = client_for(&server)
        .fetch_description_lines("hsa:5214")
        .await
        .expect("Failed to fetch lines");

    assert_eq!(lines.len(), 8);
    assert_eq!(lines.last().map(String::as_str), Some("///"));
    assert!(lines.iter().all(|line| !line.ends_with('\n')));
}

#[tokio::test]
async fn test_fetch_descriptions_joins_identifiers() {
    let body = format!("{}{}", PFKP_ENTRY, PFKP_ENTRY.replace("5214 ", "5213 "));

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get/hsa:5213+hsa:5214"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let entries = client_for(&server)
        .fetch_descriptions(&["hsa:5213", "hsa:5214"])
        .await
        .expect("Failed to fetch entries");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].entry().unwrap()[0], "5214");
    assert_eq!(entries[1].entry().unwrap()[0], "5213");
}

#[tokio::test]
async fn test_fetch_descriptions_rejects_oversized_batch() {
    let server = MockServer::start().await;
    let ids: Vec<String> = (0..11).map(|i| format!("hsa:{}", i)).collect();
    let ids: Vec<&str> = ids.iter().map(String::as_str).collect();

    let result = client_for(&server).fetch_descriptions(&ids).await;

    assert!(matches!(result, Err(KeggError::Config(_))));
}

#[tokio::test]
async fn test_missing_entry_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get/hsa:0"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_description("hsa:0").await;

    assert!(matches!(result, Err(KeggError::NotFound(_))));
}

#[tokio::test]
async fn test_server_error_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get/hsa:5214"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_description("hsa:5214").await;

    match result {
        Err(KeggError::Network(message)) => assert!(message.contains("503")),
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_pathway_table_from_configured_organism() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/list/pathway/hsa"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PATHWAY_LIST))
        .expect(1)
        .mount(&server)
        .await;

    let table = client_for(&server)
        .fetch_pathway_table(None)
        .await
        .expect("Failed to fetch pathway list");

    assert_eq!(table.len(), 2);
    assert_eq!(
        table.get("hsa00030"),
        Some("Pentose phosphate pathway - Homo sapiens (human)")
    );
}

#[tokio::test]
async fn test_fetch_pathway_table_from_explicit_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mirror/pathways.tsv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("map00010\tGlycolysis\n"))
        .mount(&server)
        .await;

    let url = format!("{}/mirror/pathways.tsv", server.uri());
    let table = client_for(&server)
        .fetch_pathway_table(Some(&url))
        .await
        .expect("Failed to fetch pathway list");

    assert_eq!(table.get("map00010"), Some("Glycolysis"));
}

#[tokio::test]
async fn test_malformed_listing_surfaces_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/list/pathway/hsa"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hsa00010\n"))
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_pathway_table(None).await;

    assert!(matches!(result, Err(KeggError::Parse(_))));
}

#[test]
fn test_client_rejects_invalid_config() {
    let config = KeggConfig {
        request_timeout_secs: 0,
        ..KeggConfig::default()
    };
    assert!(matches!(KeggClient::new(config), Err(KeggError::Config(_))));
}
