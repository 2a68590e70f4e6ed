// Catalog client tests - listing, filtering and error classification

mod common;

use bedrock_model_client::model::{ModelCatalogClient, ModelError, ModelErrorKind, RawResponse};
use bedrock_model_client::types::ModelFilter;
use common::{LLAMA_ID, StubTransport};
use serde_json::json;
use std::sync::Arc;

fn llama_catalog() -> String {
    json!({
        "modelSummaries": [{
            "modelId": LLAMA_ID,
            "providerName": "Meta",
            "inputModalities": ["TEXT"],
            "outputModalities": ["TEXT"]
        }]
    })
    .to_string()
}

fn catalog_with(transport: &StubTransport) -> ModelCatalogClient {
    ModelCatalogClient::new(Arc::new(transport.clone()))
}

#[tokio::test]
async fn empty_catalog_is_an_empty_list() {
    let transport = StubTransport::new();
    let models = catalog_with(&transport).list_models().await.expect("list");
    assert!(models.is_empty());
}

#[tokio::test]
async fn catalog_without_summaries_field_is_empty() {
    let transport = StubTransport::new().with_catalog(|_| Ok(RawResponse::ok("{}")));
    let models = catalog_with(&transport).list_models().await.expect("list");
    assert!(models.is_empty());
}

#[tokio::test]
async fn single_descriptor_is_returned_unchanged() {
    let transport =
        StubTransport::new().with_catalog(|_| Ok(RawResponse::ok(llama_catalog())));
    let models = catalog_with(&transport).list_models().await.expect("list");

    assert_eq!(models.len(), 1);
    let model = &models[0];
    assert_eq!(model.id, LLAMA_ID);
    assert_eq!(model.provider, "Meta");
    assert_eq!(model.input_modalities, vec!["TEXT"]);
    assert_eq!(model.output_modalities, vec!["TEXT"]);
    assert!(model.customizations_supported.is_empty());
}

#[tokio::test]
async fn filters_reach_the_transport() {
    let transport = StubTransport::new();
    let filter = ModelFilter::by_provider("Meta").with_output_modality("TEXT");
    catalog_with(&transport)
        .list_models_filtered(&filter)
        .await
        .expect("list");

    assert_eq!(transport.filters().await, vec![filter]);
}

#[tokio::test]
async fn find_model_by_id() {
    let transport =
        StubTransport::new().with_catalog(|_| Ok(RawResponse::ok(llama_catalog())));
    let catalog = catalog_with(&transport);

    assert!(catalog.find_model(LLAMA_ID).await.expect("find").is_some());
    assert!(catalog.find_model("amazon.titan-text-lite-v1").await.expect("find").is_none());
}

#[tokio::test]
async fn forbidden_catalog_is_auth_error() {
    let transport = StubTransport::new().with_catalog(|_| {
        Ok(RawResponse::new(403, r#"{"message":"not authorized"}"#))
    });
    let err = catalog_with(&transport).list_models().await.unwrap_err();
    assert_eq!(err.kind(), ModelErrorKind::Auth);
}

#[tokio::test]
async fn server_error_is_transport_error() {
    let transport = StubTransport::new().with_catalog(|_| Ok(RawResponse::new(500, "")));
    let err = catalog_with(&transport).list_models().await.unwrap_err();
    assert_eq!(err.kind(), ModelErrorKind::Transport);
}

#[tokio::test]
async fn undecodable_catalog_is_malformed() {
    let transport = StubTransport::new().with_catalog(|_| Ok(RawResponse::ok("<html>")));
    let err = catalog_with(&transport).list_models().await.unwrap_err();
    assert_eq!(err.kind(), ModelErrorKind::MalformedResponse);
    match err {
        ModelError::MalformedResponse { target, .. } => assert_eq!(target, "model catalog"),
        other => panic!("unexpected error: {other:?}"),
    }
}
