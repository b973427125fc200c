//! Shared test harness for end-to-end offering tests

use offering_api::{build_router, AppState};
use offering_service::DefaultOfferingService;
use offering_store::{
    AssetStore, ContractDefinitionStore, InMemoryAssetStore, InMemoryContractDefinitionStore,
    InMemoryPolicyDefinitionStore, PolicyDefinitionStore,
};
use std::sync::Arc;

/// A running test server with handles to its backing stores
pub struct TestApp {
    address: String,
    client: reqwest::Client,
    pub asset_store: Arc<InMemoryAssetStore>,
    pub policy_store: Arc<InMemoryPolicyDefinitionStore>,
    pub contract_store: Arc<InMemoryContractDefinitionStore>,
}

impl TestApp {
    /// Spin up the router on an ephemeral port with fresh in-memory stores
    pub async fn new() -> Self {
        let asset_store = Arc::new(InMemoryAssetStore::new());
        let policy_store = Arc::new(InMemoryPolicyDefinitionStore::new());
        let contract_store = Arc::new(InMemoryContractDefinitionStore::new());

        let service = Arc::new(DefaultOfferingService::new(
            asset_store.clone() as Arc<dyn AssetStore>,
            policy_store.clone() as Arc<dyn PolicyDefinitionStore>,
            contract_store.clone() as Arc<dyn ContractDefinitionStore>,
        ));

        let router = build_router(AppState::new(service));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("server error");
        });

        Self {
            address,
            client: reqwest::Client::new(),
            asset_store,
            policy_store,
            contract_store,
        }
    }

    /// Base URL of the running server
    pub fn url(&self) -> &str {
        &self.address
    }

    /// HTTP client for this server
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// POST /v1/offerings
    pub async fn create_offering(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/v1/offerings", self.address))
            .json(body)
            .send()
            .await
            .expect("failed to send create request")
    }

    /// PUT /v1/offerings
    pub async fn update_offering(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .put(format!("{}/v1/offerings", self.address))
            .json(body)
            .send()
            .await
            .expect("failed to send update request")
    }
}

/// A complete, valid offering request body
pub fn valid_offering() -> serde_json::Value {
    serde_json::json!({
        "assetEntry": {
            "id": "a1",
            "dataAddressProperties": { "type": "HttpData", "baseUrl": "http://data.example/x" },
            "properties": { "name": "test asset" }
        },
        "policyDefinitionRequest": {
            "id": "p1",
            "policy": { "permissions": [{ "action": "USE" }] }
        },
        "contractDefinitionRequest": {
            "id": "c1",
            "accessPolicyId": "p1",
            "contractPolicyId": "p1",
            "assetsSelector": [
                { "operandLeft": "id", "operator": "=", "operandRight": "a1" }
            ]
        }
    })
}
