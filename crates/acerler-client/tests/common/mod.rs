#![allow(dead_code)]

use acerler_client::{ClientConfig, HttpQuoteApi};
use acerler_core::line_item::LineItemUpdate;
use acerler_core::types::Customer;
use acerler_core::QuoteEditor;
use secrecy::Secret;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token";

/// A mock backend plus a client pointed at it.
pub struct TestBackend {
    pub server: MockServer,
    pub api: HttpQuoteApi,
}

impl TestBackend {
    pub async fn spawn() -> Self {
        let server = MockServer::start().await;

        let mut config = ClientConfig::default();
        config.api.base_url = server.uri();
        config.api.timeout_secs = 5;
        config.auth.token = Some(Secret::new(TEST_TOKEN.to_string()));

        let api = HttpQuoteApi::new(&config).expect("Failed to build client");
        TestBackend { server, api }
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }

    /// JSON body of the n-th request the backend received.
    pub async fn request_body(&self, n: usize) -> serde_json::Value {
        let requests = self
            .server
            .received_requests()
            .await
            .expect("Request recording is disabled");
        serde_json::from_slice(&requests[n].body).expect("Request body is not JSON")
    }
}

pub fn acar_beton() -> Customer {
    Customer {
        id: "c-1".to_string(),
        company_name: "Acar Beton".to_string(),
        contact_person: Some("Mehmet Acar".to_string()),
        address: Some("Nevşehir".to_string()),
        tax_id: Some("1234567890".to_string()),
        tax_office: Some("Nevşehir".to_string()),
        phone: Some("0384 213 00 00".to_string()),
        email: None,
        notes: None,
    }
}

/// Editor holding a submittable quote worth 216.00.
pub fn ready_editor() -> QuoteEditor {
    let mut editor = QuoteEditor::new();
    editor.select_customer(&acar_beton());
    editor.set_subject("Bims blok teklifi");
    editor
        .update_item(0, LineItemUpdate::Description("Bims blok 20'lik".to_string()))
        .unwrap();
    editor.update_item(0, LineItemUpdate::Quantity(2.0)).unwrap();
    editor.update_item(0, LineItemUpdate::UnitPrice(100.0)).unwrap();
    editor.update_item(0, LineItemUpdate::DiscountRate(10.0)).unwrap();
    editor
}
