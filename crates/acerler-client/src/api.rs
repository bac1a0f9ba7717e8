//! # Quote Backend API
//!
//! The [`QuoteApi`] trait is the seam between the submission logic and the
//! network; [`HttpQuoteApi`] implements it over HTTP with `reqwest`.
//!
//! ## Endpoints (relative to `{base_url}{prefix}/`)
//! ```text
//! ┌────────────────────────────────────────────────────────────────────────┐
//! │  GET    teklif-musteriler              → [CustomerRecord]             │
//! │  POST   teklif-musteriler              → CreatedRecord (optional)     │
//! │  PUT    teklif-musteriler/{id}         → (ignored)                    │
//! │  DELETE teklif-musteriler/{id}         → (ignored)                    │
//! │  GET    teklif-ozet                    → OverviewRecord               │
//! │  GET    teklifler[?durum=]             → [QuoteListRow]               │
//! │  GET    teklifler/{id}                 → QuoteDocument                │
//! │  POST   teklifler                      → CreatedQuote                 │
//! │  PUT    teklifler/{id}                 → (ignored)                    │
//! │  PUT    teklifler/{id}/durum?durum=    → (ignored)                    │
//! │  DELETE teklifler/{id}                 → (ignored)                    │
//! │                                                                        │
//! │  Non-2xx: 401 → Unauthorized, 404 → NotFound,                         │
//! │           other → Rejected { status, detail }                         │
//! └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Requests are sent once. A failure is reported to the caller, who decides
//! whether to try again.

use std::time::Duration;

use acerler_core::overview::QuoteOverview;
use acerler_core::quote::Quote;
use acerler_core::search::QuoteSummary;
use acerler_core::types::{Customer, CustomerDraft, QuoteStatus};
use acerler_core::validation::{validate_customer_draft, validate_record_id};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::wire::{
    CreatedQuote, CreatedRecord, CustomerPayload, CustomerRecord, ErrorBody, OverviewRecord,
    QuoteDocument, QuoteListRow,
};

/// Operations the quote screens need from the backend.
#[async_trait]
pub trait QuoteApi: Send + Sync {
    /// Customers available for quoting.
    async fn list_customers(&self) -> ClientResult<Vec<Customer>>;

    /// Adds a customer; returns its id when the backend reports one.
    async fn create_customer(&self, draft: &CustomerDraft) -> ClientResult<Option<String>>;

    /// Replaces every field of a stored customer.
    async fn update_customer(&self, id: &str, draft: &CustomerDraft) -> ClientResult<()>;

    async fn delete_customer(&self, id: &str) -> ClientResult<()>;

    /// Dashboard counts and totals.
    async fn quote_overview(&self) -> ClientResult<QuoteOverview>;

    /// Quote list, optionally filtered by status on the server.
    async fn list_quotes(&self, status: Option<QuoteStatus>) -> ClientResult<Vec<QuoteSummary>>;

    /// One stored quote, with totals recomputed from its lines.
    async fn get_quote(&self, id: &str) -> ClientResult<Quote>;

    /// Creates a quote; returns the new id and quote number.
    async fn create_quote(&self, quote: &Quote) -> ClientResult<CreatedQuote>;

    /// Overwrites an existing quote.
    async fn update_quote(&self, id: &str, quote: &Quote) -> ClientResult<()>;

    /// Moves a quote to another lifecycle status.
    async fn set_status(&self, id: &str, status: QuoteStatus) -> ClientResult<()>;

    async fn delete_quote(&self, id: &str) -> ClientResult<()>;
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// [`QuoteApi`] over HTTP with bearer-token auth.
pub struct HttpQuoteApi {
    client: Client,
    root: Url,
    token: Option<Secret<String>>,
    timeout_secs: u64,
}

impl HttpQuoteApi {
    /// Builds a client from validated configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .build()
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        Ok(HttpQuoteApi {
            client,
            root: config.endpoint_root()?,
            token: config.auth.token.clone(),
            timeout_secs: config.api.timeout_secs,
        })
    }

    fn url(&self, path: &str) -> ClientResult<Url> {
        Ok(self.root.join(path)?)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    async fn send(&self, method: Method, url: Url, builder: RequestBuilder) -> ClientResult<Response> {
        debug!(%method, %url, "Sending quote API request");

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, self.timeout_secs))?;

        let status = response.status();
        if status.is_success() {
            debug!(%method, %url, status = status.as_u16(), "Quote API request succeeded");
            return Ok(response);
        }

        let detail = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message())
                .unwrap_or_else(|_| fallback_detail(status, &body)),
            Err(_) => fallback_detail(status, ""),
        };
        warn!(%method, %url, status = status.as_u16(), %detail, "Quote API request rejected");

        Err(match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::NOT_FOUND => ClientError::NotFound(detail),
            _ => ClientError::Rejected {
                status: status.as_u16(),
                detail,
            },
        })
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> ClientResult<T> {
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_reqwest(e, self.timeout_secs))?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ClientResult<T> {
        let builder = self.request(Method::GET, url.clone());
        let response = self.send(Method::GET, url, builder).await?;
        self.decode(response).await
    }
}

fn fallback_detail(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.chars().take(200).collect()
    }
}

#[async_trait]
impl QuoteApi for HttpQuoteApi {
    async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        let rows: Vec<CustomerRecord> = self.get_json(self.url("teklif-musteriler")?).await?;
        debug!(count = rows.len(), "Loaded quote customers");
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn create_customer(&self, draft: &CustomerDraft) -> ClientResult<Option<String>> {
        validate_customer_draft(draft)?;
        let url = self.url("teklif-musteriler")?;
        let builder = self
            .request(Method::POST, url.clone())
            .json(&CustomerPayload::from(draft));
        let response = self.send(Method::POST, url, builder).await?;

        // The body is informational; a create without an id still succeeded.
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_reqwest(e, self.timeout_secs))?;
        let id = serde_json::from_slice::<CreatedRecord>(&body)
            .ok()
            .and_then(|record| record.id);
        info!(id = id.as_deref().unwrap_or("-"), "Customer created");
        Ok(id)
    }

    async fn update_customer(&self, id: &str, draft: &CustomerDraft) -> ClientResult<()> {
        validate_record_id(id)?;
        validate_customer_draft(draft)?;
        let url = self.url(&format!("teklif-musteriler/{id}"))?;
        let builder = self
            .request(Method::PUT, url.clone())
            .json(&CustomerPayload::from(draft));
        self.send(Method::PUT, url, builder).await?;
        info!(%id, "Customer updated");
        Ok(())
    }

    async fn delete_customer(&self, id: &str) -> ClientResult<()> {
        validate_record_id(id)?;
        let url = self.url(&format!("teklif-musteriler/{id}"))?;
        let builder = self.request(Method::DELETE, url.clone());
        self.send(Method::DELETE, url, builder).await?;
        info!(%id, "Customer deleted");
        Ok(())
    }

    async fn quote_overview(&self) -> ClientResult<QuoteOverview> {
        let record: OverviewRecord = self.get_json(self.url("teklif-ozet")?).await?;
        Ok(record.into())
    }

    async fn list_quotes(&self, status: Option<QuoteStatus>) -> ClientResult<Vec<QuoteSummary>> {
        let mut url = self.url("teklifler")?;
        if let Some(status) = status {
            url.query_pairs_mut().append_pair("durum", status.code());
        }
        let rows: Vec<QuoteListRow> = self.get_json(url).await?;
        debug!(count = rows.len(), "Loaded quote list");
        Ok(rows.into_iter().map(QuoteSummary::from).collect())
    }

    async fn get_quote(&self, id: &str) -> ClientResult<Quote> {
        validate_record_id(id)?;
        let doc: QuoteDocument = self.get_json(self.url(&format!("teklifler/{id}"))?).await?;
        let mut quote = doc.into_quote()?;
        quote.id.get_or_insert_with(|| id.to_string());
        Ok(quote)
    }

    async fn create_quote(&self, quote: &Quote) -> ClientResult<CreatedQuote> {
        let url = self.url("teklifler")?;
        let builder = self
            .request(Method::POST, url.clone())
            .json(&QuoteDocument::from_quote(quote));
        let response = self.send(Method::POST, url, builder).await?;
        self.decode(response).await
    }

    async fn update_quote(&self, id: &str, quote: &Quote) -> ClientResult<()> {
        validate_record_id(id)?;
        let url = self.url(&format!("teklifler/{id}"))?;
        let builder = self
            .request(Method::PUT, url.clone())
            .json(&QuoteDocument::from_quote(quote));
        self.send(Method::PUT, url, builder).await?;
        Ok(())
    }

    async fn set_status(&self, id: &str, status: QuoteStatus) -> ClientResult<()> {
        validate_record_id(id)?;
        let mut url = self.url(&format!("teklifler/{id}/durum"))?;
        url.query_pairs_mut().append_pair("durum", status.code());
        let builder = self.request(Method::PUT, url.clone());
        self.send(Method::PUT, url, builder).await?;
        Ok(())
    }

    async fn delete_quote(&self, id: &str) -> ClientResult<()> {
        validate_record_id(id)?;
        let url = self.url(&format!("teklifler/{id}"))?;
        let builder = self.request(Method::DELETE, url.clone());
        self.send(Method::DELETE, url, builder).await?;
        Ok(())
    }
}
