mod common;

use acerler_client::{ClientConfig, ClientError, HttpQuoteApi, QuoteApi};
use acerler_core::types::{QuoteStatus, Unit};
use acerler_core::{EditorMode, QuoteEditor};
use common::{TestBackend, TEST_TOKEN};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn list_customers_sends_token_and_maps_fields() {
    let backend = TestBackend::spawn().await;

    Mock::given(method("GET"))
        .and(path("/api/teklif-musteriler"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "c-1", "firma_adi": "Acar Beton", "vergi_no": "1234567890" },
            { "id": "c-2", "firma_adi": "Yıldız Yapı", "yetkili_kisi": "Ayşe Yıldız" }
        ])))
        .expect(1)
        .mount(&backend.server)
        .await;

    let customers = backend.api.list_customers().await.unwrap();
    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].company_name, "Acar Beton");
    assert_eq!(customers[0].tax_id.as_deref(), Some("1234567890"));
    assert_eq!(customers[1].contact_person.as_deref(), Some("Ayşe Yıldız"));
}

#[tokio::test]
async fn list_quotes_filters_by_status() {
    let backend = TestBackend::spawn().await;

    Mock::given(method("GET"))
        .and(path("/api/teklifler"))
        .and(query_param("durum", "kabul_edildi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "q-7",
            "teklif_no": "TKL-2024-0007",
            "musteri_adi": "Acar Beton",
            "konu": "Asmolen",
            "teklif_tarihi": "2024-04-01",
            "genel_toplam": 1500.25,
            "durum": "kabul_edildi"
        }])))
        .expect(1)
        .mount(&backend.server)
        .await;

    let quotes = backend
        .api
        .list_quotes(Some(QuoteStatus::Accepted))
        .await
        .unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].quote_number.as_deref(), Some("TKL-2024-0007"));
    assert_eq!(quotes[0].grand_total.kurus(), 150_025);
    assert_eq!(quotes[0].status, QuoteStatus::Accepted);
}

#[tokio::test]
async fn get_quote_opens_in_edit_mode_with_fresh_totals() {
    let backend = TestBackend::spawn().await;

    Mock::given(method("GET"))
        .and(path("/api/teklifler/q-3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "q-3",
            "teklif_no": "TKL-2024-0003",
            "musteri_id": "c-1",
            "musteri_adi": "Acar Beton",
            "teklif_tarihi": "2024-04-01",
            "gecerlilik_tarihi": "2024-05-01",
            "kalemler": [
                { "urun_hizmet": "Bims blok", "miktar": 2, "birim": "adet",
                  "birim_fiyat": 100, "kdv_orani": 20, "iskonto_orani": 10, "toplam": 0 },
                { "urun_hizmet": "Nakliye", "miktar": 1, "birim": "saat",
                  "birim_fiyat": 50, "kdv_orani": 1, "iskonto_orani": 0, "toplam": 0 }
            ],
            "genel_toplam": 0,
            "durum": "beklemede"
        })))
        .mount(&backend.server)
        .await;

    let quote = backend.api.get_quote("q-3").await.unwrap();
    assert!(quote.valid_until.is_some());
    assert_eq!(quote.items[1].unit, Unit::Hour);

    let editor = QuoteEditor::open("q-3", quote);
    assert_eq!(
        editor.mode(),
        &EditorMode::Edit {
            id: "q-3".to_string()
        }
    );
    let totals = editor.totals();
    assert_eq!(totals.subtotal.kurus(), 25_000);
    assert_eq!(totals.total_discount.kurus(), 2_000);
    assert_eq!(totals.total_vat.kurus(), 3_650);
    assert_eq!(totals.grand_total.kurus(), 26_650);
}

#[tokio::test]
async fn set_status_uses_query_parameter() {
    let backend = TestBackend::spawn().await;

    Mock::given(method("PUT"))
        .and(path("/api/teklifler/q-5/durum"))
        .and(query_param("durum", "gonderildi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&backend.server)
        .await;

    backend
        .api
        .set_status("q-5", QuoteStatus::Sent)
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_missing_quote_is_not_found() {
    let backend = TestBackend::spawn().await;

    Mock::given(method("DELETE"))
        .and(path("/api/teklifler/q-404"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "Teklif bulunamadı" })),
        )
        .mount(&backend.server)
        .await;

    let err = backend.api.delete_quote("q-404").await.unwrap_err();
    match err {
        ClientError::NotFound(detail) => assert_eq!(detail, "Teklif bulunamadı"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn unsafe_id_is_rejected_locally() {
    let backend = TestBackend::spawn().await;

    let err = backend.api.delete_quote("../admin").await.unwrap_err();
    assert!(err.is_local());
    assert_eq!(backend.request_count().await, 0);
}

#[tokio::test]
async fn server_error_without_json_body() {
    let backend = TestBackend::spawn().await;

    Mock::given(method("GET"))
        .and(path("/api/teklifler"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&backend.server)
        .await;

    let err = backend.api.list_quotes(None).await.unwrap_err();
    match &err {
        ClientError::Rejected { status, detail } => {
            assert_eq!(*status, 502);
            assert_eq!(detail, "Bad Gateway");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let backend = TestBackend::spawn().await;

    Mock::given(method("GET"))
        .and(path("/api/teklif-musteriler"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&backend.server)
        .await;

    let err = backend.api.list_customers().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn custom_prefix_is_respected() {
    let backend = TestBackend::spawn().await;

    Mock::given(method("GET"))
        .and(path("/v2/teklif-musteriler"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&backend.server)
        .await;

    let mut config = ClientConfig::default();
    config.api.base_url = backend.server.uri();
    config.api.prefix = "/v2".to_string();
    let api = HttpQuoteApi::new(&config).unwrap();

    assert!(api.list_customers().await.unwrap().is_empty());
}

#[tokio::test]
async fn quote_overview_maps_dashboard_figures() {
    let backend = TestBackend::spawn().await;

    Mock::given(method("GET"))
        .and(path("/api/teklif-ozet"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "toplam_teklif": 27,
            "taslak": 6,
            "gonderildi": 8,
            "beklemede": 3,
            "kabul_edildi": 7,
            "reddedildi": 2,
            "iptal": 1,
            "musteri_sayisi": 12,
            "ayki_teklif_sayisi": 5,
            "ayki_toplam_tutar": 48250.75,
            "kabul_toplam_tutar": 310400,
            "son_teklifler": [
                {
                    "id": "q-27",
                    "teklif_no": "TKL-2024-0027",
                    "musteri_adi": "Acar Beton",
                    "teklif_tarihi": "2024-06-03",
                    "genel_toplam": 216,
                    "durum": "taslak"
                },
                {
                    "id": "q-26",
                    "teklif_no": "TKL-2024-0026",
                    "musteri_adi": "Yıldız Yapı",
                    "teklif_tarihi": "2024-06-01",
                    "genel_toplam": 1500.25,
                    "durum": "beklemede"
                }
            ]
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let overview = backend.api.quote_overview().await.unwrap();
    assert_eq!(overview.total_quotes, 27);
    assert_eq!(overview.by_status.get(QuoteStatus::Accepted), 7);
    assert_eq!(overview.by_status.awaiting_reply(), 11);
    assert_eq!(overview.customer_count, 12);
    assert_eq!(overview.quotes_this_month, 5);
    assert_eq!(overview.total_this_month.kurus(), 4_825_075);
    assert_eq!(overview.accepted_total.kurus(), 31_040_000);
    assert_eq!(overview.recent.len(), 2);
    assert_eq!(overview.recent[1].status, QuoteStatus::Pending);
}

#[tokio::test]
async fn empty_overview_defaults_to_zero() {
    let backend = TestBackend::spawn().await;

    Mock::given(method("GET"))
        .and(path("/api/teklif-ozet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&backend.server)
        .await;

    let overview = backend.api.quote_overview().await.unwrap();
    assert_eq!(overview.total_quotes, 0);
    assert!(overview.recent.is_empty());
}
