//! # Wire Format
//!
//! JSON shapes exchanged with the quote backend, using its field names.
//!
//! ## Mapping
//! ```text
//! ┌──────────────────────────────┐         ┌──────────────────────────────┐
//! │  acerler_core::Quote         │         │  QuoteDocument (JSON)        │
//! │  ──────────────────────────  │         │  ──────────────────────────  │
//! │  customer.id / name / ...    │ ◄─────► │  musteri_id / musteri_adi    │
//! │  quote_date, valid_until     │         │  teklif_tarihi (YYYY-MM-DD)  │
//! │  items[]                     │         │  kalemler[]                  │
//! │    description / detail      │         │    urun_hizmet / aciklama    │
//! │    quantity / unit_price     │         │    miktar / birim_fiyat      │
//! │    vat / discount rate       │         │    kdv_orani / iskonto_orani │
//! │    line_total                │         │    toplam                    │
//! │  totals (Money, kuruş)       │         │  ara_toplam ... (decimal)    │
//! └──────────────────────────────┘         └──────────────────────────────┘
//! ```
//!
//! Decoding is lenient: missing fields take defaults and unknown fields are
//! ignored, since older records in the backend do not carry every field.

use acerler_core::line_item::LineItem;
use acerler_core::money::Money;
use acerler_core::quote::{Quote, QuoteTotals};
use acerler_core::search::QuoteSummary;
use acerler_core::overview::{QuoteOverview, StatusCounts};
use acerler_core::types::{Currency, Customer, CustomerDraft, CustomerSnapshot, QuoteStatus, Unit};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ClientError, ClientResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Customers
// =============================================================================

/// Row of `GET teklif-musteriler`.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerRecord {
    pub id: String,
    #[serde(default)]
    pub firma_adi: String,
    #[serde(default)]
    pub yetkili_kisi: Option<String>,
    #[serde(default)]
    pub telefon: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub adres: Option<String>,
    #[serde(default)]
    pub vergi_no: Option<String>,
    #[serde(default)]
    pub vergi_dairesi: Option<String>,
    #[serde(default)]
    pub notlar: Option<String>,
}

/// Stored blanks come back as `None`.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<CustomerRecord> for Customer {
    fn from(record: CustomerRecord) -> Self {
        Customer {
            id: record.id,
            company_name: record.firma_adi,
            contact_person: present(record.yetkili_kisi),
            phone: present(record.telefon),
            email: present(record.email),
            address: present(record.adres),
            tax_id: present(record.vergi_no),
            tax_office: present(record.vergi_dairesi),
            notes: present(record.notlar),
        }
    }
}

/// Body of `POST teklif-musteriler` and `PUT teklif-musteriler/{id}`.
///
/// Every field is sent, empty or not, and text is trimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPayload {
    #[serde(default)]
    pub firma_adi: String,
    #[serde(default)]
    pub yetkili_kisi: String,
    #[serde(default)]
    pub telefon: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub adres: String,
    #[serde(default)]
    pub vergi_no: String,
    #[serde(default)]
    pub vergi_dairesi: String,
    #[serde(default)]
    pub notlar: String,
}

impl From<&CustomerDraft> for CustomerPayload {
    fn from(draft: &CustomerDraft) -> Self {
        let text = |s: &str| s.trim().to_string();
        CustomerPayload {
            firma_adi: text(&draft.company_name),
            yetkili_kisi: text(&draft.contact_person),
            telefon: text(&draft.phone),
            email: text(&draft.email),
            adres: text(&draft.address),
            vergi_no: text(&draft.tax_id),
            vergi_dairesi: text(&draft.tax_office),
            notlar: text(&draft.notes),
        }
    }
}

impl From<CustomerPayload> for CustomerDraft {
    fn from(payload: CustomerPayload) -> Self {
        CustomerDraft {
            company_name: payload.firma_adi,
            contact_person: payload.yetkili_kisi,
            phone: payload.telefon,
            email: payload.email,
            address: payload.adres,
            tax_id: payload.vergi_no,
            tax_office: payload.vergi_dairesi,
            notes: payload.notlar,
        }
    }
}

// =============================================================================
// Line Items
// =============================================================================

/// One entry of `kalemler`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemRecord {
    #[serde(default)]
    pub urun_hizmet: String,
    #[serde(default)]
    pub aciklama: String,
    #[serde(default)]
    pub miktar: f64,
    #[serde(default)]
    pub birim: String,
    #[serde(default)]
    pub birim_fiyat: f64,
    #[serde(default)]
    pub kdv_orani: f64,
    #[serde(default)]
    pub iskonto_orani: f64,
    #[serde(default)]
    pub toplam: f64,
}

impl From<&LineItem> for LineItemRecord {
    fn from(item: &LineItem) -> Self {
        LineItemRecord {
            urun_hizmet: item.description.clone(),
            aciklama: item.detail.clone(),
            miktar: item.quantity,
            birim: item.unit.code().to_string(),
            birim_fiyat: item.unit_price,
            kdv_orani: item.vat_rate_percent,
            iskonto_orani: item.discount_rate_percent,
            toplam: item.line_total(),
        }
    }
}

impl From<LineItemRecord> for LineItem {
    /// The stored `toplam` is ignored; the line total is recomputed.
    fn from(record: LineItemRecord) -> Self {
        let unit = record.birim.parse::<Unit>().unwrap_or_else(|_| {
            if !record.birim.is_empty() {
                warn!(unit = %record.birim, "Unknown unit on stored line item, using default");
            }
            Unit::default()
        });
        let mut item = LineItem::priced(
            record.urun_hizmet,
            record.miktar,
            unit,
            record.birim_fiyat,
            record.kdv_orani,
            record.iskonto_orani,
        );
        item.detail = record.aciklama;
        item
    }
}

// =============================================================================
// Quote Document
// =============================================================================

/// Full quote as sent on create/update and returned by `GET teklifler/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teklif_no: Option<String>,

    #[serde(default)]
    pub musteri_id: String,
    #[serde(default)]
    pub musteri_adi: String,
    #[serde(default)]
    pub musteri_adres: String,
    #[serde(default)]
    pub musteri_vergi_no: String,
    #[serde(default)]
    pub musteri_vergi_dairesi: String,

    #[serde(default)]
    pub teklif_tarihi: String,
    /// Empty string when the quote has no validity date.
    #[serde(default)]
    pub gecerlilik_tarihi: String,
    #[serde(default)]
    pub konu: String,

    #[serde(default)]
    pub kalemler: Vec<LineItemRecord>,

    #[serde(default)]
    pub ara_toplam: f64,
    #[serde(default)]
    pub toplam_iskonto: f64,
    #[serde(default)]
    pub toplam_kdv: f64,
    #[serde(default)]
    pub genel_toplam: f64,

    #[serde(default)]
    pub para_birimi: Currency,
    #[serde(default)]
    pub odeme_kosullari: String,
    #[serde(default)]
    pub teslim_suresi: String,
    #[serde(default)]
    pub notlar: String,
    #[serde(default)]
    pub durum: QuoteStatus,
}

impl QuoteDocument {
    /// Payload for create/update. Totals are the quote's rounded aggregates.
    pub fn from_quote(quote: &Quote) -> Self {
        QuoteDocument {
            id: quote.id.clone(),
            teklif_no: quote.quote_number.clone(),
            musteri_id: quote.customer.id.clone(),
            musteri_adi: quote.customer.name.clone(),
            musteri_adres: quote.customer.address.clone(),
            musteri_vergi_no: quote.customer.tax_id.clone(),
            musteri_vergi_dairesi: quote.customer.tax_office.clone(),
            teklif_tarihi: quote.quote_date.format(DATE_FORMAT).to_string(),
            gecerlilik_tarihi: quote
                .valid_until
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            konu: quote.subject.clone(),
            kalemler: quote.items.iter().map(LineItemRecord::from).collect(),
            ara_toplam: quote.totals.subtotal.to_major(),
            toplam_iskonto: quote.totals.total_discount.to_major(),
            toplam_kdv: quote.totals.total_vat.to_major(),
            genel_toplam: quote.totals.grand_total.to_major(),
            para_birimi: quote.currency,
            odeme_kosullari: quote.payment_terms.clone(),
            teslim_suresi: quote.delivery_time.clone(),
            notlar: quote.notes.clone(),
            durum: quote.status,
        }
    }

    /// Converts a stored document back into a quote.
    ///
    /// Totals are recomputed from the lines rather than taken from the
    /// document. A missing quote date falls back to today.
    pub fn into_quote(self) -> ClientResult<Quote> {
        let quote_date = parse_date("teklif_tarihi", &self.teklif_tarihi)?
            .unwrap_or_else(|| chrono::Utc::now().date_naive());
        let valid_until = parse_date("gecerlilik_tarihi", &self.gecerlilik_tarihi)?;
        let items: Vec<LineItem> = self.kalemler.into_iter().map(LineItem::from).collect();
        let totals = QuoteTotals::compute(&items);

        Ok(Quote {
            id: self.id,
            quote_number: self.teklif_no,
            customer: CustomerSnapshot {
                id: self.musteri_id,
                name: self.musteri_adi,
                address: self.musteri_adres,
                tax_id: self.musteri_vergi_no,
                tax_office: self.musteri_vergi_dairesi,
            },
            quote_date,
            valid_until,
            subject: self.konu,
            items,
            totals,
            currency: self.para_birimi,
            payment_terms: self.odeme_kosullari,
            delivery_time: self.teslim_suresi,
            notes: self.notlar,
            status: self.durum,
        })
    }
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time part.
fn parse_date(field: &str, raw: &str) -> ClientResult<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .map(Some)
        .map_err(|e| ClientError::Decode(format!("{field} '{raw}': {e}")))
}

// =============================================================================
// Responses
// =============================================================================

/// Row of `GET teklifler`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteListRow {
    pub id: String,
    #[serde(default)]
    pub teklif_no: Option<String>,
    #[serde(default)]
    pub musteri_adi: String,
    #[serde(default)]
    pub konu: String,
    #[serde(default)]
    pub teklif_tarihi: String,
    #[serde(default)]
    pub genel_toplam: f64,
    #[serde(default)]
    pub durum: QuoteStatus,
}

impl From<QuoteListRow> for QuoteSummary {
    fn from(row: QuoteListRow) -> Self {
        // A malformed date only blanks the column.
        let quote_date = parse_date("teklif_tarihi", &row.teklif_tarihi)
            .ok()
            .flatten();
        QuoteSummary {
            id: row.id,
            quote_number: row.teklif_no,
            customer_name: row.musteri_adi,
            subject: row.konu,
            quote_date,
            grand_total: Money::round_from_major(row.genel_toplam),
            status: row.durum,
        }
    }
}

/// Body of `GET teklif-ozet`. Every figure defaults to zero when absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OverviewRecord {
    pub toplam_teklif: u64,
    pub taslak: u64,
    pub gonderildi: u64,
    pub beklemede: u64,
    pub kabul_edildi: u64,
    pub reddedildi: u64,
    pub iptal: u64,
    pub musteri_sayisi: u64,
    pub ayki_teklif_sayisi: u64,
    pub ayki_toplam_tutar: f64,
    pub kabul_toplam_tutar: f64,
    pub son_teklifler: Vec<QuoteListRow>,
}

impl From<OverviewRecord> for QuoteOverview {
    fn from(record: OverviewRecord) -> Self {
        QuoteOverview {
            total_quotes: record.toplam_teklif,
            by_status: StatusCounts {
                draft: record.taslak,
                sent: record.gonderildi,
                pending: record.beklemede,
                accepted: record.kabul_edildi,
                rejected: record.reddedildi,
                cancelled: record.iptal,
            },
            customer_count: record.musteri_sayisi,
            quotes_this_month: record.ayki_teklif_sayisi,
            total_this_month: Money::round_from_major(record.ayki_toplam_tutar),
            accepted_total: Money::round_from_major(record.kabul_toplam_tutar),
            recent: record
                .son_teklifler
                .into_iter()
                .map(QuoteSummary::from)
                .collect(),
        }
    }
}

/// Id of a record the backend just created, when the response carries one.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedRecord {
    #[serde(default)]
    pub id: Option<String>,
}

/// The part of a create response the client uses.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedQuote {
    pub id: String,
    #[serde(default)]
    pub teklif_no: Option<String>,
}

/// Error body; `detail` is a string for business errors and a list for
/// request validation errors.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// Human-readable message from the body.
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(text) => text.clone(),
            serde_json::Value::Array(entries) => entries
                .iter()
                .map(|entry| {
                    entry
                        .get("msg")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                        .unwrap_or_else(|| entry.to_string())
                })
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acerler_core::editor::QuoteEditor;
    use acerler_core::line_item::LineItemUpdate;
    use serde_json::json;

    fn sample_editor() -> QuoteEditor {
        let mut editor = QuoteEditor::new();
        editor.select_customer(&Customer {
            id: "c-1".into(),
            company_name: "Acar Beton".into(),
            contact_person: None,
            address: Some("Nevşehir".into()),
            tax_id: None,
            tax_office: None,
            phone: None,
            email: None,
            notes: None,
        });
        editor
            .update_item(0, LineItemUpdate::Description("Bims blok".into()))
            .unwrap();
        editor.update_item(0, LineItemUpdate::Quantity(2.0)).unwrap();
        editor.update_item(0, LineItemUpdate::UnitPrice(100.0)).unwrap();
        editor.update_item(0, LineItemUpdate::DiscountRate(10.0)).unwrap();
        editor.set_quote_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        editor
    }

    #[test]
    fn test_document_field_names() {
        let editor = sample_editor();
        let value = serde_json::to_value(QuoteDocument::from_quote(editor.quote())).unwrap();

        assert_eq!(value["musteri_adi"], "Acar Beton");
        assert_eq!(value["musteri_adres"], "Nevşehir");
        assert_eq!(value["musteri_vergi_no"], "");
        assert_eq!(value["teklif_tarihi"], "2024-03-01");
        assert_eq!(value["gecerlilik_tarihi"], "");
        assert_eq!(value["kalemler"][0]["urun_hizmet"], "Bims blok");
        assert_eq!(value["kalemler"][0]["birim"], "adet");
        assert_eq!(value["kalemler"][0]["toplam"], 216.0);
        assert_eq!(value["ara_toplam"], 200.0);
        assert_eq!(value["toplam_iskonto"], 20.0);
        assert_eq!(value["toplam_kdv"], 36.0);
        assert_eq!(value["genel_toplam"], 216.0);
        assert_eq!(value["para_birimi"], "TRY");
        assert_eq!(value["durum"], "taslak");
        assert!(value.get("id").is_none());
        assert!(value.get("teklif_no").is_none());
    }

    #[test]
    fn test_stored_totals_are_recomputed() {
        let doc: QuoteDocument = serde_json::from_value(json!({
            "id": "q-9",
            "teklif_no": "TKL-2024-0009",
            "musteri_adi": "Yıldız Yapı",
            "teklif_tarihi": "2024-05-10T00:00:00",
            "kalemler": [{
                "urun_hizmet": "Nakliye",
                "miktar": 1,
                "birim": "gun",
                "birim_fiyat": 500,
                "kdv_orani": 20,
                "iskonto_orani": 0,
                "toplam": 1
            }],
            "genel_toplam": 1,
            "durum": "gonderildi"
        }))
        .unwrap();

        let quote = doc.into_quote().unwrap();
        assert_eq!(quote.quote_number.as_deref(), Some("TKL-2024-0009"));
        assert_eq!(quote.quote_date, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        assert_eq!(quote.items[0].unit, Unit::Day);
        assert_eq!(quote.items[0].line_total(), 600.0);
        assert_eq!(quote.totals.grand_total.kurus(), 60_000);
        assert_eq!(quote.status, QuoteStatus::Sent);
    }

    #[test]
    fn test_bad_date_is_decode_error() {
        let doc: QuoteDocument =
            serde_json::from_value(json!({ "teklif_tarihi": "01.03.2024" })).unwrap();
        assert!(matches!(doc.into_quote(), Err(ClientError::Decode(_))));
    }

    #[test]
    fn test_customer_record_mapping() {
        let record: CustomerRecord = serde_json::from_value(json!({
            "id": "c-7",
            "firma_adi": "Deniz İnşaat",
            "yetkili_kisi": "Ali Deniz",
            "vergi_no": "1234567890",
            "olusturma_tarihi": "2024-01-01"
        }))
        .unwrap();
        let customer = Customer::from(record);
        assert_eq!(customer.company_name, "Deniz İnşaat");
        assert_eq!(customer.tax_id.as_deref(), Some("1234567890"));
        assert!(customer.address.is_none());
    }

    #[test]
    fn test_blank_customer_fields_are_none() {
        let record: CustomerRecord = serde_json::from_value(json!({
            "id": "c-8",
            "firma_adi": "Yıldız Yapı",
            "telefon": "0384 111 22 33",
            "email": "",
            "notlar": "  "
        }))
        .unwrap();
        let customer = Customer::from(record);
        assert_eq!(customer.phone.as_deref(), Some("0384 111 22 33"));
        assert!(customer.email.is_none());
        assert!(customer.notes.is_none());
    }

    #[test]
    fn test_customer_payload_sends_every_field() {
        let draft = CustomerDraft {
            company_name: " Acar Beton ".into(),
            email: "satis@acarbeton.com.tr".into(),
            ..CustomerDraft::default()
        };
        let value = serde_json::to_value(CustomerPayload::from(&draft)).unwrap();

        assert_eq!(value["firma_adi"], "Acar Beton");
        assert_eq!(value["email"], "satis@acarbeton.com.tr");
        assert_eq!(value["vergi_dairesi"], "");
        assert_eq!(value.as_object().unwrap().len(), 8);
    }

    #[test]
    fn test_overview_record_mapping() {
        let record: OverviewRecord = serde_json::from_value(json!({
            "toplam_teklif": 42,
            "taslak": 9,
            "gonderildi": 12,
            "beklemede": 5,
            "kabul_edildi": 11,
            "reddedildi": 4,
            "musteri_sayisi": 17,
            "ayki_toplam_tutar": 184300.004,
            "kabul_toplam_tutar": 912450.5,
            "son_teklifler": [{
                "id": "q-42",
                "teklif_no": "TKL-2024-0042",
                "musteri_adi": "Acar Beton",
                "teklif_tarihi": "2024-03-01",
                "genel_toplam": 216,
                "durum": "gonderildi"
            }]
        }))
        .unwrap();
        let overview = QuoteOverview::from(record);

        assert_eq!(overview.total_quotes, 42);
        assert_eq!(overview.by_status.cancelled, 0);
        assert_eq!(overview.by_status.awaiting_reply(), 17);
        assert_eq!(overview.quotes_this_month, 0);
        assert_eq!(overview.total_this_month.kurus(), 18_430_000);
        assert_eq!(overview.accepted_total.kurus(), 91_245_050);
        assert_eq!(overview.recent.len(), 1);
        assert_eq!(overview.recent[0].grand_total.kurus(), 21_600);
    }

    #[test]
    fn test_list_row_mapping() {
        let row: QuoteListRow = serde_json::from_value(json!({
            "id": "q-1",
            "teklif_no": "TKL-2024-0001",
            "musteri_adi": "Acar Beton",
            "teklif_tarihi": "2024-02-02",
            "genel_toplam": 1234.565,
            "durum": "kabul_edildi"
        }))
        .unwrap();
        let summary = QuoteSummary::from(row);
        assert_eq!(summary.status, QuoteStatus::Accepted);
        assert!(summary.quote_date.is_some());
        assert_eq!(summary.subject, "");
    }

    #[test]
    fn test_error_body_message() {
        let body: ErrorBody = serde_json::from_value(json!({ "detail": "Teklif bulunamadı" })).unwrap();
        assert_eq!(body.message(), "Teklif bulunamadı");

        let body: ErrorBody = serde_json::from_value(json!({
            "detail": [{ "loc": ["body", "musteri_id"], "msg": "field required" }]
        }))
        .unwrap();
        assert_eq!(body.message(), "field required");
    }
}
