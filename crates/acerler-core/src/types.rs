//! # Domain Types
//!
//! Small value types shared by the quote model.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │  QuoteStatus    │   │      Unit       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  Draft          │   │  Piece, Kg, Ton │       │
//! │  │  company_name   │   │  Sent, Pending  │   │  M2, M3, Meter  │       │
//! │  │  tax_id/office  │   │  Accepted, ...  │   │  Hour, Day, ... │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ CustomerSnapshot│   │    Currency     │   │  CustomerDraft  │       │
//! │  │  frozen copy on │   │  TRY (default)  │   │  add / update   │       │
//! │  │  the quote      │   │  USD, EUR       │   │  form values    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Enum serde names are the backend's stored values (`adet`, `taslak`, ...),
//! so the same types travel through JSON and the generated TypeScript.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Unit
// =============================================================================

/// Unit of measure for a line item. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Unit {
    #[default]
    #[serde(rename = "adet")]
    Piece,
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "ton")]
    Ton,
    #[serde(rename = "m2")]
    M2,
    #[serde(rename = "m3")]
    M3,
    #[serde(rename = "metre")]
    Meter,
    #[serde(rename = "saat")]
    Hour,
    #[serde(rename = "gun")]
    Day,
    #[serde(rename = "ay")]
    Month,
}

impl Unit {
    /// Every unit, in the order the form lists them.
    pub const ALL: [Unit; 9] = [
        Unit::Piece,
        Unit::Kg,
        Unit::Ton,
        Unit::M2,
        Unit::M3,
        Unit::Meter,
        Unit::Hour,
        Unit::Day,
        Unit::Month,
    ];

    /// Backend code for this unit.
    pub const fn code(&self) -> &'static str {
        match self {
            Unit::Piece => "adet",
            Unit::Kg => "kg",
            Unit::Ton => "ton",
            Unit::M2 => "m2",
            Unit::M3 => "m3",
            Unit::Meter => "metre",
            Unit::Hour => "saat",
            Unit::Day => "gun",
            Unit::Month => "ay",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Unit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "adet" | "piece" | "pcs" => Ok(Unit::Piece),
            "kg" => Ok(Unit::Kg),
            "ton" => Ok(Unit::Ton),
            "m2" => Ok(Unit::M2),
            "m3" => Ok(Unit::M3),
            "metre" | "meter" | "m" => Ok(Unit::Meter),
            "saat" | "hour" => Ok(Unit::Hour),
            "gun" | "gün" | "day" => Ok(Unit::Day),
            "ay" | "month" => Ok(Unit::Month),
            _ => Err(ValidationError::NotAllowed {
                field: "unit".to_string(),
                allowed: Unit::ALL.iter().map(|u| u.code().to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Currency
// =============================================================================

/// Currency a quote is priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Try,
    Usd,
    Eur,
}

impl Currency {
    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Try => "TRY",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Quote Status
// =============================================================================

/// Where a quote is in its sales lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum QuoteStatus {
    /// Being written, not yet sent to the customer.
    #[default]
    #[serde(rename = "taslak")]
    Draft,
    #[serde(rename = "gonderildi")]
    Sent,
    /// Customer is considering it.
    #[serde(rename = "beklemede")]
    Pending,
    #[serde(rename = "kabul_edildi")]
    Accepted,
    #[serde(rename = "reddedildi")]
    Rejected,
    #[serde(rename = "iptal")]
    Cancelled,
}

impl QuoteStatus {
    pub const ALL: [QuoteStatus; 6] = [
        QuoteStatus::Draft,
        QuoteStatus::Sent,
        QuoteStatus::Pending,
        QuoteStatus::Accepted,
        QuoteStatus::Rejected,
        QuoteStatus::Cancelled,
    ];

    /// Backend code, also used as the `durum` query parameter.
    pub const fn code(&self) -> &'static str {
        match self {
            QuoteStatus::Draft => "taslak",
            QuoteStatus::Sent => "gonderildi",
            QuoteStatus::Pending => "beklemede",
            QuoteStatus::Accepted => "kabul_edildi",
            QuoteStatus::Rejected => "reddedildi",
            QuoteStatus::Cancelled => "iptal",
        }
    }

    /// True once the customer has answered or the quote was withdrawn.
    pub const fn is_closed(&self) -> bool {
        matches!(
            self,
            QuoteStatus::Accepted | QuoteStatus::Rejected | QuoteStatus::Cancelled
        )
    }
}

impl fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for QuoteStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "taslak" | "draft" => Ok(QuoteStatus::Draft),
            "gonderildi" | "sent" => Ok(QuoteStatus::Sent),
            "beklemede" | "pending" => Ok(QuoteStatus::Pending),
            "kabul_edildi" | "accepted" => Ok(QuoteStatus::Accepted),
            "reddedildi" | "rejected" => Ok(QuoteStatus::Rejected),
            "iptal" | "cancelled" | "canceled" => Ok(QuoteStatus::Cancelled),
            _ => Err(ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: QuoteStatus::ALL
                    .iter()
                    .map(|s| s.code().to_string())
                    .collect(),
            }),
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer quotes can be addressed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub id: String,
    pub company_name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    /// Vergi numarası.
    pub tax_id: Option<String>,
    /// Vergi dairesi.
    pub tax_office: Option<String>,
    pub notes: Option<String>,
}

/// Editable customer record, as sent when a customer is added or updated.
///
/// An update replaces every field, so an edit starts from
/// [`CustomerDraft::from_customer`] and changes what it needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerDraft {
    pub company_name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub tax_id: String,
    pub tax_office: String,
    pub notes: String,
}

impl CustomerDraft {
    /// Form values for editing an existing customer; missing fields are empty.
    pub fn from_customer(customer: &Customer) -> Self {
        let text = |field: &Option<String>| field.clone().unwrap_or_default();
        CustomerDraft {
            company_name: customer.company_name.clone(),
            contact_person: text(&customer.contact_person),
            phone: text(&customer.phone),
            email: text(&customer.email),
            address: text(&customer.address),
            tax_id: text(&customer.tax_id),
            tax_office: text(&customer.tax_office),
            notes: text(&customer.notes),
        }
    }
}

/// Customer data frozen onto a quote when the customer is selected.
///
/// Later edits to the customer record do not change quotes already written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerSnapshot {
    pub id: String,
    pub name: String,
    pub address: String,
    pub tax_id: String,
    pub tax_office: String,
}

impl CustomerSnapshot {
    /// Copies the fields a quote prints from the customer record.
    pub fn from_customer(customer: &Customer) -> Self {
        CustomerSnapshot {
            id: customer.id.clone(),
            name: customer.company_name.clone(),
            address: customer.address.clone().unwrap_or_default(),
            tax_id: customer.tax_id.clone().unwrap_or_default(),
            tax_office: customer.tax_office.clone().unwrap_or_default(),
        }
    }

    /// A snapshot counts as a selected customer once it has a name.
    pub fn is_selected(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_default_and_codes() {
        assert_eq!(Unit::default(), Unit::Piece);
        assert_eq!(Unit::Meter.to_string(), "metre");
        assert_eq!("gün".parse::<Unit>().unwrap(), Unit::Day);
        assert!("litre".parse::<Unit>().is_err());
    }

    #[test]
    fn test_unit_serde_uses_backend_codes() {
        assert_eq!(serde_json::to_string(&Unit::M3).unwrap(), "\"m3\"");
        let unit: Unit = serde_json::from_str("\"saat\"").unwrap();
        assert_eq!(unit, Unit::Hour);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("taslak".parse::<QuoteStatus>().unwrap(), QuoteStatus::Draft);
        assert_eq!("accepted".parse::<QuoteStatus>().unwrap(), QuoteStatus::Accepted);
        assert_eq!("IPTAL".parse::<QuoteStatus>().unwrap(), QuoteStatus::Cancelled);
        assert!("archived".parse::<QuoteStatus>().is_err());
    }

    #[test]
    fn test_status_default_and_closed() {
        assert_eq!(QuoteStatus::default(), QuoteStatus::Draft);
        assert!(!QuoteStatus::Sent.is_closed());
        assert!(QuoteStatus::Rejected.is_closed());
        assert_eq!(
            serde_json::to_string(&QuoteStatus::Accepted).unwrap(),
            "\"kabul_edildi\""
        );
    }

    #[test]
    fn test_currency_serde() {
        assert_eq!(serde_json::to_string(&Currency::Try).unwrap(), "\"TRY\"");
        assert_eq!(Currency::default(), Currency::Try);
    }

    #[test]
    fn test_customer_snapshot() {
        let customer = Customer {
            id: "c-1".to_string(),
            company_name: "Yapı Market Ltd.".to_string(),
            contact_person: Some("Ayşe".to_string()),
            address: None,
            tax_id: Some("1234567890".to_string()),
            tax_office: Some("Kadıköy".to_string()),
            phone: None,
            email: None,
            notes: None,
        };
        let snapshot = CustomerSnapshot::from_customer(&customer);
        assert_eq!(snapshot.name, "Yapı Market Ltd.");
        assert_eq!(snapshot.address, "");
        assert_eq!(snapshot.tax_office, "Kadıköy");
        assert!(snapshot.is_selected());
        assert!(!CustomerSnapshot::default().is_selected());
    }

    #[test]
    fn test_customer_draft_from_customer() {
        let customer = Customer {
            id: "c-2".to_string(),
            company_name: "Kapadokya Yapı".to_string(),
            contact_person: None,
            phone: Some("0384 000 00 00".to_string()),
            email: None,
            address: Some("Ürgüp".to_string()),
            tax_id: None,
            tax_office: None,
            notes: Some("Peşin çalışır".to_string()),
        };
        let draft = CustomerDraft::from_customer(&customer);
        assert_eq!(draft.company_name, "Kapadokya Yapı");
        assert_eq!(draft.phone, "0384 000 00 00");
        assert_eq!(draft.contact_person, "");
        assert_eq!(draft.notes, "Peşin çalışır");
    }
}
