//! Data models for the transaction view

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::CoreError;
use super::types::AmountClass;

/// A single ledger entry as served by the backend collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Server-assigned identifier
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: i64,
    /// Free-form description
    pub descricao: String,
    /// Signed amount; the sign selects the display class
    pub valor: f64,
    /// Calendar date (YYYY-MM-DD on the wire)
    pub data: NaiveDate,
}

impl Transaction {
    /// Visual class derived from the amount sign
    pub fn amount_class(&self) -> AmountClass {
        AmountClass::from_valor(self.valor)
    }

    /// Amount formatted with two decimal places and the currency symbol
    pub fn valor_display(&self, symbol: &str) -> String {
        format!("{} {:.2}", symbol, self.valor)
    }

    /// Date formatted for local display
    pub fn data_display(&self, format: &str) -> String {
        self.data.format(format).to_string()
    }

    /// Date in the ISO form expected by date form inputs
    pub fn data_iso(&self) -> String {
        self.data.format("%Y-%m-%d").to_string()
    }
}

/// Ids must compare exactly against ids read back from rendered rows, so
/// both JSON numbers and numeric strings are accepted here and normalized.
fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid transaction id: {}", s))),
    }
}

/// Payload for create and update requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub descricao: String,
    pub valor: f64,
    pub data: NaiveDate,
}

impl TransactionDraft {
    /// Build a draft from submitted form fields
    ///
    /// The amount is parsed as a float and the date as an ISO calendar date.
    /// Parse failures are reported, never defaulted.
    pub fn from_form_fields(descricao: &str, valor: &str, data: &str) -> Result<Self, CoreError> {
        let valor = valor
            .trim()
            .parse::<f64>()
            .map_err(|_| CoreError::InvalidAmount {
                value: valor.to_string(),
            })?;
        let data = NaiveDate::parse_from_str(data.trim(), "%Y-%m-%d").map_err(|_| {
            CoreError::InvalidDate {
                value: data.to_string(),
            }
        })?;
        Ok(Self {
            descricao: descricao.to_string(),
            valor,
            data,
        })
    }
}

// ==================== Tests ====================
