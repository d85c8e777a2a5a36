//! Empenho entity - a commitment reserving a quantity against an agreement.

use super::Unidade;
use crate::core::csv_sink::{CsvRecord, FieldValue};
use chrono::NaiveDateTime;
use serde::Deserialize;

/// Commitment record
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Empenho {
    /// Unique identifier for the commitment
    pub id: i64,
    /// Agreement this commitment draws from
    pub id_ata: i64,
    /// Unit of measure, inherited from the agreement
    pub unidade: Unidade,
    /// Reserved quantity
    pub quantidade: i64,
    /// When the commitment was opened
    pub data_abertura: NaiveDateTime,
    /// Delivery deadline
    pub prazo_entrega: NaiveDateTime,
}

impl CsvRecord for Empenho {
    const FILE_NAME: &'static str = "empenhos.csv";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "id_ata",
        "unidade",
        "quantidade",
        "data_abertura",
        "prazo_entrega",
    ];

    fn values(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::Integer(self.id),
            FieldValue::Integer(self.id_ata),
            FieldValue::Label(self.unidade.as_ref()),
            FieldValue::Integer(self.quantidade),
            FieldValue::Timestamp(self.data_abertura),
            FieldValue::Timestamp(self.prazo_entrega),
        ]
    }
}
