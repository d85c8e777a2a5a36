//! Lote entity - an inventory lot of a medication type.

use crate::core::csv_sink::{CsvRecord, FieldValue};
use chrono::NaiveDateTime;
use serde::Deserialize;

/// Batch record
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Lote {
    /// Unique identifier for the batch
    pub id: i64,
    /// Medication type label (e.g., "Tipo X")
    pub tipo_medicamento: String,
    /// Expiry date
    pub prazo_validade: NaiveDateTime,
}

impl CsvRecord for Lote {
    const FILE_NAME: &'static str = "lotes.csv";
    const COLUMNS: &'static [&'static str] = &["id", "tipo_medicamento", "prazo_validade"];

    fn values(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::Integer(self.id),
            FieldValue::Text(&self.tipo_medicamento),
            FieldValue::Timestamp(self.prazo_validade),
        ]
    }
}
