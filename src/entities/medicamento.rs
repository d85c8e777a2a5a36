//! Medicamento entity - a medication that price agreements are registered for.

use crate::core::csv_sink::{CsvRecord, FieldValue};
use serde::Deserialize;

/// Medication record
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Medicamento {
    /// Unique identifier for the medication
    pub id_medicamento: i64,
    /// Display name (e.g., "Medicamento 1")
    pub nome_medicamento: String,
    /// Free-text description
    pub descricao: String,
}

impl CsvRecord for Medicamento {
    const FILE_NAME: &'static str = "medicamentos.csv";
    const COLUMNS: &'static [&'static str] = &["id_medicamento", "nome_medicamento", "descricao"];

    fn values(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::Integer(self.id_medicamento),
            FieldValue::Text(&self.nome_medicamento),
            FieldValue::Text(&self.descricao),
        ]
    }
}
