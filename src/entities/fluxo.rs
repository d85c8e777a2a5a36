//! Fluxo entity - a stock movement against a batch at a facility.
//!
//! `variacao` is signed: positive values are stock entering the facility,
//! negative values stock leaving it.

use super::NomeUnidade;
use crate::core::csv_sink::{CsvRecord, FieldValue};
use chrono::NaiveDateTime;
use serde::Deserialize;

/// Flow event record
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Fluxo {
    /// Unique identifier for the event
    pub id: i64,
    /// Batch the movement applies to
    pub id_lote: i64,
    /// Facility where it happened
    pub nome_unidade: NomeUnidade,
    /// When it happened
    pub timestamp: NaiveDateTime,
    /// Signed quantity delta
    pub variacao: i64,
}

impl CsvRecord for Fluxo {
    const FILE_NAME: &'static str = "fluxos.csv";
    const COLUMNS: &'static [&'static str] =
        &["id", "id_lote", "nome_unidade", "timestamp", "variacao"];

    fn values(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::Integer(self.id),
            FieldValue::Integer(self.id_lote),
            FieldValue::Label(self.nome_unidade.as_ref()),
            FieldValue::Timestamp(self.timestamp),
            FieldValue::Integer(self.variacao),
        ]
    }
}
