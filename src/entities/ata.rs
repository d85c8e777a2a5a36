//! Ata de Registro de Preços entity - a price-registration agreement with a supplier.
//!
//! An agreement bounds how much of a medication may be purchased
//! (`quantidade_minima`..=`quantidade_maxima`) and at which unit price, between
//! `data_abertura` and `prazo`.

use super::Unidade;
use crate::core::csv_sink::{CsvRecord, FieldValue};
use chrono::NaiveDateTime;
use serde::Deserialize;

/// Price-registration agreement record
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AtaRegistroPrecos {
    /// Unique identifier for the agreement
    pub id: i64,
    /// Medication this agreement prices
    pub id_medicamento: i64,
    /// Specification text
    pub especificacao: String,
    /// Supplier name
    pub nome_fornecedor: String,
    /// Supplier registration number (`NN.NNN.NNN/NNNN-NN`)
    pub cnpj: String,
    /// Unit of measure quantities are expressed in
    pub unidade: Unidade,
    /// Maximum purchasable quantity
    pub quantidade_maxima: i64,
    /// Minimum purchasable quantity
    pub quantidade_minima: i64,
    /// Unit price, two decimal places
    pub valor_unitario: f64,
    /// When the agreement was opened
    pub data_abertura: NaiveDateTime,
    /// When the agreement expires
    pub prazo: NaiveDateTime,
}

impl CsvRecord for AtaRegistroPrecos {
    const FILE_NAME: &'static str = "atas_registro_precos.csv";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "id_medicamento",
        "especificacao",
        "nome_fornecedor",
        "cnpj",
        "unidade",
        "quantidade_maxima",
        "quantidade_minima",
        "valor_unitario",
        "data_abertura",
        "prazo",
    ];

    fn values(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::Integer(self.id),
            FieldValue::Integer(self.id_medicamento),
            FieldValue::Text(&self.especificacao),
            FieldValue::Text(&self.nome_fornecedor),
            FieldValue::Text(&self.cnpj),
            FieldValue::Label(self.unidade.as_ref()),
            FieldValue::Integer(self.quantidade_maxima),
            FieldValue::Integer(self.quantidade_minima),
            FieldValue::Decimal(self.valor_unitario),
            FieldValue::Timestamp(self.data_abertura),
            FieldValue::Timestamp(self.prazo),
        ]
    }
}
