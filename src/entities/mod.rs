//! Record types for the synthetic pharmacy supply dataset.
//!
//! Each record implements [`crate::core::csv_sink::CsvRecord`]; field
//! declaration order is the CSV column order.

pub mod ata;
pub mod empenho;
pub mod fluxo;
pub mod lote;
pub mod medicamento;
pub mod unidade;

pub use ata::AtaRegistroPrecos;
pub use empenho::Empenho;
pub use fluxo::Fluxo;
pub use lote::Lote;
pub use medicamento::Medicamento;
pub use unidade::{NomeUnidade, Unidade};
