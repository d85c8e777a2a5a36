//! Record generators - build one populated record per call.
//!
//! Generators never touch global state: randomness comes from the `rng` handle
//! the caller threads through, and "now" is passed in explicitly. Seeding the
//! handle makes a whole dataset reproducible.

use crate::{
    entities::{AtaRegistroPrecos, Empenho, Fluxo, Lote, Medicamento},
    errors::{Error, Result},
};
use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use std::ops::RangeInclusive;

/// Description shared by every generated medication.
pub const DESCRICAO_MEDICAMENTO: &str = "Descrição do medicamento genérico.";
/// Specification text shared by every generated agreement.
pub const ESPECIFICACAO_ATA: &str = "Medicamento genérico de alta qualidade";

/// Range for an agreement's maximum quantity.
pub const QUANTIDADE_MAXIMA: RangeInclusive<i64> = 100..=500;
/// Range for an agreement's minimum quantity. Drawn independently of the maximum.
pub const QUANTIDADE_MINIMA: RangeInclusive<i64> = 10..=50;

const VALOR_UNITARIO: RangeInclusive<f64> = 1.0..=100.0;
const DIAS_ABERTURA_ATA: RangeInclusive<i64> = 1..=365;
const DIAS_PRAZO_ATA: RangeInclusive<i64> = 30..=365;
const DIAS_PRAZO_ENTREGA: RangeInclusive<i64> = 7..=60;
const DIAS_VALIDADE_LOTE: RangeInclusive<i64> = 180..=730;
/// Maximum number of days a flow event lands after its reference start.
pub const DIAS_JANELA_FLUXO: i64 = 50;
const VARIACAO_FLUXO: RangeInclusive<i64> = -50..=50;

/// Generates a registration number shaped like `NN.NNN.NNN/NNNN-NN`.
///
/// No uniqueness is guaranteed across calls.
pub fn generate_cnpj<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}.{}.{}/{}-{}",
        rng.gen_range(10..=99),
        rng.gen_range(100..=999),
        rng.gen_range(100..=999),
        rng.gen_range(1000..=9999),
        rng.gen_range(10..=99)
    )
}

/// Builds a medication whose name and description depend only on `id`.
#[must_use]
pub fn generate_medicamento(id: i64) -> Medicamento {
    Medicamento {
        id_medicamento: id,
        nome_medicamento: format!("Medicamento {id}"),
        descricao: DESCRICAO_MEDICAMENTO.to_string(),
    }
}

/// Builds a price-registration agreement for `medicamento`.
///
/// Opened 1 to 365 days before `now`, expiring 30 to 365 days after it, priced
/// between 1.00 and 100.00 (two decimals).
pub fn generate_ata<R: Rng + ?Sized>(
    rng: &mut R,
    now: NaiveDateTime,
    id: i64,
    medicamento: &Medicamento,
) -> AtaRegistroPrecos {
    AtaRegistroPrecos {
        id,
        id_medicamento: medicamento.id_medicamento,
        especificacao: ESPECIFICACAO_ATA.to_string(),
        nome_fornecedor: format!("Fornecedor {id}"),
        cnpj: generate_cnpj(rng),
        unidade: rng.r#gen(),
        quantidade_maxima: rng.gen_range(QUANTIDADE_MAXIMA),
        quantidade_minima: rng.gen_range(QUANTIDADE_MINIMA),
        valor_unitario: round_cents(rng.gen_range(VALOR_UNITARIO)),
        data_abertura: now - Duration::days(rng.gen_range(DIAS_ABERTURA_ATA)),
        prazo: now + Duration::days(rng.gen_range(DIAS_PRAZO_ATA)),
    }
}

/// Builds a commitment against `ata`, opened at `now` and due 7 to 60 days later.
///
/// # Errors
/// Returns [`Error::InvalidRange`] if the agreement's minimum quantity exceeds
/// its maximum.
pub fn generate_empenho<R: Rng + ?Sized>(
    rng: &mut R,
    now: NaiveDateTime,
    id: i64,
    ata: &AtaRegistroPrecos,
) -> Result<Empenho> {
    if ata.quantidade_minima > ata.quantidade_maxima {
        return Err(Error::InvalidRange {
            min: ata.quantidade_minima,
            max: ata.quantidade_maxima,
        });
    }

    Ok(Empenho {
        id,
        id_ata: ata.id,
        unidade: ata.unidade,
        quantidade: rng.gen_range(ata.quantidade_minima..=ata.quantidade_maxima),
        data_abertura: now,
        prazo_entrega: now + Duration::days(rng.gen_range(DIAS_PRAZO_ENTREGA)),
    })
}

/// Builds a batch of `tipo` expiring 180 to 730 days after `now`.
pub fn generate_lote<R: Rng + ?Sized>(
    rng: &mut R,
    now: NaiveDateTime,
    id: i64,
    tipo: &str,
) -> Lote {
    Lote {
        id,
        tipo_medicamento: tipo.to_string(),
        prazo_validade: now + Duration::days(rng.gen_range(DIAS_VALIDADE_LOTE)),
    }
}

/// Builds a stock movement for batch `id_lote`, 0 to 50 days after `inicio`.
pub fn generate_fluxo<R: Rng + ?Sized>(
    rng: &mut R,
    id: i64,
    id_lote: i64,
    inicio: NaiveDateTime,
) -> Fluxo {
    Fluxo {
        id,
        id_lote,
        nome_unidade: rng.r#gen(),
        timestamp: inicio + Duration::days(rng.gen_range(0..=DIAS_JANELA_FLUXO)),
        variacao: rng.gen_range(VARIACAO_FLUXO),
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
