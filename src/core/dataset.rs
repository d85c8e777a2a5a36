//! Dataset orchestration - builds the synthetic dataset and appends it to disk.
//!
//! Records are generated in dependency order (medications → agreements →
//! commitments → batches → flow events) and then written collection by
//! collection, preserving generation order within each file.

use super::{
    csv_sink::{self, CsvRecord},
    generators::{
        DIAS_JANELA_FLUXO, generate_ata, generate_empenho, generate_fluxo, generate_lote,
        generate_medicamento,
    },
};
use crate::{
    config::GeneratorConfig,
    entities::{AtaRegistroPrecos, Empenho, Fluxo, Lote, Medicamento},
    errors::Result,
};
use chrono::{Duration, Local, NaiveDateTime};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{ops::RangeInclusive, path::Path};
use tracing::{info, instrument};

/// Number of medications, and therefore agreements.
pub const MEDICAMENTOS: i64 = 3;
/// Commitments generated per agreement.
pub const EMPENHOS_POR_ATA: i64 = 2;
/// Flow events generated per batch.
pub const FLUXOS_POR_LOTE: i64 = 100;
/// Type label given to every batch.
pub const TIPO_LOTE: &str = "Tipo X";

/// Every record produced by one orchestration pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Medications, ids `1..=n`
    pub medicamentos: Vec<Medicamento>,
    /// One agreement per medication, same ids
    pub atas: Vec<AtaRegistroPrecos>,
    /// Commitments grouped by agreement
    pub empenhos: Vec<Empenho>,
    /// One batch per commitment, ids `1..=n`
    pub lotes: Vec<Lote>,
    /// Flow events grouped by batch
    pub fluxos: Vec<Fluxo>,
}

/// Rows appended to each file by one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Rows appended to `medicamentos.csv`
    pub medicamentos: usize,
    /// Rows appended to `atas_registro_precos.csv`
    pub atas: usize,
    /// Rows appended to `empenhos.csv`
    pub empenhos: usize,
    /// Rows appended to `lotes.csv`
    pub lotes: usize,
    /// Rows appended to `fluxos.csv`
    pub fluxos: usize,
}

/// Ids of the `per_parent` children of parent `parent_id`: `k*p-(k-1) ..= k*p`.
///
/// Only called with the small fixed counts above.
#[must_use]
pub const fn child_ids(parent_id: i64, per_parent: i64) -> RangeInclusive<i64> {
    per_parent * parent_id - (per_parent - 1)..=per_parent * parent_id
}

/// Generates the whole dataset in memory: 3 medications, 3 agreements,
/// 6 commitments, 6 batches and 600 flow events.
///
/// # Errors
/// Returns an error if a commitment cannot be drawn from its agreement's quantity range.
pub fn build_dataset<R: Rng + ?Sized>(
    rng: &mut R,
    now: NaiveDateTime,
) -> Result<Dataset> {
    let medicamentos: Vec<Medicamento> = (1..=MEDICAMENTOS)
        .map(generate_medicamento)
        .collect();

    let atas: Vec<AtaRegistroPrecos> = medicamentos
        .iter()
        .zip(1..)
        .map(|(medicamento, id)| generate_ata(rng, now, id, medicamento))
        .collect();

    let mut empenhos = Vec::new();
    for ata in &atas {
        for id in child_ids(ata.id, EMPENHOS_POR_ATA) {
            empenhos.push(generate_empenho(rng, now, id, ata)?);
        }
    }

    let lotes: Vec<Lote> = (1..)
        .take(empenhos.len())
        .map(|id| generate_lote(rng, now, id, TIPO_LOTE))
        .collect();

    let inicio = now - Duration::days(DIAS_JANELA_FLUXO);
    let fluxos: Vec<Fluxo> = lotes
        .iter()
        .flat_map(|lote| child_ids(lote.id, FLUXOS_POR_LOTE).map(move |id| (id, lote.id)))
        .map(|(id, id_lote)| generate_fluxo(rng, id, id_lote, inicio))
        .collect();

    Ok(Dataset {
        medicamentos,
        atas,
        empenhos,
        lotes,
        fluxos,
    })
}

/// Appends every collection of `dataset` to its file under `output_dir`.
///
/// Stops at the first failing file; files written before it keep their new rows.
///
/// # Errors
/// Returns an error if any file cannot be opened or written.
#[instrument(skip(dataset))]
pub fn write_dataset(dataset: &Dataset, output_dir: &Path) -> Result<RunSummary> {
    Ok(RunSummary {
        medicamentos: write_collection(&dataset.medicamentos, output_dir)?,
        atas: write_collection(&dataset.atas, output_dir)?,
        empenhos: write_collection(&dataset.empenhos, output_dir)?,
        lotes: write_collection(&dataset.lotes, output_dir)?,
        fluxos: write_collection(&dataset.fluxos, output_dir)?,
    })
}

fn write_collection<T: CsvRecord>(records: &[T], output_dir: &Path) -> Result<usize> {
    let path = output_dir.join(T::FILE_NAME);
    for record in records {
        csv_sink::append(record, &path)?;
    }
    info!("Appended {} rows to {:?}", records.len(), path);
    Ok(records.len())
}

/// Runs one full generation pass as described by `config`.
///
/// # Errors
/// Returns an error if generation or any file write fails.
pub fn run(config: &GeneratorConfig) -> Result<RunSummary> {
    let mut rng = match config.seed {
        Some(seed) => {
            info!("Seeding generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let now = Local::now().naive_local();

    let dataset = build_dataset(&mut rng, now)?;
    write_dataset(&dataset, &config.output_dir)
}
