use dotenvy::dotenv;
use pharma_synth::{config, core::dataset, errors::Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Load .env file so RUST_LOG and PHARMA_SYNTH_CONFIG can live there
    let dotenv_loaded = dotenv().is_ok(); // Non-fatal, env vars can be set externally

    // 2. Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    if dotenv_loaded {
        info!("Loaded .env file.");
    }

    // 3. Load generation settings (defaults when no file is present)
    let app_config = config::load_default_config()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    info!("Writing dataset to {:?}", app_config.output_dir);

    // 4. Generate and append
    let summary = dataset::run(&app_config)
        .inspect_err(|e| error!("Generation run failed: {}", e))?;

    info!(
        medicamentos = summary.medicamentos,
        atas = summary.atas,
        empenhos = summary.empenhos,
        lotes = summary.lotes,
        fluxos = summary.fluxos,
        "Dataset appended successfully."
    );
    Ok(())
}
