use std::path::PathBuf;
use std::time::Duration;

use analytics::dashboards::build_snapshot;
use analytics::shared::config::load_config;
use analytics::shared::data::{FactStore, SyntheticGenerator};
use analytics::shared::filters::{default_main_filters, filter_options, validate_filters};
use analytics::shared::format::format_compact;
use analytics::system::tracing as app_tracing;
use contracts::shared::filters::AnalysisFilters;

/// Usage: `analytics [filters.json]`
///
/// Without an argument the main tab uses its default filters and the other
/// tabs are unrestricted. The snapshot is printed to stdout as JSON.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Логи: stderr + файл
    app_tracing::initialize(&app_tracing::default_log_dir())?;

    let config = load_config()?;

    let store = FactStore::new(SyntheticGenerator::from_config(&config.data_source));
    // Свежая генерация при каждом запуске
    store.invalidate();
    let snapshot = store
        .load(Duration::from_millis(config.data_source.load_delay_ms))
        .await;

    let filters = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            tracing::info!("Reading filters from {}", path.display());
            let contents = std::fs::read_to_string(&path)?;
            let raw: AnalysisFilters = serde_json::from_str(&contents)?;
            validate_filters(&raw)?
        }
        None => {
            let options = filter_options(&snapshot.facts);
            AnalysisFilters {
                main: default_main_filters(&options),
                ..AnalysisFilters::default()
            }
        }
    };

    let started = std::time::Instant::now();
    let dashboard = build_snapshot(&snapshot, filters, &config);
    tracing::info!(
        "Dashboard computed in {} ms ({} facts, main total {})",
        started.elapsed().as_millis(),
        snapshot.facts.len(),
        format_compact(dashboard.market_analysis.kpi.total_value)
    );

    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}
