//! Domain Risk - CLI Entry Point
//!
//! domain-risk [BUNDLE.json]          analyze a signal bundle (stdin if omitted)
//! domain-risk export-weights PATH    write the active weight table to PATH

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context};

use domain_risk_engine::constants::{APP_NAME, APP_VERSION};
use domain_risk_engine::logic::config::EngineConfig;
use domain_risk_engine::logic::model::WeightStore;
use domain_risk_engine::{RiskAnalyzer, SignalBundle};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}", APP_NAME, APP_VERSION);

    let config = EngineConfig::from_env();
    let store = Arc::new(WeightStore::default());
    if config.weights_path.exists() {
        store.reload(&config.weights_path);
    } else {
        log::info!(
            "No weight file at {} - using built-in weights",
            config.weights_path.display()
        );
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [cmd, path] if cmd == "export-weights" => {
            store
                .save(Path::new(path))
                .with_context(|| format!("exporting weights to {}", path))?;
            log::info!("Weights exported to {}", path);
            Ok(())
        }
        [cmd] if cmd == "export-weights" => bail!("usage: domain-risk export-weights PATH"),
        [] => run(&store, read_stdin()?),
        [path] => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading signal bundle {}", path))?;
            run(&store, raw)
        }
        _ => bail!("usage: domain-risk [BUNDLE.json] | export-weights PATH"),
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("reading signal bundle from stdin")?;
    Ok(raw)
}

fn run(store: &Arc<WeightStore>, raw: String) -> anyhow::Result<()> {
    let bundle: SignalBundle =
        serde_json::from_str(&raw).context("signal bundle is not valid JSON")?;

    let report = RiskAnalyzer::with_store(Arc::clone(store)).analyze(bundle);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
