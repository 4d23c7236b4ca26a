use std::env;
use std::path::Path;
use std::process;

use dotenvy::dotenv;
use log::{error, info, warn};

use racing_evolution_analytics::modules::dataset::Dataset;
use racing_evolution_analytics::modules::helpers::logging::setup_logging;

/// load the input documents once and report everything that would make a
/// render fail later: unreadable files, malformed json, dangling ids.
fn main() {
    dotenv().ok();
    setup_logging().expect("failed to setup logging");

    let dataset_dir = env::var("DATASET_DIR").unwrap_or_else(|_| "./data".to_string());
    let dataset = match Dataset::load(Path::new(&dataset_dir)) {
        Ok(dataset) => dataset,
        Err(error) => {
            error!(target: "check_dataset", "failed to load dataset from {}: {}", dataset_dir, error);
            process::exit(1);
        }
    };

    info!(
        target: "check_dataset",
        "loaded {} cars, {} races, {} experiments, {} teams",
        dataset.cars.len(),
        dataset.races.len(),
        dataset.experiments.len(),
        dataset.team_summary.teams().len()
    );

    let problems = dataset.validate();
    for problem in &problems {
        warn!(target: "check_dataset", "{}", problem);
    }

    if problems.is_empty() {
        info!(target: "check_dataset", "dataset is consistent");
    } else {
        error!(target: "check_dataset", "dataset has {} dangling references", problems.len());
        process::exit(1);
    }
}
