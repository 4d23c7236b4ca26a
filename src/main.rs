use std::env;
use std::path::Path;
use std::process;

use dotenvy::dotenv;
use log::{error, info};
use rocket::fs::{relative, FileServer};
use rocket_dyn_templates::Template;

use racing_evolution_analytics::modules::dataset::Dataset;
use racing_evolution_analytics::modules::helpers::handelbars::format_distance::FormatDistanceHelper;
use racing_evolution_analytics::modules::helpers::handelbars::format_time::FormatTimeHelper;
use racing_evolution_analytics::modules::helpers::handelbars::to_json::ToJson;
use racing_evolution_analytics::modules::helpers::logging::setup_logging;

#[macro_use] extern crate rocket;

use racing_evolution_analytics::routes::{api, experiment, race, summary};

#[rocket::main]
async fn main() {
    dotenv().ok();
    setup_logging().expect("failed to setup logging");

    let dataset_dir = env::var("DATASET_DIR").unwrap_or_else(|_| "./data".to_string());
    let dataset = match Dataset::load(Path::new(&dataset_dir)) {
        Ok(dataset) => dataset,
        Err(error) => {
            error!(target: "main", "could not load dataset from {}: {}", dataset_dir, error);
            process::exit(1);
        }
    };

    info!(
        target: "main",
        "loaded {} cars, {} races, {} experiments, {} teams",
        dataset.cars.len(),
        dataset.races.len(),
        dataset.experiments.len(),
        dataset.team_summary.teams().len()
    );

    let result = rocket::build()
        .manage(dataset)
        .attach(Template::custom(|engines| {
            engines.handlebars.register_helper("formatTime", Box::new(FormatTimeHelper));
            engines.handlebars.register_helper("formatDistance", Box::new(FormatDistanceHelper));
            engines.handlebars.register_helper("toJson", Box::new(ToJson));
            engines.handlebars.set_strict_mode(true);
        }))
        .mount("/", routes![
            summary::index,
            summary::single,
        ])
        .mount("/races", routes![
            race::single,
        ])
        .mount("/experiments", routes![
            experiment::single,
        ])
        .mount("/api", routes![
            api::race::standings,
            api::experiment::evolution,
        ])
        .mount("/static", FileServer::from(relative!("static")))
        .launch()
        .await;

    if let Err(error) = result {
        error!(target: "main", "server stopped with an error: {}", error);
        process::exit(1);
    }
}
