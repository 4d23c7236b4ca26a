use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;

use crate::errors::{CustomResult, Error};
use crate::modules::models::car::Car;
use crate::modules::models::experiment::Experiment;
use crate::modules::models::race::Race;
use crate::modules::models::team_summary::TeamSummary;

/// the loaded input documents. built once at startup and passed into
/// every transformation, nothing in here is ever mutated afterwards.
#[derive(Clone, PartialEq, Debug)]
pub struct Dataset {
    pub cars: BTreeMap<String, Car>,
    pub races: BTreeMap<String, Race>,
    pub experiments: BTreeMap<String, Experiment>,
    pub team_summary: TeamSummary,
}

impl Dataset {
    /// # load the dataset from a directory
    /// expects `cars.json`, `races.json` and `experiments.json`. an
    /// optional `summary.json` overrides the built in navigation tree.
    ///
    /// ## Arguments
    /// * `dir` - the directory holding the documents
    ///
    /// ## Returns
    /// * `Dataset` - the loaded documents
    pub fn load(dir: &Path) -> CustomResult<Dataset> {
        let cars = read_document(&dir.join("cars.json"))?;
        let races = read_document(&dir.join("races.json"))?;
        let experiments = read_document(&dir.join("experiments.json"))?;

        let summary_path = dir.join("summary.json");
        let team_summary = if summary_path.exists() {
            read_document(&summary_path)?
        } else {
            info!(target: "dataset", "no summary.json in {}, using the built in team summary", dir.display());
            TeamSummary::builtin()
        };

        Ok(Dataset {
            cars,
            races,
            experiments,
            team_summary,
        })
    }

    /// # build a dataset from already read documents
    /// the in memory counterpart of `load`, the documents are parsed from
    /// raw json text.
    pub fn from_json_strs(
        cars: &str,
        races: &str,
        experiments: &str,
        summary: Option<&str>,
    ) -> CustomResult<Dataset> {
        Ok(Dataset {
            cars: parse_document("cars.json", cars)?,
            races: parse_document("races.json", races)?,
            experiments: parse_document("experiments.json", experiments)?,
            team_summary: match summary {
                Some(raw) => parse_document("summary.json", raw)?,
                None => TeamSummary::builtin(),
            },
        })
    }

    pub fn car(&self, car_id: &str) -> CustomResult<&Car> {
        self.cars.get(car_id).ok_or_else(|| Error::CarNotFoundError {
            car_id: car_id.to_string(),
        })
    }

    pub fn race(&self, race_id: &str) -> CustomResult<&Race> {
        self.races.get(race_id).ok_or_else(|| Error::RaceNotFoundError {
            race_id: race_id.to_string(),
        })
    }

    pub fn experiment(&self, experiment_id: &str) -> CustomResult<&Experiment> {
        self.experiments
            .get(experiment_id)
            .ok_or_else(|| Error::ExperimentNotFoundError {
                experiment_id: experiment_id.to_string(),
            })
    }

    /// # resolve the display name of a car
    pub fn racer_name(&self, car_id: &str) -> CustomResult<&str> {
        Ok(self.car(car_id)?.alias.as_str())
    }

    /// # resolve the team of a car
    /// unknown decals resolve to an empty string, only an unknown car id
    /// is an error.
    pub fn racer_team(&self, car_id: &str) -> CustomResult<&'static str> {
        Ok(self.car(car_id)?.team())
    }

    /// # cross check every id reference in the dataset
    /// returns a description of every reference that does not resolve.
    /// loading reports these up front so a render never trips over them.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        for (race_id, race) in &self.races {
            for entry in race.standings.values() {
                if !self.cars.contains_key(&entry.car_id) {
                    problems.push(format!(
                        "race {} references unknown car {}",
                        race_id, entry.car_id
                    ));
                }
            }
        }

        for (experiment_id, experiment) in &self.experiments {
            let race_ids = experiment
                .races
                .iter()
                .chain(std::iter::once(&experiment.exhibition_race));
            for race_id in race_ids {
                if !self.races.contains_key(race_id) {
                    problems.push(format!(
                        "experiment {} references unknown race {}",
                        experiment_id, race_id
                    ));
                }
            }
        }

        for (team, rounds) in self.team_summary.teams() {
            for (round, summary) in rounds {
                for experiment_id in summary.experiment_ids() {
                    if !self.experiments.contains_key(experiment_id) {
                        problems.push(format!(
                            "round {} of {} references unknown experiment {}",
                            round, team, experiment_id
                        ));
                    }
                }
            }
        }

        problems
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> CustomResult<T> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            return Err(match error.kind() {
                ErrorKind::NotFound => Error::FileDoesNotExistError {
                    path: path.display().to_string(),
                },
                ErrorKind::PermissionDenied => Error::PermissionDeniedError {
                    path: path.display().to_string(),
                },
                _ => Error::MalformedInputError {
                    path: path.display().to_string(),
                    reason: error.to_string(),
                },
            })
        }
    };

    parse_document(&path.display().to_string(), &raw)
}

fn parse_document<T: DeserializeOwned>(path: &str, raw: &str) -> CustomResult<T> {
    serde_json::from_str(raw).map_err(|error| Error::MalformedInputError {
        path: path.to_string(),
        reason: error.to_string(),
    })
}
