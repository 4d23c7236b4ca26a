use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::CustomResult;
use crate::modules::dataset::Dataset;

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct Race {
    pub standings: BTreeMap<String, StandingEntry>,
}

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct StandingEntry {
    pub car_id: String,
    pub finished: bool,
    pub elapsed_time: f64,
    pub max_progress: f64,
}

impl StandingEntry {
    pub fn outcome(&self) -> RaceOutcome {
        if self.finished {
            RaceOutcome::Finished {
                elapsed_time: self.elapsed_time,
            }
        } else {
            RaceOutcome::DidNotFinish
        }
    }
}

/// how a racer ended the race. the `elapsed_time` stored on an entry that
/// did not finish is garbage, converting to this enum first makes reading
/// it impossible.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RaceOutcome {
    Finished { elapsed_time: f64 },
    DidNotFinish,
}

impl RaceOutcome {
    pub fn elapsed_time(&self) -> Option<f64> {
        match self {
            RaceOutcome::Finished { elapsed_time } => Some(*elapsed_time),
            RaceOutcome::DidNotFinish => None,
        }
    }
}

/// one row of the ranked result table. recomputed on every request,
/// never stored.
#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct RankedStandingsRow {
    pub position: i32,
    pub racer_name: String,
    pub team_name: String,
    pub elapsed_time: Option<f64>,
    pub distance: f64,
}

impl Race {
    /// # get the ranked standings of the race
    /// the raw per-car entries are resorted unconditionally, the order of
    /// the underlying mapping does not matter. positions are sequential,
    /// equal values are not collapsed into a shared position.
    ///
    /// ## Arguments
    /// * `dataset` - the loaded documents, used to resolve names and teams
    ///
    /// ## Returns
    /// * `Vec<RankedStandingsRow>` - the ranked rows, best first
    pub fn standings(&self, dataset: &Dataset) -> CustomResult<Vec<RankedStandingsRow>> {
        let mut entries: Vec<&StandingEntry> = self.standings.values().collect();
        entries.sort_by(|a, b| compare_entries(a, b));

        let mut rows = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let car = dataset.car(&entry.car_id)?;

            rows.push(RankedStandingsRow {
                position: index as i32 + 1,
                racer_name: car.alias.clone(),
                team_name: car.team().to_string(),
                elapsed_time: entry.outcome().elapsed_time(),
                distance: entry.max_progress,
            });
        }

        Ok(rows)
    }
}

/// finished racers always outrank unfinished ones. among the finished the
/// lowest elapsed time wins, among the unfinished the greatest distance
/// wins. distance also breaks ties between equal times.
fn compare_entries(a: &StandingEntry, b: &StandingEntry) -> Ordering {
    match (a.outcome(), b.outcome()) {
        (
            RaceOutcome::Finished { elapsed_time: time_a },
            RaceOutcome::Finished { elapsed_time: time_b },
        ) => time_a
            .partial_cmp(&time_b)
            .unwrap_or(Ordering::Equal)
            .then_with(|| compare_distance_desc(a, b)),
        (RaceOutcome::Finished { .. }, RaceOutcome::DidNotFinish) => Ordering::Less,
        (RaceOutcome::DidNotFinish, RaceOutcome::Finished { .. }) => Ordering::Greater,
        (RaceOutcome::DidNotFinish, RaceOutcome::DidNotFinish) => compare_distance_desc(a, b),
    }
}

fn compare_distance_desc(a: &StandingEntry, b: &StandingEntry) -> Ordering {
    b.max_progress
        .partial_cmp(&a.max_progress)
        .unwrap_or(Ordering::Equal)
}

/// format an elapsed time for display, one decimal. racers without a
/// recorded completion time show as DNF.
pub fn format_time(elapsed_time: Option<f64>) -> String {
    match elapsed_time {
        Some(time) => format!("{:.1}s", time),
        None => "DNF".to_string(),
    }
}

/// format a travelled distance for display, one decimal
pub fn format_distance(distance: f64) -> String {
    format!("{:.1}m", distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::modules::dataset::Dataset;

    const CARS: &str = r#"{
        "0x0a": {"alias": "Veloz", "front_decal_path": "decals/wolf-69.png"},
        "0x0b": {"alias": "Lento", "front_decal_path": "decals/bread-search.png"},
        "0x0c": {"alias": "Teimoso", "front_decal_path": "decals/quimera.png"},
        "0x0d": {"alias": "Perdido", "front_decal_path": "decals/unknown.png"}
    }"#;

    const RACES: &str = r#"{
        "race-1": {"standings": {
            "0x0a": {"car_id": "0x0a", "finished": true, "elapsed_time": 10.0, "max_progress": 500.0},
            "0x0b": {"car_id": "0x0b", "finished": false, "elapsed_time": 0.0, "max_progress": 800.0},
            "0x0c": {"car_id": "0x0c", "finished": true, "elapsed_time": 12.5, "max_progress": 500.0},
            "0x0d": {"car_id": "0x0d", "finished": false, "elapsed_time": 99.0, "max_progress": 120.0}
        }},
        "race-2": {"standings": {
            "0x0a": {"car_id": "0x0a", "finished": true, "elapsed_time": 31.0, "max_progress": 500.0},
            "0x0b": {"car_id": "0x0b", "finished": true, "elapsed_time": 31.0, "max_progress": 500.0}
        }},
        "race-3": {"standings": {
            "0x0a": {"car_id": "0x0a", "finished": true, "elapsed_time": 10.0, "max_progress": 500.0},
            "0x0e": {"car_id": "0x0e", "finished": true, "elapsed_time": 11.0, "max_progress": 400.0}
        }}
    }"#;

    const EXPERIMENTS: &str = r#"{}"#;

    fn dataset() -> Dataset {
        Dataset::from_json_strs(CARS, RACES, EXPERIMENTS, None).unwrap()
    }

    fn rows(race_id: &str) -> Vec<RankedStandingsRow> {
        let dataset = dataset();
        dataset.race(race_id).unwrap().standings(&dataset).unwrap()
    }

    #[test]
    fn positions_are_sequential_and_gapless() {
        let rows = rows("race-1");
        assert_eq!(rows.len(), 4);
        let positions: Vec<i32> = rows.iter().map(|row| row.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
    }

    #[test]
    fn finished_racers_outrank_unfinished_regardless_of_distance() {
        let rows = rows("race-1");
        // the unfinished car travelled the farthest but still ranks behind
        // both finishers
        assert_eq!(rows[0].racer_name, "Veloz");
        assert_eq!(rows[1].racer_name, "Teimoso");
        assert_eq!(rows[2].racer_name, "Lento");
        assert_eq!(rows[3].racer_name, "Perdido");
    }

    #[test]
    fn faster_time_wins_among_finishers() {
        let rows = rows("race-1");
        assert!(rows[0].elapsed_time.unwrap() < rows[1].elapsed_time.unwrap());
    }

    #[test]
    fn unfinished_racers_rank_by_distance() {
        let rows = rows("race-1");
        assert_eq!(rows[2].distance, 800.0);
        assert_eq!(rows[3].distance, 120.0);
    }

    #[test]
    fn unfinished_elapsed_time_is_absent_even_when_stored() {
        let rows = rows("race-1");
        // the source document stores 99.0 for the unfinished car
        assert_eq!(rows[3].elapsed_time, None);
    }

    #[test]
    fn tied_racers_get_distinct_sequential_positions() {
        let rows = rows("race-2");
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[1].position, 2);
    }

    #[test]
    fn names_and_teams_are_resolved() {
        let rows = rows("race-1");
        assert_eq!(rows[0].racer_name, "Veloz");
        assert_eq!(rows[0].team_name, "Machos Alfanuméricos");
        assert_eq!(rows[3].team_name, "");
    }

    #[test]
    fn unknown_car_reference_fails_the_whole_table() {
        let dataset = dataset();
        let result = dataset.race("race-3").unwrap().standings(&dataset);
        assert_eq!(
            result,
            Err(Error::CarNotFoundError {
                car_id: "0x0e".to_string()
            })
        );
    }

    #[test]
    fn display_formatting() {
        assert_eq!(format_distance(123.45), "123.5m");
        assert_eq!(format_time(Some(10.0)), "10.0s");
        assert_eq!(format_time(None), "DNF");
    }
}
