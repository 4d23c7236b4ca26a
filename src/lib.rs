use serde::{Deserialize, Serialize};

pub mod errors;

pub mod modules;
pub mod routes {
    pub mod experiment;
    pub mod race;
    pub mod summary;

    pub mod api {
        pub mod experiment;
        pub mod race;
    }
}

use crate::modules::models::experiment::EvolutionPoint;
use crate::modules::models::race::{format_distance, format_time, RankedStandingsRow};

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    /// # standings table
    /// render ranked standings rows as display strings, in the fixed
    /// column order position, racer, time, distance, team.
    pub fn from_standings(standings: &[RankedStandingsRow]) -> TableData {
        TableData {
            headers: vec![
                "Posição".to_string(),
                "Corredor".to_string(),
                "Tempo".to_string(),
                "Distância".to_string(),
                "Equipe".to_string(),
            ],
            rows: standings
                .iter()
                .map(|row| {
                    vec![
                        row.position.to_string(),
                        row.racer_name.to_string(),
                        format_time(row.elapsed_time),
                        format_distance(row.distance),
                        row.team_name.to_string(),
                    ]
                })
                .collect(),
        }
    }
}

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct ChartData {
    pub labels: Vec<i32>,
    pub datasets: Vec<ChartDataDataset>,
}

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct ChartDataDataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
}

impl ChartData {
    /// # distance panel of the evolution chart
    /// paired leader/pack series over the generation axis. absent pack
    /// values serialize as null so the chart skips them.
    pub fn evolution_distance(points: &[EvolutionPoint]) -> ChartData {
        ChartData {
            labels: points.iter().map(|point| point.generation).collect(),
            datasets: vec![
                ChartDataDataset {
                    label: "Top1".to_string(),
                    data: points.iter().map(|point| Some(point.top1_distance)).collect(),
                },
                ChartDataDataset {
                    label: "Top4".to_string(),
                    data: points.iter().map(|point| point.top4_distance).collect(),
                },
            ],
        }
    }

    /// # time panel of the evolution chart
    pub fn evolution_time(points: &[EvolutionPoint]) -> ChartData {
        ChartData {
            labels: points.iter().map(|point| point.generation).collect(),
            datasets: vec![ChartDataDataset {
                label: "Top1".to_string(),
                data: points.iter().map(|point| point.top1_time).collect(),
            }],
        }
    }
}
