use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CustomResult, Error};

pub type SummaryTree = BTreeMap<String, BTreeMap<String, RoundSummary>>;

/// what a team did in one round: an optional training experiment and an
/// optional list of simulation experiments, each with a video recording.
/// this is navigation data, nothing in it is derived.
#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct RoundSummary {
    pub evolution_exp: String,
    pub evolution_video: String,
    pub simulation_exp: Vec<String>,
    pub simulation_video: String,
}

impl RoundSummary {
    /// every experiment id this round points at
    pub fn experiment_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        if !self.evolution_exp.is_empty() {
            ids.push(self.evolution_exp.as_str());
        }
        ids.extend(self.simulation_exp.iter().map(|id| id.as_str()));
        ids
    }
}

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
#[serde(transparent)]
pub struct TeamSummary {
    teams: SummaryTree,
}

impl TeamSummary {
    pub fn new(teams: SummaryTree) -> TeamSummary {
        TeamSummary { teams }
    }

    pub fn teams(&self) -> &SummaryTree {
        &self.teams
    }

    /// # get the summary of one round of one team
    ///
    /// ## Arguments
    /// * `team` - the team name as shown in the navigation
    /// * `round` - the round name within that team
    ///
    /// ## Returns
    /// * `&RoundSummary` - the round, or RoundNotFoundError
    pub fn round(&self, team: &str, round: &str) -> CustomResult<&RoundSummary> {
        self.teams
            .get(team)
            .and_then(|rounds| rounds.get(round))
            .ok_or_else(|| Error::RoundNotFoundError {
                team: team.to_string(),
                round: round.to_string(),
            })
    }

    /// # the built in navigation tree
    /// used whenever no summary document is supplied with the dataset.
    pub fn builtin() -> TeamSummary {
        fn round(
            name: &str,
            evolution_exp: &str,
            evolution_video: &str,
            simulation_exp: &[&str],
            simulation_video: &str,
        ) -> BTreeMap<String, RoundSummary> {
            let mut rounds = BTreeMap::new();
            rounds.insert(
                name.to_string(),
                RoundSummary {
                    evolution_exp: evolution_exp.to_string(),
                    evolution_video: evolution_video.to_string(),
                    simulation_exp: simulation_exp.iter().map(|id| id.to_string()).collect(),
                    simulation_video: simulation_video.to_string(),
                },
            );
            rounds
        }

        const SIMULATION_EXPS: [&str; 2] = ["0x00008", "0x00009"];
        const SIMULATION_VIDEO: &str = "https://youtu.be/_pKLgo6hEVM";

        let mut teams = BTreeMap::new();
        teams.insert(
            "População inicial".to_string(),
            round("Treino 0", "0x00000", "https://youtu.be/XcK_wWTky7Y", &[], ""),
        );
        teams.insert(
            "Bem Aleatório".to_string(),
            round("Treino 1", "0x00006", "https://youtu.be/TUP7-_piQ-w", &SIMULATION_EXPS, SIMULATION_VIDEO),
        );
        teams.insert(
            "BFS".to_string(),
            round("Treino 1", "0x00005", "https://youtu.be/h4Jt8J1bpzs", &SIMULATION_EXPS, SIMULATION_VIDEO),
        );
        teams.insert(
            "Machos Alfanuméricos".to_string(),
            round("Treino 1", "0x00001", "https://youtu.be/ptbGXLUzOMg", &SIMULATION_EXPS, SIMULATION_VIDEO),
        );
        teams.insert(
            "Marcha-atrás".to_string(),
            round("Treino 1", "0x00007", "https://youtu.be/xT-9g-NQevM", &SIMULATION_EXPS, SIMULATION_VIDEO),
        );
        teams.insert(
            "Meta-morfada".to_string(),
            round("Treino 1", "0x00004", "https://youtu.be/hQToGi5qV8A", &SIMULATION_EXPS, SIMULATION_VIDEO),
        );
        teams.insert(
            "Quimera".to_string(),
            round("Treino 1", "0x00003", "https://youtu.be/jkQdf2Qg4Vo", &SIMULATION_EXPS, SIMULATION_VIDEO),
        );
        teams.insert(
            "Viúvas do Funhaus".to_string(),
            round("Treino 1", "0x00002", "https://youtu.be/zPKnj4imBEk", &SIMULATION_EXPS, SIMULATION_VIDEO),
        );

        TeamSummary { teams }
    }
}
