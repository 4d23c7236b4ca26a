use serde::{Deserialize, Serialize};

/// the closed set of known decal filenames and the team each one marks.
/// cars carrying any other decal belong to no team.
const DECAL_TEAMS: [(&str, &str); 7] = [
    ("question-mark.png", "Bem Aleatório"),
    ("bread-search.png", "BFS"),
    ("quimera.png", "Quimera"),
    ("wolf-69.png", "Machos Alfanuméricos"),
    ("marcha-atras.png", "Marcha-atrás"),
    ("meta-morfada.png", "Meta-morfada"),
    ("astrogoblin.png", "Viúvas do Funhaus"),
];

#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct Car {
    pub alias: String,
    pub front_decal_path: String,
}

impl Car {
    /// # get the team of the car
    /// the team is encoded in the filename of the front decal image.
    /// the directory prefix is stripped and the filename is matched
    /// against the known decal set.
    ///
    /// ## Returns
    /// * `&str` - the team name, or an empty string for unknown decals
    pub fn team(&self) -> &'static str {
        let filename = self
            .front_decal_path
            .rsplit('/')
            .next()
            .unwrap_or_default();

        for (decal, team) in DECAL_TEAMS {
            if filename.ends_with(decal) {
                return team;
            }
        }

        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(decal_path: &str) -> Car {
        Car {
            alias: "0xcar".to_string(),
            front_decal_path: decal_path.to_string(),
        }
    }

    #[test]
    fn team_is_resolved_from_decal_filename() {
        assert_eq!(car("assets/decals/wolf-69.png").team(), "Machos Alfanuméricos");
        assert_eq!(car("question-mark.png").team(), "Bem Aleatório");
        assert_eq!(car("decals/bread-search.png").team(), "BFS");
        assert_eq!(car("decals/quimera.png").team(), "Quimera");
        assert_eq!(car("decals/marcha-atras.png").team(), "Marcha-atrás");
        assert_eq!(car("decals/meta-morfada.png").team(), "Meta-morfada");
        assert_eq!(car("decals/astrogoblin.png").team(), "Viúvas do Funhaus");
    }

    #[test]
    fn unknown_decal_maps_to_no_team() {
        assert_eq!(car("assets/decals/plain-white.png").team(), "");
        assert_eq!(car("").team(), "");
    }
}
