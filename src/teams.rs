// Team codes accepted by the prediction service

pub const TEAMS: [&str; 32] = [
    "ARI", "ATL", "BAL", "BUF", "CAR", "CHI", "CIN", "CLE", "DAL", "DEN", "DET", "GB", "HOU",
    "IND", "JAX", "KC", "LV", "LAC", "LAR", "MIA", "MIN", "NE", "NO", "NYG", "NYJ", "PHI", "PIT",
    "SEA", "SF", "TB", "TEN", "WAS",
];

pub const DEFAULT_HOME: &str = "KC";
pub const DEFAULT_AWAY: &str = "BUF";

/// Trims and upper-cases a team code.
pub fn normalize_team(code: &str) -> String {
    code.trim().to_uppercase()
}

pub fn is_known(code: &str) -> bool {
    let code = normalize_team(code);
    TEAMS.contains(&code.as_str())
}
