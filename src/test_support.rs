use crate::dataset::PlayerRecord;

pub fn player(
    name: &str,
    team: &str,
    category: &str,
    position: &str,
    age: f64,
    goals: f64,
) -> PlayerRecord {
    PlayerRecord {
        name: name.to_string(),
        team: team.to_string(),
        category: category.to_string(),
        position: position.to_string(),
        age,
        height: 175.0,
        rating: 1200.0,
        appearances: 20.0,
        goals,
        goals_per_match: goals / 20.0,
        starts: 15.0,
        yellow_cards: 2.0,
        goals_contribution: goals,
        points_contribution: 10.0,
        contextual_performance: 50.0,
        defensive_performance: 5.0,
        total_impact: 40.0,
    }
}
