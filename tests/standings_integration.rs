use league_table_lib::{compute_standings, generate_schedule, CompetitionType, Game, GameResult, ScheduleConfig, StandingRow, Team};

fn single_leg() -> ScheduleConfig {
    ScheduleConfig { legs: 1, ..Default::default() }
}

fn set_score(games: &mut [Game], home: &str, away: &str, score: (u16, u16)) {
    let game = games.iter_mut()
        .find(|g| g.home_id == home && g.away_id == away)
        .unwrap_or_else(|| panic!("no game {home}-{away}"));
    game.set_score(score.0, score.1);
}

fn row<'a>(rows: &'a [StandingRow], id: &str) -> &'a StandingRow {
    rows.iter().find(|r| r.team_id == id).unwrap()
}

fn check_invariants(rows: &[StandingRow]) {
    for row in rows {
        assert_eq!(row.points, 3 * row.won + row.drawn, "{}", row.team_id);
        assert_eq!(row.played, row.won + row.drawn + row.lost, "{}", row.team_id);
        assert_eq!(row.goal_difference, i32::from(row.goals_for) - i32::from(row.goals_against));
        assert!(row.last_five.len() <= 5);
    }
}

#[test]
fn four_team_league_by_hand() {
    let teams = Team::build_many(&["A", "B", "C", "D"]);
    let mut games = generate_schedule(&teams, CompetitionType::League, &single_leg());

    set_score(&mut games, "A", "D", (2, 0));
    set_score(&mut games, "B", "C", (1, 1));
    set_score(&mut games, "A", "C", (0, 1));
    set_score(&mut games, "D", "B", (3, 3));
    set_score(&mut games, "A", "B", (2, 2));
    set_score(&mut games, "C", "D", (0, 4));

    let rows = compute_standings(&teams, &games);
    check_invariants(&rows);

    // A: W L D = 4 pts, 4-3. C: D W L = 4 pts, 2-5. B: D D D = 3 pts. D: L D W = 4 pts, 7-5.
    let order: Vec<&str> = rows.iter().map(|r| r.team_id.as_str()).collect();
    assert_eq!(order, vec!["D", "A", "C", "B"]);

    let a = row(&rows, "A");
    assert_eq!((a.played, a.won, a.drawn, a.lost, a.goals_for, a.goals_against, a.points), (3, 1, 1, 1, 4, 3, 4));
    assert_eq!(a.last_five, vec![GameResult::Draw, GameResult::Loss, GameResult::Win]);

    let d = row(&rows, "D");
    assert_eq!((d.goal_difference, d.points), (2, 4));
    assert_eq!(d.form(), "WDL");

    let b = row(&rows, "B");
    assert_eq!((b.drawn, b.points, b.goal_difference), (3, 3, 0));
}

#[test]
fn unplayed_schedule_gives_zero_rows_in_registry_order() {
    let teams = Team::build_many(&["E", "B", "D", "A", "C"]);
    let games = generate_schedule(&teams, CompetitionType::League, &ScheduleConfig::default());

    let rows = compute_standings(&teams, &games);
    let order: Vec<&str> = rows.iter().map(|r| r.team_id.as_str()).collect();
    assert_eq!(order, vec!["E", "B", "D", "A", "C"]);
    assert!(rows.iter().all(|r| *r == StandingRow::build(&r.team_id, &r.team_name, r.is_human)));
}

#[test]
fn identical_records_keep_registry_order() {
    let teams = Team::build_many(&["X", "Y", "Z", "W"]);
    let mut games = generate_schedule(&teams, CompetitionType::League, &single_leg());
    for game in games.iter_mut() {
        game.set_score(1, 1);
    }

    let rows = compute_standings(&teams, &games);
    let order: Vec<&str> = rows.iter().map(|r| r.team_id.as_str()).collect();
    assert_eq!(order, vec!["X", "Y", "Z", "W"]);
    check_invariants(&rows);
}

#[test]
fn standings_are_idempotent() {
    let teams = Team::build_many(&["A", "B", "C", "D", "E", "F"]);
    let mut games = generate_schedule(&teams, CompetitionType::League, &ScheduleConfig::default());
    for (i, game) in games.iter_mut().enumerate().filter(|(i, _)| i % 3 != 0) {
        let i = u16::try_from(i).unwrap();
        game.set_score(i % 4, (i * 7) % 3);
    }

    let first = compute_standings(&teams, &games);
    let second = compute_standings(&teams, &games);
    assert_eq!(first, second);
    check_invariants(&first);
}

#[test]
fn form_shows_the_latest_five_results() {
    let teams = Team::build_many(&["A", "B"]);
    let config = ScheduleConfig { legs: 7, ..Default::default() };
    let mut games = generate_schedule(&teams, CompetitionType::League, &config);
    assert_eq!(games.len(), 7);

    // A's results by round: W W L D W L D.
    let a_scores = [(1, 0), (2, 0), (0, 1), (1, 1), (3, 0), (0, 2), (2, 2)];
    for (game, (a_goals, b_goals)) in games.iter_mut().zip(a_scores) {
        if game.home_id == "A" {
            game.set_score(a_goals, b_goals);
        }
        else {
            game.set_score(b_goals, a_goals);
        }
    }

    let rows = compute_standings(&teams, &games);
    let a = row(&rows, "A");
    assert_eq!(a.played, 7);
    assert_eq!(a.form(), "DLWDL");
    assert_eq!(row(&rows, "B").form(), "DWLDW");
}

#[test]
fn huge_scores_do_not_panic() {
    let teams = Team::build_many(&["A", "B"]);
    let mut games = generate_schedule(&teams, CompetitionType::League, &ScheduleConfig::default());
    set_score(&mut games, "A", "B", (40000, 0));
    set_score(&mut games, "B", "A", (0, 40000));

    let rows = compute_standings(&teams, &games);
    let a = row(&rows, "A");
    assert_eq!(a.goals_for, u16::MAX);
    assert_eq!(a.goal_difference, i32::from(u16::MAX));
    assert_eq!((a.played, a.won, a.points), (2, 2, 6));
    assert_eq!(row(&rows, "B").goals_against, u16::MAX);
    assert_eq!(rows[0].team_id, "A");
}
