use roster_report::reports::{
    Cell, all_reports, average_salary_by_team, by_salary_desc, by_team_then_salary, high_earners,
    minas_gerais_roster, names_with_u, roster_size_by_team,
};
use roster_report::roster::{PlayerRecord, PlayerTable};

fn player(name: &str, team: &str, state: &str, salary: Option<f64>) -> PlayerRecord {
    PlayerRecord {
        name: name.to_string(),
        team: team.to_string(),
        state: state.to_string(),
        salary,
    }
}

fn sample_table() -> PlayerTable {
    PlayerTable::from_records(vec![
        player("Ana", "TimeA", "MG", Some(250_000.0)),
        player("Bruno", "TimeB", "SP", None),
        player("Guilherme", "TimeA", "MG", Some(180_000.0)),
        player("Lucas", "TimeC", "SP", Some(320_000.5)),
        player("", "TimeB", "RJ", Some(90_000.0)),
        player("Paula", "", "MG", None),
        player("Duda", "TimeB", "SP", Some(250_000.0)),
    ])
}

fn names(view: &roster_report::reports::ReportView) -> Vec<String> {
    view.rows
        .iter()
        .map(|row| match &row[0] {
            Cell::Text(name) => name.clone(),
            other => panic!("expected text cell, got {other:?}"),
        })
        .collect()
}

fn number_cell(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(value) => *value,
        other => panic!("expected number cell, got {other:?}"),
    }
}

#[test]
fn high_earners_keeps_only_salaries_above_threshold() {
    let view = high_earners(&sample_table());
    assert_eq!(names(&view), vec!["Ana", "Lucas", "Duda"]);
}

#[test]
fn regional_roster_matches_state_exactly() {
    let view = minas_gerais_roster(&sample_table());
    assert_eq!(names(&view), vec!["Ana", "Guilherme", "Paula"]);
    assert_eq!(view.rows[0][1], Cell::Number(Some(250_000.0)));
    assert_eq!(view.rows[2][1], Cell::Number(None));
}

#[test]
fn substring_filter_is_case_insensitive_and_skips_missing_names() {
    let view = names_with_u(&sample_table());
    let result = names(&view);
    assert_eq!(result, vec!["Bruno", "Guilherme", "Lucas", "Paula", "Duda"]);
    assert!(!result.contains(&"Ana".to_string()));
    assert!(!result.iter().any(String::is_empty));

    let upper = PlayerTable::from_records(vec![player("URSULA", "TimeD", "SP", None)]);
    assert_eq!(names(&names_with_u(&upper)), vec!["URSULA"]);
}

#[test]
fn salary_sort_is_descending_with_missing_last() {
    let view = by_salary_desc(&sample_table());
    let salaries = view
        .rows
        .iter()
        .map(|row| number_cell(&row[1]))
        .collect::<Vec<_>>();

    let first_missing = salaries
        .iter()
        .position(Option::is_none)
        .unwrap_or(salaries.len());
    for pair in salaries[..first_missing].windows(2) {
        assert!(pair[0].unwrap() >= pair[1].unwrap(), "not descending: {pair:?}");
    }
    assert!(salaries[first_missing..].iter().all(Option::is_none));
    assert_eq!(salaries[0], Some(320_000.5));
}

#[test]
fn team_sort_groups_ascending_then_salary_descending() {
    let view = by_team_then_salary(&sample_table());
    let rows = view
        .rows
        .iter()
        .map(|row| {
            let team = match &row[2] {
                Cell::Text(team) => team.clone(),
                other => panic!("expected text cell, got {other:?}"),
            };
            (team, number_cell(&row[1]))
        })
        .collect::<Vec<_>>();

    for pair in rows.windows(2) {
        let (team_a, salary_a) = &pair[0];
        let (team_b, salary_b) = &pair[1];
        if team_a == team_b {
            match (salary_a, salary_b) {
                (Some(a), Some(b)) => assert!(a >= b, "salary order broken in {team_a}"),
                (None, Some(_)) => panic!("missing salary sorted before a number in {team_a}"),
                _ => {}
            }
        } else {
            // Blank team groups after every named team.
            assert!(!team_a.is_empty(), "blank team not last");
            if !team_b.is_empty() {
                assert!(team_a < team_b, "teams not ascending: {team_a} vs {team_b}");
            }
        }
    }
    assert_eq!(rows.last().map(|(team, _)| team.as_str()), Some(""));
}

#[test]
fn roster_size_counts_every_player_once() {
    let table = sample_table();
    let view = roster_size_by_team(&table);
    let total = view
        .rows
        .iter()
        .map(|row| match row[1] {
            Cell::Count(count) => count,
            ref other => panic!("expected count cell, got {other:?}"),
        })
        .sum::<usize>();
    assert_eq!(total, table.len());

    let teams = names(&view);
    assert_eq!(teams, vec!["TimeA", "TimeB", "TimeC", ""]);
}

#[test]
fn average_salary_ignores_missing_and_formats_currency() {
    let view = average_salary_by_team(&sample_table());
    let teams = names(&view);
    assert_eq!(teams, vec!["TimeA", "TimeB", "TimeC", ""]);

    // TimeA: (250000 + 180000) / 2; TimeB excludes Bruno's missing salary.
    assert_eq!(view.rows[0][1], Cell::Currency(Some(215_000.0)));
    assert_eq!(view.rows[1][1], Cell::Currency(Some(170_000.0)));
    // Paula's team has only missing salaries.
    assert_eq!(view.rows[3][1], Cell::Currency(None));

    let rendered = view.render();
    assert!(rendered.contains("R$ 215.000,00"), "rendered:\n{rendered}");
    assert!(rendered.contains("NaN"), "rendered:\n{rendered}");
}

#[test]
fn reports_run_in_declared_order() {
    let views = all_reports(&sample_table());
    assert_eq!(views.len(), 7);
    for (idx, view) in views.iter().enumerate() {
        assert!(
            view.title.starts_with(&format!("{}.", idx + 1)),
            "unexpected title: {}",
            view.title
        );
    }
}

#[test]
fn ana_and_bruno_scenarios_hold() {
    let table = PlayerTable::from_records(vec![
        player("Ana", "TimeA", "MG", Some(250_000.0)),
        player("Bruno", "TimeB", "SP", None),
    ]);

    assert_eq!(names(&high_earners(&table)), vec!["Ana"]);
    assert_eq!(names(&minas_gerais_roster(&table)), vec!["Ana"]);
    assert_eq!(names(&names_with_u(&table)), vec!["Bruno"]);

    // Bruno's missing salary sorts last in both orderings.
    assert_eq!(names(&by_salary_desc(&table)), vec!["Ana", "Bruno"]);

    let counts = roster_size_by_team(&table);
    assert_eq!(names(&counts), vec!["TimeA", "TimeB"]);

    let means = average_salary_by_team(&table);
    assert_eq!(means.rows[1][1], Cell::Currency(None));
}
