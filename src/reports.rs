//! The seven roster reports and the presenter that prints them.
//!
//! Each report is a pure function `&PlayerTable -> ReportView`; nothing here
//! writes back to the table, and formatting is applied only when a view is
//! rendered. Reports print in their declared 1-7 order.

use std::cmp::Ordering;
use std::io::Write;

use anyhow::Result;
use itertools::Itertools as _;

use crate::{
    format::{format_brl, format_number},
    roster::{NAME_COLUMN, PlayerRecord, PlayerTable, SALARY_COLUMN, TEAM_COLUMN},
    table::{Alignment, render_table},
};

pub const HIGH_SALARY_THRESHOLD: f64 = 200_000.0;
pub const REGION_STATE: &str = "MG";

const COUNT_COLUMN: &str = "Quantidade_Jogadores";
const MEAN_COLUMN: &str = "Media_Salarial";
const RULE_WIDTH: usize = 50;

/// One computed cell. Rendering decisions (currency shape, `NaN` for
/// missing) stay out of the generators so report logic can be asserted on
/// values rather than captured text.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(Option<f64>),
    Currency(Option<f64>),
    Count(usize),
}

impl Cell {
    fn alignment(&self) -> Alignment {
        match self {
            Cell::Text(_) => Alignment::Left,
            Cell::Number(_) | Cell::Currency(_) | Cell::Count(_) => Alignment::Right,
        }
    }

    fn render(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Number(Some(value)) => format_number(*value),
            Cell::Currency(Some(value)) => format_brl(*value),
            Cell::Number(None) | Cell::Currency(None) => "NaN".to_string(),
            Cell::Count(count) => count.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ReportView {
    pub fn render(&self) -> String {
        let alignments = match self.rows.first() {
            Some(row) => row.iter().map(Cell::alignment).collect::<Vec<_>>(),
            None => vec![Alignment::Left; self.headers.len()],
        };
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().map(Cell::render).collect())
            .collect::<Vec<Vec<String>>>();
        render_table(&self.headers, &rows, &alignments)
    }
}

/// 1. Name and team of players earning above the threshold. Missing salary
/// never qualifies.
pub fn high_earners(table: &PlayerTable) -> ReportView {
    let rows = table
        .players()
        .iter()
        .filter(|p| p.salary.is_some_and(|salary| salary > HIGH_SALARY_THRESHOLD))
        .map(|p| vec![Cell::Text(p.name.clone()), Cell::Text(p.team.clone())])
        .collect();
    ReportView {
        title: "1. Jogadores com salário acima de R$ 200.000,00:".to_string(),
        headers: vec![NAME_COLUMN.to_string(), TEAM_COLUMN.to_string()],
        rows,
    }
}

/// 2. Name and salary of players whose state is exactly `MG`.
pub fn minas_gerais_roster(table: &PlayerTable) -> ReportView {
    let rows = table
        .players()
        .iter()
        .filter(|p| p.state == REGION_STATE)
        .map(|p| vec![Cell::Text(p.name.clone()), Cell::Number(p.salary)])
        .collect();
    ReportView {
        title: "2. Jogadores dos times de Minas Gerais (MG):".to_string(),
        headers: vec![NAME_COLUMN.to_string(), SALARY_COLUMN.to_string()],
        rows,
    }
}

/// 3. Players whose name contains the letter `u`, case-insensitive. A
/// missing name is excluded rather than erroring.
pub fn names_with_u(table: &PlayerTable) -> ReportView {
    let rows = table
        .players()
        .iter()
        .filter(|p| !p.name.is_empty() && p.name.to_lowercase().contains('u'))
        .map(|p| vec![Cell::Text(p.name.clone()), Cell::Text(p.team.clone())])
        .collect();
    ReportView {
        title: "3. Jogadores cujo nome contém a letra 'u':".to_string(),
        headers: vec![NAME_COLUMN.to_string(), TEAM_COLUMN.to_string()],
        rows,
    }
}

/// 4. Full roster sorted by salary descending, missing salaries last.
pub fn by_salary_desc(table: &PlayerTable) -> ReportView {
    let mut players = table.players().iter().collect::<Vec<_>>();
    players.sort_by(|a, b| cmp_salary_desc(a.salary, b.salary));
    ReportView {
        title: "4. Jogadores ordenados por Salário (Decrescente):".to_string(),
        headers: roster_headers(),
        rows: roster_rows(&players),
    }
}

/// 5. Full roster sorted by team ascending, then salary descending within
/// each team. Missing values rank last independently per key.
pub fn by_team_then_salary(table: &PlayerTable) -> ReportView {
    let mut players = table.players().iter().collect::<Vec<_>>();
    players.sort_by(|a, b| {
        cmp_team_asc(&a.team, &b.team).then_with(|| cmp_salary_desc(a.salary, b.salary))
    });
    ReportView {
        title: "5. Jogadores ordenados por Time (Crescente) e Salário (Decrescente):".to_string(),
        headers: roster_headers(),
        rows: roster_rows(&players),
    }
}

/// 6. Player count per distinct team, blank team included as its own group.
pub fn roster_size_by_team(table: &PlayerTable) -> ReportView {
    let counts = table.players().iter().map(|p| p.team.as_str()).counts();
    let rows = counts
        .into_iter()
        .sorted_by(|(a, _), (b, _)| cmp_team_asc(a, b))
        .map(|(team, count)| vec![Cell::Text(team.to_string()), Cell::Count(count)])
        .collect();
    ReportView {
        title: "6. Quantidade de jogadores por time:".to_string(),
        headers: vec![TEAM_COLUMN.to_string(), COUNT_COLUMN.to_string()],
        rows,
    }
}

/// 7. Mean of non-missing salaries per team. A team with only missing
/// salaries has no mean and renders as `NaN`.
pub fn average_salary_by_team(table: &PlayerTable) -> ReportView {
    let groups = table
        .players()
        .iter()
        .map(|p| (p.team.as_str(), p.salary))
        .into_group_map();
    let rows = groups
        .into_iter()
        .sorted_by(|(a, _), (b, _)| cmp_team_asc(a, b))
        .map(|(team, salaries)| {
            let paid = salaries.into_iter().flatten().collect::<Vec<_>>();
            let mean = (!paid.is_empty()).then(|| paid.iter().sum::<f64>() / paid.len() as f64);
            vec![Cell::Text(team.to_string()), Cell::Currency(mean)]
        })
        .collect();
    ReportView {
        title: "7. Média salarial por time:".to_string(),
        headers: vec![TEAM_COLUMN.to_string(), MEAN_COLUMN.to_string()],
        rows,
    }
}

pub fn all_reports(table: &PlayerTable) -> Vec<ReportView> {
    vec![
        high_earners(table),
        minas_gerais_roster(table),
        names_with_u(table),
        by_salary_desc(table),
        by_team_then_salary(table),
        roster_size_by_team(table),
        average_salary_by_team(table),
    ]
}

/// Writes all seven reports in order, separated by rule lines.
pub fn print_reports<W: Write>(out: &mut W, table: &PlayerTable) -> Result<()> {
    write_rule(out)?;
    for view in all_reports(table) {
        writeln!(out, "{}", view.title)?;
        out.write_all(view.render().as_bytes())?;
        write_rule(out)?;
    }
    Ok(())
}

fn write_rule<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out)?;
    Ok(())
}

fn roster_headers() -> Vec<String> {
    vec![
        NAME_COLUMN.to_string(),
        SALARY_COLUMN.to_string(),
        TEAM_COLUMN.to_string(),
    ]
}

fn roster_rows(players: &[&PlayerRecord]) -> Vec<Vec<Cell>> {
    players
        .iter()
        .map(|p| {
            vec![
                Cell::Text(p.name.clone()),
                Cell::Number(p.salary),
                Cell::Text(p.team.clone()),
            ]
        })
        .collect()
}

/// Descending by value; missing ranks after every number.
fn cmp_salary_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(left), Some(right)) => right.total_cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Ascending lexical; blank (missing) team ranks last.
fn cmp_team_asc(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (false, false) => a.cmp(b),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}
