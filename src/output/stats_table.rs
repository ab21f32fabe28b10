//! Text tables for a user's round history and summary

use crate::game::{GameRound, GameStatistics};
use colored::Colorize;

const COLUMNS: [(&str, usize); 5] = [
    ("Date", 10),
    ("Word", 6),
    ("Last Guess", 10),
    ("Guesses", 7),
    ("Type", 6),
];

/// One line per round, preceded by a header; solved rounds are highlighted
#[must_use]
pub fn rounds_table(rounds: &[GameRound]) -> Vec<String> {
    let header = COLUMNS
        .iter()
        .map(|&(title, width)| format!(" {title:^width$} "))
        .collect::<String>();
    let rule = COLUMNS
        .iter()
        .map(|&(_, width)| format!(" {} ", "═".repeat(width)))
        .collect::<String>();

    let mut lines = vec![
        header.black().bold().italic().on_white().to_string(),
        rule.cyan().to_string(),
    ];

    for round in rounds {
        let date = round
            .date()
            .map_or_else(String::new, |d| d.format("%Y-%m-%d").to_string());
        let cells = [
            date,
            round.word().to_string(),
            round.last_guess().unwrap_or_default().to_string(),
            round.guess_count().to_string(),
            round.round_type().to_string(),
        ];
        let row = cells
            .iter()
            .zip(COLUMNS)
            .map(|(cell, (_, width))| format!(" {cell:^width$} "))
            .collect::<String>();

        lines.push(if round.is_success() {
            row.black().on_green().to_string()
        } else {
            row
        });
    }

    lines
}

/// Label/value lines for the summary figures
#[must_use]
pub fn summary_table(stats: &GameStatistics) -> Vec<String> {
    let rows = [
        ("Games started", stats.started.to_string()),
        ("Games completed", stats.completed.to_string()),
        ("Games won", stats.won.to_string()),
        ("Games won %", format!("{:.1}", stats.win_percentage())),
        ("Average Guesses", format!("{:.2}", stats.average_guesses())),
    ];

    rows.iter()
        .map(|(label, value)| {
            format!(
                "{}{}",
                format!(" {label:<16} ").black().bold().on_white(),
                format!(" {value:>8} ").black().on_magenta()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoundType;
    use chrono::NaiveDate;

    #[test]
    fn table_has_header_rule_and_one_row_per_round() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        let mut won = GameRound::with_target(1, 1, "train", Some(date), RoundType::Daily);
        won.record_guess("crate").unwrap();
        won.record_guess("train").unwrap();
        let open = GameRound::with_target(2, 1, "crate", None, RoundType::Random);

        let lines = rounds_table(&[won, open]);

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Last Guess"));
        assert!(lines[2].contains("2024-05-17"));
        assert!(lines[2].contains("train"));
        assert!(lines[2].contains("DAILY"));
        assert!(lines[3].contains("RANDOM"));
        assert!(lines[3].contains(" 0 "));
    }

    #[test]
    fn summary_lists_every_figure() {
        let stats = GameStatistics {
            started: 4,
            completed: 2,
            won: 1,
            total_guesses_completed: 9,
        };
        let lines = summary_table(&stats);

        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("Games started"));
        assert!(lines[3].contains("50.0"));
        assert!(lines[4].contains("4.50"));
    }
}
