//! Console rendering of rankings, history and errors

use crate::types::{HistoryEntry, RankingEntry};
use console::style;

/// Capitalise the first letter of each alphabetic run and lowercase the rest
pub fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut previous_alphabetic = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if previous_alphabetic {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            result.push(c);
            previous_alphabetic = false;
        }
    }
    result
}

/// Render the ranking as `NN. Name: RRRR` cells laid out column by column
pub fn format_ranking(entries: &[RankingEntry], columns: usize) -> String {
    let name_len = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0);

    let cells: Vec<String> = entries
        .iter()
        .map(|e| {
            format!(
                "{:>2}. {:<width$}: {:>4}",
                e.position,
                title_case(&e.name),
                e.rank.trunc() as i64,
                width = name_len + 1
            )
        })
        .collect();

    layout_columns(cells, columns)
}

/// Arrange cells top-to-bottom, then left-to-right, in `columns` columns
fn layout_columns(mut cells: Vec<String>, columns: usize) -> String {
    let columns = columns.max(1);
    let padding = (columns - cells.len() % columns) % columns;
    cells.extend(std::iter::repeat(String::new()).take(padding));

    let rows = cells.len() / columns;
    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let line: Vec<&str> = cells
            .iter()
            .skip(row)
            .step_by(rows)
            .map(String::as_str)
            .collect();
        lines.push(line.join(" │ "));
    }
    lines.join("\n")
}

/// Render history as `W:L (distance)` separated by commas
pub fn format_history(entries: &[HistoryEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{} ({})", e.record, e.distance))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Terminal styling, or plain text when color is off
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn error(&self, text: &str) -> String {
        style(text)
            .red()
            .bright()
            .force_styling(self.color)
            .to_string()
    }

    pub fn prompt(&self) -> String {
        format!(
            "{} ",
            style("$").blue().bright().force_styling(self.color)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchRecord;

    fn entry(position: usize, name: &str, rank: f64) -> RankingEntry {
        RankingEntry {
            position,
            name: name.to_string(),
            rank,
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("jana"), "Jana");
        assert_eq!(title_case("MARIE-anna"), "Marie-Anna");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("čeněk"), "Čeněk");
    }

    #[test]
    fn test_ranking_row_format() {
        let entries = vec![entry(1, "jana", 1166.67), entry(2, "bo", 933.3)];
        let text = format_ranking(&entries, 1);
        assert_eq!(text, " 1. Jana : 1166\n 2. Bo   :  933");
    }

    #[test]
    fn test_ranking_fills_columns_top_to_bottom() {
        let entries: Vec<RankingEntry> = (1..=4)
            .map(|i| entry(i, &format!("p{}", i), 1000.0))
            .collect();
        let text = format_ranking(&entries, 3);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1. P1"));
        assert!(lines[0].contains(" 3. P3"));
        assert!(lines[1].starts_with(" 2. P2"));
        assert!(lines[1].ends_with(" │ "));
    }

    #[test]
    fn test_negative_rank_truncates_toward_zero() {
        let text = format_ranking(&[entry(1, "x", -12.9)], 1);
        assert_eq!(text, " 1. X :  -12");
    }

    #[test]
    fn test_history_format() {
        let entries = vec![
            HistoryEntry {
                record: MatchRecord::new("jana", "petr"),
                distance: 2,
            },
            HistoryEntry {
                record: MatchRecord::new("eva", "jana"),
                distance: 1,
            },
        ];
        assert_eq!(format_history(&entries), "jana:petr (2), eva:jana (1)");
    }

    #[test]
    fn test_palette_without_color() {
        let palette = Palette::new(false);
        assert_eq!(palette.error("oops"), "oops");
        assert_eq!(palette.prompt(), "$ ");
    }

    #[test]
    fn test_palette_with_color() {
        let palette = Palette::new(true);
        let error = palette.error("oops");
        assert_ne!(error, "oops");
        assert_eq!(console::strip_ansi_codes(&error), "oops");

        let prompt = palette.prompt();
        assert_ne!(prompt, "$ ");
        assert_eq!(console::strip_ansi_codes(&prompt), "$ ");
    }
}
