//! Plain-text rendering of transition tables.

use crate::core::{Signal, State};
use crate::matrix::TransitionMatrix;
use std::fmt;

impl<S, G> fmt::Display for TransitionMatrix<S, G>
where
    S: State<G> + Clone,
    G: Signal + fmt::Display,
{
    /// Render as an aligned `Signal | state...` table, one row per signal.
    /// Cells without a transition stay blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows: Vec<Vec<String>> = Vec::with_capacity(self.signals().len() + 1);
        rows.push(
            std::iter::once("Signal".to_string())
                .chain(self.states().iter().map(|s| s.name().to_string()))
                .collect(),
        );

        for signal in self.signals() {
            let mut row = vec![signal.to_string()];
            row.extend(self.states().iter().map(|state| {
                self.target(state, signal)
                    .map(|target| target.name().to_string())
                    .unwrap_or_default()
            }));
            rows.push(row);
        }

        let widths: Vec<usize> = (0..rows[0].len())
            .map(|column| {
                rows.iter()
                    .map(|row| row[column].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write_row(f, &rows[0], &widths)?;
        let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;
        for row in &rows[1..] {
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    writeln!(f, "{}", line.join(" | ").trim_end())
}
