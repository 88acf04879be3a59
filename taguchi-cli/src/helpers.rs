//! Shared table-rendering helpers, built on `prettytable`.

use prettytable::format::{FormatBuilder, LinePosition, LineSeparator};
use prettytable::{cell, row, Table};
use taguchi::{MainEffect, Run};

/// A bare-bones table format matching the rest of the CLI's tabular output:
/// space-separated columns, a single title-row rule.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.set_format(
        FormatBuilder::new()
            .column_separator(' ')
            .separator(LinePosition::Title, LineSeparator::new('-', '+', ' ', ' '))
            .build(),
    );
    table
}

/// Renders a run schedule as `run | <factor> | <factor> | ...`.
pub fn runs_table(runs: &[Run]) -> Table {
    let mut table = create_table();
    let Some(first) = runs.first() else {
        return table;
    };

    let mut titles = row![c => "run"];
    for (name, _) in first.assignments() {
        titles.add_cell(cell!(c->name));
    }
    table.set_titles(titles);

    for run in runs {
        let mut row = row![r => &format!("{}", run.run_id())];
        for (_, value) in run.assignments() {
            row.add_cell(cell!(value));
        }
        table.add_row(row);
    }
    table
}

/// Renders main effects as `factor | range | mean(level 0) | mean(level 1) | ...`.
pub fn effects_table(effects: &[MainEffect]) -> Table {
    let mut table = create_table();
    let max_levels = effects.iter().map(|e| e.level_means().len()).max().unwrap_or(0);

    let mut titles = row![c => "factor", "range"];
    for i in 0..max_levels {
        titles.add_cell(cell!(c->&format!("level {i}")));
    }
    table.set_titles(titles);

    for effect in effects {
        let mut row = row![r => effect.factor(), &format!("{:.6}", effect.range())];
        for mean in effect.level_means() {
            row.add_cell(cell!(r->&format!("{mean:.6}")));
        }
        table.add_row(row);
    }
    table
}
