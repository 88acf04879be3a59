//! `list-arrays` subcommand: print the orthogonal-array catalog.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use prettytable::{Cell, Row};

use crate::{helpers, GlobalConfiguration, Subcommand};

/// List the built-in orthogonal-array catalog, with each array's shape.
#[derive(Parser)]
pub struct Opts;

impl Subcommand for Opts {
    fn run(&self, cfg: &GlobalConfiguration) -> Result<ExitCode> {
        let arrays = taguchi::catalog::all();

        if cfg.json {
            let views: Vec<_> = arrays
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "name": a.name(),
                        "rows": a.rows(),
                        "cols": a.cols(),
                        "base": a.base(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
        } else {
            let mut table = helpers::create_table();
            table.set_titles(Row::new(vec![
                Cell::new("array"),
                Cell::new("rows"),
                Cell::new("cols"),
                Cell::new("base"),
            ]));
            for array in arrays {
                table.add_row(Row::new(vec![
                    Cell::new(array.name()),
                    Cell::new(&array.rows().to_string()),
                    Cell::new(&array.cols().to_string()),
                    Cell::new(&array.base().to_string()),
                ]));
            }
            table.printstd();
        }

        Ok(ExitCode::SUCCESS)
    }
}
