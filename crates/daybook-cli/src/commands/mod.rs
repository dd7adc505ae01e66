pub mod completions;
pub mod config;
pub mod run;
pub mod sections;
pub mod show;

use chrono::NaiveDate;
use clap::Args;
use daybook_core::{
    parse_date, Clock, Config, FixedClock, Section, SystemClock, ViewOptions, Workspace,
};

/// Options shared by commands that build a workspace.
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Reference date (YYYY-MM-DD) instead of the local date
    #[arg(long, value_parser = parse_today)]
    pub today: Option<NaiveDate>,
    /// Start from sample data
    #[arg(long)]
    pub demo: bool,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

fn parse_today(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

impl SessionArgs {
    /// Reference date and a fresh workspace starting on `section` (or the
    /// configured default).
    pub fn workspace(&self, config: &Config, section: Option<Section>) -> (Workspace, NaiveDate) {
        let today = match self.today {
            Some(day) => FixedClock(day).today(),
            None => SystemClock.today(),
        };
        let section = section.unwrap_or(config.default_section);
        let ws = if self.demo || config.demo.enabled {
            Workspace::demo(section, today).with_options(ViewOptions {
                show_settled: config.calendar.show_settled,
            })
        } else {
            let mut ws = Workspace::from_config(config);
            ws.select(section);
            ws
        };
        (ws, today)
    }
}
