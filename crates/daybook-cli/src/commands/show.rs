use clap::Args;
use daybook_core::{Config, Section};

use super::SessionArgs;
use crate::output;

#[derive(Args)]
pub struct ShowArgs {
    /// Section to render (habits, reading, goals, events/calendar, journal)
    pub section: Option<Section>,
    #[command(flatten)]
    pub session: SessionArgs,
}

pub fn run(args: ShowArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let (ws, today) = args.session.workspace(config, args.section);
    output::print_view(&ws.render_current(today), args.session.json)
}
