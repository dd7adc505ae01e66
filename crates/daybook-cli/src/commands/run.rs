//! Apply a script of intents to a fresh workspace.
//!
//! Scripts hold one JSON intent per line; blank lines and lines starting
//! with `#` are skipped. Since ids are generated at creation time, a string
//! of the form `@N` anywhere in an intent refers to the id created by the
//! N-th creating intent of the script (1-based).

use clap::Args;
use daybook_core::{Applied, Config, Intent};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use super::SessionArgs;
use crate::output;

#[derive(Args)]
pub struct RunArgs {
    /// Script file, or "-" for stdin
    #[arg(default_value = "-")]
    pub script: PathBuf,
    /// Print the outcome of each intent as it is applied
    #[arg(long)]
    pub echo: bool,
    #[command(flatten)]
    pub session: SessionArgs,
}

pub fn run(args: RunArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let (mut ws, today) = args.session.workspace(config, None);

    let reader: Box<dyn BufRead> = if args.script.as_os_str() == "-" {
        Box::new(std::io::stdin().lock())
    } else {
        Box::new(BufReader::new(File::open(&args.script)?))
    };

    let mut created: Vec<String> = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let at_line = |e: &dyn std::fmt::Display| format!("line {}: {e}", index + 1);

        let mut value: serde_json::Value =
            serde_json::from_str(trimmed).map_err(|e| at_line(&e))?;
        resolve_refs(&mut value, &created).map_err(|e| at_line(&e))?;
        let intent: Intent = serde_json::from_value(value).map_err(|e| at_line(&e))?;

        let applied = ws.apply(intent, today).map_err(|e| at_line(&e))?;
        tracing::debug!(line = index + 1, ?applied, "intent applied");
        if let Applied::Created { id } = &applied {
            created.push(id.clone());
        }
        if args.echo {
            println!("{}", serde_json::to_string(&applied)?);
        }
    }

    output::print_view(&ws.render_current(today), args.session.json)
}

/// Replace `@N` strings with the id of the N-th created record.
fn resolve_refs(value: &mut serde_json::Value, created: &[String]) -> Result<(), String> {
    match value {
        serde_json::Value::String(s) => {
            let Some(n) = s.strip_prefix('@').and_then(|n| n.parse::<usize>().ok()) else {
                return Ok(());
            };
            let id = n
                .checked_sub(1)
                .and_then(|i| created.get(i))
                .ok_or_else(|| format!("unknown reference @{n}"))?;
            *s = id.clone();
        }
        serde_json::Value::Array(items) => {
            for item in items {
                resolve_refs(item, created)?;
            }
        }
        serde_json::Value::Object(map) => {
            for item in map.values_mut() {
                resolve_refs(item, created)?;
            }
        }
        _ => {}
    }
    Ok(())
}
