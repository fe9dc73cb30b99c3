use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summarizer::{SummaryPolicy, summarize};
use crate::errors::AppResult;
use crate::ingest;
use crate::ui::messages::success;
use std::collections::BTreeSet;
use std::path::Path;

/// Handle the `inspect` subcommand: run the loader and the engine, report
/// what was found, write nothing. Surfaces the same errors `summarize`
/// would.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Inspect { input } = cmd {
        let records = ingest::load_records(Path::new(input))?;
        let rows = summarize(&records, &SummaryPolicy::default())?;

        let actors: BTreeSet<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        let dates: BTreeSet<_> = rows.iter().map(|r| r.date).collect();

        println!("Events:  {}", records.len());
        println!("Actors:  {}", actors.len());
        println!("Dates:   {}", dates.len());
        println!("Buckets: {}", rows.len());

        let earliest = rows.iter().map(|r| r.date.and_time(r.in_time)).min();
        let latest = rows.iter().map(|r| r.date.and_time(r.out_time)).max();
        if let (Some(first), Some(last)) = (earliest, latest) {
            println!("First event: {}", first.format("%Y-%m-%d %H:%M:%S"));
            println!("Last event:  {}", last.format("%Y-%m-%d %H:%M:%S"));
        }

        success("Input is valid.");
    }
    Ok(())
}
