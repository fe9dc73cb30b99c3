use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summarizer::{SummaryPolicy, summarize};
use crate::errors::{AppError, AppResult};
use crate::export::{self, ExportFormat, SUMMARY_HEADERS, summary_to_row};
use crate::ingest;
use crate::ui::messages::{info, warning};
use crate::utils::table::Table;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Handle the `summarize` subcommand: load → summarize → export.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summarize {
        input,
        out,
        format,
        print,
        force,
    } = cmd
    {
        let input_path = Path::new(input);

        let format = match format {
            Some(f) => f.clone(),
            None => ExportFormat::from_str(&cfg.default_format, true)
                .map_err(|_| AppError::InvalidExportFormat(cfg.default_format.clone()))?,
        };

        let records = ingest::load_records(input_path)?;
        info(format!("Loaded {} event rows", records.len()));

        let rows = summarize(&records, &SummaryPolicy::default())?;

        if rows.is_empty() {
            warning("No events found in input; writing an empty summary.");
        }

        let out_path = match out {
            Some(f) => PathBuf::from(f),
            None => export::default_output_path(input_path, &format),
        };

        export::write_summary(&rows, &out_path, &format, *force)?;

        if *print {
            let mut table =
                Table::new(SUMMARY_HEADERS.iter().map(|h| h.to_string()).collect());
            for r in &rows {
                table.add_row(summary_to_row(r));
            }
            println!("{}", table.render(&cfg.separator_char));
        }
    }
    Ok(())
}
