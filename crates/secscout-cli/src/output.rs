use std::io::{self, Write};

use secscout_core::{CompanyCandidate, Outcome, TickerSnapshot};

use crate::cli::OutputFormat;
use crate::commands::Report;
use crate::error::CliError;

pub fn render(report: &Report, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Text => write_text(&mut out, report)?,
    }

    Ok(())
}

fn write_text(out: &mut impl Write, report: &Report) -> io::Result<()> {
    match report {
        Report::Lookup(outcome) => write_outcome(out, outcome),
        Report::Snapshot(snapshot) => write_snapshot(out, snapshot),
    }
}

fn write_outcome(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::InvalidInput { reason, .. } => writeln!(out, "Invalid company name: {reason}."),
        Outcome::NoMatch {
            query,
            unlisted,
            decode_error,
        } => {
            if *unlisted > 0 {
                writeln!(
                    out,
                    "Looks like \"{query}\" is not a public company (yet). Sorry!"
                )
            } else if let Some(cause) = decode_error {
                writeln!(
                    out,
                    "No company matches that description (the name-mapping response could not be read: {cause})."
                )
            } else {
                writeln!(out, "No company matches that description.")
            }
        }
        Outcome::MissingCik { company } => {
            write_company(out, company)?;
            writeln!(out, "\nThe registry has no CIK on file for this company.")
        }
        Outcome::NoFiling {
            company,
            form_type,
            reason,
            ..
        } => {
            write_company(out, company)?;
            writeln!(out, "\nNo {form_type} filing link available: {reason}.")
        }
        Outcome::Found {
            company,
            filing,
            link,
            ..
        } => {
            write_company(out, company)?;
            if !filing.filed_at.is_empty() {
                writeln!(out, "\tLatest {} filed at: {}", filing.form_type, filing.filed_at)?;
            }
            writeln!(out)?;
            writeln!(out, "{link}")
        }
    }
}

fn write_company(out: &mut impl Write, company: &CompanyCandidate) -> io::Result<()> {
    writeln!(
        out,
        "Full company name: {} (CIK: {})",
        company.name, company.cik
    )?;
    writeln!(out, "\tTicker: {}", company.ticker)?;
    writeln!(out, "\tLocation: {}", company.location)
}

fn write_snapshot(out: &mut impl Write, snapshot: &TickerSnapshot) -> io::Result<()> {
    writeln!(
        out,
        "Saved {} companies ({} bytes) to {}",
        snapshot.entries,
        snapshot.bytes,
        snapshot.path.display()
    )
}
