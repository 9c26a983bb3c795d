//! `rollcall session` — interactive registration loop.
//!
//! Prompts for each field in turn, submits, and reports the verdict. The
//! roster accumulates across submissions and is printed when the session
//! ends (empty name, or end-of-input).

use std::io::{BufRead, Write};

use tracing::{info, instrument};

use rollcall_core::prelude::{FormController, SubmitOutcome};
use rollcall_core::domain::Field;
use rollcall_adapters::{MemoryForm, MemoryRoster, SystemClock, render_roster};

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let form = MemoryForm::new();
    let roster = MemoryRoster::new();
    let controller = FormController::new(
        Box::new(form.clone()),
        Box::new(roster.clone()),
        Box::new(SystemClock::new()),
    )
    .with_timestamp_format(config.session.timestamp_format.as_str());

    output.header("Rollcall session")?;
    output.info("Submit an empty name to finish.")?;

    let stdin = std::io::stdin();
    let mut lines = stdin.lock();

    'session: loop {
        let Some(name) = prompt(&mut lines, "Full name")? else {
            break 'session;
        };
        if name.trim().is_empty() {
            break 'session;
        }
        let Some(email) = prompt(&mut lines, "Email")? else {
            break 'session;
        };
        let Some(phone) = prompt(&mut lines, "Phone")? else {
            break 'session;
        };
        let Some(birthdate) = prompt(&mut lines, "Birth date (YYYY-MM-DD)")? else {
            break 'session;
        };
        let Some(terms) = prompt(&mut lines, "Accept terms? [y/N]")? else {
            break 'session;
        };

        form.set_value(Field::Name, name);
        form.set_value(Field::Email, email);
        form.set_value(Field::Phone, phone);
        form.set_value(Field::Birthdate, birthdate);
        form.set_terms(matches!(terms.trim().to_lowercase().as_str(), "y" | "yes"));

        match controller.handle_submit()? {
            SubmitOutcome::Accepted(submission) => {
                output.success(&format!(
                    "Registered {} at {}",
                    submission.name(),
                    submission.timestamp()
                ))?;
            }
            SubmitOutcome::Rejected(report) => {
                output.error("Registration rejected")?;
                for (field, error) in report.iter() {
                    output.field_error(field.label(), &error.to_string())?;
                }
                // A terms-only rejection focuses nothing, so no hint.
                if let Some(field) = report.first_invalid() {
                    output.info(&format!("Start with the {} field", field.label()))?;
                }
            }
        }
    }

    info!(rows = roster.rows().len(), "session finished");
    if roster.rows().is_empty() {
        output.print("No registrations recorded.")?;
    } else {
        output.header("Session roster")?;
        output.print(&render_roster(&roster.rows()))?;
    }
    Ok(())
}

/// Print `label: ` and read one line.  Returns `None` at end-of-input.
fn prompt(reader: &mut impl BufRead, label: &str) -> CliResult<Option<String>> {
    print!("{label}: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}
