//! `rollcall submit` — validate one registration and print the roster row.

use tracing::{debug, instrument};

use rollcall_core::prelude::{FormController, SubmitOutcome};
use rollcall_core::domain::Field;
use rollcall_adapters::{MemoryForm, MemoryRoster, SystemClock, render_roster};

use crate::{
    cli::{OutputFormat, SubmitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(email = %args.email))]
pub fn execute(args: SubmitArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    // Keep handles to the adapters; the controller takes boxed clones.
    let form = MemoryForm::new();
    form.set_value(Field::Name, args.name.as_str());
    form.set_value(Field::Email, args.email.as_str());
    form.set_value(Field::Phone, args.phone.as_str());
    form.set_value(Field::Birthdate, args.birthdate.as_str());
    form.set_terms(args.accept_terms);

    let roster = MemoryRoster::new();
    let controller = FormController::new(
        Box::new(form.clone()),
        Box::new(roster.clone()),
        Box::new(SystemClock::new()),
    )
    .with_timestamp_format(config.session.timestamp_format.as_str());

    match controller.handle_submit()? {
        SubmitOutcome::Accepted(submission) => {
            debug!("submission accepted");
            if output.format() == OutputFormat::Json {
                let json = serde_json::to_string_pretty(&submission)
                    .map_err(|e| CliError::InvalidInput {
                        message: format!("Failed to serialise submission: {e}"),
                    })?;
                output.print(&json)?;
            } else {
                output.success(&format!("Registration accepted for {}", submission.name()))?;
                output.print(&render_roster(&roster.rows()))?;
            }
            Ok(())
        }
        SubmitOutcome::Rejected(report) => {
            output.error("Registration rejected")?;
            for (field, error) in report.iter() {
                output.field_error(field.label(), &error.to_string())?;
            }
            Err(CliError::RegistrationRejected {
                failures: report.len(),
            })
        }
    }
}
