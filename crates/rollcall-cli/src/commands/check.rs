//! `rollcall check` — validate individual fields without recording anything.

use tracing::instrument;

use rollcall_core::application::ports::Clock;
use rollcall_core::domain::{DomainError, Field, validators};
use rollcall_adapters::SystemClock;

use crate::{
    cli::CheckArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: CheckArgs, output: &OutputManager) -> CliResult<()> {
    if args.name.is_none()
        && args.email.is_none()
        && args.phone.is_none()
        && args.birthdate.is_none()
    {
        return Err(CliError::InvalidInput {
            message: "nothing to check; pass at least one of --name, --email, --phone, \
                      --birthdate"
                .into(),
        });
    }

    let today = SystemClock::new().now().date();
    let mut failures = 0usize;

    let mut report = |field: Field, result: Result<(), DomainError>| -> CliResult<()> {
        match result {
            Ok(()) => output.success(&format!("{}: ok", field.label()))?,
            Err(error) => {
                failures += 1;
                output.field_error(field.label(), &error.to_string())?;
            }
        }
        Ok(())
    };

    if let Some(name) = &args.name {
        report(Field::Name, validators::validate_name(name))?;
    }
    if let Some(email) = &args.email {
        report(Field::Email, validators::validate_email(email))?;
    }
    if let Some(phone) = &args.phone {
        report(Field::Phone, validators::validate_phone(phone))?;
    }
    if let Some(birthdate) = &args.birthdate {
        report(Field::Birthdate, validators::validate_birthdate(birthdate, today))?;
    }

    if failures > 0 {
        Err(CliError::RegistrationRejected { failures })
    } else {
        Ok(())
    }
}
