use clap::Parser;

use crate::cli::command::{Cli, Commands, FieldArgs};
use crate::domain::card::{ContactCard, SubmitOutcome};
use crate::domain::fields::{ContactFields, Field};
use crate::errors::AppError;
use crate::store::parse_store;
use crate::validation::validate;

pub async fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut card = ContactCard::new(parse_store(cli.storage_choice));

    match cli.command {
        Commands::Show { json } => {
            card.load().await;

            if json {
                println!("{}", serde_json::to_string_pretty(card.fields())?);
            } else {
                for field in Field::ALL {
                    println!("{:<14} {}", field.label(), card.fields().get(field));
                }
            }
            Ok(())
        }

        Commands::Save { fields } => {
            // Start from what is already stored so a partial set of flags
            // only edits the named fields.
            card.load().await;
            apply_args(&mut card, fields);

            match card.submit().await {
                SubmitOutcome::Saved => {
                    println!("Contact details saved successfully!");
                    Ok(())
                }
                SubmitOutcome::Invalid(errors) => {
                    for (field, message) in errors.iter() {
                        eprintln!("{}: {}", field.label(), message);
                    }
                    Err(AppError::Validation(format!(
                        "{} field(s) need attention",
                        errors.len()
                    )))
                }
                SubmitOutcome::SaveFailed => Err(AppError::Storage(
                    "contact details were not fully saved".to_string(),
                )),
            }
        }

        Commands::Check { fields } => {
            let snapshot = fields_from_args(fields);
            let errors = validate(&snapshot);

            if errors.is_empty() {
                println!("All fields valid");
                return Ok(());
            }

            for (field, message) in errors.iter() {
                eprintln!("{}: {}", field.label(), message);
            }
            Err(AppError::Validation(format!(
                "{} field(s) need attention",
                errors.len()
            )))
        }
    }
}

fn apply_args(card: &mut ContactCard, args: FieldArgs) {
    if let Some(value) = args.first_name {
        card.update_field(Field::FirstName, value);
    }
    if let Some(value) = args.last_name {
        card.update_field(Field::LastName, value);
    }
    if let Some(value) = args.mobile_number {
        card.update_field(Field::MobileNumber, value);
    }
    if let Some(value) = args.email {
        card.update_field(Field::Email, value);
    }
}

fn fields_from_args(args: FieldArgs) -> ContactFields {
    ContactFields {
        first_name: args.first_name.unwrap_or_default(),
        last_name: args.last_name.unwrap_or_default(),
        mobile_number: args.mobile_number.unwrap_or_default(),
        email: args.email.unwrap_or_default(),
    }
}
