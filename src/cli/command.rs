use clap::{Args, Parser, Subcommand};

use crate::store::StorageChoice;

#[derive(Parser, Debug)]
#[command(name = "contact-card", version, about = "Single contact card with local persistence")]
pub struct Cli {
    /// Storage choice (mem, json)
    #[arg(long, env = "STORAGE_CHOICE", value_enum, default_value = "json")]
    pub storage_choice: StorageChoice,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the stored contact details
    Show {
        /// Print as JSON instead of labelled lines
        #[arg(long)]
        json: bool,
    },
    /// Merge the given fields into the stored contact, validate, and save
    Save {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Validate the given fields without saving anything
    Check {
        #[command(flatten)]
        fields: FieldArgs,
    },
}

#[derive(Args, Debug)]
pub struct FieldArgs {
    /// Contact first name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Contact last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// 10-digit mobile number
    #[arg(long)]
    pub mobile_number: Option<String>,

    /// Contact email address
    #[arg(long)]
    pub email: Option<String>,
}
