//! Command implementations for the presence analyzer CLI.
//!
//! Provides subcommands for listing users and months and for printing the
//! timelines the dashboards draw, as text tables or CSV.

use clap::{Args, Subcommand};
use pa_core::api::PresenceClient;
use std::io;
use std::time::Duration;

pub mod output;
pub mod query;

use output::OutputFormat;

/// Connection and output options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ApiOptions {
    /// Base URL of the presence analyzer server
    #[arg(long, env = "PRESENCE_API_URL", default_value = "http://localhost:5000", global = true)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout_secs: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Command {
    /// List users available for the weekday dashboards
    Users,

    /// List months available for the monthly ranking
    Months,

    /// Mean start and end of presence per weekday
    StartEnd {
        /// User id as listed by `users`
        user_id: String,
    },

    /// Five users with the highest mean presence in a month (bars start at 09:00)
    Top5 {
        /// Month name as listed by `months`
        month: String,
    },

    /// Print the avatar URL of a user
    Avatar {
        /// User id as listed by `users`
        user_id: String,
    },

    /// Mean presence time per weekday
    MeanTime {
        /// User id as listed by `users`
        user_id: String,
    },

    /// Total presence time per weekday
    PresenceWeekday {
        /// User id as listed by `users`
        user_id: String,
    },
}

pub async fn run(command: Command, options: &ApiOptions) -> anyhow::Result<()> {
    let client = PresenceClient::new(&options.api_url, Duration::from_secs(options.timeout_secs))?;

    let table = match command {
        Command::Users => query::users(&client).await?,
        Command::Months => query::months(&client).await?,
        Command::StartEnd { user_id } => query::start_end(&client, &user_id).await?,
        Command::Top5 { month } => query::top5(&client, &month).await?,
        Command::Avatar { user_id } => {
            println!("{}", query::avatar(&client, &user_id).await?);
            return Ok(());
        }
        Command::MeanTime { user_id } => query::mean_time(&client, &user_id).await?,
        Command::PresenceWeekday { user_id } => {
            query::presence_weekday(&client, &user_id).await?
        }
    };

    table.write(options.format, io::stdout().lock())
}
