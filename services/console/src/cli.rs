use crate::commands;
use crate::shell;
use admin_dashboard::config::{AppConfig, BackendConfig};
use admin_dashboard::dashboard::Dashboard;
use admin_dashboard::error::AppError;
use admin_dashboard::telemetry;
use clap::{Args, Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "admin-dashboard",
    about = "Manage employees and vendors against the dashboard REST API",
    version
)]
struct Cli {
    /// Override the configured backend base URL (DASHBOARD_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List or add employees
    Employees {
        #[command(subcommand)]
        command: EmployeesCommand,
    },
    /// List, add or email vendors
    Vendors {
        #[command(subcommand)]
        command: VendorsCommand,
    },
    /// Drive both screens interactively (default command)
    Shell,
}

#[derive(Subcommand, Debug)]
pub(crate) enum EmployeesCommand {
    /// Print the employee list
    List,
    /// Submit the add-employee form once
    Add(EmployeeAddArgs),
}

#[derive(Subcommand, Debug)]
pub(crate) enum VendorsCommand {
    /// Print the vendor list
    List(VendorListArgs),
    /// Submit the add-vendor form once
    Add(VendorAddArgs),
    /// Email the given vendors and print the sent-email log
    SendEmail(SendEmailArgs),
    /// Print the sent-email log
    SentEmails,
}

#[derive(Args, Debug)]
pub(crate) struct EmployeeAddArgs {
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long, default_value = "")]
    pub(crate) designation: String,
    /// Annual cost to company. Non-numeric text is sent as null.
    #[arg(long, default_value = "")]
    pub(crate) ctc: String,
}

#[derive(Args, Debug)]
pub(crate) struct VendorListArgs {
    /// Also print the sent-email log
    #[arg(long)]
    pub(crate) with_sent: bool,
}

#[derive(Args, Debug)]
pub(crate) struct VendorAddArgs {
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long)]
    pub(crate) upi: String,
}

#[derive(Args, Debug)]
pub(crate) struct SendEmailArgs {
    /// Vendor ids to email, in the order given
    #[arg(required = true)]
    pub(crate) ids: Vec<i64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(api_url) = cli.api_url {
        let timeout = config.backend.request_timeout;
        config.backend = BackendConfig::new(api_url)?;
        config.backend.request_timeout = timeout;
    }

    telemetry::init(&config.telemetry)?;

    let dashboard = Dashboard::connect(&config)?;
    info!(?config.environment, base_url = %config.backend.base_url, "admin dashboard connected");

    match cli.command.unwrap_or(Command::Shell) {
        Command::Employees { command } => commands::employees(&dashboard, command).await,
        Command::Vendors { command } => commands::vendors(&dashboard, command).await,
        Command::Shell => shell::run(&dashboard).await,
    }
}
