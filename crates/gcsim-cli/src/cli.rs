use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gcsim",
    about = "In-memory emulator for the storage/v1 JSON API",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the emulator server
    Serve(ServeArgs),
    /// Parse a `fields` expression and show the resulting selection
    Fields(FieldsArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides the config file)
    #[arg(long)]
    pub bind: Option<String>,
    /// TOML config file
    #[arg(long)]
    pub config: Option<String>,
    /// Bucket to create at startup; repeatable
    #[arg(long = "bucket")]
    pub buckets: Vec<String>,
}

#[derive(Args)]
pub struct FieldsArgs {
    pub expression: String,
}
