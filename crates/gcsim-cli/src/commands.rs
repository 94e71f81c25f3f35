use std::net::SocketAddr;

use anyhow::Context;
use colored::Colorize;
use gcsim_fields::Selection;
use gcsim_server::{GcsimServer, ServerConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Fields(args) => cmd_fields(args, &cli.format),
    }
}

fn serve_config(args: ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path).with_context(|| format!("loading {path}"))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid bind address {bind:?}"))?;
    }
    config.initial_buckets.extend(args.buckets);
    Ok(config)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = serve_config(args)?;
    let server = GcsimServer::new(config)?;
    println!(
        "{} gcsim listening on {}",
        "✓".green().bold(),
        server.config().bind_addr.to_string().bold()
    );
    for bucket in &server.config().initial_buckets {
        println!("  Bucket: {}", bucket.yellow());
    }
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    Ok(())
}

fn cmd_fields(args: FieldsArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let selection = gcsim_fields::parse(&args.expression)
        .with_context(|| format!("invalid fields expression {:?}", args.expression))?;
    println!("{}", describe_selection(&selection, format)?);
    Ok(())
}

fn describe_selection(selection: &Selection, format: &OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(selection)?),
        OutputFormat::Text if selection.is_empty() => {
            Ok(format!("{} empty selection: full listing", "✓".green()))
        }
        OutputFormat::Text => {
            let top: Vec<&str> = selection.top_level_fields().iter().map(|f| f.as_str()).collect();
            let items: Vec<&str> = selection.item_fields().iter().map(|f| f.as_str()).collect();
            Ok(format!(
                "{} {}\n  Top-level: {}\n  Item fields: {}",
                "✓".green().bold(),
                selection.to_string().bold(),
                top.join(", ").cyan(),
                items.join(", ").cyan()
            ))
        }
    }
}
