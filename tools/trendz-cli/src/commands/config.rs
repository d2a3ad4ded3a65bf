//! Configuration management commands.

use std::fs;
use std::path::Path;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, is_json, CliConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<bool> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { path, force } => {
            let path = ctx.resolve_path(path.as_deref().unwrap_or(Path::new("trendz.toml")));
            init_config(&path, force)?;
            ctx.output.success(&format!("Created: {}", path.display()));
            Ok(true)
        }
    }
}

fn show_config(ctx: &Context) -> Result<bool> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(true);
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "(defaults)"),
    }

    let page = &ctx.config.page;
    ctx.output.info("");
    ctx.output.info("[page]");
    ctx.output.kv("api_base", &page.api_base);
    ctx.output.kv("credential_key", &page.credential_key);
    match page.request_timeout_ms {
        Some(ms) => ctx.output.kv("request_timeout_ms", &ms.to_string()),
        None => ctx.output.kv("request_timeout_ms", "none"),
    }
    ctx.output
        .kv("resolution_policy", &format!("{:?}", page.resolution_policy));
    ctx.output.kv("log_level", &page.log_level.to_string());
    ctx.output.kv("log_format", &format!("{:?}", page.log_format));

    let cli = &ctx.config.cli;
    ctx.output.info("");
    ctx.output.info("[cli]");
    if let Some(ref cookie_file) = cli.cookie_file {
        ctx.output.kv("cookie_file", &cookie_file.display().to_string());
    }
    ctx.output
        .kv("prompt_for_token", &cli.prompt_for_token.to_string());

    Ok(true)
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        );
    }

    // JSON has no comments, so it gets the plain serialized defaults.
    if is_json(path) {
        CliConfig::default().save(path)
    } else {
        fs::write(path, generate_default_config())?;
        Ok(())
    }
}
