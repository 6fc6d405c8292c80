use crate::api::dto::{parse_script, PreviewInput};
use crate::api::server as api_server;
use crate::cli::opts::*;
use crate::paths::default_config_file;

use anyhow::{anyhow, bail, Context, Result};
use perennial_core::SrsConfig;
use std::io::{stdout, Write};
use std::path::{Path, PathBuf};

pub async fn run_cli(args: Cli) -> Result<()> {
    let defaults = load_config(args.config.as_deref())?;
    match args.cmd {
        Command::Simulate(cmd) => simulate_cmd(&defaults, cmd, &mut stdout().lock()),
        Command::Api(api) => {
            let addr: std::net::SocketAddr = api.addr.parse()?;
            api_server::run(defaults, addr).await
        }
    }
}

/// An explicit `--config` must exist; the default location is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<SrsConfig> {
    let (path, required): (PathBuf, bool) = match explicit {
        Some(p) => (p.to_path_buf(), true),
        None => (default_config_file(), false),
    };
    if !path.exists() {
        if required {
            bail!("config file not found: {}", path.display());
        }
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(SrsConfig::default());
    }
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let cfg: SrsConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?cfg, "loaded config");
    Ok(cfg)
}

fn simulate_cmd(defaults: &SrsConfig, cmd: SimulateCmd, w: &mut impl Write) -> Result<()> {
    let input = PreviewInput::resolve(defaults, cmd.base, cmd.ease, cmd.modifier);
    if cmd.strict {
        input
            .to_config()
            .validate()
            .map_err(|e| anyhow!("{e}"))?;
    }
    let script = parse_script(cmd.script.as_deref())
        .ok_or_else(|| anyhow!("invalid --script (expected again,hard,good,easy separated by commas)"))?;

    let out = input.simulate(&script);
    tracing::debug!(?input, steps = script.len(), "projected path");

    if cmd.json {
        writeln!(w, "{}", serde_json::to_string_pretty(&out)?)?;
    } else {
        writeln!(w, "{}", out.label)?;
    }
    Ok(())
}
