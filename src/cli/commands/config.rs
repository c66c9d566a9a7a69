//! sim-import config - Show the effective configuration

use clap::Args;

use crate::app::AppContext;
use crate::cli::output;
use crate::error::{ImportError, Result};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also print the resolved import paths
    #[arg(long)]
    pub paths: bool,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    if ctx.machine {
        if args.paths {
            return output::emit_json(&serde_json::json!({
                "config": ctx.config,
                "resolved": ctx.config.paths.resolve(),
            }));
        }
        return output::emit_json(&ctx.config);
    }

    if let Some(path) = &ctx.config_path {
        println!("# {}", path.display());
    }
    let rendered = toml::to_string_pretty(&ctx.config)
        .map_err(|err| ImportError::Config(format!("render config: {err}")))?;
    println!("{rendered}");

    if args.paths {
        let resolved = ctx.config.paths.resolve();
        let mut layout = output::HumanLayout::new();
        layout.section("Resolved paths");
        layout.kv("Simulation in", &resolved.simulation_input.display().to_string());
        layout.kv("Simulation out", &resolved.simulation_output.display().to_string());
        layout.kv("Bodies in", &resolved.bodies_source.display().to_string());
        layout.kv("Bodies out", &resolved.bodies_target.display().to_string());
        layout.kv("Marker", &resolved.marker);
        output::emit_human(layout);
    }
    Ok(())
}
