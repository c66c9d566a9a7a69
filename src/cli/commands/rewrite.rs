//! sim-import rewrite - Apply the rewrite rules to one script

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::output;
use crate::error::{IoResultExt, Result};
use crate::rewrite::Rewriter;
use crate::utils::fs::write_lines_atomic;

#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// Generated simulation to rewrite
    pub input: PathBuf,

    /// Write the result here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, args: &RewriteArgs) -> Result<()> {
    let rewriter = Rewriter::new(&ctx.config.rewrite)?;
    let script = std::fs::read_to_string(&args.input).at_path("read", &args.input)?;
    let rewrite = rewriter.rewrite_str(&script)?;

    let Some(path) = &args.output else {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for line in &rewrite.lines {
            writeln!(out, "{line}")?;
        }
        return Ok(());
    };

    write_lines_atomic(path, &rewrite.lines)?;
    if ctx.machine {
        return output::emit_json(&rewrite.stats);
    }
    let mut layout = output::HumanLayout::new();
    layout.title("Rewrite complete");
    layout.kv("Output", &path.display().to_string());
    output::rewrite_stats(&mut layout, &rewrite.stats);
    output::emit_human(layout);
    Ok(())
}
