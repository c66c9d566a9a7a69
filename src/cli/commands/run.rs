//! sim-import run - Clean up, then import the recorded simulation

use clap::Args;

use crate::app::AppContext;
use crate::cli::commands::PathArgs;
use crate::cli::output;
use crate::error::Result;
use crate::importer;
use crate::rewrite::Rewriter;

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub paths: PathArgs,
}

pub fn run(ctx: &AppContext, args: &RunArgs) -> Result<()> {
    let paths = args.paths.resolve(ctx);
    let rewriter = Rewriter::new(&ctx.config.rewrite)?;
    let report = importer::run(&paths, &rewriter)?;

    if ctx.machine {
        return output::emit_json(&report);
    }

    let mut layout = output::HumanLayout::new();
    layout.title("Import complete");
    output::cleanup_section(&mut layout, &report.cleanup);
    output::import_section(&mut layout, &report.import);
    output::emit_human(layout);
    Ok(())
}
