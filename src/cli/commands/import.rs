//! sim-import import - Copy bodies and rewrite without cleaning first

use clap::Args;

use crate::app::AppContext;
use crate::cli::commands::PathArgs;
use crate::cli::output;
use crate::error::Result;
use crate::importer;
use crate::rewrite::Rewriter;

#[derive(Args, Debug)]
pub struct ImportArgs {
    #[command(flatten)]
    pub paths: PathArgs,
}

pub fn run(ctx: &AppContext, args: &ImportArgs) -> Result<()> {
    let paths = args.paths.resolve(ctx);
    let rewriter = Rewriter::new(&ctx.config.rewrite)?;
    let report = importer::run_import(&paths, &rewriter)?;

    if ctx.machine {
        return output::emit_json(&report);
    }

    let mut layout = output::HumanLayout::new();
    layout.title("Import complete");
    output::import_section(&mut layout, &report);
    output::emit_human(layout);
    Ok(())
}
