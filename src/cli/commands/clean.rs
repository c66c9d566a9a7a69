//! sim-import clean - Delete artifacts of a previous import

use clap::Args;

use crate::app::AppContext;
use crate::cli::commands::PathArgs;
use crate::cli::output;
use crate::error::Result;
use crate::importer;

#[derive(Args, Debug)]
pub struct CleanArgs {
    #[command(flatten)]
    pub paths: PathArgs,
}

pub fn run(ctx: &AppContext, args: &CleanArgs) -> Result<()> {
    let paths = args.paths.resolve(ctx);
    let report = importer::run_cleanup(&paths)?;

    if ctx.machine {
        return output::emit_json(&report);
    }

    let mut layout = output::HumanLayout::new();
    layout.title("Cleanup complete");
    output::cleanup_section(&mut layout, &report);
    output::emit_human(layout);
    Ok(())
}
