//! `keeper exec` -- run a single command line.

use anyhow::{Context, Result};

use crate::cli::ExecArgs;
use crate::context::RuntimeContext;
use crate::output::{ResponseView, output_json, print_response, print_warning};
use crate::session::Session;

/// Execute the `keeper exec` command.
///
/// A command error becomes the process error, so the exit status is 1.
pub fn run(ctx: &RuntimeContext, args: &ExecArgs) -> Result<()> {
    let (mut session, warnings) =
        Session::open(&ctx.config).context("could not open the stores")?;
    for warning in &warnings {
        print_warning(warning);
    }

    let response = session.handle(&args.line())?;
    if ctx.json {
        output_json(&ResponseView::from_result(&Ok(response)))
    } else {
        print_response(&response);
        Ok(())
    }
}
