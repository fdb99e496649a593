//! Interactive session: read a line, run it, print the response, repeat.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use keeper_core::KeeperError;
use keeper_ui::styles::{render_accent, render_muted};
use keeper_ui::terminal::stdin_is_tty;
use tracing::debug;

use crate::context::RuntimeContext;
use crate::messages;
use crate::output::{
    ResponseView, output_json, print_error, print_response, print_warning, print_warnings,
};
use crate::session::Session;

const PROMPT: &str = "> ";

/// Run the interactive session until `bye` or end of input.
///
/// End of input saves both collections like `bye` does, without the
/// farewell message. A line that is not valid UTF-8 is rejected like any
/// other bad command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let (mut session, warnings) =
        Session::open(&ctx.config).context("could not open the stores")?;

    if !ctx.quiet && !ctx.json {
        println!("{}", render_accent(messages::WELCOME));
    }
    for warning in &warnings {
        print_warning(warning);
    }

    let show_prompt = stdin_is_tty() && !ctx.quiet && !ctx.json;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();

    loop {
        if show_prompt {
            print!("{}", render_muted(PROMPT));
            io::stdout().flush().ok();
        }

        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                debug!("end of input");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                print_warnings(&session.shutdown());
                return Err(e).context("failed to read input");
            }
        }

        let result = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => session.handle(line),
            Err(_) => Err(KeeperError::InvalidInput(
                "the line is not valid UTF-8".to_owned(),
            )),
        };
        if ctx.json {
            output_json(&ResponseView::from_result(&result))?;
        } else {
            match &result {
                Ok(response) if response.exit && ctx.quiet => {
                    print_warnings(&response.warnings)
                }
                Ok(response) => print_response(response),
                Err(err) => print_error(err),
            }
        }

        if session.is_finished() {
            return Ok(());
        }
    }

    print_warnings(&session.shutdown());
    Ok(())
}
