use anyhow::Result;

use super::CommandContext;
use crate::tui::run_tui;

pub fn handle_explore(ctx: &CommandContext) -> Result<()> {
    run_tui(&ctx.schema, &ctx.config.tui)?;
    Ok(())
}
