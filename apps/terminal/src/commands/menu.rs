use std::io::{BufRead, Write};

use tracing::debug;

use super::Flow;
use crate::error::AppResult;
use crate::session::Session;

/// Shows the catalog.
pub fn view_menu<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<Flow> {
    debug!(foods = session.catalog.len(), "view_menu command");

    let text = session.renderer.menu(&session.catalog);
    session.console.show(&text)?;
    Ok(Flow::Continue)
}
