//! Terminal width detection

use std::io::IsTerminal;

/// Width used when nothing else is known
pub const DEFAULT_WIDTH: usize = 80;

/// Resolve the rendering width: forced value, then `$COLUMNS`, then the
/// terminal itself, then [`DEFAULT_WIDTH`]. Zero is never returned.
pub fn resolve_width(forced: Option<usize>) -> usize {
    let columns = std::env::var("COLUMNS").ok();
    resolve_width_with(forced, columns.as_deref(), || {
        crossterm::terminal::size().ok().map(|(cols, _)| cols)
    })
}

fn resolve_width_with(
    forced: Option<usize>,
    columns_env: Option<&str>,
    query: impl FnOnce() -> Option<u16>,
) -> usize {
    if let Some(w) = forced.filter(|&w| w > 0) {
        return w;
    }

    if let Some(w) = columns_env
        .and_then(|c| c.trim().parse::<usize>().ok())
        .filter(|&w| w > 0)
    {
        return w;
    }

    match query() {
        Some(cols) if cols > 0 => cols as usize,
        _ => {
            tracing::debug!("terminal size unavailable, using {} columns", DEFAULT_WIDTH);
            DEFAULT_WIDTH
        }
    }
}

/// Whether stdout is attached to a terminal
pub fn stdout_is_tty() -> bool {
    std::io::stdout().is_terminal()
}
