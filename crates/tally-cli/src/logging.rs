use anyhow::Result;
use std::io::IsTerminal;

/// Set up the global logger.
///
/// Colour is used only when `coloured` is set and stdout is a terminal, so
/// piped output stays free of escape codes.
pub fn init(verbose: bool, coloured: bool) -> Result<()> {
    let level = if verbose {
        twyg::LogLevel::Debug
    } else {
        twyg::LogLevel::Info
    };
    let opts = twyg::OptsBuilder::new()
        .coloured(use_colour(coloured, std::io::stdout().is_terminal()))
        .level(level)
        .build()
        .map_err(|e| anyhow::anyhow!("Invalid logger options: {:?}", e))?;
    twyg::setup(opts).map_err(|e| anyhow::anyhow!("Could not set up logger: {:?}", e))?;
    Ok(())
}

fn use_colour(configured: bool, is_terminal: bool) -> bool {
    configured && is_terminal
}
