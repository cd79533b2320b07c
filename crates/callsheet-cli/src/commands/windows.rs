use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::Result;
use callsheet_core::TIME_WINDOWS;
use clap::Args;

#[derive(Debug, Args)]
pub struct WindowsArgs {
    /// Show only the first N windows
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

pub fn list_windows(ctx: &Context<'_>, args: WindowsArgs) -> Result<()> {
    let limit = match args.limit {
        Some(0) => return Err(invalid_input("--limit must be at least 1")),
        Some(limit) => limit,
        None => TIME_WINDOWS.len(),
    };
    let windows: Vec<&str> = TIME_WINDOWS.iter().copied().take(limit).collect();

    if ctx.json {
        return print_json(&windows);
    }

    for window in windows {
        println!("{window}");
    }
    Ok(())
}
