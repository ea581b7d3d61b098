use anyhow::Result;
use colored::Colorize;
use pagecraft_model::catalog::label;
use pagecraft_model::BlockKind;

pub fn blocks() -> Result<()> {
    println!("{}", "Available blocks:".bright_blue().bold());
    for kind in BlockKind::ALL {
        println!("  {:<12} {}", kind.as_str().green(), label(kind).dimmed());
    }
    Ok(())
}
