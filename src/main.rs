use anyhow::Result;
use clap::Parser;
use predprey_lib::app::{self, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    if !args.quiet {
        predprey_core::init_logging();
    }

    let summary = app::run(&args)?;
    println!("{summary}");
    Ok(())
}
