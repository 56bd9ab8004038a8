//! # SimpleIcon viewer
#![warn(missing_docs)]

mod cli;

use cli::opt::Options;
use color_eyre::eyre;

fn main() -> eyre::Result<()> {
    let Some(opt) = cli::init::<Options>()? else {
        return Ok(());
    };
    match cli::run(&opt) {
        Ok(art) => print!("{}", art),
        Err(e) => println!("{}", e),
    }
    Ok(())
}
