use std::{io, path::PathBuf};

use clap::{error::ErrorKind, CommandFactory, Parser};
use env_logger::Env;
use log::LevelFilter;
use thiserror::Error;

pub mod opt;
mod util;

use opt::Options;

/// Set up CLI
///
/// Returns `None` if there is nothing left to do, i.e. the help, version or
/// usage was printed.
pub fn init<T: Parser>() -> color_eyre::Result<Option<T>> {
    color_eyre::install()?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .parse_env(Env::new().filter("SIMPLEICON_LOG"))
        .init();
    match T::try_parse() {
        Ok(args) => Ok(Some(args)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            Ok(None)
        }
        Err(e) => {
            log::debug!("Invalid arguments: {}", e);
            println!("{}", <T as CommandFactory>::command().render_usage());
            Ok(None)
        }
    }
}

/// Error when processing an icon file
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load icon from file '{}': {source}", .path.display())]
    Load { path: PathBuf, source: io::Error },
    #[error("Failed to decode icon from file '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: simpleicon::Error,
    },
}

/// Load, decode and draw the icon
pub fn run(opt: &Options) -> Result<String, Error> {
    let line = util::read_first_line(&opt.file).map_err(|source| Error::Load {
        path: opt.file.clone(),
        source,
    })?;
    let icon = simpleicon::decode(&line).map_err(|source| Error::Decode {
        path: opt.file.clone(),
        source,
    })?;
    log::debug!(
        "Loaded '{}' ({}x{}, version {})",
        icon.header.name,
        icon.header.width,
        icon.header.height,
        icon.header.version
    );
    Ok(simpleicon::render(&icon, &opt.render_options()))
}
