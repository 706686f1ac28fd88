use std::io;

use thiserror::Error;

use crate::input::LoadError;

/// Errors that can end a glimpse run.
///
/// The reading core itself never fails; everything here comes from the
/// edges: the terminal, text sources and log setup.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
