use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors: any of these aborts the whole render.
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("font error: {0}")]
    Font(String),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Per-entry errors. The renderer records these and moves on to the next cell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("cannot encode an empty code")]
    Empty,

    #[error("cannot encode {code:?}: {ch:?} at position {position} is outside Code 128 set B")]
    Encoding {
        code: String,
        ch: char,
        position: usize,
    },

    #[error("cannot scale {code:?} ({modules} modules) to {width}x{height}: {reason}")]
    Scaling {
        code: String,
        modules: u32,
        width: u32,
        height: u32,
        reason: &'static str,
    },

    #[error("cannot encode {code:?}: {reason}")]
    Writer { code: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
