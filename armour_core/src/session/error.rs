//! Session errors

use crate::roster::RosterError;
use crate::types::BodySlot;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Session operation error
///
/// None of these are fatal: the session keeps the state it had before the
/// failed operation.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error("No {slot} armour layer at position {index}")]
    UnknownLayer { slot: BodySlot, index: usize },
    #[error("\"{0}\" can't be used as an armour name")]
    InvalidArmourName(String),
}

impl SessionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SessionError::Io {
            path: path.into(),
            source,
        }
    }
}
