use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjError {
    #[error("cannot open {} for reading: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open {} for writing: {source}", path.display())]
    DestinationUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Only raised when strict parsing is enabled.
    #[error("line {line}: malformed `{record}` record: {reason}")]
    MalformedRecord {
        line: usize,
        record: String,
        reason: String,
    },

    #[error("mesh `{mesh}`: face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    DanglingIndex {
        mesh: String,
        face: usize,
        index: i32,
        vertex_count: usize,
    },

    #[error("no mesh matches `{0}`")]
    MeshNotFound(String),
}

pub type ObjResult<T> = Result<T, ObjError>;
