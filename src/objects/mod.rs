//! Wavefront OBJ geometry: the mesh model and a text codec for it.
//!
//! Only `v`, `f` and `g` records are understood. Each `g` group becomes its
//! own [`Mesh`] whose face indices count from that group's first vertex.

mod error;
mod lexer;
mod mesh;
mod parser;
mod writer;

pub use error::*;
pub use lexer::{Lexer, Line, Record};
pub use mesh::*;
pub use parser::*;
pub use writer::*;
