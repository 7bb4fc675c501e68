use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::objects::lexer::{Lexer, Line, Record};
use crate::objects::{Face, Mesh, MeshCollection, ObjError, ObjResult, Vertex, DEFAULT_MESH_NAME};

/// How malformed `v` and `f` records are treated.
///
/// Lenient parsing (the default) never aborts: missing or non-numeric vertex
/// coordinates become `0.0` and extra ones are ignored, while face indices are
/// read up to the first token whose vertex part (before any `/`) is not an
/// integer that fits an `i32` once rebased. Strict parsing turns
/// each of those cases into [`ObjError::MalformedRecord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub strict: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        return ParseOptions { strict: true };
    }
}

pub fn parse<P: AsRef<Path>>(path: P) -> ObjResult<MeshCollection> {
    return parse_with(path, &ParseOptions::default());
}

pub fn parse_with<P: AsRef<Path>>(path: P, options: &ParseOptions) -> ObjResult<MeshCollection> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ObjError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), strict = options.strict, "parsing OBJ file");
    return parse_reader(BufReader::new(file), options);
}

pub fn parse_str(text: &str) -> ObjResult<MeshCollection> {
    return parse_reader(text.as_bytes(), &ParseOptions::default());
}

pub fn parse_reader<R: BufRead>(reader: R, options: &ParseOptions) -> ObjResult<MeshCollection> {
    let mut parser = Parser::new(*options);

    for line in Lexer::new(reader) {
        parser.feed(line?)?;
    }

    return Ok(parser.finish());
}

/// Group-splitting state: the finished meshes and the one being filled.
struct Parser {
    options: ParseOptions,
    meshes: MeshCollection,
    current: Mesh,
}

impl Parser {
    fn new(options: ParseOptions) -> Self {
        return Parser {
            options,
            meshes: Vec::new(),
            current: Mesh::default(),
        };
    }

    fn feed(&mut self, line: Line) -> ObjResult<()> {
        match line.record {
            Record::Vertex => {
                let vertex = self.vertex(&line)?;
                self.current.vertices.push(vertex);
            }

            Record::Face => {
                let face = self.face(&line)?;
                self.current.faces.push(face);
            }

            Record::Group => {
                let name = line
                    .fields
                    .first()
                    .map_or(DEFAULT_MESH_NAME, String::as_str);
                let finished = std::mem::replace(&mut self.current, Mesh::new(name));
                self.flush(finished);
            }

            Record::Comment | Record::Other(_) => {}
        }

        return Ok(());
    }

    fn finish(mut self) -> MeshCollection {
        let last = std::mem::take(&mut self.current);
        self.flush(last);

        debug!(meshes = self.meshes.len(), "parsed OBJ meshes");
        return self.meshes;
    }

    fn flush(&mut self, mesh: Mesh) {
        if mesh.is_renderable() {
            self.meshes.push(mesh);
        } else {
            debug!(name = %mesh.name, "dropping group without geometry");
        }
    }

    fn vertex(&self, line: &Line) -> ObjResult<Vertex> {
        if line.fields.len() != 3 {
            self.malformed(line, format!("expected 3 coordinates, found {}", line.fields.len()))?;
        }

        let mut coordinates = [0.0f32; 3];
        for (coordinate, field) in coordinates.iter_mut().zip(&line.fields) {
            match field.parse::<f32>() {
                Ok(value) => *coordinate = value,
                Err(_) => self.malformed(line, format!("`{}` is not a number", field))?,
            }
        }

        let [x, y, z] = coordinates;
        return Ok(Vertex::new(x, y, z));
    }

    fn face(&self, line: &Line) -> ObjResult<Face> {
        let mut indices = Vec::with_capacity(line.fields.len());

        for field in &line.fields {
            // Only the vertex part of `v/vt/vn` is kept. Parsing wide lets every
            // written `i32` index come back after the `- 1`.
            let vertex = field.split('/').next().unwrap_or_default();
            let index = vertex
                .parse::<i64>()
                .ok()
                .and_then(|index| index.checked_sub(1))
                .and_then(|index| i32::try_from(index).ok());

            match index {
                Some(index) => indices.push(index),
                None => {
                    self.malformed(line, format!("`{}` is not a vertex index", field))?;
                    break;
                }
            }
        }

        return Ok(Face::new(indices));
    }

    /// Fails in strict mode; otherwise logs and lets the caller degrade.
    fn malformed(&self, line: &Line, reason: String) -> ObjResult<()> {
        if self.options.strict {
            return Err(ObjError::MalformedRecord {
                line: line.number,
                record: line.record.keyword().to_string(),
                reason,
            });
        }

        warn!(line = line.number, record = line.record.keyword(), "{}", reason);
        return Ok(());
    }
}
