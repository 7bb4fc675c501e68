use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::objects::{Mesh, ObjError, ObjResult};

/// Writes `mesh` to `path` as a single `g` group, replacing any existing file.
pub fn serialize<P: AsRef<Path>>(mesh: &Mesh, path: P) -> ObjResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ObjError::DestinationUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    write_mesh(mesh, &mut writer)?;
    writer.flush()?;

    debug!(
        path = %path.display(),
        name = %mesh.name,
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "wrote OBJ mesh"
    );
    return Ok(());
}

pub fn write_mesh<W: Write>(mesh: &Mesh, writer: &mut W) -> io::Result<()> {
    if mesh.name.is_empty()
        || mesh.name.starts_with('#')
        || mesh.name.contains(char::is_whitespace)
    {
        warn!(name = %mesh.name, "mesh name will not survive a reparse");
    }

    writeln!(writer, "g {}", mesh.name)?;

    for vertex in &mesh.vertices {
        writeln!(writer, "v {} {} {}", vertex.x, vertex.y, vertex.z)?;
    }

    for face in &mesh.faces {
        write!(writer, "f")?;
        for index in &face.indices {
            write!(writer, " {}", i64::from(*index) + 1)?;
        }
        writeln!(writer)?;
    }

    return Ok(());
}

pub fn to_obj_string(mesh: &Mesh) -> String {
    let mut buffer = Vec::new();
    write_mesh(mesh, &mut buffer).expect("writing to a Vec cannot fail");

    return String::from_utf8_lossy(&buffer).into_owned();
}
