use crate::objects::{ObjError, ObjResult};

/// Name given to geometry that appears before any `g` record, and to a `g`
/// record that carries no name.
pub const DEFAULT_MESH_NAME: &str = "Default";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        return Vertex { x, y, z };
    }

    pub fn position(&self) -> [f32; 3] {
        return [self.x, self.y, self.z];
    }
}

/// Ordered, zero-based references into the owning mesh's vertex list.
///
/// Indices are stored exactly as read (minus one) and are not range checked,
/// so a face may point outside its mesh. See [`Mesh::dangling_indices`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Face {
    pub indices: Vec<i32>,
}

impl Face {
    pub fn new(indices: Vec<i32>) -> Self {
        return Face { indices };
    }

    pub fn len(&self) -> usize {
        return self.indices.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.indices.is_empty();
    }
}

impl From<Vec<i32>> for Face {
    fn from(indices: Vec<i32>) -> Self {
        return Face::new(indices);
    }
}

/// A face corner whose index does not resolve to a vertex of its mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingIndex {
    pub face: usize,
    pub corner: usize,
    pub index: i32,
}

/// One `g` group: its vertices and the faces indexing them.
///
/// Face indices are local to this mesh. OBJ files normally address vertices
/// file-wide, but every group here restarts numbering at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
}

impl Default for Mesh {
    fn default() -> Self {
        return Mesh::new(DEFAULT_MESH_NAME);
    }
}

impl Mesh {
    pub fn new(name: &str) -> Self {
        return Mesh {
            name: name.to_string(),
            vertices: Vec::new(),
            faces: Vec::new(),
        };
    }

    /// True when the mesh has at least one vertex and one face. Only such
    /// meshes are emitted by the parser.
    pub fn is_renderable(&self) -> bool {
        return !self.vertices.is_empty() && !self.faces.is_empty();
    }

    /// Triangles a fan triangulation of every face would produce.
    pub fn triangle_count(&self) -> usize {
        return self
            .faces
            .iter()
            .map(|face| face.len().saturating_sub(2))
            .sum();
    }

    pub fn dangling_indices(&self) -> Vec<DanglingIndex> {
        let vertex_count = self.vertices.len();
        let mut dangling = Vec::new();

        for (face_number, face) in self.faces.iter().enumerate() {
            for (corner, &index) in face.indices.iter().enumerate() {
                let in_range = usize::try_from(index).map_or(false, |i| i < vertex_count);
                if !in_range {
                    dangling.push(DanglingIndex {
                        face: face_number,
                        corner,
                        index,
                    });
                }
            }
        }

        return dangling;
    }

    pub fn validate(&self) -> ObjResult<()> {
        match self.dangling_indices().first() {
            Some(dangling) => Err(ObjError::DanglingIndex {
                mesh: self.name.clone(),
                face: dangling.face,
                index: dangling.index,
                vertex_count: self.vertices.len(),
            }),
            None => Ok(()),
        }
    }
}

pub type MeshCollection = Vec<Mesh>;

/// Picks a mesh by position (`"2"`) or by name (`"Cube"`).
///
/// A numeric selector is tried as a position first, then as a name. With
/// duplicate names the first mesh wins.
pub fn find_mesh<'a>(meshes: &'a [Mesh], selector: &str) -> ObjResult<&'a Mesh> {
    if let Ok(position) = selector.parse::<usize>() {
        if let Some(mesh) = meshes.get(position) {
            return Ok(mesh);
        }
    }

    return meshes
        .iter()
        .find(|mesh| mesh.name == selector)
        .ok_or_else(|| ObjError::MeshNotFound(selector.to_string()));
}
