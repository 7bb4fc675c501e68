use tracing::warn;

use crate::objects::{Face, Mesh};

/// How face index lists are turned into triangles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Topology {
    /// Every face's indices are emitted back to back, so consecutive triples
    /// across the whole mesh form the triangles.
    #[default]
    TriangleList,
    /// Each face is fanned around its first corner: `(0, i, i + 1)`.
    TriangleFan,
}

/// Flat vertex positions ready to be copied into a vertex buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub positions: Vec<f32>,
    /// Corners that referenced a vertex outside the mesh and were left out.
    pub skipped: usize,
}

impl DrawList {
    pub const COMPONENTS: usize = 3;

    pub fn from_mesh(mesh: &Mesh, topology: Topology) -> DrawList {
        let mut draw_list = DrawList::default();

        for face in &mesh.faces {
            for index in Self::corners(face, topology) {
                let vertex = usize::try_from(index)
                    .ok()
                    .and_then(|i| mesh.vertices.get(i));

                match vertex {
                    Some(vertex) => draw_list.positions.extend_from_slice(&vertex.position()),
                    None => draw_list.skipped += 1,
                }
            }
        }

        if draw_list.skipped > 0 {
            warn!(
                mesh = %mesh.name,
                skipped = draw_list.skipped,
                "face indices outside the vertex list were not drawn"
            );
        }

        return draw_list;
    }

    fn corners(face: &Face, topology: Topology) -> Vec<i32> {
        match topology {
            Topology::TriangleList => face.indices.clone(),
            Topology::TriangleFan => {
                let mut corners = Vec::new();
                for window in face.indices.windows(2).skip(1) {
                    corners.extend_from_slice(&[face.indices[0], window[0], window[1]]);
                }
                corners
            }
        }
    }

    pub fn vertex_count(&self) -> usize {
        return self.positions.len() / Self::COMPONENTS;
    }

    pub fn triangle_count(&self) -> usize {
        return self.vertex_count() / 3;
    }

    pub fn size_in_bytes(&self) -> usize {
        return std::mem::size_of_val(self.positions.as_slice());
    }

    pub fn is_empty(&self) -> bool {
        return self.positions.is_empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{Face, Vertex};

    fn square() -> Mesh {
        let mut mesh = Mesh::new("Square");
        mesh.vertices = vec![
            Vertex::new(0., 0., 0.),
            Vertex::new(1., 0., 0.),
            Vertex::new(1., 1., 0.),
            Vertex::new(0., 1., 0.),
        ];
        mesh.faces = vec![Face::new(vec![0, 1, 2, 3])];
        mesh
    }

    #[test]
    fn list_keeps_stored_order() {
        let draw_list = DrawList::from_mesh(&square(), Topology::TriangleList);

        assert_eq!(draw_list.vertex_count(), 4);
        assert_eq!(&draw_list.positions[..6], &[0., 0., 0., 1., 0., 0.]);
        assert_eq!(draw_list.size_in_bytes(), 4 * 3 * 4);
    }

    #[test]
    fn fan_triangulates_polygons() {
        let draw_list = DrawList::from_mesh(&square(), Topology::TriangleFan);

        assert_eq!(draw_list.triangle_count(), 2);
        assert_eq!(
            draw_list.positions,
            vec![
                0., 0., 0., 1., 0., 0., 1., 1., 0., //
                0., 0., 0., 1., 1., 0., 0., 1., 0.,
            ]
        );
    }

    #[test]
    fn fan_ignores_degenerate_faces() {
        let mut mesh = square();
        mesh.faces = vec![Face::new(vec![0, 1]), Face::default()];

        assert!(DrawList::from_mesh(&mesh, Topology::TriangleFan).is_empty());
    }

    #[test]
    fn dangling_corners_are_skipped() {
        let mut mesh = square();
        mesh.faces = vec![Face::new(vec![0, 7, -1, 2])];

        let draw_list = DrawList::from_mesh(&mesh, Topology::TriangleList);
        assert_eq!(draw_list.vertex_count(), 2);
        assert_eq!(draw_list.skipped, 2);
    }
}
