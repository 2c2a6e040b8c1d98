use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;

use terrain::config::GRID_POINTS;
use terrain::heightfield::{grid_coord, Heightfield};

use super::coloring::face_color;

/// CPU-side mesh buffers: shared vertices, triangle index triples, and one
/// RGBA per triangle. `face_colors` is always the same length as `faces`.
pub struct TerrainMeshData {
    pub vertices: Vec<[f32; 3]>,
    pub faces: Vec<[u32; 3]>,
    pub face_colors: Vec<[f32; 4]>,
}

impl TerrainMeshData {
    /// Triangulate the heightfield: one vertex per lattice point at
    /// `(x, height, z)`, two triangles per cell splitting the quad along the
    /// `(i, j)` → `(i+1, j+1)` diagonal.
    pub fn build(field: &Heightfield) -> Self {
        let n = GRID_POINTS;
        let mut vertices = Vec::with_capacity(n * n);
        for j in 0..n {
            for i in 0..n {
                vertices.push([grid_coord(i), field.height(i, j), grid_coord(j)]);
            }
        }

        let cells = (n - 1) * (n - 1);
        let mut faces = Vec::with_capacity(cells * 2);
        let mut face_colors = Vec::with_capacity(cells * 2);
        for j in 0..n - 1 {
            let row = (j * n) as u32;
            let next_row = row + n as u32;
            for i in 0..n - 1 {
                let col = i as u32;
                faces.push([row + col, next_row + col, next_row + col + 1]);
                face_colors.push(face_color(i, j, false));
                faces.push([row + col, row + col + 1, next_row + col + 1]);
                face_colors.push(face_color(i, j, true));
            }
        }

        Self {
            vertices,
            faces,
            face_colors,
        }
    }

    /// Lower the buffers into a renderable mesh.
    ///
    /// Per-face color (and flat shading) needs unshared vertices, so the
    /// indexed form is expanded into a triangle soup with one normal and one
    /// color repeated across each triangle's three corners.
    pub fn into_mesh(self) -> Mesh {
        let corner_count = self.faces.len() * 3;
        let mut positions: Vec<[f32; 3]> = Vec::with_capacity(corner_count);
        let mut normals: Vec<[f32; 3]> = Vec::with_capacity(corner_count);
        let mut colors: Vec<[f32; 4]> = Vec::with_capacity(corner_count);

        for (face, color) in self.faces.iter().zip(&self.face_colors) {
            let a = self.vertices[face[0] as usize];
            let b = self.vertices[face[1] as usize];
            let c = self.vertices[face[2] as usize];
            let normal = face_normal(a, b, c);
            positions.extend_from_slice(&[a, b, c]);
            normals.extend_from_slice(&[normal; 3]);
            colors.extend_from_slice(&[*color; 3]);
        }

        let uvs: Vec<[f32; 2]> = vec![[0.0, 0.0]; positions.len()];
        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    }
}

/// Compute a face normal from three positions.
fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> [f32; 3] {
    let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
    let nx = u[1] * v[2] - u[2] * v[1];
    let ny = u[2] * v[0] - u[0] * v[2];
    let nz = u[0] * v[1] - u[1] * v[0];
    let len = (nx * nx + ny * ny + nz * nz).sqrt();
    if len < 1e-8 {
        [0.0, 1.0, 0.0]
    } else {
        [nx / len, ny / len, nz / len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrain::NoiseField;

    fn sample_data() -> TerrainMeshData {
        let field = Heightfield::sampled(&NoiseField::default(), -1.0);
        TerrainMeshData::build(&field)
    }

    #[test]
    fn test_vertex_and_face_counts() {
        let data = sample_data();
        assert_eq!(data.vertices.len(), 42 * 42);
        assert_eq!(data.faces.len(), 41 * 41 * 2);
    }

    #[test]
    fn test_one_color_per_face() {
        let data = sample_data();
        assert_eq!(data.face_colors.len(), data.faces.len());
    }

    #[test]
    fn test_face_indices_in_range() {
        let data = sample_data();
        let count = data.vertices.len() as u32;
        for face in &data.faces {
            for &idx in face {
                assert!(idx < count, "face index {idx} out of range");
            }
        }
    }

    #[test]
    fn test_vertex_heights_come_from_field() {
        let field = Heightfield::sampled(&NoiseField::default(), -1.0);
        let data = TerrainMeshData::build(&field);
        assert_eq!(data.vertices[0], [-20.0, field.height(0, 0), -20.0]);
        let last = data.vertices[data.vertices.len() - 1];
        assert_eq!(last, [21.0, field.height(41, 41), 21.0]);
    }

    #[test]
    fn test_soup_expansion_triples_faces() {
        let data = sample_data();
        let face_count = data.faces.len();
        let mesh = data.into_mesh();
        assert_eq!(mesh.count_vertices(), face_count * 3);
        assert!(mesh.indices().is_none());
    }

    #[test]
    fn test_face_normal_of_flat_triangle_points_up() {
        let n = face_normal([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 1.0]);
        assert!((n[1].abs() - 1.0).abs() < 1e-6);
    }
}
