use crate::prelude::*;

#[derive(Component, Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<Index>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
}

pub type Index = u32;

impl Mesh {
    /// Triangles as local-space corner triples; incomplete trailing indices and
    /// out-of-range indices are skipped
    pub fn triangles(&self) -> impl Iterator<Item = [Point3<f32>; 3]> + '_ {
        self.indices.chunks_exact(3).filter_map(|tri| {
            let corner = |i: Index| {
                self.vertices
                    .get(i as usize)
                    .map(|v| Point3::new(v.position[0], v.position[1], v.position[2]))
            };
            Some([corner(tri[0])?, corner(tri[1])?, corner(tri[2])?])
        })
    }

    /// Axis aligned box spanning `min`..`max`, faces wound counter-clockwise from outside
    pub fn cuboid(min: Point3<f32>, max: Point3<f32>) -> Self {
        let mut mesh = Mesh::default();
        let (x0, y0, z0) = (min.x, min.y, min.z);
        let (x1, y1, z1) = (max.x, max.y, max.z);

        let faces: [[[f32; 3]; 4]; 6] = [
            [[x0, y1, z1], [x1, y1, z1], [x1, y1, z0], [x0, y1, z0]],
            [[x0, y0, z0], [x1, y0, z0], [x1, y0, z1], [x0, y0, z1]],
            [[x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1]],
            [[x1, y0, z0], [x0, y0, z0], [x0, y1, z0], [x1, y1, z0]],
            [[x1, y0, z1], [x1, y0, z0], [x1, y1, z0], [x1, y1, z1]],
            [[x0, y0, z0], [x0, y0, z1], [x0, y1, z1], [x0, y1, z0]],
        ];

        for corners in faces {
            let base = mesh.vertices.len() as Index;
            mesh.vertices
                .extend(corners.into_iter().map(|position| Vertex { position }));
            mesh.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        mesh
    }
}
