use super::{MeshData, Partition, PrimitiveMode, Vertex, RESTART_INDEX};

const WARM: [u8; 4] = [255, 0, 0, 255];
const COOL: [u8; 4] = [0, 0, 255, 255];

/// Three axis lines spanning ±half_extent, warm toward the positive
/// direction and cool toward the negative.
pub fn axes(half_extent: f32) -> MeshData {
    let e = half_extent;
    let vertices = vec![
        Vertex::new([e, 0.0, 0.0], WARM),
        Vertex::new([-e, 0.0, 0.0], COOL),
        Vertex::new([0.0, e, 0.0], WARM),
        Vertex::new([0.0, -e, 0.0], COOL),
        Vertex::new([0.0, 0.0, e], WARM),
        Vertex::new([0.0, 0.0, -e], COOL),
    ];
    let indices = (0..vertices.len() as u32).collect::<Vec<_>>();
    let partitions = vec![Partition {
        mode: PrimitiveMode::Lines,
        offset: 0,
        len: indices.len(),
    }];

    MeshData {
        vertices,
        indices,
        partitions,
    }
}

/// Unit-radius disc in the XY plane: a fan around the center vertex that
/// wraps back to the first rim vertex through the index buffer.
pub fn circle(segments: u32, center_color: [u8; 4], rim_color: [u8; 4]) -> MeshData {
    assert!(segments >= 3, "A disc needs at least 3 rim segments.");

    let mut vertices = Vec::with_capacity(segments as usize + 1);
    vertices.push(Vertex::new([0.0, 0.0, 0.0], center_color));

    let segment_angle = std::f32::consts::TAU / segments as f32;
    for segment in 0..segments {
        let angle = segment_angle * segment as f32;
        vertices.push(Vertex::new([angle.cos(), angle.sin(), 0.0], rim_color));
    }

    let mut indices = Vec::with_capacity(segments as usize + 2);
    indices.extend(0..=segments);
    indices.push(1);

    let partitions = vec![Partition {
        mode: PrimitiveMode::TriangleFan,
        offset: 0,
        len: indices.len(),
    }];

    MeshData {
        vertices,
        indices,
        partitions,
    }
}

/// Cube from 8 corner vertices as a single triangle-strip partition: one
/// strip around the four side faces, then the top and bottom faces, with
/// restart sentinels between the three strips.
pub fn cube(half_extent: f32, color: [u8; 4]) -> MeshData {
    let e = half_extent;
    // Corner i = x | y << 1 | z << 2, bit set = positive.
    let vertices = (0..8u32)
        .map(|corner| {
            let component = |bit: u32| if (corner >> bit) & 1 == 1 { e } else { -e };
            Vertex::new([component(0), component(1), component(2)], color)
        })
        .collect::<Vec<_>>();

    let indices = vec![
        0, 2, 1, 3, 5, 7, 4, 6, 0, 2, // side ring
        RESTART_INDEX,
        2, 6, 3, 7, // top
        RESTART_INDEX,
        1, 0, 5, 4, // bottom
    ];
    let partitions = vec![Partition {
        mode: PrimitiveMode::TriangleStrip,
        offset: 0,
        len: indices.len(),
    }];

    MeshData {
        vertices,
        indices,
        partitions,
    }
}

/// Unit octahedron: 6 vertices, 8 triangle faces.
pub fn octahedron(color: [u8; 4]) -> MeshData {
    let vertices = vec![
        Vertex::new([0.0, 1.0, 0.0], color),
        Vertex::new([1.0, 0.0, 0.0], color),
        Vertex::new([0.0, 0.0, -1.0], color),
        Vertex::new([-1.0, 0.0, 0.0], color),
        Vertex::new([0.0, 0.0, 1.0], color),
        Vertex::new([0.0, -1.0, 0.0], color),
    ];
    let indices = vec![
        0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 1, // upper faces
        5, 1, 2, 5, 2, 3, 5, 3, 4, 5, 4, 1, // lower faces
    ];
    let partitions = vec![Partition {
        mode: PrimitiveMode::Triangles,
        offset: 0,
        len: indices.len(),
    }];

    MeshData {
        vertices,
        indices,
        partitions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 4] = [255, 255, 255, 255];

    fn assert_indices_in_range(mesh: &MeshData) {
        let len = mesh.vertices.len() as u32;
        for &index in mesh.indices.iter() {
            assert!(index == RESTART_INDEX || index < len, "index {} out of range", index);
        }
    }

    #[test]
    fn axes_span_every_direction() {
        let mesh = axes(2.0);
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.indices.len(), 6);
        assert!(mesh.partitions_are_contiguous());
        assert_eq!(mesh.partitions[0].mode, PrimitiveMode::Lines);

        for axis in 0..3 {
            let positive = mesh.vertices[axis * 2].position;
            let negative = mesh.vertices[axis * 2 + 1].position;
            assert_eq!(positive[axis], 2.0);
            assert_eq!(negative[axis], -2.0);
        }
    }

    #[test]
    fn circle_fan_wraps_through_the_index_buffer() {
        let segments = 128;
        let mesh = circle(segments, WHITE, [255, 255, 0, 255]);
        assert_eq!(mesh.vertices.len(), segments as usize + 1);
        assert_eq!(mesh.indices.len(), segments as usize + 2);
        assert_eq!(mesh.indices[0], 0);
        assert_eq!(*mesh.indices.last().unwrap(), 1);
        assert!(mesh.partitions_are_contiguous());
        assert_indices_in_range(&mesh);

        for vertex in mesh.vertices[1..].iter() {
            let [x, y, z] = vertex.position;
            assert_eq!(z, 0.0);
            assert!(((x * x + y * y).sqrt() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    #[should_panic]
    fn circle_rejects_degenerate_fans() {
        circle(2, WHITE, WHITE);
    }

    #[test]
    fn cube_strip_covers_every_corner() {
        let mesh = cube(1.0, WHITE);
        assert_eq!(mesh.vertices.len(), 8);
        assert!(mesh.partitions_are_contiguous());
        assert_indices_in_range(&mesh);
        assert_eq!(mesh.indices.iter().filter(|&&i| i == RESTART_INDEX).count(), 2);

        let mut seen = [false; 8];
        for &index in mesh.indices.iter().filter(|&&i| i != RESTART_INDEX) {
            seen[index as usize] = true;
        }
        assert!(seen.iter().all(|&corner| corner), "strip misses a corner");

        // Strip sections yield 8 + 2 + 2 triangles, two per face.
        let triangles: usize = mesh
            .indices
            .split(|&i| i == RESTART_INDEX)
            .map(|strip| strip.len().saturating_sub(2))
            .sum();
        assert_eq!(triangles, 12);
    }

    #[test]
    fn octahedron_matches_its_face_table() {
        let mesh = octahedron(WHITE);
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.indices.len(), 24);
        assert!(mesh.partitions_are_contiguous());
        assert_indices_in_range(&mesh);

        // Every face joins one pole with two equatorial neighbors.
        for face in mesh.indices.chunks(3) {
            assert!(face.contains(&0) ^ face.contains(&5));
        }
    }
}
