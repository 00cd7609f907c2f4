use super::{MeshData, Partition, PrimitiveMode, Vertex, RESTART_INDEX};
use glam::{Mat3, Vec3};

// Unit sphere on an octahedral latitude grid. Ring `r` (counted from either
// pole) holds 4r vertices, the equator 4 * divisor, so the vertex buffer is
// pole + rings + pole:
//
//   [north] [ring 1] ... [ring d-1] [equator] [ring d-1] ... [ring 1] [south]
//
// The element buffer is a triangle fan per pole cap followed by four quadrant
// triangle strips per inter-ring band, each primitive terminated by the
// restart sentinel.

pub fn vertex_count(divisor: u32) -> usize {
    match divisor {
        0 => 0,
        d => (2 + 4 * d * d) as usize,
    }
}

pub fn index_count(divisor: u32) -> usize {
    match divisor {
        0 => 0,
        d => (13 + 8 * (d - 1) * (d + 4)) as usize,
    }
}

pub fn partition_count(divisor: u32) -> usize {
    match divisor {
        0 => 0,
        1 => 1,
        _ => 2,
    }
}

pub fn generate(divisor: u32, color: [u8; 4]) -> MeshData {
    if divisor == 0 {
        return MeshData::default();
    }

    MeshData {
        vertices: generate_vertices(divisor, color),
        indices: generate_indices(divisor),
        partitions: generate_partitions(divisor),
    }
}

fn generate_vertices(divisor: u32, color: [u8; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(vertex_count(divisor));

    vertices.push(Vertex::new(Vec3::Y.into(), color));

    // Latitude step from the pole toward the equator.
    let lat_step = -(90.0f32.to_radians()) / divisor as f32;
    for ring in 1..divisor {
        let lat_start = Mat3::from_rotation_z(lat_step * ring as f32) * Vec3::Y;
        push_ring(&mut vertices, lat_start, 4 * ring, color);
    }

    push_ring(&mut vertices, Vec3::X, 4 * divisor, color);

    for ring in (1..divisor).rev() {
        let lat_start = Mat3::from_rotation_z(-lat_step * ring as f32) * -Vec3::Y;
        push_ring(&mut vertices, lat_start, 4 * ring, color);
    }

    vertices.push(Vertex::new((-Vec3::Y).into(), color));

    vertices
}

fn push_ring(vertices: &mut Vec<Vertex>, lat_start: Vec3, ring_len: u32, color: [u8; 4]) {
    let long_step = std::f32::consts::TAU / ring_len as f32;
    for long_vert in 0..ring_len {
        let position = Mat3::from_rotation_y(long_step * long_vert as f32) * lat_start;
        vertices.push(Vertex::new(position.into(), color));
    }
}

fn generate_indices(divisor: u32) -> Vec<u32> {
    let mut indices = Vec::with_capacity(index_count(divisor));

    let south = vertex_count(divisor) as u32 - 1;

    // Pole caps: fan around each pole over its adjacent 4-vertex ring,
    // wrapping back to the ring start. The south fan walks its ring in
    // descending index order, which mirrors the winding.
    indices.push(0);
    for e in 1..5 {
        indices.push(e);
    }
    indices.push(1);

    indices.push(RESTART_INDEX);

    indices.push(south);
    for e in 1..5 {
        indices.push(south - e);
    }
    indices.push(south - 1);

    // Northern bands, equator inclusive. Ring r starts at 1 + 2r(r-1); each
    // band is split into four quadrant strips and every column index wraps
    // modulo its ring length so the f = 3 quadrant closes onto the ring
    // start.
    for r in 1..divisor {
        let top_base = 1 + 2 * r * (r - 1);
        let bot_base = top_base + 4 * r;
        let top_len = 4 * r;
        let bot_len = 4 * (r + 1);

        for f in 0..4 {
            for e in 0..=r {
                indices.push(bot_base + (f * (r + 1) + e) % bot_len);
                indices.push(top_base + (f * r + e) % top_len);
            }
            indices.push(bot_base + (f * (r + 1) + r + 1) % bot_len);
            indices.push(RESTART_INDEX);
        }
    }

    // Southern bands, mirrored: rings are addressed from their highest
    // index downward, which keeps the strip winding consistent with the
    // northern half.
    for r in 1..divisor {
        let small_end = south - 1 - 2 * r * (r - 1);
        let big_end = small_end - 4 * r;
        let small_len = 4 * r;
        let big_len = 4 * (r + 1);

        for f in 0..4 {
            for e in 0..=r {
                indices.push(big_end - (f * (r + 1) + e) % big_len);
                indices.push(small_end - (f * r + e) % small_len);
            }
            indices.push(big_end - (f * (r + 1) + r + 1) % big_len);
            indices.push(RESTART_INDEX);
        }
    }

    indices
}

fn generate_partitions(divisor: u32) -> Vec<Partition> {
    let mut partitions = Vec::with_capacity(partition_count(divisor));

    partitions.push(Partition {
        mode: PrimitiveMode::TriangleFan,
        offset: 0,
        len: 13,
    });

    if divisor > 1 {
        partitions.push(Partition {
            mode: PrimitiveMode::TriangleStrip,
            offset: 13,
            len: index_count(divisor) - 13,
        });
    }

    partitions
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 4] = [255, 255, 255, 255];

    #[test]
    fn closed_form_counts_match_generated_lengths() {
        for divisor in 0..=6 {
            let mesh = generate(divisor, WHITE);
            assert_eq!(mesh.vertices.len(), vertex_count(divisor), "divisor {}", divisor);
            assert_eq!(mesh.indices.len(), index_count(divisor), "divisor {}", divisor);
            assert_eq!(mesh.partitions.len(), partition_count(divisor), "divisor {}", divisor);
        }
    }

    #[test]
    fn divisor_zero_is_empty() {
        let mesh = generate(0, WHITE);
        assert!(mesh.vertices.is_empty());
        assert!(mesh.indices.is_empty());
        assert!(mesh.partitions.is_empty());
    }

    #[test]
    fn every_index_is_a_vertex_or_the_restart_sentinel() {
        for divisor in 1..=6 {
            let mesh = generate(divisor, WHITE);
            let len = mesh.vertices.len() as u32;
            for &index in mesh.indices.iter() {
                assert!(
                    index == RESTART_INDEX || index < len,
                    "divisor {}: index {} out of range {}",
                    divisor,
                    index,
                    len
                );
            }
        }
    }

    #[test]
    fn partitions_tile_the_index_buffer() {
        for divisor in 1..=6 {
            let mesh = generate(divisor, WHITE);
            assert!(mesh.partitions_are_contiguous(), "divisor {}", divisor);
            assert_eq!(mesh.partitions[0].mode, PrimitiveMode::TriangleFan);
            assert_eq!(mesh.partitions[0].offset, 0);
            assert_eq!(mesh.partitions[0].len, 13);
            if divisor > 1 {
                assert_eq!(mesh.partitions[1].mode, PrimitiveMode::TriangleStrip);
                assert_eq!(mesh.partitions[1].offset, 13);
            }
        }
    }

    #[test]
    fn all_vertices_are_unit_length() {
        let mesh = generate(5, WHITE);
        for vertex in mesh.vertices.iter() {
            let length = glam::Vec3::from(vertex.position).length();
            assert!((length - 1.0).abs() < 1e-5, "|{:?}| = {}", vertex.position, length);
        }
    }

    #[test]
    fn poles_are_exact_and_rings_share_latitude() {
        let divisor = 4;
        let mesh = generate(divisor, WHITE);

        assert_eq!(mesh.vertices[0].position, [0.0, 1.0, 0.0]);
        assert_eq!(mesh.vertices.last().unwrap().position, [0.0, -1.0, 0.0]);

        // Ring r starts at 1 + 2r(r-1), holds 4r vertices of equal height,
        // and rings descend monotonically from pole to equator.
        let mut previous_height = 1.0f32;
        for r in 1..=divisor {
            let start = (1 + 2 * r * (r - 1)) as usize;
            let len = (4 * r) as usize;
            let height = mesh.vertices[start].position[1];
            assert!(height < previous_height, "ring {} does not descend", r);
            for vertex in mesh.vertices[start..start + len].iter() {
                assert!((vertex.position[1] - height).abs() < 1e-6, "ring {} is not level", r);
            }
            previous_height = height;
        }
        assert!(previous_height.abs() < 1e-6, "equator is not at height zero");
    }

    #[test]
    fn divisor_one_is_the_octahedron() {
        let mesh = generate(1, WHITE);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 1, RESTART_INDEX, 5, 4, 3, 2, 1, 4]);

        let expected = [
            [0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, -1.0],
            [-1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.0, -1.0, 0.0],
        ];
        for (vertex, expected) in mesh.vertices.iter().zip(expected) {
            let delta = glam::Vec3::from(vertex.position) - glam::Vec3::from(expected);
            assert!(delta.length() < 1e-6, "{:?} != {:?}", vertex.position, expected);
        }
    }

    #[test]
    fn divisor_two_band_quadrants_wrap_onto_their_rings() {
        let mesh = generate(2, WHITE);

        // Ring 1 is vertices 1..=4, the equator 5..=12, the south ring
        // 13..=16. First northern quadrant stitches ring 1 to the equator;
        // the fourth wraps back onto both ring starts.
        let strips = &mesh.indices[13..];
        assert_eq!(&strips[0..6], &[5, 1, 6, 2, 7, RESTART_INDEX]);
        assert_eq!(&strips[18..24], &[11, 4, 12, 1, 5, RESTART_INDEX]);

        // Southern quadrants walk their rings downward from the high end.
        assert_eq!(&strips[24..30], &[12, 16, 11, 15, 10, RESTART_INDEX]);
        assert_eq!(&strips[42..48], &[6, 13, 5, 16, 12, RESTART_INDEX]);
    }
}
