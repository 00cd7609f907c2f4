pub mod camera;

use crate::mesh::MeshData;
use crate::opengl::{
    buffer::Buffer, shader::ProgramPipeline, VertexArrayObject, VertexFormat,
};
use glam::Mat4;
use std::mem::size_of;

pub struct Material {
    pub pipeline: ProgramPipeline,
}

/// GPU residency for one mesh: the vertex array plus its vertex, element
/// and per-instance model-matrix buffers. Construction uploads everything
/// through mapped writes; drawing walks the partition table.
pub struct GpuMesh {
    vao: VertexArrayObject,
    vertex_buffer: Buffer<crate::mesh::Vertex>,
    element_buffer: Buffer<u32>,
    instance_buffer: Buffer<Mat4>,
    partitions: Vec<crate::mesh::Partition>,
}

impl GpuMesh {
    pub fn new(mesh: &MeshData, instances: &[Mat4]) -> Self {
        assert!(!mesh.vertices.is_empty(), "Mesh has no vertices to upload.");
        assert!(
            mesh.partitions_are_contiguous(),
            "Mesh partitions do not tile the element buffer."
        );
        assert!(!instances.is_empty(), "Mesh needs at least one instance.");

        let vertex_buffer = Buffer::new_with_data(&mesh.vertices);
        let element_buffer = Buffer::new_with_data(&mesh.indices);
        let instance_buffer = Buffer::new_with_data(instances);

        let mut vao = VertexArrayObject::new();
        vao.allocate_vertex_attribute(0, 0, 3, 0, VertexFormat::F32);
        vao.allocate_vertex_attribute(
            1,
            0,
            4,
            size_of::<[f32; 3]>() as u32,
            VertexFormat::U8Normalized,
        );
        vao.allocate_mat4_attribute(2, 1);
        vao.allocate_vertex_buffer_binding(0, &vertex_buffer, 0, size_of::<crate::mesh::Vertex>(), 0);
        vao.allocate_vertex_buffer_binding(1, &instance_buffer, 0, size_of::<Mat4>(), 1);
        vao.commit(Some(&element_buffer));

        Self {
            vao,
            vertex_buffer,
            element_buffer,
            instance_buffer,
            partitions: mesh.partitions.clone(),
        }
    }

    pub fn instance_count(&self) -> usize {
        self.instance_buffer.data_len()
    }

    pub fn draw(&self) {
        self.vao.bind();
        for partition in self.partitions.iter() {
            unsafe {
                gl::DrawElementsInstanced(
                    partition.mode as u32,
                    partition.len as i32,
                    gl::UNSIGNED_INT,
                    (partition.offset * size_of::<u32>()) as *const _,
                    self.instance_count() as i32,
                );
            }
        }
        VertexArrayObject::unbind();
    }
}
