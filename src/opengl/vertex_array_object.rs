use std::collections::BTreeMap;

use super::OpenGLObject;

#[derive(Debug, Copy, Clone)]
pub enum VertexFormat {
    F32,
    U8Normalized,
}

struct VertexAttribute {
    index: u32,
    binding_index: u32,
    dimensions: i32,
    offset: u32,
    format: VertexFormat,
}

impl VertexAttribute {
    fn commit_vao_format(&self, vao_handle: u32) {
        let (gl_type, normalized) = match self.format {
            VertexFormat::F32 => (gl::FLOAT, false),
            VertexFormat::U8Normalized => (gl::UNSIGNED_BYTE, true),
        };

        unsafe {
            gl::VertexArrayAttribFormat(
                vao_handle,
                self.index,
                self.dimensions,
                gl_type,
                normalized as u8,
                self.offset,
            )
        };
    }
}

struct VertexBufferBinding {
    handle: u32,
    offset: isize,
    stride: i32,
    divisor: u32,
}

/// Named vertex array object. Attribute and binding state is collected
/// first and replayed through the DSA entry points in `commit`.
pub struct VertexArrayObject {
    handle: u32,
    vertex_attribs: Vec<VertexAttribute>,
    vertex_buffer_bindings: BTreeMap<u32, VertexBufferBinding>,
}

impl VertexArrayObject {
    pub fn new() -> Self {
        let mut handle = 0;

        unsafe { gl::CreateVertexArrays(1, &raw mut handle) };

        Self {
            handle,
            vertex_attribs: Vec::new(),
            vertex_buffer_bindings: BTreeMap::new(),
        }
    }

    pub fn allocate_vertex_attribute(
        &mut self,
        index: u32,
        binding_index: u32,
        dimensions: i32,
        offset: u32,
        format: VertexFormat,
    ) {
        self.vertex_attribs.push(VertexAttribute {
            index,
            binding_index,
            dimensions,
            offset,
            format,
        });
    }

    /// A mat4 attribute occupies four consecutive locations, one vec4 column
    /// each.
    pub fn allocate_mat4_attribute(&mut self, index: u32, binding_index: u32) {
        let column_bytes = std::mem::size_of::<[f32; 4]>() as u32;
        for column in 0..4 {
            self.allocate_vertex_attribute(
                index + column,
                binding_index,
                4,
                column * column_bytes,
                VertexFormat::F32,
            );
        }
    }

    pub fn allocate_vertex_buffer_binding(
        &mut self,
        binding_index: u32,
        buffer: &dyn OpenGLObject,
        offset: isize,
        stride: usize,
        divisor: u32,
    ) {
        let vertex_buffer_binding = VertexBufferBinding {
            handle: buffer.handle(),
            offset,
            stride: stride as i32,
            divisor,
        };

        self.vertex_buffer_bindings
            .insert(binding_index, vertex_buffer_binding);
    }

    pub fn commit(&self, element_buffer_object: Option<&dyn OpenGLObject>) {
        for vertex_attrib in self.vertex_attribs.iter() {
            unsafe {
                gl::EnableVertexArrayAttrib(self.handle(), vertex_attrib.index);
                vertex_attrib.commit_vao_format(self.handle());
                gl::VertexArrayAttribBinding(
                    self.handle(),
                    vertex_attrib.index,
                    vertex_attrib.binding_index,
                );
            }
        }

        for (binding_index, binding) in self.vertex_buffer_bindings.iter() {
            unsafe {
                gl::VertexArrayVertexBuffer(
                    self.handle(),
                    *binding_index,
                    binding.handle,
                    binding.offset,
                    binding.stride,
                );

                if binding.divisor != 0 {
                    gl::VertexArrayBindingDivisor(self.handle(), *binding_index, binding.divisor);
                }
            }
        }

        if let Some(ebo) = element_buffer_object {
            unsafe { gl::VertexArrayElementBuffer(self.handle(), ebo.handle()) };
        }
    }

    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.handle()) };
    }

    pub fn unbind() {
        unsafe { gl::BindVertexArray(0) };
    }
}

impl OpenGLObject for VertexArrayObject {
    fn handle(&self) -> u32 {
        self.handle
    }
}

impl Drop for VertexArrayObject {
    fn drop(&mut self) {
        unsafe { gl::DeleteVertexArrays(1, &raw const self.handle) };
    }
}
