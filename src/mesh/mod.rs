pub mod shapes;
pub mod sphere;

/// Sentinel element value that terminates the current strip/fan.
/// Must match the index the context registers via `glPrimitiveRestartIndex`.
pub const RESTART_INDEX: u32 = u32::MAX;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [u8; 4],
}

impl Vertex {
    pub const fn new(position: [f32; 3], color: [u8; 4]) -> Self {
        Self { position, color }
    }
}

#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrimitiveMode {
    Lines = 1,
    Triangles = 4,
    TriangleStrip = 5,
    TriangleFan = 6,
}

/// One indexed draw range. `offset` and `len` are in elements; conversion
/// to byte offsets happens at the draw call and nowhere else.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Partition {
    pub mode: PrimitiveMode,
    pub offset: usize,
    pub len: usize,
}

#[derive(Debug, Default, Clone)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub partitions: Vec<Partition>,
}

impl MeshData {
    /// Partitions must tile the index buffer exactly, in order.
    pub fn partitions_are_contiguous(&self) -> bool {
        let mut cursor = 0;
        for partition in self.partitions.iter() {
            if partition.offset != cursor {
                return false;
            }
            cursor += partition.len;
        }
        cursor == self.indices.len()
    }
}
