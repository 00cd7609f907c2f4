use super::OpenGLObject;
use std::mem::size_of;

bitflags::bitflags! {
    pub struct MapBufferAccessFlags : u32 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;
        const INVALIDATE_RANGE = 1 << 2;
        const INVALIDATE_BUFFER = 1 << 3;
        const FLUSH_EXPLICIT = 1 << 4;
        const UNSYNCHRONIZED = 1 << 5;
        const PERSISTENT = 1 << 6;
        const COHERENT = 1 << 7;
    }
}

bitflags::bitflags! {
    pub struct BufferStorageFlags : u32 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;
        const PERSISTENT = 1 << 6;
        const COHERENT = 1 << 7;
        const DYNAMIC = 1 << 8;
        const CLIENT = 1 << 9;
    }
}

/// Named buffer object with immutable storage. Uploads go through a mapped
/// pointer ("pinning"), never through a bound target.
pub struct Buffer<T: Copy> {
    handle: u32,
    data_len: usize,
    data_ptr: Option<*mut T>,
}

impl<T: Copy> Buffer<T> {
    pub fn new() -> Self {
        let mut handle = 0;

        unsafe { gl::CreateBuffers(1, &raw mut handle) };

        Self {
            handle,
            data_len: 0,
            data_ptr: None,
        }
    }

    pub fn new_storage(data_len: usize, flags: BufferStorageFlags) -> Self {
        let mut buffer = Self::new();
        buffer.data_len = data_len;

        unsafe {
            gl::NamedBufferStorage(
                buffer.handle(),
                buffer.byte_len() as isize,
                std::ptr::null(),
                flags.bits(),
            )
        };

        buffer
    }

    /// Map-write storage holding exactly `data`.
    pub fn new_with_data(data: &[T]) -> Self {
        let mut buffer = Self::new_storage(data.len(), BufferStorageFlags::WRITE);

        unsafe {
            buffer.pin(MapBufferAccessFlags::WRITE | MapBufferAccessFlags::INVALIDATE_BUFFER);
            std::ptr::copy_nonoverlapping(
                data.as_ptr(),
                buffer
                    .data_ptr
                    .expect("Buffer was not pinned for its initial upload."),
                data.len(),
            );
            buffer.unpin();
        }

        buffer
    }

    pub fn data_len(&self) -> usize {
        self.data_len
    }

    pub fn byte_len(&self) -> usize {
        self.data_len() * size_of::<T>()
    }

    pub unsafe fn pin(&mut self, flags: MapBufferAccessFlags) {
        assert!(self.data_len() > 0, "Buffer length must be >0 to be pinned.");
        assert!(self.data_ptr.is_none(), "Buffer has already been pinned!");

        self.data_ptr = Some(gl::MapNamedBufferRange(
            self.handle(),
            0,
            self.byte_len() as isize,
            flags.bits(),
        ) as *mut _);
    }

    pub unsafe fn unpin(&mut self) {
        gl::UnmapNamedBuffer(self.handle());
        self.data_ptr = None;
    }
}

impl<T: Copy> OpenGLObject for Buffer<T> {
    fn handle(&self) -> u32 {
        self.handle
    }
}

impl<T: Copy> Drop for Buffer<T> {
    fn drop(&mut self) {
        unsafe {
            if self.data_ptr.is_some() {
                self.unpin();
            }

            gl::DeleteBuffers(1, &raw const self.handle);
        }
    }
}
