use crate::opengl::OpenGLObject;
use std::collections::BTreeMap;

pub trait ShaderType {
    const SHADER_TYPE: u32;
}

pub enum Fragment {}
impl ShaderType for Fragment {
    const SHADER_TYPE: u32 = gl::FRAGMENT_SHADER;
}

pub enum Vertex {}
impl ShaderType for Vertex {
    const SHADER_TYPE: u32 = gl::VERTEX_SHADER;
}

/// Separable single-stage program. Uniform locations are resolved once at
/// construction into a name map.
pub struct ShaderProgram<T: ShaderType> {
    handle: u32,
    uniforms: BTreeMap<String, i32>,
    marker: std::marker::PhantomData<T>,
}

impl<T: ShaderType> ShaderProgram<T> {
    fn get_info_log(handle: u32) -> Option<String> {
        let mut log_len = 0;
        unsafe { gl::GetProgramiv(handle, gl::INFO_LOG_LENGTH, &raw mut log_len) };

        if log_len > 0 {
            let mut log = vec![0; log_len as usize];
            unsafe {
                gl::GetProgramInfoLog(
                    handle,
                    log.len() as i32,
                    &raw mut log_len,
                    log.as_mut_ptr() as *mut _,
                )
            };

            Some(
                String::from_utf8(log)
                    .expect("Failed to convert info log bytes into a valid UTF-8 string."),
            )
        } else {
            None
        }
    }

    pub fn new(program_strings: &[&str]) -> Self {
        let program_strings = program_strings
            .iter()
            .map(|source| std::ffi::CString::new(*source).expect("Shader source contains a NUL byte."))
            .collect::<Vec<_>>();
        let program_ptrs = program_strings
            .iter()
            .map(|source| source.as_ptr())
            .collect::<Vec<_>>();

        unsafe {
            let handle = gl::CreateShaderProgramv(
                T::SHADER_TYPE,
                program_ptrs.len() as i32,
                program_ptrs.as_ptr(),
            );

            let mut link_status = 0;
            gl::GetProgramiv(handle, gl::LINK_STATUS, &raw mut link_status);
            if link_status == gl::FALSE as i32 {
                panic!(
                    "OpenGL failed to compile program object: {}",
                    Self::get_info_log(handle).unwrap_or_default()
                );
            }

            let mut uniforms = BTreeMap::new();
            let mut uniform_count = 0;
            let mut max_uniform_len = 0;
            gl::GetProgramiv(handle, gl::ACTIVE_UNIFORMS, &raw mut uniform_count);
            gl::GetProgramiv(
                handle,
                gl::ACTIVE_UNIFORM_MAX_LENGTH,
                &raw mut max_uniform_len,
            );

            debug!("Identified {} uniforms for current shader.", uniform_count);
            for index in 0..(uniform_count as u32) {
                let mut name_buffer = vec![0u8; max_uniform_len as usize];
                let mut name_len = 0;

                gl::GetActiveUniformName(
                    handle,
                    index,
                    name_buffer.len() as i32,
                    &raw mut name_len,
                    name_buffer.as_mut_ptr() as *mut _,
                );

                let location = gl::GetUniformLocation(handle, name_buffer.as_ptr() as *const _);

                name_buffer.truncate(name_len as usize);
                uniforms.insert(
                    String::from_utf8(name_buffer)
                        .expect("Could not convert uniform name to string from buffer."),
                    location,
                );
            }

            Self {
                handle,
                uniforms,
                marker: std::marker::PhantomData,
            }
        }
    }

    pub fn set_uniform_mat4(&self, name: &str, value: glam::Mat4) -> Result<(), ()> {
        match self.uniforms.get(name) {
            Some(location) => unsafe {
                gl::ProgramUniformMatrix4fv(
                    self.handle(),
                    *location,
                    1,
                    false as u8,
                    value.as_ref().as_ptr(),
                );
                Ok(())
            },
            None => Err(()),
        }
    }
}

impl<T: ShaderType> OpenGLObject for ShaderProgram<T> {
    fn handle(&self) -> u32 {
        self.handle
    }
}

impl<T: ShaderType> Drop for ShaderProgram<T> {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.handle) };
    }
}
