use super::ShaderProgram;
use crate::opengl::OpenGLObject;

pub struct ProgramPipeline {
    handle: u32,
    vertex: ShaderProgram<super::Vertex>,
    fragment: Option<ShaderProgram<super::Fragment>>,
}

impl ProgramPipeline {
    pub fn new(
        vertex_shader: ShaderProgram<super::Vertex>,
        fragment_shader: Option<ShaderProgram<super::Fragment>>,
    ) -> Self {
        let mut handle = 0;
        unsafe {
            gl::CreateProgramPipelines(1, &raw mut handle);

            gl::UseProgramStages(handle, gl::VERTEX_SHADER_BIT, vertex_shader.handle());

            if let Some(fragment) = &fragment_shader {
                gl::UseProgramStages(handle, gl::FRAGMENT_SHADER_BIT, fragment.handle());
            }

            crate::opengl::check_errors();
        }

        Self {
            handle,
            vertex: vertex_shader,
            fragment: fragment_shader,
        }
    }

    pub fn vertex(&self) -> &ShaderProgram<super::Vertex> {
        &self.vertex
    }

    pub fn bind(&self) {
        unsafe { gl::BindProgramPipeline(self.handle()) };
    }
}

impl OpenGLObject for ProgramPipeline {
    fn handle(&self) -> u32 {
        self.handle
    }
}

impl Drop for ProgramPipeline {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgramPipelines(1, &raw const self.handle) };
    }
}
