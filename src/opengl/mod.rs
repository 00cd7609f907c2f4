mod vertex_array_object;
pub mod buffer;
pub mod shader;

pub use vertex_array_object::*;

use num_enum::TryFromPrimitive;

pub trait OpenGLObject {
    fn handle(&self) -> u32;

    fn get_info_log(&self) -> Option<String> {
        let mut log_len = 0;
        unsafe { gl::GetProgramiv(self.handle(), gl::INFO_LOG_LENGTH, &raw mut log_len) };

        if log_len > 0 {
            let mut log = vec![0; log_len as usize];
            unsafe {
                gl::GetProgramInfoLog(
                    self.handle(),
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
}

pub fn check_errors() {
    loop {
        let error = unsafe { gl::GetError() };
        if error == gl::NO_ERROR {
            break;
        }

        error!("OpenGL error {:#06X}", error);
    }
}

#[repr(u32)]
#[derive(Debug, TryFromPrimitive)]
pub enum DebugSource {
    Api = 33350,
    WindowSystem = 33351,
    ShaderCompiler = 33352,
    ThirdParty = 33353,
    Application = 33354,
    Other = 33355,
}

#[repr(u32)]
#[derive(Debug, TryFromPrimitive)]
pub enum DebugType {
    Error = 33356,
    DeprecatedBehavior = 33357,
    UndefinedBehavior = 33358,
    Portability = 33359,
    Performance = 33360,
    Other = 33361,
    Marker = 33384,
    PushGroup = 33385,
    PopGroup = 33386,
}

#[repr(u32)]
#[derive(Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum DebugSeverity {
    Notification = 33387,
    High = 37190,
    Medium = 37191,
    Low = 37192,
}

/// Routes driver debug messages through the logger. The context must have
/// been created with the debug flag for the callback to receive anything.
pub fn configure_debug_output() {
    unsafe {
        gl::Enable(gl::DEBUG_OUTPUT);
        gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
        gl::DebugMessageCallback(Some(debug_message_callback), std::ptr::null());
    }
}

extern "system" fn debug_message_callback(
    source: u32,
    gltype: u32,
    id: u32,
    severity: u32,
    length: i32,
    message: *const std::os::raw::c_char,
    _user_param: *mut std::ffi::c_void,
) {
    let message = unsafe { std::slice::from_raw_parts(message as *const u8, length as usize) };
    let message = String::from_utf8_lossy(message);

    let source = DebugSource::try_from(source);
    let gltype = DebugType::try_from(gltype);

    match DebugSeverity::try_from(severity) {
        Ok(DebugSeverity::High) => error!("[{:?} > {:?}] {} {}", source, gltype, id, message),
        Ok(DebugSeverity::Medium) | Ok(DebugSeverity::Low) => {
            warn!("[{:?} > {:?}] {} {}", source, gltype, id, message)
        }
        _ => debug!("[{:?} > {:?}] {} {}", source, gltype, id, message),
    }
}
