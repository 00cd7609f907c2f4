use crate::render::camera::{OrbitCamera, Projector};
use crate::render::{GpuMesh, Material};
use winit::{
    dpi::LogicalSize,
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};

mod logger;
mod mesh;
mod opengl;
mod render;
mod scene;
mod time;

#[macro_use]
extern crate log;
extern crate gl;

const VERTEX_SRC: &str = r#"
    #version 450 core

    layout (location = 0) in vec3 v_pos;
    layout (location = 1) in vec4 v_color;
    layout (location = 2) in mat4 v_model;

    uniform mat4 model;
    uniform mat4 view;
    uniform mat4 projection;

    out gl_PerVertex { vec4 gl_Position; };

    layout (location = 0) out vec4 a_color;

    void main() {
        a_color = v_color;
        gl_Position = projection * view * model * v_model * vec4(v_pos, 1.0);
    }
"#;

const FRAGMENT_SRC: &str = r#"
    #version 450 core

    layout (location = 0) in vec4 a_color;

    out vec4 f_color;

    void main() {
       f_color = a_color;
    }
"#;

const INIT_WINDOW_SIZE: (f64, f64) = (1280.0, 720.0);
const FIELD_OF_VIEW: f32 = 45.0;
const NEAR_CLIP: f32 = 0.1;
const FAR_CLIP: f32 = 128.0;

const ROTATION_STEP: f32 = std::f32::consts::TAU / 64.0;
const ZOOM_STEP: f32 = 1.0;
const SPIN_SPEED: f32 = std::f32::consts::TAU / 24.0;

const WHITE: [u8; 4] = [255, 255, 255, 255];
const YELLOW: [u8; 4] = [255, 255, 0, 255];
const SLATE: [u8; 4] = [120, 144, 196, 255];
const EMBER: [u8; 4] = [255, 140, 0, 255];
const PEWTER: [u8; 4] = [180, 180, 180, 255];

struct SceneObject {
    mesh: GpuMesh,
    spins: bool,
}

fn configure_environment() -> (EventLoop<()>, Window, raw_gl_context::GlContext) {
    let event_loop = EventLoop::new();
    let window = winit::window::WindowBuilder::new()
        .with_title("Orbs")
        .with_inner_size(LogicalSize::new(INIT_WINDOW_SIZE.0, INIT_WINDOW_SIZE.1))
        .build(&event_loop)
        .unwrap();
    let gl_context = raw_gl_context::GlContext::create(
        &window,
        raw_gl_context::GlConfig {
            version: (4, 5),
            profile: raw_gl_context::Profile::Core,
            red_bits: 8,
            blue_bits: 8,
            green_bits: 8,
            alpha_bits: 0,
            depth_bits: 24,
            stencil_bits: 0,
            samples: None,
            srgb: true,
            double_buffer: true,
            vsync: true,
        },
    )
    .unwrap();
    gl_context.make_current();
    gl::load_with(|s| gl_context.get_proc_address(s) as *const _);

    // Initialize OpenGL.
    unsafe {
        let version = std::ffi::CStr::from_ptr(gl::GetString(gl::VERSION) as *const _);
        info!("OpenGL version string: {:?}", version);

        let mut flags = 0;
        gl::GetIntegerv(gl::CONTEXT_FLAGS, &raw mut flags);
        if ((flags as u32) & gl::CONTEXT_FLAG_DEBUG_BIT) == 0 {
            warn!(
                "OpenGL device does not support a debug context. Error reporting will be impacted."
            );
        }
        opengl::configure_debug_output();

        gl::ClearColor(0.0, 0.0, 0.0, 1.0);
        gl::Enable(gl::DEPTH_TEST);

        // Every strip/fan in the element buffers terminates on the shared
        // sentinel value.
        gl::Enable(gl::PRIMITIVE_RESTART);
        gl::PrimitiveRestartIndex(mesh::RESTART_INDEX);
    }

    (event_loop, window, gl_context)
}

fn build_scene() -> Vec<SceneObject> {
    vec![
        SceneObject {
            mesh: GpuMesh::new(&mesh::shapes::axes(1.0), &scene::single(6.0)),
            spins: false,
        },
        SceneObject {
            mesh: GpuMesh::new(&mesh::shapes::circle(128, WHITE, YELLOW), &scene::single(5.5)),
            spins: true,
        },
        SceneObject {
            mesh: GpuMesh::new(&mesh::shapes::cube(1.0, PEWTER), &scene::lattice(3, 1.2, 0.25)),
            spins: true,
        },
        SceneObject {
            mesh: GpuMesh::new(&mesh::shapes::octahedron(EMBER), &scene::ring(12, 3.0, 0.4)),
            spins: true,
        },
        SceneObject {
            mesh: GpuMesh::new(&mesh::sphere::generate(4, SLATE), &scene::spiral(64, 5.0, 0.3)),
            spins: true,
        },
    ]
}

fn main() {
    log::set_max_level(log::LevelFilter::Debug);
    log::set_logger(&*logger::LOGGER).unwrap();

    let (event_loop, window, gl_context) = configure_environment();

    use opengl::shader::{Fragment, ProgramPipeline, ShaderProgram, Vertex};

    let material = Material {
        pipeline: ProgramPipeline::new(
            ShaderProgram::<Vertex>::new(&[VERTEX_SRC]),
            Some(ShaderProgram::<Fragment>::new(&[FRAGMENT_SRC])),
        ),
    };

    let objects = build_scene();

    let mut camera = OrbitCamera::new(
        glam::Vec3::new(8.0, 12.0, 16.0),
        glam::Vec3::ZERO,
        4.0,
        44.0,
    );
    let mut projector = Projector::new_perspective(
        FIELD_OF_VIEW,
        (INIT_WINDOW_SIZE.0 / INIT_WINDOW_SIZE.1) as f32,
        NEAR_CLIP,
        FAR_CLIP,
    );

    let mut spinning = false;
    let mut spin_angle = 0.0f32;

    let mut stopwatch = time::Stopwatch::start_new();
    let mut frame_counter = 0u32;
    let mut time_since_last_second = 0.0f64;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        use winit::event::{ElementState, Event, MouseScrollDelta, WindowEvent};

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => *control_flow = ControlFlow::Exit,

            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                // Minimizing reports a zero-sized surface; keep the last
                // projection until the window comes back.
                if size.width > 0 && size.height > 0 {
                    unsafe {
                        gl::Viewport(0, 0, size.width as i32, size.height as i32);
                    }

                    let parameters = projector.parameters();
                    projector = Projector::new_perspective(
                        parameters.x,
                        size.width as f32 / size.height as f32,
                        parameters.z,
                        parameters.w,
                    );
                }
            }

            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { input, .. },
                ..
            } => {
                use winit::event::VirtualKeyCode;

                if input.state != ElementState::Pressed {
                    return;
                }

                if let Some(keycode) = input.virtual_keycode {
                    match keycode {
                        VirtualKeyCode::Escape => {
                            *control_flow = ControlFlow::Exit;
                        }

                        VirtualKeyCode::A => camera.yaw(-ROTATION_STEP),
                        VirtualKeyCode::D => camera.yaw(ROTATION_STEP),
                        VirtualKeyCode::W => camera.pitch(ROTATION_STEP),
                        VirtualKeyCode::S => camera.pitch(-ROTATION_STEP),

                        VirtualKeyCode::R => spinning = !spinning,

                        VirtualKeyCode::E => {
                            info!("GL ERROR CHECK: {}", unsafe { gl::GetError() });
                        }

                        _ => {}
                    }
                }
            }

            Event::WindowEvent {
                event: WindowEvent::MouseWheel { delta, .. },
                ..
            } => {
                if let MouseScrollDelta::LineDelta(_, y) = delta {
                    camera.zoom(-y * ZOOM_STEP);
                }
            }

            Event::MainEventsCleared => {
                let delta_time = stopwatch.elapsed();
                stopwatch.restart();

                if spinning {
                    spin_angle += SPIN_SPEED * delta_time.as_secs_f32();
                }

                frame_counter += 1;
                time_since_last_second += delta_time.as_secs_f64();
                if time_since_last_second > 1.0 {
                    info!("FPS: {}", frame_counter);
                    window.set_title(format!("Orbs FPS {}", frame_counter).as_str());
                    time_since_last_second = 0.0;
                    frame_counter = 0;
                }

                unsafe {
                    gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
                }

                material.pipeline.bind();
                let vertex_stage = material.pipeline.vertex();
                vertex_stage.set_uniform_mat4("view", camera.view()).ok();
                vertex_stage
                    .set_uniform_mat4("projection", projector.matrix())
                    .ok();

                let spin = glam::Mat4::from_rotation_y(spin_angle);
                for object in objects.iter() {
                    let model = if object.spins { spin } else { glam::Mat4::IDENTITY };
                    vertex_stage.set_uniform_mat4("model", model).ok();
                    object.mesh.draw();
                }

                opengl::check_errors();

                gl_context.swap_buffers();
            }

            _ => {}
        }
    })
}
