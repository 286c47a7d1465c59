use std::path::PathBuf;

use anyhow::Result;
use prism_engine::core::{App, AppControl, FrameCtx, InitCtx};
use prism_engine::gfx::{Gl, UniformLocation};
use prism_engine::render::{Position, ShaderProgram, ShaderSources, StaticMesh};
use prism_engine::time::Cadence;
use rand::Rng;

use crate::palette::random_color;

/// The triangle, in normalized device coordinates.
pub const TRIANGLE: [Position; 3] = [
    Position::new(-0.5, -0.5, 0.0),
    Position::new(0.5, -0.5, 0.0),
    Position::new(0.0, 0.5, 0.0),
];

/// `vec4` uniform the fragment shader reads its output color from.
pub const COLOR_UNIFORM: &str = "color";

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub vertex_shader: PathBuf,
    pub fragment_shader: PathBuf,
    pub recolor: Cadence,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            vertex_shader: PathBuf::from("triangle.vert"),
            fragment_shader: PathBuf::from("triangle.frag"),
            recolor: Cadence::every(60),
        }
    }
}

/// GL objects created once in `on_init` and used every frame after.
#[derive(Debug)]
struct Scene {
    program: ShaderProgram,
    mesh: StaticMesh,
    color: UniformLocation,
}

/// Draws [`TRIANGLE`] every frame and gives it a new random color on each
/// frame the recolor cadence fires on.
pub struct TriangleApp<R> {
    config: DemoConfig,
    rng: R,
    scene: Option<Scene>,

    // Frame time accumulated since the last recolor.
    dt_sum: f32,
    dt_frames: u32,
}

impl<R: Rng> TriangleApp<R> {
    pub fn new(config: DemoConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            scene: None,
            dt_sum: 0.0,
            dt_frames: 0,
        }
    }

    fn setup(&mut self, gl: &dyn Gl, sources: &ShaderSources) {
        let program = ShaderProgram::build(gl, sources);
        program.bind(gl);
        let color = program.uniform_location(gl, COLOR_UNIFORM);

        let mesh = StaticMesh::upload(gl, &TRIANGLE);

        self.scene = Some(Scene {
            program,
            mesh,
            color,
        });
    }

    fn recolor(&mut self, gl: &dyn Gl, location: UniformLocation, frame_index: u64) {
        let color = random_color(&mut self.rng);
        gl.uniform_4f(location, color.to_array());

        if self.dt_frames > 0 {
            let avg_ms = self.dt_sum / self.dt_frames as f32 * 1000.0;
            log::debug!("frame {frame_index}: new color {color:?}, avg frame {avg_ms:.2} ms");
        }
        self.dt_sum = 0.0;
        self.dt_frames = 0;
    }
}

impl<R: Rng> App for TriangleApp<R> {
    fn on_init(&mut self, ctx: &mut InitCtx<'_>) -> Result<()> {
        let sources = ShaderSources::read(&self.config.vertex_shader, &self.config.fragment_shader)?;
        self.setup(ctx.gl, &sources);

        if let Some(scene) = &self.scene {
            log::info!(
                "triangle ready (program {}, linked: {})",
                scene.program.id().0,
                scene.program.is_linked()
            );
        }
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let gl = ctx.gl;
        gl.clear_color_buffer();

        let Some(location) = self.scene.as_ref().map(|s| s.color) else {
            return AppControl::Continue;
        };

        self.dt_sum += ctx.time.dt;
        self.dt_frames += 1;

        let frame_index = ctx.frame_index();
        if self.config.recolor.fires(frame_index) {
            self.recolor(gl, location, frame_index);
        }

        if let Some(scene) = &self.scene {
            scene.mesh.draw(gl);
        }

        AppControl::Continue
    }
}
