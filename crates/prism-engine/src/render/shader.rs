use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::gfx::{Gl, ProgramId, ShaderId, ShaderStage, UniformLocation};

/// Source text for the two stages of a program.
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// Reads both stages from disk. Relative paths resolve against the
    /// process working directory.
    pub fn read(vertex: &Path, fragment: &Path) -> Result<Self> {
        let vertex_src = fs::read_to_string(vertex)
            .with_context(|| format!("failed to read vertex shader {}", vertex.display()))?;
        let fragment_src = fs::read_to_string(fragment)
            .with_context(|| format!("failed to read fragment shader {}", fragment.display()))?;

        Ok(Self {
            vertex: vertex_src,
            fragment: fragment_src,
        })
    }
}

/// A program built from one vertex and one fragment shader.
///
/// Compile and link failures do not abort construction. The program object
/// still exists and can be bound; it just renders nothing useful. The driver's
/// info log is reported at `warn` so the failure is visible.
#[derive(Debug)]
pub struct ShaderProgram {
    id: ProgramId,
    linked: bool,
}

impl ShaderProgram {
    pub fn build(gl: &dyn Gl, sources: &ShaderSources) -> Self {
        let vs = compile_stage(gl, ShaderStage::Vertex, &sources.vertex);
        let fs = compile_stage(gl, ShaderStage::Fragment, &sources.fragment);

        let id = gl.create_program();
        gl.attach_shader(id, vs);
        gl.attach_shader(id, fs);
        gl.link_program(id);

        let linked = gl.program_link_status(id);
        if !linked {
            log::warn!("shader program {} failed to link: {}", id.0, gl.program_info_log(id));
        }

        // The program keeps the compiled stages alive; the shader names are
        // flagged for deletion whether or not linking worked.
        gl.delete_shader(vs);
        gl.delete_shader(fs);

        log::debug!("shader program {} built (linked: {linked})", id.0);
        Self { id, linked }
    }

    pub fn id(&self) -> ProgramId {
        self.id
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Makes this the current program.
    pub fn bind(&self, gl: &dyn Gl) {
        gl.use_program(self.id);
    }

    pub fn uniform_location(&self, gl: &dyn Gl, name: &str) -> UniformLocation {
        let loc = gl.uniform_location(self.id, name);
        if !loc.is_active() {
            log::debug!("uniform `{name}` is not active in program {}", self.id.0);
        }
        loc
    }
}

fn compile_stage(gl: &dyn Gl, stage: ShaderStage, source: &str) -> ShaderId {
    let shader = gl.create_shader(stage);
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.shader_compile_status(shader) {
        log::warn!(
            "{} shader failed to compile: {}",
            stage.label(),
            gl.shader_info_log(shader)
        );
    }

    shader
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{GlCall, RecordingGl};

    fn sources() -> ShaderSources {
        ShaderSources {
            vertex: "#version 330 core\nvoid main() {}\n".to_owned(),
            fragment: "#version 330 core\nout vec4 o;\nvoid main() { o = vec4(1.0); }\n".to_owned(),
        }
    }

    fn attached(gl: &RecordingGl) -> Vec<ShaderId> {
        gl.calls()
            .into_iter()
            .filter_map(|c| match c {
                GlCall::AttachShader(_, s) => Some(s),
                _ => None,
            })
            .collect()
    }

    fn stage_of(gl: &RecordingGl, id: ShaderId) -> Option<ShaderStage> {
        gl.calls().into_iter().find_map(|c| match c {
            GlCall::CreateShader(stage, s) if s == id => Some(stage),
            _ => None,
        })
    }

    #[test]
    fn attaches_one_shader_per_stage() {
        let gl = RecordingGl::new();
        let program = ShaderProgram::build(&gl, &sources());

        let shaders = attached(&gl);
        assert_eq!(shaders.len(), 2);
        assert_eq!(stage_of(&gl, shaders[0]), Some(ShaderStage::Vertex));
        assert_eq!(stage_of(&gl, shaders[1]), Some(ShaderStage::Fragment));
        assert!(program.is_linked());
    }

    #[test]
    fn deletes_shaders_after_link() {
        let gl = RecordingGl::new();
        let program = ShaderProgram::build(&gl, &sources());
        let calls = gl.calls();

        let link = calls
            .iter()
            .position(|c| *c == GlCall::LinkProgram(program.id()))
            .unwrap();

        for shader in attached(&gl) {
            let delete = calls
                .iter()
                .position(|c| *c == GlCall::DeleteShader(shader))
                .unwrap();
            assert!(delete > link);
        }
    }

    #[test]
    fn failed_link_still_deletes_shaders() {
        let gl = RecordingGl::new();
        gl.fail_link();

        let program = ShaderProgram::build(&gl, &sources());

        assert!(!program.is_linked());
        assert_eq!(gl.count(|c| matches!(c, GlCall::DeleteShader(_))), 2);
        assert_eq!(gl.count(|c| matches!(c, GlCall::LinkProgram(_))), 1);
    }

    #[test]
    fn failed_compile_still_links() {
        let gl = RecordingGl::new();
        gl.fail_compile();

        ShaderProgram::build(&gl, &sources());

        assert_eq!(gl.count(|c| matches!(c, GlCall::LinkProgram(_))), 1);
        assert_eq!(gl.count(|c| matches!(c, GlCall::DeleteShader(_))), 2);
    }

    #[test]
    fn sources_reach_matching_stage() {
        let gl = RecordingGl::new();
        let src = sources();
        ShaderProgram::build(&gl, &src);

        let vs = attached(&gl)[0];
        assert!(gl.calls().contains(&GlCall::ShaderSource(vs, src.vertex.clone())));
    }

    #[test]
    fn bind_uses_program() {
        let gl = RecordingGl::new();
        let program = ShaderProgram::build(&gl, &sources());
        gl.take_calls();

        program.bind(&gl);
        assert_eq!(gl.calls(), vec![GlCall::UseProgram(program.id())]);
    }

    #[test]
    fn missing_uniform_is_inactive() {
        let gl = RecordingGl::new().with_uniform("color", 3);
        let program = ShaderProgram::build(&gl, &sources());

        assert_eq!(program.uniform_location(&gl, "color"), UniformLocation(3));
        assert!(!program.uniform_location(&gl, "tint").is_active());
    }

    #[test]
    fn read_reports_missing_file() {
        let dir = std::env::temp_dir();
        let missing = dir.join("prism-engine-no-such-shader.vert");
        let err = ShaderSources::read(&missing, &missing).unwrap_err();
        assert!(format!("{err:#}").contains("vertex shader"));
    }
}
