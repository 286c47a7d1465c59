use std::ffi::CString;
use std::num::NonZeroU32;

use anyhow::{Context, Result, anyhow};
use glutin::config::{Api, Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::GlInit;
use crate::gfx::{Gl, InfoString, NativeGl};

/// A window, its drawable surface and a context current on this thread.
///
/// Fields drop in declaration order: surface and context go before the
/// window they render into.
pub struct GlContext {
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
    gl: NativeGl,
}

impl GlContext {
    /// Creates the window described by `attrs` and a context per `init`,
    /// makes it current and loads GL.
    pub fn create(
        event_loop: &ActiveEventLoop,
        attrs: WindowAttributes,
        init: &GlInit,
    ) -> Result<Self> {
        // Without an explicit API, EGL only enumerates GLES2-renderable configs.
        let template = ConfigTemplateBuilder::new()
            .with_api(Api::OPENGL)
            .with_single_buffering(!init.double_buffer);

        // glutin reports this one as `Box<dyn Error>`, which is not `Send`.
        let (window, config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs))
            .build(event_loop, template, pick_config)
            .map_err(|e| anyhow!("failed to create window and GL display: {e}"))?;
        let window = window.context("GL display was created without a window")?;

        let display = config.display();
        let raw_window = window.window_handle().ok().map(|h| h.as_raw());

        let (major, minor) = init.version;
        let (profile, profile_name) = if init.core_profile {
            (GlProfile::Core, "core")
        } else {
            (GlProfile::Compatibility, "compatibility")
        };
        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .with_profile(profile)
            .build(raw_window);

        let not_current = unsafe { display.create_context(&config, &context_attrs) }
            .with_context(|| format!("failed to create OpenGL {major}.{minor} {profile_name} context"))?;

        let surface_attrs = window
            .build_surface_attributes(Default::default())
            .context("failed to describe window surface")?;
        let surface = unsafe { display.create_window_surface(&config, &surface_attrs) }
            .context("failed to create window surface")?;

        let context = not_current
            .make_current(&surface)
            .context("failed to make GL context current")?;

        if init.vsync {
            if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
                log::warn!("vsync unavailable, continuing without it: {e}");
            }
        }

        // SAFETY: the context was made current on this thread just above, and
        // the returned `NativeGl` is `!Send`.
        let gl = unsafe {
            NativeGl::load_with(|symbol| {
                CString::new(symbol).map_or(std::ptr::null(), |s| display.get_proc_address(&s))
            })
        };
        log_driver(&gl);

        Ok(Self {
            surface,
            context,
            window,
            gl,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn gl(&self) -> &NativeGl {
        &self.gl
    }

    /// Presents the back buffer. Blocks on vsync when it is enabled.
    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")
    }

    /// Matches the drawable to the window's current size.
    ///
    /// Some platforms (EGL on Wayland) need this to keep presenting. The GL
    /// viewport is left untouched.
    pub fn resize_surface(&self) {
        self.window.resize_surface(&self.surface, &self.context);
    }
}

/// Takes the best-ranked config; see [`config_rank`].
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .min_by_key(|c| config_rank(c.api(), c.num_samples()))
        .expect("glutin only calls the picker with at least one config")
}

/// Sort key for config selection, lower is better.
///
/// Configs that can back a desktop OpenGL context come first, then the one
/// with the fewest samples; the renderer wants no MSAA.
fn config_rank(api: Api, samples: u8) -> (bool, u8) {
    (!api.contains(Api::OPENGL), samples)
}

fn log_driver(gl: &dyn Gl) {
    let get = |name| gl.get_string(name).unwrap_or_else(|| "unknown".to_owned());
    log::info!(
        "OpenGL {} on {} ({})",
        get(InfoString::Version),
        get(InfoString::Renderer),
        get(InfoString::Vendor)
    );
    log::debug!("GLSL {}", get(InfoString::ShadingLanguageVersion));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn best(candidates: &[(Api, u8)]) -> (Api, u8) {
        *candidates
            .iter()
            .min_by_key(|(api, samples)| config_rank(*api, *samples))
            .unwrap()
    }

    #[test]
    fn gles_only_configs_lose_to_desktop_gl() {
        let picked = best(&[(Api::GLES2, 0), (Api::GLES2 | Api::GLES3, 0), (Api::OPENGL, 4)]);
        assert_eq!(picked, (Api::OPENGL, 4));
    }

    #[test]
    fn fewest_samples_among_desktop_gl() {
        let picked = best(&[
            (Api::OPENGL | Api::GLES2, 8),
            (Api::OPENGL, 0),
            (Api::GLES2, 0),
        ]);
        assert_eq!(picked, (Api::OPENGL, 0));
    }

    #[test]
    fn rank_requires_the_opengl_bit() {
        assert!(config_rank(Api::OPENGL | Api::GLES3, 16) < config_rank(Api::GLES3, 0));
        assert_eq!(config_rank(Api::empty(), 2), (true, 2));
    }
}
