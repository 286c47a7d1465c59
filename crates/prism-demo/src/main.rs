mod palette;
mod triangle;

use anyhow::Result;
use prism_engine::logging::{LoggingConfig, init_logging};
use prism_engine::window::{Runtime, RuntimeConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::triangle::{DemoConfig, TriangleApp};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let demo = DemoConfig::default();
    log::info!(
        "shaders: {} + {}, recolor every {} frames",
        demo.vertex_shader.display(),
        demo.fragment_shader.display(),
        demo.recolor.interval()
    );

    let app = TriangleApp::new(demo, StdRng::from_entropy());
    Runtime::run(RuntimeConfig::default(), app)
}
