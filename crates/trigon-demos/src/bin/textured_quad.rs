use trigon_demos::textured_quad::{TexturedQuadConfig, TexturedQuadDemo};
use trigon_engine::device::GpuInit;
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::window::Runtime;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = TexturedQuadConfig::default().with_args(std::env::args().skip(1));
    log::info!("textures: {} + {}", config.textures[0].display(), config.textures[1].display());

    Runtime::run(TexturedQuadDemo::runtime_config(), GpuInit::default(), TexturedQuadDemo::new(config))
}
