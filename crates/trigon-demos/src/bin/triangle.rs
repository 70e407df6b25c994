use trigon_demos::triangle::TriangleDemo;
use trigon_engine::device::GpuInit;
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::window::Runtime;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    Runtime::run(TriangleDemo::runtime_config(), GpuInit::default(), TriangleDemo::new())
}
