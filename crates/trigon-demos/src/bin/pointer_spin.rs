use trigon_demos::pointer_spin::PointerSpinDemo;
use trigon_engine::device::GpuInit;
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::window::Runtime;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    Runtime::run(PointerSpinDemo::runtime_config(), GpuInit::default(), PointerSpinDemo::new())
}
