use trigon_demos::steer::{SteerConfig, SteerDemo};
use trigon_engine::device::GpuInit;
use trigon_engine::logging::{init_logging, LoggingConfig};
use trigon_engine::window::Runtime;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = SteerConfig::default().with_args(std::env::args().skip(1));
    log::info!("pivot: {:?}, speed: {}", config.pivot, config.move_speed);

    Runtime::run(SteerDemo::runtime_config(), GpuInit::default(), SteerDemo::new(config))
}
