use bytes::Bytes;
use env_logger::Env;
use leg_command::{
    config::{Config, DEFAULT_CONFIG_PATH},
    motion::MotionGate,
    protocol::Command,
};

fn main() -> anyhow::Result<()> {
    let filter: &str;

    let config = Config::from_path(DEFAULT_CONFIG_PATH)?;

    if config.debug {
        filter = "debug"
    } else {
        filter = "info"
    }

    env_logger::from_env(Env::default().default_filter_or(filter)).init();

    // Each positional argument is one hex-encoded payload, e.g. `00` or `01`.
    let args = std::env::args()
        .skip(1)
        .map(|arg| hex::decode(&arg).map(Bytes::from))
        .collect::<Result<Vec<_>, _>>()?;
    let command = Command::from_protocol(args)?;

    let mut gate = MotionGate::new(config.leg.name);
    log::debug!("Leg {} applying {:?}", config.leg.number, &command);
    let enabled = gate.on_enable(&command)?;

    println!("{}", if enabled { "enabled" } else { "disabled" });
    Ok(())
}
