//! General system configuration

use embassy_nrf::config::{Config, Debug, HfclkSource, LfclkSource};

pub struct SystemConfig {}

impl SystemConfig {
    /// Create new system configuration
    pub fn new() -> Config {
        // Generate default config, required because Config is set as
        // `non_exhaustive`
        let mut config = Config::default();

        // The RTC driving the minute tick runs from the 32 kHz crystal
        config.hfclk_source = HfclkSource::ExternalXtal;
        config.lfclk_source = LfclkSource::ExternalXtal;

        // Enable DC/DC regulator to reduce runtime current consumption
        config.dcdc.reg1 = true;

        // Allow debugging
        config.debug = Debug::Allowed;

        config
    }
}
