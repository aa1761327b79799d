//! RoomNode Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single cooperative control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter    UartTransport   LogDisplay   LogEventSink  │
//! │  (Sensor+Actuator)  (Transport)     (Display)    (EventSink)   │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              NodeService (pure logic)                  │    │
//! │  │  CommandLineParser · AutomationController              │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use esp_idf_hal::delay::Ets;
use log::{info, warn};

use roomnode::adapters::display::LogDisplay;
use roomnode::adapters::hardware::HardwareAdapter;
use roomnode::adapters::log_sink::LogEventSink;
use roomnode::adapters::time::NodeClock;
use roomnode::adapters::uart::UartTransport;
use roomnode::app::ports::ActuatorPort;
use roomnode::app::service::NodeService;
use roomnode::config::NodeConfig;
use roomnode::drivers::data_line::GpioDataLine;
use roomnode::drivers::hw_init;
use roomnode::drivers::watchdog::Watchdog;
use roomnode::pins;
use roomnode::sensors::dht::{PulseDecoder, PulseTiming};

/// Build-time JSON override (`ROOMNODE_CONFIG_JSON=... cargo build`).
const CONFIG_OVERRIDE: Option<&str> = option_env!("ROOMNODE_CONFIG_JSON");

const WATCHDOG_TIMEOUT_MS: u32 = 5_000;

fn load_config() -> NodeConfig {
    match CONFIG_OVERRIDE.map(NodeConfig::from_json) {
        Some(Ok(cfg)) => {
            info!("Config override applied");
            cfg
        }
        Some(Err(e)) => {
            warn!("Config override rejected ({}), using defaults", e);
            NodeConfig::default()
        }
        None => NodeConfig::default(),
    }
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  RoomNode v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = load_config();

    // ── 3. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals().context("peripheral init")?;
    let watchdog = Watchdog::new(WATCHDOG_TIMEOUT_MS);

    // ── 4. Adapters ───────────────────────────────────────────
    let clock = NodeClock::new();
    let decoder = PulseDecoder::new(
        GpioDataLine::new(pins::DHT_DATA_GPIO),
        clock,
        Ets,
        PulseTiming::from_config(&config),
    );
    let mut hw = HardwareAdapter::new(decoder);
    hw.all_off();

    let mut serial = UartTransport::new(pins::UART_PORT);
    let mut display = LogDisplay::new();
    let mut log_sink = LogEventSink::new();

    // ── 5. Application service ────────────────────────────────
    let mut node = NodeService::new(&config);
    node.start(&mut log_sink);

    info!("System ready. Entering control loop.");

    // ── 6. Control loop ───────────────────────────────────────
    let interval = std::time::Duration::from_millis(u64::from(config.control_loop_interval_ms));
    loop {
        let now_ms = clock.uptime_us() / 1000;
        node.run_cycle(&mut hw, &mut serial, &mut display, &mut log_sink, now_ms);
        watchdog.feed();
        std::thread::sleep(interval);
    }
}
