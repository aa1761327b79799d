//! GPIO / peripheral pin assignments for the RoomNode board (ESP32).
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Climate sensor (DHT11, single-wire, external 10 kΩ pull-up)
// ---------------------------------------------------------------------------

/// Open-drain data line shared between host and sensor.
pub const DHT_DATA_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------

/// LDR voltage divider. Reads higher as the room gets darker.
/// ADC1 channel 6 (GPIO 34 on ESP32).
pub const LDR_ADC_GPIO: i32 = 34;
pub const LDR_ADC1_CHANNEL: u32 = 6;

// ---------------------------------------------------------------------------
// Sensors — Digital
// ---------------------------------------------------------------------------

/// PIR motion detector output. HIGH = motion.
pub const PIR_GPIO: i32 = 27;

// ---------------------------------------------------------------------------
// Manual mode selectors (active-low push-buttons, internal pull-ups)
// ---------------------------------------------------------------------------

/// Selector 1 → Auto.
pub const MODE1_BUTTON_GPIO: i32 = 25;
/// Selector 2 → ForcedOn.
pub const MODE2_BUTTON_GPIO: i32 = 26;
/// Selector 3 → ForcedOff.
pub const MODE3_BUTTON_GPIO: i32 = 32;

/// Selector pins in priority order.
pub const MODE_BUTTON_GPIOS: [i32; 3] = [MODE1_BUTTON_GPIO, MODE2_BUTTON_GPIO, MODE3_BUTTON_GPIO];

// ---------------------------------------------------------------------------
// Actuators (relay / MOSFET drivers, active HIGH)
// ---------------------------------------------------------------------------

/// Ventilation fan.
pub const VENT_GPIO: i32 = 18;
/// Room lamp.
pub const LAMP_GPIO: i32 = 19;

// ---------------------------------------------------------------------------
// Remote command link (UART2)
// ---------------------------------------------------------------------------

pub const UART_PORT: i32 = 2;
pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 16;
pub const UART_BAUD: i32 = 9600;
/// Driver RX ring buffer size (bytes).
pub const UART_RX_BUFFER: i32 = 256;
