//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements          | Connects to              |
//! |------------|---------------------|--------------------------|
//! | `hardware` | SensorPort          | DHT line, LDR ADC, GPIO  |
//! |            | ActuatorPort        | Vent / lamp relays       |
//! | `display`  | DisplayPort         | Serial log mirror        |
//! | `log_sink` | EventSink           | Serial log output        |
//! | `time`     | Clock               | ESP32 system timer       |
//! | `uart`     | Transport           | UART2 command link       |

pub mod display;
pub mod hardware;
pub mod log_sink;
pub mod time;
pub mod uart;
