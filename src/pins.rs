//! GPIO / peripheral pin assignments for the fillhead main board.
//!
//! Single source of truth — every driver references this module rather
//! than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Valves (logic-level MOSFET drivers, active HIGH)
// ---------------------------------------------------------------------------

/// Digital output: dispense solenoid valve.
pub const DISPENSE_VALVE_GPIO: i32 = 6;
/// Digital output: air (blow-off) solenoid valve.
pub const AIR_VALVE_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Switch inputs (momentary, active LOW with internal pull-ups)
// ---------------------------------------------------------------------------

/// Operator stop switch. LOW = pressed.
pub const STOP_SWITCH_GPIO: i32 = 10;
/// Foot pedal switch. LOW = pressed.
pub const FOOT_SWITCH_GPIO: i32 = 11;

// ---------------------------------------------------------------------------
// Pressure transducer (analog, ADC1)
// ---------------------------------------------------------------------------

/// Pressure transducer analog input (ADC1 channel 4 on this package).
pub const PRESSURE_ADC_GPIO: i32 = 5;
/// ADC1 channel number for the pressure transducer.
pub const PRESSURE_ADC_CHANNEL: u32 = 4;

// ---------------------------------------------------------------------------
// Indicators
// ---------------------------------------------------------------------------

/// Heartbeat LED (free-running 1 Hz blink).
pub const HEARTBEAT_LED_GPIO: i32 = 8;

// ---------------------------------------------------------------------------
// Serial links
// ---------------------------------------------------------------------------

/// UART port number for the host link.
pub const HOST_UART_PORT: i32 = 1;
pub const HOST_UART_TX_GPIO: i32 = 17;
pub const HOST_UART_RX_GPIO: i32 = 18;

/// UART port number for the scale link (RX-only in practice).
pub const SCALE_UART_PORT: i32 = 2;
pub const SCALE_UART_TX_GPIO: i32 = 15;
pub const SCALE_UART_RX_GPIO: i32 = 16;
