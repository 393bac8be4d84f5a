/// The `Operation` enum and the arithmetic behind it.
///
/// Each operation is a pure function of two `f64` operands. Division refuses
/// a zero divisor instead of producing an infinity or NaN.
pub mod core;

/// The fixed symbol-to-operation table.
///
/// The table is static data: it is built at compile time, holds exactly one
/// entry per operation and is never modified.
pub mod table;
