/// Numeric text helpers.
///
/// Parsing of operand text and rendering of results. Both sides of the
/// console boundary go through here so the loop itself never deals with
/// number formatting.
pub mod num;
