use crate::operation::core::Operation;

/// Defines the operation table from symbol/operation pairs.
///
/// The macro produces:
/// - `OperationDef` (internal entry),
/// - `OPERATION_TABLE` (static table for lookup),
/// - `OPERATION_SYMBOLS` (public list of symbols, in table order).
macro_rules! operations {
    (
        $(
            $symbol:literal => $operation:expr
        ),* $(,)?
    ) => {
        struct OperationDef {
            symbol:    &'static str,
            operation: Operation,
        }
        static OPERATION_TABLE: &[OperationDef] = &[
            $(
                OperationDef { symbol: $symbol, operation: $operation },
            )*
        ];
        pub const OPERATION_SYMBOLS: &[&str] = &[
            $($symbol,)*
        ];
    };
}

operations! {
    "+" => Operation::Add,
    "-" => Operation::Sub,
    "*" => Operation::Mul,
    "/" => Operation::Div,
}

/// Resolves an operator symbol to its operation.
///
/// The match is exact; callers strip surrounding whitespace first.
///
/// # Example
/// ```
/// use quadcalc::operation::{core::Operation, table::lookup_operation};
///
/// assert_eq!(lookup_operation("/"), Some(Operation::Div));
/// assert_eq!(lookup_operation("%"), None);
/// ```
#[must_use]
pub fn lookup_operation(symbol: &str) -> Option<Operation> {
    OPERATION_TABLE.iter()
                   .find(|def| def.symbol == symbol)
                   .map(|def| def.operation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_exactly_four_entries() {
        assert_eq!(OPERATION_TABLE.len(), 4);
        assert_eq!(OPERATION_SYMBOLS, &["+", "-", "*", "/"]);
    }

    #[test]
    fn every_symbol_round_trips_through_its_operation() {
        for symbol in OPERATION_SYMBOLS {
            let operation = lookup_operation(symbol).unwrap();
            assert_eq!(operation.symbol().to_string(), *symbol);
        }
    }

    #[test]
    fn near_misses_are_rejected() {
        for symbol in ["", " +", "++", "x", "add", "q", "%", "^"] {
            assert_eq!(lookup_operation(symbol), None, "{symbol:?} should not resolve");
        }
    }
}
