//! Nozzle resolution
//!
//! A sale needs the dispensing nozzle tied to the selected product on the
//! selected pump. Fallbacks are an explicit ordered list of strategies
//! evaluated in sequence, returning the first hit or a typed unresolved
//! error.

use shared::models::pump::{Nozzle, Pump};
use thiserror::Error;

/// A nozzle could not be resolved for the product/pump pair.
/// Treated as a configuration problem, not an operator mistake.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("No nozzle configured for product {product_id} on pump {pump_id}")]
pub struct NozzleUnresolved {
    pub product_id: i64,
    pub pump_id: i64,
}

/// Resolution strategies, tried in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    /// An explicit operator selection
    Explicit,
    /// The pump's nozzle mapped directly to the product
    DirectMap,
    /// First nozzle on the pump
    FirstOnPump,
}

const STRATEGY_ORDER: [Strategy; 3] = [
    Strategy::Explicit,
    Strategy::DirectMap,
    Strategy::FirstOnPump,
];

/// Resolve the nozzle id for a sale.
///
/// `selected` is the operator's explicit choice, when the form offered one.
pub fn resolve_nozzle(
    selected: Option<&Nozzle>,
    pump: &Pump,
    product_id: i64,
) -> Result<i64, NozzleUnresolved> {
    for strategy in STRATEGY_ORDER {
        let hit = match strategy {
            Strategy::Explicit => selected.map(|n| n.id),
            Strategy::DirectMap => pump.nozzle_for_product(product_id).map(|n| n.id),
            Strategy::FirstOnPump => pump.first_nozzle().map(|n| n.id),
        };
        if let Some(id) = hit {
            if strategy == Strategy::FirstOnPump {
                tracing::warn!(
                    pump_id = pump.id,
                    product_id,
                    nozzle_id = id,
                    "Nozzle resolved by first-on-pump fallback, check pump configuration"
                );
            }
            return Ok(id);
        }
    }

    Err(NozzleUnresolved {
        product_id,
        pump_id: pump.id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nozzle(id: i64, pump_id: i64, product_id: i64, number: i32) -> Nozzle {
        Nozzle {
            id,
            pump_id,
            product_id,
            number,
            is_active: true,
        }
    }

    fn pump(id: i64, nozzles: Vec<Nozzle>) -> Pump {
        Pump {
            id,
            number: 1,
            name: format!("Surtidor {id}"),
            is_active: true,
            nozzles,
        }
    }

    #[test]
    fn explicit_selection_wins() {
        let chosen = nozzle(99, 1, 7, 2);
        let p = pump(1, vec![nozzle(10, 1, 7, 1), chosen.clone()]);
        assert_eq!(resolve_nozzle(Some(&chosen), &p, 7), Ok(99));
    }

    #[test]
    fn falls_back_to_direct_product_map() {
        let p = pump(1, vec![nozzle(10, 1, 5, 1), nozzle(11, 1, 7, 2)]);
        assert_eq!(resolve_nozzle(None, &p, 7), Ok(11));
    }

    #[test]
    fn falls_back_to_first_nozzle_on_pump() {
        // Product 9 has no direct mapping on this pump
        let p = pump(1, vec![nozzle(10, 1, 5, 1), nozzle(11, 1, 7, 2)]);
        assert_eq!(resolve_nozzle(None, &p, 9), Ok(10));
    }

    #[test]
    fn unresolved_when_pump_has_no_nozzles() {
        let p = pump(3, vec![]);
        assert_eq!(
            resolve_nozzle(None, &p, 7),
            Err(NozzleUnresolved {
                product_id: 7,
                pump_id: 3
            })
        );
    }
}
