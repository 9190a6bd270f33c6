//! # Decorator
//!
//! [`EnhancedCoffeeMachine`] wraps any [`CoffeeMachine`] and:
//!
//! - **delegates** `make_small_coffee` untouched,
//! - **overrides** `make_large_coffee`,
//! - **extends** the machine with `make_coffee_with_milk`.
//!
//! Forwarding is spelled out in the trait impl. The wrapper is generic over the
//! inner machine, so decoration is resolved at compile time and can be stacked.
//!
//! ```rust
//! use patterns_recipe::decorator::{CoffeeMachine, EnhancedCoffeeMachine, NormalCoffeeMachine};
//!
//! let enhanced = EnhancedCoffeeMachine::new(NormalCoffeeMachine);
//! assert_eq!(enhanced.make_small_coffee(), "Normal: Making small coffee");
//! assert_eq!(enhanced.make_large_coffee(), "Enhanced: Making large coffee");
//! ```

use tracing::info;

/// A machine that brews coffee. Each call returns the line it announces.
pub trait CoffeeMachine {
    fn make_small_coffee(&self) -> String;

    fn make_large_coffee(&self) -> String;
}

/// The plain machine being decorated.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalCoffeeMachine;

impl CoffeeMachine for NormalCoffeeMachine {
    fn make_small_coffee(&self) -> String {
        announce("Normal: Making small coffee")
    }

    fn make_large_coffee(&self) -> String {
        announce("Normal: Making large coffee")
    }
}

/// Decorator over any [`CoffeeMachine`].
#[derive(Debug, Clone, Default)]
pub struct EnhancedCoffeeMachine<M: CoffeeMachine> {
    coffee_machine: M,
}

impl<M: CoffeeMachine> EnhancedCoffeeMachine<M> {
    pub fn new(coffee_machine: M) -> Self {
        Self { coffee_machine }
    }

    /// Borrow the wrapped machine.
    pub fn inner(&self) -> &M {
        &self.coffee_machine
    }

    /// Unwrap the decorator, giving back the original machine.
    pub fn into_inner(self) -> M {
        self.coffee_machine
    }

    /// Extended behaviour: a small coffee from the wrapped machine, plus milk.
    ///
    /// Returns every line announced along the way, in order.
    pub fn make_coffee_with_milk(&self) -> Vec<String> {
        vec![
            announce("Enhanced: Making coffee with milk"),
            self.coffee_machine.make_small_coffee(),
            self.add_milk(),
        ]
    }

    fn add_milk(&self) -> String {
        announce("Enhanced: Adding milk")
    }
}

impl<M: CoffeeMachine> CoffeeMachine for EnhancedCoffeeMachine<M> {
    fn make_small_coffee(&self) -> String {
        self.coffee_machine.make_small_coffee()
    }

    fn make_large_coffee(&self) -> String {
        announce("Enhanced: Making large coffee")
    }
}

fn announce(line: &str) -> String {
    info!("{line}");
    line.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorators_stack() {
        let twice = EnhancedCoffeeMachine::new(EnhancedCoffeeMachine::new(NormalCoffeeMachine));

        assert_eq!(twice.make_small_coffee(), "Normal: Making small coffee");
        assert_eq!(twice.make_large_coffee(), "Enhanced: Making large coffee");
        assert_eq!(
            twice.inner().make_coffee_with_milk()[1],
            "Normal: Making small coffee"
        );
    }

    #[test]
    fn test_into_inner_returns_wrapped_machine() {
        let machine = EnhancedCoffeeMachine::new(NormalCoffeeMachine).into_inner();
        assert_eq!(machine.make_large_coffee(), "Normal: Making large coffee");
    }
}
