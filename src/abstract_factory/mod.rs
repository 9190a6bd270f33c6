//! # Abstract Factory
//!
//! Picks a concrete [`PlantFactory`] from the *type* of plant the caller asks for.
//! The caller only ever sees `Box<dyn PlantFactory>` and `Box<dyn Plant>`, so
//! adding a new plant family never touches calling code.
//!
//! ## Usage
//!
//! ```rust
//! use patterns_recipe::abstract_factory::{create_factory, OrangePlant};
//!
//! let factory = create_factory::<OrangePlant>().unwrap();
//! let plant = factory.make_plant();
//! assert!(plant.is::<OrangePlant>());
//! ```
//!
//! ## Dispatch
//!
//! Selection compares the [`TypeId`] of the requested plant against the known
//! plant types. Asking for a plant type that has no factory is a runtime
//! [`FactoryError::UnsupportedPlant`], not a panic.

pub mod error;

pub use error::*;

use std::any::{type_name, Any, TypeId};
use std::fmt::Debug;
use tracing::{debug, info};

/// A product of the plant factories.
///
/// Implementors must be `'static` so that a `dyn Plant` can be asked which
/// concrete type it holds.
pub trait Plant: Any + Debug {
    /// Human-readable name of the plant.
    fn name(&self) -> &'static str;

    /// Upcast used for concrete type checks.
    fn as_any(&self) -> &dyn Any;
}

impl dyn Plant {
    /// Returns `true` if the boxed plant is a `T`.
    pub fn is<T: Plant>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrangePlant;

impl Plant for OrangePlant {
    fn name(&self) -> &'static str {
        "OrangePlant"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplePlant;

impl Plant for ApplePlant {
    fn name(&self) -> &'static str {
        "ApplePlant"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A factory that makes one family of [`Plant`].
pub trait PlantFactory {
    fn make_plant(&self) -> Box<dyn Plant>;
}

/// Makes [`OrangePlant`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrangeFactory;

impl PlantFactory for OrangeFactory {
    fn make_plant(&self) -> Box<dyn Plant> {
        Box::new(OrangePlant)
    }
}

/// Makes [`ApplePlant`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppleFactory;

impl PlantFactory for AppleFactory {
    fn make_plant(&self) -> Box<dyn Plant> {
        Box::new(ApplePlant)
    }
}

/// Returns the factory responsible for plants of type `T`.
///
/// # Errors
/// [`FactoryError::UnsupportedPlant`] if no factory knows how to make a `T`.
pub fn create_factory<T: Plant>() -> Result<Box<dyn PlantFactory>, FactoryError> {
    let requested = TypeId::of::<T>();
    debug!(plant = type_name::<T>(), "Selecting factory");

    if requested == TypeId::of::<OrangePlant>() {
        Ok(Box::new(OrangeFactory))
    } else if requested == TypeId::of::<ApplePlant>() {
        Ok(Box::new(AppleFactory))
    } else {
        Err(FactoryError::UnsupportedPlant(type_name::<T>()))
    }
}

/// Makes a plant through the factory for `T` and reports it.
pub fn grow<T: Plant>() -> Result<(Box<dyn Plant>, String), FactoryError> {
    let plant = create_factory::<T>()?.make_plant();
    let line = format!("Created plant: {}", plant.name());
    info!(plant = plant.name(), "Created plant");
    Ok((plant, line))
}
