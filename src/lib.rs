#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Patterns Recipe
//!
//! > **Classic object-oriented design patterns, written the way Rust wants them.**
//!
//! Each module is one self-contained pattern: a few types, a handful of methods,
//! and tests that show it in use. No module depends on another. Read them in any order.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Translate the intent, not the class diagram
//! Most of these patterns were described for languages with inheritance and a
//! garbage collector. Rust has neither, so every pattern here answers one question:
//! *which Rust feature already expresses this intent?*
//!
//! | Pattern | Rust feature doing the work |
//! |---|---|
//! | [Abstract Factory](abstract_factory) | trait objects + `TypeId` dispatch |
//! | [Decorator](decorator) | generic wrapper implementing the same trait |
//! | [Facade](facade) | a struct owning the subsystem, exposing two methods |
//! | [Factory Method](factory_method) | exhaustive `match` over an enum |
//! | [Listener](listener) | `Rc<dyn Trait>` list + blanket impl for closures |
//! | [Protection Proxy](protection_proxy) | same trait, early `Err` return |
//! | [Singleton](singleton) | `static OnceLock` |
//! | [State](state) | enum with data-carrying variants |
//! | [Strategy](strategy) | `Fn` closures as a generic parameter |
//!
//! ### Output is a value
//! Where a textbook example would `println!`, these methods **return** the line and
//! also emit it as a `tracing` event. Tests assert on the returned values, and the
//! showcase binary turns the events into a readable walkthrough.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Only three operations can fail, and each module that has one defines its own
//! error enum with `thiserror`: [`FactoryError`](abstract_factory::FactoryError),
//! [`FileError`](protection_proxy::FileError), [`StoreError`](facade::StoreError).
//! Lookups that miss return a default value instead of an error.
//!
//! ### 2. No Shared State
//! Everything is synchronous and single-threaded. The one process-wide object is the
//! [`PrinterDriver`](singleton::PrinterDriver), and that is the point of that pattern.
//!
//! ### 3. Observability
//! `tracing` everywhere, with structured fields. See [`runtime::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Patterns
//! [`abstract_factory`], [`decorator`], [`facade`], [`factory_method`], [`listener`],
//! [`protection_proxy`], [`singleton`], [`state`], [`strategy`].
//!
//! ### 2. The Test Doubles ([`mock`])
//! Expectation-based mocks for the wrapping patterns, to prove which calls reach
//! the wrapped object.
//!
//! ### 3. The Showcase ([`runtime`])
//! - **Role**: Runs the walkthrough of each selected pattern inside its own span.
//! - **Key items**: [`Showcase`](runtime::Showcase), [`ShowcaseConfig`](runtime::ShowcaseConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Every pattern
//! cargo run
//!
//! # Just two, with debug logs
//! cargo run -- --patterns state,listener --verbose
//!
//! # Watch the proxy refuse a wrong password
//! cargo run -- --patterns protection-proxy --password letmein
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod abstract_factory;
pub mod decorator;
pub mod facade;
pub mod factory_method;
pub mod listener;
pub mod mock;
pub mod protection_proxy;
pub mod runtime;
pub mod singleton;
pub mod state;
pub mod strategy;
