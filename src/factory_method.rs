//! # Factory Method
//!
//! [`CurrencyFactory::currency_for_country`] maps each [`Country`] to its [`Currency`].
//! The match is exhaustive: add a country and the crate stops compiling until it
//! has a currency.

use std::fmt;
use tracing::info;

/// Countries the factory knows about. Some carry data, some do not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Country {
    Usa,
    Spain,
    Greece { some_property: String },
    Canada { some_property: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    code: &'static str,
}

impl Currency {
    pub const fn new(code: &'static str) -> Self {
        Self { code }
    }

    /// ISO 4217 code, e.g. `"EUR"`.
    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

pub struct CurrencyFactory;

impl CurrencyFactory {
    pub fn currency_for_country(country: &Country) -> Currency {
        let currency = match country {
            Country::Greece { .. } => Currency::new("EUR"),
            Country::Spain => Currency::new("EUR"),
            Country::Usa => Currency::new("USD"),
            Country::Canada { .. } => Currency::new("CAD"),
        };
        info!(?country, currency = currency.code(), "Resolved currency");
        currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_country_has_a_currency() {
        let cases = [
            (Country::Usa, "USD"),
            (Country::Spain, "EUR"),
            (
                Country::Greece {
                    some_property: String::new(),
                },
                "EUR",
            ),
            (
                Country::Canada {
                    some_property: "maple".into(),
                },
                "CAD",
            ),
        ];

        for (country, code) in cases {
            assert_eq!(CurrencyFactory::currency_for_country(&country).code(), code);
        }
    }

    #[test]
    fn test_payload_does_not_change_currency() {
        let a = Country::Greece {
            some_property: "a".into(),
        };
        let b = Country::Greece {
            some_property: "b".into(),
        };
        assert_eq!(
            CurrencyFactory::currency_for_country(&a),
            CurrencyFactory::currency_for_country(&b)
        );
    }
}
