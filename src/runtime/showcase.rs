use super::{Pattern, ShowcaseConfig};
use crate::abstract_factory::{self, FactoryError, OrangePlant};
use crate::decorator::{CoffeeMachine, EnhancedCoffeeMachine, NormalCoffeeMachine};
use crate::facade::{StoreError, User, UserRepository};
use crate::factory_method::{Country, CurrencyFactory};
use crate::listener::{PrintingTextChangedListener, TextView};
use crate::protection_proxy::{File, FileError, NormalFile, SecuredFile};
use crate::singleton::{PrinterDriver, PRINTING_LINE};
use crate::state::AuthorizationPresenter;
use crate::strategy::{lower_case_formatter, upper_case_formatter, Printer};
use std::rc::Rc;
use thiserror::Error;
use tracing::{error, info, info_span};

/// Errors that can abort a showcase run.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error(transparent)]
    Factory(#[from] FactoryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    File(#[from] FileError),
}

/// Lines one pattern's walkthrough produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternReport {
    pub pattern: Pattern,
    pub lines: Vec<String>,
}

/// Runs the selected pattern walkthroughs one after another.
///
/// Each walkthrough runs inside a `pattern` span, builds its own objects and drops
/// them afterwards. Nothing is shared between patterns except the singleton, which
/// is process-wide by definition.
///
/// # Example
///
/// ```rust
/// use patterns_recipe::runtime::{Pattern, Showcase, ShowcaseConfig};
///
/// let config = ShowcaseConfig {
///     patterns: vec![Pattern::State],
///     ..ShowcaseConfig::default()
/// };
/// let reports = Showcase::new(config).run().unwrap();
/// assert_eq!(reports[0].lines[0], "User 'admin' is logged in: true");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Showcase {
    config: ShowcaseConfig,
}

impl Showcase {
    pub fn new(config: ShowcaseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    /// Run every selected walkthrough, stopping at the first error.
    pub fn run(&self) -> Result<Vec<PatternReport>, ShowcaseError> {
        let patterns = self.config.selected();
        info!(count = patterns.len(), "Starting showcase");

        let mut reports = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let span = info_span!("pattern", name = pattern.name());
            let lines = span.in_scope(|| self.run_pattern(pattern)).map_err(|e| {
                error!(%pattern, error = %e, "Walkthrough failed");
                e
            })?;
            reports.push(PatternReport { pattern, lines });
        }

        info!("Showcase complete");
        Ok(reports)
    }

    /// Run a single walkthrough and return the lines it printed.
    pub fn run_pattern(&self, pattern: Pattern) -> Result<Vec<String>, ShowcaseError> {
        match pattern {
            Pattern::AbstractFactory => abstract_factory_walkthrough(),
            Pattern::Decorator => Ok(decorator_walkthrough()),
            Pattern::Facade => facade_walkthrough(&self.config.prefs_path),
            Pattern::FactoryMethod => Ok(factory_method_walkthrough()),
            Pattern::Listener => Ok(listener_walkthrough()),
            Pattern::ProtectionProxy => protection_proxy_walkthrough(&self.config.password),
            Pattern::Singleton => Ok(singleton_walkthrough()),
            Pattern::State => Ok(state_walkthrough()),
            Pattern::Strategy => Ok(strategy_walkthrough()),
        }
    }
}

fn abstract_factory_walkthrough() -> Result<Vec<String>, ShowcaseError> {
    let (_plant, line) = abstract_factory::grow::<OrangePlant>()?;
    Ok(vec![line])
}

fn decorator_walkthrough() -> Vec<String> {
    let enhanced = EnhancedCoffeeMachine::new(NormalCoffeeMachine);

    let mut lines = vec![enhanced.make_small_coffee(), enhanced.make_large_coffee()];
    lines.extend(enhanced.make_coffee_with_milk());
    lines
}

fn facade_walkthrough(prefs_path: &str) -> Result<Vec<String>, ShowcaseError> {
    let mut repository = UserRepository::with_path(prefs_path);
    let mut lines = vec![repository.system_preferences().load_line()];
    lines.push(repository.save(&User::new("dbacinski"))?);
    let user = repository.find_first();
    lines.push(format!("Found stored user: {user}"));
    Ok(lines)
}

fn factory_method_walkthrough() -> Vec<String> {
    let greece = Country::Greece {
        some_property: String::new(),
    };
    vec![
        format!(
            "Greece currency: {}",
            CurrencyFactory::currency_for_country(&greece)
        ),
        format!(
            "USA currency: {}",
            CurrencyFactory::currency_for_country(&Country::Usa)
        ),
    ]
}

fn listener_walkthrough() -> Vec<String> {
    let listener = Rc::new(PrintingTextChangedListener::new());
    let mut text_view = TextView::new();
    text_view.add_listener(listener.clone());

    text_view.set_text("Lorem ipsum");
    text_view.set_text("dolor sit amet");
    vec![listener.text()]
}

fn protection_proxy_walkthrough(password: &str) -> Result<Vec<String>, ShowcaseError> {
    let mut secured_file = SecuredFile::new(NormalFile);
    let mut lines = Vec::new();

    for attempt in [None, Some(password)] {
        if let Some(password) = attempt {
            secured_file.set_password(password);
        }
        match secured_file.read_reported("readme.md") {
            Ok(read) => lines.extend(read),
            Err(FileError::AccessDenied) => lines.push(FileError::AccessDenied.to_string()),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(lines)
}

fn singleton_walkthrough() -> Vec<String> {
    info!("Start");
    let mut lines = vec!["Start".to_string()];
    for _ in 0..2 {
        PrinterDriver::instance().print();
        lines.push(PRINTING_LINE.to_string());
    }
    lines
}

fn state_walkthrough() -> Vec<String> {
    let mut presenter = AuthorizationPresenter::new();

    presenter.login_user("admin");
    let logged_in = presenter.to_string();
    presenter.logout_user();
    vec![logged_in, presenter.to_string()]
}

fn strategy_walkthrough() -> Vec<String> {
    let input = "LOREM ipsum DOLOR sit amet";

    vec![
        Printer::new(lower_case_formatter).print_string(input),
        Printer::new(upper_case_formatter).print_string(input),
        Printer::new(|s: &str| format!("Prefix: {s}")).print_string(input),
    ]
}
