//! # Singleton
//!
//! There is exactly one [`PrinterDriver`] per process. It is created lazily on first
//! access through a `static` [`OnceLock`], and every later access returns the same
//! `&'static` reference.
//!
//! ```rust
//! use patterns_recipe::singleton::PrinterDriver;
//!
//! let first = PrinterDriver::instance().print();
//! let second = PrinterDriver::instance().print();
//! assert!(std::ptr::eq(first, second));
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use tracing::info;

/// Line announced once, when the driver is created.
pub const INITIALIZING_LINE: &str = "Initializing with object";

/// Line announced by every [`PrinterDriver::print`].
pub const PRINTING_LINE: &str = "Printing with object";

static DRIVER: OnceLock<PrinterDriver> = OnceLock::new();
static INITIALIZATIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct PrinterDriver {
    printed: AtomicUsize,
}

impl PrinterDriver {
    /// The process-wide driver, created on first call.
    pub fn instance() -> &'static PrinterDriver {
        let mut created = false;
        let driver = DRIVER.get_or_init(|| {
            created = true;
            INITIALIZATIONS.fetch_add(1, Ordering::SeqCst);
            PrinterDriver {
                printed: AtomicUsize::new(0),
            }
        });
        if created {
            info!(object = ?(driver as *const Self), "{INITIALIZING_LINE}");
        }
        driver
    }

    /// How many times the driver has been constructed: 0 before first use, 1 after.
    pub fn initializations() -> usize {
        INITIALIZATIONS.load(Ordering::SeqCst)
    }

    /// Jobs printed through this driver so far.
    pub fn printed(&self) -> usize {
        self.printed.load(Ordering::SeqCst)
    }

    /// Announce [`PRINTING_LINE`] and hand back the driver for chaining.
    pub fn print(&self) -> &Self {
        let job = self.printed.fetch_add(1, Ordering::SeqCst) + 1;
        info!(object = ?(self as *const Self), job, "{PRINTING_LINE}");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only lib test touching the driver, so the pre-init state is observable.
    #[test]
    fn test_created_once_on_first_access() {
        assert_eq!(PrinterDriver::initializations(), 0);

        let first = PrinterDriver::instance();
        let second = PrinterDriver::instance();

        assert_eq!(PrinterDriver::initializations(), 1);
        assert!(std::ptr::eq(first, second));

        let printed = first.print().print().printed();
        assert_eq!(printed, 2);
        assert_eq!(second.printed(), 2);
    }
}
