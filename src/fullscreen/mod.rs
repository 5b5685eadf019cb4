//! Fullscreen abstraction
//!
//! The playback page has to work across four vendor variants of the
//! fullscreen API. Rather than re-branching on every call, the driver
//! probes the host's capabilities once at initialization and remembers
//! which variant to use; querying the active state still consults every
//! variant, since any of them may report fullscreen.

use crate::utils::error::Result;
use log::{debug, warn};

/// Vendor variants of the fullscreen API, in probe priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    Standard,
    Webkit,
    Moz,
    Ms,
}

/// Fixed probe order: standard first, then vendor prefixes
pub const VENDOR_PRIORITY: [Vendor; 4] = [Vendor::Standard, Vendor::Webkit, Vendor::Moz, Vendor::Ms];

/// Host side of the fullscreen capability set
///
/// One implementation per environment; each method takes the vendor
/// variant so the host can surface exactly the capabilities it has.
pub trait FullscreenHost: Send {
    /// Whether this vendor's request/exit methods exist on the host
    fn supports(&self, vendor: Vendor) -> bool;

    /// Request fullscreen on the document root via this vendor's method
    fn request(&mut self, vendor: Vendor) -> Result<()>;

    /// Exit fullscreen via this vendor's method
    fn exit(&mut self, vendor: Vendor) -> Result<()>;

    /// Whether this vendor's fullscreen-element property reports an
    /// active fullscreen element
    fn is_active(&self, vendor: Vendor) -> bool;
}

/// Fullscreen driver with the vendor variant resolved at initialization
pub struct FullscreenDriver {
    host: Box<dyn FullscreenHost>,
    vendor: Option<Vendor>,
}

impl FullscreenDriver {
    /// Probe the host once and remember the first supported variant
    ///
    /// A host supporting none of the variants yields a driver whose
    /// operations silently no-op; the page behaves the same way.
    pub fn probe(host: Box<dyn FullscreenHost>) -> Self {
        let vendor = VENDOR_PRIORITY
            .into_iter()
            .find(|v| host.supports(*v));

        match vendor {
            Some(v) => debug!("Fullscreen API variant: {:?}", v),
            None => debug!("No fullscreen API variant available"),
        }

        Self { host, vendor }
    }

    /// Whether any vendor variant reports an active fullscreen element
    pub fn is_fullscreen(&self) -> bool {
        VENDOR_PRIORITY.into_iter().any(|v| self.host.is_active(v))
    }

    /// Enter fullscreen if inactive, exit otherwise
    pub fn toggle(&mut self) -> Result<()> {
        if self.is_fullscreen() {
            self.exit()
        } else {
            self.enter()
        }
    }

    /// Request fullscreen via the probed variant
    pub fn enter(&mut self) -> Result<()> {
        match self.vendor {
            Some(vendor) => self.host.request(vendor),
            None => Ok(()),
        }
    }

    /// Exit fullscreen via the probed variant
    pub fn exit(&mut self) -> Result<()> {
        match self.vendor {
            Some(vendor) => self.host.exit(vendor),
            None => Ok(()),
        }
    }

    /// Probed vendor variant, if any
    pub fn vendor(&self) -> Option<Vendor> {
        self.vendor
    }
}

/// Simulated fullscreen host for the headless harness
///
/// Behaves like a standards-compliant browser: only the unprefixed API
/// exists, and request/exit flip a single flag.
pub struct SimulatedFullscreen {
    active: bool,
}

impl SimulatedFullscreen {
    pub fn new() -> Self {
        Self { active: false }
    }
}

impl Default for SimulatedFullscreen {
    fn default() -> Self {
        Self::new()
    }
}

impl FullscreenHost for SimulatedFullscreen {
    fn supports(&self, vendor: Vendor) -> bool {
        vendor == Vendor::Standard
    }

    fn request(&mut self, vendor: Vendor) -> Result<()> {
        if vendor == Vendor::Standard {
            self.active = true;
        } else {
            warn!("Requested unsupported fullscreen variant {:?}", vendor);
        }
        Ok(())
    }

    fn exit(&mut self, vendor: Vendor) -> Result<()> {
        if vendor == Vendor::Standard {
            self.active = false;
        }
        Ok(())
    }

    fn is_active(&self, vendor: Vendor) -> bool {
        vendor == Vendor::Standard && self.active
    }
}
