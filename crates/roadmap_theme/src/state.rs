//! Theme state
//!
//! `ThemeState` holds the palette pair, the active scheme and runtime
//! overrides. Apps usually keep one process-wide instance (see
//! [`ThemeState::init`] and [`ThemeState::get`]) and hand it to components
//! as a `&dyn ColorLookup` at render time.

use roadmap_core::Color;
use rustc_hash::FxHashMap;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::lookup::{ColorLookup, ColorOverrides};
use crate::theme::{ColorScheme, ThemeBundle};
use crate::tokens::{ColorRole, ColorTokens};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Theme state shared by everything that renders
pub struct ThemeState {
    /// Palettes for both schemes
    bundle: RwLock<ThemeBundle>,

    /// Current color scheme
    scheme: RwLock<ColorScheme>,

    /// Runtime color overrides, applied on top of the active palette
    color_overrides: RwLock<FxHashMap<ColorRole, Color>>,
}

// Theme data stays valid even if a writer panicked mid-update
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl ThemeState {
    pub fn new(bundle: ThemeBundle, scheme: ColorScheme) -> Self {
        Self {
            bundle: RwLock::new(bundle),
            scheme: RwLock::new(scheme),
            color_overrides: RwLock::new(FxHashMap::default()),
        }
    }

    /// Build from a parsed theme config
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        Ok(Self::new(config.bundle()?, config.scheme))
    }

    /// Initialize the global theme state (call once at app startup).
    ///
    /// Returns `false` if it was already initialized; the existing state is
    /// kept.
    pub fn init(bundle: ThemeBundle, scheme: ColorScheme) -> bool {
        let installed = THEME_STATE.set(Self::new(bundle, scheme)).is_ok();
        if !installed {
            tracing::warn!("ThemeState::init called twice; keeping the first theme");
        }
        installed
    }

    /// Initialize the global theme with the default palettes in light mode
    pub fn init_default() -> bool {
        Self::init(ThemeBundle::default(), ColorScheme::default())
    }

    /// Get the global theme state, initializing the default theme if the app
    /// has not installed one
    pub fn get() -> &'static ThemeState {
        THEME_STATE.get_or_init(|| Self::new(ThemeBundle::default(), ColorScheme::default()))
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    // ========== Color Scheme ==========

    /// Get the current color scheme
    pub fn scheme(&self) -> ColorScheme {
        *read(&self.scheme)
    }

    /// Set the color scheme
    pub fn set_scheme(&self, scheme: ColorScheme) {
        let mut current = write(&self.scheme);
        if *current != scheme {
            tracing::debug!(
                "ThemeState::set_scheme - switching from {:?} to {:?}",
                *current,
                scheme
            );
            *current = scheme;
        }
    }

    /// Flip between light and dark
    pub fn toggle_scheme(&self) {
        let next = self.scheme().toggle();
        self.set_scheme(next);
    }

    // ========== Colors ==========

    /// Active palette, before runtime overrides
    pub fn palette(&self) -> ColorTokens {
        read(&self.bundle).for_scheme(self.scheme()).clone()
    }

    /// Replace the palette for one scheme
    pub fn set_palette(&self, scheme: ColorScheme, tokens: ColorTokens) {
        *write(&self.bundle).for_scheme_mut(scheme) = tokens;
    }

    /// Override a role's color in both schemes until cleared
    pub fn set_color_override(&self, role: ColorRole, color: Color) {
        write(&self.color_overrides).insert(role, color);
    }

    pub fn clear_color_override(&self, role: ColorRole) {
        write(&self.color_overrides).remove(&role);
    }

    /// Clear all runtime overrides
    pub fn clear_overrides(&self) {
        write(&self.color_overrides).clear();
    }

    /// Resolve a role: per-call override, then runtime override, then palette
    pub fn resolve(&self, role: ColorRole, overrides: Option<&ColorOverrides>) -> Color {
        let scheme = self.scheme();

        if let Some(color) = overrides.and_then(|o| o.for_scheme(scheme)) {
            return color;
        }
        if let Some(color) = read(&self.color_overrides).get(&role) {
            return *color;
        }
        read(&self.bundle).for_scheme(scheme).get(role)
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeBundle::default(), ColorScheme::default())
    }
}

impl ColorLookup for ThemeState {
    fn color(&self, role: ColorRole, overrides: Option<&ColorOverrides>) -> Color {
        self.resolve(role, overrides)
    }
}
