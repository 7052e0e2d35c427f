//! Platform capability for layout transitions
//!
//! Android only animates layout changes after a process-wide opt-in. Other
//! platforms honour transitions out of the box. The opt-in is performed once
//! by the app shell at startup; components never check it themselves.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide opt-in flag
static LAYOUT_ANIMATIONS_OPTED_IN: AtomicBool = AtomicBool::new(false);

/// Host platform family
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Ios,
    Android,
    Web,
    Desktop,
}

impl Platform {
    /// Platform of the current compilation target
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            Platform::Android
        } else if cfg!(target_os = "ios") {
            Platform::Ios
        } else if cfg!(target_arch = "wasm32") {
            Platform::Web
        } else {
            Platform::Desktop
        }
    }

    /// Whether layout transitions need an explicit opt-in first
    pub fn requires_layout_animation_opt_in(&self) -> bool {
        matches!(self, Platform::Android)
    }
}

/// Opt in to layout transitions for this process.
///
/// Returns `true` if this call performed the opt-in, `false` if nothing was
/// needed or it had already happened.
pub fn enable_layout_animations(platform: Platform) -> bool {
    if !platform.requires_layout_animation_opt_in() {
        return false;
    }

    let flipped = LAYOUT_ANIMATIONS_OPTED_IN
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_ok();
    if flipped {
        tracing::debug!("layout animations enabled for {:?}", platform);
    }
    flipped
}

/// Whether layout transitions will be honoured on `platform`
pub fn layout_animations_enabled(platform: Platform) -> bool {
    !platform.requires_layout_animation_opt_in()
        || LAYOUT_ANIMATIONS_OPTED_IN.load(Ordering::Acquire)
}
