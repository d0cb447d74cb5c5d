//! Shared UI icons and emojis.
//!
//! Emoji constants with plain-terminal fallbacks, used across the command
//! output for consistent visual styling.

use console::Emoji;

use crate::phase::Phase;

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
pub static PENDING: Emoji<'_, '_> = Emoji("⏳ ", "[..] ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

// Workflow indicators
pub static CLAPPER: Emoji<'_, '_> = Emoji("🎬 ", "");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static TARGET: Emoji<'_, '_> = Emoji("🎯 ", "");
pub static PIN: Emoji<'_, '_> = Emoji("📍 ", "");
pub static POINTER: Emoji<'_, '_> = Emoji("👉 ", "-> ");
pub static WRENCH: Emoji<'_, '_> = Emoji("🔧 ", "");
pub static NOTE: Emoji<'_, '_> = Emoji("📝 ", "");
pub static PARTY: Emoji<'_, '_> = Emoji("🎉 ", "");
pub static SKIP: Emoji<'_, '_> = Emoji("⏭️  ", "[skip] ");

// Per-phase indicators
static INVESTIGATION: Emoji<'_, '_> = Emoji("🔍 ", "");
static SCRIPTWRITING: Emoji<'_, '_> = Emoji("✍️  ", "");
static DIRECTION: Emoji<'_, '_> = Emoji("🎬 ", "");
static SCAVENGING: Emoji<'_, '_> = Emoji("🦅 ", "");
static ARCHIVING: Emoji<'_, '_> = Emoji("💾 ", "");

/// Icon for a pipeline phase.
pub fn phase_icon(phase: Phase) -> &'static Emoji<'static, 'static> {
    match phase {
        Phase::Investigation => &INVESTIGATION,
        Phase::Scriptwriting => &SCRIPTWRITING,
        Phase::Direction => &DIRECTION,
        Phase::Scavenging => &SCAVENGING,
        Phase::Archiving => &ARCHIVING,
    }
}
