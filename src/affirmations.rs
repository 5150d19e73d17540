//! Affirmation list and uniform random selection.
//!
//! The built-in list ships with the binary and is never mutated. A custom
//! list file can replace it via config; an empty or unreadable file falls
//! back to the built-in list so selection always has something to draw from.

use std::path::Path;

use rand::Rng;

/// Built-in affirmations, shown when no custom list is configured.
pub const BUILT_IN: [&str; 28] = [
    "I am capable of achieving amazing things today.",
    "My potential is limitless, and I choose to embrace it.",
    "I attract positive energy and opportunities into my life.",
    "Every challenge I face makes me stronger and wiser.",
    "I am worthy of love, success, and happiness.",
    "My thoughts create my reality, and I choose positive thoughts.",
    "I trust in my ability to navigate through any situation.",
    "I am grateful for this moment and the possibilities it holds.",
    "My confidence grows stronger with each step I take.",
    "I choose to see opportunities where others see obstacles.",
    "I am the author of my own success story.",
    "My inner strength is greater than any external challenge.",
    "I radiate positivity and inspire others around me.",
    "I am committed to my growth and personal development.",
    "Today I choose courage over comfort.",
    "I believe in myself and my unique abilities.",
    "I am deserving of all the good things coming my way.",
    "My mindset determines my success, and I choose positivity.",
    "I embrace change as an opportunity for growth.",
    "I am resilient, capable, and ready for whatever comes next.",
    "My dreams are valid, and I am taking steps to achieve them.",
    "I choose to focus on progress, not perfection.",
    "I am exactly where I need to be in my journey.",
    "My energy is contagious, and I spread joy wherever I go.",
    "I trust the process and believe in divine timing.",
    "I am a magnet for success, love, and abundance.",
    "Every day I am becoming a better version of myself.",
    "I have the power to create positive change in my life.",
];

/// Shown when selection has nothing to pick from.
pub const FALLBACK_AFFIRMATION: &str = "Stay positive and keep growing!";

/// Pick a uniformly random affirmation from `list`.
///
/// Returns `None` only for an empty list. Never panics and never produces
/// an out-of-range index.
pub fn pick<'a, R: Rng>(list: &'a [String], rng: &mut R) -> Option<&'a str> {
    if list.is_empty() {
        tracing::warn!("affirmation list is empty, nothing to pick");
        return None;
    }
    let index = rng.random_range(0..list.len());
    Some(list[index].as_str())
}

/// Load the active affirmation list.
///
/// Reads one affirmation per line from `file` when given, skipping blank
/// lines and `#` comments. Falls back to the built-in list if the file is
/// missing, unreadable, or yields nothing.
pub fn load_list(file: Option<&Path>) -> Vec<String> {
    let built_in = || BUILT_IN.iter().map(|s| s.to_string()).collect();

    let Some(path) = file else {
        return built_in();
    };

    match std::fs::read_to_string(path) {
        Ok(content) => {
            let lines: Vec<String> = content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string)
                .collect();

            if lines.is_empty() {
                tracing::warn!("affirmation file {} has no entries, using built-in list", path.display());
                built_in()
            } else {
                tracing::info!("loaded {} affirmations from {}", lines.len(), path.display());
                lines
            }
        }
        Err(e) => {
            tracing::warn!("failed to read affirmation file {}: {}, using built-in list", path.display(), e);
            built_in()
        }
    }
}
