//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw.rs` - Main draw functions
//! - `theme.rs` - Theme modes and color palettes
//! - `layout.rs` - Display surface resolution

mod draw;
pub mod layout;
pub mod theme;

// Re-export main draw function
pub use draw::draw;
