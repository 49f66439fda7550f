//! Code export: turns a [`LayoutState`](crate::LayoutState) into markup and styles.
//!
//! Both generators are pure functions of the state.  They only use the public
//! read accessors, so they see exactly what any other renderer sees: dangling
//! order entries are skipped, spans are clamped to the current grid.
//!
//! Class numbering follows the **desktop** order list.  `module-3` is the
//! module in desktop position 3; the mobile media query re-targets that same
//! class with a mobile span and an `order:` hint.

mod markup;
mod stylesheet;

pub use markup::render_markup;
pub use stylesheet::render_stylesheet;

/// Turns a group tag into something usable inside a class attribute.
fn class_token(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}
