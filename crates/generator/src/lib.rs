//! Everything that turns manifest entries back into HTML: field extraction
//! from existing pages, category classification, id allocation, and the two
//! document templates (report page and listing index).

pub mod classify;
pub mod extract;
pub mod ident;
pub mod index;
pub mod page;

// Palette shared by both document templates
pub(crate) const SLATE_50: &str = "#f8fafc";
pub(crate) const SLATE_500: &str = "#64748b";
pub(crate) const SLATE_800: &str = "#1f2937";
pub(crate) const BLUE_600: &str = "#2563eb";
pub(crate) const BORDER: &str = "#e2e8f0";
pub(crate) const CARD: &str = "#ffffff";
