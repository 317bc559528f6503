//! Markdown side of the codec
//!
//! The generator never parses markdown. It writes text the host's callout syntax
//! already understands, extended with pipe-delimited modifiers in the header.
//!
//! # Header Grammar
//!
//! | Piece          | Form                                  | Notes                                 |
//! |----------------|---------------------------------------|---------------------------------------|
//! | Type           | `[!note`                              | Custom, built-in or `sc-temp-<hex>`   |
//! | Hidden title   | `\|no-title`                          | Color blocks always carry it          |
//! | Hidden icon    | `\|no-icon`                           | Color blocks always carry it          |
//! | Content align  | `\|c-left` / `\|c-center` / `\|c-right` | Always present                        |
//! | Title align    | `\|t-center` / `\|t-right`            | Omitted when left                     |
//! | No underline   | `\|no-ul`                             |                                       |
//! | Widths         | `\|widths=2_1`                        | `multi-column` container only         |
//! | Collapse       | `]+` / `]-`                           | After the closing bracket             |

pub mod generator;
pub mod modifiers;
pub mod registry;

pub use generator::generate;
pub use modifiers::Modifiers;
pub use registry::{temporary_type_name, TemporaryStyles};
