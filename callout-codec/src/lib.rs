//! Callout markdown codec
//!
//!     This crate turns an in-memory callout document (a parent callout with nested blocks, or
//!     a multi-column layout) into the blockquote markdown a note host renders as callouts, and
//!     decodes the modifiers carried in that markdown back into classes and styles once the
//!     host has rendered it.
//!
//!     TLDR:
//!         - The generator never parses markdown. It writes text the host's callout syntax
//!           already understands, with presentation modifiers packed into the header.
//!         - The decoder never looks at markdown. It reads the raw `data-callout-metadata`
//!           attribute of rendered callouts.
//!         - Headless callouts are color blocks. `normalize` is the one place that rule lives.
//!
//! Architecture
//!
//!     model (Document, BlockNode) ──generate──▶ markdown ──host / preview──▶ HTML
//!                                                                              │
//!                                    decorated HTML ◀──decorate_html──────────┘
//!
//!     The temporary style registry is owned by the caller and threaded through one
//!     generation pass. The stylesheet module turns it, plus the user's definitions, into
//!     CSS.
//!
//!     This is a pure lib: it powers the `callouts` CLI but never prints, reads env vars or
//!     exits.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── model
//!     │   ├── nodes.rs            # Documents, blocks, columns
//!     │   ├── catalog.rs          # Built-in types, color resolution
//!     │   └── normalize.rs        # Callout / color block conversion
//!     ├── markdown
//!     │   ├── generator.rs        # Document → markdown
//!     │   ├── modifiers.rs        # Header modifier tokens
//!     │   └── registry.rs         # Temporary color-block types
//!     ├── html
//!     │   ├── decoder.rs          # Metadata → Decoration
//!     │   ├── postprocess.rs      # Decorations applied to a page
//!     │   └── preview.rs          # Markdown → callout HTML
//!     ├── settings
//!     │   ├── store.rs            # CRUD, import, export
//!     │   ├── file.rs             # JSON persistence
//!     │   └── components.rs       # Creator / list components
//!     ├── session.rs              # Builder state for both tabs
//!     └── stylesheet.rs           # CSS from settings
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── markdown                # Generator snapshots, comrak structure checks
//!     ├── html                    # Round trips and decoration properties
//!     └── settings                # Import / export and persistence
//!
//!     Rust does not discover tests in subdirectories, so tests/lib.rs includes them.

pub mod error;
pub mod html;
pub mod markdown;
pub mod model;
pub mod session;
pub mod settings;
pub mod stylesheet;

pub use error::{CodecError, Result};
pub use html::{decorate_html, render_preview, Decoration, PreviewOptions};
pub use markdown::{generate, TemporaryStyles};
pub use model::{
    normalize, toggle_kind, Alignment, BlockKind, BlockNode, CalloutHeader, Collapse,
    ColorResolver, ColumnLayout, ColumnSpec, ColumnStyle, Document, MultiColumnDocument, Palette,
    StandardDocument,
};
pub use session::{ComponentKind, EditorSession, SessionTab, Slot};
pub use settings::{
    CalloutStyle, ColumnColorDefinition, CustomCalloutDefinition, Settings, SettingsFile,
};
pub use stylesheet::{body_class, generate_css, hex_to_rgb};
