//! Trellis Engine
//!
//! Computes per-node style properties for a content tree from CSS-like
//! stylesheets.
//!
//! # Example
//! ```rust
//! use trellis_engine::{Config, Engine, DomTree};
//!
//! let mut engine = Engine::new(Config::default());
//! engine.load_stylesheet("p { margin: 3; }").unwrap();
//!
//! let mut tree = DomTree::new();
//! let p = tree.create_element("p", engine.registry());
//! tree.set_root(p).unwrap();
//! engine.apply(&mut tree, p).unwrap();
//!
//! assert_eq!(tree.property(p, "margin"), Some("3"));
//! ```

mod engine;
mod dump;

pub use engine::{Engine, EngineError};
pub use dump::dump_styled_tree;
pub use trellis_css::Config;
pub use trellis_dom::{DomTree, NodeId, NodeKind, NodeKindRegistry, PropertyMap};

// Re-export sub-crates for advanced usage
pub use trellis_css as css;
pub use trellis_dom as dom;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
