//! Style-token resolver.
//!
//! Turns a utility-class attribute string (one token ≈ one style declaration)
//! into canonical structured style properties plus responsive overrides, and
//! back again:
//! - [`resolve_classes`] parses a class string mobile-first, cascades the
//!   breakpoint layers, and exports the desktop-resolved style with minimal
//!   tablet/mobile overrides;
//! - [`style_to_classes`] regenerates the tokens from a stored style so the
//!   serializer can rebuild a class attribute that resolves back to the same
//!   structured value.
//!
//! Tokens the parser cannot model are carried through verbatim in
//! `unrecognized_classes` — styling this module does not understand is
//! preserved, never dropped.

pub mod cascade;
pub mod emit;
pub mod registry;

pub use cascade::{resolve_classes, ResolvedClasses};
pub use emit::{style_to_classes, EmittedStyle};
pub use registry::{Declaration, SpacingDecl, SpacingSides};
