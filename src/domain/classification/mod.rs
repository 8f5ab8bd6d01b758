//! Classification Module - codes derived from a validated profile.
//!
//! # Components
//!
//! - `classify` - Composite classification code (`PERTE_SED_S_H3`)
//! - `generate_identifier` - Readable lowercase identifier
//!
//! Both are pure functions of a `ValidatedProfile`, so they only ever run
//! once every input step has validated.

mod classifier;
mod identifier;

pub use classifier::{classify, Archetype, ClassificationCode};
pub use identifier::{generate_identifier, ProfileIdentifier};
