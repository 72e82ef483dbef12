//! Domain entities - the core business objects.

mod category;
mod draft;
mod post;
mod snapshot;

pub use category::{Category, CategoryWithCount};
pub use draft::PostDraft;
pub use post::{Post, PostPatch, estimate_read_time};
pub use snapshot::Snapshot;
