//! Request extractors.

mod hero_id;
pub use hero_id::HeroIdPath;
