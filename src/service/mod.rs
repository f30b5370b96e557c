//! HeroService: record operations over a `HeroStore`.

mod hero;
pub use hero::HeroService;
