//! Clover Hunt: find the single four-leaf clover among scattered decoys.
//!
//! The library holds the board layout engine and the round state the web
//! host drives. Everything here is plain computation and runs off-browser;
//! only [`random::MathRandom`] needs a wasm runtime.

pub mod config;
pub mod error;
pub mod grid;
pub mod layout;
pub mod model;
pub mod random;
pub mod sampler;
pub mod state;
pub mod target;
pub mod util;

pub use config::{Difficulty, GameConfig};
pub use error::{ConfigError, LayoutError};
pub use layout::{layout, plan, try_layout, Layout, LayoutPlan};
pub use model::{Cell, ItemId, PlacedItem, Rect, SizeRange};
pub use random::{MathRandom, RandomSource, SeededRandom};
