//! Library half of the `rastr` binary.
//!
//! Holds the pieces the command-line front end shares with integration
//! tests: the file decode/encode boundary ([`io`]) and YAML recipes
//! ([`recipe`]).

pub mod io;
pub mod recipe;

pub use io::{load_image, save_image};
pub use recipe::{FlipAxis, Recipe, Step};
