pub mod cards;
pub mod footer;
pub mod nav_bar;

pub use cards::*;
pub use footer::*;
pub use nav_bar::*;
