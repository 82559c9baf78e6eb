pub mod lookup;
pub mod movie;

pub use lookup::LookupOutcome;
pub use movie::Movie;
