mod counties;
mod districts;
mod parishes;
mod subcounties;
mod villages;

pub use counties::County;
pub use districts::District;
pub use parishes::Parish;
pub use subcounties::Subcounty;
pub use villages::Village;
