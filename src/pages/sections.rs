pub mod about;
pub mod benefits;
pub mod contact;
pub mod features;
pub mod footer;
pub mod hero;
pub mod product;
