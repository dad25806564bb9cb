pub mod reference;
pub mod review;
