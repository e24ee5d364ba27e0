pub mod atom;
pub mod sample;
