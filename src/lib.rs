#[macro_use]
extern crate bitflags;

pub mod access_error;
pub mod access_flags;
pub mod array_accessor;
pub mod container;
pub mod map_accessor;
pub mod object;
pub mod property_accessor;
pub mod property_descriptor;
pub mod sequence_accessor;
pub mod value;
pub mod value_accessor;
