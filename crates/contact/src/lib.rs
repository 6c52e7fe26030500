//! Contact form workflow: field validation, provider delivery and the form
//! controller that sequences them.

mod controller;
mod field;
mod submit;
mod validate;

pub use controller::*;
pub use field::*;
pub use submit::*;
pub use validate::*;
