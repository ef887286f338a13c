//! The FHIR R5 model: primitives, general-purpose data types, shared code
//! enums and the resource catalogue.

pub mod codes;
pub mod complex_types;
pub mod primitives;
pub mod resources;

pub use codes::*;
pub use complex_types::*;
pub use primitives::*;
pub use resources::*;
