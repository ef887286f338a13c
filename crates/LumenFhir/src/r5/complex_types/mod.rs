//! General-purpose data types: the reusable complex types every resource
//! builds on, one file per type with its choice enums and components.

pub mod address;
pub mod age;
pub mod annotation;
pub mod attachment;
pub mod availability;
pub mod codeable_concept;
pub mod codeable_reference;
pub mod coding;
pub mod contact_detail;
pub mod contact_point;
pub mod count;
pub mod data_requirement;
pub mod distance;
pub mod dosage;
pub mod duration;
pub mod expression;
pub mod extended_contact_detail;
pub mod extension;
pub mod human_name;
pub mod identifier;
pub mod marketing_status;
pub mod meta;
pub mod money;
pub mod narrative;
pub mod parameter_definition;
pub mod period;
pub mod product_shelf_life;
pub mod quantity;
pub mod range;
pub mod ratio;
pub mod ratio_range;
pub mod reference;
pub mod related_artifact;
pub mod sampled_data;
pub mod signature;
pub mod timing;
pub mod trigger_definition;
pub mod usage_context;
pub mod virtual_service_detail;

pub use address::*;
pub use age::*;
pub use annotation::*;
pub use attachment::*;
pub use availability::*;
pub use codeable_concept::*;
pub use codeable_reference::*;
pub use coding::*;
pub use contact_detail::*;
pub use contact_point::*;
pub use count::*;
pub use data_requirement::*;
pub use distance::*;
pub use dosage::*;
pub use duration::*;
pub use expression::*;
pub use extended_contact_detail::*;
pub use extension::*;
pub use human_name::*;
pub use identifier::*;
pub use marketing_status::*;
pub use meta::*;
pub use money::*;
pub use narrative::*;
pub use parameter_definition::*;
pub use period::*;
pub use product_shelf_life::*;
pub use quantity::*;
pub use range::*;
pub use ratio::*;
pub use ratio_range::*;
pub use reference::*;
pub use related_artifact::*;
pub use sampled_data::*;
pub use signature::*;
pub use timing::*;
pub use trigger_definition::*;
pub use usage_context::*;
pub use virtual_service_detail::*;
