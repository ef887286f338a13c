//! The resource catalogue: one file per resource type with its backbone
//! components and resource-local code enums, plus the closed [`Resource`]
//! sum that dispatch parses against.

pub mod activity_definition;
pub mod allergy_intolerance;
pub mod appointment;
pub mod appointment_response;
pub mod audit_event;
pub mod basic;
pub mod binary;
pub mod bundle;
pub mod capability_statement;
pub mod care_plan;
pub mod care_team;
pub mod code_system;
pub mod communication;
pub mod communication_request;
pub mod composition;
pub mod concept_map;
pub mod condition;
pub mod device;
pub mod device_request;
pub mod diagnostic_report;
pub mod document_reference;
pub mod encounter;
pub mod endpoint;
pub mod episode_of_care;
pub mod evidence_report;
pub mod family_member_history;
pub mod flag;
pub mod goal;
pub mod graph_definition;
pub mod group;
pub mod guidance_response;
pub mod healthcare_service;
pub mod immunization;
pub mod implementation_guide;
pub mod library;
pub mod list;
pub mod location;
pub mod measure;
pub mod measure_report;
pub mod medication;
pub mod medication_administration;
pub mod medication_request;
pub mod medication_statement;
pub mod message_header;
pub mod naming_system;
pub mod observation;
pub mod operation_definition;
pub mod operation_outcome;
pub mod organization;
pub mod packaged_product_definition;
pub mod parameters;
pub mod patient;
pub mod person;
pub mod practitioner;
pub mod practitioner_role;
pub mod procedure;
pub mod provenance;
pub mod questionnaire;
pub mod questionnaire_response;
pub mod related_person;
pub mod resource;
pub mod risk_assessment;
pub mod schedule;
pub mod search_parameter;
pub mod service_request;
pub mod slot;
pub mod specimen;
pub mod subscription;
pub mod substance;
pub mod supply_delivery;
pub mod supply_request;
pub mod task;
pub mod transport;
pub mod value_set;
pub mod vision_prescription;

pub use activity_definition::*;
pub use allergy_intolerance::*;
pub use appointment::*;
pub use appointment_response::*;
pub use audit_event::*;
pub use basic::*;
pub use binary::*;
pub use bundle::*;
pub use capability_statement::*;
pub use care_plan::*;
pub use care_team::*;
pub use code_system::*;
pub use communication::*;
pub use communication_request::*;
pub use composition::*;
pub use concept_map::*;
pub use condition::*;
pub use device::*;
pub use device_request::*;
pub use diagnostic_report::*;
pub use document_reference::*;
pub use encounter::*;
pub use endpoint::*;
pub use episode_of_care::*;
pub use evidence_report::*;
pub use family_member_history::*;
pub use flag::*;
pub use goal::*;
pub use graph_definition::*;
pub use group::*;
pub use guidance_response::*;
pub use healthcare_service::*;
pub use immunization::*;
pub use implementation_guide::*;
pub use library::*;
pub use list::*;
pub use location::*;
pub use measure::*;
pub use measure_report::*;
pub use medication::*;
pub use medication_administration::*;
pub use medication_request::*;
pub use medication_statement::*;
pub use message_header::*;
pub use naming_system::*;
pub use observation::*;
pub use operation_definition::*;
pub use operation_outcome::*;
pub use organization::*;
pub use packaged_product_definition::*;
pub use parameters::*;
pub use patient::*;
pub use person::*;
pub use practitioner::*;
pub use practitioner_role::*;
pub use procedure::*;
pub use provenance::*;
pub use questionnaire::*;
pub use questionnaire_response::*;
pub use related_person::*;
pub use resource::*;
pub use risk_assessment::*;
pub use schedule::*;
pub use search_parameter::*;
pub use service_request::*;
pub use slot::*;
pub use specimen::*;
pub use subscription::*;
pub use substance::*;
pub use supply_delivery::*;
pub use supply_request::*;
pub use task::*;
pub use transport::*;
pub use value_set::*;
pub use vision_prescription::*;
