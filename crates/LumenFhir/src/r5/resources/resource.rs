use lumen_macros::FhirCodec;

use crate::codec::{Context, FromFhir, JsonValue, ParseMode, ToFhir};
use crate::r5::*;

/// The closed sum over every resource type this crate models. Parsing
/// dispatches on the document's `resourceType`; a name outside this list
/// fails with `UnknownResourceType`. Payloads are boxed so the enum stays
/// two words wide and recursive documents parse in constant frame size.
#[derive(Debug, Clone, PartialEq, FhirCodec)]
#[fhir(resource_enum)]
pub enum Resource {
    ActivityDefinition(Box<ActivityDefinition>),
    AllergyIntolerance(Box<AllergyIntolerance>),
    Appointment(Box<Appointment>),
    AppointmentResponse(Box<AppointmentResponse>),
    AuditEvent(Box<AuditEvent>),
    Basic(Box<Basic>),
    Binary(Box<Binary>),
    Bundle(Box<Bundle>),
    CapabilityStatement(Box<CapabilityStatement>),
    CarePlan(Box<CarePlan>),
    CareTeam(Box<CareTeam>),
    CodeSystem(Box<CodeSystem>),
    Communication(Box<Communication>),
    CommunicationRequest(Box<CommunicationRequest>),
    Composition(Box<Composition>),
    ConceptMap(Box<ConceptMap>),
    Condition(Box<Condition>),
    Device(Box<Device>),
    DeviceRequest(Box<DeviceRequest>),
    DiagnosticReport(Box<DiagnosticReport>),
    DocumentReference(Box<DocumentReference>),
    Encounter(Box<Encounter>),
    Endpoint(Box<Endpoint>),
    EpisodeOfCare(Box<EpisodeOfCare>),
    EvidenceReport(Box<EvidenceReport>),
    FamilyMemberHistory(Box<FamilyMemberHistory>),
    Flag(Box<Flag>),
    Goal(Box<Goal>),
    GraphDefinition(Box<GraphDefinition>),
    Group(Box<Group>),
    GuidanceResponse(Box<GuidanceResponse>),
    HealthcareService(Box<HealthcareService>),
    Immunization(Box<Immunization>),
    ImplementationGuide(Box<ImplementationGuide>),
    Library(Box<Library>),
    List(Box<List>),
    Location(Box<Location>),
    Measure(Box<Measure>),
    MeasureReport(Box<MeasureReport>),
    Medication(Box<Medication>),
    MedicationAdministration(Box<MedicationAdministration>),
    MedicationRequest(Box<MedicationRequest>),
    MedicationStatement(Box<MedicationStatement>),
    MessageHeader(Box<MessageHeader>),
    NamingSystem(Box<NamingSystem>),
    Observation(Box<Observation>),
    OperationDefinition(Box<OperationDefinition>),
    OperationOutcome(Box<OperationOutcome>),
    Organization(Box<Organization>),
    PackagedProductDefinition(Box<PackagedProductDefinition>),
    Parameters(Box<Parameters>),
    Patient(Box<Patient>),
    Person(Box<Person>),
    Practitioner(Box<Practitioner>),
    PractitionerRole(Box<PractitionerRole>),
    Procedure(Box<Procedure>),
    Provenance(Box<Provenance>),
    Questionnaire(Box<Questionnaire>),
    QuestionnaireResponse(Box<QuestionnaireResponse>),
    RelatedPerson(Box<RelatedPerson>),
    RiskAssessment(Box<RiskAssessment>),
    Schedule(Box<Schedule>),
    SearchParameter(Box<SearchParameter>),
    ServiceRequest(Box<ServiceRequest>),
    Slot(Box<Slot>),
    Specimen(Box<Specimen>),
    Subscription(Box<Subscription>),
    Substance(Box<Substance>),
    SupplyDelivery(Box<SupplyDelivery>),
    SupplyRequest(Box<SupplyRequest>),
    Task(Box<Task>),
    Transport(Box<Transport>),
    ValueSet(Box<ValueSet>),
    VisionPrescription(Box<VisionPrescription>),
}

impl serde::Serialize for Resource {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_fhir().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Resource {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        let mut ctx = Context::new(ParseMode::default());
        Resource::from_fhir(&value, &mut ctx).map_err(serde::de::Error::custom)
    }
}
