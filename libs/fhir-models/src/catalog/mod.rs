//! The FHIR R4 catalog.
//!
//! Every resource and complex datatype of R4 (4.0.1) declared as a static
//! [`StructureShape`], grouped by domain, plus compile-time indexes from
//! type name to shape used to build [`Registry::r4`](crate::Registry::r4).

use phf::phf_map;

use crate::shape::StructureShape;

pub mod codes;

mod administration;
mod clinical;
mod conformance;
mod datatypes;
mod definitional;
mod diagnostics;
mod financial;
mod foundation;
mod medications;
mod substances;
mod terminology;

pub use administration::*;
pub use clinical::*;
pub use conformance::*;
pub use datatypes::*;
pub use definitional::*;
pub use diagnostics::*;
pub use financial::*;
pub use foundation::*;
pub use medications::*;
pub use substances::*;
pub use terminology::*;

/// All R4 resource shapes, keyed by `resourceType`.
pub static RESOURCES: phf::Map<&'static str, &'static StructureShape> = phf_map! {
    "Account" => &ACCOUNT,
    "ActivityDefinition" => &ACTIVITY_DEFINITION,
    "AdverseEvent" => &ADVERSE_EVENT,
    "AllergyIntolerance" => &ALLERGY_INTOLERANCE,
    "Appointment" => &APPOINTMENT,
    "AppointmentResponse" => &APPOINTMENT_RESPONSE,
    "AuditEvent" => &AUDIT_EVENT,
    "Basic" => &BASIC,
    "Binary" => &BINARY,
    "BiologicallyDerivedProduct" => &BIOLOGICALLY_DERIVED_PRODUCT,
    "BodyStructure" => &BODY_STRUCTURE,
    "Bundle" => &BUNDLE,
    "CapabilityStatement" => &CAPABILITY_STATEMENT,
    "CarePlan" => &CARE_PLAN,
    "CareTeam" => &CARE_TEAM,
    "CatalogEntry" => &CATALOG_ENTRY,
    "ChargeItem" => &CHARGE_ITEM,
    "ChargeItemDefinition" => &CHARGE_ITEM_DEFINITION,
    "Claim" => &CLAIM,
    "ClaimResponse" => &CLAIM_RESPONSE,
    "ClinicalImpression" => &CLINICAL_IMPRESSION,
    "CodeSystem" => &CODE_SYSTEM,
    "Communication" => &COMMUNICATION,
    "CommunicationRequest" => &COMMUNICATION_REQUEST,
    "CompartmentDefinition" => &COMPARTMENT_DEFINITION,
    "Composition" => &COMPOSITION,
    "ConceptMap" => &CONCEPT_MAP,
    "Condition" => &CONDITION,
    "Consent" => &CONSENT,
    "Contract" => &CONTRACT,
    "Coverage" => &COVERAGE,
    "CoverageEligibilityRequest" => &COVERAGE_ELIGIBILITY_REQUEST,
    "CoverageEligibilityResponse" => &COVERAGE_ELIGIBILITY_RESPONSE,
    "DetectedIssue" => &DETECTED_ISSUE,
    "Device" => &DEVICE,
    "DeviceDefinition" => &DEVICE_DEFINITION,
    "DeviceMetric" => &DEVICE_METRIC,
    "DeviceRequest" => &DEVICE_REQUEST,
    "DeviceUseStatement" => &DEVICE_USE_STATEMENT,
    "DiagnosticReport" => &DIAGNOSTIC_REPORT,
    "DocumentManifest" => &DOCUMENT_MANIFEST,
    "DocumentReference" => &DOCUMENT_REFERENCE,
    "EffectEvidenceSynthesis" => &EFFECT_EVIDENCE_SYNTHESIS,
    "Encounter" => &ENCOUNTER,
    "Endpoint" => &ENDPOINT,
    "EnrollmentRequest" => &ENROLLMENT_REQUEST,
    "EnrollmentResponse" => &ENROLLMENT_RESPONSE,
    "EpisodeOfCare" => &EPISODE_OF_CARE,
    "EventDefinition" => &EVENT_DEFINITION,
    "Evidence" => &EVIDENCE,
    "EvidenceVariable" => &EVIDENCE_VARIABLE,
    "ExampleScenario" => &EXAMPLE_SCENARIO,
    "ExplanationOfBenefit" => &EXPLANATION_OF_BENEFIT,
    "FamilyMemberHistory" => &FAMILY_MEMBER_HISTORY,
    "Flag" => &FLAG,
    "Goal" => &GOAL,
    "GraphDefinition" => &GRAPH_DEFINITION,
    "Group" => &GROUP,
    "GuidanceResponse" => &GUIDANCE_RESPONSE,
    "HealthcareService" => &HEALTHCARE_SERVICE,
    "ImagingStudy" => &IMAGING_STUDY,
    "Immunization" => &IMMUNIZATION,
    "ImmunizationEvaluation" => &IMMUNIZATION_EVALUATION,
    "ImmunizationRecommendation" => &IMMUNIZATION_RECOMMENDATION,
    "ImplementationGuide" => &IMPLEMENTATION_GUIDE,
    "InsurancePlan" => &INSURANCE_PLAN,
    "Invoice" => &INVOICE,
    "Library" => &LIBRARY,
    "Linkage" => &LINKAGE,
    "List" => &LIST,
    "Location" => &LOCATION,
    "Measure" => &MEASURE,
    "MeasureReport" => &MEASURE_REPORT,
    "Media" => &MEDIA,
    "Medication" => &MEDICATION,
    "MedicationAdministration" => &MEDICATION_ADMINISTRATION,
    "MedicationDispense" => &MEDICATION_DISPENSE,
    "MedicationKnowledge" => &MEDICATION_KNOWLEDGE,
    "MedicationRequest" => &MEDICATION_REQUEST,
    "MedicationStatement" => &MEDICATION_STATEMENT,
    "MedicinalProduct" => &MEDICINAL_PRODUCT,
    "MedicinalProductAuthorization" => &MEDICINAL_PRODUCT_AUTHORIZATION,
    "MedicinalProductContraindication" => &MEDICINAL_PRODUCT_CONTRAINDICATION,
    "MedicinalProductIndication" => &MEDICINAL_PRODUCT_INDICATION,
    "MedicinalProductIngredient" => &MEDICINAL_PRODUCT_INGREDIENT,
    "MedicinalProductInteraction" => &MEDICINAL_PRODUCT_INTERACTION,
    "MedicinalProductManufactured" => &MEDICINAL_PRODUCT_MANUFACTURED,
    "MedicinalProductPackaged" => &MEDICINAL_PRODUCT_PACKAGED,
    "MedicinalProductPharmaceutical" => &MEDICINAL_PRODUCT_PHARMACEUTICAL,
    "MedicinalProductUndesirableEffect" => &MEDICINAL_PRODUCT_UNDESIRABLE_EFFECT,
    "MessageDefinition" => &MESSAGE_DEFINITION,
    "MessageHeader" => &MESSAGE_HEADER,
    "MolecularSequence" => &MOLECULAR_SEQUENCE,
    "NamingSystem" => &NAMING_SYSTEM,
    "NutritionOrder" => &NUTRITION_ORDER,
    "Observation" => &OBSERVATION,
    "ObservationDefinition" => &OBSERVATION_DEFINITION,
    "OperationDefinition" => &OPERATION_DEFINITION,
    "OperationOutcome" => &OPERATION_OUTCOME,
    "Organization" => &ORGANIZATION,
    "OrganizationAffiliation" => &ORGANIZATION_AFFILIATION,
    "Parameters" => &PARAMETERS,
    "Patient" => &PATIENT,
    "PaymentNotice" => &PAYMENT_NOTICE,
    "PaymentReconciliation" => &PAYMENT_RECONCILIATION,
    "Person" => &PERSON,
    "PlanDefinition" => &PLAN_DEFINITION,
    "Practitioner" => &PRACTITIONER,
    "PractitionerRole" => &PRACTITIONER_ROLE,
    "Procedure" => &PROCEDURE,
    "Provenance" => &PROVENANCE,
    "Questionnaire" => &QUESTIONNAIRE,
    "QuestionnaireResponse" => &QUESTIONNAIRE_RESPONSE,
    "RelatedPerson" => &RELATED_PERSON,
    "RequestGroup" => &REQUEST_GROUP,
    "ResearchDefinition" => &RESEARCH_DEFINITION,
    "ResearchElementDefinition" => &RESEARCH_ELEMENT_DEFINITION,
    "ResearchStudy" => &RESEARCH_STUDY,
    "ResearchSubject" => &RESEARCH_SUBJECT,
    "RiskAssessment" => &RISK_ASSESSMENT,
    "RiskEvidenceSynthesis" => &RISK_EVIDENCE_SYNTHESIS,
    "Schedule" => &SCHEDULE,
    "SearchParameter" => &SEARCH_PARAMETER,
    "ServiceRequest" => &SERVICE_REQUEST,
    "Slot" => &SLOT,
    "Specimen" => &SPECIMEN,
    "SpecimenDefinition" => &SPECIMEN_DEFINITION,
    "StructureDefinition" => &STRUCTURE_DEFINITION,
    "StructureMap" => &STRUCTURE_MAP,
    "Subscription" => &SUBSCRIPTION,
    "Substance" => &SUBSTANCE,
    "SubstanceNucleicAcid" => &SUBSTANCE_NUCLEIC_ACID,
    "SubstancePolymer" => &SUBSTANCE_POLYMER,
    "SubstanceProtein" => &SUBSTANCE_PROTEIN,
    "SubstanceReferenceInformation" => &SUBSTANCE_REFERENCE_INFORMATION,
    "SubstanceSourceMaterial" => &SUBSTANCE_SOURCE_MATERIAL,
    "SubstanceSpecification" => &SUBSTANCE_SPECIFICATION,
    "SupplyDelivery" => &SUPPLY_DELIVERY,
    "SupplyRequest" => &SUPPLY_REQUEST,
    "Task" => &TASK,
    "TerminologyCapabilities" => &TERMINOLOGY_CAPABILITIES,
    "TestReport" => &TEST_REPORT,
    "TestScript" => &TEST_SCRIPT,
    "ValueSet" => &VALUE_SET,
    "VerificationResult" => &VERIFICATION_RESULT,
    "VisionPrescription" => &VISION_PRESCRIPTION,
};

/// All R4 complex datatype shapes, keyed by type name.
pub static DATATYPES: phf::Map<&'static str, &'static StructureShape> = phf_map! {
    "Address" => &ADDRESS,
    "Age" => &AGE,
    "Annotation" => &ANNOTATION,
    "Attachment" => &ATTACHMENT,
    "CodeableConcept" => &CODEABLE_CONCEPT,
    "Coding" => &CODING,
    "ContactDetail" => &CONTACT_DETAIL,
    "ContactPoint" => &CONTACT_POINT,
    "Contributor" => &CONTRIBUTOR,
    "Count" => &COUNT,
    "DataRequirement" => &DATA_REQUIREMENT,
    "Distance" => &DISTANCE,
    "Dosage" => &DOSAGE,
    "Duration" => &DURATION,
    "Element" => &ELEMENT,
    "ElementDefinition" => &ELEMENT_DEFINITION,
    "Expression" => &EXPRESSION,
    "Extension" => &EXTENSION,
    "HumanName" => &HUMAN_NAME,
    "Identifier" => &IDENTIFIER,
    "MarketingStatus" => &MARKETING_STATUS,
    "Meta" => &META,
    "Money" => &MONEY,
    "MoneyQuantity" => &MONEY_QUANTITY,
    "Narrative" => &NARRATIVE,
    "ParameterDefinition" => &PARAMETER_DEFINITION,
    "Period" => &PERIOD,
    "Population" => &POPULATION,
    "ProdCharacteristic" => &PROD_CHARACTERISTIC,
    "ProductShelfLife" => &PRODUCT_SHELF_LIFE,
    "Quantity" => &QUANTITY,
    "Range" => &RANGE,
    "Ratio" => &RATIO,
    "Reference" => &REFERENCE,
    "RelatedArtifact" => &RELATED_ARTIFACT,
    "SampledData" => &SAMPLED_DATA,
    "Signature" => &SIGNATURE,
    "SimpleQuantity" => &SIMPLE_QUANTITY,
    "SubstanceAmount" => &SUBSTANCE_AMOUNT,
    "Timing" => &TIMING,
    "TriggerDefinition" => &TRIGGER_DEFINITION,
    "UsageContext" => &USAGE_CONTEXT,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Base, ShapeKind};

    #[test]
    fn index_keys_match_shape_names() {
        for (name, shape) in RESOURCES.entries() {
            assert_eq!(*name, shape.name);
            assert_eq!(shape.kind, ShapeKind::Resource);
        }
        for (name, shape) in DATATYPES.entries() {
            assert_eq!(*name, shape.name);
            assert_eq!(shape.kind, ShapeKind::ComplexType);
        }
    }

    #[test]
    fn bundle_and_parameters_skip_domain_resource() {
        assert_eq!(BUNDLE.base, Base::Resource);
        assert_eq!(PARAMETERS.base, Base::Resource);
        assert_eq!(BINARY.base, Base::Resource);
        assert_eq!(PATIENT.base, Base::DomainResource);
        assert!(BUNDLE.field("text").is_none());
        assert!(PATIENT.field("text").is_some());
    }

    #[test]
    fn catalog_size() {
        assert_eq!(RESOURCES.len(), 146);
        assert_eq!(DATATYPES.len(), 42);
    }
}
