//! Medication and immunization resources.

use super::codes;
use crate::shape::build::*;

fhir_shape! {
    resource MEDICATION = "Medication" [
        identifier("identifier").many(),
        codeable_concept("code"),
        code("status").bind(codes::MEDICATION_STATUS),
        reference("manufacturer"),
        codeable_concept("form"),
        ratio("amount"),
        backbone("ingredient", &MEDICATION_INGREDIENT).many(),
        backbone("batch", &MEDICATION_BATCH),
    ]
    backbone MEDICATION_INGREDIENT = "Medication.ingredient" [
        choice("item", &["CodeableConcept", "Reference"]).required(),
        boolean("isActive"),
        ratio("strength"),
    ]
    backbone MEDICATION_BATCH = "Medication.batch" [
        string("lotNumber"),
        date_time("expirationDate"),
    ]

    resource MEDICATION_ADMINISTRATION = "MedicationAdministration" [
        identifier("identifier").many(),
        uri("instantiates").many(),
        reference("partOf").many(),
        code("status").required().bind(codes::MEDICATION_ADMINISTRATION_STATUS),
        codeable_concept("statusReason").many(),
        codeable_concept("category"),
        choice("medication", &["CodeableConcept", "Reference"]).required(),
        reference("subject").required(),
        reference("context"),
        reference("supportingInformation").many(),
        choice("effective", &["dateTime", "Period"]).required(),
        backbone("performer", &MEDICATION_ADMINISTRATION_PERFORMER).many(),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        reference("request"),
        reference("device").many(),
        annotation("note").many(),
        backbone("dosage", &MEDICATION_ADMINISTRATION_DOSAGE),
        reference("eventHistory").many(),
    ]
    backbone MEDICATION_ADMINISTRATION_PERFORMER = "MedicationAdministration.performer" [
        codeable_concept("function"),
        reference("actor").required(),
    ]
    backbone MEDICATION_ADMINISTRATION_DOSAGE = "MedicationAdministration.dosage" [
        string("text"),
        codeable_concept("site"),
        codeable_concept("route"),
        codeable_concept("method"),
        simple_quantity("dose"),
        choice("rate", &["Ratio", "Quantity"]),
    ]

    resource MEDICATION_DISPENSE = "MedicationDispense" [
        identifier("identifier").many(),
        reference("partOf").many(),
        code("status").required().bind(codes::MEDICATION_DISPENSE_STATUS),
        choice("statusReason", &["CodeableConcept", "Reference"]),
        codeable_concept("category"),
        choice("medication", &["CodeableConcept", "Reference"]).required(),
        reference("subject"),
        reference("context"),
        reference("supportingInformation").many(),
        backbone("performer", &MEDICATION_DISPENSE_PERFORMER).many(),
        reference("location"),
        reference("authorizingPrescription").many(),
        codeable_concept("type"),
        simple_quantity("quantity"),
        simple_quantity("daysSupply"),
        date_time("whenPrepared"),
        date_time("whenHandedOver"),
        reference("destination"),
        reference("receiver").many(),
        annotation("note").many(),
        dosage("dosageInstruction").many(),
        backbone("substitution", &MEDICATION_DISPENSE_SUBSTITUTION),
        reference("detectedIssue").many(),
        reference("eventHistory").many(),
    ]
    backbone MEDICATION_DISPENSE_PERFORMER = "MedicationDispense.performer" [
        codeable_concept("function"),
        reference("actor").required(),
    ]
    backbone MEDICATION_DISPENSE_SUBSTITUTION = "MedicationDispense.substitution" [
        boolean("wasSubstituted").required(),
        codeable_concept("type"),
        codeable_concept("reason").many(),
        reference("responsibleParty").many(),
    ]

    resource MEDICATION_KNOWLEDGE = "MedicationKnowledge" [
        codeable_concept("code"),
        code("status").bind(codes::MEDICATION_STATUS),
        reference("manufacturer"),
        codeable_concept("doseForm"),
        simple_quantity("amount"),
        string("synonym").many(),
        backbone("relatedMedicationKnowledge", &MEDICATION_KNOWLEDGE_RELATED).many(),
        reference("associatedMedication").many(),
        codeable_concept("productType").many(),
        backbone("monograph", &MEDICATION_KNOWLEDGE_MONOGRAPH).many(),
        backbone("ingredient", &MEDICATION_KNOWLEDGE_INGREDIENT).many(),
        markdown("preparationInstruction"),
        codeable_concept("intendedRoute").many(),
        backbone("cost", &MEDICATION_KNOWLEDGE_COST).many(),
        backbone("monitoringProgram", &MEDICATION_KNOWLEDGE_MONITORING_PROGRAM).many(),
        backbone("administrationGuidelines", &MEDICATION_KNOWLEDGE_ADMINISTRATION_GUIDELINES).many(),
        backbone("medicineClassification", &MEDICATION_KNOWLEDGE_MEDICINE_CLASSIFICATION).many(),
        backbone("packaging", &MEDICATION_KNOWLEDGE_PACKAGING),
        backbone("drugCharacteristic", &MEDICATION_KNOWLEDGE_DRUG_CHARACTERISTIC).many(),
        reference("contraindication").many(),
        backbone("regulatory", &MEDICATION_KNOWLEDGE_REGULATORY).many(),
        backbone("kinetics", &MEDICATION_KNOWLEDGE_KINETICS).many(),
    ]
    backbone MEDICATION_KNOWLEDGE_RELATED = "MedicationKnowledge.relatedMedicationKnowledge" [
        codeable_concept("type").required(),
        reference("reference").required().many(),
    ]
    backbone MEDICATION_KNOWLEDGE_MONOGRAPH = "MedicationKnowledge.monograph" [
        codeable_concept("type"),
        reference("source"),
    ]
    backbone MEDICATION_KNOWLEDGE_INGREDIENT = "MedicationKnowledge.ingredient" [
        choice("item", &["CodeableConcept", "Reference"]).required(),
        boolean("isActive"),
        ratio("strength"),
    ]
    backbone MEDICATION_KNOWLEDGE_COST = "MedicationKnowledge.cost" [
        codeable_concept("type").required(),
        string("source"),
        money("cost").required(),
    ]
    backbone MEDICATION_KNOWLEDGE_MONITORING_PROGRAM = "MedicationKnowledge.monitoringProgram" [
        codeable_concept("type"),
        string("name"),
    ]
    backbone MEDICATION_KNOWLEDGE_ADMINISTRATION_GUIDELINES = "MedicationKnowledge.administrationGuidelines" [
        backbone("dosage", &MEDICATION_KNOWLEDGE_GUIDELINE_DOSAGE).many(),
        choice("indication", &["CodeableConcept", "Reference"]),
        backbone("patientCharacteristics", &MEDICATION_KNOWLEDGE_PATIENT_CHARACTERISTICS).many(),
    ]
    backbone MEDICATION_KNOWLEDGE_GUIDELINE_DOSAGE = "MedicationKnowledge.administrationGuidelines.dosage" [
        codeable_concept("type").required(),
        dosage("dosage").required().many(),
    ]
    backbone MEDICATION_KNOWLEDGE_PATIENT_CHARACTERISTICS = "MedicationKnowledge.administrationGuidelines.patientCharacteristics" [
        choice("characteristic", &["CodeableConcept", "Quantity"]).required(),
        string("value").many(),
    ]
    backbone MEDICATION_KNOWLEDGE_MEDICINE_CLASSIFICATION = "MedicationKnowledge.medicineClassification" [
        codeable_concept("type").required(),
        codeable_concept("classification").many(),
    ]
    backbone MEDICATION_KNOWLEDGE_PACKAGING = "MedicationKnowledge.packaging" [
        codeable_concept("type"),
        simple_quantity("quantity"),
    ]
    backbone MEDICATION_KNOWLEDGE_DRUG_CHARACTERISTIC = "MedicationKnowledge.drugCharacteristic" [
        codeable_concept("type"),
        choice("value", &["CodeableConcept", "string", "Quantity", "base64Binary"]),
    ]
    backbone MEDICATION_KNOWLEDGE_REGULATORY = "MedicationKnowledge.regulatory" [
        reference("regulatoryAuthority").required(),
        backbone("substitution", &MEDICATION_KNOWLEDGE_REGULATORY_SUBSTITUTION).many(),
        backbone("schedule", &MEDICATION_KNOWLEDGE_REGULATORY_SCHEDULE).many(),
        backbone("maxDispense", &MEDICATION_KNOWLEDGE_REGULATORY_MAX_DISPENSE),
    ]
    backbone MEDICATION_KNOWLEDGE_REGULATORY_SUBSTITUTION = "MedicationKnowledge.regulatory.substitution" [
        codeable_concept("type").required(),
        boolean("allowed").required(),
    ]
    backbone MEDICATION_KNOWLEDGE_REGULATORY_SCHEDULE = "MedicationKnowledge.regulatory.schedule" [
        codeable_concept("schedule").required(),
    ]
    backbone MEDICATION_KNOWLEDGE_REGULATORY_MAX_DISPENSE = "MedicationKnowledge.regulatory.maxDispense" [
        simple_quantity("quantity").required(),
        duration("period"),
    ]
    backbone MEDICATION_KNOWLEDGE_KINETICS = "MedicationKnowledge.kinetics" [
        simple_quantity("areaUnderCurve").many(),
        simple_quantity("lethalDose50").many(),
        duration("halfLifePeriod"),
    ]

    resource MEDICATION_REQUEST = "MedicationRequest" [
        identifier("identifier").many(),
        code("status").required().bind(codes::MEDICATION_REQUEST_STATUS),
        codeable_concept("statusReason"),
        code("intent").required().bind(codes::MEDICATION_REQUEST_INTENT),
        codeable_concept("category").many(),
        code("priority").bind(codes::REQUEST_PRIORITY),
        boolean("doNotPerform"),
        choice("reported", &["boolean", "Reference"]),
        choice("medication", &["CodeableConcept", "Reference"]).required(),
        reference("subject").required(),
        reference("encounter"),
        reference("supportingInformation").many(),
        date_time("authoredOn"),
        reference("requester"),
        reference("performer"),
        codeable_concept("performerType"),
        reference("recorder"),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        canonical("instantiatesCanonical").many(),
        uri("instantiatesUri").many(),
        reference("basedOn").many(),
        identifier("groupIdentifier"),
        codeable_concept("courseOfTherapyType"),
        reference("insurance").many(),
        annotation("note").many(),
        dosage("dosageInstruction").many(),
        backbone("dispenseRequest", &MEDICATION_REQUEST_DISPENSE_REQUEST),
        backbone("substitution", &MEDICATION_REQUEST_SUBSTITUTION),
        reference("priorPrescription"),
        reference("detectedIssue").many(),
        reference("eventHistory").many(),
    ]
    backbone MEDICATION_REQUEST_DISPENSE_REQUEST = "MedicationRequest.dispenseRequest" [
        backbone("initialFill", &MEDICATION_REQUEST_INITIAL_FILL),
        duration("dispenseInterval"),
        period("validityPeriod"),
        unsigned_int("numberOfRepeatsAllowed"),
        simple_quantity("quantity"),
        duration("expectedSupplyDuration"),
        reference("performer"),
    ]
    backbone MEDICATION_REQUEST_INITIAL_FILL = "MedicationRequest.dispenseRequest.initialFill" [
        simple_quantity("quantity"),
        duration("duration"),
    ]
    backbone MEDICATION_REQUEST_SUBSTITUTION = "MedicationRequest.substitution" [
        choice("allowed", &["boolean", "CodeableConcept"]).required(),
        codeable_concept("reason"),
    ]

    resource MEDICATION_STATEMENT = "MedicationStatement" [
        identifier("identifier").many(),
        reference("basedOn").many(),
        reference("partOf").many(),
        code("status").required().bind(codes::MEDICATION_STATEMENT_STATUS),
        codeable_concept("statusReason").many(),
        codeable_concept("category"),
        choice("medication", &["CodeableConcept", "Reference"]).required(),
        reference("subject").required(),
        reference("context"),
        choice("effective", &["dateTime", "Period"]),
        date_time("dateAsserted"),
        reference("informationSource"),
        reference("derivedFrom").many(),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        annotation("note").many(),
        dosage("dosage").many(),
    ]

    resource IMMUNIZATION = "Immunization" [
        identifier("identifier").many(),
        code("status").required().bind(codes::IMMUNIZATION_STATUS),
        codeable_concept("statusReason"),
        codeable_concept("vaccineCode").required(),
        reference("patient").required(),
        reference("encounter"),
        choice("occurrence", &["dateTime", "string"]).required(),
        date_time("recorded"),
        boolean("primarySource"),
        codeable_concept("reportOrigin"),
        reference("location"),
        reference("manufacturer"),
        string("lotNumber"),
        date("expirationDate"),
        codeable_concept("site"),
        codeable_concept("route"),
        simple_quantity("doseQuantity"),
        backbone("performer", &IMMUNIZATION_PERFORMER).many(),
        annotation("note").many(),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        boolean("isSubpotent"),
        codeable_concept("subpotentReason").many(),
        backbone("education", &IMMUNIZATION_EDUCATION).many(),
        codeable_concept("programEligibility").many(),
        codeable_concept("fundingSource"),
        backbone("reaction", &IMMUNIZATION_REACTION).many(),
        backbone("protocolApplied", &IMMUNIZATION_PROTOCOL_APPLIED).many(),
    ]
    backbone IMMUNIZATION_PERFORMER = "Immunization.performer" [
        codeable_concept("function"),
        reference("actor").required(),
    ]
    backbone IMMUNIZATION_EDUCATION = "Immunization.education" [
        string("documentType"),
        uri("reference"),
        date_time("publicationDate"),
        date_time("presentationDate"),
    ]
    backbone IMMUNIZATION_REACTION = "Immunization.reaction" [
        date_time("date"),
        reference("detail"),
        boolean("reported"),
    ]
    backbone IMMUNIZATION_PROTOCOL_APPLIED = "Immunization.protocolApplied" [
        string("series"),
        reference("authority"),
        codeable_concept("targetDisease").many(),
        choice("doseNumber", &["positiveInt", "string"]).required(),
        choice("seriesDoses", &["positiveInt", "string"]),
    ]

    resource IMMUNIZATION_EVALUATION = "ImmunizationEvaluation" [
        identifier("identifier").many(),
        code("status").required().bind(codes::IMMUNIZATION_EVALUATION_STATUS),
        reference("patient").required(),
        date_time("date"),
        reference("authority"),
        codeable_concept("targetDisease").required(),
        reference("immunizationEvent").required(),
        codeable_concept("doseStatus").required(),
        codeable_concept("doseStatusReason").many(),
        string("description"),
        string("series"),
        choice("doseNumber", &["positiveInt", "string"]),
        choice("seriesDoses", &["positiveInt", "string"]),
    ]

    resource IMMUNIZATION_RECOMMENDATION = "ImmunizationRecommendation" [
        identifier("identifier").many(),
        reference("patient").required(),
        date_time("date").required(),
        reference("authority"),
        backbone("recommendation", &IMMUNIZATION_RECOMMENDATION_RECOMMENDATION).required().many(),
    ]
    backbone IMMUNIZATION_RECOMMENDATION_RECOMMENDATION = "ImmunizationRecommendation.recommendation" [
        codeable_concept("vaccineCode").many(),
        codeable_concept("targetDisease"),
        codeable_concept("contraindicatedVaccineCode").many(),
        codeable_concept("forecastStatus").required(),
        codeable_concept("forecastReason").many(),
        backbone("dateCriterion", &IMMUNIZATION_RECOMMENDATION_DATE_CRITERION).many(),
        string("description"),
        string("series"),
        choice("doseNumber", &["positiveInt", "string"]),
        choice("seriesDoses", &["positiveInt", "string"]),
        reference("supportingImmunization").many(),
        reference("supportingPatientInformation").many(),
    ]
    backbone IMMUNIZATION_RECOMMENDATION_DATE_CRITERION = "ImmunizationRecommendation.recommendation.dateCriterion" [
        codeable_concept("code").required(),
        date_time("value").required(),
    ]
}
