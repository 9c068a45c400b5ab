//! Clinical resources: problems, allergies, care planning, requests, documents.

use super::codes;
use crate::shape::build::*;

const ONSET_TYPES: &[&str] = &["dateTime", "Age", "Period", "Range", "string"];

fhir_shape! {
    resource ALLERGY_INTOLERANCE = "AllergyIntolerance" [
        identifier("identifier").many(),
        codeable_concept("clinicalStatus"),
        codeable_concept("verificationStatus"),
        code("type").bind(codes::ALLERGY_INTOLERANCE_TYPE),
        code("category").many().bind(codes::ALLERGY_INTOLERANCE_CATEGORY),
        code("criticality").bind(codes::ALLERGY_INTOLERANCE_CRITICALITY),
        codeable_concept("code"),
        reference("patient").required(),
        reference("encounter"),
        choice("onset", ONSET_TYPES),
        date_time("recordedDate"),
        reference("recorder"),
        reference("asserter"),
        date_time("lastOccurrence"),
        annotation("note").many(),
        backbone("reaction", &ALLERGY_INTOLERANCE_REACTION).many(),
    ]
    backbone ALLERGY_INTOLERANCE_REACTION = "AllergyIntolerance.reaction" [
        codeable_concept("substance"),
        codeable_concept("manifestation").required().many(),
        string("description"),
        date_time("onset"),
        code("severity").bind(codes::REACTION_EVENT_SEVERITY),
        codeable_concept("exposureRoute"),
        annotation("note").many(),
    ]

    resource ADVERSE_EVENT = "AdverseEvent" [
        identifier("identifier"),
        code("actuality").required().bind(codes::ADVERSE_EVENT_ACTUALITY),
        codeable_concept("category").many(),
        codeable_concept("event"),
        reference("subject").required(),
        reference("encounter"),
        date_time("date"),
        date_time("detected"),
        date_time("recordedDate"),
        reference("resultingCondition").many(),
        reference("location"),
        codeable_concept("seriousness"),
        codeable_concept("severity"),
        codeable_concept("outcome"),
        reference("recorder"),
        reference("contributor").many(),
        backbone("suspectEntity", &ADVERSE_EVENT_SUSPECT_ENTITY).many(),
        reference("subjectMedicalHistory").many(),
        reference("referenceDocument").many(),
        reference("study").many(),
    ]
    backbone ADVERSE_EVENT_SUSPECT_ENTITY = "AdverseEvent.suspectEntity" [
        reference("instance").required(),
        backbone("causality", &ADVERSE_EVENT_CAUSALITY).many(),
    ]
    backbone ADVERSE_EVENT_CAUSALITY = "AdverseEvent.suspectEntity.causality" [
        codeable_concept("assessment"),
        string("productRelatedness"),
        reference("author"),
        codeable_concept("method"),
    ]

    resource CONDITION = "Condition" [
        identifier("identifier").many(),
        codeable_concept("clinicalStatus"),
        codeable_concept("verificationStatus"),
        codeable_concept("category").many(),
        codeable_concept("severity"),
        codeable_concept("code"),
        codeable_concept("bodySite").many(),
        reference("subject").required(),
        reference("encounter"),
        choice("onset", ONSET_TYPES),
        choice("abatement", ONSET_TYPES),
        date_time("recordedDate"),
        reference("recorder"),
        reference("asserter"),
        backbone("stage", &CONDITION_STAGE).many(),
        backbone("evidence", &CONDITION_EVIDENCE).many(),
        annotation("note").many(),
    ]
    backbone CONDITION_STAGE = "Condition.stage" [
        codeable_concept("summary"),
        reference("assessment").many(),
        codeable_concept("type"),
    ]
    backbone CONDITION_EVIDENCE = "Condition.evidence" [
        codeable_concept("code").many(),
        reference("detail").many(),
    ]

    resource PROCEDURE = "Procedure" [
        identifier("identifier").many(),
        canonical("instantiatesCanonical").many(),
        uri("instantiatesUri").many(),
        reference("basedOn").many(),
        reference("partOf").many(),
        code("status").required().bind(codes::EVENT_STATUS),
        codeable_concept("statusReason"),
        codeable_concept("category"),
        codeable_concept("code"),
        reference("subject").required(),
        reference("encounter"),
        choice("performed", &["dateTime", "Period", "string", "Age", "Range"]),
        reference("recorder"),
        reference("asserter"),
        backbone("performer", &PROCEDURE_PERFORMER).many(),
        reference("location"),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        codeable_concept("bodySite").many(),
        codeable_concept("outcome"),
        reference("report").many(),
        codeable_concept("complication").many(),
        reference("complicationDetail").many(),
        codeable_concept("followUp").many(),
        annotation("note").many(),
        backbone("focalDevice", &PROCEDURE_FOCAL_DEVICE).many(),
        reference("usedReference").many(),
        codeable_concept("usedCode").many(),
    ]
    backbone PROCEDURE_PERFORMER = "Procedure.performer" [
        codeable_concept("function"),
        reference("actor").required(),
        reference("onBehalfOf"),
    ]
    backbone PROCEDURE_FOCAL_DEVICE = "Procedure.focalDevice" [
        codeable_concept("action"),
        reference("manipulated").required(),
    ]

    resource FAMILY_MEMBER_HISTORY = "FamilyMemberHistory" [
        identifier("identifier").many(),
        canonical("instantiatesCanonical").many(),
        uri("instantiatesUri").many(),
        code("status").required().bind(codes::FAMILY_HISTORY_STATUS),
        codeable_concept("dataAbsentReason"),
        reference("patient").required(),
        date_time("date"),
        string("name"),
        codeable_concept("relationship").required(),
        codeable_concept("sex"),
        choice("born", &["Period", "date", "string"]),
        choice("age", &["Age", "Range", "string"]),
        boolean("estimatedAge"),
        choice("deceased", &["boolean", "Age", "Range", "date", "string"]),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        annotation("note").many(),
        backbone("condition", &FAMILY_MEMBER_HISTORY_CONDITION).many(),
    ]
    backbone FAMILY_MEMBER_HISTORY_CONDITION = "FamilyMemberHistory.condition" [
        codeable_concept("code").required(),
        codeable_concept("outcome"),
        boolean("contributedToDeath"),
        choice("onset", &["Age", "Range", "Period", "string"]),
        annotation("note").many(),
    ]

    resource CLINICAL_IMPRESSION = "ClinicalImpression" [
        identifier("identifier").many(),
        code("status").required().bind(codes::CLINICAL_IMPRESSION_STATUS),
        codeable_concept("statusReason"),
        codeable_concept("code"),
        string("description"),
        reference("subject").required(),
        reference("encounter"),
        choice("effective", &["dateTime", "Period"]),
        date_time("date"),
        reference("assessor"),
        reference("previous"),
        reference("problem").many(),
        backbone("investigation", &CLINICAL_IMPRESSION_INVESTIGATION).many(),
        uri("protocol").many(),
        string("summary"),
        backbone("finding", &CLINICAL_IMPRESSION_FINDING).many(),
        codeable_concept("prognosisCodeableConcept").many(),
        reference("prognosisReference").many(),
        reference("supportingInfo").many(),
        annotation("note").many(),
    ]
    backbone CLINICAL_IMPRESSION_INVESTIGATION = "ClinicalImpression.investigation" [
        codeable_concept("code").required(),
        reference("item").many(),
    ]
    backbone CLINICAL_IMPRESSION_FINDING = "ClinicalImpression.finding" [
        codeable_concept("itemCodeableConcept"),
        reference("itemReference"),
        string("basis"),
    ]

    resource DETECTED_ISSUE = "DetectedIssue" [
        identifier("identifier").many(),
        code("status").required().bind(codes::OBSERVATION_STATUS),
        codeable_concept("code"),
        code("severity").bind(codes::DETECTED_ISSUE_SEVERITY),
        reference("patient"),
        choice("identified", &["dateTime", "Period"]),
        reference("author"),
        reference("implicated").many(),
        backbone("evidence", &DETECTED_ISSUE_EVIDENCE).many(),
        string("detail"),
        uri("reference"),
        backbone("mitigation", &DETECTED_ISSUE_MITIGATION).many(),
    ]
    backbone DETECTED_ISSUE_EVIDENCE = "DetectedIssue.evidence" [
        codeable_concept("code").many(),
        reference("detail").many(),
    ]
    backbone DETECTED_ISSUE_MITIGATION = "DetectedIssue.mitigation" [
        codeable_concept("action").required(),
        date_time("date"),
        reference("author"),
    ]

    resource RISK_ASSESSMENT = "RiskAssessment" [
        identifier("identifier").many(),
        reference("basedOn"),
        reference("parent"),
        code("status").required().bind(codes::OBSERVATION_STATUS),
        codeable_concept("method"),
        codeable_concept("code"),
        reference("subject").required(),
        reference("encounter"),
        choice("occurrence", &["dateTime", "Period"]),
        reference("condition"),
        reference("performer"),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        reference("basis").many(),
        backbone("prediction", &RISK_ASSESSMENT_PREDICTION).many(),
        string("mitigation"),
        annotation("note").many(),
    ]
    backbone RISK_ASSESSMENT_PREDICTION = "RiskAssessment.prediction" [
        codeable_concept("outcome"),
        choice("probability", &["decimal", "Range"]),
        codeable_concept("qualitativeRisk"),
        decimal("relativeRisk"),
        choice("when", &["Period", "Range"]),
        string("rationale"),
    ]

    resource CARE_PLAN = "CarePlan" [
        identifier("identifier").many(),
        canonical("instantiatesCanonical").many(),
        uri("instantiatesUri").many(),
        reference("basedOn").many(),
        reference("replaces").many(),
        reference("partOf").many(),
        code("status").required().bind(codes::REQUEST_STATUS),
        code("intent").required().bind(codes::CARE_PLAN_INTENT),
        codeable_concept("category").many(),
        string("title"),
        string("description"),
        reference("subject").required(),
        reference("encounter"),
        period("period"),
        date_time("created"),
        reference("author"),
        reference("contributor").many(),
        reference("careTeam").many(),
        reference("addresses").many(),
        reference("supportingInfo").many(),
        reference("goal").many(),
        backbone("activity", &CARE_PLAN_ACTIVITY).many(),
        annotation("note").many(),
    ]
    backbone CARE_PLAN_ACTIVITY = "CarePlan.activity" [
        codeable_concept("outcomeCodeableConcept").many(),
        reference("outcomeReference").many(),
        annotation("progress").many(),
        reference("reference"),
        backbone("detail", &CARE_PLAN_ACTIVITY_DETAIL),
    ]
    backbone CARE_PLAN_ACTIVITY_DETAIL = "CarePlan.activity.detail" [
        code("kind").bind(codes::CARE_PLAN_ACTIVITY_KIND),
        canonical("instantiatesCanonical").many(),
        uri("instantiatesUri").many(),
        codeable_concept("code"),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        reference("goal").many(),
        code("status").required().bind(codes::CARE_PLAN_ACTIVITY_STATUS),
        codeable_concept("statusReason"),
        boolean("doNotPerform"),
        choice("scheduled", &["Timing", "Period", "string"]),
        reference("location"),
        reference("performer").many(),
        choice("product", &["CodeableConcept", "Reference"]),
        simple_quantity("dailyAmount"),
        simple_quantity("quantity"),
        string("description"),
    ]

    resource CARE_TEAM = "CareTeam" [
        identifier("identifier").many(),
        code("status").bind(codes::CARE_TEAM_STATUS),
        codeable_concept("category").many(),
        string("name"),
        reference("subject"),
        reference("encounter"),
        period("period"),
        backbone("participant", &CARE_TEAM_PARTICIPANT).many(),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        reference("managingOrganization").many(),
        contact_point("telecom").many(),
        annotation("note").many(),
    ]
    backbone CARE_TEAM_PARTICIPANT = "CareTeam.participant" [
        codeable_concept("role").many(),
        reference("member"),
        reference("onBehalfOf"),
        period("period"),
    ]

    resource GOAL = "Goal" [
        identifier("identifier").many(),
        code("lifecycleStatus").required().bind(codes::GOAL_LIFECYCLE_STATUS),
        codeable_concept("achievementStatus"),
        codeable_concept("category").many(),
        codeable_concept("priority"),
        codeable_concept("description").required(),
        reference("subject").required(),
        choice("start", &["date", "CodeableConcept"]),
        backbone("target", &GOAL_TARGET).many(),
        date("statusDate"),
        string("statusReason"),
        reference("expressedBy"),
        reference("addresses").many(),
        annotation("note").many(),
        codeable_concept("outcomeCode").many(),
        reference("outcomeReference").many(),
    ]
    backbone GOAL_TARGET = "Goal.target" [
        codeable_concept("measure"),
        choice(
            "detail",
            &["Quantity", "Range", "CodeableConcept", "string", "boolean", "integer", "Ratio"]
        ),
        choice("due", &["date", "Duration"]),
    ]

    resource SERVICE_REQUEST = "ServiceRequest" [
        identifier("identifier").many(),
        canonical("instantiatesCanonical").many(),
        uri("instantiatesUri").many(),
        reference("basedOn").many(),
        reference("replaces").many(),
        identifier("requisition"),
        code("status").required().bind(codes::REQUEST_STATUS),
        code("intent").required().bind(codes::REQUEST_INTENT),
        codeable_concept("category").many(),
        code("priority").bind(codes::REQUEST_PRIORITY),
        boolean("doNotPerform"),
        codeable_concept("code"),
        codeable_concept("orderDetail").many(),
        choice("quantity", &["Quantity", "Ratio", "Range"]),
        reference("subject").required(),
        reference("encounter"),
        choice("occurrence", &["dateTime", "Period", "Timing"]),
        choice("asNeeded", &["boolean", "CodeableConcept"]),
        date_time("authoredOn"),
        reference("requester"),
        codeable_concept("performerType"),
        reference("performer").many(),
        codeable_concept("locationCode").many(),
        reference("locationReference").many(),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        reference("insurance").many(),
        reference("supportingInfo").many(),
        reference("specimen").many(),
        codeable_concept("bodySite").many(),
        annotation("note").many(),
        string("patientInstruction"),
        reference("relevantHistory").many(),
    ]

    resource NUTRITION_ORDER = "NutritionOrder" [
        identifier("identifier").many(),
        canonical("instantiatesCanonical").many(),
        uri("instantiatesUri").many(),
        uri("instantiates").many(),
        code("status").required().bind(codes::REQUEST_STATUS),
        code("intent").required().bind(codes::REQUEST_INTENT),
        reference("patient").required(),
        reference("encounter"),
        date_time("dateTime").required(),
        reference("orderer"),
        reference("allergyIntolerance").many(),
        codeable_concept("foodPreferenceModifier").many(),
        codeable_concept("excludeFoodModifier").many(),
        backbone("oralDiet", &NUTRITION_ORDER_ORAL_DIET),
        backbone("supplement", &NUTRITION_ORDER_SUPPLEMENT).many(),
        backbone("enteralFormula", &NUTRITION_ORDER_ENTERAL_FORMULA),
        annotation("note").many(),
    ]
    backbone NUTRITION_ORDER_ORAL_DIET = "NutritionOrder.oralDiet" [
        codeable_concept("type").many(),
        timing("schedule").many(),
        backbone("nutrient", &NUTRITION_ORDER_ORAL_DIET_NUTRIENT).many(),
        backbone("texture", &NUTRITION_ORDER_ORAL_DIET_TEXTURE).many(),
        codeable_concept("fluidConsistencyType").many(),
        string("instruction"),
    ]
    backbone NUTRITION_ORDER_ORAL_DIET_NUTRIENT = "NutritionOrder.oralDiet.nutrient" [
        codeable_concept("modifier"),
        simple_quantity("amount"),
    ]
    backbone NUTRITION_ORDER_ORAL_DIET_TEXTURE = "NutritionOrder.oralDiet.texture" [
        codeable_concept("modifier"),
        codeable_concept("foodType"),
    ]
    backbone NUTRITION_ORDER_SUPPLEMENT = "NutritionOrder.supplement" [
        codeable_concept("type"),
        string("productName"),
        timing("schedule").many(),
        simple_quantity("quantity"),
        string("instruction"),
    ]
    backbone NUTRITION_ORDER_ENTERAL_FORMULA = "NutritionOrder.enteralFormula" [
        codeable_concept("baseFormulaType"),
        string("baseFormulaProductName"),
        codeable_concept("additiveType"),
        string("additiveProductName"),
        simple_quantity("caloricDensity"),
        codeable_concept("routeofAdministration"),
        backbone("administration", &NUTRITION_ORDER_ENTERAL_FORMULA_ADMINISTRATION).many(),
        simple_quantity("maxVolumeToDeliver"),
        string("administrationInstruction"),
    ]
    backbone NUTRITION_ORDER_ENTERAL_FORMULA_ADMINISTRATION = "NutritionOrder.enteralFormula.administration" [
        timing("schedule"),
        simple_quantity("quantity"),
        choice("rate", &["Quantity", "Ratio"]),
    ]

    resource VISION_PRESCRIPTION = "VisionPrescription" [
        identifier("identifier").many(),
        code("status").required().bind(codes::FINANCIAL_RESOURCE_STATUS),
        date_time("created").required(),
        reference("patient").required(),
        reference("encounter"),
        date_time("dateWritten").required(),
        reference("prescriber").required(),
        backbone("lensSpecification", &VISION_PRESCRIPTION_LENS_SPECIFICATION).required().many(),
    ]
    backbone VISION_PRESCRIPTION_LENS_SPECIFICATION = "VisionPrescription.lensSpecification" [
        codeable_concept("product").required(),
        code("eye").required().bind(codes::VISION_EYES),
        decimal("sphere"),
        decimal("cylinder"),
        integer("axis"),
        backbone("prism", &VISION_PRESCRIPTION_PRISM).many(),
        decimal("add"),
        decimal("power"),
        decimal("backCurve"),
        decimal("diameter"),
        simple_quantity("duration"),
        string("color"),
        string("brand"),
        annotation("note").many(),
    ]
    backbone VISION_PRESCRIPTION_PRISM = "VisionPrescription.lensSpecification.prism" [
        decimal("amount").required(),
        code("base").required().bind(codes::VISION_BASE),
    ]

    resource DEVICE_REQUEST = "DeviceRequest" [
        identifier("identifier").many(),
        canonical("instantiatesCanonical").many(),
        uri("instantiatesUri").many(),
        reference("basedOn").many(),
        reference("priorRequest").many(),
        identifier("groupIdentifier"),
        code("status").bind(codes::REQUEST_STATUS),
        code("intent").required().bind(codes::REQUEST_INTENT),
        code("priority").bind(codes::REQUEST_PRIORITY),
        choice("code", &["Reference", "CodeableConcept"]).required(),
        backbone("parameter", &DEVICE_REQUEST_PARAMETER).many(),
        reference("subject").required(),
        reference("encounter"),
        choice("occurrence", &["dateTime", "Period", "Timing"]),
        date_time("authoredOn"),
        reference("requester"),
        codeable_concept("performerType"),
        reference("performer"),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        reference("insurance").many(),
        reference("supportingInfo").many(),
        annotation("note").many(),
        reference("relevantHistory").many(),
    ]
    backbone DEVICE_REQUEST_PARAMETER = "DeviceRequest.parameter" [
        codeable_concept("code"),
        choice("value", &["CodeableConcept", "Quantity", "Range", "boolean"]),
    ]

    resource DEVICE_USE_STATEMENT = "DeviceUseStatement" [
        identifier("identifier").many(),
        reference("basedOn").many(),
        code("status").required().bind(codes::DEVICE_USE_STATEMENT_STATUS),
        reference("subject").required(),
        reference("derivedFrom").many(),
        choice("timing", &["Timing", "Period", "dateTime"]),
        date_time("recordedOn"),
        reference("source"),
        reference("device").required(),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        codeable_concept("bodySite"),
        annotation("note").many(),
    ]

    resource COMMUNICATION_REQUEST = "CommunicationRequest" [
        identifier("identifier").many(),
        reference("basedOn").many(),
        reference("replaces").many(),
        identifier("groupIdentifier"),
        code("status").required().bind(codes::REQUEST_STATUS),
        codeable_concept("statusReason"),
        codeable_concept("category").many(),
        code("priority").bind(codes::REQUEST_PRIORITY),
        boolean("doNotPerform"),
        codeable_concept("medium").many(),
        reference("subject"),
        reference("about").many(),
        reference("encounter"),
        backbone("payload", &COMMUNICATION_PAYLOAD).many(),
        choice("occurrence", &["dateTime", "Period"]),
        date_time("authoredOn"),
        reference("requester"),
        reference("recipient").many(),
        reference("sender"),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        annotation("note").many(),
    ]
    backbone COMMUNICATION_PAYLOAD = "Communication.payload" [
        choice("content", &["string", "Attachment", "Reference"]).required(),
    ]

    resource COMMUNICATION = "Communication" [
        identifier("identifier").many(),
        canonical("instantiatesCanonical").many(),
        uri("instantiatesUri").many(),
        reference("basedOn").many(),
        reference("partOf").many(),
        reference("inResponseTo").many(),
        code("status").required().bind(codes::EVENT_STATUS),
        codeable_concept("statusReason"),
        codeable_concept("category").many(),
        code("priority").bind(codes::REQUEST_PRIORITY),
        codeable_concept("medium").many(),
        reference("subject"),
        codeable_concept("topic"),
        reference("about").many(),
        reference("encounter"),
        date_time("sent"),
        date_time("received"),
        reference("recipient").many(),
        reference("sender"),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        backbone("payload", &COMMUNICATION_PAYLOAD).many(),
        annotation("note").many(),
    ]

    resource COMPOSITION = "Composition" [
        identifier("identifier"),
        code("status").required().bind(codes::COMPOSITION_STATUS),
        codeable_concept("type").required(),
        codeable_concept("category").many(),
        reference("subject"),
        reference("encounter"),
        date_time("date").required(),
        reference("author").required().many(),
        string("title").required(),
        code("confidentiality"),
        backbone("attester", &COMPOSITION_ATTESTER).many(),
        reference("custodian"),
        backbone("relatesTo", &COMPOSITION_RELATES_TO).many(),
        backbone("event", &COMPOSITION_EVENT).many(),
        backbone("section", &COMPOSITION_SECTION).many(),
    ]
    backbone COMPOSITION_ATTESTER = "Composition.attester" [
        code("mode").required().bind(codes::COMPOSITION_ATTESTATION_MODE),
        date_time("time"),
        reference("party"),
    ]
    backbone COMPOSITION_RELATES_TO = "Composition.relatesTo" [
        code("code").required().bind(codes::DOCUMENT_RELATIONSHIP_TYPE),
        choice("target", &["Identifier", "Reference"]).required(),
    ]
    backbone COMPOSITION_EVENT = "Composition.event" [
        codeable_concept("code").many(),
        period("period"),
        reference("detail").many(),
    ]
    backbone COMPOSITION_SECTION = "Composition.section" [
        string("title"),
        codeable_concept("code"),
        reference("author").many(),
        reference("focus"),
        narrative("text"),
        code("mode").bind(codes::LIST_MODE),
        codeable_concept("orderedBy"),
        reference("entry").many(),
        codeable_concept("emptyReason"),
        backbone("section", &COMPOSITION_SECTION).many(),
    ]

    resource DOCUMENT_MANIFEST = "DocumentManifest" [
        identifier("masterIdentifier"),
        identifier("identifier").many(),
        code("status").required().bind(codes::DOCUMENT_REFERENCE_STATUS),
        codeable_concept("type"),
        reference("subject"),
        date_time("created"),
        reference("author").many(),
        reference("recipient").many(),
        uri("source"),
        string("description"),
        reference("content").required().many(),
        backbone("related", &DOCUMENT_MANIFEST_RELATED).many(),
    ]
    backbone DOCUMENT_MANIFEST_RELATED = "DocumentManifest.related" [
        identifier("identifier"),
        reference("ref"),
    ]

    resource DOCUMENT_REFERENCE = "DocumentReference" [
        identifier("masterIdentifier"),
        identifier("identifier").many(),
        code("status").required().bind(codes::DOCUMENT_REFERENCE_STATUS),
        code("docStatus").bind(codes::COMPOSITION_STATUS),
        codeable_concept("type"),
        codeable_concept("category").many(),
        reference("subject"),
        instant("date"),
        reference("author").many(),
        reference("authenticator"),
        reference("custodian"),
        backbone("relatesTo", &DOCUMENT_REFERENCE_RELATES_TO).many(),
        string("description"),
        codeable_concept("securityLabel").many(),
        backbone("content", &DOCUMENT_REFERENCE_CONTENT).required().many(),
        backbone("context", &DOCUMENT_REFERENCE_CONTEXT),
    ]
    backbone DOCUMENT_REFERENCE_RELATES_TO = "DocumentReference.relatesTo" [
        code("code").required().bind(codes::DOCUMENT_RELATIONSHIP_TYPE),
        reference("target").required(),
    ]
    backbone DOCUMENT_REFERENCE_CONTENT = "DocumentReference.content" [
        attachment("attachment").required(),
        coding("format"),
    ]
    backbone DOCUMENT_REFERENCE_CONTEXT = "DocumentReference.context" [
        reference("encounter").many(),
        codeable_concept("event").many(),
        period("period"),
        codeable_concept("facilityType"),
        codeable_concept("practiceSetting"),
        reference("sourcePatientInfo"),
        reference("related").many(),
    ]

    resource CONSENT = "Consent" [
        identifier("identifier").many(),
        code("status").required().bind(codes::CONSENT_STATE),
        codeable_concept("scope").required(),
        codeable_concept("category").required().many(),
        reference("patient"),
        date_time("dateTime"),
        reference("performer").many(),
        reference("organization").many(),
        choice("source", &["Attachment", "Reference"]),
        backbone("policy", &CONSENT_POLICY).many(),
        codeable_concept("policyRule"),
        backbone("verification", &CONSENT_VERIFICATION).many(),
        backbone("provision", &CONSENT_PROVISION),
    ]
    backbone CONSENT_POLICY = "Consent.policy" [
        uri("authority"),
        uri("uri"),
    ]
    backbone CONSENT_VERIFICATION = "Consent.verification" [
        boolean("verified").required(),
        reference("verifiedWith"),
        date_time("verificationDate"),
    ]
    backbone CONSENT_PROVISION = "Consent.provision" [
        code("type").bind(codes::CONSENT_PROVISION_TYPE),
        period("period"),
        backbone("actor", &CONSENT_PROVISION_ACTOR).many(),
        codeable_concept("action").many(),
        coding("securityLabel").many(),
        coding("purpose").many(),
        coding("class").many(),
        codeable_concept("code").many(),
        period("dataPeriod"),
        backbone("data", &CONSENT_PROVISION_DATA).many(),
        backbone("provision", &CONSENT_PROVISION).many(),
    ]
    backbone CONSENT_PROVISION_ACTOR = "Consent.provision.actor" [
        codeable_concept("role").required(),
        reference("reference").required(),
    ]
    backbone CONSENT_PROVISION_DATA = "Consent.provision.data" [
        code("meaning").required().bind(codes::CONSENT_DATA_MEANING),
        reference("reference").required(),
    ]

    resource BODY_STRUCTURE = "BodyStructure" [
        identifier("identifier").many(),
        boolean("active"),
        codeable_concept("morphology"),
        codeable_concept("location"),
        codeable_concept("locationQualifier").many(),
        string("description"),
        attachment("image").many(),
        reference("patient").required(),
    ]
}
