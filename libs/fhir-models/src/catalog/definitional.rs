//! Definitional artifacts, evidence, research, workflow and supply resources.

use super::codes;
use super::datatypes::OPEN_TYPES;
use crate::shape::build::*;

const SUBJECT_TYPES: &[&str] = &["CodeableConcept", "Reference"];
const ACTION_TIMING_TYPES: &[&str] = &["dateTime", "Age", "Period", "Duration", "Range", "Timing"];
const EFFECTIVE_TYPES: &[&str] = &["dateTime", "Period", "Duration", "Timing"];

fhir_shape! {
    resource ACTIVITY_DEFINITION = "ActivityDefinition" [
        uri("url"),
        identifier("identifier").many(),
        string("version"),
        string("name"),
        string("title"),
        string("subtitle"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        choice("subject", SUBJECT_TYPES),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        string("usage"),
        markdown("copyright"),
        date("approvalDate"),
        date("lastReviewDate"),
        period("effectivePeriod"),
        codeable_concept("topic").many(),
        contact_detail("author").many(),
        contact_detail("editor").many(),
        contact_detail("reviewer").many(),
        contact_detail("endorser").many(),
        related_artifact("relatedArtifact").many(),
        canonical("library").many(),
        code("kind"),
        canonical("profile"),
        codeable_concept("code"),
        code("intent").bind(codes::REQUEST_INTENT),
        code("priority").bind(codes::REQUEST_PRIORITY),
        boolean("doNotPerform"),
        choice("timing", &["Timing", "dateTime", "Age", "Period", "Range", "Duration"]),
        reference("location"),
        backbone("participant", &ACTIVITY_DEFINITION_PARTICIPANT).many(),
        choice("product", &["Reference", "CodeableConcept"]),
        simple_quantity("quantity"),
        dosage("dosage").many(),
        codeable_concept("bodySite").many(),
        reference("specimenRequirement").many(),
        reference("observationRequirement").many(),
        reference("observationResultRequirement").many(),
        canonical("transform"),
        backbone("dynamicValue", &ACTIVITY_DEFINITION_DYNAMIC_VALUE).many(),
    ]
    backbone ACTIVITY_DEFINITION_PARTICIPANT = "ActivityDefinition.participant" [
        code("type").required().bind(codes::ACTION_PARTICIPANT_TYPE),
        codeable_concept("role"),
    ]
    backbone ACTIVITY_DEFINITION_DYNAMIC_VALUE = "ActivityDefinition.dynamicValue" [
        string("path").required(),
        expression("expression").required(),
    ]

    resource PLAN_DEFINITION = "PlanDefinition" [
        uri("url"),
        identifier("identifier").many(),
        string("version"),
        string("name"),
        string("title"),
        string("subtitle"),
        codeable_concept("type"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        choice("subject", SUBJECT_TYPES),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        string("usage"),
        markdown("copyright"),
        date("approvalDate"),
        date("lastReviewDate"),
        period("effectivePeriod"),
        codeable_concept("topic").many(),
        contact_detail("author").many(),
        contact_detail("editor").many(),
        contact_detail("reviewer").many(),
        contact_detail("endorser").many(),
        related_artifact("relatedArtifact").many(),
        canonical("library").many(),
        backbone("goal", &PLAN_DEFINITION_GOAL).many(),
        backbone("action", &PLAN_DEFINITION_ACTION).many(),
    ]
    backbone PLAN_DEFINITION_GOAL = "PlanDefinition.goal" [
        codeable_concept("category"),
        codeable_concept("description").required(),
        codeable_concept("priority"),
        codeable_concept("start"),
        codeable_concept("addresses").many(),
        related_artifact("documentation").many(),
        backbone("target", &PLAN_DEFINITION_GOAL_TARGET).many(),
    ]
    backbone PLAN_DEFINITION_GOAL_TARGET = "PlanDefinition.goal.target" [
        codeable_concept("measure"),
        choice("detail", &["Quantity", "Range", "CodeableConcept"]),
        duration("due"),
    ]
    backbone PLAN_DEFINITION_ACTION = "PlanDefinition.action" [
        string("prefix"),
        string("title"),
        string("description"),
        string("textEquivalent"),
        code("priority").bind(codes::REQUEST_PRIORITY),
        codeable_concept("code").many(),
        codeable_concept("reason").many(),
        related_artifact("documentation").many(),
        id("goalId").many(),
        choice("subject", SUBJECT_TYPES),
        trigger_definition("trigger").many(),
        backbone("condition", &ACTION_CONDITION).many(),
        data_requirement("input").many(),
        data_requirement("output").many(),
        backbone("relatedAction", &ACTION_RELATED_ACTION).many(),
        choice("timing", ACTION_TIMING_TYPES),
        backbone("participant", &ACTIVITY_DEFINITION_PARTICIPANT).many(),
        codeable_concept("type"),
        code("groupingBehavior").bind(codes::ACTION_GROUPING_BEHAVIOR),
        code("selectionBehavior").bind(codes::ACTION_SELECTION_BEHAVIOR),
        code("requiredBehavior").bind(codes::ACTION_REQUIRED_BEHAVIOR),
        code("precheckBehavior").bind(codes::ACTION_PRECHECK_BEHAVIOR),
        code("cardinalityBehavior").bind(codes::ACTION_CARDINALITY_BEHAVIOR),
        choice("definition", &["canonical", "uri"]),
        canonical("transform"),
        backbone("dynamicValue", &PLAN_DEFINITION_DYNAMIC_VALUE).many(),
        backbone("action", &PLAN_DEFINITION_ACTION).many(),
    ]
    backbone ACTION_CONDITION = "PlanDefinition.action.condition" [
        code("kind").required().bind(codes::ACTION_CONDITION_KIND),
        expression("expression"),
    ]
    backbone ACTION_RELATED_ACTION = "PlanDefinition.action.relatedAction" [
        id("actionId").required(),
        code("relationship").required().bind(codes::ACTION_RELATIONSHIP_TYPE),
        choice("offset", &["Duration", "Range"]),
    ]
    backbone PLAN_DEFINITION_DYNAMIC_VALUE = "PlanDefinition.action.dynamicValue" [
        string("path"),
        expression("expression"),
    ]

    resource LIBRARY = "Library" [
        uri("url"),
        identifier("identifier").many(),
        string("version"),
        string("name"),
        string("title"),
        string("subtitle"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        codeable_concept("type").required(),
        choice("subject", SUBJECT_TYPES),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        string("usage"),
        markdown("copyright"),
        date("approvalDate"),
        date("lastReviewDate"),
        period("effectivePeriod"),
        codeable_concept("topic").many(),
        contact_detail("author").many(),
        contact_detail("editor").many(),
        contact_detail("reviewer").many(),
        contact_detail("endorser").many(),
        related_artifact("relatedArtifact").many(),
        parameter_definition("parameter").many(),
        data_requirement("dataRequirement").many(),
        attachment("content").many(),
    ]

    resource MEASURE = "Measure" [
        uri("url"),
        identifier("identifier").many(),
        string("version"),
        string("name"),
        string("title"),
        string("subtitle"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        choice("subject", SUBJECT_TYPES),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        string("usage"),
        markdown("copyright"),
        date("approvalDate"),
        date("lastReviewDate"),
        period("effectivePeriod"),
        codeable_concept("topic").many(),
        contact_detail("author").many(),
        contact_detail("editor").many(),
        contact_detail("reviewer").many(),
        contact_detail("endorser").many(),
        related_artifact("relatedArtifact").many(),
        canonical("library").many(),
        markdown("disclaimer"),
        codeable_concept("scoring"),
        codeable_concept("compositeScoring"),
        codeable_concept("type").many(),
        string("riskAdjustment"),
        string("rateAggregation"),
        markdown("rationale"),
        markdown("clinicalRecommendationStatement"),
        codeable_concept("improvementNotation"),
        markdown("definition").many(),
        markdown("guidance"),
        backbone("group", &MEASURE_GROUP).many(),
        backbone("supplementalData", &MEASURE_SUPPLEMENTAL_DATA).many(),
    ]
    backbone MEASURE_GROUP = "Measure.group" [
        codeable_concept("code"),
        string("description"),
        backbone("population", &MEASURE_GROUP_POPULATION).many(),
        backbone("stratifier", &MEASURE_GROUP_STRATIFIER).many(),
    ]
    backbone MEASURE_GROUP_POPULATION = "Measure.group.population" [
        codeable_concept("code"),
        string("description"),
        expression("criteria").required(),
    ]
    backbone MEASURE_GROUP_STRATIFIER = "Measure.group.stratifier" [
        codeable_concept("code"),
        string("description"),
        expression("criteria"),
        backbone("component", &MEASURE_GROUP_POPULATION).many(),
    ]
    backbone MEASURE_SUPPLEMENTAL_DATA = "Measure.supplementalData" [
        codeable_concept("code"),
        codeable_concept("usage").many(),
        string("description"),
        expression("criteria").required(),
    ]

    resource MEASURE_REPORT = "MeasureReport" [
        identifier("identifier").many(),
        code("status").required().bind(codes::MEASURE_REPORT_STATUS),
        code("type").required().bind(codes::MEASURE_REPORT_TYPE),
        canonical("measure").required(),
        reference("subject"),
        date_time("date"),
        reference("reporter"),
        period("period").required(),
        codeable_concept("improvementNotation"),
        backbone("group", &MEASURE_REPORT_GROUP).many(),
        reference("evaluatedResource").many(),
    ]
    backbone MEASURE_REPORT_GROUP = "MeasureReport.group" [
        codeable_concept("code"),
        backbone("population", &MEASURE_REPORT_POPULATION).many(),
        quantity("measureScore"),
        backbone("stratifier", &MEASURE_REPORT_STRATIFIER).many(),
    ]
    backbone MEASURE_REPORT_POPULATION = "MeasureReport.group.population" [
        codeable_concept("code"),
        integer("count"),
        reference("subjectResults"),
    ]
    backbone MEASURE_REPORT_STRATIFIER = "MeasureReport.group.stratifier" [
        codeable_concept("code").many(),
        backbone("stratum", &MEASURE_REPORT_STRATUM).many(),
    ]
    backbone MEASURE_REPORT_STRATUM = "MeasureReport.group.stratifier.stratum" [
        codeable_concept("value"),
        backbone("component", &MEASURE_REPORT_STRATUM_COMPONENT).many(),
        backbone("population", &MEASURE_REPORT_POPULATION).many(),
        quantity("measureScore"),
    ]
    backbone MEASURE_REPORT_STRATUM_COMPONENT = "MeasureReport.group.stratifier.stratum.component" [
        codeable_concept("code").required(),
        codeable_concept("value").required(),
    ]

    resource QUESTIONNAIRE = "Questionnaire" [
        uri("url"),
        identifier("identifier").many(),
        string("version"),
        string("name"),
        string("title"),
        canonical("derivedFrom").many(),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        code("subjectType").many(),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        markdown("copyright"),
        date("approvalDate"),
        date("lastReviewDate"),
        period("effectivePeriod"),
        coding("code").many(),
        backbone("item", &QUESTIONNAIRE_ITEM).many(),
    ]
    backbone QUESTIONNAIRE_ITEM = "Questionnaire.item" [
        string("linkId").required(),
        uri("definition"),
        coding("code").many(),
        string("prefix"),
        string("text"),
        code("type").required().bind(codes::QUESTIONNAIRE_ITEM_TYPE),
        backbone("enableWhen", &QUESTIONNAIRE_ITEM_ENABLE_WHEN).many(),
        code("enableBehavior").bind(codes::QUESTIONNAIRE_ENABLE_BEHAVIOR),
        boolean("required"),
        boolean("repeats"),
        boolean("readOnly"),
        integer("maxLength"),
        canonical("answerValueSet"),
        backbone("answerOption", &QUESTIONNAIRE_ITEM_ANSWER_OPTION).many(),
        backbone("initial", &QUESTIONNAIRE_ITEM_INITIAL).many(),
        backbone("item", &QUESTIONNAIRE_ITEM).many(),
    ]
    backbone QUESTIONNAIRE_ITEM_ENABLE_WHEN = "Questionnaire.item.enableWhen" [
        string("question").required(),
        code("operator").required().bind(codes::QUESTIONNAIRE_ENABLE_OPERATOR),
        choice(
            "answer",
            &[
                "boolean",
                "decimal",
                "integer",
                "date",
                "dateTime",
                "time",
                "string",
                "Coding",
                "Quantity",
                "Reference",
            ]
        )
        .required(),
    ]
    backbone QUESTIONNAIRE_ITEM_ANSWER_OPTION = "Questionnaire.item.answerOption" [
        choice("value", &["integer", "date", "time", "string", "Coding", "Reference"]).required(),
        boolean("initialSelected"),
    ]
    backbone QUESTIONNAIRE_ITEM_INITIAL = "Questionnaire.item.initial" [
        choice(
            "value",
            &[
                "boolean",
                "decimal",
                "integer",
                "date",
                "dateTime",
                "time",
                "string",
                "uri",
                "Attachment",
                "Coding",
                "Quantity",
                "Reference",
            ]
        )
        .required(),
    ]

    resource REQUEST_GROUP = "RequestGroup" [
        identifier("identifier").many(),
        canonical("instantiatesCanonical").many(),
        uri("instantiatesUri").many(),
        reference("basedOn").many(),
        reference("replaces").many(),
        identifier("groupIdentifier"),
        code("status").required().bind(codes::REQUEST_STATUS),
        code("intent").required().bind(codes::REQUEST_INTENT),
        code("priority").bind(codes::REQUEST_PRIORITY),
        codeable_concept("code"),
        reference("subject"),
        reference("encounter"),
        date_time("authoredOn"),
        reference("author"),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        annotation("note").many(),
        backbone("action", &REQUEST_GROUP_ACTION).many(),
    ]
    backbone REQUEST_GROUP_ACTION = "RequestGroup.action" [
        string("prefix"),
        string("title"),
        string("description"),
        string("textEquivalent"),
        code("priority").bind(codes::REQUEST_PRIORITY),
        codeable_concept("code").many(),
        related_artifact("documentation").many(),
        backbone("condition", &ACTION_CONDITION).many(),
        backbone("relatedAction", &ACTION_RELATED_ACTION).many(),
        choice("timing", ACTION_TIMING_TYPES),
        reference("participant").many(),
        codeable_concept("type"),
        code("groupingBehavior").bind(codes::ACTION_GROUPING_BEHAVIOR),
        code("selectionBehavior").bind(codes::ACTION_SELECTION_BEHAVIOR),
        code("requiredBehavior").bind(codes::ACTION_REQUIRED_BEHAVIOR),
        code("precheckBehavior").bind(codes::ACTION_PRECHECK_BEHAVIOR),
        code("cardinalityBehavior").bind(codes::ACTION_CARDINALITY_BEHAVIOR),
        reference("resource"),
        backbone("action", &REQUEST_GROUP_ACTION).many(),
    ]

    resource GUIDANCE_RESPONSE = "GuidanceResponse" [
        identifier("requestIdentifier"),
        identifier("identifier").many(),
        choice("module", &["uri", "canonical", "CodeableConcept"]).required(),
        code("status").required().bind(codes::GUIDANCE_RESPONSE_STATUS),
        reference("subject"),
        reference("encounter"),
        date_time("occurrenceDateTime"),
        reference("performer"),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        annotation("note").many(),
        reference("evaluationMessage").many(),
        reference("outputParameters"),
        reference("result"),
        data_requirement("dataRequirement").many(),
    ]

    resource EVENT_DEFINITION = "EventDefinition" [
        uri("url"),
        identifier("identifier").many(),
        string("version"),
        string("name"),
        string("title"),
        string("subtitle"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        choice("subject", SUBJECT_TYPES),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        string("usage"),
        markdown("copyright"),
        date("approvalDate"),
        date("lastReviewDate"),
        period("effectivePeriod"),
        codeable_concept("topic").many(),
        contact_detail("author").many(),
        contact_detail("editor").many(),
        contact_detail("reviewer").many(),
        contact_detail("endorser").many(),
        related_artifact("relatedArtifact").many(),
        trigger_definition("trigger").required().many(),
    ]

    resource EVIDENCE = "Evidence" [
        uri("url"),
        identifier("identifier").many(),
        string("version"),
        string("name"),
        string("title"),
        string("shortTitle"),
        string("subtitle"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        annotation("note").many(),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("copyright"),
        date("approvalDate"),
        date("lastReviewDate"),
        period("effectivePeriod"),
        codeable_concept("topic").many(),
        contact_detail("author").many(),
        contact_detail("editor").many(),
        contact_detail("reviewer").many(),
        contact_detail("endorser").many(),
        related_artifact("relatedArtifact").many(),
        reference("exposureBackground").required(),
        reference("exposureVariant").many(),
        reference("outcome").many(),
    ]

    resource EVIDENCE_VARIABLE = "EvidenceVariable" [
        uri("url"),
        identifier("identifier").many(),
        string("version"),
        string("name"),
        string("title"),
        string("shortTitle"),
        string("subtitle"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        annotation("note").many(),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("copyright"),
        date("approvalDate"),
        date("lastReviewDate"),
        period("effectivePeriod"),
        codeable_concept("topic").many(),
        contact_detail("author").many(),
        contact_detail("editor").many(),
        contact_detail("reviewer").many(),
        contact_detail("endorser").many(),
        related_artifact("relatedArtifact").many(),
        code("type").bind(codes::EVIDENCE_VARIABLE_TYPE),
        backbone("characteristic", &EVIDENCE_VARIABLE_CHARACTERISTIC).required().many(),
    ]
    backbone EVIDENCE_VARIABLE_CHARACTERISTIC = "EvidenceVariable.characteristic" [
        string("description"),
        choice(
            "definition",
            &["Reference", "canonical", "CodeableConcept", "Expression", "DataRequirement", "TriggerDefinition"]
        )
        .required(),
        usage_context("usageContext").many(),
        boolean("exclude"),
        choice("participantEffective", EFFECTIVE_TYPES),
        duration("timeFromStart"),
        code("groupMeasure").bind(codes::GROUP_MEASURE),
    ]

    resource EFFECT_EVIDENCE_SYNTHESIS = "EffectEvidenceSynthesis" [
        uri("url"),
        identifier("identifier").many(),
        string("version"),
        string("name"),
        string("title"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        annotation("note").many(),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("copyright"),
        date("approvalDate"),
        date("lastReviewDate"),
        period("effectivePeriod"),
        codeable_concept("topic").many(),
        contact_detail("author").many(),
        contact_detail("editor").many(),
        contact_detail("reviewer").many(),
        contact_detail("endorser").many(),
        related_artifact("relatedArtifact").many(),
        codeable_concept("synthesisType"),
        codeable_concept("studyType"),
        reference("population").required(),
        reference("exposure").required(),
        reference("exposureAlternative").required(),
        reference("outcome").required(),
        backbone("sampleSize", &SYNTHESIS_SAMPLE_SIZE),
        backbone("resultsByExposure", &EFFECT_EVIDENCE_SYNTHESIS_RESULTS_BY_EXPOSURE).many(),
        backbone("effectEstimate", &EFFECT_EVIDENCE_SYNTHESIS_EFFECT_ESTIMATE).many(),
        backbone("certainty", &SYNTHESIS_CERTAINTY).many(),
    ]
    backbone SYNTHESIS_SAMPLE_SIZE = "EffectEvidenceSynthesis.sampleSize" [
        string("description"),
        integer("numberOfStudies"),
        integer("numberOfParticipants"),
    ]
    backbone EFFECT_EVIDENCE_SYNTHESIS_RESULTS_BY_EXPOSURE = "EffectEvidenceSynthesis.resultsByExposure" [
        string("description"),
        code("exposureState").bind(codes::EXPOSURE_STATE),
        codeable_concept("variantState"),
        reference("riskEvidenceSynthesis").required(),
    ]
    backbone EFFECT_EVIDENCE_SYNTHESIS_EFFECT_ESTIMATE = "EffectEvidenceSynthesis.effectEstimate" [
        string("description"),
        codeable_concept("type"),
        codeable_concept("variantState"),
        decimal("value"),
        codeable_concept("unitOfMeasure"),
        backbone("precisionEstimate", &SYNTHESIS_PRECISION_ESTIMATE).many(),
    ]
    backbone SYNTHESIS_PRECISION_ESTIMATE = "EffectEvidenceSynthesis.effectEstimate.precisionEstimate" [
        codeable_concept("type"),
        decimal("level"),
        decimal("from"),
        decimal("to"),
    ]
    backbone SYNTHESIS_CERTAINTY = "EffectEvidenceSynthesis.certainty" [
        codeable_concept("rating").many(),
        annotation("note").many(),
        backbone("certaintySubcomponent", &SYNTHESIS_CERTAINTY_SUBCOMPONENT).many(),
    ]
    backbone SYNTHESIS_CERTAINTY_SUBCOMPONENT = "EffectEvidenceSynthesis.certainty.certaintySubcomponent" [
        codeable_concept("type"),
        codeable_concept("rating").many(),
        annotation("note").many(),
    ]

    resource RISK_EVIDENCE_SYNTHESIS = "RiskEvidenceSynthesis" [
        uri("url"),
        identifier("identifier").many(),
        string("version"),
        string("name"),
        string("title"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        annotation("note").many(),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("copyright"),
        date("approvalDate"),
        date("lastReviewDate"),
        period("effectivePeriod"),
        codeable_concept("topic").many(),
        contact_detail("author").many(),
        contact_detail("editor").many(),
        contact_detail("reviewer").many(),
        contact_detail("endorser").many(),
        related_artifact("relatedArtifact").many(),
        codeable_concept("synthesisType"),
        codeable_concept("studyType"),
        reference("population").required(),
        reference("exposure"),
        reference("outcome").required(),
        backbone("sampleSize", &SYNTHESIS_SAMPLE_SIZE),
        backbone("riskEstimate", &RISK_EVIDENCE_SYNTHESIS_RISK_ESTIMATE),
        backbone("certainty", &SYNTHESIS_CERTAINTY).many(),
    ]
    backbone RISK_EVIDENCE_SYNTHESIS_RISK_ESTIMATE = "RiskEvidenceSynthesis.riskEstimate" [
        string("description"),
        codeable_concept("type"),
        decimal("value"),
        codeable_concept("unitOfMeasure"),
        integer("denominatorCount"),
        integer("numeratorCount"),
        backbone("precisionEstimate", &SYNTHESIS_PRECISION_ESTIMATE).many(),
    ]

    resource RESEARCH_DEFINITION = "ResearchDefinition" [
        uri("url"),
        identifier("identifier").many(),
        string("version"),
        string("name"),
        string("title"),
        string("shortTitle"),
        string("subtitle"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        choice("subject", SUBJECT_TYPES),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        string("comment").many(),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        string("usage"),
        markdown("copyright"),
        date("approvalDate"),
        date("lastReviewDate"),
        period("effectivePeriod"),
        codeable_concept("topic").many(),
        contact_detail("author").many(),
        contact_detail("editor").many(),
        contact_detail("reviewer").many(),
        contact_detail("endorser").many(),
        related_artifact("relatedArtifact").many(),
        canonical("library").many(),
        reference("population").required(),
        reference("exposure"),
        reference("exposureAlternative"),
        reference("outcome"),
    ]

    resource RESEARCH_ELEMENT_DEFINITION = "ResearchElementDefinition" [
        uri("url"),
        identifier("identifier").many(),
        string("version"),
        string("name"),
        string("title"),
        string("shortTitle"),
        string("subtitle"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        choice("subject", SUBJECT_TYPES),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        string("comment").many(),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        string("usage"),
        markdown("copyright"),
        date("approvalDate"),
        date("lastReviewDate"),
        period("effectivePeriod"),
        codeable_concept("topic").many(),
        contact_detail("author").many(),
        contact_detail("editor").many(),
        contact_detail("reviewer").many(),
        contact_detail("endorser").many(),
        related_artifact("relatedArtifact").many(),
        canonical("library").many(),
        code("type").required(),
        code("variableType").bind(codes::EVIDENCE_VARIABLE_TYPE),
        backbone("characteristic", &RESEARCH_ELEMENT_DEFINITION_CHARACTERISTIC).required().many(),
    ]
    backbone RESEARCH_ELEMENT_DEFINITION_CHARACTERISTIC = "ResearchElementDefinition.characteristic" [
        choice("definition", &["CodeableConcept", "canonical", "Expression", "DataRequirement"]).required(),
        usage_context("usageContext").many(),
        boolean("exclude"),
        codeable_concept("unitOfMeasure"),
        string("studyEffectiveDescription"),
        choice("studyEffective", EFFECTIVE_TYPES),
        duration("studyEffectiveTimeFromStart"),
        code("studyEffectiveGroupMeasure").bind(codes::GROUP_MEASURE),
        string("participantEffectiveDescription"),
        choice("participantEffective", EFFECTIVE_TYPES),
        duration("participantEffectiveTimeFromStart"),
        code("participantEffectiveGroupMeasure").bind(codes::GROUP_MEASURE),
    ]

    resource RESEARCH_STUDY = "ResearchStudy" [
        identifier("identifier").many(),
        string("title"),
        reference("protocol").many(),
        reference("partOf").many(),
        code("status").required().bind(codes::RESEARCH_STUDY_STATUS),
        codeable_concept("primaryPurposeType"),
        codeable_concept("phase"),
        codeable_concept("category").many(),
        codeable_concept("focus").many(),
        codeable_concept("condition").many(),
        contact_detail("contact").many(),
        related_artifact("relatedArtifact").many(),
        codeable_concept("keyword").many(),
        codeable_concept("location").many(),
        markdown("description"),
        reference("enrollment").many(),
        period("period"),
        reference("sponsor"),
        reference("principalInvestigator"),
        reference("site").many(),
        codeable_concept("reasonStopped"),
        annotation("note").many(),
        backbone("arm", &RESEARCH_STUDY_ARM).many(),
        backbone("objective", &RESEARCH_STUDY_OBJECTIVE).many(),
    ]
    backbone RESEARCH_STUDY_ARM = "ResearchStudy.arm" [
        string("name").required(),
        codeable_concept("type"),
        string("description"),
    ]
    backbone RESEARCH_STUDY_OBJECTIVE = "ResearchStudy.objective" [
        string("name"),
        codeable_concept("type"),
    ]

    resource RESEARCH_SUBJECT = "ResearchSubject" [
        identifier("identifier").many(),
        code("status").required().bind(codes::RESEARCH_SUBJECT_STATUS),
        period("period"),
        reference("study").required(),
        reference("individual").required(),
        string("assignedArm"),
        string("actualArm"),
        reference("consent"),
    ]

    resource CATALOG_ENTRY = "CatalogEntry" [
        identifier("identifier").many(),
        codeable_concept("type"),
        boolean("orderable").required(),
        reference("referencedItem").required(),
        identifier("additionalIdentifier").many(),
        codeable_concept("classification").many(),
        code("status").bind(codes::PUBLICATION_STATUS),
        period("validityPeriod"),
        date_time("validTo"),
        date_time("lastUpdated"),
        codeable_concept("additionalCharacteristic").many(),
        codeable_concept("additionalClassification").many(),
        backbone("relatedEntry", &CATALOG_ENTRY_RELATED_ENTRY).many(),
    ]
    backbone CATALOG_ENTRY_RELATED_ENTRY = "CatalogEntry.relatedEntry" [
        code("relationtype").required().bind(codes::CATALOG_ENTRY_RELATION_TYPE),
        reference("item").required(),
    ]

    resource SUPPLY_DELIVERY = "SupplyDelivery" [
        identifier("identifier").many(),
        reference("basedOn").many(),
        reference("partOf").many(),
        code("status").bind(codes::SUPPLY_DELIVERY_STATUS),
        reference("patient"),
        codeable_concept("type"),
        backbone("suppliedItem", &SUPPLY_DELIVERY_SUPPLIED_ITEM),
        choice("occurrence", &["dateTime", "Period", "Timing"]),
        reference("supplier"),
        reference("destination"),
        reference("receiver").many(),
    ]
    backbone SUPPLY_DELIVERY_SUPPLIED_ITEM = "SupplyDelivery.suppliedItem" [
        simple_quantity("quantity"),
        choice("item", &["CodeableConcept", "Reference"]),
    ]

    resource SUPPLY_REQUEST = "SupplyRequest" [
        identifier("identifier").many(),
        code("status").bind(codes::SUPPLY_REQUEST_STATUS),
        codeable_concept("category"),
        code("priority").bind(codes::REQUEST_PRIORITY),
        choice("item", &["CodeableConcept", "Reference"]).required(),
        quantity("quantity").required(),
        backbone("parameter", &SUPPLY_REQUEST_PARAMETER).many(),
        choice("occurrence", &["dateTime", "Period", "Timing"]),
        date_time("authoredOn"),
        reference("requester"),
        reference("supplier").many(),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        reference("deliverFrom"),
        reference("deliverTo"),
    ]
    backbone SUPPLY_REQUEST_PARAMETER = "SupplyRequest.parameter" [
        codeable_concept("code"),
        choice("value", &["CodeableConcept", "Quantity", "Range", "boolean"]),
    ]

    resource TASK = "Task" [
        identifier("identifier").many(),
        canonical("instantiatesCanonical"),
        uri("instantiatesUri"),
        reference("basedOn").many(),
        identifier("groupIdentifier"),
        reference("partOf").many(),
        code("status").required().bind(codes::TASK_STATUS),
        codeable_concept("statusReason"),
        codeable_concept("businessStatus"),
        code("intent").required().bind(codes::TASK_INTENT),
        code("priority").bind(codes::REQUEST_PRIORITY),
        codeable_concept("code"),
        string("description"),
        reference("focus"),
        reference("for"),
        reference("encounter"),
        period("executionPeriod"),
        date_time("authoredOn"),
        date_time("lastModified"),
        reference("requester"),
        codeable_concept("performerType").many(),
        reference("owner"),
        reference("location"),
        codeable_concept("reasonCode"),
        reference("reasonReference"),
        reference("insurance").many(),
        annotation("note").many(),
        reference("relevantHistory").many(),
        backbone("restriction", &TASK_RESTRICTION),
        backbone("input", &TASK_PARAMETER).many(),
        backbone("output", &TASK_PARAMETER).many(),
    ]
    backbone TASK_RESTRICTION = "Task.restriction" [
        positive_int("repetitions"),
        period("period"),
        reference("recipient").many(),
    ]
    backbone TASK_PARAMETER = "Task.input" [
        codeable_concept("type").required(),
        choice("value", OPEN_TYPES).required(),
    ]
}
