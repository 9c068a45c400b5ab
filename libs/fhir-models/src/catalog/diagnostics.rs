//! Diagnostic resources: observations, reports, specimens, imaging, questionnaires.

use super::codes;
use crate::shape::build::*;

/// Types permitted for `Observation.value[x]` and `Observation.component.value[x]`.
pub const OBSERVATION_VALUE_TYPES: &[&str] = &[
    "Quantity",
    "CodeableConcept",
    "string",
    "boolean",
    "integer",
    "Range",
    "Ratio",
    "SampledData",
    "time",
    "dateTime",
    "Period",
];

const ANSWER_TYPES: &[&str] = &[
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
];

fhir_shape! {
    resource OBSERVATION = "Observation" [
        identifier("identifier").many(),
        reference("basedOn").many(),
        reference("partOf").many(),
        code("status").required().bind(codes::OBSERVATION_STATUS),
        codeable_concept("category").many(),
        codeable_concept("code").required(),
        reference("subject"),
        reference("focus").many(),
        reference("encounter"),
        choice("effective", &["dateTime", "Period", "Timing", "instant"]),
        instant("issued"),
        reference("performer").many(),
        choice("value", OBSERVATION_VALUE_TYPES),
        codeable_concept("dataAbsentReason"),
        codeable_concept("interpretation").many(),
        annotation("note").many(),
        codeable_concept("bodySite"),
        codeable_concept("method"),
        reference("specimen"),
        reference("device"),
        backbone("referenceRange", &OBSERVATION_REFERENCE_RANGE).many(),
        reference("hasMember").many(),
        reference("derivedFrom").many(),
        backbone("component", &OBSERVATION_COMPONENT).many(),
    ]
    backbone OBSERVATION_REFERENCE_RANGE = "Observation.referenceRange" [
        simple_quantity("low"),
        simple_quantity("high"),
        codeable_concept("type"),
        codeable_concept("appliesTo").many(),
        range("age"),
        string("text"),
    ]
    backbone OBSERVATION_COMPONENT = "Observation.component" [
        codeable_concept("code").required(),
        choice("value", OBSERVATION_VALUE_TYPES),
        codeable_concept("dataAbsentReason"),
        codeable_concept("interpretation").many(),
        backbone("referenceRange", &OBSERVATION_REFERENCE_RANGE).many(),
    ]

    resource DIAGNOSTIC_REPORT = "DiagnosticReport" [
        identifier("identifier").many(),
        reference("basedOn").many(),
        code("status").required().bind(codes::DIAGNOSTIC_REPORT_STATUS),
        codeable_concept("category").many(),
        codeable_concept("code").required(),
        reference("subject"),
        reference("encounter"),
        choice("effective", &["dateTime", "Period"]),
        instant("issued"),
        reference("performer").many(),
        reference("resultsInterpreter").many(),
        reference("specimen").many(),
        reference("result").many(),
        reference("imagingStudy").many(),
        backbone("media", &DIAGNOSTIC_REPORT_MEDIA).many(),
        string("conclusion"),
        codeable_concept("conclusionCode").many(),
        attachment("presentedForm").many(),
    ]
    backbone DIAGNOSTIC_REPORT_MEDIA = "DiagnosticReport.media" [
        string("comment"),
        reference("link").required(),
    ]

    resource SPECIMEN = "Specimen" [
        identifier("identifier").many(),
        identifier("accessionIdentifier"),
        code("status").bind(codes::SPECIMEN_STATUS),
        codeable_concept("type"),
        reference("subject"),
        date_time("receivedTime"),
        reference("parent").many(),
        reference("request").many(),
        backbone("collection", &SPECIMEN_COLLECTION),
        backbone("processing", &SPECIMEN_PROCESSING).many(),
        backbone("container", &SPECIMEN_CONTAINER).many(),
        codeable_concept("condition").many(),
        annotation("note").many(),
    ]
    backbone SPECIMEN_COLLECTION = "Specimen.collection" [
        reference("collector"),
        choice("collected", &["dateTime", "Period"]),
        duration("duration"),
        simple_quantity("quantity"),
        codeable_concept("method"),
        codeable_concept("bodySite"),
        choice("fastingStatus", &["CodeableConcept", "Duration"]),
    ]
    backbone SPECIMEN_PROCESSING = "Specimen.processing" [
        string("description"),
        codeable_concept("procedure"),
        reference("additive").many(),
        choice("time", &["dateTime", "Period"]),
    ]
    backbone SPECIMEN_CONTAINER = "Specimen.container" [
        identifier("identifier").many(),
        string("description"),
        codeable_concept("type"),
        simple_quantity("capacity"),
        simple_quantity("specimenQuantity"),
        choice("additive", &["CodeableConcept", "Reference"]),
    ]

    resource IMAGING_STUDY = "ImagingStudy" [
        identifier("identifier").many(),
        code("status").required().bind(codes::IMAGING_STUDY_STATUS),
        coding("modality").many(),
        reference("subject").required(),
        reference("encounter"),
        date_time("started"),
        reference("basedOn").many(),
        reference("referrer"),
        reference("interpreter").many(),
        reference("endpoint").many(),
        unsigned_int("numberOfSeries"),
        unsigned_int("numberOfInstances"),
        reference("procedureReference"),
        codeable_concept("procedureCode").many(),
        reference("location"),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        annotation("note").many(),
        string("description"),
        backbone("series", &IMAGING_STUDY_SERIES).many(),
    ]
    backbone IMAGING_STUDY_SERIES = "ImagingStudy.series" [
        id("uid").required(),
        unsigned_int("number"),
        coding("modality").required(),
        string("description"),
        unsigned_int("numberOfInstances"),
        reference("endpoint").many(),
        coding("bodySite"),
        coding("laterality"),
        reference("specimen").many(),
        date_time("started"),
        backbone("performer", &IMAGING_STUDY_SERIES_PERFORMER).many(),
        backbone("instance", &IMAGING_STUDY_SERIES_INSTANCE).many(),
    ]
    backbone IMAGING_STUDY_SERIES_PERFORMER = "ImagingStudy.series.performer" [
        codeable_concept("function"),
        reference("actor").required(),
    ]
    backbone IMAGING_STUDY_SERIES_INSTANCE = "ImagingStudy.series.instance" [
        id("uid").required(),
        coding("sopClass").required(),
        unsigned_int("number"),
        string("title"),
    ]

    resource MEDIA = "Media" [
        identifier("identifier").many(),
        reference("basedOn").many(),
        reference("partOf").many(),
        code("status").required().bind(codes::EVENT_STATUS),
        codeable_concept("type"),
        codeable_concept("modality"),
        codeable_concept("view"),
        reference("subject"),
        reference("encounter"),
        choice("created", &["dateTime", "Period"]),
        instant("issued"),
        reference("operator"),
        codeable_concept("reasonCode").many(),
        codeable_concept("bodySite"),
        string("deviceName"),
        reference("device"),
        positive_int("height"),
        positive_int("width"),
        positive_int("frames"),
        decimal("duration"),
        attachment("content").required(),
        annotation("note").many(),
    ]

    resource MOLECULAR_SEQUENCE = "MolecularSequence" [
        identifier("identifier").many(),
        code("type").bind(codes::SEQUENCE_TYPE),
        integer("coordinateSystem").required(),
        reference("patient"),
        reference("specimen"),
        reference("device"),
        reference("performer"),
        quantity("quantity"),
        backbone("referenceSeq", &MOLECULAR_SEQUENCE_REFERENCE_SEQ),
        backbone("variant", &MOLECULAR_SEQUENCE_VARIANT).many(),
        string("observedSeq"),
        backbone("quality", &MOLECULAR_SEQUENCE_QUALITY).many(),
        integer("readCoverage"),
        backbone("repository", &MOLECULAR_SEQUENCE_REPOSITORY).many(),
        reference("pointer").many(),
        backbone("structureVariant", &MOLECULAR_SEQUENCE_STRUCTURE_VARIANT).many(),
    ]
    backbone MOLECULAR_SEQUENCE_REFERENCE_SEQ = "MolecularSequence.referenceSeq" [
        codeable_concept("chromosome"),
        string("genomeBuild"),
        code("orientation").bind(codes::ORIENTATION_TYPE),
        codeable_concept("referenceSeqId"),
        reference("referenceSeqPointer"),
        string("referenceSeqString"),
        code("strand").bind(codes::STRAND_TYPE),
        integer("windowStart"),
        integer("windowEnd"),
    ]
    backbone MOLECULAR_SEQUENCE_VARIANT = "MolecularSequence.variant" [
        integer("start"),
        integer("end"),
        string("observedAllele"),
        string("referenceAllele"),
        string("cigar"),
        reference("variantPointer"),
    ]
    backbone MOLECULAR_SEQUENCE_QUALITY = "MolecularSequence.quality" [
        code("type").required().bind(codes::QUALITY_TYPE),
        codeable_concept("standardSequence"),
        integer("start"),
        integer("end"),
        quantity("score"),
        codeable_concept("method"),
        decimal("truthTP"),
        decimal("queryTP"),
        decimal("truthFN"),
        decimal("queryFP"),
        decimal("gtFP"),
        decimal("precision"),
        decimal("recall"),
        decimal("fScore"),
        backbone("roc", &MOLECULAR_SEQUENCE_QUALITY_ROC),
    ]
    backbone MOLECULAR_SEQUENCE_QUALITY_ROC = "MolecularSequence.quality.roc" [
        integer("score").many(),
        integer("numTP").many(),
        integer("numFP").many(),
        integer("numFN").many(),
        decimal("precision").many(),
        decimal("sensitivity").many(),
        decimal("fMeasure").many(),
    ]
    backbone MOLECULAR_SEQUENCE_REPOSITORY = "MolecularSequence.repository" [
        code("type").required().bind(codes::REPOSITORY_TYPE),
        uri("url"),
        string("name"),
        string("datasetId"),
        string("variantsetId"),
        string("readsetId"),
    ]
    backbone MOLECULAR_SEQUENCE_STRUCTURE_VARIANT = "MolecularSequence.structureVariant" [
        codeable_concept("variantType"),
        boolean("exact"),
        integer("length"),
        backbone("outer", &MOLECULAR_SEQUENCE_STRUCTURE_VARIANT_BOUND),
        backbone("inner", &MOLECULAR_SEQUENCE_STRUCTURE_VARIANT_BOUND),
    ]
    backbone MOLECULAR_SEQUENCE_STRUCTURE_VARIANT_BOUND = "MolecularSequence.structureVariant.outer" [
        integer("start"),
        integer("end"),
    ]

    resource QUESTIONNAIRE_RESPONSE = "QuestionnaireResponse" [
        identifier("identifier"),
        reference("basedOn").many(),
        reference("partOf").many(),
        canonical("questionnaire"),
        code("status").required().bind(codes::QUESTIONNAIRE_RESPONSE_STATUS),
        reference("subject"),
        reference("encounter"),
        date_time("authored"),
        reference("author"),
        reference("source"),
        backbone("item", &QUESTIONNAIRE_RESPONSE_ITEM).many(),
    ]
    backbone QUESTIONNAIRE_RESPONSE_ITEM = "QuestionnaireResponse.item" [
        string("linkId").required(),
        uri("definition"),
        string("text"),
        backbone("answer", &QUESTIONNAIRE_RESPONSE_ITEM_ANSWER).many(),
        backbone("item", &QUESTIONNAIRE_RESPONSE_ITEM).many(),
    ]
    backbone QUESTIONNAIRE_RESPONSE_ITEM_ANSWER = "QuestionnaireResponse.item.answer" [
        choice("value", ANSWER_TYPES),
        backbone("item", &QUESTIONNAIRE_RESPONSE_ITEM).many(),
    ]

    resource OBSERVATION_DEFINITION = "ObservationDefinition" [
        codeable_concept("category").many(),
        codeable_concept("code").required(),
        identifier("identifier").many(),
        code("permittedDataType").many().bind(codes::OBSERVATION_DATA_TYPE),
        boolean("multipleResultsAllowed"),
        codeable_concept("method"),
        string("preferredReportName"),
        backbone("quantitativeDetails", &OBSERVATION_DEFINITION_QUANTITATIVE_DETAILS),
        backbone("qualifiedInterval", &OBSERVATION_DEFINITION_QUALIFIED_INTERVAL).many(),
        reference("validCodedValueSet"),
        reference("normalCodedValueSet"),
        reference("abnormalCodedValueSet"),
        reference("criticalCodedValueSet"),
    ]
    backbone OBSERVATION_DEFINITION_QUANTITATIVE_DETAILS = "ObservationDefinition.quantitativeDetails" [
        codeable_concept("customaryUnit"),
        codeable_concept("unit"),
        decimal("conversionFactor"),
        integer("decimalPrecision"),
    ]
    backbone OBSERVATION_DEFINITION_QUALIFIED_INTERVAL = "ObservationDefinition.qualifiedInterval" [
        code("category").bind(codes::OBSERVATION_RANGE_CATEGORY),
        range("range"),
        codeable_concept("context"),
        codeable_concept("appliesTo").many(),
        code("gender").bind(codes::ADMINISTRATIVE_GENDER),
        range("age"),
        range("gestationalAge"),
        string("condition"),
    ]

    resource SPECIMEN_DEFINITION = "SpecimenDefinition" [
        identifier("identifier"),
        codeable_concept("typeCollected"),
        codeable_concept("patientPreparation").many(),
        string("timeAspect"),
        codeable_concept("collection").many(),
        backbone("typeTested", &SPECIMEN_DEFINITION_TYPE_TESTED).many(),
    ]
    backbone SPECIMEN_DEFINITION_TYPE_TESTED = "SpecimenDefinition.typeTested" [
        boolean("isDerived"),
        codeable_concept("type"),
        code("preference").required().bind(codes::SPECIMEN_CONTAINED_PREFERENCE),
        backbone("container", &SPECIMEN_DEFINITION_CONTAINER),
        string("requirement"),
        duration("retentionTime"),
        codeable_concept("rejectionCriterion").many(),
        backbone("handling", &SPECIMEN_DEFINITION_HANDLING).many(),
    ]
    backbone SPECIMEN_DEFINITION_CONTAINER = "SpecimenDefinition.typeTested.container" [
        codeable_concept("material"),
        codeable_concept("type"),
        codeable_concept("cap"),
        string("description"),
        simple_quantity("capacity"),
        choice("minimumVolume", &["Quantity", "string"]),
        backbone("additive", &SPECIMEN_DEFINITION_CONTAINER_ADDITIVE).many(),
        string("preparation"),
    ]
    backbone SPECIMEN_DEFINITION_CONTAINER_ADDITIVE = "SpecimenDefinition.typeTested.container.additive" [
        choice("additive", &["CodeableConcept", "Reference"]).required(),
    ]
    backbone SPECIMEN_DEFINITION_HANDLING = "SpecimenDefinition.typeTested.handling" [
        codeable_concept("temperatureQualifier"),
        range("temperatureRange"),
        duration("maxDuration"),
        string("instruction"),
    ]
}
