//! Required code bindings of FHIR R4
//!
//! Each list is the closed set of codes a bound `code` field may hold.
//! Shared value sets are declared once and reused across shapes.

pub const PUBLICATION_STATUS: &[&str] = &["draft", "active", "retired", "unknown"];
pub const ADMINISTRATIVE_GENDER: &[&str] = &["male", "female", "other", "unknown"];
pub const FINANCIAL_RESOURCE_STATUS: &[&str] = &["active", "cancelled", "draft", "entered-in-error"];

pub const REQUEST_STATUS: &[&str] = &[
    "draft",
    "active",
    "on-hold",
    "revoked",
    "completed",
    "entered-in-error",
    "unknown",
];
pub const REQUEST_INTENT: &[&str] = &[
    "proposal",
    "plan",
    "directive",
    "order",
    "original-order",
    "reflex-order",
    "filler-order",
    "instance-order",
    "option",
];
pub const REQUEST_PRIORITY: &[&str] = &["routine", "urgent", "asap", "stat"];
pub const EVENT_STATUS: &[&str] = &[
    "preparation",
    "in-progress",
    "not-done",
    "on-hold",
    "stopped",
    "completed",
    "entered-in-error",
    "unknown",
];
pub const OBSERVATION_STATUS: &[&str] = &[
    "registered",
    "preliminary",
    "final",
    "amended",
    "corrected",
    "cancelled",
    "entered-in-error",
    "unknown",
];

// Datatypes
pub const NARRATIVE_STATUS: &[&str] = &["generated", "extensions", "additional", "empty"];
pub const IDENTIFIER_USE: &[&str] = &["usual", "official", "temp", "secondary", "old"];
pub const NAME_USE: &[&str] = &["usual", "official", "temp", "nickname", "anonymous", "old", "maiden"];
pub const ADDRESS_USE: &[&str] = &["home", "work", "temp", "old", "billing"];
pub const ADDRESS_TYPE: &[&str] = &["postal", "physical", "both"];
pub const CONTACT_POINT_SYSTEM: &[&str] = &["phone", "fax", "email", "pager", "url", "sms", "other"];
pub const CONTACT_POINT_USE: &[&str] = &["home", "work", "temp", "old", "mobile"];
pub const QUANTITY_COMPARATOR: &[&str] = &["<", "<=", ">=", ">"];
pub const UNITS_OF_TIME: &[&str] = &["s", "min", "h", "d", "wk", "mo", "a"];
pub const DAYS_OF_WEEK: &[&str] = &["mon", "tue", "wed", "thu", "fri", "sat", "sun"];
pub const EVENT_TIMING: &[&str] = &[
    "MORN", "MORN.early", "MORN.late", "NOON", "AFT", "AFT.early", "AFT.late", "EVE",
    "EVE.early", "EVE.late", "NIGHT", "PHS", "HS", "WAKE", "C", "CM", "CD", "CV", "AC", "ACM",
    "ACD", "ACV", "PC", "PCM", "PCD", "PCV",
];
pub const CONTRIBUTOR_TYPE: &[&str] = &["author", "editor", "reviewer", "endorser"];
pub const RELATED_ARTIFACT_TYPE: &[&str] = &[
    "documentation",
    "justification",
    "citation",
    "predecessor",
    "successor",
    "derived-from",
    "depends-on",
    "composed-of",
];
pub const TRIGGER_TYPE: &[&str] = &[
    "named-event",
    "periodic",
    "data-changed",
    "data-added",
    "data-modified",
    "data-removed",
    "data-accessed",
    "data-access-ended",
];
pub const SORT_DIRECTION: &[&str] = &["ascending", "descending"];
pub const OPERATION_PARAMETER_USE: &[&str] = &["in", "out"];
pub const PROPERTY_REPRESENTATION: &[&str] = &["xmlAttr", "xmlText", "typeAttr", "cdaText", "xhtml"];
pub const SLICING_RULES: &[&str] = &["closed", "open", "openAtEnd"];
pub const DISCRIMINATOR_TYPE: &[&str] = &["value", "exists", "pattern", "type", "profile"];
pub const AGGREGATION_MODE: &[&str] = &["contained", "referenced", "bundled"];
pub const REFERENCE_VERSION_RULES: &[&str] = &["either", "independent", "specific"];
pub const CONSTRAINT_SEVERITY: &[&str] = &["error", "warning"];
pub const BINDING_STRENGTH: &[&str] = &["required", "extensible", "preferred", "example"];

// Foundation
pub const BUNDLE_TYPE: &[&str] = &[
    "document",
    "message",
    "transaction",
    "transaction-response",
    "batch",
    "batch-response",
    "history",
    "searchset",
    "collection",
];
pub const SEARCH_ENTRY_MODE: &[&str] = &["match", "include", "outcome"];
pub const HTTP_VERB: &[&str] = &["GET", "HEAD", "POST", "PUT", "DELETE", "PATCH"];
pub const ISSUE_SEVERITY: &[&str] = &["fatal", "error", "warning", "information"];
pub const ISSUE_TYPE: &[&str] = &[
    "invalid",
    "structure",
    "required",
    "value",
    "invariant",
    "security",
    "login",
    "unknown",
    "expired",
    "forbidden",
    "suppressed",
    "processing",
    "not-supported",
    "duplicate",
    "multiple-matches",
    "not-found",
    "deleted",
    "too-long",
    "code-invalid",
    "extension",
    "too-costly",
    "business-rule",
    "conflict",
    "transient",
    "lock-error",
    "no-store",
    "exception",
    "timeout",
    "incomplete",
    "throttled",
    "informational",
];
pub const LINKAGE_TYPE: &[&str] = &["source", "alternate", "historical"];
pub const RESPONSE_TYPE: &[&str] = &["ok", "transient-error", "fatal-error"];
pub const SUBSCRIPTION_STATUS: &[&str] = &["requested", "active", "error", "off"];
pub const SUBSCRIPTION_CHANNEL_TYPE: &[&str] = &["rest-hook", "websocket", "email", "sms", "message"];
pub const AUDIT_EVENT_ACTION: &[&str] = &["C", "R", "U", "D", "E"];
pub const AUDIT_EVENT_OUTCOME: &[&str] = &["0", "4", "8", "12"];
pub const NETWORK_TYPE: &[&str] = &["1", "2", "3", "4", "5"];
pub const PROVENANCE_ENTITY_ROLE: &[&str] = &["derivation", "revision", "quotation", "source", "removal"];

// Conformance
pub const STRUCTURE_DEFINITION_KIND: &[&str] = &["primitive-type", "complex-type", "resource", "logical"];
pub const TYPE_DERIVATION_RULE: &[&str] = &["specialization", "constraint"];
pub const EXTENSION_CONTEXT_TYPE: &[&str] = &["fhirpath", "element", "extension"];
pub const CAPABILITY_STATEMENT_KIND: &[&str] = &["instance", "capability", "requirements"];
pub const RESTFUL_MODE: &[&str] = &["client", "server"];
pub const TYPE_RESTFUL_INTERACTION: &[&str] = &[
    "read",
    "vread",
    "update",
    "patch",
    "delete",
    "history-instance",
    "history-type",
    "create",
    "search-type",
];
pub const SYSTEM_RESTFUL_INTERACTION: &[&str] = &["transaction", "batch", "search-system", "history-system"];
pub const VERSIONING_POLICY: &[&str] = &["no-version", "versioned", "versioned-update"];
pub const CONDITIONAL_READ_STATUS: &[&str] = &["not-supported", "modified-since", "not-match", "full-support"];
pub const CONDITIONAL_DELETE_STATUS: &[&str] = &["not-supported", "single", "multiple"];
pub const REFERENCE_HANDLING_POLICY: &[&str] = &["literal", "logical", "resolves", "enforced", "local"];
pub const SEARCH_PARAM_TYPE: &[&str] = &[
    "number", "date", "string", "token", "reference", "composite", "quantity", "uri", "special",
];
pub const EVENT_CAPABILITY_MODE: &[&str] = &["sender", "receiver"];
pub const DOCUMENT_MODE: &[&str] = &["producer", "consumer"];
pub const SEARCH_COMPARATOR: &[&str] = &["eq", "ne", "gt", "lt", "ge", "le", "sa", "eb", "ap"];
pub const SEARCH_MODIFIER_CODE: &[&str] = &[
    "missing",
    "exact",
    "contains",
    "not",
    "text",
    "in",
    "not-in",
    "below",
    "above",
    "type",
    "identifier",
    "ofType",
];
pub const XPATH_USAGE: &[&str] = &["normal", "phonetic", "nearby", "distance", "other"];
pub const OPERATION_KIND: &[&str] = &["operation", "query"];
pub const MESSAGE_SIGNIFICANCE_CATEGORY: &[&str] = &["consequence", "currency", "notification"];
pub const MESSAGE_HEADER_RESPONSE_REQUEST: &[&str] = &["always", "on-error", "never", "on-success"];
pub const COMPARTMENT_TYPE: &[&str] = &["Patient", "Encounter", "RelatedPerson", "Practitioner", "Device"];
pub const GRAPH_COMPARTMENT_USE: &[&str] = &["condition", "requirement"];
pub const GRAPH_COMPARTMENT_RULE: &[&str] = &["identical", "matching", "different", "custom"];
pub const GUIDE_PAGE_GENERATION: &[&str] = &["html", "markdown", "xml", "generated"];
pub const GUIDE_PARAMETER_CODE: &[&str] = &[
    "apply",
    "path-resource",
    "path-pages",
    "path-tx-cache",
    "expansion-parameter",
    "rule-broken-links",
    "generate-xml",
    "generate-json",
    "generate-turtle",
    "html-template",
];
pub const STRUCTURE_MAP_MODEL_MODE: &[&str] = &["source", "queried", "target", "produced"];
pub const STRUCTURE_MAP_GROUP_TYPE_MODE: &[&str] = &["none", "types", "type-and-types"];
pub const STRUCTURE_MAP_INPUT_MODE: &[&str] = &["source", "target"];
pub const STRUCTURE_MAP_SOURCE_LIST_MODE: &[&str] = &["first", "not_first", "last", "not_last", "only_one"];
pub const STRUCTURE_MAP_TARGET_LIST_MODE: &[&str] = &["first", "share", "last", "collate"];
pub const STRUCTURE_MAP_CONTEXT_TYPE: &[&str] = &["type", "variable"];
pub const STRUCTURE_MAP_TRANSFORM: &[&str] = &[
    "create",
    "copy",
    "truncate",
    "escape",
    "cast",
    "append",
    "translate",
    "reference",
    "dateOp",
    "uuid",
    "pointer",
    "evaluate",
    "cc",
    "c",
    "qty",
    "id",
    "cp",
];
pub const EXAMPLE_SCENARIO_ACTOR_TYPE: &[&str] = &["person", "entity"];
pub const TEST_REPORT_STATUS: &[&str] = &["completed", "in-progress", "waiting", "stopped", "entered-in-error"];
pub const TEST_REPORT_RESULT: &[&str] = &["pass", "fail", "pending"];
pub const TEST_REPORT_ACTION_RESULT: &[&str] = &["pass", "skip", "fail", "warning", "error"];
pub const TEST_REPORT_PARTICIPANT_TYPE: &[&str] = &["test-engine", "client", "server"];
pub const ASSERTION_DIRECTION: &[&str] = &["response", "request"];
pub const ASSERTION_OPERATOR: &[&str] = &[
    "equals",
    "notEquals",
    "in",
    "notIn",
    "greaterThan",
    "lessThan",
    "empty",
    "notEmpty",
    "contains",
    "notContains",
    "eval",
];
pub const ASSERTION_RESPONSE: &[&str] = &[
    "okay",
    "created",
    "noContent",
    "notModified",
    "bad",
    "forbidden",
    "notFound",
    "methodNotAllowed",
    "conflict",
    "gone",
    "preconditionFailed",
    "unprocessable",
];
pub const TEST_SCRIPT_REQUEST_METHOD: &[&str] = &["delete", "get", "options", "patch", "post", "put", "head"];

// Terminology
pub const CODE_SYSTEM_CONTENT_MODE: &[&str] = &["not-present", "example", "fragment", "complete", "supplement"];
pub const CODE_SYSTEM_HIERARCHY_MEANING: &[&str] = &["grouped-by", "is-a", "part-of", "classified-with"];
pub const CONCEPT_PROPERTY_TYPE: &[&str] = &["code", "Coding", "string", "integer", "boolean", "dateTime", "decimal"];
pub const FILTER_OPERATOR: &[&str] = &[
    "=",
    "is-a",
    "descendent-of",
    "is-not-a",
    "regex",
    "in",
    "not-in",
    "generalizes",
    "exists",
];
pub const CONCEPT_MAP_EQUIVALENCE: &[&str] = &[
    "relatedto",
    "equivalent",
    "equal",
    "wider",
    "subsumes",
    "narrower",
    "specializes",
    "inexact",
    "unmatched",
    "disjoint",
];
pub const CONCEPT_MAP_UNMAPPED_MODE: &[&str] = &["provided", "fixed", "other-map"];
pub const NAMING_SYSTEM_TYPE: &[&str] = &["codesystem", "identifier", "root"];
pub const NAMING_SYSTEM_IDENTIFIER_TYPE: &[&str] = &["oid", "uuid", "uri", "other"];
pub const CODE_SEARCH_SUPPORT: &[&str] = &["explicit", "all"];

// Administration
pub const LINK_TYPE: &[&str] = &["replaced-by", "replaces", "refer", "seealso"];
pub const IDENTITY_ASSURANCE_LEVEL: &[&str] = &["level1", "level2", "level3", "level4"];
pub const GROUP_TYPE: &[&str] = &["person", "animal", "practitioner", "device", "medication", "substance"];
pub const LOCATION_STATUS: &[&str] = &["active", "suspended", "inactive"];
pub const LOCATION_MODE: &[&str] = &["instance", "kind"];
pub const ENDPOINT_STATUS: &[&str] = &["active", "suspended", "error", "off", "entered-in-error", "test"];
pub const DEVICE_STATUS: &[&str] = &["active", "inactive", "entered-in-error", "unknown"];
pub const UDI_ENTRY_TYPE: &[&str] = &["barcode", "rfid", "manual", "card", "self-reported", "unknown"];
pub const DEVICE_NAME_TYPE: &[&str] = &[
    "udi-label-name",
    "user-friendly-name",
    "patient-reported-name",
    "manufacturer-name",
    "model-name",
    "other",
];
pub const DEVICE_METRIC_OPERATIONAL_STATUS: &[&str] = &["on", "off", "standby", "entered-in-error"];
pub const DEVICE_METRIC_COLOR: &[&str] = &["black", "red", "green", "yellow", "blue", "magenta", "cyan", "white"];
pub const DEVICE_METRIC_CATEGORY: &[&str] = &["measurement", "setting", "calculation", "unspecified"];
pub const DEVICE_METRIC_CALIBRATION_TYPE: &[&str] = &["unspecified", "offset", "gain", "two-point"];
pub const DEVICE_METRIC_CALIBRATION_STATE: &[&str] = &[
    "not-calibrated",
    "calibration-required",
    "calibrated",
    "unspecified",
];
pub const ENCOUNTER_STATUS: &[&str] = &[
    "planned",
    "arrived",
    "triaged",
    "in-progress",
    "onleave",
    "finished",
    "cancelled",
    "entered-in-error",
    "unknown",
];
pub const ENCOUNTER_LOCATION_STATUS: &[&str] = &["planned", "active", "reserved", "completed"];
pub const EPISODE_OF_CARE_STATUS: &[&str] = &[
    "planned",
    "waitlist",
    "active",
    "onhold",
    "finished",
    "cancelled",
    "entered-in-error",
];
pub const APPOINTMENT_STATUS: &[&str] = &[
    "proposed",
    "pending",
    "booked",
    "arrived",
    "fulfilled",
    "cancelled",
    "noshow",
    "entered-in-error",
    "checked-in",
    "waitlist",
];
pub const PARTICIPANT_REQUIRED: &[&str] = &["required", "optional", "information-only"];
pub const PARTICIPATION_STATUS: &[&str] = &["accepted", "declined", "tentative", "needs-action"];
pub const SLOT_STATUS: &[&str] = &["busy", "free", "busy-unavailable", "busy-tentative", "entered-in-error"];
pub const FLAG_STATUS: &[&str] = &["active", "inactive", "entered-in-error"];
pub const LIST_STATUS: &[&str] = &["current", "retired", "entered-in-error"];
pub const LIST_MODE: &[&str] = &["working", "snapshot", "changes"];
pub const SUBSTANCE_STATUS: &[&str] = &["active", "inactive", "entered-in-error"];
pub const PRODUCT_CATEGORY: &[&str] = &["organ", "tissue", "fluid", "cells", "biologicalAgent"];
pub const PRODUCT_STATUS: &[&str] = &["available", "unavailable"];
pub const PRODUCT_STORAGE_SCALE: &[&str] = &["farenheit", "celsius", "kelvin"];
pub const VERIFICATION_RESULT_STATUS: &[&str] = &[
    "attested",
    "validated",
    "in-process",
    "req-revalid",
    "val-fail",
    "reval-fail",
];

// Clinical
pub const ALLERGY_INTOLERANCE_TYPE: &[&str] = &["allergy", "intolerance"];
pub const ALLERGY_INTOLERANCE_CATEGORY: &[&str] = &["food", "medication", "environment", "biologic"];
pub const ALLERGY_INTOLERANCE_CRITICALITY: &[&str] = &["low", "high", "unable-to-assess"];
pub const REACTION_EVENT_SEVERITY: &[&str] = &["mild", "moderate", "severe"];
pub const ADVERSE_EVENT_ACTUALITY: &[&str] = &["actual", "potential"];
pub const FAMILY_HISTORY_STATUS: &[&str] = &["partial", "completed", "entered-in-error", "health-unknown"];
pub const CLINICAL_IMPRESSION_STATUS: &[&str] = &["in-progress", "completed", "entered-in-error"];
pub const DETECTED_ISSUE_SEVERITY: &[&str] = &["high", "moderate", "low"];
pub const CARE_PLAN_INTENT: &[&str] = &["proposal", "plan", "order", "option"];
pub const CARE_PLAN_ACTIVITY_KIND: &[&str] = &[
    "Appointment",
    "CommunicationRequest",
    "DeviceRequest",
    "MedicationRequest",
    "NutritionOrder",
    "Task",
    "ServiceRequest",
    "VisionPrescription",
];
pub const CARE_PLAN_ACTIVITY_STATUS: &[&str] = &[
    "not-started",
    "scheduled",
    "in-progress",
    "on-hold",
    "completed",
    "cancelled",
    "stopped",
    "unknown",
    "entered-in-error",
];
pub const CARE_TEAM_STATUS: &[&str] = &["proposed", "active", "suspended", "inactive", "entered-in-error"];
pub const GOAL_LIFECYCLE_STATUS: &[&str] = &[
    "proposed",
    "planned",
    "accepted",
    "active",
    "on-hold",
    "completed",
    "cancelled",
    "entered-in-error",
    "rejected",
];
pub const DEVICE_USE_STATEMENT_STATUS: &[&str] = &[
    "active",
    "completed",
    "entered-in-error",
    "intended",
    "stopped",
    "on-hold",
];
pub const VISION_EYES: &[&str] = &["right", "left"];
pub const VISION_BASE: &[&str] = &["up", "down", "in", "out"];
pub const COMPOSITION_STATUS: &[&str] = &["preliminary", "final", "amended", "entered-in-error"];
pub const COMPOSITION_ATTESTATION_MODE: &[&str] = &["personal", "professional", "legal", "official"];
pub const DOCUMENT_RELATIONSHIP_TYPE: &[&str] = &["replaces", "transforms", "signs", "appends"];
pub const DOCUMENT_REFERENCE_STATUS: &[&str] = &["current", "superseded", "entered-in-error"];
pub const CONSENT_STATE: &[&str] = &["draft", "proposed", "active", "rejected", "inactive", "entered-in-error"];
pub const CONSENT_PROVISION_TYPE: &[&str] = &["deny", "permit"];
pub const CONSENT_DATA_MEANING: &[&str] = &["instance", "related", "dependents", "authoredby"];

// Diagnostics
pub const DIAGNOSTIC_REPORT_STATUS: &[&str] = &[
    "registered",
    "partial",
    "preliminary",
    "final",
    "amended",
    "corrected",
    "appended",
    "cancelled",
    "entered-in-error",
    "unknown",
];
pub const SPECIMEN_STATUS: &[&str] = &["available", "unavailable", "unsatisfactory", "entered-in-error"];
pub const SPECIMEN_CONTAINED_PREFERENCE: &[&str] = &["preferred", "alternate"];
pub const IMAGING_STUDY_STATUS: &[&str] = &["registered", "available", "cancelled", "entered-in-error", "unknown"];
pub const SEQUENCE_TYPE: &[&str] = &["aa", "dna", "rna"];
pub const ORIENTATION_TYPE: &[&str] = &["sense", "antisense"];
pub const STRAND_TYPE: &[&str] = &["watson", "crick"];
pub const QUALITY_TYPE: &[&str] = &["indel", "snp", "unknown"];
pub const REPOSITORY_TYPE: &[&str] = &["directlink", "openapi", "login", "oauth", "other"];
pub const OBSERVATION_DATA_TYPE: &[&str] = &[
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
pub const OBSERVATION_RANGE_CATEGORY: &[&str] = &["reference", "critical", "absolute"];
pub const QUESTIONNAIRE_ITEM_TYPE: &[&str] = &[
    "group",
    "display",
    "boolean",
    "decimal",
    "integer",
    "date",
    "dateTime",
    "time",
    "string",
    "text",
    "url",
    "choice",
    "open-choice",
    "attachment",
    "reference",
    "quantity",
];
pub const QUESTIONNAIRE_ENABLE_OPERATOR: &[&str] = &["exists", "=", "!=", ">", "<", ">=", "<="];
pub const QUESTIONNAIRE_ENABLE_BEHAVIOR: &[&str] = &["all", "any"];
pub const QUESTIONNAIRE_RESPONSE_STATUS: &[&str] = &[
    "in-progress",
    "completed",
    "amended",
    "entered-in-error",
    "stopped",
];

// Medications
pub const MEDICATION_STATUS: &[&str] = &["active", "inactive", "entered-in-error"];
pub const MEDICATION_REQUEST_STATUS: &[&str] = &[
    "active",
    "on-hold",
    "cancelled",
    "completed",
    "entered-in-error",
    "stopped",
    "draft",
    "unknown",
];
pub const MEDICATION_REQUEST_INTENT: &[&str] = &[
    "proposal",
    "plan",
    "order",
    "original-order",
    "reflex-order",
    "filler-order",
    "instance-order",
    "option",
];
pub const MEDICATION_STATEMENT_STATUS: &[&str] = &[
    "active",
    "completed",
    "entered-in-error",
    "intended",
    "stopped",
    "on-hold",
    "unknown",
    "not-taken",
];
pub const MEDICATION_DISPENSE_STATUS: &[&str] = &[
    "preparation",
    "in-progress",
    "cancelled",
    "on-hold",
    "completed",
    "entered-in-error",
    "stopped",
    "declined",
    "unknown",
];
pub const MEDICATION_ADMINISTRATION_STATUS: &[&str] = &[
    "in-progress",
    "not-done",
    "on-hold",
    "completed",
    "entered-in-error",
    "stopped",
    "unknown",
];
pub const IMMUNIZATION_STATUS: &[&str] = &["completed", "entered-in-error", "not-done"];
pub const IMMUNIZATION_EVALUATION_STATUS: &[&str] = &["completed", "entered-in-error"];

// Financial
pub const ACCOUNT_STATUS: &[&str] = &["active", "inactive", "entered-in-error", "on-hold", "unknown"];
pub const CHARGE_ITEM_STATUS: &[&str] = &[
    "planned",
    "billable",
    "not-billable",
    "aborted",
    "billed",
    "entered-in-error",
    "unknown",
];
pub const INVOICE_STATUS: &[&str] = &["draft", "issued", "balanced", "cancelled", "entered-in-error"];
pub const INVOICE_PRICE_COMPONENT_TYPE: &[&str] = &[
    "base",
    "surcharge",
    "deduction",
    "discount",
    "tax",
    "informational",
];
pub const CLAIM_USE: &[&str] = &["claim", "preauthorization", "predetermination"];
pub const REMITTANCE_OUTCOME: &[&str] = &["queued", "complete", "error", "partial"];
pub const NOTE_TYPE: &[&str] = &["display", "print", "printoper"];
pub const ELIGIBILITY_PURPOSE: &[&str] = &["auth-requirements", "benefits", "discovery", "validation"];
pub const CONTRACT_STATUS: &[&str] = &[
    "amended",
    "appended",
    "cancelled",
    "disputed",
    "entered-in-error",
    "executable",
    "executed",
    "negotiable",
    "offered",
    "policy",
    "rejected",
    "renewed",
    "revoked",
    "resolved",
    "terminated",
];

// Definitional, workflow and research
pub const ACTION_GROUPING_BEHAVIOR: &[&str] = &["visual-group", "logical-group", "sentence-group"];
pub const ACTION_SELECTION_BEHAVIOR: &[&str] = &[
    "any",
    "all",
    "all-or-none",
    "exactly-one",
    "at-most-one",
    "one-or-more",
];
pub const ACTION_REQUIRED_BEHAVIOR: &[&str] = &["must", "could", "must-unless-documented"];
pub const ACTION_PRECHECK_BEHAVIOR: &[&str] = &["yes", "no"];
pub const ACTION_CARDINALITY_BEHAVIOR: &[&str] = &["single", "multiple"];
pub const ACTION_CONDITION_KIND: &[&str] = &["applicability", "start", "stop"];
pub const ACTION_RELATIONSHIP_TYPE: &[&str] = &[
    "before-start",
    "before",
    "before-end",
    "concurrent-with-start",
    "concurrent",
    "concurrent-with-end",
    "after-start",
    "after",
    "after-end",
];
pub const ACTION_PARTICIPANT_TYPE: &[&str] = &["patient", "practitioner", "related-person", "device"];
pub const GUIDANCE_RESPONSE_STATUS: &[&str] = &[
    "success",
    "data-requested",
    "data-required",
    "in-progress",
    "failure",
    "entered-in-error",
];
pub const MEASURE_REPORT_STATUS: &[&str] = &["complete", "pending", "error"];
pub const MEASURE_REPORT_TYPE: &[&str] = &["individual", "subject-list", "summary", "data-collection"];
pub const TASK_STATUS: &[&str] = &[
    "draft",
    "requested",
    "received",
    "accepted",
    "rejected",
    "ready",
    "cancelled",
    "in-progress",
    "on-hold",
    "failed",
    "completed",
    "entered-in-error",
];
pub const TASK_INTENT: &[&str] = &[
    "unknown",
    "proposal",
    "plan",
    "order",
    "original-order",
    "reflex-order",
    "filler-order",
    "instance-order",
    "option",
];
pub const SUPPLY_DELIVERY_STATUS: &[&str] = &["in-progress", "completed", "abandoned", "entered-in-error"];
pub const SUPPLY_REQUEST_STATUS: &[&str] = &[
    "draft",
    "active",
    "suspended",
    "cancelled",
    "completed",
    "entered-in-error",
    "unknown",
];
pub const RESEARCH_STUDY_STATUS: &[&str] = &[
    "active",
    "administratively-completed",
    "approved",
    "closed-to-accrual",
    "closed-to-accrual-and-intervention",
    "completed",
    "disapproved",
    "in-review",
    "temporarily-closed-to-accrual",
    "temporarily-closed-to-accrual-and-intervention",
    "withdrawn",
];
pub const RESEARCH_SUBJECT_STATUS: &[&str] = &[
    "candidate",
    "eligible",
    "follow-up",
    "ineligible",
    "not-registered",
    "off-study",
    "on-study",
    "on-study-intervention",
    "on-study-observation",
    "pending-on-study",
    "potential-candidate",
    "screening",
    "withdrawn",
];
pub const EVIDENCE_VARIABLE_TYPE: &[&str] = &["dichotomous", "continuous", "descriptive"];
pub const GROUP_MEASURE: &[&str] = &[
    "mean",
    "median",
    "mean-of-mean",
    "mean-of-median",
    "median-of-mean",
    "median-of-median",
];
pub const EXPOSURE_STATE: &[&str] = &["exposure", "exposure-alternative"];
pub const CATALOG_ENTRY_RELATION_TYPE: &[&str] = &["triggers", "is-replaced-by"];
