//! Conformance resources: capability statements, profiles, maps, guides, tests.

use super::codes;
use super::datatypes::OPEN_TYPES;
use crate::shape::build::*;

fhir_shape! {
    resource CAPABILITY_STATEMENT = "CapabilityStatement" [
        uri("url"),
        string("version"),
        string("name"),
        string("title"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        date_time("date").required(),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        markdown("copyright"),
        code("kind").required().bind(codes::CAPABILITY_STATEMENT_KIND),
        canonical("instantiates").many(),
        canonical("imports").many(),
        backbone("software", &CAPABILITY_STATEMENT_SOFTWARE),
        backbone("implementation", &CAPABILITY_STATEMENT_IMPLEMENTATION),
        code("fhirVersion").required(),
        code("format").required().many(),
        code("patchFormat").many(),
        canonical("implementationGuide").many(),
        backbone("rest", &CAPABILITY_STATEMENT_REST).many(),
        backbone("messaging", &CAPABILITY_STATEMENT_MESSAGING).many(),
        backbone("document", &CAPABILITY_STATEMENT_DOCUMENT).many(),
    ]
    backbone CAPABILITY_STATEMENT_SOFTWARE = "CapabilityStatement.software" [
        string("name").required(),
        string("version"),
        date_time("releaseDate"),
    ]
    backbone CAPABILITY_STATEMENT_IMPLEMENTATION = "CapabilityStatement.implementation" [
        string("description").required(),
        url("url"),
        reference("custodian"),
    ]
    backbone CAPABILITY_STATEMENT_REST = "CapabilityStatement.rest" [
        code("mode").required().bind(codes::RESTFUL_MODE),
        markdown("documentation"),
        backbone("security", &CAPABILITY_STATEMENT_REST_SECURITY),
        backbone("resource", &CAPABILITY_STATEMENT_REST_RESOURCE).many(),
        backbone("interaction", &CAPABILITY_STATEMENT_REST_INTERACTION).many(),
        backbone("searchParam", &CAPABILITY_STATEMENT_SEARCH_PARAM).many(),
        backbone("operation", &CAPABILITY_STATEMENT_OPERATION).many(),
        canonical("compartment").many(),
    ]
    backbone CAPABILITY_STATEMENT_REST_SECURITY = "CapabilityStatement.rest.security" [
        boolean("cors"),
        codeable_concept("service").many(),
        markdown("description"),
    ]
    backbone CAPABILITY_STATEMENT_REST_RESOURCE = "CapabilityStatement.rest.resource" [
        code("type").required(),
        canonical("profile"),
        canonical("supportedProfile").many(),
        markdown("documentation"),
        backbone("interaction", &CAPABILITY_STATEMENT_RESOURCE_INTERACTION).many(),
        code("versioning").bind(codes::VERSIONING_POLICY),
        boolean("readHistory"),
        boolean("updateCreate"),
        boolean("conditionalCreate"),
        code("conditionalRead").bind(codes::CONDITIONAL_READ_STATUS),
        boolean("conditionalUpdate"),
        code("conditionalDelete").bind(codes::CONDITIONAL_DELETE_STATUS),
        code("referencePolicy").many().bind(codes::REFERENCE_HANDLING_POLICY),
        string("searchInclude").many(),
        string("searchRevInclude").many(),
        backbone("searchParam", &CAPABILITY_STATEMENT_SEARCH_PARAM).many(),
        backbone("operation", &CAPABILITY_STATEMENT_OPERATION).many(),
    ]
    backbone CAPABILITY_STATEMENT_RESOURCE_INTERACTION = "CapabilityStatement.rest.resource.interaction" [
        code("code").required().bind(codes::TYPE_RESTFUL_INTERACTION),
        markdown("documentation"),
    ]
    backbone CAPABILITY_STATEMENT_SEARCH_PARAM = "CapabilityStatement.rest.resource.searchParam" [
        string("name").required(),
        canonical("definition"),
        code("type").required().bind(codes::SEARCH_PARAM_TYPE),
        markdown("documentation"),
    ]
    backbone CAPABILITY_STATEMENT_OPERATION = "CapabilityStatement.rest.resource.operation" [
        string("name").required(),
        canonical("definition").required(),
        markdown("documentation"),
    ]
    backbone CAPABILITY_STATEMENT_REST_INTERACTION = "CapabilityStatement.rest.interaction" [
        code("code").required().bind(codes::SYSTEM_RESTFUL_INTERACTION),
        markdown("documentation"),
    ]
    backbone CAPABILITY_STATEMENT_MESSAGING = "CapabilityStatement.messaging" [
        backbone("endpoint", &CAPABILITY_STATEMENT_MESSAGING_ENDPOINT).many(),
        unsigned_int("reliableCache"),
        markdown("documentation"),
        backbone("supportedMessage", &CAPABILITY_STATEMENT_SUPPORTED_MESSAGE).many(),
    ]
    backbone CAPABILITY_STATEMENT_MESSAGING_ENDPOINT = "CapabilityStatement.messaging.endpoint" [
        coding("protocol").required(),
        url("address").required(),
    ]
    backbone CAPABILITY_STATEMENT_SUPPORTED_MESSAGE = "CapabilityStatement.messaging.supportedMessage" [
        code("mode").required().bind(codes::EVENT_CAPABILITY_MODE),
        canonical("definition").required(),
    ]
    backbone CAPABILITY_STATEMENT_DOCUMENT = "CapabilityStatement.document" [
        code("mode").required().bind(codes::DOCUMENT_MODE),
        markdown("documentation"),
        canonical("profile").required(),
    ]

    resource STRUCTURE_DEFINITION = "StructureDefinition" [
        uri("url").required(),
        identifier("identifier").many(),
        string("version"),
        string("name").required(),
        string("title"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        markdown("copyright"),
        coding("keyword").many(),
        code("fhirVersion"),
        backbone("mapping", &STRUCTURE_DEFINITION_MAPPING).many(),
        code("kind").required().bind(codes::STRUCTURE_DEFINITION_KIND),
        boolean("abstract").required(),
        backbone("context", &STRUCTURE_DEFINITION_CONTEXT).many(),
        string("contextInvariant").many(),
        uri("type").required(),
        canonical("baseDefinition"),
        code("derivation").bind(codes::TYPE_DERIVATION_RULE),
        backbone("snapshot", &STRUCTURE_DEFINITION_ELEMENTS),
        backbone("differential", &STRUCTURE_DEFINITION_ELEMENTS),
    ]
    backbone STRUCTURE_DEFINITION_MAPPING = "StructureDefinition.mapping" [
        id("identity").required(),
        uri("uri"),
        string("name"),
        string("comment"),
    ]
    backbone STRUCTURE_DEFINITION_CONTEXT = "StructureDefinition.context" [
        code("type").required().bind(codes::EXTENSION_CONTEXT_TYPE),
        string("expression").required(),
    ]
    backbone STRUCTURE_DEFINITION_ELEMENTS = "StructureDefinition.snapshot" [
        element_definition("element").required().many(),
    ]

    resource STRUCTURE_MAP = "StructureMap" [
        uri("url").required(),
        identifier("identifier").many(),
        string("version"),
        string("name").required(),
        string("title"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        markdown("copyright"),
        backbone("structure", &STRUCTURE_MAP_STRUCTURE).many(),
        canonical("import").many(),
        backbone("group", &STRUCTURE_MAP_GROUP).required().many(),
    ]
    backbone STRUCTURE_MAP_STRUCTURE = "StructureMap.structure" [
        canonical("url").required(),
        code("mode").required().bind(codes::STRUCTURE_MAP_MODEL_MODE),
        string("alias"),
        string("documentation"),
    ]
    backbone STRUCTURE_MAP_GROUP = "StructureMap.group" [
        id("name").required(),
        id("extends"),
        code("typeMode").required().bind(codes::STRUCTURE_MAP_GROUP_TYPE_MODE),
        string("documentation"),
        backbone("input", &STRUCTURE_MAP_GROUP_INPUT).required().many(),
        backbone("rule", &STRUCTURE_MAP_GROUP_RULE).required().many(),
    ]
    backbone STRUCTURE_MAP_GROUP_INPUT = "StructureMap.group.input" [
        id("name").required(),
        string("type"),
        code("mode").required().bind(codes::STRUCTURE_MAP_INPUT_MODE),
        string("documentation"),
    ]
    backbone STRUCTURE_MAP_GROUP_RULE = "StructureMap.group.rule" [
        id("name").required(),
        backbone("source", &STRUCTURE_MAP_RULE_SOURCE).required().many(),
        backbone("target", &STRUCTURE_MAP_RULE_TARGET).many(),
        backbone("rule", &STRUCTURE_MAP_GROUP_RULE).many(),
        backbone("dependent", &STRUCTURE_MAP_RULE_DEPENDENT).many(),
        string("documentation"),
    ]
    backbone STRUCTURE_MAP_RULE_SOURCE = "StructureMap.group.rule.source" [
        id("context").required(),
        integer("min"),
        string("max"),
        string("type"),
        choice("defaultValue", OPEN_TYPES),
        string("element"),
        code("listMode").bind(codes::STRUCTURE_MAP_SOURCE_LIST_MODE),
        id("variable"),
        string("condition"),
        string("check"),
        string("logMessage"),
    ]
    backbone STRUCTURE_MAP_RULE_TARGET = "StructureMap.group.rule.target" [
        id("context"),
        code("contextType").bind(codes::STRUCTURE_MAP_CONTEXT_TYPE),
        string("element"),
        id("variable"),
        code("listMode").many().bind(codes::STRUCTURE_MAP_TARGET_LIST_MODE),
        id("listRuleId"),
        code("transform").bind(codes::STRUCTURE_MAP_TRANSFORM),
        backbone("parameter", &STRUCTURE_MAP_TARGET_PARAMETER).many(),
    ]
    backbone STRUCTURE_MAP_TARGET_PARAMETER = "StructureMap.group.rule.target.parameter" [
        choice("value", &["id", "string", "boolean", "integer", "decimal"]).required(),
    ]
    backbone STRUCTURE_MAP_RULE_DEPENDENT = "StructureMap.group.rule.dependent" [
        id("name").required(),
        string("variable").required().many(),
    ]

    resource IMPLEMENTATION_GUIDE = "ImplementationGuide" [
        uri("url").required(),
        string("version"),
        string("name").required(),
        string("title"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("copyright"),
        id("packageId").required(),
        code("license"),
        code("fhirVersion").required().many(),
        backbone("dependsOn", &IMPLEMENTATION_GUIDE_DEPENDS_ON).many(),
        backbone("global", &IMPLEMENTATION_GUIDE_GLOBAL).many(),
        backbone("definition", &IMPLEMENTATION_GUIDE_DEFINITION),
        backbone("manifest", &IMPLEMENTATION_GUIDE_MANIFEST),
    ]
    backbone IMPLEMENTATION_GUIDE_DEPENDS_ON = "ImplementationGuide.dependsOn" [
        canonical("uri").required(),
        id("packageId"),
        string("version"),
    ]
    backbone IMPLEMENTATION_GUIDE_GLOBAL = "ImplementationGuide.global" [
        code("type").required(),
        canonical("profile").required(),
    ]
    backbone IMPLEMENTATION_GUIDE_DEFINITION = "ImplementationGuide.definition" [
        backbone("grouping", &IMPLEMENTATION_GUIDE_GROUPING).many(),
        backbone("resource", &IMPLEMENTATION_GUIDE_RESOURCE).required().many(),
        backbone("page", &IMPLEMENTATION_GUIDE_PAGE),
        backbone("parameter", &IMPLEMENTATION_GUIDE_PARAMETER).many(),
        backbone("template", &IMPLEMENTATION_GUIDE_TEMPLATE).many(),
    ]
    backbone IMPLEMENTATION_GUIDE_GROUPING = "ImplementationGuide.definition.grouping" [
        string("name").required(),
        string("description"),
    ]
    backbone IMPLEMENTATION_GUIDE_RESOURCE = "ImplementationGuide.definition.resource" [
        reference("reference").required(),
        code("fhirVersion").many(),
        string("name"),
        string("description"),
        choice("example", &["boolean", "canonical"]),
        id("groupingId"),
    ]
    backbone IMPLEMENTATION_GUIDE_PAGE = "ImplementationGuide.definition.page" [
        choice("name", &["url", "Reference"]).required(),
        string("title").required(),
        code("generation").required().bind(codes::GUIDE_PAGE_GENERATION),
        backbone("page", &IMPLEMENTATION_GUIDE_PAGE).many(),
    ]
    backbone IMPLEMENTATION_GUIDE_PARAMETER = "ImplementationGuide.definition.parameter" [
        code("code").required().bind(codes::GUIDE_PARAMETER_CODE),
        string("value").required(),
    ]
    backbone IMPLEMENTATION_GUIDE_TEMPLATE = "ImplementationGuide.definition.template" [
        code("code").required(),
        string("source").required(),
        string("scope"),
    ]
    backbone IMPLEMENTATION_GUIDE_MANIFEST = "ImplementationGuide.manifest" [
        url("rendering"),
        backbone("resource", &IMPLEMENTATION_GUIDE_MANIFEST_RESOURCE).required().many(),
        backbone("page", &IMPLEMENTATION_GUIDE_MANIFEST_PAGE).many(),
        string("image").many(),
        string("other").many(),
    ]
    backbone IMPLEMENTATION_GUIDE_MANIFEST_RESOURCE = "ImplementationGuide.manifest.resource" [
        reference("reference").required(),
        choice("example", &["boolean", "canonical"]),
        url("relativePath"),
    ]
    backbone IMPLEMENTATION_GUIDE_MANIFEST_PAGE = "ImplementationGuide.manifest.page" [
        string("name").required(),
        string("title"),
        string("anchor").many(),
    ]

    resource SEARCH_PARAMETER = "SearchParameter" [
        uri("url").required(),
        string("version"),
        string("name").required(),
        canonical("derivedFrom"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description").required(),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        code("code").required(),
        code("base").required().many(),
        code("type").required().bind(codes::SEARCH_PARAM_TYPE),
        string("expression"),
        string("xpath"),
        code("xpathUsage").bind(codes::XPATH_USAGE),
        code("target").many(),
        boolean("multipleOr"),
        boolean("multipleAnd"),
        code("comparator").many().bind(codes::SEARCH_COMPARATOR),
        code("modifier").many().bind(codes::SEARCH_MODIFIER_CODE),
        string("chain").many(),
        backbone("component", &SEARCH_PARAMETER_COMPONENT).many(),
    ]
    backbone SEARCH_PARAMETER_COMPONENT = "SearchParameter.component" [
        canonical("definition").required(),
        string("expression").required(),
    ]

    resource MESSAGE_DEFINITION = "MessageDefinition" [
        uri("url"),
        identifier("identifier").many(),
        string("version"),
        string("name"),
        string("title"),
        canonical("replaces").many(),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        date_time("date").required(),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        markdown("copyright"),
        canonical("base"),
        canonical("parent").many(),
        choice("event", &["Coding", "uri"]).required(),
        code("category").bind(codes::MESSAGE_SIGNIFICANCE_CATEGORY),
        backbone("focus", &MESSAGE_DEFINITION_FOCUS).many(),
        code("responseRequired").bind(codes::MESSAGE_HEADER_RESPONSE_REQUEST),
        backbone("allowedResponse", &MESSAGE_DEFINITION_ALLOWED_RESPONSE).many(),
        canonical("graph").many(),
    ]
    backbone MESSAGE_DEFINITION_FOCUS = "MessageDefinition.focus" [
        code("code").required(),
        canonical("profile"),
        unsigned_int("min").required(),
        string("max"),
    ]
    backbone MESSAGE_DEFINITION_ALLOWED_RESPONSE = "MessageDefinition.allowedResponse" [
        canonical("message").required(),
        markdown("situation"),
    ]

    resource OPERATION_DEFINITION = "OperationDefinition" [
        uri("url"),
        string("version"),
        string("name").required(),
        string("title"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        code("kind").required().bind(codes::OPERATION_KIND),
        boolean("experimental"),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        boolean("affectsState"),
        code("code").required(),
        markdown("comment"),
        canonical("base"),
        code("resource").many(),
        boolean("system").required(),
        boolean("type").required(),
        boolean("instance").required(),
        canonical("inputProfile"),
        canonical("outputProfile"),
        backbone("parameter", &OPERATION_DEFINITION_PARAMETER).many(),
        backbone("overload", &OPERATION_DEFINITION_OVERLOAD).many(),
    ]
    backbone OPERATION_DEFINITION_PARAMETER = "OperationDefinition.parameter" [
        code("name").required(),
        code("use").required().bind(codes::OPERATION_PARAMETER_USE),
        integer("min").required(),
        string("max").required(),
        string("documentation"),
        code("type"),
        canonical("targetProfile").many(),
        code("searchType").bind(codes::SEARCH_PARAM_TYPE),
        backbone("binding", &OPERATION_DEFINITION_BINDING),
        backbone("referencedFrom", &OPERATION_DEFINITION_REFERENCED_FROM).many(),
        backbone("part", &OPERATION_DEFINITION_PARAMETER).many(),
    ]
    backbone OPERATION_DEFINITION_BINDING = "OperationDefinition.parameter.binding" [
        code("strength").required().bind(codes::BINDING_STRENGTH),
        canonical("valueSet").required(),
    ]
    backbone OPERATION_DEFINITION_REFERENCED_FROM = "OperationDefinition.parameter.referencedFrom" [
        string("source").required(),
        string("sourceId"),
    ]
    backbone OPERATION_DEFINITION_OVERLOAD = "OperationDefinition.overload" [
        string("parameterName").many(),
        string("comment"),
    ]

    resource COMPARTMENT_DEFINITION = "CompartmentDefinition" [
        uri("url").required(),
        string("version"),
        string("name").required(),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        markdown("purpose"),
        code("code").required().bind(codes::COMPARTMENT_TYPE),
        boolean("search").required(),
        backbone("resource", &COMPARTMENT_DEFINITION_RESOURCE).many(),
    ]
    backbone COMPARTMENT_DEFINITION_RESOURCE = "CompartmentDefinition.resource" [
        code("code").required(),
        string("param").many(),
        string("documentation"),
    ]

    resource GRAPH_DEFINITION = "GraphDefinition" [
        uri("url"),
        string("version"),
        string("name").required(),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        code("start").required(),
        canonical("profile"),
        backbone("link", &GRAPH_DEFINITION_LINK).many(),
    ]
    backbone GRAPH_DEFINITION_LINK = "GraphDefinition.link" [
        string("path"),
        string("sliceName"),
        integer("min"),
        string("max"),
        string("description"),
        backbone("target", &GRAPH_DEFINITION_LINK_TARGET).many(),
    ]
    backbone GRAPH_DEFINITION_LINK_TARGET = "GraphDefinition.link.target" [
        code("type").required(),
        string("params"),
        canonical("profile"),
        backbone("compartment", &GRAPH_DEFINITION_COMPARTMENT).many(),
        backbone("link", &GRAPH_DEFINITION_LINK).many(),
    ]
    backbone GRAPH_DEFINITION_COMPARTMENT = "GraphDefinition.link.target.compartment" [
        code("use").required().bind(codes::GRAPH_COMPARTMENT_USE),
        code("code").required().bind(codes::COMPARTMENT_TYPE),
        code("rule").required().bind(codes::GRAPH_COMPARTMENT_RULE),
        string("expression"),
        string("description"),
    ]

    resource EXAMPLE_SCENARIO = "ExampleScenario" [
        uri("url"),
        identifier("identifier").many(),
        string("version"),
        string("name"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("copyright"),
        markdown("purpose"),
        backbone("actor", &EXAMPLE_SCENARIO_ACTOR).many(),
        backbone("instance", &EXAMPLE_SCENARIO_INSTANCE).many(),
        backbone("process", &EXAMPLE_SCENARIO_PROCESS).many(),
        canonical("workflow").many(),
    ]
    backbone EXAMPLE_SCENARIO_ACTOR = "ExampleScenario.actor" [
        string("actorId").required(),
        code("type").required().bind(codes::EXAMPLE_SCENARIO_ACTOR_TYPE),
        string("name"),
        markdown("description"),
    ]
    backbone EXAMPLE_SCENARIO_INSTANCE = "ExampleScenario.instance" [
        string("resourceId").required(),
        code("resourceType").required(),
        string("name"),
        markdown("description"),
        backbone("version", &EXAMPLE_SCENARIO_INSTANCE_VERSION).many(),
        backbone("containedInstance", &EXAMPLE_SCENARIO_CONTAINED_INSTANCE).many(),
    ]
    backbone EXAMPLE_SCENARIO_INSTANCE_VERSION = "ExampleScenario.instance.version" [
        string("versionId").required(),
        markdown("description").required(),
    ]
    backbone EXAMPLE_SCENARIO_CONTAINED_INSTANCE = "ExampleScenario.instance.containedInstance" [
        string("resourceId").required(),
        string("versionId"),
    ]
    backbone EXAMPLE_SCENARIO_PROCESS = "ExampleScenario.process" [
        string("title").required(),
        markdown("description"),
        markdown("preConditions"),
        markdown("postConditions"),
        backbone("step", &EXAMPLE_SCENARIO_STEP).many(),
    ]
    backbone EXAMPLE_SCENARIO_STEP = "ExampleScenario.process.step" [
        backbone("process", &EXAMPLE_SCENARIO_PROCESS).many(),
        boolean("pause"),
        backbone("operation", &EXAMPLE_SCENARIO_OPERATION),
        backbone("alternative", &EXAMPLE_SCENARIO_ALTERNATIVE).many(),
    ]
    backbone EXAMPLE_SCENARIO_OPERATION = "ExampleScenario.process.step.operation" [
        string("number").required(),
        string("type"),
        string("name"),
        string("initiator"),
        string("receiver"),
        markdown("description"),
        boolean("initiatorActive"),
        boolean("receiverActive"),
        backbone("request", &EXAMPLE_SCENARIO_CONTAINED_INSTANCE),
        backbone("response", &EXAMPLE_SCENARIO_CONTAINED_INSTANCE),
    ]
    backbone EXAMPLE_SCENARIO_ALTERNATIVE = "ExampleScenario.process.step.alternative" [
        string("title").required(),
        markdown("description"),
        backbone("step", &EXAMPLE_SCENARIO_STEP).many(),
    ]

    resource TEST_SCRIPT = "TestScript" [
        uri("url").required(),
        identifier("identifier"),
        string("version"),
        string("name").required(),
        string("title"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        markdown("copyright"),
        backbone("origin", &TEST_SCRIPT_ORIGIN).many(),
        backbone("destination", &TEST_SCRIPT_ORIGIN).many(),
        backbone("metadata", &TEST_SCRIPT_METADATA),
        backbone("fixture", &TEST_SCRIPT_FIXTURE).many(),
        reference("profile").many(),
        backbone("variable", &TEST_SCRIPT_VARIABLE).many(),
        backbone("setup", &TEST_SCRIPT_SETUP),
        backbone("test", &TEST_SCRIPT_TEST).many(),
        backbone("teardown", &TEST_SCRIPT_TEARDOWN),
    ]
    backbone TEST_SCRIPT_ORIGIN = "TestScript.origin" [
        integer("index").required(),
        coding("profile").required(),
    ]
    backbone TEST_SCRIPT_METADATA = "TestScript.metadata" [
        backbone("link", &TEST_SCRIPT_METADATA_LINK).many(),
        backbone("capability", &TEST_SCRIPT_METADATA_CAPABILITY).required().many(),
    ]
    backbone TEST_SCRIPT_METADATA_LINK = "TestScript.metadata.link" [
        uri("url").required(),
        string("description"),
    ]
    backbone TEST_SCRIPT_METADATA_CAPABILITY = "TestScript.metadata.capability" [
        boolean("required").required(),
        boolean("validated").required(),
        string("description"),
        integer("origin").many(),
        integer("destination"),
        uri("link").many(),
        canonical("capabilities").required(),
    ]
    backbone TEST_SCRIPT_FIXTURE = "TestScript.fixture" [
        boolean("autocreate").required(),
        boolean("autodelete").required(),
        reference("resource"),
    ]
    backbone TEST_SCRIPT_VARIABLE = "TestScript.variable" [
        string("name").required(),
        string("defaultValue"),
        string("description"),
        string("expression"),
        string("headerField"),
        string("hint"),
        string("path"),
        id("sourceId"),
    ]
    backbone TEST_SCRIPT_SETUP = "TestScript.setup" [
        backbone("action", &TEST_SCRIPT_SETUP_ACTION).required().many(),
    ]
    backbone TEST_SCRIPT_SETUP_ACTION = "TestScript.setup.action" [
        backbone("operation", &TEST_SCRIPT_OPERATION),
        backbone("assert", &TEST_SCRIPT_ASSERT),
    ]
    backbone TEST_SCRIPT_OPERATION = "TestScript.setup.action.operation" [
        coding("type"),
        code("resource"),
        string("label"),
        string("description"),
        code("accept"),
        code("contentType"),
        integer("destination"),
        boolean("encodeRequestUrl").required(),
        code("method").bind(codes::TEST_SCRIPT_REQUEST_METHOD),
        integer("origin"),
        string("params"),
        backbone("requestHeader", &TEST_SCRIPT_REQUEST_HEADER).many(),
        id("requestId"),
        id("responseId"),
        id("sourceId"),
        id("targetId"),
        string("url"),
    ]
    backbone TEST_SCRIPT_REQUEST_HEADER = "TestScript.setup.action.operation.requestHeader" [
        string("field").required(),
        string("value").required(),
    ]
    backbone TEST_SCRIPT_ASSERT = "TestScript.setup.action.assert" [
        string("label"),
        string("description"),
        code("direction").bind(codes::ASSERTION_DIRECTION),
        string("compareToSourceId"),
        string("compareToSourceExpression"),
        string("compareToSourcePath"),
        code("contentType"),
        string("expression"),
        string("headerField"),
        string("minimumId"),
        boolean("navigationLinks"),
        code("operator").bind(codes::ASSERTION_OPERATOR),
        string("path"),
        code("requestMethod").bind(codes::TEST_SCRIPT_REQUEST_METHOD),
        string("requestURL"),
        code("resource"),
        code("response").bind(codes::ASSERTION_RESPONSE),
        string("responseCode"),
        id("sourceId"),
        id("validateProfileId"),
        string("value"),
        boolean("warningOnly").required(),
    ]
    backbone TEST_SCRIPT_TEST = "TestScript.test" [
        string("name"),
        string("description"),
        backbone("action", &TEST_SCRIPT_SETUP_ACTION).required().many(),
    ]
    backbone TEST_SCRIPT_TEARDOWN = "TestScript.teardown" [
        backbone("action", &TEST_SCRIPT_TEARDOWN_ACTION).required().many(),
    ]
    backbone TEST_SCRIPT_TEARDOWN_ACTION = "TestScript.teardown.action" [
        backbone("operation", &TEST_SCRIPT_OPERATION).required(),
    ]

    resource TEST_REPORT = "TestReport" [
        identifier("identifier"),
        string("name"),
        code("status").required().bind(codes::TEST_REPORT_STATUS),
        reference("testScript").required(),
        code("result").required().bind(codes::TEST_REPORT_RESULT),
        decimal("score"),
        string("tester"),
        date_time("issued"),
        backbone("participant", &TEST_REPORT_PARTICIPANT).many(),
        backbone("setup", &TEST_REPORT_SETUP),
        backbone("test", &TEST_REPORT_TEST).many(),
        backbone("teardown", &TEST_REPORT_TEARDOWN),
    ]
    backbone TEST_REPORT_PARTICIPANT = "TestReport.participant" [
        code("type").required().bind(codes::TEST_REPORT_PARTICIPANT_TYPE),
        uri("uri").required(),
        string("display"),
    ]
    backbone TEST_REPORT_SETUP = "TestReport.setup" [
        backbone("action", &TEST_REPORT_SETUP_ACTION).required().many(),
    ]
    backbone TEST_REPORT_SETUP_ACTION = "TestReport.setup.action" [
        backbone("operation", &TEST_REPORT_OPERATION),
        backbone("assert", &TEST_REPORT_ASSERT),
    ]
    backbone TEST_REPORT_OPERATION = "TestReport.setup.action.operation" [
        code("result").required().bind(codes::TEST_REPORT_ACTION_RESULT),
        markdown("message"),
        uri("detail"),
    ]
    backbone TEST_REPORT_ASSERT = "TestReport.setup.action.assert" [
        code("result").required().bind(codes::TEST_REPORT_ACTION_RESULT),
        markdown("message"),
        string("detail"),
    ]
    backbone TEST_REPORT_TEST = "TestReport.test" [
        string("name"),
        string("description"),
        backbone("action", &TEST_REPORT_SETUP_ACTION).required().many(),
    ]
    backbone TEST_REPORT_TEARDOWN = "TestReport.teardown" [
        backbone("action", &TEST_REPORT_TEARDOWN_ACTION).required().many(),
    ]
    backbone TEST_REPORT_TEARDOWN_ACTION = "TestReport.teardown.action" [
        backbone("operation", &TEST_REPORT_OPERATION).required(),
    ]
}
