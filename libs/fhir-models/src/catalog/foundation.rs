//! Foundation resources: bundles, parameters, messaging, security records.

use super::codes;
use super::datatypes::OPEN_TYPES;
use crate::shape::build::*;

fhir_shape! {
    base_resource BINARY = "Binary" [
        code("contentType").required(),
        reference("securityContext"),
        base64_binary("data"),
    ]

    base_resource BUNDLE = "Bundle" [
        identifier("identifier"),
        code("type").required().bind(codes::BUNDLE_TYPE),
        instant("timestamp"),
        unsigned_int("total"),
        backbone("link", &BUNDLE_LINK).many(),
        backbone("entry", &BUNDLE_ENTRY).many(),
        signature("signature"),
    ]
    backbone BUNDLE_LINK = "Bundle.link" [
        string("relation").required(),
        uri("url").required(),
    ]
    backbone BUNDLE_ENTRY = "Bundle.entry" [
        backbone("link", &BUNDLE_LINK).many(),
        uri("fullUrl"),
        resource("resource"),
        backbone("search", &BUNDLE_ENTRY_SEARCH),
        backbone("request", &BUNDLE_ENTRY_REQUEST),
        backbone("response", &BUNDLE_ENTRY_RESPONSE),
    ]
    backbone BUNDLE_ENTRY_SEARCH = "Bundle.entry.search" [
        code("mode").bind(codes::SEARCH_ENTRY_MODE),
        decimal("score"),
    ]
    backbone BUNDLE_ENTRY_REQUEST = "Bundle.entry.request" [
        code("method").required().bind(codes::HTTP_VERB),
        uri("url").required(),
        string("ifNoneMatch"),
        instant("ifModifiedSince"),
        string("ifMatch"),
        string("ifNoneExist"),
    ]
    backbone BUNDLE_ENTRY_RESPONSE = "Bundle.entry.response" [
        string("status").required(),
        uri("location"),
        string("etag"),
        instant("lastModified"),
        resource("outcome"),
    ]

    base_resource PARAMETERS = "Parameters" [
        backbone("parameter", &PARAMETERS_PARAMETER).many(),
    ]
    backbone PARAMETERS_PARAMETER = "Parameters.parameter" [
        string("name").required(),
        choice("value", OPEN_TYPES),
        resource("resource"),
        backbone("part", &PARAMETERS_PARAMETER).many(),
    ]

    resource BASIC = "Basic" [
        identifier("identifier").many(),
        codeable_concept("code").required(),
        reference("subject"),
        date("created"),
        reference("author"),
    ]

    resource OPERATION_OUTCOME = "OperationOutcome" [
        backbone("issue", &OPERATION_OUTCOME_ISSUE).required().many(),
    ]
    backbone OPERATION_OUTCOME_ISSUE = "OperationOutcome.issue" [
        code("severity").required().bind(codes::ISSUE_SEVERITY),
        code("code").required().bind(codes::ISSUE_TYPE),
        codeable_concept("details"),
        string("diagnostics"),
        string("location").many(),
        string("expression").many(),
    ]

    resource LINKAGE = "Linkage" [
        boolean("active"),
        reference("author"),
        backbone("item", &LINKAGE_ITEM).required().many(),
    ]
    backbone LINKAGE_ITEM = "Linkage.item" [
        code("type").required().bind(codes::LINKAGE_TYPE),
        reference("resource").required(),
    ]

    resource MESSAGE_HEADER = "MessageHeader" [
        choice("event", &["Coding", "uri"]).required(),
        backbone("destination", &MESSAGE_HEADER_DESTINATION).many(),
        reference("sender"),
        reference("enterer"),
        reference("author"),
        backbone("source", &MESSAGE_HEADER_SOURCE).required(),
        reference("responsible"),
        codeable_concept("reason"),
        backbone("response", &MESSAGE_HEADER_RESPONSE),
        reference("focus").many(),
        canonical("definition"),
    ]
    backbone MESSAGE_HEADER_DESTINATION = "MessageHeader.destination" [
        string("name"),
        reference("target"),
        url("endpoint").required(),
        reference("receiver"),
    ]
    backbone MESSAGE_HEADER_SOURCE = "MessageHeader.source" [
        string("name"),
        string("software"),
        string("version"),
        contact_point("contact"),
        url("endpoint").required(),
    ]
    backbone MESSAGE_HEADER_RESPONSE = "MessageHeader.response" [
        id("identifier").required(),
        code("code").required().bind(codes::RESPONSE_TYPE),
        reference("details"),
    ]

    resource SUBSCRIPTION = "Subscription" [
        code("status").required().bind(codes::SUBSCRIPTION_STATUS),
        contact_point("contact").many(),
        instant("end"),
        string("reason").required(),
        string("criteria").required(),
        string("error"),
        backbone("channel", &SUBSCRIPTION_CHANNEL).required(),
    ]
    backbone SUBSCRIPTION_CHANNEL = "Subscription.channel" [
        code("type").required().bind(codes::SUBSCRIPTION_CHANNEL_TYPE),
        url("endpoint"),
        code("payload"),
        string("header").many(),
    ]

    resource AUDIT_EVENT = "AuditEvent" [
        coding("type").required(),
        coding("subtype").many(),
        code("action").bind(codes::AUDIT_EVENT_ACTION),
        period("period"),
        instant("recorded").required(),
        code("outcome").bind(codes::AUDIT_EVENT_OUTCOME),
        string("outcomeDesc"),
        codeable_concept("purposeOfEvent").many(),
        backbone("agent", &AUDIT_EVENT_AGENT).required().many(),
        backbone("source", &AUDIT_EVENT_SOURCE).required(),
        backbone("entity", &AUDIT_EVENT_ENTITY).many(),
    ]
    backbone AUDIT_EVENT_AGENT = "AuditEvent.agent" [
        codeable_concept("type"),
        codeable_concept("role").many(),
        reference("who"),
        string("altId"),
        string("name"),
        boolean("requestor").required(),
        reference("location"),
        uri("policy").many(),
        coding("media"),
        backbone("network", &AUDIT_EVENT_AGENT_NETWORK),
        codeable_concept("purposeOfUse").many(),
    ]
    backbone AUDIT_EVENT_AGENT_NETWORK = "AuditEvent.agent.network" [
        string("address"),
        code("type").bind(codes::NETWORK_TYPE),
    ]
    backbone AUDIT_EVENT_SOURCE = "AuditEvent.source" [
        string("site"),
        reference("observer").required(),
        coding("type").many(),
    ]
    backbone AUDIT_EVENT_ENTITY = "AuditEvent.entity" [
        reference("what"),
        coding("type"),
        coding("role"),
        coding("lifecycle"),
        coding("securityLabel").many(),
        string("name"),
        string("description"),
        base64_binary("query"),
        backbone("detail", &AUDIT_EVENT_ENTITY_DETAIL).many(),
    ]
    backbone AUDIT_EVENT_ENTITY_DETAIL = "AuditEvent.entity.detail" [
        string("type").required(),
        choice("value", &["string", "base64Binary"]).required(),
    ]

    resource PROVENANCE = "Provenance" [
        reference("target").required().many(),
        choice("occurred", &["Period", "dateTime"]),
        instant("recorded").required(),
        uri("policy").many(),
        reference("location"),
        codeable_concept("reason").many(),
        codeable_concept("activity"),
        backbone("agent", &PROVENANCE_AGENT).required().many(),
        backbone("entity", &PROVENANCE_ENTITY).many(),
        signature("signature").many(),
    ]
    backbone PROVENANCE_AGENT = "Provenance.agent" [
        codeable_concept("type"),
        codeable_concept("role").many(),
        reference("who").required(),
        reference("onBehalfOf"),
    ]
    backbone PROVENANCE_ENTITY = "Provenance.entity" [
        code("role").required().bind(codes::PROVENANCE_ENTITY_ROLE),
        reference("what").required(),
        backbone("agent", &PROVENANCE_AGENT).many(),
    ]
}
