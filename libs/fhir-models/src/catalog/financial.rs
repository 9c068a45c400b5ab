//! Financial resources: accounts, billing, claims, coverage, contracts.

use super::codes;
use crate::shape::build::*;

const SERVICED_TYPES: &[&str] = &["date", "Period"];
const ITEM_LOCATION_TYPES: &[&str] = &["CodeableConcept", "Address", "Reference"];
const BENEFIT_VALUE_TYPES: &[&str] = &["unsignedInt", "string", "Money"];

fhir_shape! {
    resource ACCOUNT = "Account" [
        identifier("identifier").many(),
        code("status").required().bind(codes::ACCOUNT_STATUS),
        codeable_concept("type"),
        string("name"),
        reference("subject").many(),
        period("servicePeriod"),
        backbone("coverage", &ACCOUNT_COVERAGE).many(),
        reference("owner"),
        string("description"),
        backbone("guarantor", &ACCOUNT_GUARANTOR).many(),
        reference("partOf"),
    ]
    backbone ACCOUNT_COVERAGE = "Account.coverage" [
        reference("coverage").required(),
        positive_int("priority"),
    ]
    backbone ACCOUNT_GUARANTOR = "Account.guarantor" [
        reference("party").required(),
        boolean("onHold"),
        period("period"),
    ]

    resource CHARGE_ITEM = "ChargeItem" [
        identifier("identifier").many(),
        uri("definitionUri").many(),
        canonical("definitionCanonical").many(),
        code("status").required().bind(codes::CHARGE_ITEM_STATUS),
        reference("partOf").many(),
        codeable_concept("code").required(),
        reference("subject").required(),
        reference("context"),
        choice("occurrence", &["dateTime", "Period", "Timing"]),
        backbone("performer", &CHARGE_ITEM_PERFORMER).many(),
        reference("performingOrganization"),
        reference("requestingOrganization"),
        reference("costCenter"),
        quantity("quantity"),
        codeable_concept("bodysite").many(),
        decimal("factorOverride"),
        money("priceOverride"),
        string("overrideReason"),
        reference("enterer"),
        date_time("enteredDate"),
        codeable_concept("reason").many(),
        reference("service").many(),
        choice("product", &["Reference", "CodeableConcept"]),
        reference("account").many(),
        annotation("note").many(),
        reference("supportingInformation").many(),
    ]
    backbone CHARGE_ITEM_PERFORMER = "ChargeItem.performer" [
        codeable_concept("function"),
        reference("actor").required(),
    ]

    resource CHARGE_ITEM_DEFINITION = "ChargeItemDefinition" [
        uri("url").required(),
        identifier("identifier").many(),
        string("version"),
        string("title"),
        uri("derivedFromUri").many(),
        canonical("partOf").many(),
        canonical("replaces").many(),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("copyright"),
        date("approvalDate"),
        date("lastReviewDate"),
        period("effectivePeriod"),
        codeable_concept("code"),
        reference("instance").many(),
        backbone("applicability", &CHARGE_ITEM_DEFINITION_APPLICABILITY).many(),
        backbone("propertyGroup", &CHARGE_ITEM_DEFINITION_PROPERTY_GROUP).many(),
    ]
    backbone CHARGE_ITEM_DEFINITION_APPLICABILITY = "ChargeItemDefinition.applicability" [
        string("description"),
        string("language"),
        string("expression"),
    ]
    backbone CHARGE_ITEM_DEFINITION_PROPERTY_GROUP = "ChargeItemDefinition.propertyGroup" [
        backbone("applicability", &CHARGE_ITEM_DEFINITION_APPLICABILITY).many(),
        backbone("priceComponent", &PRICE_COMPONENT).many(),
    ]
    backbone PRICE_COMPONENT = "ChargeItemDefinition.propertyGroup.priceComponent" [
        code("type").required().bind(codes::INVOICE_PRICE_COMPONENT_TYPE),
        codeable_concept("code"),
        decimal("factor"),
        money("amount"),
    ]

    resource CLAIM = "Claim" [
        identifier("identifier").many(),
        code("status").required().bind(codes::FINANCIAL_RESOURCE_STATUS),
        codeable_concept("type").required(),
        codeable_concept("subType"),
        code("use").required().bind(codes::CLAIM_USE),
        reference("patient").required(),
        period("billablePeriod"),
        date_time("created").required(),
        reference("enterer"),
        reference("insurer"),
        reference("provider").required(),
        codeable_concept("priority").required(),
        codeable_concept("fundsReserve"),
        backbone("related", &CLAIM_RELATED).many(),
        reference("prescription"),
        reference("originalPrescription"),
        backbone("payee", &CLAIM_PAYEE),
        reference("referral"),
        reference("facility"),
        backbone("careTeam", &CLAIM_CARE_TEAM).many(),
        backbone("supportingInfo", &CLAIM_SUPPORTING_INFO).many(),
        backbone("diagnosis", &CLAIM_DIAGNOSIS).many(),
        backbone("procedure", &CLAIM_PROCEDURE).many(),
        backbone("insurance", &CLAIM_INSURANCE).required().many(),
        backbone("accident", &CLAIM_ACCIDENT),
        backbone("item", &CLAIM_ITEM).many(),
        money("total"),
    ]
    backbone CLAIM_RELATED = "Claim.related" [
        reference("claim"),
        codeable_concept("relationship"),
        identifier("reference"),
    ]
    backbone CLAIM_PAYEE = "Claim.payee" [
        codeable_concept("type").required(),
        reference("party"),
    ]
    backbone CLAIM_CARE_TEAM = "Claim.careTeam" [
        positive_int("sequence").required(),
        reference("provider").required(),
        boolean("responsible"),
        codeable_concept("role"),
        codeable_concept("qualification"),
    ]
    backbone CLAIM_SUPPORTING_INFO = "Claim.supportingInfo" [
        positive_int("sequence").required(),
        codeable_concept("category").required(),
        codeable_concept("code"),
        choice("timing", SERVICED_TYPES),
        choice("value", &["boolean", "string", "Quantity", "Attachment", "Reference"]),
        codeable_concept("reason"),
    ]
    backbone CLAIM_DIAGNOSIS = "Claim.diagnosis" [
        positive_int("sequence").required(),
        choice("diagnosis", &["CodeableConcept", "Reference"]).required(),
        codeable_concept("type").many(),
        codeable_concept("onAdmission"),
        codeable_concept("packageCode"),
    ]
    backbone CLAIM_PROCEDURE = "Claim.procedure" [
        positive_int("sequence").required(),
        codeable_concept("type").many(),
        date_time("date"),
        choice("procedure", &["CodeableConcept", "Reference"]).required(),
        reference("udi").many(),
    ]
    backbone CLAIM_INSURANCE = "Claim.insurance" [
        positive_int("sequence").required(),
        boolean("focal").required(),
        identifier("identifier"),
        reference("coverage").required(),
        string("businessArrangement"),
        string("preAuthRef").many(),
        reference("claimResponse"),
    ]
    backbone CLAIM_ACCIDENT = "Claim.accident" [
        date("date").required(),
        codeable_concept("type"),
        choice("location", &["Address", "Reference"]),
    ]
    backbone CLAIM_ITEM = "Claim.item" [
        positive_int("sequence").required(),
        positive_int("careTeamSequence").many(),
        positive_int("diagnosisSequence").many(),
        positive_int("procedureSequence").many(),
        positive_int("informationSequence").many(),
        codeable_concept("revenue"),
        codeable_concept("category"),
        codeable_concept("productOrService").required(),
        codeable_concept("modifier").many(),
        codeable_concept("programCode").many(),
        choice("serviced", SERVICED_TYPES),
        choice("location", ITEM_LOCATION_TYPES),
        simple_quantity("quantity"),
        money("unitPrice"),
        decimal("factor"),
        money("net"),
        reference("udi").many(),
        codeable_concept("bodySite"),
        codeable_concept("subSite").many(),
        reference("encounter").many(),
        backbone("detail", &CLAIM_ITEM_DETAIL).many(),
    ]
    backbone CLAIM_ITEM_DETAIL = "Claim.item.detail" [
        positive_int("sequence").required(),
        codeable_concept("revenue"),
        codeable_concept("category"),
        codeable_concept("productOrService").required(),
        codeable_concept("modifier").many(),
        codeable_concept("programCode").many(),
        simple_quantity("quantity"),
        money("unitPrice"),
        decimal("factor"),
        money("net"),
        reference("udi").many(),
        backbone("subDetail", &CLAIM_ITEM_DETAIL_SUB_DETAIL).many(),
    ]
    backbone CLAIM_ITEM_DETAIL_SUB_DETAIL = "Claim.item.detail.subDetail" [
        positive_int("sequence").required(),
        codeable_concept("revenue"),
        codeable_concept("category"),
        codeable_concept("productOrService").required(),
        codeable_concept("modifier").many(),
        codeable_concept("programCode").many(),
        simple_quantity("quantity"),
        money("unitPrice"),
        decimal("factor"),
        money("net"),
        reference("udi").many(),
    ]

    resource CLAIM_RESPONSE = "ClaimResponse" [
        identifier("identifier").many(),
        code("status").required().bind(codes::FINANCIAL_RESOURCE_STATUS),
        codeable_concept("type").required(),
        codeable_concept("subType"),
        code("use").required().bind(codes::CLAIM_USE),
        reference("patient").required(),
        date_time("created").required(),
        reference("insurer").required(),
        reference("requestor"),
        reference("request"),
        code("outcome").required().bind(codes::REMITTANCE_OUTCOME),
        string("disposition"),
        string("preAuthRef"),
        period("preAuthPeriod"),
        codeable_concept("payeeType"),
        backbone("item", &CLAIM_RESPONSE_ITEM).many(),
        backbone("addItem", &CLAIM_RESPONSE_ADD_ITEM).many(),
        backbone("adjudication", &ADJUDICATION).many(),
        backbone("total", &CLAIM_RESPONSE_TOTAL).many(),
        backbone("payment", &CLAIM_RESPONSE_PAYMENT),
        codeable_concept("fundsReserve"),
        codeable_concept("formCode"),
        attachment("form"),
        backbone("processNote", &CLAIM_RESPONSE_PROCESS_NOTE).many(),
        reference("communicationRequest").many(),
        backbone("insurance", &CLAIM_RESPONSE_INSURANCE).many(),
        backbone("error", &CLAIM_RESPONSE_ERROR).many(),
    ]
    backbone CLAIM_RESPONSE_ITEM = "ClaimResponse.item" [
        positive_int("itemSequence").required(),
        positive_int("noteNumber").many(),
        backbone("adjudication", &ADJUDICATION).required().many(),
        backbone("detail", &CLAIM_RESPONSE_ITEM_DETAIL).many(),
    ]
    backbone ADJUDICATION = "ClaimResponse.item.adjudication" [
        codeable_concept("category").required(),
        codeable_concept("reason"),
        money("amount"),
        decimal("value"),
    ]
    backbone CLAIM_RESPONSE_ITEM_DETAIL = "ClaimResponse.item.detail" [
        positive_int("detailSequence").required(),
        positive_int("noteNumber").many(),
        backbone("adjudication", &ADJUDICATION).required().many(),
        backbone("subDetail", &CLAIM_RESPONSE_ITEM_DETAIL_SUB_DETAIL).many(),
    ]
    backbone CLAIM_RESPONSE_ITEM_DETAIL_SUB_DETAIL = "ClaimResponse.item.detail.subDetail" [
        positive_int("subDetailSequence").required(),
        positive_int("noteNumber").many(),
        backbone("adjudication", &ADJUDICATION).many(),
    ]
    backbone CLAIM_RESPONSE_ADD_ITEM = "ClaimResponse.addItem" [
        positive_int("itemSequence").many(),
        positive_int("detailSequence").many(),
        positive_int("subdetailSequence").many(),
        reference("provider").many(),
        codeable_concept("productOrService").required(),
        codeable_concept("modifier").many(),
        codeable_concept("programCode").many(),
        choice("serviced", SERVICED_TYPES),
        choice("location", ITEM_LOCATION_TYPES),
        simple_quantity("quantity"),
        money("unitPrice"),
        decimal("factor"),
        money("net"),
        codeable_concept("bodySite"),
        codeable_concept("subSite").many(),
        positive_int("noteNumber").many(),
        backbone("adjudication", &ADJUDICATION).required().many(),
        backbone("detail", &CLAIM_RESPONSE_ADD_ITEM_DETAIL).many(),
    ]
    backbone CLAIM_RESPONSE_ADD_ITEM_DETAIL = "ClaimResponse.addItem.detail" [
        codeable_concept("productOrService").required(),
        codeable_concept("modifier").many(),
        simple_quantity("quantity"),
        money("unitPrice"),
        decimal("factor"),
        money("net"),
        positive_int("noteNumber").many(),
        backbone("adjudication", &ADJUDICATION).required().many(),
        backbone("subDetail", &CLAIM_RESPONSE_ADD_ITEM_DETAIL_SUB_DETAIL).many(),
    ]
    backbone CLAIM_RESPONSE_ADD_ITEM_DETAIL_SUB_DETAIL = "ClaimResponse.addItem.detail.subDetail" [
        codeable_concept("productOrService").required(),
        codeable_concept("modifier").many(),
        simple_quantity("quantity"),
        money("unitPrice"),
        decimal("factor"),
        money("net"),
        positive_int("noteNumber").many(),
        backbone("adjudication", &ADJUDICATION).required().many(),
    ]
    backbone CLAIM_RESPONSE_TOTAL = "ClaimResponse.total" [
        codeable_concept("category").required(),
        money("amount").required(),
    ]
    backbone CLAIM_RESPONSE_PAYMENT = "ClaimResponse.payment" [
        codeable_concept("type").required(),
        money("adjustment"),
        codeable_concept("adjustmentReason"),
        date("date"),
        money("amount").required(),
        identifier("identifier"),
    ]
    backbone CLAIM_RESPONSE_PROCESS_NOTE = "ClaimResponse.processNote" [
        positive_int("number"),
        code("type").bind(codes::NOTE_TYPE),
        string("text").required(),
        codeable_concept("language"),
    ]
    backbone CLAIM_RESPONSE_INSURANCE = "ClaimResponse.insurance" [
        positive_int("sequence").required(),
        boolean("focal").required(),
        reference("coverage").required(),
        string("businessArrangement"),
        reference("claimResponse"),
    ]
    backbone CLAIM_RESPONSE_ERROR = "ClaimResponse.error" [
        positive_int("itemSequence"),
        positive_int("detailSequence"),
        positive_int("subDetailSequence"),
        codeable_concept("code").required(),
    ]

    resource COVERAGE = "Coverage" [
        identifier("identifier").many(),
        code("status").required().bind(codes::FINANCIAL_RESOURCE_STATUS),
        codeable_concept("type"),
        reference("policyHolder"),
        reference("subscriber"),
        string("subscriberId"),
        reference("beneficiary").required(),
        string("dependent"),
        codeable_concept("relationship"),
        period("period"),
        reference("payor").required().many(),
        backbone("class", &COVERAGE_CLASS).many(),
        positive_int("order"),
        string("network"),
        backbone("costToBeneficiary", &COVERAGE_COST_TO_BENEFICIARY).many(),
        boolean("subrogation"),
        reference("contract").many(),
    ]
    backbone COVERAGE_CLASS = "Coverage.class" [
        codeable_concept("type").required(),
        string("value").required(),
        string("name"),
    ]
    backbone COVERAGE_COST_TO_BENEFICIARY = "Coverage.costToBeneficiary" [
        codeable_concept("type"),
        choice("value", &["Quantity", "Money"]).required(),
        backbone("exception", &COVERAGE_COST_EXCEPTION).many(),
    ]
    backbone COVERAGE_COST_EXCEPTION = "Coverage.costToBeneficiary.exception" [
        codeable_concept("type").required(),
        period("period"),
    ]

    resource COVERAGE_ELIGIBILITY_REQUEST = "CoverageEligibilityRequest" [
        identifier("identifier").many(),
        code("status").required().bind(codes::FINANCIAL_RESOURCE_STATUS),
        codeable_concept("priority"),
        code("purpose").required().many().bind(codes::ELIGIBILITY_PURPOSE),
        reference("patient").required(),
        choice("serviced", SERVICED_TYPES),
        date_time("created").required(),
        reference("enterer"),
        reference("provider"),
        reference("insurer").required(),
        reference("facility"),
        backbone("supportingInfo", &COVERAGE_ELIGIBILITY_REQUEST_SUPPORTING_INFO).many(),
        backbone("insurance", &COVERAGE_ELIGIBILITY_REQUEST_INSURANCE).many(),
        backbone("item", &COVERAGE_ELIGIBILITY_REQUEST_ITEM).many(),
    ]
    backbone COVERAGE_ELIGIBILITY_REQUEST_SUPPORTING_INFO = "CoverageEligibilityRequest.supportingInfo" [
        positive_int("sequence").required(),
        reference("information").required(),
        boolean("appliesToAll"),
    ]
    backbone COVERAGE_ELIGIBILITY_REQUEST_INSURANCE = "CoverageEligibilityRequest.insurance" [
        boolean("focal"),
        reference("coverage").required(),
        string("businessArrangement"),
    ]
    backbone COVERAGE_ELIGIBILITY_REQUEST_ITEM = "CoverageEligibilityRequest.item" [
        positive_int("supportingInfoSequence").many(),
        codeable_concept("category"),
        codeable_concept("productOrService"),
        codeable_concept("modifier").many(),
        reference("provider"),
        simple_quantity("quantity"),
        money("unitPrice"),
        reference("facility"),
        backbone("diagnosis", &COVERAGE_ELIGIBILITY_REQUEST_DIAGNOSIS).many(),
        reference("detail").many(),
    ]
    backbone COVERAGE_ELIGIBILITY_REQUEST_DIAGNOSIS = "CoverageEligibilityRequest.item.diagnosis" [
        choice("diagnosis", &["CodeableConcept", "Reference"]),
    ]

    resource COVERAGE_ELIGIBILITY_RESPONSE = "CoverageEligibilityResponse" [
        identifier("identifier").many(),
        code("status").required().bind(codes::FINANCIAL_RESOURCE_STATUS),
        code("purpose").required().many().bind(codes::ELIGIBILITY_PURPOSE),
        reference("patient").required(),
        choice("serviced", SERVICED_TYPES),
        date_time("created").required(),
        reference("requestor"),
        reference("request").required(),
        code("outcome").required().bind(codes::REMITTANCE_OUTCOME),
        string("disposition"),
        reference("insurer").required(),
        backbone("insurance", &COVERAGE_ELIGIBILITY_RESPONSE_INSURANCE).many(),
        string("preAuthRef"),
        codeable_concept("form"),
        backbone("error", &COVERAGE_ELIGIBILITY_RESPONSE_ERROR).many(),
    ]
    backbone COVERAGE_ELIGIBILITY_RESPONSE_INSURANCE = "CoverageEligibilityResponse.insurance" [
        reference("coverage").required(),
        boolean("inforce"),
        period("benefitPeriod"),
        backbone("item", &COVERAGE_ELIGIBILITY_RESPONSE_ITEM).many(),
    ]
    backbone COVERAGE_ELIGIBILITY_RESPONSE_ITEM = "CoverageEligibilityResponse.insurance.item" [
        codeable_concept("category"),
        codeable_concept("productOrService"),
        codeable_concept("modifier").many(),
        reference("provider"),
        boolean("excluded"),
        string("name"),
        string("description"),
        codeable_concept("network"),
        codeable_concept("unit"),
        codeable_concept("term"),
        backbone("benefit", &COVERAGE_ELIGIBILITY_RESPONSE_BENEFIT).many(),
        boolean("authorizationRequired"),
        codeable_concept("authorizationSupporting").many(),
        uri("authorizationUrl"),
    ]
    backbone COVERAGE_ELIGIBILITY_RESPONSE_BENEFIT = "CoverageEligibilityResponse.insurance.item.benefit" [
        codeable_concept("type").required(),
        choice("allowed", BENEFIT_VALUE_TYPES),
        choice("used", BENEFIT_VALUE_TYPES),
    ]
    backbone COVERAGE_ELIGIBILITY_RESPONSE_ERROR = "CoverageEligibilityResponse.error" [
        codeable_concept("code").required(),
    ]

    resource ENROLLMENT_REQUEST = "EnrollmentRequest" [
        identifier("identifier").many(),
        code("status").bind(codes::FINANCIAL_RESOURCE_STATUS),
        date_time("created"),
        reference("insurer"),
        reference("provider"),
        reference("candidate"),
        reference("coverage"),
    ]

    resource ENROLLMENT_RESPONSE = "EnrollmentResponse" [
        identifier("identifier").many(),
        code("status").bind(codes::FINANCIAL_RESOURCE_STATUS),
        reference("request"),
        code("outcome").bind(codes::REMITTANCE_OUTCOME),
        string("disposition"),
        date_time("created"),
        reference("organization"),
        reference("requestProvider"),
    ]

    resource EXPLANATION_OF_BENEFIT = "ExplanationOfBenefit" [
        identifier("identifier").many(),
        code("status").required().bind(codes::FINANCIAL_RESOURCE_STATUS),
        codeable_concept("type").required(),
        codeable_concept("subType"),
        code("use").required().bind(codes::CLAIM_USE),
        reference("patient").required(),
        period("billablePeriod"),
        date_time("created").required(),
        reference("enterer"),
        reference("insurer").required(),
        reference("provider").required(),
        codeable_concept("priority"),
        codeable_concept("fundsReserveRequested"),
        codeable_concept("fundsReserve"),
        backbone("related", &CLAIM_RELATED).many(),
        reference("prescription"),
        reference("originalPrescription"),
        backbone("payee", &EXPLANATION_OF_BENEFIT_PAYEE),
        reference("referral"),
        reference("facility"),
        reference("claim"),
        reference("claimResponse"),
        code("outcome").required().bind(codes::REMITTANCE_OUTCOME),
        string("disposition"),
        string("preAuthRef").many(),
        period("preAuthRefPeriod").many(),
        backbone("careTeam", &CLAIM_CARE_TEAM).many(),
        backbone("supportingInfo", &EXPLANATION_OF_BENEFIT_SUPPORTING_INFO).many(),
        backbone("diagnosis", &CLAIM_DIAGNOSIS).many(),
        backbone("procedure", &CLAIM_PROCEDURE).many(),
        positive_int("precedence"),
        backbone("insurance", &EXPLANATION_OF_BENEFIT_INSURANCE).required().many(),
        backbone("accident", &EXPLANATION_OF_BENEFIT_ACCIDENT),
        backbone("item", &EXPLANATION_OF_BENEFIT_ITEM).many(),
        backbone("addItem", &CLAIM_RESPONSE_ADD_ITEM).many(),
        backbone("adjudication", &ADJUDICATION).many(),
        backbone("total", &CLAIM_RESPONSE_TOTAL).many(),
        backbone("payment", &EXPLANATION_OF_BENEFIT_PAYMENT),
        codeable_concept("formCode"),
        attachment("form"),
        backbone("processNote", &EXPLANATION_OF_BENEFIT_PROCESS_NOTE).many(),
        period("benefitPeriod"),
        backbone("benefitBalance", &EXPLANATION_OF_BENEFIT_BENEFIT_BALANCE).many(),
    ]
    backbone EXPLANATION_OF_BENEFIT_PAYEE = "ExplanationOfBenefit.payee" [
        codeable_concept("type"),
        reference("party"),
    ]
    backbone EXPLANATION_OF_BENEFIT_SUPPORTING_INFO = "ExplanationOfBenefit.supportingInfo" [
        positive_int("sequence").required(),
        codeable_concept("category").required(),
        codeable_concept("code"),
        choice("timing", SERVICED_TYPES),
        choice("value", &["boolean", "string", "Quantity", "Attachment", "Reference"]),
        coding("reason"),
    ]
    backbone EXPLANATION_OF_BENEFIT_INSURANCE = "ExplanationOfBenefit.insurance" [
        boolean("focal").required(),
        reference("coverage").required(),
        string("preAuthRef").many(),
    ]
    backbone EXPLANATION_OF_BENEFIT_ACCIDENT = "ExplanationOfBenefit.accident" [
        date("date"),
        codeable_concept("type"),
        choice("location", &["Address", "Reference"]),
    ]
    backbone EXPLANATION_OF_BENEFIT_ITEM = "ExplanationOfBenefit.item" [
        positive_int("sequence").required(),
        positive_int("careTeamSequence").many(),
        positive_int("diagnosisSequence").many(),
        positive_int("procedureSequence").many(),
        positive_int("informationSequence").many(),
        codeable_concept("revenue"),
        codeable_concept("category"),
        codeable_concept("productOrService").required(),
        codeable_concept("modifier").many(),
        codeable_concept("programCode").many(),
        choice("serviced", SERVICED_TYPES),
        choice("location", ITEM_LOCATION_TYPES),
        simple_quantity("quantity"),
        money("unitPrice"),
        decimal("factor"),
        money("net"),
        reference("udi").many(),
        codeable_concept("bodySite"),
        codeable_concept("subSite").many(),
        reference("encounter").many(),
        positive_int("noteNumber").many(),
        backbone("adjudication", &ADJUDICATION).many(),
        backbone("detail", &EXPLANATION_OF_BENEFIT_ITEM_DETAIL).many(),
    ]
    backbone EXPLANATION_OF_BENEFIT_ITEM_DETAIL = "ExplanationOfBenefit.item.detail" [
        positive_int("sequence").required(),
        codeable_concept("revenue"),
        codeable_concept("category"),
        codeable_concept("productOrService").required(),
        codeable_concept("modifier").many(),
        codeable_concept("programCode").many(),
        simple_quantity("quantity"),
        money("unitPrice"),
        decimal("factor"),
        money("net"),
        reference("udi").many(),
        positive_int("noteNumber").many(),
        backbone("adjudication", &ADJUDICATION).many(),
        backbone("subDetail", &EXPLANATION_OF_BENEFIT_ITEM_DETAIL_SUB_DETAIL).many(),
    ]
    backbone EXPLANATION_OF_BENEFIT_ITEM_DETAIL_SUB_DETAIL = "ExplanationOfBenefit.item.detail.subDetail" [
        positive_int("sequence").required(),
        codeable_concept("revenue"),
        codeable_concept("category"),
        codeable_concept("productOrService").required(),
        codeable_concept("modifier").many(),
        codeable_concept("programCode").many(),
        simple_quantity("quantity"),
        money("unitPrice"),
        decimal("factor"),
        money("net"),
        reference("udi").many(),
        positive_int("noteNumber").many(),
        backbone("adjudication", &ADJUDICATION).many(),
    ]
    backbone EXPLANATION_OF_BENEFIT_PAYMENT = "ExplanationOfBenefit.payment" [
        codeable_concept("type"),
        money("adjustment"),
        codeable_concept("adjustmentReason"),
        date("date"),
        money("amount"),
        identifier("identifier"),
    ]
    backbone EXPLANATION_OF_BENEFIT_PROCESS_NOTE = "ExplanationOfBenefit.processNote" [
        positive_int("number"),
        code("type").bind(codes::NOTE_TYPE),
        string("text"),
        codeable_concept("language"),
    ]
    backbone EXPLANATION_OF_BENEFIT_BENEFIT_BALANCE = "ExplanationOfBenefit.benefitBalance" [
        codeable_concept("category").required(),
        boolean("excluded"),
        string("name"),
        string("description"),
        codeable_concept("network"),
        codeable_concept("unit"),
        codeable_concept("term"),
        backbone("financial", &EXPLANATION_OF_BENEFIT_FINANCIAL).many(),
    ]
    backbone EXPLANATION_OF_BENEFIT_FINANCIAL = "ExplanationOfBenefit.benefitBalance.financial" [
        codeable_concept("type").required(),
        choice("allowed", BENEFIT_VALUE_TYPES),
        choice("used", &["unsignedInt", "Money"]),
    ]

    resource INVOICE = "Invoice" [
        identifier("identifier").many(),
        code("status").required().bind(codes::INVOICE_STATUS),
        string("cancelledReason"),
        codeable_concept("type"),
        reference("subject"),
        reference("recipient"),
        date_time("date"),
        backbone("participant", &INVOICE_PARTICIPANT).many(),
        reference("issuer"),
        reference("account"),
        backbone("lineItem", &INVOICE_LINE_ITEM).many(),
        backbone("totalPriceComponent", &PRICE_COMPONENT).many(),
        money("totalNet"),
        money("totalGross"),
        markdown("paymentTerms"),
        annotation("note").many(),
    ]
    backbone INVOICE_PARTICIPANT = "Invoice.participant" [
        codeable_concept("role"),
        reference("actor").required(),
    ]
    backbone INVOICE_LINE_ITEM = "Invoice.lineItem" [
        positive_int("sequence"),
        choice("chargeItem", &["Reference", "CodeableConcept"]).required(),
        backbone("priceComponent", &PRICE_COMPONENT).many(),
    ]

    resource PAYMENT_NOTICE = "PaymentNotice" [
        identifier("identifier").many(),
        code("status").required().bind(codes::FINANCIAL_RESOURCE_STATUS),
        reference("request"),
        reference("response"),
        date_time("created").required(),
        reference("provider"),
        reference("payment").required(),
        date("paymentDate"),
        reference("payee"),
        reference("recipient").required(),
        money("amount").required(),
        codeable_concept("paymentStatus"),
    ]

    resource PAYMENT_RECONCILIATION = "PaymentReconciliation" [
        identifier("identifier").many(),
        code("status").required().bind(codes::FINANCIAL_RESOURCE_STATUS),
        period("period"),
        date_time("created").required(),
        reference("paymentIssuer"),
        reference("request"),
        reference("requestor"),
        code("outcome").bind(codes::REMITTANCE_OUTCOME),
        string("disposition"),
        date("paymentDate").required(),
        money("paymentAmount").required(),
        identifier("paymentIdentifier"),
        backbone("detail", &PAYMENT_RECONCILIATION_DETAIL).many(),
        codeable_concept("formCode"),
        backbone("processNote", &PAYMENT_RECONCILIATION_PROCESS_NOTE).many(),
    ]
    backbone PAYMENT_RECONCILIATION_DETAIL = "PaymentReconciliation.detail" [
        identifier("identifier"),
        identifier("predecessor"),
        codeable_concept("type").required(),
        reference("request"),
        reference("submitter"),
        reference("response"),
        date("date"),
        reference("responsible"),
        reference("payee"),
        money("amount"),
    ]
    backbone PAYMENT_RECONCILIATION_PROCESS_NOTE = "PaymentReconciliation.processNote" [
        code("type").bind(codes::NOTE_TYPE),
        string("text"),
    ]

    resource INSURANCE_PLAN = "InsurancePlan" [
        identifier("identifier").many(),
        code("status").bind(codes::PUBLICATION_STATUS),
        codeable_concept("type").many(),
        string("name"),
        string("alias").many(),
        period("period"),
        reference("ownedBy"),
        reference("administeredBy"),
        reference("coverageArea").many(),
        backbone("contact", &INSURANCE_PLAN_CONTACT).many(),
        reference("endpoint").many(),
        reference("network").many(),
        backbone("coverage", &INSURANCE_PLAN_COVERAGE).many(),
        backbone("plan", &INSURANCE_PLAN_PLAN).many(),
    ]
    backbone INSURANCE_PLAN_CONTACT = "InsurancePlan.contact" [
        codeable_concept("purpose"),
        human_name("name"),
        contact_point("telecom").many(),
        address("address"),
    ]
    backbone INSURANCE_PLAN_COVERAGE = "InsurancePlan.coverage" [
        codeable_concept("type").required(),
        reference("network").many(),
        backbone("benefit", &INSURANCE_PLAN_COVERAGE_BENEFIT).required().many(),
    ]
    backbone INSURANCE_PLAN_COVERAGE_BENEFIT = "InsurancePlan.coverage.benefit" [
        codeable_concept("type").required(),
        string("requirement"),
        backbone("limit", &INSURANCE_PLAN_COVERAGE_BENEFIT_LIMIT).many(),
    ]
    backbone INSURANCE_PLAN_COVERAGE_BENEFIT_LIMIT = "InsurancePlan.coverage.benefit.limit" [
        quantity("value"),
        codeable_concept("code"),
    ]
    backbone INSURANCE_PLAN_PLAN = "InsurancePlan.plan" [
        identifier("identifier").many(),
        codeable_concept("type"),
        reference("coverageArea").many(),
        reference("network").many(),
        backbone("generalCost", &INSURANCE_PLAN_GENERAL_COST).many(),
        backbone("specificCost", &INSURANCE_PLAN_SPECIFIC_COST).many(),
    ]
    backbone INSURANCE_PLAN_GENERAL_COST = "InsurancePlan.plan.generalCost" [
        codeable_concept("type"),
        positive_int("groupSize"),
        money("cost"),
        string("comment"),
    ]
    backbone INSURANCE_PLAN_SPECIFIC_COST = "InsurancePlan.plan.specificCost" [
        codeable_concept("category").required(),
        backbone("benefit", &INSURANCE_PLAN_SPECIFIC_COST_BENEFIT).many(),
    ]
    backbone INSURANCE_PLAN_SPECIFIC_COST_BENEFIT = "InsurancePlan.plan.specificCost.benefit" [
        codeable_concept("type").required(),
        backbone("cost", &INSURANCE_PLAN_SPECIFIC_COST_BENEFIT_COST).many(),
    ]
    backbone INSURANCE_PLAN_SPECIFIC_COST_BENEFIT_COST = "InsurancePlan.plan.specificCost.benefit.cost" [
        codeable_concept("type").required(),
        codeable_concept("applicability"),
        codeable_concept("qualifiers").many(),
        quantity("value"),
    ]

    resource CONTRACT = "Contract" [
        identifier("identifier").many(),
        uri("url"),
        string("version"),
        code("status").bind(codes::CONTRACT_STATUS),
        codeable_concept("legalState"),
        reference("instantiatesCanonical"),
        uri("instantiatesUri"),
        codeable_concept("contentDerivative"),
        date_time("issued"),
        period("applies"),
        codeable_concept("expirationType"),
        reference("subject").many(),
        reference("authority").many(),
        reference("domain").many(),
        reference("site").many(),
        string("name"),
        string("title"),
        string("subtitle"),
        string("alias").many(),
        reference("author"),
        codeable_concept("scope"),
        choice("topic", &["CodeableConcept", "Reference"]),
        codeable_concept("type"),
        codeable_concept("subType").many(),
        backbone("contentDefinition", &CONTRACT_CONTENT_DEFINITION),
        backbone("term", &CONTRACT_TERM).many(),
        reference("supportingInfo").many(),
        reference("relevantHistory").many(),
        backbone("signer", &CONTRACT_SIGNER).many(),
        backbone("friendly", &CONTRACT_CONTENT).many(),
        backbone("legal", &CONTRACT_CONTENT).many(),
        backbone("rule", &CONTRACT_CONTENT).many(),
        choice("legallyBinding", &["Attachment", "Reference"]),
    ]
    backbone CONTRACT_CONTENT_DEFINITION = "Contract.contentDefinition" [
        codeable_concept("type").required(),
        codeable_concept("subType"),
        reference("publisher"),
        date_time("publicationDate"),
        code("publicationStatus").required(),
        markdown("copyright"),
    ]
    backbone CONTRACT_TERM = "Contract.term" [
        identifier("identifier"),
        date_time("issued"),
        period("applies"),
        choice("topic", &["CodeableConcept", "Reference"]),
        codeable_concept("type"),
        codeable_concept("subType"),
        string("text"),
        backbone("securityLabel", &CONTRACT_TERM_SECURITY_LABEL).many(),
        backbone("offer", &CONTRACT_TERM_OFFER).required(),
        backbone("asset", &CONTRACT_TERM_ASSET).many(),
        backbone("action", &CONTRACT_TERM_ACTION).many(),
        backbone("group", &CONTRACT_TERM).many(),
    ]
    backbone CONTRACT_TERM_SECURITY_LABEL = "Contract.term.securityLabel" [
        unsigned_int("number").many(),
        coding("classification").required(),
        coding("category").many(),
        coding("control").many(),
    ]
    backbone CONTRACT_TERM_OFFER = "Contract.term.offer" [
        identifier("identifier").many(),
        backbone("party", &CONTRACT_TERM_OFFER_PARTY).many(),
        reference("topic"),
        codeable_concept("type"),
        codeable_concept("decision"),
        codeable_concept("decisionMode").many(),
        backbone("answer", &CONTRACT_TERM_OFFER_ANSWER).many(),
        string("text"),
        string("linkId").many(),
        unsigned_int("securityLabelNumber").many(),
    ]
    backbone CONTRACT_TERM_OFFER_PARTY = "Contract.term.offer.party" [
        reference("reference").required().many(),
        codeable_concept("role").required(),
    ]
    backbone CONTRACT_TERM_OFFER_ANSWER = "Contract.term.offer.answer" [
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
    backbone CONTRACT_TERM_ASSET = "Contract.term.asset" [
        codeable_concept("scope"),
        codeable_concept("type").many(),
        reference("typeReference").many(),
        codeable_concept("subtype").many(),
        coding("relationship"),
        backbone("context", &CONTRACT_TERM_ASSET_CONTEXT).many(),
        string("condition"),
        codeable_concept("periodType").many(),
        period("period").many(),
        period("usePeriod").many(),
        string("text"),
        string("linkId").many(),
        backbone("answer", &CONTRACT_TERM_OFFER_ANSWER).many(),
        unsigned_int("securityLabelNumber").many(),
        backbone("valuedItem", &CONTRACT_TERM_ASSET_VALUED_ITEM).many(),
    ]
    backbone CONTRACT_TERM_ASSET_CONTEXT = "Contract.term.asset.context" [
        reference("reference"),
        codeable_concept("code").many(),
        string("text"),
    ]
    backbone CONTRACT_TERM_ASSET_VALUED_ITEM = "Contract.term.asset.valuedItem" [
        choice("entity", &["CodeableConcept", "Reference"]),
        identifier("identifier"),
        date_time("effectiveTime"),
        simple_quantity("quantity"),
        money("unitPrice"),
        decimal("factor"),
        decimal("points"),
        money("net"),
        string("payment"),
        date_time("paymentDate"),
        reference("responsible"),
        reference("recipient"),
        string("linkId").many(),
        unsigned_int("securityLabelNumber").many(),
    ]
    backbone CONTRACT_TERM_ACTION = "Contract.term.action" [
        boolean("doNotPerform"),
        codeable_concept("type").required(),
        backbone("subject", &CONTRACT_TERM_ACTION_SUBJECT).many(),
        codeable_concept("intent").required(),
        string("linkId").many(),
        codeable_concept("status").required(),
        reference("context"),
        string("contextLinkId").many(),
        choice("occurrence", &["dateTime", "Period", "Timing"]),
        reference("requester").many(),
        string("requesterLinkId").many(),
        codeable_concept("performerType").many(),
        codeable_concept("performerRole"),
        reference("performer"),
        string("performerLinkId").many(),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        string("reason").many(),
        string("reasonLinkId").many(),
        annotation("note").many(),
        unsigned_int("securityLabelNumber").many(),
    ]
    backbone CONTRACT_TERM_ACTION_SUBJECT = "Contract.term.action.subject" [
        reference("reference").required().many(),
        codeable_concept("role"),
    ]
    backbone CONTRACT_SIGNER = "Contract.signer" [
        coding("type").required(),
        reference("party").required(),
        signature("signature").required().many(),
    ]
    backbone CONTRACT_CONTENT = "Contract.friendly" [
        choice("content", &["Attachment", "Reference"]).required(),
    ]
}
