//! Administrative resources: people, organizations, places, devices, scheduling.

use super::codes;
use crate::shape::build::*;

fhir_shape! {
    resource PATIENT = "Patient" [
        identifier("identifier").many(),
        boolean("active"),
        human_name("name").many(),
        contact_point("telecom").many(),
        code("gender").bind(codes::ADMINISTRATIVE_GENDER),
        date("birthDate"),
        choice("deceased", &["boolean", "dateTime"]),
        address("address").many(),
        codeable_concept("maritalStatus"),
        choice("multipleBirth", &["boolean", "integer"]),
        attachment("photo").many(),
        backbone("contact", &PATIENT_CONTACT).many(),
        backbone("communication", &PATIENT_COMMUNICATION).many(),
        reference("generalPractitioner").many(),
        reference("managingOrganization"),
        backbone("link", &PATIENT_LINK).many(),
    ]
    backbone PATIENT_CONTACT = "Patient.contact" [
        codeable_concept("relationship").many(),
        human_name("name"),
        contact_point("telecom").many(),
        address("address"),
        code("gender").bind(codes::ADMINISTRATIVE_GENDER),
        reference("organization"),
        period("period"),
    ]
    backbone PATIENT_COMMUNICATION = "Patient.communication" [
        codeable_concept("language").required(),
        boolean("preferred"),
    ]
    backbone PATIENT_LINK = "Patient.link" [
        reference("other").required(),
        code("type").required().bind(codes::LINK_TYPE),
    ]

    resource PRACTITIONER = "Practitioner" [
        identifier("identifier").many(),
        boolean("active"),
        human_name("name").many(),
        contact_point("telecom").many(),
        address("address").many(),
        code("gender").bind(codes::ADMINISTRATIVE_GENDER),
        date("birthDate"),
        attachment("photo").many(),
        backbone("qualification", &PRACTITIONER_QUALIFICATION).many(),
        codeable_concept("communication").many(),
    ]
    backbone PRACTITIONER_QUALIFICATION = "Practitioner.qualification" [
        identifier("identifier").many(),
        codeable_concept("code").required(),
        period("period"),
        reference("issuer"),
    ]

    resource PRACTITIONER_ROLE = "PractitionerRole" [
        identifier("identifier").many(),
        boolean("active"),
        period("period"),
        reference("practitioner"),
        reference("organization"),
        codeable_concept("code").many(),
        codeable_concept("specialty").many(),
        reference("location").many(),
        reference("healthcareService").many(),
        contact_point("telecom").many(),
        backbone("availableTime", &PRACTITIONER_ROLE_AVAILABLE_TIME).many(),
        backbone("notAvailable", &NOT_AVAILABLE).many(),
        string("availabilityExceptions"),
        reference("endpoint").many(),
    ]
    backbone PRACTITIONER_ROLE_AVAILABLE_TIME = "PractitionerRole.availableTime" [
        code("daysOfWeek").many().bind(codes::DAYS_OF_WEEK),
        boolean("allDay"),
        time("availableStartTime"),
        time("availableEndTime"),
    ]
    backbone NOT_AVAILABLE = "PractitionerRole.notAvailable" [
        string("description").required(),
        period("during"),
    ]

    resource RELATED_PERSON = "RelatedPerson" [
        identifier("identifier").many(),
        boolean("active"),
        reference("patient").required(),
        codeable_concept("relationship").many(),
        human_name("name").many(),
        contact_point("telecom").many(),
        code("gender").bind(codes::ADMINISTRATIVE_GENDER),
        date("birthDate"),
        address("address").many(),
        attachment("photo").many(),
        period("period"),
        backbone("communication", &PATIENT_COMMUNICATION).many(),
    ]

    resource PERSON = "Person" [
        identifier("identifier").many(),
        human_name("name").many(),
        contact_point("telecom").many(),
        code("gender").bind(codes::ADMINISTRATIVE_GENDER),
        date("birthDate"),
        address("address").many(),
        attachment("photo"),
        reference("managingOrganization"),
        boolean("active"),
        backbone("link", &PERSON_LINK).many(),
    ]
    backbone PERSON_LINK = "Person.link" [
        reference("target").required(),
        code("assurance").bind(codes::IDENTITY_ASSURANCE_LEVEL),
    ]

    resource GROUP = "Group" [
        identifier("identifier").many(),
        boolean("active"),
        code("type").required().bind(codes::GROUP_TYPE),
        boolean("actual").required(),
        codeable_concept("code"),
        string("name"),
        unsigned_int("quantity"),
        reference("managingEntity"),
        backbone("characteristic", &GROUP_CHARACTERISTIC).many(),
        backbone("member", &GROUP_MEMBER).many(),
    ]
    backbone GROUP_CHARACTERISTIC = "Group.characteristic" [
        codeable_concept("code").required(),
        choice("value", &["CodeableConcept", "boolean", "Quantity", "Range", "Reference"]).required(),
        boolean("exclude").required(),
        period("period"),
    ]
    backbone GROUP_MEMBER = "Group.member" [
        reference("entity").required(),
        period("period"),
        boolean("inactive"),
    ]

    resource ORGANIZATION = "Organization" [
        identifier("identifier").many(),
        boolean("active"),
        codeable_concept("type").many(),
        string("name"),
        string("alias").many(),
        contact_point("telecom").many(),
        address("address").many(),
        reference("partOf"),
        backbone("contact", &ORGANIZATION_CONTACT).many(),
        reference("endpoint").many(),
    ]
    backbone ORGANIZATION_CONTACT = "Organization.contact" [
        codeable_concept("purpose"),
        human_name("name"),
        contact_point("telecom").many(),
        address("address"),
    ]

    resource ORGANIZATION_AFFILIATION = "OrganizationAffiliation" [
        identifier("identifier").many(),
        boolean("active"),
        period("period"),
        reference("organization"),
        reference("participatingOrganization"),
        reference("network").many(),
        codeable_concept("code").many(),
        codeable_concept("specialty").many(),
        reference("location").many(),
        reference("healthcareService").many(),
        contact_point("telecom").many(),
        reference("endpoint").many(),
    ]

    resource HEALTHCARE_SERVICE = "HealthcareService" [
        identifier("identifier").many(),
        boolean("active"),
        reference("providedBy"),
        codeable_concept("category").many(),
        codeable_concept("type").many(),
        codeable_concept("specialty").many(),
        reference("location").many(),
        string("name"),
        string("comment"),
        markdown("extraDetails"),
        attachment("photo"),
        contact_point("telecom").many(),
        reference("coverageArea").many(),
        codeable_concept("serviceProvisionCode").many(),
        backbone("eligibility", &HEALTHCARE_SERVICE_ELIGIBILITY).many(),
        codeable_concept("program").many(),
        codeable_concept("characteristic").many(),
        codeable_concept("communication").many(),
        codeable_concept("referralMethod").many(),
        boolean("appointmentRequired"),
        backbone("availableTime", &PRACTITIONER_ROLE_AVAILABLE_TIME).many(),
        backbone("notAvailable", &NOT_AVAILABLE).many(),
        string("availabilityExceptions"),
        reference("endpoint").many(),
    ]
    backbone HEALTHCARE_SERVICE_ELIGIBILITY = "HealthcareService.eligibility" [
        codeable_concept("code"),
        markdown("comment"),
    ]

    resource ENDPOINT = "Endpoint" [
        identifier("identifier").many(),
        code("status").required().bind(codes::ENDPOINT_STATUS),
        coding("connectionType").required(),
        string("name"),
        reference("managingOrganization"),
        contact_point("contact").many(),
        period("period"),
        codeable_concept("payloadType").required().many(),
        code("payloadMimeType").many(),
        url("address").required(),
        string("header").many(),
    ]

    resource LOCATION = "Location" [
        identifier("identifier").many(),
        code("status").bind(codes::LOCATION_STATUS),
        coding("operationalStatus"),
        string("name"),
        string("alias").many(),
        string("description"),
        code("mode").bind(codes::LOCATION_MODE),
        codeable_concept("type").many(),
        contact_point("telecom").many(),
        address("address"),
        codeable_concept("physicalType"),
        backbone("position", &LOCATION_POSITION),
        reference("managingOrganization"),
        reference("partOf"),
        backbone("hoursOfOperation", &LOCATION_HOURS_OF_OPERATION).many(),
        string("availabilityExceptions"),
        reference("endpoint").many(),
    ]
    backbone LOCATION_POSITION = "Location.position" [
        decimal("longitude").required(),
        decimal("latitude").required(),
        decimal("altitude"),
    ]
    backbone LOCATION_HOURS_OF_OPERATION = "Location.hoursOfOperation" [
        code("daysOfWeek").many().bind(codes::DAYS_OF_WEEK),
        boolean("allDay"),
        time("openingTime"),
        time("closingTime"),
    ]

    resource DEVICE = "Device" [
        identifier("identifier").many(),
        reference("definition"),
        backbone("udiCarrier", &DEVICE_UDI_CARRIER).many(),
        code("status").bind(codes::DEVICE_STATUS),
        codeable_concept("statusReason").many(),
        string("distinctIdentifier"),
        string("manufacturer"),
        date_time("manufactureDate"),
        date_time("expirationDate"),
        string("lotNumber"),
        string("serialNumber"),
        backbone("deviceName", &DEVICE_DEVICE_NAME).many(),
        string("modelNumber"),
        string("partNumber"),
        codeable_concept("type"),
        backbone("specialization", &DEVICE_SPECIALIZATION).many(),
        backbone("version", &DEVICE_VERSION).many(),
        backbone("property", &DEVICE_PROPERTY).many(),
        reference("patient"),
        reference("owner"),
        contact_point("contact").many(),
        reference("location"),
        uri("url"),
        annotation("note").many(),
        codeable_concept("safety").many(),
        reference("parent"),
    ]
    backbone DEVICE_UDI_CARRIER = "Device.udiCarrier" [
        string("deviceIdentifier"),
        uri("issuer"),
        uri("jurisdiction"),
        base64_binary("carrierAIDC"),
        string("carrierHRF"),
        code("entryType").bind(codes::UDI_ENTRY_TYPE),
    ]
    backbone DEVICE_DEVICE_NAME = "Device.deviceName" [
        string("name").required(),
        code("type").required().bind(codes::DEVICE_NAME_TYPE),
    ]
    backbone DEVICE_SPECIALIZATION = "Device.specialization" [
        codeable_concept("systemType").required(),
        string("version"),
    ]
    backbone DEVICE_VERSION = "Device.version" [
        codeable_concept("type"),
        identifier("component"),
        string("value").required(),
    ]
    backbone DEVICE_PROPERTY = "Device.property" [
        codeable_concept("type").required(),
        quantity("valueQuantity").many(),
        codeable_concept("valueCode").many(),
    ]

    resource DEVICE_DEFINITION = "DeviceDefinition" [
        identifier("identifier").many(),
        backbone("udiDeviceIdentifier", &DEVICE_DEFINITION_UDI).many(),
        choice("manufacturer", &["string", "Reference"]),
        backbone("deviceName", &DEVICE_DEVICE_NAME).many(),
        string("modelNumber"),
        codeable_concept("type"),
        backbone("specialization", &DEVICE_DEFINITION_SPECIALIZATION).many(),
        string("version").many(),
        codeable_concept("safety").many(),
        product_shelf_life("shelfLifeStorage").many(),
        prod_characteristic("physicalCharacteristics"),
        codeable_concept("languageCode").many(),
        backbone("capability", &DEVICE_DEFINITION_CAPABILITY).many(),
        backbone("property", &DEVICE_PROPERTY).many(),
        reference("owner"),
        contact_point("contact").many(),
        uri("url"),
        uri("onlineInformation"),
        annotation("note").many(),
        quantity("quantity"),
        reference("parentDevice"),
        backbone("material", &DEVICE_DEFINITION_MATERIAL).many(),
    ]
    backbone DEVICE_DEFINITION_UDI = "DeviceDefinition.udiDeviceIdentifier" [
        string("deviceIdentifier").required(),
        uri("issuer").required(),
        uri("jurisdiction").required(),
    ]
    backbone DEVICE_DEFINITION_SPECIALIZATION = "DeviceDefinition.specialization" [
        string("systemType").required(),
        string("version"),
    ]
    backbone DEVICE_DEFINITION_CAPABILITY = "DeviceDefinition.capability" [
        codeable_concept("type").required(),
        codeable_concept("description").many(),
    ]
    backbone DEVICE_DEFINITION_MATERIAL = "DeviceDefinition.material" [
        codeable_concept("substance").required(),
        boolean("alternate"),
        boolean("allergenicIndicator"),
    ]

    resource DEVICE_METRIC = "DeviceMetric" [
        identifier("identifier").many(),
        codeable_concept("type").required(),
        codeable_concept("unit"),
        reference("source"),
        reference("parent"),
        code("operationalStatus").bind(codes::DEVICE_METRIC_OPERATIONAL_STATUS),
        code("color").bind(codes::DEVICE_METRIC_COLOR),
        code("category").required().bind(codes::DEVICE_METRIC_CATEGORY),
        timing("measurementPeriod"),
        backbone("calibration", &DEVICE_METRIC_CALIBRATION).many(),
    ]
    backbone DEVICE_METRIC_CALIBRATION = "DeviceMetric.calibration" [
        code("type").bind(codes::DEVICE_METRIC_CALIBRATION_TYPE),
        code("state").bind(codes::DEVICE_METRIC_CALIBRATION_STATE),
        instant("time"),
    ]

    resource SUBSTANCE = "Substance" [
        identifier("identifier").many(),
        code("status").bind(codes::SUBSTANCE_STATUS),
        codeable_concept("category").many(),
        codeable_concept("code").required(),
        string("description"),
        backbone("instance", &SUBSTANCE_INSTANCE).many(),
        backbone("ingredient", &SUBSTANCE_INGREDIENT).many(),
    ]
    backbone SUBSTANCE_INSTANCE = "Substance.instance" [
        identifier("identifier"),
        date_time("expiry"),
        simple_quantity("quantity"),
    ]
    backbone SUBSTANCE_INGREDIENT = "Substance.ingredient" [
        ratio("quantity"),
        choice("substance", &["CodeableConcept", "Reference"]).required(),
    ]

    resource BIOLOGICALLY_DERIVED_PRODUCT = "BiologicallyDerivedProduct" [
        identifier("identifier").many(),
        code("productCategory").bind(codes::PRODUCT_CATEGORY),
        codeable_concept("productCode"),
        code("status").bind(codes::PRODUCT_STATUS),
        reference("request").many(),
        integer("quantity"),
        reference("parent").many(),
        backbone("collection", &BIOLOGICALLY_DERIVED_PRODUCT_COLLECTION),
        backbone("processing", &BIOLOGICALLY_DERIVED_PRODUCT_PROCESSING).many(),
        backbone("manipulation", &BIOLOGICALLY_DERIVED_PRODUCT_MANIPULATION),
        backbone("storage", &BIOLOGICALLY_DERIVED_PRODUCT_STORAGE).many(),
    ]
    backbone BIOLOGICALLY_DERIVED_PRODUCT_COLLECTION = "BiologicallyDerivedProduct.collection" [
        reference("collector"),
        reference("source"),
        choice("collected", &["dateTime", "Period"]),
    ]
    backbone BIOLOGICALLY_DERIVED_PRODUCT_PROCESSING = "BiologicallyDerivedProduct.processing" [
        string("description"),
        codeable_concept("procedure"),
        reference("additive"),
        choice("time", &["dateTime", "Period"]),
    ]
    backbone BIOLOGICALLY_DERIVED_PRODUCT_MANIPULATION = "BiologicallyDerivedProduct.manipulation" [
        string("description"),
        choice("time", &["dateTime", "Period"]),
    ]
    backbone BIOLOGICALLY_DERIVED_PRODUCT_STORAGE = "BiologicallyDerivedProduct.storage" [
        string("description"),
        decimal("temperature"),
        code("scale").bind(codes::PRODUCT_STORAGE_SCALE),
        period("duration"),
    ]

    resource ENCOUNTER = "Encounter" [
        identifier("identifier").many(),
        code("status").required().bind(codes::ENCOUNTER_STATUS),
        backbone("statusHistory", &ENCOUNTER_STATUS_HISTORY).many(),
        coding("class").required(),
        backbone("classHistory", &ENCOUNTER_CLASS_HISTORY).many(),
        codeable_concept("type").many(),
        codeable_concept("serviceType"),
        codeable_concept("priority"),
        reference("subject"),
        reference("episodeOfCare").many(),
        reference("basedOn").many(),
        backbone("participant", &ENCOUNTER_PARTICIPANT).many(),
        reference("appointment").many(),
        period("period"),
        duration("length"),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        backbone("diagnosis", &ENCOUNTER_DIAGNOSIS).many(),
        reference("account").many(),
        backbone("hospitalization", &ENCOUNTER_HOSPITALIZATION),
        backbone("location", &ENCOUNTER_LOCATION).many(),
        reference("serviceProvider"),
        reference("partOf"),
    ]
    backbone ENCOUNTER_STATUS_HISTORY = "Encounter.statusHistory" [
        code("status").required().bind(codes::ENCOUNTER_STATUS),
        period("period").required(),
    ]
    backbone ENCOUNTER_CLASS_HISTORY = "Encounter.classHistory" [
        coding("class").required(),
        period("period").required(),
    ]
    backbone ENCOUNTER_PARTICIPANT = "Encounter.participant" [
        codeable_concept("type").many(),
        period("period"),
        reference("individual"),
    ]
    backbone ENCOUNTER_DIAGNOSIS = "Encounter.diagnosis" [
        reference("condition").required(),
        codeable_concept("use"),
        positive_int("rank"),
    ]
    backbone ENCOUNTER_HOSPITALIZATION = "Encounter.hospitalization" [
        identifier("preAdmissionIdentifier"),
        reference("origin"),
        codeable_concept("admitSource"),
        codeable_concept("reAdmission"),
        codeable_concept("dietPreference").many(),
        codeable_concept("specialCourtesy").many(),
        codeable_concept("specialArrangement").many(),
        reference("destination"),
        codeable_concept("dischargeDisposition"),
    ]
    backbone ENCOUNTER_LOCATION = "Encounter.location" [
        reference("location").required(),
        code("status").bind(codes::ENCOUNTER_LOCATION_STATUS),
        codeable_concept("physicalType"),
        period("period"),
    ]

    resource EPISODE_OF_CARE = "EpisodeOfCare" [
        identifier("identifier").many(),
        code("status").required().bind(codes::EPISODE_OF_CARE_STATUS),
        backbone("statusHistory", &EPISODE_OF_CARE_STATUS_HISTORY).many(),
        codeable_concept("type").many(),
        backbone("diagnosis", &EPISODE_OF_CARE_DIAGNOSIS).many(),
        reference("patient").required(),
        reference("managingOrganization"),
        period("period"),
        reference("referralRequest").many(),
        reference("careManager"),
        reference("team").many(),
        reference("account").many(),
    ]
    backbone EPISODE_OF_CARE_STATUS_HISTORY = "EpisodeOfCare.statusHistory" [
        code("status").required().bind(codes::EPISODE_OF_CARE_STATUS),
        period("period").required(),
    ]
    backbone EPISODE_OF_CARE_DIAGNOSIS = "EpisodeOfCare.diagnosis" [
        reference("condition").required(),
        codeable_concept("role"),
        positive_int("rank"),
    ]

    resource FLAG = "Flag" [
        identifier("identifier").many(),
        code("status").required().bind(codes::FLAG_STATUS),
        codeable_concept("category").many(),
        codeable_concept("code").required(),
        reference("subject").required(),
        period("period"),
        reference("encounter"),
        reference("author"),
    ]

    resource LIST = "List" [
        identifier("identifier").many(),
        code("status").required().bind(codes::LIST_STATUS),
        code("mode").required().bind(codes::LIST_MODE),
        string("title"),
        codeable_concept("code"),
        reference("subject"),
        reference("encounter"),
        date_time("date"),
        reference("source"),
        codeable_concept("orderedBy"),
        annotation("note").many(),
        backbone("entry", &LIST_ENTRY).many(),
        codeable_concept("emptyReason"),
    ]
    backbone LIST_ENTRY = "List.entry" [
        codeable_concept("flag"),
        boolean("deleted"),
        date_time("date"),
        reference("item").required(),
    ]

    resource SCHEDULE = "Schedule" [
        identifier("identifier").many(),
        boolean("active"),
        codeable_concept("serviceCategory").many(),
        codeable_concept("serviceType").many(),
        codeable_concept("specialty").many(),
        reference("actor").required().many(),
        period("planningHorizon"),
        string("comment"),
    ]

    resource SLOT = "Slot" [
        identifier("identifier").many(),
        codeable_concept("serviceCategory").many(),
        codeable_concept("serviceType").many(),
        codeable_concept("specialty").many(),
        codeable_concept("appointmentType"),
        reference("schedule").required(),
        code("status").required().bind(codes::SLOT_STATUS),
        instant("start").required(),
        instant("end").required(),
        boolean("overbooked"),
        string("comment"),
    ]

    resource APPOINTMENT = "Appointment" [
        identifier("identifier").many(),
        code("status").required().bind(codes::APPOINTMENT_STATUS),
        codeable_concept("cancelationReason"),
        codeable_concept("serviceCategory").many(),
        codeable_concept("serviceType").many(),
        codeable_concept("specialty").many(),
        codeable_concept("appointmentType"),
        codeable_concept("reasonCode").many(),
        reference("reasonReference").many(),
        unsigned_int("priority"),
        string("description"),
        reference("supportingInformation").many(),
        instant("start"),
        instant("end"),
        positive_int("minutesDuration"),
        reference("slot").many(),
        date_time("created"),
        string("comment"),
        string("patientInstruction"),
        reference("basedOn").many(),
        backbone("participant", &APPOINTMENT_PARTICIPANT).required().many(),
        period("requestedPeriod").many(),
    ]
    backbone APPOINTMENT_PARTICIPANT = "Appointment.participant" [
        codeable_concept("type").many(),
        reference("actor"),
        code("required").bind(codes::PARTICIPANT_REQUIRED),
        code("status").required().bind(codes::PARTICIPATION_STATUS),
        period("period"),
    ]

    resource APPOINTMENT_RESPONSE = "AppointmentResponse" [
        identifier("identifier").many(),
        reference("appointment").required(),
        instant("start"),
        instant("end"),
        codeable_concept("participantType").many(),
        reference("actor"),
        code("participantStatus").required().bind(codes::PARTICIPATION_STATUS),
        string("comment"),
    ]

    resource VERIFICATION_RESULT = "VerificationResult" [
        reference("target").many(),
        string("targetLocation").many(),
        codeable_concept("need"),
        code("status").required().bind(codes::VERIFICATION_RESULT_STATUS),
        date_time("statusDate"),
        codeable_concept("validationType"),
        codeable_concept("validationProcess").many(),
        timing("frequency"),
        date_time("lastPerformed"),
        date("nextScheduled"),
        codeable_concept("failureAction"),
        backbone("primarySource", &VERIFICATION_RESULT_PRIMARY_SOURCE).many(),
        backbone("attestation", &VERIFICATION_RESULT_ATTESTATION),
        backbone("validator", &VERIFICATION_RESULT_VALIDATOR).many(),
    ]
    backbone VERIFICATION_RESULT_PRIMARY_SOURCE = "VerificationResult.primarySource" [
        reference("who"),
        codeable_concept("type").many(),
        codeable_concept("communicationMethod").many(),
        codeable_concept("validationStatus"),
        date_time("validationDate"),
        codeable_concept("canPushUpdates"),
        codeable_concept("pushTypeAvailable").many(),
    ]
    backbone VERIFICATION_RESULT_ATTESTATION = "VerificationResult.attestation" [
        reference("who"),
        reference("onBehalfOf"),
        codeable_concept("communicationMethod"),
        date("date"),
        string("sourceIdentityCertificate"),
        string("proxyIdentityCertificate"),
        signature("proxySignature"),
        signature("sourceSignature"),
    ]
    backbone VERIFICATION_RESULT_VALIDATOR = "VerificationResult.validator" [
        reference("organization").required(),
        string("identityCertificate"),
        signature("attestationSignature"),
    ]
}
