//! Regulated product and substance definition resources.

use crate::shape::build::*;

fhir_shape! {
    resource MEDICINAL_PRODUCT = "MedicinalProduct" [
        identifier("identifier").many(),
        codeable_concept("type"),
        coding("domain"),
        codeable_concept("combinedPharmaceuticalDoseForm"),
        codeable_concept("legalStatusOfSupply"),
        codeable_concept("additionalMonitoringIndicator"),
        string("specialMeasures").many(),
        codeable_concept("paediatricUseIndicator"),
        codeable_concept("productClassification").many(),
        marketing_status("marketingStatus").many(),
        reference("pharmaceuticalProduct").many(),
        reference("packagedMedicinalProduct").many(),
        reference("attachedDocument").many(),
        reference("masterFile").many(),
        reference("contact").many(),
        reference("clinicalTrial").many(),
        backbone("name", &MEDICINAL_PRODUCT_NAME).required().many(),
        identifier("crossReference").many(),
        backbone("manufacturingBusinessOperation", &MEDICINAL_PRODUCT_OPERATION).many(),
        backbone("specialDesignation", &MEDICINAL_PRODUCT_SPECIAL_DESIGNATION).many(),
    ]
    backbone MEDICINAL_PRODUCT_NAME = "MedicinalProduct.name" [
        string("productName").required(),
        backbone("namePart", &MEDICINAL_PRODUCT_NAME_PART).many(),
        backbone("countryLanguage", &MEDICINAL_PRODUCT_COUNTRY_LANGUAGE).many(),
    ]
    backbone MEDICINAL_PRODUCT_NAME_PART = "MedicinalProduct.name.namePart" [
        string("part").required(),
        coding("type").required(),
    ]
    backbone MEDICINAL_PRODUCT_COUNTRY_LANGUAGE = "MedicinalProduct.name.countryLanguage" [
        codeable_concept("country").required(),
        codeable_concept("jurisdiction"),
        codeable_concept("language").required(),
    ]
    backbone MEDICINAL_PRODUCT_OPERATION = "MedicinalProduct.manufacturingBusinessOperation" [
        codeable_concept("operationType"),
        identifier("authorisationReferenceNumber"),
        date_time("effectiveDate"),
        codeable_concept("confidentialityIndicator"),
        reference("manufacturer").many(),
        reference("regulator"),
    ]
    backbone MEDICINAL_PRODUCT_SPECIAL_DESIGNATION = "MedicinalProduct.specialDesignation" [
        identifier("identifier").many(),
        codeable_concept("type"),
        codeable_concept("intendedUse"),
        choice("indication", &["CodeableConcept", "Reference"]),
        codeable_concept("status"),
        date_time("date"),
        codeable_concept("species"),
    ]

    resource MEDICINAL_PRODUCT_AUTHORIZATION = "MedicinalProductAuthorization" [
        identifier("identifier").many(),
        reference("subject"),
        codeable_concept("country").many(),
        codeable_concept("jurisdiction").many(),
        codeable_concept("status"),
        date_time("statusDate"),
        date_time("restoreDate"),
        period("validityPeriod"),
        period("dataExclusivityPeriod"),
        date_time("dateOfFirstAuthorization"),
        date_time("internationalBirthDate"),
        codeable_concept("legalBasis"),
        backbone("jurisdictionalAuthorization", &MEDICINAL_PRODUCT_AUTHORIZATION_JURISDICTIONAL).many(),
        reference("holder"),
        reference("regulator"),
        backbone("procedure", &MEDICINAL_PRODUCT_AUTHORIZATION_PROCEDURE),
    ]
    backbone MEDICINAL_PRODUCT_AUTHORIZATION_JURISDICTIONAL = "MedicinalProductAuthorization.jurisdictionalAuthorization" [
        identifier("identifier").many(),
        codeable_concept("country"),
        codeable_concept("jurisdiction").many(),
        codeable_concept("legalStatusOfSupply"),
        period("validityPeriod"),
    ]
    backbone MEDICINAL_PRODUCT_AUTHORIZATION_PROCEDURE = "MedicinalProductAuthorization.procedure" [
        identifier("identifier"),
        codeable_concept("type").required(),
        choice("date", &["Period", "dateTime"]),
        backbone("application", &MEDICINAL_PRODUCT_AUTHORIZATION_PROCEDURE).many(),
    ]

    resource MEDICINAL_PRODUCT_CONTRAINDICATION = "MedicinalProductContraindication" [
        reference("subject").many(),
        codeable_concept("disease"),
        codeable_concept("diseaseStatus"),
        codeable_concept("comorbidity").many(),
        reference("therapeuticIndication").many(),
        backbone("otherTherapy", &MEDICINAL_PRODUCT_OTHER_THERAPY).many(),
        population("population").many(),
    ]
    backbone MEDICINAL_PRODUCT_OTHER_THERAPY = "MedicinalProductContraindication.otherTherapy" [
        codeable_concept("therapyRelationshipType").required(),
        choice("medication", &["CodeableConcept", "Reference"]).required(),
    ]

    resource MEDICINAL_PRODUCT_INDICATION = "MedicinalProductIndication" [
        reference("subject").many(),
        codeable_concept("diseaseSymptomProcedure"),
        codeable_concept("diseaseStatus"),
        codeable_concept("comorbidity").many(),
        codeable_concept("intendedEffect"),
        quantity("duration"),
        backbone("otherTherapy", &MEDICINAL_PRODUCT_OTHER_THERAPY).many(),
        reference("undesirableEffect").many(),
        population("population").many(),
    ]

    resource MEDICINAL_PRODUCT_INGREDIENT = "MedicinalProductIngredient" [
        identifier("identifier"),
        codeable_concept("role").required(),
        boolean("allergenicIndicator"),
        reference("manufacturer").many(),
        backbone("specifiedSubstance", &MEDICINAL_PRODUCT_INGREDIENT_SPECIFIED_SUBSTANCE).many(),
        backbone("substance", &MEDICINAL_PRODUCT_INGREDIENT_SUBSTANCE),
    ]
    backbone MEDICINAL_PRODUCT_INGREDIENT_SPECIFIED_SUBSTANCE = "MedicinalProductIngredient.specifiedSubstance" [
        codeable_concept("code").required(),
        codeable_concept("group").required(),
        codeable_concept("confidentiality"),
        backbone("strength", &MEDICINAL_PRODUCT_INGREDIENT_STRENGTH).many(),
    ]
    backbone MEDICINAL_PRODUCT_INGREDIENT_STRENGTH = "MedicinalProductIngredient.specifiedSubstance.strength" [
        ratio("presentation").required(),
        ratio("presentationLowLimit"),
        ratio("concentration"),
        ratio("concentrationLowLimit"),
        string("measurementPoint"),
        codeable_concept("country").many(),
        backbone("referenceStrength", &MEDICINAL_PRODUCT_INGREDIENT_REFERENCE_STRENGTH).many(),
    ]
    backbone MEDICINAL_PRODUCT_INGREDIENT_REFERENCE_STRENGTH = "MedicinalProductIngredient.specifiedSubstance.strength.referenceStrength" [
        codeable_concept("substance"),
        ratio("strength").required(),
        ratio("strengthLowLimit"),
        string("measurementPoint"),
        codeable_concept("country").many(),
    ]
    backbone MEDICINAL_PRODUCT_INGREDIENT_SUBSTANCE = "MedicinalProductIngredient.substance" [
        codeable_concept("code").required(),
        backbone("strength", &MEDICINAL_PRODUCT_INGREDIENT_STRENGTH).many(),
    ]

    resource MEDICINAL_PRODUCT_INTERACTION = "MedicinalProductInteraction" [
        reference("subject").many(),
        string("description"),
        backbone("interactant", &MEDICINAL_PRODUCT_INTERACTION_INTERACTANT).many(),
        codeable_concept("type"),
        codeable_concept("effect"),
        codeable_concept("incidence"),
        codeable_concept("management"),
    ]
    backbone MEDICINAL_PRODUCT_INTERACTION_INTERACTANT = "MedicinalProductInteraction.interactant" [
        choice("item", &["Reference", "CodeableConcept"]).required(),
    ]

    resource MEDICINAL_PRODUCT_MANUFACTURED = "MedicinalProductManufactured" [
        codeable_concept("manufacturedDoseForm").required(),
        codeable_concept("unitOfPresentation"),
        quantity("quantity").required(),
        reference("manufacturer").many(),
        reference("ingredient").many(),
        prod_characteristic("physicalCharacteristics"),
        codeable_concept("otherCharacteristics").many(),
    ]

    resource MEDICINAL_PRODUCT_PACKAGED = "MedicinalProductPackaged" [
        identifier("identifier").many(),
        reference("subject").many(),
        string("description"),
        codeable_concept("legalStatusOfSupply"),
        marketing_status("marketingStatus").many(),
        reference("marketingAuthorization"),
        reference("manufacturer").many(),
        backbone("batchIdentifier", &MEDICINAL_PRODUCT_PACKAGED_BATCH_IDENTIFIER).many(),
        backbone("packageItem", &MEDICINAL_PRODUCT_PACKAGED_PACKAGE_ITEM).required().many(),
    ]
    backbone MEDICINAL_PRODUCT_PACKAGED_BATCH_IDENTIFIER = "MedicinalProductPackaged.batchIdentifier" [
        identifier("outerPackaging").required(),
        identifier("immediatePackaging"),
    ]
    backbone MEDICINAL_PRODUCT_PACKAGED_PACKAGE_ITEM = "MedicinalProductPackaged.packageItem" [
        identifier("identifier").many(),
        codeable_concept("type").required(),
        quantity("quantity").required(),
        codeable_concept("material").many(),
        codeable_concept("alternateMaterial").many(),
        reference("device").many(),
        reference("manufacturedItem").many(),
        backbone("packageItem", &MEDICINAL_PRODUCT_PACKAGED_PACKAGE_ITEM).many(),
        prod_characteristic("physicalCharacteristics"),
        codeable_concept("otherCharacteristics").many(),
        product_shelf_life("shelfLifeStorage").many(),
        reference("manufacturer").many(),
    ]

    resource MEDICINAL_PRODUCT_PHARMACEUTICAL = "MedicinalProductPharmaceutical" [
        identifier("identifier").many(),
        codeable_concept("administrableDoseForm").required(),
        codeable_concept("unitOfPresentation"),
        reference("ingredient").many(),
        reference("device").many(),
        backbone("characteristics", &MEDICINAL_PRODUCT_PHARMACEUTICAL_CHARACTERISTICS).many(),
        backbone("routeOfAdministration", &MEDICINAL_PRODUCT_PHARMACEUTICAL_ROUTE).required().many(),
    ]
    backbone MEDICINAL_PRODUCT_PHARMACEUTICAL_CHARACTERISTICS = "MedicinalProductPharmaceutical.characteristics" [
        codeable_concept("code").required(),
        codeable_concept("status"),
    ]
    backbone MEDICINAL_PRODUCT_PHARMACEUTICAL_ROUTE = "MedicinalProductPharmaceutical.routeOfAdministration" [
        codeable_concept("code").required(),
        quantity("firstDose"),
        quantity("maxSingleDose"),
        quantity("maxDosePerDay"),
        ratio("maxDosePerTreatmentPeriod"),
        duration("maxTreatmentPeriod"),
        backbone("targetSpecies", &MEDICINAL_PRODUCT_PHARMACEUTICAL_TARGET_SPECIES).many(),
    ]
    backbone MEDICINAL_PRODUCT_PHARMACEUTICAL_TARGET_SPECIES = "MedicinalProductPharmaceutical.routeOfAdministration.targetSpecies" [
        codeable_concept("code").required(),
        backbone("withdrawalPeriod", &MEDICINAL_PRODUCT_PHARMACEUTICAL_WITHDRAWAL_PERIOD).many(),
    ]
    backbone MEDICINAL_PRODUCT_PHARMACEUTICAL_WITHDRAWAL_PERIOD = "MedicinalProductPharmaceutical.routeOfAdministration.targetSpecies.withdrawalPeriod" [
        codeable_concept("tissue").required(),
        quantity("value").required(),
        string("supportingInformation"),
    ]

    resource MEDICINAL_PRODUCT_UNDESIRABLE_EFFECT = "MedicinalProductUndesirableEffect" [
        reference("subject").many(),
        codeable_concept("symptomConditionEffect"),
        codeable_concept("classification"),
        codeable_concept("frequencyOfOccurrence"),
        population("population").many(),
    ]

    resource SUBSTANCE_NUCLEIC_ACID = "SubstanceNucleicAcid" [
        codeable_concept("sequenceType"),
        integer("numberOfSubunits"),
        string("areaOfHybridisation"),
        codeable_concept("oligoNucleotideType"),
        backbone("subunit", &SUBSTANCE_NUCLEIC_ACID_SUBUNIT).many(),
    ]
    backbone SUBSTANCE_NUCLEIC_ACID_SUBUNIT = "SubstanceNucleicAcid.subunit" [
        integer("subunit"),
        string("sequence"),
        integer("length"),
        attachment("sequenceAttachment"),
        codeable_concept("fivePrime"),
        codeable_concept("threePrime"),
        backbone("linkage", &SUBSTANCE_NUCLEIC_ACID_LINKAGE).many(),
        backbone("sugar", &SUBSTANCE_NUCLEIC_ACID_SUGAR).many(),
    ]
    backbone SUBSTANCE_NUCLEIC_ACID_LINKAGE = "SubstanceNucleicAcid.subunit.linkage" [
        string("connectivity"),
        identifier("identifier"),
        string("name"),
        string("residueSite"),
    ]
    backbone SUBSTANCE_NUCLEIC_ACID_SUGAR = "SubstanceNucleicAcid.subunit.sugar" [
        identifier("identifier"),
        string("name"),
        string("residueSite"),
    ]

    resource SUBSTANCE_POLYMER = "SubstancePolymer" [
        codeable_concept("class"),
        codeable_concept("geometry"),
        codeable_concept("copolymerConnectivity").many(),
        string("modification").many(),
        backbone("monomerSet", &SUBSTANCE_POLYMER_MONOMER_SET).many(),
        backbone("repeat", &SUBSTANCE_POLYMER_REPEAT).many(),
    ]
    backbone SUBSTANCE_POLYMER_MONOMER_SET = "SubstancePolymer.monomerSet" [
        codeable_concept("ratioType"),
        backbone("startingMaterial", &SUBSTANCE_POLYMER_STARTING_MATERIAL).many(),
    ]
    backbone SUBSTANCE_POLYMER_STARTING_MATERIAL = "SubstancePolymer.monomerSet.startingMaterial" [
        codeable_concept("material"),
        codeable_concept("type"),
        boolean("isDefining"),
        substance_amount("amount"),
    ]
    backbone SUBSTANCE_POLYMER_REPEAT = "SubstancePolymer.repeat" [
        integer("numberOfUnits"),
        string("averageMolecularFormula"),
        codeable_concept("repeatUnitAmountType"),
        backbone("repeatUnit", &SUBSTANCE_POLYMER_REPEAT_UNIT).many(),
    ]
    backbone SUBSTANCE_POLYMER_REPEAT_UNIT = "SubstancePolymer.repeat.repeatUnit" [
        codeable_concept("orientationOfPolymerisation"),
        string("repeatUnit"),
        substance_amount("amount"),
        backbone("degreeOfPolymerisation", &SUBSTANCE_POLYMER_DEGREE).many(),
        backbone("structuralRepresentation", &SUBSTANCE_POLYMER_STRUCTURAL_REPRESENTATION).many(),
    ]
    backbone SUBSTANCE_POLYMER_DEGREE = "SubstancePolymer.repeat.repeatUnit.degreeOfPolymerisation" [
        codeable_concept("degree"),
        substance_amount("amount"),
    ]
    backbone SUBSTANCE_POLYMER_STRUCTURAL_REPRESENTATION = "SubstancePolymer.repeat.repeatUnit.structuralRepresentation" [
        codeable_concept("type"),
        string("representation"),
        attachment("attachment"),
    ]

    resource SUBSTANCE_PROTEIN = "SubstanceProtein" [
        codeable_concept("sequenceType"),
        integer("numberOfSubunits"),
        string("disulfideLinkage").many(),
        backbone("subunit", &SUBSTANCE_PROTEIN_SUBUNIT).many(),
    ]
    backbone SUBSTANCE_PROTEIN_SUBUNIT = "SubstanceProtein.subunit" [
        integer("subunit"),
        string("sequence"),
        integer("length"),
        attachment("sequenceAttachment"),
        identifier("nTerminalModificationId"),
        string("nTerminalModification"),
        identifier("cTerminalModificationId"),
        string("cTerminalModification"),
    ]

    resource SUBSTANCE_REFERENCE_INFORMATION = "SubstanceReferenceInformation" [
        string("comment"),
        backbone("gene", &SUBSTANCE_REFERENCE_INFORMATION_GENE).many(),
        backbone("geneElement", &SUBSTANCE_REFERENCE_INFORMATION_GENE_ELEMENT).many(),
        backbone("classification", &SUBSTANCE_REFERENCE_INFORMATION_CLASSIFICATION).many(),
        backbone("target", &SUBSTANCE_REFERENCE_INFORMATION_TARGET).many(),
    ]
    backbone SUBSTANCE_REFERENCE_INFORMATION_GENE = "SubstanceReferenceInformation.gene" [
        codeable_concept("geneSequenceOrigin"),
        codeable_concept("gene"),
        reference("source").many(),
    ]
    backbone SUBSTANCE_REFERENCE_INFORMATION_GENE_ELEMENT = "SubstanceReferenceInformation.geneElement" [
        codeable_concept("type"),
        identifier("element"),
        reference("source").many(),
    ]
    backbone SUBSTANCE_REFERENCE_INFORMATION_CLASSIFICATION = "SubstanceReferenceInformation.classification" [
        codeable_concept("domain"),
        codeable_concept("classification"),
        codeable_concept("subtype").many(),
        reference("source").many(),
    ]
    backbone SUBSTANCE_REFERENCE_INFORMATION_TARGET = "SubstanceReferenceInformation.target" [
        identifier("target"),
        codeable_concept("type"),
        codeable_concept("interaction"),
        codeable_concept("organism"),
        codeable_concept("organismType"),
        choice("amount", &["Quantity", "Range", "string"]),
        codeable_concept("amountType"),
        reference("source").many(),
    ]

    resource SUBSTANCE_SOURCE_MATERIAL = "SubstanceSourceMaterial" [
        codeable_concept("sourceMaterialClass"),
        codeable_concept("sourceMaterialType"),
        codeable_concept("sourceMaterialState"),
        identifier("organismId"),
        string("organismName"),
        identifier("parentSubstanceId").many(),
        string("parentSubstanceName").many(),
        codeable_concept("countryOfOrigin").many(),
        string("geographicalLocation").many(),
        codeable_concept("developmentStage"),
        backbone("fractionDescription", &SUBSTANCE_SOURCE_MATERIAL_FRACTION).many(),
        backbone("organism", &SUBSTANCE_SOURCE_MATERIAL_ORGANISM),
        backbone("partDescription", &SUBSTANCE_SOURCE_MATERIAL_PART).many(),
    ]
    backbone SUBSTANCE_SOURCE_MATERIAL_FRACTION = "SubstanceSourceMaterial.fractionDescription" [
        string("fraction"),
        codeable_concept("materialType"),
    ]
    backbone SUBSTANCE_SOURCE_MATERIAL_ORGANISM = "SubstanceSourceMaterial.organism" [
        codeable_concept("family"),
        codeable_concept("genus"),
        codeable_concept("species"),
        codeable_concept("intraspecificType"),
        string("intraspecificDescription"),
        backbone("author", &SUBSTANCE_SOURCE_MATERIAL_AUTHOR).many(),
        backbone("hybrid", &SUBSTANCE_SOURCE_MATERIAL_HYBRID),
        backbone("organismGeneral", &SUBSTANCE_SOURCE_MATERIAL_ORGANISM_GENERAL),
    ]
    backbone SUBSTANCE_SOURCE_MATERIAL_AUTHOR = "SubstanceSourceMaterial.organism.author" [
        codeable_concept("authorType"),
        string("authorDescription"),
    ]
    backbone SUBSTANCE_SOURCE_MATERIAL_HYBRID = "SubstanceSourceMaterial.organism.hybrid" [
        string("maternalOrganismId"),
        string("maternalOrganismName"),
        string("paternalOrganismId"),
        string("paternalOrganismName"),
        codeable_concept("hybridType"),
    ]
    backbone SUBSTANCE_SOURCE_MATERIAL_ORGANISM_GENERAL = "SubstanceSourceMaterial.organism.organismGeneral" [
        codeable_concept("kingdom"),
        codeable_concept("phylum"),
        codeable_concept("class"),
        codeable_concept("order"),
    ]
    backbone SUBSTANCE_SOURCE_MATERIAL_PART = "SubstanceSourceMaterial.partDescription" [
        codeable_concept("part"),
        codeable_concept("partLocation"),
    ]

    resource SUBSTANCE_SPECIFICATION = "SubstanceSpecification" [
        identifier("identifier"),
        codeable_concept("type"),
        codeable_concept("status"),
        codeable_concept("domain"),
        string("description"),
        reference("source").many(),
        string("comment"),
        backbone("moiety", &SUBSTANCE_SPECIFICATION_MOIETY).many(),
        backbone("property", &SUBSTANCE_SPECIFICATION_PROPERTY).many(),
        reference("referenceInformation"),
        backbone("structure", &SUBSTANCE_SPECIFICATION_STRUCTURE),
        backbone("code", &SUBSTANCE_SPECIFICATION_CODE).many(),
        backbone("name", &SUBSTANCE_SPECIFICATION_NAME).many(),
        backbone("molecularWeight", &SUBSTANCE_SPECIFICATION_MOLECULAR_WEIGHT).many(),
        backbone("relationship", &SUBSTANCE_SPECIFICATION_RELATIONSHIP).many(),
        reference("nucleicAcid"),
        reference("polymer"),
        reference("protein"),
        reference("sourceMaterial"),
    ]
    backbone SUBSTANCE_SPECIFICATION_MOIETY = "SubstanceSpecification.moiety" [
        codeable_concept("role"),
        identifier("identifier"),
        string("name"),
        codeable_concept("stereochemistry"),
        codeable_concept("opticalActivity"),
        string("molecularFormula"),
        choice("amount", &["Quantity", "string"]),
    ]
    backbone SUBSTANCE_SPECIFICATION_PROPERTY = "SubstanceSpecification.property" [
        codeable_concept("category"),
        codeable_concept("code"),
        string("parameters"),
        choice("definingSubstance", &["Reference", "CodeableConcept"]),
        choice("amount", &["Quantity", "string"]),
    ]
    backbone SUBSTANCE_SPECIFICATION_STRUCTURE = "SubstanceSpecification.structure" [
        codeable_concept("stereochemistry"),
        codeable_concept("opticalActivity"),
        string("molecularFormula"),
        string("molecularFormulaByMoiety"),
        backbone("isotope", &SUBSTANCE_SPECIFICATION_ISOTOPE).many(),
        backbone("molecularWeight", &SUBSTANCE_SPECIFICATION_MOLECULAR_WEIGHT),
        reference("source").many(),
        backbone("representation", &SUBSTANCE_SPECIFICATION_REPRESENTATION).many(),
    ]
    backbone SUBSTANCE_SPECIFICATION_ISOTOPE = "SubstanceSpecification.structure.isotope" [
        identifier("identifier"),
        codeable_concept("name"),
        codeable_concept("substitution"),
        quantity("halfLife"),
        backbone("molecularWeight", &SUBSTANCE_SPECIFICATION_MOLECULAR_WEIGHT),
    ]
    backbone SUBSTANCE_SPECIFICATION_MOLECULAR_WEIGHT = "SubstanceSpecification.structure.isotope.molecularWeight" [
        codeable_concept("method"),
        codeable_concept("type"),
        quantity("amount"),
    ]
    backbone SUBSTANCE_SPECIFICATION_REPRESENTATION = "SubstanceSpecification.structure.representation" [
        codeable_concept("type"),
        string("representation"),
        attachment("attachment"),
    ]
    backbone SUBSTANCE_SPECIFICATION_CODE = "SubstanceSpecification.code" [
        codeable_concept("code"),
        codeable_concept("status"),
        date_time("statusDate"),
        string("comment"),
        reference("source").many(),
    ]
    backbone SUBSTANCE_SPECIFICATION_NAME = "SubstanceSpecification.name" [
        string("name").required(),
        codeable_concept("type"),
        codeable_concept("status"),
        boolean("preferred"),
        codeable_concept("language").many(),
        codeable_concept("domain").many(),
        codeable_concept("jurisdiction").many(),
        backbone("synonym", &SUBSTANCE_SPECIFICATION_NAME).many(),
        backbone("translation", &SUBSTANCE_SPECIFICATION_NAME).many(),
        backbone("official", &SUBSTANCE_SPECIFICATION_NAME_OFFICIAL).many(),
        reference("source").many(),
    ]
    backbone SUBSTANCE_SPECIFICATION_NAME_OFFICIAL = "SubstanceSpecification.name.official" [
        codeable_concept("authority"),
        codeable_concept("status"),
        date_time("date"),
    ]
    backbone SUBSTANCE_SPECIFICATION_RELATIONSHIP = "SubstanceSpecification.relationship" [
        choice("substance", &["Reference", "CodeableConcept"]),
        codeable_concept("relationship"),
        boolean("isDefining"),
        choice("amount", &["Quantity", "Range", "Ratio", "string"]),
        ratio("amountRatioLowLimit"),
        codeable_concept("amountType"),
        reference("source").many(),
    ]
}
