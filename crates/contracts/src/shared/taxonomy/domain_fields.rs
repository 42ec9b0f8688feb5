use crate::enums::specification_domain::SpecificationDomain;

/// Набор атрибутов по умолчанию для домена (когда категория не задает свои поля)
pub fn default_fields(domain: SpecificationDomain) -> &'static [&'static str] {
    match domain {
        SpecificationDomain::Watch => &[
            "movement",
            "bandMaterial",
            "caseStyle",
            "waterResistance",
            "gender",
            "color",
            "weight",
            "warranty",
        ],
        SpecificationDomain::Electronics => &[
            "processor",
            "ram",
            "storage",
            "screenSize",
            "battery",
            "connectivity",
            "operatingSystem",
            "color",
            "warranty",
        ],
        SpecificationDomain::Clothing => &[
            "size",
            "color",
            "material",
            "gender",
            "fit",
            "careInstructions",
        ],
        SpecificationDomain::Appliance => &[
            "power",
            "capacity",
            "energyRating",
            "dimensions",
            "material",
            "color",
            "warranty",
        ],
        SpecificationDomain::Beauty => &["skinType", "hairType", "volume", "ingredients", "gender"],
        SpecificationDomain::Perfume => &[
            "concentration",
            "fragranceNotes",
            "volume",
            "gender",
            "longevity",
        ],
        SpecificationDomain::Sports => &[
            "sportType",
            "size",
            "material",
            "color",
            "weight",
            "ageGroup",
        ],
        SpecificationDomain::General => &[],
    }
}

/// Обязательные атрибуты домена. Применяются только к реально предложенным полям.
pub fn required_fields(domain: SpecificationDomain) -> &'static [&'static str] {
    match domain {
        SpecificationDomain::Watch => &["movement"],
        SpecificationDomain::Electronics => &["storage"],
        SpecificationDomain::Clothing => &["size", "color"],
        SpecificationDomain::Appliance => &["power"],
        SpecificationDomain::Beauty => &["volume"],
        SpecificationDomain::Perfume => &["concentration", "volume"],
        SpecificationDomain::Sports => &["size"],
        SpecificationDomain::General => &[],
    }
}
