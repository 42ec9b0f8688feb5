use serde::{Deserialize, Serialize};

/// Семейство формы характеристик, выводимое из названия категории
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecificationDomain {
    Watch,
    Electronics,
    Clothing,
    Appliance,
    Beauty,
    Perfume,
    Sports,
    General,
}

impl SpecificationDomain {
    /// Получить код домена
    pub fn code(&self) -> &'static str {
        match self {
            SpecificationDomain::Watch => "watch",
            SpecificationDomain::Electronics => "electronics",
            SpecificationDomain::Clothing => "clothing",
            SpecificationDomain::Appliance => "appliance",
            SpecificationDomain::Beauty => "beauty",
            SpecificationDomain::Perfume => "perfume",
            SpecificationDomain::Sports => "sports",
            SpecificationDomain::General => "general",
        }
    }

    /// Заголовок формы характеристик
    pub fn display_name(&self) -> &'static str {
        match self {
            SpecificationDomain::Watch => "Watch Specifications",
            SpecificationDomain::Electronics => "Electronics Specifications",
            SpecificationDomain::Clothing => "Clothing Specifications",
            SpecificationDomain::Appliance => "Appliance Specifications",
            SpecificationDomain::Beauty => "Beauty Specifications",
            SpecificationDomain::Perfume => "Perfume Specifications",
            SpecificationDomain::Sports => "Sports Specifications",
            SpecificationDomain::General => "General Specifications",
        }
    }

    /// Получить все домены
    pub fn all() -> Vec<SpecificationDomain> {
        vec![
            SpecificationDomain::Watch,
            SpecificationDomain::Electronics,
            SpecificationDomain::Clothing,
            SpecificationDomain::Appliance,
            SpecificationDomain::Beauty,
            SpecificationDomain::Perfume,
            SpecificationDomain::Sports,
            SpecificationDomain::General,
        ]
    }
}

impl std::fmt::Display for SpecificationDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_code() {
        for domain in SpecificationDomain::all() {
            let json = serde_json::to_string(&domain).unwrap();
            assert_eq!(json, format!("\"{}\"", domain.code()));
        }
    }
}
