//! Ordered keyword rules that infer a specification domain from a category name.
//!
//! The table is evaluated top to bottom and the first rule with any matching
//! substring wins, so "Home Watches" is a watch category even though "home"
//! also matches the appliance rule.

use crate::enums::specification_domain::SpecificationDomain;

#[derive(Debug, Clone, Copy)]
pub struct DomainRule {
    pub domain: SpecificationDomain,
    pub keywords: &'static [&'static str],
}

impl DomainRule {
    /// `lowered` must already be lowercase.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

pub static DOMAIN_RULES: &[DomainRule] = &[
    DomainRule {
        domain: SpecificationDomain::Watch,
        keywords: &["watch"],
    },
    DomainRule {
        domain: SpecificationDomain::Electronics,
        keywords: &["electronic", "computer", "phone", "tablet", "camera", "audio"],
    },
    DomainRule {
        domain: SpecificationDomain::Clothing,
        keywords: &["fashion", "clothing", "shoe", "apparel", "wear"],
    },
    DomainRule {
        domain: SpecificationDomain::Appliance,
        keywords: &["kitchen", "home", "appliance"],
    },
    DomainRule {
        domain: SpecificationDomain::Beauty,
        keywords: &[
            "beauty",
            "personal care",
            "cosmetic",
            "skincare",
            "makeup",
            "hair",
        ],
    },
    DomainRule {
        domain: SpecificationDomain::Perfume,
        keywords: &["perfume", "fragrance", "cologne", "attar", "bakhoor"],
    },
    DomainRule {
        domain: SpecificationDomain::Sports,
        keywords: &["sport", "outdoor", "fitness", "gym", "exercise"],
    },
];

/// Вывести домен из произвольного текста категории
pub fn infer_domain(category_text: &str) -> SpecificationDomain {
    let lowered = category_text.to_lowercase();
    DOMAIN_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.domain)
        .unwrap_or(SpecificationDomain::General)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::specification_domain::SpecificationDomain::*;

    #[test]
    fn test_each_rule_keyword() {
        let cases = [
            ("Watches", Watch),
            ("Consumer Electronics", Electronics),
            ("Computers", Electronics),
            ("Mobile Phones", Electronics),
            ("Tablets", Electronics),
            ("Cameras", Electronics),
            ("Audio", Electronics),
            ("Fashion", Clothing),
            ("Clothing", Clothing),
            ("Shoes", Clothing),
            ("Apparel", Clothing),
            ("Footwear", Clothing),
            ("Kitchen", Appliance),
            ("Home Decor", Appliance),
            ("Appliances", Appliance),
            ("Beauty", Beauty),
            ("Personal Care", Beauty),
            ("Cosmetics", Beauty),
            ("Skincare", Beauty),
            ("Makeup", Beauty),
            ("Hair Care", Beauty),
            ("Perfumes", Perfume),
            ("Fragrances", Perfume),
            ("Cologne", Perfume),
            ("Attar", Perfume),
            ("Bakhoor", Perfume),
            ("Sports", Sports),
            ("Outdoor", Sports),
            ("Fitness", Sports),
            ("Gym Gear", Sports),
            ("Exercise Bands", Sports),
        ];
        for (text, expected) in cases {
            assert_eq!(infer_domain(text), expected, "{text}");
        }
    }

    #[test]
    fn test_first_rule_wins() {
        assert_eq!(infer_domain("Home Watches"), Watch);
        assert_eq!(infer_domain("Home Watches Accessories"), Watch);
        // "wear" (clothing) is checked before "sport"
        assert_eq!(infer_domain("Sportswear"), Clothing);
        // "phone" (electronics) is checked before "home"
        assert_eq!(infer_domain("Home Phones"), Electronics);
        // "hair" (beauty) is checked before "fragrance"
        assert_eq!(infer_domain("Hair Fragrance"), Beauty);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(infer_domain("WATCHES"), Watch);
        assert_eq!(infer_domain("bAkHoOr"), Perfume);
    }

    #[test]
    fn test_unmatched_is_general() {
        assert_eq!(infer_domain("Books"), General);
        assert_eq!(infer_domain(""), General);
        assert_eq!(infer_domain("Furniture"), General);
    }

    #[test]
    fn test_general_has_no_rule() {
        assert!(DOMAIN_RULES.iter().all(|r| r.domain != General));
    }
}
