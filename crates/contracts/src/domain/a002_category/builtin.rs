use super::aggregate::CategoryDefinition;
use crate::domain::common::Origin;

struct BuiltinCategory {
    name: &'static str,
    subcategories: &'static [&'static str],
    brands: &'static [&'static str],
    fields: &'static [&'static str],
}

/// Встроенная таксономия. Порядок значим: в нем категории показываются оператору.
static BUILTIN_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        name: "Electronics",
        subcategories: &[
            "Smartphones",
            "Laptops",
            "Tablets",
            "Cameras",
            "Audio",
            "Accessories",
        ],
        brands: &["Apple", "Samsung", "Sony", "Xiaomi", "Lenovo", "HP"],
        fields: &[],
    },
    BuiltinCategory {
        name: "Fashion",
        subcategories: &[
            "Men's Clothing",
            "Women's Clothing",
            "Kids' Clothing",
            "Shoes",
            "Bags",
            "Accessories",
        ],
        brands: &["Nike", "Adidas", "Zara", "H&M", "Levi's"],
        fields: &[],
    },
    BuiltinCategory {
        name: "Home & Kitchen",
        subcategories: &[
            "Cookware",
            "Small Appliances",
            "Large Appliances",
            "Furniture",
            "Decor",
            "Storage",
        ],
        brands: &["Philips", "Tefal", "Bosch", "Moulinex", "IKEA"],
        fields: &[],
    },
    BuiltinCategory {
        name: "Beauty & Personal Care",
        subcategories: &[
            "Skincare",
            "Makeup",
            "Hair Care",
            "Bath & Body",
            "Men's Grooming",
        ],
        brands: &["L'Oréal", "Nivea", "Maybelline", "The Ordinary", "Dove"],
        fields: &[],
    },
    BuiltinCategory {
        name: "Perfumes",
        subcategories: &[
            "Men's Perfume",
            "Women's Perfume",
            "Unisex",
            "Attar",
            "Bakhoor",
        ],
        brands: &["Chanel", "Dior", "Lattafa", "Rasasi", "Ajmal"],
        fields: &[],
    },
    BuiltinCategory {
        name: "Sports & Outdoors",
        subcategories: &[
            "Fitness Equipment",
            "Team Sports",
            "Camping",
            "Cycling",
            "Sportswear",
        ],
        brands: &["Nike", "Adidas", "Decathlon", "Puma", "Under Armour"],
        fields: &[],
    },
    BuiltinCategory {
        name: "Watches",
        subcategories: &[
            "Men's Watches",
            "Women's Watches",
            "Smart Watches",
            "Luxury Watches",
            "Sports Watches",
        ],
        brands: &["Rolex", "Casio", "Seiko", "Citizen", "Fossil", "Apple"],
        fields: &[
            "movement",
            "bandMaterial",
            "caseStyle",
            "waterResistance",
            "gender",
            "color",
        ],
    },
    BuiltinCategory {
        name: "Books",
        subcategories: &["Fiction", "Non-Fiction", "Children's Books", "Education"],
        brands: &[],
        fields: &[],
    },
];

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Встроенные категории в объявленном порядке
pub fn builtin_categories() -> Vec<CategoryDefinition> {
    BUILTIN_CATEGORIES
        .iter()
        .map(|c| CategoryDefinition {
            name: c.name.to_string(),
            subcategories: to_owned(c.subcategories),
            brands: to_owned(c.brands),
            fields: to_owned(c.fields),
            origin: Origin::Builtin,
        })
        .collect()
}
