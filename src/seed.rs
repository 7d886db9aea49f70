//! Reference catalog data and the rules that attach certifications to it.

use std::collections::HashMap;

use crate::models::{Certification, NewCertification, NewToy};

pub const CERTIFICATIONS: &[NewCertification] = &[
    NewCertification {
        slug: "fsc",
        name: "FSC (Forest Stewardship Council)",
        logo: "/placeholder.svg",
        description: "Ensures that products come from responsibly managed forests that provide environmental, social, and economic benefits.",
        meaning: "The wood used in the toy is sourced sustainably, protecting forests for future generations.",
        impact: "Promotes responsible forestry, conserves biodiversity, and respects the rights of indigenous peoples.",
    },
    NewCertification {
        slug: "gots",
        name: "GOTS (Global Organic Textile Standard)",
        logo: "/placeholder.svg",
        description: "The worldwide leading textile processing standard for organic fibers, including ecological and social criteria.",
        meaning: "For soft toys, this means the fabric is made from organic fibers and processed without harmful chemicals.",
        impact: "Reduces the use of toxic pesticides and fertilizers, ensures safer working conditions, and produces a healthier final product.",
    },
    NewCertification {
        slug: "oeko-tex",
        name: "OEKO-TEX Standard 100",
        logo: "/placeholder.svg",
        description: "A worldwide consistent, independent testing and certification system for raw, semi-finished, and finished textile products.",
        meaning: "Every component of the toy has been tested for harmful substances and is harmless for human health.",
        impact: "Protects consumers from harmful chemicals in textiles, ensuring toys are safe to touch and play with.",
    },
    NewCertification {
        slug: "green-seal",
        name: "Green Seal",
        logo: "/placeholder.svg",
        description: "A non-profit organization that develops life-cycle-based sustainability standards for products, services, and companies.",
        meaning: "The toy meets rigorous standards for performance, health, and environmental safety.",
        impact: "Signifies a product has a reduced environmental impact from manufacturing to disposal.",
    },
];

macro_rules! image {
    ($id:literal) => {
        concat!("https://images.unsplash.com/photo-", $id, "?q=80&w=800&auto=format&fit=crop")
    };
}

pub const TOYS: &[NewToy] = &[
    NewToy {
        name: "Wooden Stacking Rings",
        description: "A classic stacking toy made from sustainably sourced beech wood and painted with non-toxic, water-based dyes.",
        brand: "EcoTots",
        price: 24.99,
        buy_link: "https://example.com/buy/wooden-stacking-rings",
        materials: &["Beech Wood", "Water-based Paint"],
        age_range: "1-3 years",
        category: "Motor Skills",
        image_url: image!("1587654780291-39c940483713"),
    },
    NewToy {
        name: "Organic Cotton Teddy Bear",
        description: "Soft and cuddly teddy bear made from 100% GOTS certified organic cotton and stuffed with corn fiber.",
        brand: "CuddleGreen",
        price: 35.00,
        buy_link: "https://example.com/buy/organic-teddy-bear",
        materials: &["Organic Cotton", "Corn Fiber"],
        age_range: "0+ years",
        category: "Plush Toys",
        image_url: image!("1530325553241-4f6e7690cf36"),
    },
    NewToy {
        name: "Recycled Plastic Dump Truck",
        description: "Durable dump truck made from 100% recycled milk jugs. No metal axles or external coatings.",
        brand: "GreenWheels",
        price: 29.95,
        buy_link: "https://example.com/buy/recycled-dump-truck",
        materials: &["Recycled Plastic (HDPE)"],
        age_range: "2-5 years",
        category: "Vehicles",
        image_url: image!("1558060370-d644479cb6f7"),
    },
    NewToy {
        name: "Natural Rubber Teether",
        description: "Soothing teether made from 100% natural rubber from Hevea trees. Free from BPA, PVC, and phthalates.",
        brand: "PureChew",
        price: 12.50,
        buy_link: "https://example.com/buy/natural-rubber-teether",
        materials: &["Natural Rubber"],
        age_range: "0-18 months",
        category: "Baby Gear",
        image_url: image!("1522771739844-6a9f6d5f14af"),
    },
    NewToy {
        name: "Solar Powered Robot Kit",
        description: "Educational robot kit that teaches children about solar energy. No batteries required.",
        brand: "FutureTech",
        price: 45.00,
        buy_link: "https://example.com/buy/solar-robot-kit",
        materials: &["Recycled Plastic", "Solar Panels", "Electronic Components"],
        age_range: "8-12 years",
        category: "STEM",
        image_url: image!("1561144257-e32e9d6eb3f6"),
    },
    NewToy {
        name: "Bamboo Building Blocks",
        description: "Lightweight and durable building blocks made from rapidly renewable bamboo.",
        brand: "BambooBuilds",
        price: 39.99,
        buy_link: "https://example.com/buy/bamboo-blocks",
        materials: &["Bamboo"],
        age_range: "3+ years",
        category: "Construction",
        image_url: image!("1596461404969-9ae70f2830c1"),
    },
    NewToy {
        name: "Eco-Dough Modeling Clay",
        description: "All-natural modeling dough made with flour, salt, cream of tartar, oil, and vegetable dyes.",
        brand: "NaturePlay",
        price: 18.00,
        buy_link: "https://example.com/buy/eco-dough",
        materials: &["Flour", "Salt", "Vegetable Oil", "Natural Dyes"],
        age_range: "3+ years",
        category: "Arts & Crafts",
        image_url: image!("1612924644859-b8b5b2d2bf37"),
    },
    NewToy {
        name: "Cardboard Castle Playhouse",
        description: "Easy-to-assemble playhouse made from high-strength, recycled cardboard. Customizable with paints or markers.",
        brand: "BoxForts",
        price: 55.00,
        buy_link: "https://example.com/buy/cardboard-castle",
        materials: &["Recycled Cardboard"],
        age_range: "3-8 years",
        category: "Pretend Play",
        image_url: image!("1558618666-fcd25c85cd64"),
    },
    NewToy {
        name: "Wooden Shape Sorter",
        description: "A classic shape sorter made from FSC certified rubberwood. Helps develop problem-solving skills.",
        brand: "EcoTots",
        price: 22.50,
        buy_link: "https://example.com/buy/shape-sorter",
        materials: &["FSC Rubberwood", "Water-based Paint"],
        age_range: "1-3 years",
        category: "Motor Skills",
        image_url: image!("1558618666-fcd25c85cd64"),
    },
    NewToy {
        name: "Organic Cotton Doll",
        description: "Handmade doll with 100% organic cotton outer and corn fiber fill. Safe and soft for all ages.",
        brand: "CuddleGreen",
        price: 28.00,
        buy_link: "https://example.com/buy/organic-doll",
        materials: &["Organic Cotton", "Corn Fiber"],
        age_range: "0-12 months",
        category: "Plush Toys",
        image_url: image!("1566454419290-27f986d62ce7"),
    },
    NewToy {
        name: "Recycled Plastic Submarine",
        description: "Ready for underwater adventures! Made from 100% recycled plastic milk jugs.",
        brand: "GreenWheels",
        price: 15.99,
        buy_link: "https://example.com/buy/recycled-submarine",
        materials: &["Recycled Plastic (HDPE)"],
        age_range: "3-5 years",
        category: "Bath Toys",
        image_url: image!("1603573355706-0c47f52fcc1b"),
    },
    NewToy {
        name: "DIY Birdhouse Kit",
        description: "Build and paint your own birdhouse. Made from pine wood. Paints and brush included.",
        brand: "NaturePlay",
        price: 19.95,
        buy_link: "https://example.com/buy/birdhouse-kit",
        materials: &["Pine Wood", "Acrylic Paint"],
        age_range: "5-8 years",
        category: "Arts & Crafts",
        image_url: image!("1589149098258-3e9102cd63d3"),
    },
    NewToy {
        name: "Wooden Balance Bike",
        description: "A pedal-free bike to help toddlers learn balance and coordination. Adjustable seat height.",
        brand: "EcoRide",
        price: 85.00,
        buy_link: "https://example.com/buy/balance-bike",
        materials: &["Birch Plywood", "Rubber Tires"],
        age_range: "1-3 years",
        category: "Ride-on",
        image_url: image!("1517457373958-b7bdd4587205"),
    },
    NewToy {
        name: "Solar System Puzzle",
        description: "48-piece floor puzzle made from recycled cardboard and printed with soy-based inks.",
        brand: "BrainyKids",
        price: 16.50,
        buy_link: "https://example.com/buy/solar-system-puzzle",
        materials: &["Recycled Cardboard", "Soy Ink"],
        age_range: "3-5 years",
        category: "Puzzles",
        image_url: image!("1611329857570-f02f340e7378"),
    },
    NewToy {
        name: "Organic Finger Paints",
        description: "Safe, edible finger paints made from organic fruit and vegetable extracts.",
        brand: "SafeColors",
        price: 21.00,
        buy_link: "https://example.com/buy/organic-finger-paints",
        materials: &["Organic Fruit/Veg Extracts", "Corn Starch"],
        age_range: "1-3 years",
        category: "Arts & Crafts",
        image_url: image!("1513364776144-60967b0f800f"),
    },
    NewToy {
        name: "Wind Power Experiment Kit",
        description: "Build a working wind turbine and learn about renewable energy. Great for STEM learning.",
        brand: "FutureTech",
        price: 38.00,
        buy_link: "https://example.com/buy/wind-turbine-kit",
        materials: &["Recycled Plastic", "Electronic Motor"],
        age_range: "8+ years",
        category: "STEM",
        image_url: image!("1473186505569-9c61870c11f9"),
    },
];

const WOOD_KEYWORDS: &[&str] = &["Wood", "Cardboard", "Bamboo", "Pine", "Beech", "Birch", "Plywood"];
const RECYCLED_KEYWORDS: &[&str] = &["Recycled", "recycled"];
const TEXTILE_KEYWORDS: &[&str] = &["Cotton", "Fiber", "Textile", "Fabric"];

/// Certification slugs a seed toy qualifies for, based on its materials
///
/// Order is fsc, gots, green-seal, oeko-tex; each slug appears at most once.
pub fn certification_slugs_for(toy: &NewToy) -> Vec<&'static str> {
    let mentions = |keywords: &[&str]| {
        toy.materials
            .iter()
            .any(|material| keywords.iter().any(|k| material.contains(k)))
    };

    let mut slugs = Vec::new();

    if mentions(WOOD_KEYWORDS) {
        slugs.push("fsc");
    }
    if mentions(&["Organic Cotton"]) {
        slugs.push("gots");
    }
    if mentions(RECYCLED_KEYWORDS) {
        slugs.push("green-seal");
    }
    if mentions(TEXTILE_KEYWORDS) || toy.category.contains("Plush") {
        slugs.push("oeko-tex");
    }

    slugs
}

/// Pair each seed toy with the ids of the certifications it qualifies for
///
/// Slugs with no matching certification are skipped.
pub fn attach_certifications(
    toys: &[NewToy],
    certifications: &[Certification],
) -> Vec<(NewToy, Vec<String>)> {
    let ids_by_slug: HashMap<&str, &str> = certifications
        .iter()
        .map(|cert| (cert.slug.as_str(), cert.id.as_str()))
        .collect();

    toys.iter()
        .map(|toy| {
            let ids = certification_slugs_for(toy)
                .into_iter()
                .filter_map(|slug| ids_by_slug.get(slug).map(|id| id.to_string()))
                .collect();
            (toy.clone(), ids)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_named(name: &str) -> &'static NewToy {
        TOYS.iter().find(|t| t.name == name).unwrap()
    }

    #[test]
    fn test_seed_images_use_unsplash() {
        assert!(TOYS.iter().all(|t| t.image_url.starts_with("https://images.unsplash.com/photo-")));
    }

    #[test]
    fn test_wood_toy_gets_fsc() {
        assert_eq!(certification_slugs_for(toy_named("Wooden Stacking Rings")), vec!["fsc"]);
    }

    #[test]
    fn test_organic_cotton_gets_gots_and_oeko_tex() {
        assert_eq!(
            certification_slugs_for(toy_named("Organic Cotton Teddy Bear")),
            vec!["gots", "oeko-tex"]
        );
    }

    #[test]
    fn test_recycled_cardboard_gets_fsc_and_green_seal() {
        assert_eq!(
            certification_slugs_for(toy_named("Cardboard Castle Playhouse")),
            vec!["fsc", "green-seal"]
        );
    }

    #[test]
    fn test_no_match_gets_nothing() {
        assert!(certification_slugs_for(toy_named("Natural Rubber Teether")).is_empty());
    }

    #[test]
    fn test_attach_skips_unknown_slugs() {
        let certs = vec![Certification {
            id: "fsc-id".to_string(),
            slug: "fsc".to_string(),
            name: "FSC".to_string(),
            logo: String::new(),
            description: String::new(),
            meaning: String::new(),
            impact: String::new(),
        }];

        let attached = attach_certifications(TOYS, &certs);
        let castle = attached
            .iter()
            .find(|(toy, _)| toy.name == "Cardboard Castle Playhouse")
            .unwrap();

        assert_eq!(castle.1, vec!["fsc-id".to_string()]);
        assert_eq!(attached.len(), TOYS.len());
    }

    #[test]
    fn test_seed_certifications_have_goal_mappings() {
        for cert in CERTIFICATIONS {
            assert!(!crate::core::goals_for_slug(cert.slug).is_empty(), "{}", cert.slug);
        }
    }
}
