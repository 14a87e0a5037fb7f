use crate::models::Brand;

/// Brands offered by the brand selector, by key
const BRAND_TABLE: &[(&str, u32, &str)] = &[
    ("bmw", 1, "BMW"),
    ("mercedes", 2, "Mercedes-Benz"),
    ("audi", 3, "Audi"),
    ("volkswagen", 4, "Volkswagen"),
    ("porsche", 5, "Porsche"),
    ("tesla", 6, "Tesla"),
    ("toyota", 7, "Toyota"),
    ("honda", 8, "Honda"),
    ("ford", 9, "Ford"),
    ("peugeot", 10, "Peugeot"),
    ("renault", 11, "Renault"),
    ("citroen", 12, "Citroën"),
    ("opel", 13, "Opel"),
    ("seat", 14, "SEAT"),
    ("skoda", 15, "Škoda"),
    ("volvo", 16, "Volvo"),
    ("nissan", 17, "Nissan"),
    ("hyundai", 18, "Hyundai"),
    ("kia", 19, "Kia"),
    ("mazda", 20, "Mazda"),
];

/// Resolve a selector key (e.g. "bmw") to its brand
pub fn brand_by_key(key: &str) -> Option<Brand> {
    BRAND_TABLE
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, id, name)| Brand::new(*id, name, None))
}

pub fn brand_by_id(id: u32) -> Option<Brand> {
    BRAND_TABLE
        .iter()
        .find(|(_, bid, _)| *bid == id)
        .map(|(_, id, name)| Brand::new(*id, name, None))
}
