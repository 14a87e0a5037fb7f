use crate::catalog::brands::brand_by_key;
use crate::catalog::geo::find_city;
use crate::models::{BodyType, Brand, FuelType, Listing, Transmission};
use tracing::info;

fn brand(key: &str, country: &str) -> Brand {
    let mut brand = brand_by_key(key).unwrap_or_else(|| Brand::new(0, key, None));
    brand.country = Some(country.to_string());
    brand
}

#[allow(clippy::too_many_arguments)]
fn car(
    id: u32,
    name: &str,
    brand: Brand,
    year: i32,
    price: u32,
    mileage_km: u32,
    fuel: FuelType,
    transmission: Transmission,
    body: BodyType,
    city: &str,
    color: Option<&str>,
) -> Listing {
    Listing {
        id,
        name: name.to_string(),
        brand,
        year,
        price,
        mileage_km,
        fuel,
        transmission,
        body,
        is_new: mileage_km == 0,
        color: color.map(str::to_string),
        location: Some(city.to_string()),
        description: None,
        coordinates: find_city(city).map(|c| c.coordinates),
    }
}

/// Built-in catalog used when no catalog file is configured
pub fn demo_catalog() -> Vec<Listing> {
    use BodyType::*;
    use FuelType::*;
    use Transmission::*;

    info!("📋 Using the built-in demo catalog");

    vec![
        car(1, "Porsche 911 Carrera", brand("porsche", "Alemanha"), 2024, 78_900, 0, Gasoline, Automatic, Sports, "Lisboa", Some("Vermelho")),
        car(2, "Toyota Corolla XEi", brand("toyota", "Japão"), 2023, 28_500, 12_000, Hybrid, Automatic, Sedan, "Porto", Some("Prata")),
        car(3, "BMW X5 M Sport", brand("bmw", "Alemanha"), 2024, 48_500, 0, Gasoline, Automatic, Suv, "Coimbra", Some("Preto")),
        car(4, "Tesla Model 3", brand("tesla", "EUA"), 2024, 35_000, 0, FuelType::Electric, Automatic, BodyType::Electric, "Lisboa", Some("Branco")),
        car(5, "Ford Ranger XLT", brand("ford", "EUA"), 2023, 32_500, 8_500, Diesel, Automatic, Pickup, "Braga", Some("Azul")),
        car(6, "Mercedes-Benz AMG GT", brand("mercedes", "Alemanha"), 2024, 95_000, 0, Gasoline, Automatic, Sports, "Faro", Some("Cinza")),
        car(7, "Audi A4 Avant", brand("audi", "Alemanha"), 2023, 42_000, 15_000, Diesel, Automatic, Sedan, "Setúbal", None),
        car(8, "Volkswagen Golf GTI", brand("volkswagen", "Alemanha"), 2022, 28_000, 32_000, Gasoline, Manual, Hatchback, "Aveiro", None),
        car(9, "Honda Civic Type R", brand("honda", "Japão"), 2024, 48_000, 0, Gasoline, Manual, Hatchback, "Viseu", None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_is_fully_located() {
        let catalog = demo_catalog();
        assert_eq!(catalog.len(), 9);
        assert!(catalog.iter().all(|l| l.coordinates.is_some()));
        assert!(catalog.iter().all(|l| l.brand.id != 0));
    }
}
