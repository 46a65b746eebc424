//! Built-in fleet listed on the site

use carent_domain::model::{BodyType, Catalog, FuelType, Transmission, Vehicle};

struct Entry {
    id: &'static str,
    name: &'static str,
    brand: &'static str,
    image: &'static str,
    price_per_day: u64,
    seats: u32,
    transmission: Transmission,
    fuel_type: FuelType,
    year: u32,
    available: bool,
    body_type: BodyType,
}

const FLEET: [Entry; 8] = [
    Entry {
        id: "1",
        name: "Toyota Avanza",
        brand: "Toyota",
        image: "/images/cars/toyota-avanza.jpg",
        price_per_day: 350_000,
        seats: 7,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Gasoline,
        year: 2022,
        available: true,
        body_type: BodyType::Mpv,
    },
    Entry {
        id: "2",
        name: "Honda Civic",
        brand: "Honda",
        image: "/images/cars/honda-civic.png",
        price_per_day: 700_000,
        seats: 5,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Gasoline,
        year: 2023,
        available: true,
        body_type: BodyType::Sedan,
    },
    Entry {
        id: "3",
        name: "Toyota Alphard",
        brand: "Toyota",
        image: "/images/cars/toyota-alphard.png",
        price_per_day: 1_500_000,
        seats: 7,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Gasoline,
        year: 2023,
        available: true,
        body_type: BodyType::Mpv,
    },
    Entry {
        id: "4",
        name: "Mitsubishi Pajero Sport",
        brand: "Mitsubishi",
        image: "/images/cars/mitsubishi-pajero.png",
        price_per_day: 1_200_000,
        seats: 7,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Diesel,
        year: 2022,
        available: false,
        body_type: BodyType::Suv,
    },
    Entry {
        id: "5",
        name: "Honda HR-V",
        brand: "Honda",
        image: "/images/cars/honda-hrv.png",
        price_per_day: 600_000,
        seats: 5,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Gasoline,
        year: 2022,
        available: true,
        body_type: BodyType::Hatchback,
    },
    Entry {
        id: "6",
        name: "Toyota Fortuner",
        brand: "Toyota",
        image: "/images/cars/toyota-fortuner.png",
        price_per_day: 1_100_000,
        seats: 7,
        transmission: Transmission::Automatic,
        fuel_type: FuelType::Diesel,
        year: 2023,
        available: true,
        body_type: BodyType::Suv,
    },
    Entry {
        id: "7",
        name: "Daihatsu Xenia",
        brand: "Daihatsu",
        image: "/images/cars/daihatsu-xenia.png",
        price_per_day: 300_000,
        seats: 7,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Gasoline,
        year: 2021,
        available: true,
        body_type: BodyType::Mpv,
    },
    Entry {
        id: "8",
        name: "Suzuki Ertiga",
        brand: "Suzuki",
        image: "/images/cars/suzuki-ertiga.png",
        price_per_day: 350_000,
        seats: 7,
        transmission: Transmission::Manual,
        fuel_type: FuelType::Gasoline,
        year: 2022,
        available: true,
        body_type: BodyType::Mpv,
    },
];

/// The eight vehicles of the reference listing, in listing order
pub fn sample_catalog() -> Catalog {
    let vehicles = FLEET
        .iter()
        .map(|e| Vehicle {
            id: e.id.to_string(),
            name: e.name.to_string(),
            brand: e.brand.to_string(),
            price_per_day: e.price_per_day,
            seats: e.seats,
            transmission: e.transmission,
            fuel_type: e.fuel_type,
            year: e.year,
            available: e.available,
            body_type: Some(e.body_type),
            image: Some(e.image.to_string()),
        })
        .collect();
    // FLEET ids are distinct literals
    Catalog::new(vehicles).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use carent_domain::model::ClassificationTable;

    #[test]
    fn test_sample_catalog_is_complete() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.vehicles()[0].name, "Toyota Avanza");
        assert_eq!(catalog.vehicles()[7].name, "Suzuki Ertiga");
    }

    #[test]
    fn test_body_types_agree_with_name_table() {
        let table = ClassificationTable::legacy();
        for vehicle in sample_catalog().vehicles() {
            assert_eq!(vehicle.body_type, table.classify_name(&vehicle.name), "{}", vehicle.name);
        }
    }

    #[test]
    fn test_only_pajero_unavailable() {
        let unavailable: Vec<_> = sample_catalog()
            .vehicles()
            .iter()
            .filter(|v| !v.available)
            .map(|v| v.id.clone())
            .collect();
        assert_eq!(unavailable, vec!["4".to_string()]);
    }
}
