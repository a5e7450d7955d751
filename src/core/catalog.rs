//! # Car Catalog
//!
//! The shared, ordered list of rentable cars. Owned by `App` and handed to
//! every screen by reference; the only mutation is `add_car`, which prepends.
//!
//! ```text
//! CarCatalog
//! └── cars: Vec<Car>   // index 0 = most recently added
//! ```

use log::{debug, info};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::validation::{self, ValidationError};

/// Shown when an admin leaves the image field blank.
pub const PLACEHOLDER_IMAGE: &str = "https://images.unsplash.com/photo-1503376780353-7e6692767b70?q=80&w=1200&auto=format&fit=crop";

const COROLLA_IMAGE: &str = "https://images.unsplash.com/photo-1638618164682-12b986ec2a75?q=80&w=387&auto=format&fit=crop";
const BMW_IMAGE: &str = "https://images.unsplash.com/photo-1746426758698-184dbf2fffdb?q=80&w=387&auto=format&fit=crop";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    pub make: String,
    pub model: String,
    pub cost_per_day: Decimal,
    pub image: String,
}

impl Car {
    /// "Make Model", as shown in lists and summaries.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// Raw form input for a new car. Nothing here has been validated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCar {
    pub make: String,
    pub model: String,
    pub cost_per_day: String,
    pub image_url: String,
}

#[derive(Debug, Clone)]
pub struct CarCatalog {
    cars: Vec<Car>,
    placeholder_image: String,
}

impl Default for CarCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CarCatalog {
    pub fn new() -> Self {
        Self {
            cars: Vec::new(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// The two demo cars every fresh process starts with.
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        catalog.cars = vec![
            Car {
                id: "1".to_string(),
                make: "Toyota".to_string(),
                model: "Corolla".to_string(),
                cost_per_day: Decimal::from(300),
                image: COROLLA_IMAGE.to_string(),
            },
            Car {
                id: "2".to_string(),
                make: "BMW".to_string(),
                model: "1 Series".to_string(),
                cost_per_day: Decimal::from(280),
                image: BMW_IMAGE.to_string(),
            },
        ];
        catalog
    }

    /// Override the image used when a new car has none.
    pub fn with_placeholder_image(mut self, image: impl Into<String>) -> Self {
        self.placeholder_image = image.into();
        self
    }

    /// Validate and prepend a car. On error the catalog is untouched.
    pub fn add_car(&mut self, input: NewCar) -> Result<&Car, ValidationError> {
        let make = validation::require("Make", &input.make)?;
        let model = validation::require("Model", &input.model)?;
        validation::require("Cost per day", &input.cost_per_day)?;
        let cost_per_day = validation::parse_positive_number(&input.cost_per_day)?;

        let image_url = input.image_url.trim();
        let image = if image_url.is_empty() {
            debug!("No image given for {make} {model}, using placeholder");
            self.placeholder_image.clone()
        } else {
            image_url.to_string()
        };

        let car = Car {
            id: uuid::Uuid::new_v4().to_string(),
            make: make.to_string(),
            model: model.to_string(),
            cost_per_day,
            image,
        };
        info!("Catalog: added {} at {}/day (id={})", car.display_name(), car.cost_per_day, car.id);
        self.cars.insert(0, car);
        Ok(&self.cars[0])
    }

    /// Every car, most recently added first.
    pub fn list_cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn get(&self, id: &str) -> Option<&Car> {
        self.cars.iter().find(|car| car.id == id)
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn civic() -> NewCar {
        NewCar {
            make: "Honda".into(),
            model: "Civic".into(),
            cost_per_day: "250".into(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_seeded_catalog_order() {
        let catalog = CarCatalog::seeded();
        let names: Vec<String> = catalog.list_cars().iter().map(Car::display_name).collect();
        assert_eq!(names, vec!["Toyota Corolla", "BMW 1 Series"]);
        assert_eq!(catalog.list_cars()[0].cost_per_day, Decimal::from(300));
    }

    #[test]
    fn test_add_car_prepends() {
        let mut catalog = CarCatalog::seeded();
        catalog.add_car(civic()).unwrap();

        assert_eq!(catalog.len(), 3);
        let newest = &catalog.list_cars()[0];
        assert_eq!(newest.make, "Honda");
        assert_eq!(newest.model, "Civic");
        assert_eq!(newest.cost_per_day, Decimal::from(250));
        assert_eq!(catalog.list_cars()[1].make, "Toyota");
    }

    #[test]
    fn test_add_car_trims_and_defaults_image() {
        let mut catalog = CarCatalog::new();
        let car = catalog
            .add_car(NewCar {
                make: "  Mazda ".into(),
                model: " 3\t".into(),
                cost_per_day: " 199.5 ".into(),
                image_url: "   ".into(),
            })
            .unwrap();

        assert_eq!(car.make, "Mazda");
        assert_eq!(car.model, "3");
        assert_eq!(car.cost_per_day, Decimal::new(1995, 1));
        assert_eq!(car.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_add_car_keeps_trimmed_image() {
        let mut catalog = CarCatalog::new();
        let mut input = civic();
        input.image_url = " https://example.com/civic.jpg ".into();
        let car = catalog.add_car(input).unwrap();
        assert_eq!(car.image, "https://example.com/civic.jpg");
    }

    #[test]
    fn test_custom_placeholder() {
        let mut catalog = CarCatalog::new().with_placeholder_image("file:///car.png");
        let car = catalog.add_car(civic()).unwrap();
        assert_eq!(car.image, "file:///car.png");
    }

    #[test]
    fn test_add_car_rejects_bad_cost_without_mutation() {
        let mut catalog = CarCatalog::seeded();
        for cost in ["0", "-10", "abc", ""] {
            let mut input = civic();
            input.cost_per_day = cost.into();
            assert!(catalog.add_car(input).is_err(), "cost {cost:?} should fail");
        }
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_add_car_rejects_missing_fields() {
        let mut catalog = CarCatalog::new();
        let mut input = civic();
        input.make = " ".into();
        assert_eq!(
            catalog.add_car(input),
            Err(ValidationError::Required { field: "Make" })
        );

        let mut input = civic();
        input.model = String::new();
        assert_eq!(
            catalog.add_car(input),
            Err(ValidationError::Required { field: "Model" })
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut catalog = CarCatalog::new();
        let first = catalog.add_car(civic()).unwrap().id.clone();
        let second = catalog.add_car(civic()).unwrap().id.clone();
        assert_ne!(first, second);
        assert!(catalog.get(&first).is_some());
        assert!(catalog.get("missing").is_none());
    }
}
