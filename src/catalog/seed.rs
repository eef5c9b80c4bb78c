use super::{Car, FuelType};

/// The demo inventory served when no catalog file is configured.
pub(super) fn builtin_cars() -> Vec<Car> {
    use FuelType::*;

    vec![
        Car::new(1, "Toyota", 20_000, Gasoline, 5, "/toyota.jpg"),
        Car::new(2, "Honda", 18_000, Diesel, 7, "/honda.jpg"),
        Car::new(3, "Ford", 25_000, Electric, 4, "/ford.jpg"),
        Car::new(4, "BMW", 40_000, Gasoline, 5, "/BMW.jpg"),
        Car::new(5, "Mercedes", 50_000, Diesel, 4, "/mercedes.jpg"),
        Car::new(6, "Mercedes", 590_000, Diesel, 8, "/mercedes.jpg"),
        Car::new(7, "Mercedes", 850_000, Diesel, 12, "/mercedes.jpg"),
        Car::new(8, "Mercedes", 750_000, Diesel, 3, "/mercedes.jpg"),
        Car::new(9, "Mercedes", 670_000, Diesel, 9, "/mercedes.jpg"),
        Car::new(10, "Mercedes", 100_000, Diesel, 13, "/mercedes.jpg"),
        Car::new(11, "Mercedes", 900_000, Diesel, 2, "/mercedes.jpg"),
        Car::new(12, "Mercedes", 700_000, Diesel, 10, "/mercedes.jpg"),
    ]
}
