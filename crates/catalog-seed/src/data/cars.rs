use catalog::Car;

/// Built-in preset cars. Option references follow the built-in option order.
pub fn cars() -> Vec<Car> {
    vec![
        Car {
            name: "Base Coupe".to_string(),
            isconvertible: false,
            exterior: 1,
            roof: 1,
            wheels: 1,
            interior: 1,
            price: 65000,
        },
        Car {
            name: "Midnight Track".to_string(),
            isconvertible: false,
            exterior: 3,
            roof: 2,
            wheels: 4,
            interior: 2,
            price: 70985,
        },
        Car {
            name: "Coastal Convertible".to_string(),
            isconvertible: true,
            exterior: 4,
            roof: 4,
            wheels: 3,
            interior: 4,
            price: 68185,
        },
        Car {
            name: "Solar Flare".to_string(),
            isconvertible: true,
            exterior: 5,
            roof: 6,
            wheels: 2,
            interior: 5,
            price: 71780,
        },
    ]
}
