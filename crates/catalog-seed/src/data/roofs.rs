use catalog::Roof;

const ROOFS: &[(&str, &str, i32, bool)] = &[
    ("Body Color", "/images/roofs/body-color.png", 0, false),
    ("Carbon Fiber", "/images/roofs/carbon-fiber.png", 2495, false),
    ("Transparent", "/images/roofs/transparent.png", 995, false),
    ("Black Soft Top", "/images/roofs/black-soft-top.png", 0, true),
    ("Tan Soft Top", "/images/roofs/tan-soft-top.png", 595, true),
    ("Carbon Hard Top", "/images/roofs/carbon-hard-top.png", 2995, true),
];

/// Built-in roof options. Convertible roofs only fit convertible cars.
pub fn roofs() -> Vec<Roof> {
    ROOFS
        .iter()
        .map(|&(color, image, price, isconvertible)| Roof {
            color: color.to_string(),
            image: image.to_string(),
            price,
            isconvertible,
        })
        .collect()
}
