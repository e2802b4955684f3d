use catalog::Wheel;

const WHEELS: &[(&str, &str, i32)] = &[
    ("Silver Split-Spoke", "/images/wheels/silver-split-spoke.png", 0),
    ("Black Trident", "/images/wheels/black-trident.png", 795),
    ("Machined Bronze", "/images/wheels/machined-bronze.png", 1195),
    ("Carbon Flash", "/images/wheels/carbon-flash.png", 1495),
    ("Chrome Five-Spoke", "/images/wheels/chrome-five-spoke.png", 995),
];

/// Built-in wheel options.
pub fn wheels() -> Vec<Wheel> {
    WHEELS
        .iter()
        .map(|&(color, image, price)| Wheel {
            color: color.to_string(),
            image: image.to_string(),
            price,
        })
        .collect()
}
