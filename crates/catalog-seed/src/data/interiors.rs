use catalog::Interior;

const INTERIORS: &[(&str, &str, i32, Option<bool>)] = &[
    ("Jet Black", "/images/interiors/jet-black.png", 0, Some(false)),
    ("Adrenaline Red", "/images/interiors/adrenaline-red.png", 1495, Some(false)),
    ("Sky Cool Gray", "/images/interiors/sky-cool-gray.png", 595, Some(false)),
    ("Natural Dipped", "/images/interiors/natural-dipped.png", 995, None),
    ("Jet Black / Red", "/images/interiors/jet-black-red.png", 1995, Some(true)),
    ("Jet Black / Gray", "/images/interiors/jet-black-gray.png", 1795, Some(true)),
];

/// Built-in interior options. Combo interiors pair two colors.
pub fn interiors() -> Vec<Interior> {
    INTERIORS
        .iter()
        .map(|&(color, image, price, iscombo)| Interior {
            color: color.to_string(),
            image: image.to_string(),
            price,
            iscombo,
        })
        .collect()
}
