use catalog::Exterior;

const EXTERIORS: &[(&str, &str, i32)] = &[
    ("Bolt Red", "/images/exteriors/bolt-red.png", 0),
    ("Arctic White", "/images/exteriors/arctic-white.png", 0),
    ("Torch Black", "/images/exteriors/torch-black.png", 500),
    ("Rapid Blue", "/images/exteriors/rapid-blue.png", 995),
    ("Accelerate Yellow", "/images/exteriors/accelerate-yellow.png", 995),
    ("Silver Flare", "/images/exteriors/silver-flare.png", 500),
    ("Amplify Orange", "/images/exteriors/amplify-orange.png", 995),
    ("Hypersonic Gray", "/images/exteriors/hypersonic-gray.png", 500),
];

/// Built-in exterior paint options. Ids are assigned in this order, from 1.
pub fn exteriors() -> Vec<Exterior> {
    EXTERIORS
        .iter()
        .map(|&(color, image, price)| Exterior {
            color: color.to_string(),
            image: image.to_string(),
            price,
        })
        .collect()
}
