//! Shared fixtures for integration tests.

/// Reference ingredient catalog, as shipped in the production
/// `Ingredients.txt` resource (one name per line).
pub const REFERENCE_INGREDIENTS: &[&str] = &[
    "White Rice",
    "Brown Rice",
    "Salmon",
    "Tuna",
    "Spicy Tuna",
    "Avocado",
    "Cucumber",
    "Seaweed Salad",
    "Edamame",
    "Carrots",
    "Pickled Ginger",
    "Wasabi",
    "Nori",
    "Sesame Seeds",
    "Soy Sauce",
    "Tempura Flakes",
    "Crab Salad",
    "Shrimp",
    "Eel",
    "Masago",
    "Scallions",
    "Mango",
    "Jalapeno",
    "Cream Cheese",
    "Spicy Mayo",
];

/// Write the reference catalog to a file in the per-line format the loader
/// expects, with some blank-line noise.
pub fn write_catalog_file(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("Ingredients.txt");
    let mut body = String::new();
    for name in REFERENCE_INGREDIENTS {
        body.push_str(name);
        body.push('\n');
        body.push('\n');
    }
    std::fs::write(&path, body).expect("failed to write catalog fixture");
    path
}
