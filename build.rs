use std::path::Path;

const KNOWN_REMEDY_TYPES: &[&str] = &["Home", "Ayurveda", "Homeopathy", "Allopathy"];

fn main() {
    let catalog_path = Path::new("catalogs/diseases.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         The embedded disease catalog must exist before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let diseases = catalog.get("diseases").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'diseases' field\n\
             The catalog must have a top-level 'diseases' array.\n"
        );
    });

    let diseases = diseases.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'diseases' must be an array\n\
             Got: {diseases}\n"
        );
    });

    let total_medicines = validate_diseases(diseases);

    println!(
        "cargo:warning=Validated catalog: {} diseases, {total_medicines} medicines",
        diseases.len()
    );
}

fn validate_diseases(diseases: &[serde_json::Value]) -> usize {
    let mut total_medicines = 0;

    for (i, disease) in diseases.iter().enumerate() {
        let name = disease
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");

        validate_disease_fields(disease, name, i);
        total_medicines += validate_disease_medicines(disease, name);
    }

    total_medicines
}

fn validate_disease_fields(disease: &serde_json::Value, name: &str, index: usize) {
    assert!(
        disease.get("name").and_then(|v| v.as_str()).is_some(),
        "\n\nCATALOG BUILD ERROR: Disease at index {index} missing 'name' field\n"
    );
    assert!(
        disease.get("symptoms").and_then(|v| v.as_array()).is_some(),
        "\n\nCATALOG BUILD ERROR: Disease '{name}' (index {index}) missing 'symptoms' array\n"
    );
    assert!(
        disease.get("severity").and_then(|v| v.as_str()).is_some(),
        "\n\nCATALOG BUILD ERROR: Disease '{name}' (index {index}) missing 'severity' field\n"
    );
}

fn validate_disease_medicines(disease: &serde_json::Value, disease_name: &str) -> usize {
    let Some(medicines) = disease.get("medicines").and_then(|m| m.as_array()) else {
        return 0;
    };

    for (j, medicine) in medicines.iter().enumerate() {
        assert!(
            medicine.get("name").and_then(|v| v.as_str()).is_some(),
            "\n\nCATALOG BUILD ERROR: Disease '{disease_name}' medicine {j} missing 'name' field\n"
        );

        let remedy_type = medicine
            .get("remedy_type")
            .and_then(|v| v.as_str())
            .unwrap_or("<missing>");
        assert!(
            KNOWN_REMEDY_TYPES.contains(&remedy_type),
            "\n\nCATALOG BUILD ERROR: Disease '{disease_name}' medicine {j} has remedy_type '{remedy_type}'\n\
             Expected one of: {}\n",
            KNOWN_REMEDY_TYPES.join(", ")
        );
    }

    medicines.len()
}

fn set_build_dependencies() {
    println!("cargo:rerun-if-changed=catalogs/diseases.json");
    println!("cargo:rerun-if-changed=build.rs");
}
