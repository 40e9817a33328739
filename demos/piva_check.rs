use piva::core::{SplitMode, control_digit, validate_vat};

fn main() {
    // Decomposition + checksum, scanning all EU prefixes
    println!("=== EU Prefix Scan ===\n");

    let test_ids = [
        "IT00743110157",
        "00743110157",   // unprefixed, defaults to IT
        "DE123456789",   // foreign, deferred to the registry
        "12345678901",   // wrong control digit
        "999999999",     // too short
        "GB123456789",   // GB left VIES, falls through to IT
        "",
    ];

    for id in &test_ids {
        let check = validate_vat(id, SplitMode::EuPrefixScan);
        match check.reason {
            None => println!(
                "  {id:16} => valid (country={}, number={}, euvat={})",
                check.country_code,
                check.numeric_body,
                check.euvat().unwrap_or_default()
            ),
            Some(reason) => println!(
                "  {id:16} => INVALID: {reason} (country={})",
                check.country_code
            ),
        }
    }

    // Only the literal "IT" prefix is recognized here
    println!("\n=== IT Prefix Only ===\n");

    let test_ids = ["IT00743110157", "FR12345678903", "00743110157"];

    for id in &test_ids {
        let check = validate_vat(id, SplitMode::ItPrefixOnly);
        println!(
            "  {id:16} => stripped={}, valid={}",
            check.prefix_stripped, check.is_valid
        );
    }

    // Control digit derivation
    println!("\n=== Control Digits ===\n");

    for first_ten in ["0074311015", "1234567890"] {
        match control_digit(first_ten) {
            Some(digit) => println!("  {first_ten} => control digit {digit}"),
            None => println!("  {first_ten} => not 10 digits"),
        }
    }
}
