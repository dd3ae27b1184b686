use vindecode::core::*;
use vindecode::reference::ReferenceData;

fn main() {
    let data = ReferenceData::from_json(include_str!("../tests/fixtures/reference.json"))
        .expect("reference data should parse");
    let decoder = VinDecoder::new(&data, &data);

    // ── One input per failing stage ────────────────────────────────────
    let inputs = [
        ("too short", "1HGCM82633A00435"),
        ("reserved letter", "1HGCM82633O004352"),
        ("bad check digit", "1HGCM82643A004352"),
        ("unknown manufacturer", "WVWZZZ1J0XW000001"),
        ("unknown year code", "1HGCM8261UA004352"),
        ("no descriptor", "5YJ3E1EA0KF000316"),
    ];

    for (label, raw) in inputs {
        match decoder.decode(raw) {
            Ok(vin) => println!("{label:<22} ok: {}", vin.manufacturer.manufacturer),
            Err(DecodeError::Validation(e)) if e.is_defect() => {
                println!("{label:<22} DEFECT: {e}")
            }
            Err(e) => println!("{label:<22} {e}"),
        }
    }

    // ── Lenient input ──────────────────────────────────────────────────
    let raw = " 1hgcm82633a004352 ";
    println!("\nraw {raw:?}: valid = {}", is_valid_vin(raw));
    let normalized = normalize_vin(raw);
    println!("normalized {normalized:?}: valid = {}", is_valid_vin(&normalized));
}
