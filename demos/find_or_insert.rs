use vindecode::core::*;
use vindecode::reference::ReferenceData;
use vindecode::store::{MemoryVinStore, VinStore};

fn main() {
    let data = ReferenceData::from_json(include_str!("../tests/fixtures/reference.json"))
        .expect("reference data should parse");
    let decoder = VinDecoder::new(&data, &data);
    let mut store = MemoryVinStore::new();

    for raw in ["1HGCM82633A004352", "JHMFA16596S000123", "1HGCM82633A004352"] {
        let record = match store.find_by_full(raw) {
            Some(existing) => existing,
            None => {
                let vin = match decoder.decode(raw) {
                    Ok(vin) => vin,
                    Err(e) => {
                        println!("{raw}: {e}");
                        continue;
                    }
                };
                store.find_or_insert(vin).expect("insert into empty slot")
            }
        };
        println!("{raw} -> key {}", record.key);
    }

    println!("\nstored: {}", store.len());
    for record in store.page(1, 10).expect("valid page") {
        println!("  {} {} {:?}", record.key, record.vin.full, record.vin.candidate_years);
    }
}
