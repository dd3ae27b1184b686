use vindecode::core::*;
use vindecode::reference::ReferenceData;

fn main() {
    let data = ReferenceData::from_json(include_str!("../tests/fixtures/reference.json"))
        .expect("reference data should parse");
    let decoder = VinDecoder::new(&data, &data);

    let raw = "1HGCM82633A004352";
    let sections = VinSections::new(raw).expect("17 legal characters");
    println!("VIN:        {raw}");
    println!("WMI:        {} ({:?})", sections.wmi(), sections.region());
    println!("VDS:        {}", sections.vds());
    println!("VIS:        {}", sections.vis());
    println!("Check:      {}", compute_check_digit(raw).expect("valid length"));

    match decoder.decode(raw) {
        Ok(vin) => {
            println!("Maker:      {}", vin.manufacturer.manufacturer);
            println!("Years:      {:?}", vin.candidate_years);
            println!("Serial:     {:?}", vin.serial);
            if let Some(series) = &vin.descriptor.series {
                println!("Series:     {} {}", series.platform, series.spec);
            }
            if let Some(body) = &vin.descriptor.body {
                println!("Body:       {:?}, {} doors", body.layout, body.doors);
            }
        }
        Err(e) => println!("Decode failed: {e}"),
    }
}
