use geo62::{Geo62Error, GeoCode, decode};

fn main() -> Result<(), Geo62Error> {
    let lat = 53.48082746395233;
    let lng = -2.2479699500757597;

    let code = GeoCode::from_latlng(lat, lng, 6)?;

    println!("Geocode: {}", code.id);
    println!("Rounded: ({}, {})", code.lat, code.lng);
    println!("Precision: {}", code.precision);

    let position = decode(&code.id)?;
    let json = serde_json::to_string(&position).map_err(|e| Geo62Error::IoError(e.to_string()))?;
    println!("Decoded: {}", json);

    Ok(())
}
