use crate::api::geocode::GeoCode;
use crate::core::constants::DEFAULT_PRECISION;
use crate::util::error::Geo62Error;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

/// Output format for the optional decoded-position columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionFormat {
    /// A single `position` column holding `{"lat":...,"lng":...}` JSON
    Json,
    /// Separate `lat` and `lng` columns with the rounded values
    Columns,
}

/// Configuration for converting a CSV with coordinate columns to a CSV
/// with geocode identifiers.
#[derive(Debug, Clone)]
pub struct CsvGeocodeConfig {
    pub lat_column: String,
    pub lng_column: String,
    pub precision: u8,
    pub exclude_columns: Vec<String>,
    pub include_position: Option<PositionFormat>,
}

impl CsvGeocodeConfig {
    /// Create config for a CSV with latitude/longitude columns.
    ///
    /// # Example
    /// ```
    /// use geo62::CsvGeocodeConfig;
    ///
    /// let config = CsvGeocodeConfig::new("Latitude", "Longitude", 6);
    /// ```
    pub fn new(lat_column: impl Into<String>, lng_column: impl Into<String>, precision: u8) -> Self {
        Self {
            lat_column: lat_column.into(),
            lng_column: lng_column.into(),
            precision,
            exclude_columns: Vec::new(),
            include_position: None,
        }
    }

    /// Create config with the default precision of six decimal digits.
    pub fn with_default_precision(
        lat_column: impl Into<String>,
        lng_column: impl Into<String>,
    ) -> Self {
        Self::new(lat_column, lng_column, DEFAULT_PRECISION)
    }

    /// Drop additional columns from the output.
    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include the rounded decoded position in the output.
    pub fn with_position(mut self, format: PositionFormat) -> Self {
        self.include_position = Some(format);
        self
    }
}

/// Trait for converting CSV files to geocode-indexed CSVs.
pub trait CsvToGeocode {
    fn to_geocode_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvGeocodeConfig,
    ) -> Result<(), Geo62Error>;
}

impl<P: AsRef<Path>> CsvToGeocode for P {
    fn to_geocode_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvGeocodeConfig,
    ) -> Result<(), Geo62Error> {
        csv_to_geocode_csv(self, output_path, config)
    }
}

/// Converts a CSV file with coordinate columns to a CSV file with an
/// encoded `geocode` column.
///
/// The coordinate source columns are dropped from the output and replaced
/// by the encoded identifier. Streams record by record to keep memory flat
/// for large files.
///
/// # Example
///
/// ```no_run
/// use geo62::{csv_to_geocode_csv, CsvGeocodeConfig, PositionFormat};
///
/// let config = CsvGeocodeConfig::new("Latitude", "Longitude", 6)
///     .exclude(vec!["Elevation".into()])
///     .with_position(PositionFormat::Json);
///
/// csv_to_geocode_csv("stations.csv", "encoded.csv", &config).unwrap();
/// ```
pub fn csv_to_geocode_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvGeocodeConfig,
) -> Result<(), Geo62Error> {
    if config.lat_column.is_empty() {
        return Err(Geo62Error::CsvError(
            "Latitude column name cannot be empty".to_string(),
        ));
    }
    if config.lng_column.is_empty() {
        return Err(Geo62Error::CsvError(
            "Longitude column name cannot be empty".to_string(),
        ));
    }

    let file = File::open(csv_path).map_err(|e| Geo62Error::CsvError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| Geo62Error::CsvError(e.to_string()))?
        .clone();

    let lat_idx = headers
        .iter()
        .position(|h| h == config.lat_column)
        .ok_or_else(|| {
            Geo62Error::CsvError(format!("Latitude column '{}' not found", config.lat_column))
        })?;
    let lng_idx = headers
        .iter()
        .position(|h| h == config.lng_column)
        .ok_or_else(|| {
            Geo62Error::CsvError(format!(
                "Longitude column '{}' not found",
                config.lng_column
            ))
        })?;

    // The coordinate source columns never pass through to the output
    let mut exclude_indices = HashSet::from([lat_idx, lng_idx]);
    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| Geo62Error::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = vec!["geocode"];
    match config.include_position {
        Some(PositionFormat::Json) => header_row.push("position"),
        Some(PositionFormat::Columns) => {
            header_row.push("lat");
            header_row.push("lng");
        }
        None => {}
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| Geo62Error::CsvError(e.to_string()))?;

    for result in reader.records() {
        let record = result.map_err(|e| Geo62Error::CsvError(e.to_string()))?;

        let lat_str = record
            .get(lat_idx)
            .ok_or_else(|| {
                Geo62Error::CsvError(format!("Missing latitude column at index {}", lat_idx))
            })?
            .trim();
        let lng_str = record
            .get(lng_idx)
            .ok_or_else(|| {
                Geo62Error::CsvError(format!("Missing longitude column at index {}", lng_idx))
            })?
            .trim();

        let lat: f64 = lat_str
            .parse()
            .map_err(|_| Geo62Error::InvalidLatitude(lat_str.to_string()))?;
        let lng: f64 = lng_str
            .parse()
            .map_err(|_| Geo62Error::InvalidLongitude(lng_str.to_string()))?;

        let code = GeoCode::from_latlng(lat, lng, config.precision)?;

        let mut row: Vec<String> = vec![code.id.clone()];
        match config.include_position {
            Some(PositionFormat::Json) => {
                let json = serde_json::to_string(&code.position())
                    .map_err(|e| Geo62Error::CsvError(e.to_string()))?;
                row.push(json);
            }
            Some(PositionFormat::Columns) => {
                row.push(code.lat.to_string());
                row.push(code.lng.to_string());
            }
            None => {}
        }
        for (i, field) in record.iter().enumerate() {
            if !exclude_indices.contains(&i) {
                row.push(field.to_string());
            }
        }
        writer
            .write_record(&row)
            .map_err(|e| Geo62Error::CsvError(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| Geo62Error::CsvError(e.to_string()))?;

    Ok(())
}
