pub struct Config {
    pub json_file_name: String,
    pub csv_file_name: String,
    /// Separator between connector entries inside the csv `connector_types` column.
    pub connector_separator: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            json_file_name: "chargers.json".into(),
            csv_file_name: "chargers.csv".into(),
            connector_separator: ';',
        }
    }
}
