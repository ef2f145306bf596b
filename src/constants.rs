//! Default file names and fixed values shared by both stages.
//! Paths, marker, suffix and page settings can be overridden through `support_directory.toml`.

// Working-directory file names
pub const DEFAULT_CONFIG_FILE: &str = "support_directory.toml";
pub const DEFAULT_SPREADSHEET: &str = "input.xlsx";
pub const DEFAULT_EXPORT: &str = "socialweb_export.txt";
pub const DEFAULT_HTML: &str = "soc-support-tenant-liste.html";

// URL filtering and normalization
pub const URL_MARKER: &str = "socialweb.ch";
pub const SUPPORT_PATH: &str = "/login/support/";
pub const DEFAULT_OWNER: &str = "Unbekannt";

// Delimited record format
pub const FIELD_DELIMITER: char = ';';
pub const DELIMITER_SUBSTITUTE: char = ',';
pub const EXPORT_HEADER: &str =
    "Anzeigename;Ergänzung Anzeigename;Webadresse Geschäftlich;Projektleitung / Zuständigkeit";

// Rendered page
pub const PAGE_TITLE: &str = "socialweb Support-Links";
pub const DISPLAY_COLUMNS: usize = 3;
pub const CATCH_ALL_SECTION: char = '#';
pub const CATCH_ALL_ANCHOR: &str = "num";
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";
pub const SAML_LOGOUT_URL: &str = "https://login.microsoftonline.com/12c4861e-9d0e-4707-9b36-2d01976efcf3/saml2?SAMLRequest=fZFNS8QwEIb%2FSm85pU3T9CNhWxQWYWH1oOLBi2TzUQNtUjsp7M%2B33BURQS%2BBCe87z8y8O5DjMIlj6MMSH83HYiAm%2B%2FVxXkYXfIveY5xAZNkQeufT0ak5QLAx%2BMF5k6owZjlVrKlyg7kmBrOa1JifigpTTXJeV8YqW2Qbh6LksG%2FRW6F4ztiq5azhmJWWYkmYxZRXWhOqa8uKVQqwmIOHKH1sESW0xGvnvHkmjShqwdgrSl7MDJcpaUpQch4HD2IjtWiZvQgSHAgvRwMiKvF0e38Uq1BIADNv2%2F20TP97pjnEoMKAut2mFpfp5g4mL4ytCDWNwifFG7yeguOTrBnWtLFclyW3Zb7LfrquLR5WyGGf3IV5lPFvep7mlx%2Bnsb1IxeJhMspZZzTqpB5B%2B%2BWmH%2BRy7uewTGnw3zFtAX2xr7juWv2KvPsE";
