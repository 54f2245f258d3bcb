//! The fixed business category list and its group-number table.
//!
//! Categories are a closed set defined by the business. The presentation
//! layer uses [`CATEGORIES`] for its category picker and [`group_number`]
//! for the code preview shown in the admin form.

/// All product categories, in display order.
pub const CATEGORIES: [&str; 9] = [
    "Tavan Lambası",
    "Fanli Tavan Lambası",
    "Gömme Tavan Armatürü",
    "Avize",
    "Güneş Enerjili Lamba",
    "Sensörler",
    "AC-DC Adaptör",
    "DC-DC Adaptör",
    "LED'ler",
];

/// Two-digit group number for a category, used in product codes.
///
/// Unrecognized categories fall back to `"01"`. That is a fallback policy,
/// not an error: code generation must always produce a usable code.
#[must_use]
pub fn group_number(category: &str) -> &'static str {
    match category {
        "Tavan Lambası" => "01",
        "Fanli Tavan Lambası" => "02",
        "Gömme Tavan Armatürü" => "03",
        "Avize" => "04",
        "Güneş Enerjili Lamba" => "05",
        "Sensörler" => "06",
        "AC-DC Adaptör" => "07",
        "DC-DC Adaptör" => "08",
        "LED'ler" => "09",
        _ => "01",
    }
}
