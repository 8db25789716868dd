use crate::domain::model::DumpFormat;

/// Render bytes as text in the requested format. No trailing separator.
pub fn render_bytes(bytes: &[u8], format: DumpFormat) -> String {
    match format {
        DumpFormat::Decimal => join(bytes, |b| b.to_string()),
        DumpFormat::Signed => join(bytes, |b| (b as i8).to_string()),
        DumpFormat::Hex => join(bytes, |b| format!("{:02X}", b)),
        DumpFormat::Ascii => bytes.iter().map(|&b| printable(b)).collect(),
    }
}

fn join(bytes: &[u8], f: impl Fn(u8) -> String) -> String {
    bytes.iter().map(|&b| f(b)).collect::<Vec<_>>().join(" ")
}

fn printable(b: u8) -> char {
    if (32..=126).contains(&b) {
        b as char
    } else {
        '.'
    }
}
