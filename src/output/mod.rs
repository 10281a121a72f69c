pub mod report;

use serde::Serialize;

use crate::directory::Employee;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
    Html,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".csv") {
        return Some(OutputFormat::Csv);
    }
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        return Some(OutputFormat::Html);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

/// Flattened export row, one per employee.
#[derive(Clone, Debug, Serialize)]
pub struct OutputRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cell: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub locality: String,
    pub postcode: String,
    pub birthday: String,
    pub age: u32,
    pub nationality: String,
    pub photo: String,
}

pub fn build_records(employees: &[Employee]) -> Vec<OutputRecord> {
    employees
        .iter()
        .map(|e| OutputRecord {
            name: e.full_name(),
            email: e.email.clone(),
            phone: e.phone.clone(),
            cell: e.cell.clone(),
            street: e.street(),
            city: e.location.city.clone(),
            state: e.location.state.clone(),
            country: e.location.country.clone(),
            locality: e.locality().to_string(),
            postcode: e.location.postcode.clone(),
            birthday: e.birth_date().to_string(),
            age: e.dob.age,
            nationality: e.nat.clone(),
            photo: e.picture.large.clone(),
        })
        .collect()
}

pub fn render_text(records: &[OutputRecord]) -> Vec<u8> {
    let mut out = String::new();
    for r in records {
        out.push_str(&format!(
            "{} <{}> {}, {}\n",
            r.name, r.email, r.city, r.locality
        ));
    }
    out.into_bytes()
}

pub fn render_json(records: &[OutputRecord]) -> Vec<u8> {
    serde_json::to_vec_pretty(records).unwrap_or_else(|_| b"[]\n".to_vec())
}

fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn render_csv(records: &[OutputRecord]) -> Vec<u8> {
    let mut out = String::new();
    out.push_str(
        "name,email,phone,cell,street,city,state,country,locality,postcode,birthday,age,nationality,photo\n",
    );
    for r in records {
        let fields = [
            r.name.as_str(),
            r.email.as_str(),
            r.phone.as_str(),
            r.cell.as_str(),
            r.street.as_str(),
            r.city.as_str(),
            r.state.as_str(),
            r.country.as_str(),
            r.locality.as_str(),
            r.postcode.as_str(),
            r.birthday.as_str(),
        ];
        let mut row: Vec<String> = fields.iter().map(|f| escape_csv(f)).collect();
        row.push(r.age.to_string());
        row.push(escape_csv(&r.nationality));
        row.push(escape_csv(&r.photo));
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out.into_bytes()
}

pub fn render_html(records: &[OutputRecord]) -> Vec<u8> {
    report::render_html(records)
}
