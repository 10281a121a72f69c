use colored::Colorize;

use crate::directory::Employee;
use crate::utils;

/// One compact card per record. Pure: the caller decides where it goes.
pub fn card(index: usize, employee: &Employee) -> String {
    let city_line = format!(
        "{}, {}",
        utils::capitalize_words(&employee.location.city),
        employee.locality()
    );
    format!(
        "{} {}\n      {} {} {}",
        format!("[{index:>3}]").bold().cyan(),
        employee.full_name().bold(),
        utils::truncate_ellipsis(&employee.email, 40).dimmed(),
        "|".dimmed(),
        city_line
    )
}

/// The full gallery: exactly one card per record, re-rendered from scratch
/// on every filter.
pub fn gallery_cards(employees: &[Employee]) -> Vec<String> {
    employees
        .iter()
        .enumerate()
        .map(|(i, e)| card(i, e))
        .collect()
}

pub fn render_gallery(employees: &[Employee], query: Option<&str>) -> String {
    let mut out = String::new();
    match query {
        Some(q) => out.push_str(&format!(
            "{} {} match \"{}\"\n\n",
            "::".bold(),
            employees.len(),
            q
        )),
        None => out.push_str(&format!("{} {} employees\n\n", "::".bold(), employees.len())),
    }
    if employees.is_empty() {
        out.push_str("  no matches\n");
        return out;
    }
    for card in gallery_cards(employees) {
        out.push_str(&card);
        out.push('\n');
    }
    out
}

/// Expanded detail for one record, with its position in the active list.
pub fn render_profile(employee: &Employee, position: usize, total: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!(
            ":: {} :: {}/{} ::",
            employee.full_name(),
            position + 1,
            total
        )
        .bold()
        .cyan()
    ));
    out.push_str(&profile_line("Email", &employee.email));
    out.push_str(&profile_line(
        "City",
        &utils::capitalize_words(&employee.location.city),
    ));
    out.push_str(&profile_line("Cell", &employee.cell));
    out.push_str(&profile_line("Phone", &employee.phone));
    out.push_str(&profile_line("Address", &employee.mailing_address()));
    out.push_str(&profile_line("Birthday", employee.birth_date()));
    out.push_str(&profile_line("Nationality", &employee.nat));
    out.push_str(&profile_line("Photo", &employee.picture.large));
    out.push_str(&format!(
        "{}\n",
        "[n]ext [p]rev [b]ack [q]uit".dimmed()
    ));
    out
}

fn profile_line(label: &str, value: &str) -> String {
    format!("   {:<12}: {}\n", label.bold(), value)
}

#[cfg(test)]
mod tests {
    use crate::directory::model::{
        BirthInfo, Employee, EmployeeName, Location, Picture, Street,
    };

    fn employee(first: &str, last: &str) -> Employee {
        Employee {
            name: EmployeeName {
                title: "Mr".to_string(),
                first: first.to_string(),
                last: last.to_string(),
            },
            email: format!("{first}.{last}@example.com"),
            phone: "071-552-2969".to_string(),
            cell: "081-130-0967".to_string(),
            dob: BirthInfo {
                date: "1980-01-02T03:04:05.000Z".to_string(),
                age: 44,
            },
            location: Location {
                street: Street {
                    number: 12,
                    name: "Main Street".to_string(),
                },
                city: "galway".to_string(),
                state: "Connacht".to_string(),
                country: "Ireland".to_string(),
                postcode: "X91".to_string(),
            },
            picture: Picture {
                large: "https://example.com/l.jpg".to_string(),
                medium: "https://example.com/m.jpg".to_string(),
                thumbnail: "https://example.com/t.jpg".to_string(),
            },
            nat: "IE".to_string(),
        }
    }

    #[test]
    fn gallery_renders_one_card_per_record() {
        colored::control::set_override(false);
        let employees = vec![
            employee("aoife", "walsh"),
            employee("sean", "byrne"),
            employee("niamh", "kelly"),
        ];
        let cards = super::gallery_cards(&employees);
        assert_eq!(cards.len(), employees.len());
        assert!(cards[0].contains("Aoife Walsh"));
        assert!(cards[2].contains("Niamh Kelly"));
    }

    #[test]
    fn profile_shows_position_and_expanded_fields() {
        colored::control::set_override(false);
        let rendered = super::render_profile(&employee("aoife", "walsh"), 3, 12);
        assert!(rendered.contains("4/12"));
        assert!(rendered.contains("aoife.walsh@example.com"));
        assert!(rendered.contains("12 Main Street, Galway, Ireland X91"));
        assert!(rendered.contains("1980-01-02"));
    }

    #[test]
    fn empty_gallery_reports_no_matches() {
        colored::control::set_override(false);
        let rendered = super::render_gallery(&[], Some("zzz"));
        assert!(rendered.contains("no matches"));
    }
}
