use regex::RegexBuilder;

use crate::directory::Employee;

/// Case-insensitive substring match on the concatenated "first last" name.
///
/// Returns a derived list; the input list is never mutated, so filtering a
/// filtered list with the same query is a no-op.
pub fn by_name(employees: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return employees.to_vec();
    }
    employees
        .iter()
        .filter(|e| {
            let full_name = format!("{} {}", e.name.first, e.name.last).to_lowercase();
            full_name.contains(&needle)
        })
        .cloned()
        .collect()
}

/// Same contract as [`by_name`], with the query compiled as a
/// case-insensitive regex against the full name.
pub fn by_name_regex(employees: &[Employee], pattern: &str) -> Result<Vec<Employee>, String> {
    let re = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| format!("invalid search pattern '{pattern}': {e}"))?;
    Ok(employees
        .iter()
        .filter(|e| re.is_match(&format!("{} {}", e.name.first, e.name.last)))
        .cloned()
        .collect())
}
