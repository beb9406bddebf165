//! Contact display formatting
//!
//! Formats contacts, books and search results for terminal output.

use crate::directory::{DirectoryRegistry, LocationField, LocationSearch};
use crate::models::ContactRecord;

const COLUMNS: [&str; 7] = ["Name", "Address", "City", "State", "Zip", "Phone", "Email"];

fn row(contact: &ContactRecord) -> [String; 7] {
    [
        contact.full_name(),
        contact.address.clone(),
        contact.city.clone(),
        contact.state.clone(),
        contact.zip_code.clone(),
        contact.phone.clone(),
        contact.email.clone(),
    ]
}

/// Format contacts as an aligned table
pub fn format_contact_list(contacts: &[&ContactRecord]) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }

    let rows: Vec<[String; 7]> = contacts.iter().map(|c| row(c)).collect();

    let mut widths = COLUMNS.map(str::len);
    for r in &rows {
        for (width, cell) in widths.iter_mut().zip(r) {
            *width = (*width).max(cell.len());
        }
    }

    let mut output = String::new();
    push_row(&mut output, &COLUMNS, &widths);

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut output, &separator, &widths);

    for r in &rows {
        push_row(&mut output, r, &widths);
    }

    output.push_str(&format!("\nTotal: {} contact(s)\n", contacts.len()));
    output
}

fn push_row<S: AsRef<str>>(output: &mut String, cells: &[S], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = width))
        .collect();
    output.push_str(line.join("  ").trim_end());
    output.push('\n');
}

/// Format a single contact's details
pub fn format_contact_details(contact: &ContactRecord) -> String {
    let mut output = String::new();
    output.push_str(&format!("Contact: {}\n", contact.full_name()));
    output.push_str(&format!("  Address:  {}\n", contact.address));
    output.push_str(&format!("  City:     {}\n", contact.city));
    output.push_str(&format!("  State:    {}\n", contact.state));
    output.push_str(&format!("  Zip Code: {}\n", contact.zip_code));
    output.push_str(&format!("  Phone:    {}\n", contact.phone));
    output.push_str(&format!("  Email:    {}\n", contact.email));
    output
}

/// Format the list of address books with their contact counts
pub fn format_book_list(registry: &DirectoryRegistry) -> String {
    if registry.is_empty() {
        return "No address books yet.".to_string();
    }

    let name_width = registry
        .list_names()
        .iter()
        .map(|n| n.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = format!("{:<name_width$}  {:>8}\n", "Book", "Contacts", name_width = name_width);
    output.push_str(&format!("{:-<name_width$}  {:->8}\n", "", "", name_width = name_width));
    for (name, book) in registry.iter() {
        output.push_str(&format!(
            "{:<name_width$}  {:>8}\n",
            name,
            book.len(),
            name_width = name_width
        ));
    }
    output
}

/// Format a cross-book location search
pub fn format_location_search(search: &LocationSearch<'_>) -> String {
    let mut output = String::new();

    for field in LocationField::ALL {
        output.push_str(&format!(
            "Matches by {}: {}\n",
            field,
            search.counts.get(field)
        ));
    }

    if search.is_empty() {
        output.push_str(&format!("No contacts found for '{}'.\n", search.token));
        return output;
    }

    output.push('\n');
    for hit in &search.hits {
        output.push_str(&format!("[{}] {}\n", hit.book, hit.contact));
    }
    output
}
