//! Interactive menu controller
//!
//! Drives the registry from numbered console menus. Every error raised by a
//! menu action is reported and the loop re-prompts; only the end of input
//! (or a failing output stream) ends the session.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use super::prompt::Prompter;
use crate::config::{AddressBookPaths, Settings};
use crate::directory::{find_by_location, DirectoryRegistry, SortKey};
use crate::display::{
    format_book_list, format_contact_details, format_contact_list, format_location_search,
};
use crate::error::{AddressBookError, AddressBookResult};
use crate::export::{export_to_file, ExportFormat};
use crate::models::ContactUpdate;

const MAIN_MENU: &str = "
--- Address Book Manager ---
1. Create Address Book
2. Open Address Book
3. List Address Books
4. Search by City/State/ZIP
5. Export to CSV
6. Export to JSON
7. Export to YAML
0. Exit";

/// What the loop should do after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Leave,
}

/// An interactive session over one registry
pub struct MenuSession<R, W> {
    registry: DirectoryRegistry,
    prompter: Prompter<R, W>,
    paths: AddressBookPaths,
    settings: Settings,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    /// Create a session with an empty registry
    pub fn new(input: R, output: W, paths: AddressBookPaths, settings: Settings) -> Self {
        Self {
            registry: DirectoryRegistry::new(),
            prompter: Prompter::new(input, output),
            paths,
            settings,
        }
    }

    /// End the session, keeping its books
    pub fn into_registry(self) -> DirectoryRegistry {
        self.registry
    }

    /// Run the main menu until the user exits or input ends
    pub fn run(&mut self) -> AddressBookResult<()> {
        info!("Session started");
        loop {
            match self.main_menu_step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Leave) => break,
                Err(AddressBookError::InputClosed) => {
                    info!("Input closed");
                    break;
                }
                Err(e) => self.report(&e)?,
            }
        }

        self.prompter.say("Goodbye!")?;
        info!(
            books = self.registry.len(),
            contacts = self.registry.total_contacts(),
            "Session ended"
        );
        Ok(())
    }

    fn report(&mut self, err: &AddressBookError) -> AddressBookResult<()> {
        warn!(error = %err, "Action failed");
        self.prompter.say(&format!("Error: {}", err))
    }

    fn main_menu_step(&mut self) -> AddressBookResult<Flow> {
        self.prompter.say(MAIN_MENU)?;
        let choice = self.prompter.ask("Enter your choice: ")?;

        match choice.as_str() {
            "1" => self.create_book()?,
            "2" => self.open_book()?,
            "3" => {
                let listing = format_book_list(&self.registry);
                self.prompter.say(&listing)?;
            }
            "4" => self.search_location()?,
            "5" => self.export(ExportFormat::Csv)?,
            "6" => self.export(ExportFormat::Json)?,
            "7" => self.export(ExportFormat::Yaml)?,
            "0" => return Ok(Flow::Leave),
            other => return Err(invalid_choice(other)),
        }

        Ok(Flow::Continue)
    }

    fn create_book(&mut self) -> AddressBookResult<()> {
        let name = self.prompter.ask("Enter a name for the new address book: ")?;
        let book = self.registry.create(&name)?;
        let message = format!("Address book '{}' created.", book.name());
        self.prompter.say(&message)
    }

    fn open_book(&mut self) -> AddressBookResult<()> {
        if self.registry.is_empty() {
            return self
                .prompter
                .say("No address books yet. Create one first.");
        }

        let names = self.registry.list_names().join(", ");
        self.prompter.say(&format!("Available address books: {}", names))?;

        let name = self.prompter.ask("Enter the address book name: ")?;
        let name = self.registry.get(&name)?.name().to_string();
        info!(book = %name, "Address book opened");
        self.book_menu(&name)
    }

    fn book_menu(&mut self, name: &str) -> AddressBookResult<()> {
        loop {
            match self.book_menu_step(name) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Leave) => return Ok(()),
                Err(AddressBookError::InputClosed) => return Err(AddressBookError::InputClosed),
                Err(e) => self.report(&e)?,
            }
        }
    }

    fn book_menu_step(&mut self, name: &str) -> AddressBookResult<Flow> {
        self.prompter.say(&format!(
            "
--- Address Book: {} ---
1. Add New Contact
2. Add Multiple Contacts
3. Edit Contact
4. Delete Contact
5. Display Contacts
6. Sort by Name
7. Sort by City
8. Sort by State
9. Sort by ZIP Code
0. Back",
            name
        ))?;
        let choice = self.prompter.ask("Enter your choice: ")?;

        match choice.as_str() {
            "1" => self.add_contact(name)?,
            "2" => self.add_multiple(name)?,
            "3" => self.edit_contact(name)?,
            "4" => self.delete_contact(name)?,
            "5" => self.display_contacts(name)?,
            "6" => self.sort_contacts(name, SortKey::Name)?,
            "7" => self.sort_contacts(name, SortKey::City)?,
            "8" => self.sort_contacts(name, SortKey::State)?,
            "9" => self.sort_contacts(name, SortKey::Zip)?,
            "0" => return Ok(Flow::Leave),
            other => return Err(invalid_choice(other)),
        }

        Ok(Flow::Continue)
    }

    fn add_contact(&mut self, name: &str) -> AddressBookResult<()> {
        let contact = self.prompter.ask_contact()?;
        let full_name = contact.full_name();
        self.registry.get_mut(name)?.add(contact)?;
        self.prompter
            .say(&format!("Contact {} added successfully.", full_name))
    }

    /// Add several contacts; the count is validated before anything is added
    fn add_multiple(&mut self, name: &str) -> AddressBookResult<()> {
        let count = self
            .prompter
            .ask_count("How many contacts do you want to add? ")?;

        let mut added = 0usize;
        for i in 1..=count {
            self.prompter
                .say(&format!("Contact {} of {}:", i, count))?;
            match self.add_contact(name) {
                Ok(()) => added += 1,
                Err(AddressBookError::InputClosed) => return Err(AddressBookError::InputClosed),
                Err(e) => self.report(&e)?,
            }
        }

        info!(book = name, requested = count, added, "Bulk add finished");
        self.prompter
            .say(&format!("Added {} of {} contact(s).", added, count))
    }

    fn edit_contact(&mut self, name: &str) -> AddressBookResult<()> {
        let (first, last) = self.prompter.ask_name("edit")?;
        let current = self
            .registry
            .get(name)?
            .get(&first, &last)
            .cloned()
            .ok_or_else(|| AddressBookError::contact_not_found(format!("{} {}", first, last)))?;

        self.prompter
            .say("Editing Contact Details (leave blank to keep current value):")?;
        let address = self.prompter.ask(&format!("New address [{}]: ", current.address))?;
        let city = self.prompter.ask(&format!("New city [{}]: ", current.city))?;
        let state = self.prompter.ask(&format!("New state [{}]: ", current.state))?;
        let zip_code = self.prompter.ask(&format!("New ZIP code [{}]: ", current.zip_code))?;
        let phone = self.prompter.ask(&format!("New phone number [{}]: ", current.phone))?;
        let email = self.prompter.ask(&format!("New email [{}]: ", current.email))?;

        let update = ContactUpdate::from_inputs(&address, &city, &state, &zip_code, &phone, &email);
        if update.is_empty() {
            return self.prompter.say("No changes made.");
        }

        let edited = self.registry.get_mut(name)?.edit(&first, &last, &update)?;
        let details = format_contact_details(edited);
        self.prompter
            .say(&format!("Contact {} {} updated successfully.", first, last))?;
        self.prompter.say(&details)
    }

    fn delete_contact(&mut self, name: &str) -> AddressBookResult<()> {
        let (first, last) = self.prompter.ask_name("delete")?;
        let removed = self.registry.get_mut(name)?.delete(&first, &last)?;
        self.prompter
            .say(&format!("Contact {} deleted successfully.", removed.full_name()))
    }

    fn display_contacts(&mut self, name: &str) -> AddressBookResult<()> {
        let book = self.registry.get(name)?;
        let contacts: Vec<_> = book.all().collect();
        info!(book = name, count = contacts.len(), "Displaying contacts");
        let listing = format_contact_list(&contacts);
        self.prompter.say(&listing)
    }

    fn sort_contacts(&mut self, name: &str, key: SortKey) -> AddressBookResult<()> {
        let sorted = self.registry.get(name)?.sorted(key);
        info!(book = name, by = %key, count = sorted.len(), "Sorted contacts");
        let listing = format!("Contacts sorted by {}:\n{}", key, format_contact_list(&sorted));
        self.prompter.say(&listing)
    }

    fn search_location(&mut self) -> AddressBookResult<()> {
        let token = self
            .prompter
            .ask("Enter the city, state or ZIP code to search for: ")?;
        let search = find_by_location(&self.registry, &token);
        let output = format_location_search(&search);
        self.prompter.say(&output)
    }

    fn export(&mut self, format: ExportFormat) -> AddressBookResult<()> {
        let path = self.settings.export_path(&self.paths, format);
        export_to_file(&self.registry, &path, format, self.settings.pretty_json)?;
        self.prompter.say(&format!(
            "Exported {} contact(s) from {} book(s) to {}",
            self.registry.total_contacts(),
            self.registry.len(),
            path.display()
        ))
    }
}

fn invalid_choice(choice: &str) -> AddressBookError {
    AddressBookError::InvalidInput(format!("'{}' is not a valid choice. Please try again.", choice))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run_session(input: &str) -> (TempDir, DirectoryRegistry, String) {
        let temp_dir = TempDir::new().unwrap();
        let paths = AddressBookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut output = Vec::new();

        let mut session = MenuSession::new(input.as_bytes(), &mut output, paths, Settings::default());
        session.run().unwrap();
        let registry = session.into_registry();

        (temp_dir, registry, String::from_utf8(output).unwrap())
    }

    const JANE: &str = "Jane\nDoe\n12 MG Road\nPune\nMH\n411001\n9876543210\njane@example.com\n";

    #[test]
    fn test_exit_immediately() {
        let (_temp, registry, output) = run_session("0\n");
        assert!(registry.is_empty());
        assert!(output.contains("--- Address Book Manager ---"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_temp, _registry, output) = run_session("");
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let (_temp, _registry, output) = run_session("abc\n0\n");
        assert!(output.contains("Error: Invalid input: 'abc' is not a valid choice."));
        assert_eq!(output.matches("--- Address Book Manager ---").count(), 2);
    }

    #[test]
    fn test_create_open_and_add() {
        let input = format!("1\nWork\n2\nWork\n1\n{}5\n0\n0\n", JANE);
        let (_temp, registry, output) = run_session(&input);

        assert!(output.contains("Address book 'Work' created."));
        assert!(output.contains("Contact Jane Doe added successfully."));
        assert!(output.contains("Total: 1 contact(s)"));
        assert_eq!(registry.get("Work").unwrap().get("Jane", "Doe").unwrap().city, "Pune");
    }

    #[test]
    fn test_contact_with_blank_first_name_rejected() {
        let input = "1\nWork\n2\nWork\n1\n\nDoe\n\nPune\nMH\n411001\n\n\n0\n0\n";
        let (_temp, registry, output) = run_session(input);

        assert!(output.contains("Error: Invalid input: A contact needs both a first and a last name"));
        assert!(registry.get("Work").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_book_reported() {
        let (_temp, registry, output) = run_session("1\nWork\n1\nWork\n0\n");
        assert!(output.contains("Error: Address book already exists: Work"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_open_missing_book() {
        let (_temp, _registry, output) = run_session("1\nWork\n2\nHome\n0\n");
        assert!(output.contains("Error: Address book not found: Home"));
    }

    #[test]
    fn test_bulk_add_with_invalid_count_adds_nothing() {
        let (_temp, registry, output) = run_session("1\nWork\n2\nWork\n2\ntwo\n0\n0\n");
        assert!(output.contains("Error: Invalid input: 'two' is not a valid number"));
        assert!(registry.get("Work").unwrap().is_empty());
    }

    #[test]
    fn test_bulk_add_reports_duplicates_and_continues() {
        let ravi = "Ravi\nK\n\nDelhi\nDL\n110001\n\n\n";
        let input = format!("1\nWork\n2\nWork\n2\n3\n{}{}{}0\n0\n", JANE, JANE, ravi);
        let (_temp, registry, output) = run_session(&input);

        assert!(output.contains("Error: Contact already exists: Jane Doe"));
        assert!(output.contains("Added 2 of 3 contact(s)."));
        assert_eq!(registry.get("Work").unwrap().len(), 2);
    }

    #[test]
    fn test_edit_city_updates_search() {
        let edit = "3\nJane\nDoe\n\nMumbai\n\n\n\n\n";
        let input = format!("1\nWork\n2\nWork\n1\n{}{}0\n4\nPune\n4\nMumbai\n0\n", JANE, edit);
        let (_temp, registry, output) = run_session(&input);

        assert!(output.contains("Contact Jane Doe updated successfully."));
        assert!(output.contains("No contacts found for 'Pune'."));
        assert!(output.contains("[Work] Jane Doe, 12 MG Road, Mumbai"));

        let book = registry.get("Work").unwrap();
        assert!(book.search_by("Pune").is_empty());
        assert_eq!(book.get("Jane", "Doe").unwrap().state, "MH");
    }

    #[test]
    fn test_edit_missing_contact() {
        let input = "1\nWork\n2\nWork\n3\nNo\nOne\n0\n0\n";
        let (_temp, _registry, output) = run_session(input);
        assert!(output.contains("Error: Contact not found: No One"));
    }

    #[test]
    fn test_delete_twice() {
        let input = format!("1\nWork\n2\nWork\n1\n{}4\nJane\nDoe\n4\nJane\nDoe\n0\n0\n", JANE);
        let (_temp, registry, output) = run_session(&input);

        assert!(output.contains("Contact Jane Doe deleted successfully."));
        assert!(output.contains("Error: Contact not found: Jane Doe"));
        assert!(registry.get("Work").unwrap().is_empty());
    }

    #[test]
    fn test_sort_by_name() {
        let bob = "Bob\nZ\n\n\n\n\n\n\n";
        let alice = "Alice\nA\n\n\n\n\n\n\n";
        let input = format!("1\nWork\n2\nWork\n1\n{}1\n{}6\n0\n0\n", bob, alice);
        let (_temp, _registry, output) = run_session(&input);

        let sorted = output.split("Contacts sorted by name:").nth(1).unwrap();
        assert!(sorted.find("Alice A").unwrap() < sorted.find("Bob Z").unwrap());
    }

    #[test]
    fn test_export_csv_writes_file() {
        let input = format!("1\nWork\n2\nWork\n1\n{}0\n5\n0\n", JANE);
        let (temp, _registry, output) = run_session(&input);

        let path = temp.path().join("exports").join("contacts.csv");
        assert!(output.contains("Exported 1 contact(s) from 1 book(s)"));
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with("First Name,Last Name,Address,City,State,Zip Code,Phone,Email\n"));
        assert!(text.contains("Jane,Doe,12 MG Road,Pune,MH,411001"));
    }
}
