//! The `HeadingBinding` (§3) and heading discovery, the first half of
//! component G. Discovery is sticky across pages by design: the register
//! often mixes header-bearing and header-less continuation pages, so a
//! binding found on page 1 keeps serving page 2 onward (§9).

use std::sync::OnceLock;

use regex::Regex;

use crate::model::Cell;

/// The process-wide, persistent-across-pages mapping from logical columns to
/// the heading cell that named them. Application number and address are
/// mandatory for a page to be treated as a data page (§4.G.3); received date
/// and description are optional.
#[derive(Debug, Clone, Default)]
pub struct HeadingBinding {
    pub application_number: Option<Cell>,
    pub received_date: Option<Cell>,
    pub address: Option<Cell>,
    pub description: Option<Cell>,
}

impl HeadingBinding {
    /// All four fields are bound; discovery has nothing left to look for.
    pub fn is_complete(&self) -> bool {
        self.application_number.is_some()
            && self.received_date.is_some()
            && self.address.is_some()
            && self.description.is_some()
    }

    /// The two mandatory bindings are present; a page may be scanned for
    /// rows.
    pub fn has_mandatory(&self) -> bool {
        self.application_number.is_some() && self.address.is_some()
    }
}

fn application_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(developmentnumber|developmentno\.|appno)").unwrap())
}

fn received_date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(dateofapplication|dateofregistration|dateregistered)").unwrap())
}

fn address_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(propertyaddress|locationofdevelopment)").unwrap())
}

fn description_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(natureofdevelopment|descriptionofdev)").unwrap())
}

/// Scans `cells` for heading text, filling in whichever of `binding`'s fields
/// are still unset (§4.G.2). A no-op once the binding is already complete.
pub fn discover_headings(cells: &[Cell], binding: &mut HeadingBinding) {
    if binding.is_complete() {
        return;
    }

    for cell in cells {
        let normalized: String = cell
            .concatenated_text()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        if binding.application_number.is_none() && application_number_regex().is_match(&normalized) {
            binding.application_number = Some(cell.clone());
        }
        if binding.received_date.is_none() && received_date_regex().is_match(&normalized) {
            binding.received_date = Some(cell.clone());
        }
        if binding.address.is_none() && address_regex().is_match(&normalized) {
            binding.address = Some(cell.clone());
        }
        if binding.description.is_none() && description_regex().is_match(&normalized) {
            binding.description = Some(cell.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;
    use crate::model::Element;

    fn heading_cell(text: &str) -> Cell {
        let mut cell = Cell::new(Rectangle::new(0.0, 0.0, 100.0, 20.0));
        cell.elements.push(Element::new(Rectangle::new(0.0, 0.0, 100.0, 10.0), text));
        cell
    }

    #[test]
    fn discovers_all_four_headings() {
        let cells = vec![
            heading_cell("Development No."),
            heading_cell("Property Address"),
            heading_cell("Date of Application"),
            heading_cell("Nature of development"),
        ];
        let mut binding = HeadingBinding::default();
        discover_headings(&cells, &mut binding);
        assert!(binding.is_complete());
    }

    #[test]
    fn app_no_alias_matches() {
        let cells = vec![heading_cell("App No")];
        let mut binding = HeadingBinding::default();
        discover_headings(&cells, &mut binding);
        assert!(binding.application_number.is_some());
    }

    #[test]
    fn already_complete_binding_is_not_rescanned() {
        let mut binding = HeadingBinding {
            application_number: Some(heading_cell("stale")),
            received_date: Some(heading_cell("stale")),
            address: Some(heading_cell("stale")),
            description: Some(heading_cell("stale")),
        };
        let original = binding.application_number.clone();
        discover_headings(&[heading_cell("Development No.")], &mut binding);
        assert_eq!(binding.application_number, original);
    }

    #[test]
    fn non_matching_cell_leaves_binding_unset() {
        let cells = vec![heading_cell("irrelevant text")];
        let mut binding = HeadingBinding::default();
        discover_headings(&cells, &mut binding);
        assert!(!binding.has_mandatory());
    }
}
