use std::collections::HashMap;
use std::path::Path;

use gsp_core::{Dataset, Element, Event, GspError};

/// Bidirectional event dictionary: built on first occurrence while reading
/// a text database, used in reverse when serializing results back out.
#[derive(Debug, Default)]
pub struct Dictionary {
    to_event: HashMap<String, Event>,
    to_name: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary::default()
    }

    fn resolve(&mut self, token: &str) -> Event {
        if let Some(&event) = self.to_event.get(token) {
            return event;
        }
        let id = self.to_name.len() as u32 + 1;
        let event = Event::new(id);
        self.to_name.push(token.to_string());
        self.to_event.insert(token.to_string(), event);
        event
    }

    /// Reverse-maps an event id back to its source token.
    pub fn name(&self, event: Event) -> Option<&str> {
        self.to_name
            .get((event.get() - 1) as usize)
            .map(String::as_str)
    }
}

/// Parses the whitespace-tokenized sequence database format: `-1`
/// terminates an element, `-2` terminates a sequence, any other token is an
/// event resolved through the dictionary. Empty elements (consecutive `-1`s)
/// are not emitted.
pub fn load_dataset(path: &Path) -> Result<(Dataset, Dictionary), GspError> {
    let content = std::fs::read_to_string(path)
        .map_err(|_| GspError::InputFileMissing(path.display().to_string()))?;

    let mut dictionary = Dictionary::new();
    let mut sequences = Vec::new();
    let mut current_seq: Vec<Element> = Vec::new();
    let mut current_elem: Vec<Event> = Vec::new();

    for token in content.split_whitespace() {
        match token {
            "-1" => {
                if !current_elem.is_empty() {
                    current_seq.push(Element::from_events(std::mem::take(&mut current_elem)));
                }
            }
            "-2" => {
                if !current_elem.is_empty() {
                    current_seq.push(Element::from_events(std::mem::take(&mut current_elem)));
                }
                sequences.push(std::mem::take(&mut current_seq));
            }
            other => {
                current_elem.push(dictionary.resolve(other));
            }
        }
    }
    if !current_elem.is_empty() {
        current_seq.push(Element::from_events(current_elem));
    }
    if !current_seq.is_empty() {
        sequences.push(current_seq);
    }

    Ok((Dataset::new(sequences), dictionary))
}
