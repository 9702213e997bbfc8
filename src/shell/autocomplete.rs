/// Shell keywords, in the order `help` lists them
pub const KEYWORDS: &[&str] = &[
    "list", "get", "create", "update", "delete", "count", "help", "exit",
];

pub struct Autocompleter {
    keywords: Vec<&'static str>,
}

impl Autocompleter {
    pub fn new() -> Self {
        Self {
            keywords: KEYWORDS.to_vec(),
        }
    }

    /// Keywords starting with `input`, case-insensitive and sorted
    pub fn get_suggestions(&self, input: &str) -> Vec<&'static str> {
        let input_lower = input.to_lowercase();
        let mut suggestions: Vec<&'static str> = self
            .keywords
            .iter()
            .copied()
            .filter(|kw| kw.starts_with(&input_lower))
            .collect();

        suggestions.sort();
        suggestions
    }
}

impl Default for Autocompleter {
    fn default() -> Self {
        Self::new()
    }
}
