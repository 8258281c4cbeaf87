use serde::{Deserialize, Serialize};

/// Number formatting used in rendered summaries.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PrintOptions {
    /// Fractional digits shown for every element.
    pub precision: usize,
    /// Put the matrix grid on its own lines below the `mat` header.
    pub grid_on_new_line: bool,
}

impl PrintOptions {
    pub fn new(precision: usize, grid_on_new_line: bool) -> Self {
        Self {
            precision,
            grid_on_new_line,
        }
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            precision: 3,
            grid_on_new_line: true,
        }
    }
}
