/// A single worksheet cell as read from the source workbook.
///
/// Dates and error values are carried as `Text`; the reader decides their
/// textual form.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl Cell {
    /// True for missing cells and for text that is blank after trimming.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) | Cell::Bool(_) => false,
        }
    }

    /// Trimmed text form of the cell. Empty cells give an empty string.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.trim().to_string(),
            Cell::Number(n) => format_number(*n),
            Cell::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        }
    }

    /// Numeric value of the cell, or 0.0 when it has none.
    pub fn as_number(&self) -> f64 {
        match self {
            Cell::Number(n) if n.is_finite() => *n,
            Cell::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Cell::Text(s) => parse_number(s).unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Numeric value of the cell with currency decorations tolerated.
    pub fn as_amount(&self) -> f64 {
        match self {
            Cell::Text(s) => parse_amount(s),
            other => other.as_number(),
        }
    }
}

/// Render a number the way a spreadsheet shows it in General format:
/// integers without a fractional part.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Parse a quantity/rate style value: surrounding whitespace and thousands
/// separators are ignored. Non-finite results are rejected.
pub fn parse_number(s: &str) -> Option<f64> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Currency markers stripped before an amount is parsed, matched without
/// regard to ASCII case. Longest first so `Rs.` is removed before `Rs`.
const CURRENCY_MARKERS: &[&str] = &["\u{20b9}", "inr", "rs.", "rs", "/-"];

/// Remove every occurrence of `needle`, ignoring ASCII case.
fn remove_ignore_ascii_case(haystack: &str, needle: &str) -> String {
    // ASCII lowering keeps byte offsets, so indices into `lower` are valid in `haystack`.
    let lower = haystack.to_ascii_lowercase();
    let mut out = String::with_capacity(haystack.len());
    let mut pos = 0;
    while let Some(idx) = lower[pos..].find(needle) {
        out.push_str(&haystack[pos..pos + idx]);
        pos += idx + needle.len();
    }
    out.push_str(&haystack[pos..]);
    out
}

/// Parse a money amount such as `₹ 12,34,567.50`, `Rs. 1,500/-` or `1500`.
///
/// Never fails: anything that cannot be read as a finite number is 0.0.
pub fn parse_amount(s: &str) -> f64 {
    let mut cleaned = s.trim().to_string();
    for marker in CURRENCY_MARKERS {
        cleaned = remove_ignore_ascii_case(&cleaned, marker);
    }
    let cleaned: String = cleaned
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    if let Some(n) = parse_number(&cleaned) {
        return n;
    }

    // Last resort: keep the numeric skeleton only. Dots left over from
    // abbreviations ("No.", "Approx.") must not become a decimal point.
    let skeleton: String = cleaned
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let skeleton = skeleton.trim_matches('.');
    if !skeleton.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
        return 0.0;
    }
    parse_number(skeleton).unwrap_or(0.0)
}
