//! Decomposition of `tourney_date` tokens (`YYYYMMDD`).

/// Year, month and ISO date derived from one date token; blank parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateParts {
    pub year: String,
    pub month: String,
    pub iso: String,
}

/// Splits a `YYYYMMDD` token.
///
/// The year needs at least 4 characters and the month at least 6. The ISO date
/// needs 8, except that a bare 4-character year maps to January 1st.
///
/// ```
/// use tennis_normalization::decompose_date;
///
/// let parts = decompose_date(Some("19680715"));
/// assert_eq!(parts.year, "1968");
/// assert_eq!(parts.month, "07");
/// assert_eq!(parts.iso, "1968-07-15");
/// assert_eq!(decompose_date(Some("1968")).iso, "1968-01-01");
/// ```
pub fn decompose_date(token: Option<&str>) -> DateParts {
    let chars: Vec<char> = token.unwrap_or_default().trim().chars().collect();
    let slice = |from: usize, to: usize| chars[from..to].iter().collect::<String>();
    let len = chars.len();
    if len < 4 {
        return DateParts::default();
    }

    let year = slice(0, 4);
    let month = if len >= 6 { slice(4, 6) } else { String::new() };
    let iso = if len >= 8 {
        format!("{year}-{month}-{}", slice(6, 8))
    } else if len == 4 {
        format!("{year}-01-01")
    } else {
        String::new()
    };
    DateParts { year, month, iso }
}
