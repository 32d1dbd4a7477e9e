/*!
 * Mobile operator prefix table for Colombian numbers.
 *
 * Each operator owns one or more inclusive ranges of 3-digit prefixes.
 * The table is built once per process and only ever read afterwards.
 */

use anyhow::{Result, anyhow};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Number of leading digits that identify an operator
pub const PREFIX_LEN: usize = 3;

/// Colombian mobile network operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Tigo,
    Movistar,
    Claro,
    Avantel,
    #[serde(rename = "ETB")]
    Etb,
    #[serde(rename = "WOM")]
    Wom,
    #[serde(rename = "Virgin Mobile")]
    VirginMobile,
    #[serde(rename = "Éxito Móvil")]
    ExitoMovil,
    #[serde(rename = "Flash Mobile")]
    FlashMobile,
}

impl Operator {
    /// All operators in table declaration order
    pub const ALL: [Operator; 9] = [
        Operator::Tigo,
        Operator::Movistar,
        Operator::Claro,
        Operator::Avantel,
        Operator::Etb,
        Operator::Wom,
        Operator::VirginMobile,
        Operator::ExitoMovil,
        Operator::FlashMobile,
    ];

    /// Commercial name as shown in reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tigo => "Tigo",
            Self::Movistar => "Movistar",
            Self::Claro => "Claro",
            Self::Avantel => "Avantel",
            Self::Etb => "ETB",
            Self::Wom => "WOM",
            Self::VirginMobile => "Virgin Mobile",
            Self::ExitoMovil => "Éxito Móvil",
            Self::FlashMobile => "Flash Mobile",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Operator {
    type Err = anyhow::Error;

    // Accepts the display name in any case, with or without spaces,
    // hyphens, underscores or accents ("virgin-mobile", "exitomovil").
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| match c {
                'É' | 'é' => 'e',
                'Ó' | 'ó' => 'o',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        match key.as_str() {
            "tigo" => Ok(Self::Tigo),
            "movistar" => Ok(Self::Movistar),
            "claro" => Ok(Self::Claro),
            "avantel" => Ok(Self::Avantel),
            "etb" => Ok(Self::Etb),
            "wom" => Ok(Self::Wom),
            "virginmobile" => Ok(Self::VirginMobile),
            "exitomovil" => Ok(Self::ExitoMovil),
            "flashmobile" => Ok(Self::FlashMobile),
            _ => Err(anyhow!("Unknown operator: {}", s)),
        }
    }
}

/// Operator column of a validation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorLabel {
    /// Prefix matched a known operator
    Known(Operator),
    /// Prefix was looked up and matched nothing
    Unknown,
    /// Validation stopped before the lookup ran
    NotApplicable,
}

impl OperatorLabel {
    /// The matched operator, if any
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Self::Known(operator) => Some(*operator),
            _ => None,
        }
    }
}

impl fmt::Display for OperatorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(operator) => write!(f, "{}", operator),
            Self::Unknown => write!(f, "Desconocido"),
            Self::NotApplicable => write!(f, "N/A"),
        }
    }
}

impl Serialize for OperatorLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Inclusive range of 3-digit prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRange {
    pub start: u16,
    pub end: u16,
}

impl PrefixRange {
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Range covering a single prefix
    pub const fn single(prefix: u16) -> Self {
        Self::new(prefix, prefix)
    }

    pub fn contains(&self, prefix: u16) -> bool {
        self.start <= prefix && prefix <= self.end
    }
}

/// Mapping from operator to the prefix ranges it owns
#[derive(Debug, Clone)]
pub struct OperatorTable {
    entries: Vec<(Operator, Vec<PrefixRange>)>,
}

static COLOMBIAN_OPERATORS: Lazy<OperatorTable> = Lazy::new(|| {
    OperatorTable::new(vec![
        (Operator::Tigo, vec![PrefixRange::new(300, 306)]),
        (
            Operator::Movistar,
            vec![
                PrefixRange::new(310, 314),
                PrefixRange::new(316, 319),
                PrefixRange::new(321, 323),
            ],
        ),
        (
            Operator::Claro,
            vec![
                PrefixRange::single(315),
                PrefixRange::single(320),
                PrefixRange::new(324, 325),
            ],
        ),
        (Operator::Avantel, vec![PrefixRange::new(350, 352)]),
        (Operator::Etb, vec![PrefixRange::new(353, 355)]),
        (Operator::Wom, vec![PrefixRange::new(356, 357)]),
        (Operator::VirginMobile, vec![PrefixRange::new(328, 329)]),
        (Operator::ExitoMovil, vec![PrefixRange::new(358, 359)]),
        (Operator::FlashMobile, vec![PrefixRange::single(334)]),
    ])
});

impl OperatorTable {
    /// Build a table from operator entries; earlier entries win on overlap
    pub fn new(entries: Vec<(Operator, Vec<PrefixRange>)>) -> Self {
        Self { entries }
    }

    /// The current Colombian numbering plan
    pub fn colombia() -> &'static OperatorTable {
        &COLOMBIAN_OPERATORS
    }

    /// Ranges owned by an operator, empty if it is not in the table
    pub fn ranges(&self, operator: Operator) -> &[PrefixRange] {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == operator)
            .map(|(_, ranges)| ranges.as_slice())
            .unwrap_or(&[])
    }

    /// Operator owning a numeric prefix
    pub fn lookup(&self, prefix: u16) -> Option<Operator> {
        self.entries
            .iter()
            .find(|(_, ranges)| ranges.iter().any(|range| range.contains(prefix)))
            .map(|(operator, _)| *operator)
    }

    /// Operator owning the first three digits of a national number.
    ///
    /// Short input or a non-numeric prefix yields `None`.
    pub fn identify(&self, national: &str) -> Option<Operator> {
        let prefix = national.as_bytes().get(..PREFIX_LEN)?;
        if !prefix.iter().all(u8::is_ascii_digit) {
            return None;
        }

        let value = prefix
            .iter()
            .fold(0u16, |acc, digit| acc * 10 + u16::from(digit - b'0'));

        self.lookup(value)
    }
}

/// Identify the operator of a national number using the Colombian table
pub fn identify_operator(national: &str) -> Option<Operator> {
    OperatorTable::colombia().identify(national)
}
