use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Service category selected on the marketing site; drives which fields and
/// documents the application form requires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisaType {
    #[default]
    TenYears,
    FiveYears,
    RealEstate,
    Family,
}

impl VisaType {
    pub const ALL: [VisaType; 4] = [
        VisaType::TenYears,
        VisaType::FiveYears,
        VisaType::RealEstate,
        VisaType::Family,
    ];

    /// Wire value used in query parameters and the `type` multipart field.
    pub fn as_str(&self) -> &'static str {
        match self {
            VisaType::TenYears => "ten_years",
            VisaType::FiveYears => "five_years",
            VisaType::RealEstate => "real_estate",
            VisaType::Family => "family",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        VisaType::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == normalized)
    }

    /// Resolves the form entry parameter, falling back to `ten_years` when the
    /// parameter is absent or unrecognized.
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(VisaType::parse).unwrap_or_default()
    }

    /// Marketing title shown on the form banner and service listings.
    pub fn title(&self) -> &'static str {
        match self {
            VisaType::TenYears => "10 Years Golden Residency",
            VisaType::FiveYears => "5 Years Retirement Visa",
            VisaType::RealEstate => "Property Evaluation",
            VisaType::Family => "Dependent Visa",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            VisaType::TenYears => "Long-term residency for investors and professionals",
            VisaType::FiveYears => "Renewable residency for retirees aged 55 and above",
            VisaType::RealEstate => "Property valuation for real-estate backed residency",
            VisaType::Family => "Sponsor your spouse, children and family members",
        }
    }

    pub fn is_family(&self) -> bool {
        matches!(self, VisaType::Family)
    }
}

impl fmt::Display for VisaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VisaType::parse(s).ok_or_else(|| {
            format!(
                "unknown visa type `{}` (expected one of: ten_years, five_years, real_estate, family)",
                s
            )
        })
    }
}

/// Relationship tag attached to each dependent under the family visa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    Husband,
    Family,
    Children,
}

impl Relationship {
    pub const ALL: [Relationship; 3] = [
        Relationship::Husband,
        Relationship::Family,
        Relationship::Children,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Husband => "husband",
            Relationship::Family => "family",
            Relationship::Children => "children",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Relationship::Husband => "Husband",
            Relationship::Family => "Family",
            Relationship::Children => "Children",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Relationship::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == normalized)
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_param_defaults_to_ten_years() {
        assert_eq!(VisaType::from_param(None), VisaType::TenYears);
        assert_eq!(VisaType::from_param(Some("golden")), VisaType::TenYears);
        assert_eq!(VisaType::from_param(Some(" FAMILY ")), VisaType::Family);
    }

    #[test]
    fn visa_type_serializes_as_snake_case() {
        let json = serde_json::to_string(&VisaType::RealEstate).unwrap();
        assert_eq!(json, "\"real_estate\"");
    }

    #[test]
    fn relationship_parse_is_case_insensitive() {
        assert_eq!(Relationship::parse("Children"), Some(Relationship::Children));
        assert_eq!(Relationship::parse("cousin"), None);
    }
}
