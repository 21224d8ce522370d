use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const UNKNOWN_FLAG: &str = "🌍";

/// Nationality option served by the countries endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub id: String,
    pub name: String,
}

impl Country {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn flag(&self) -> &'static str {
        flag_for(&self.name)
    }

    pub fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        needle.is_empty() || self.name.to_lowercase().contains(&needle)
    }

    pub fn display_label(&self) -> String {
        format!("{} {}", self.flag(), self.name)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCountry {
    Record {
        #[serde(default)]
        id: Option<Value>,
        name: String,
    },
    Name(String),
}

impl<'de> Deserialize<'de> for Country {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Entries arrive either as `{id, name}` records or as bare names; a
        // bare name doubles as its own identifier.
        let raw = RawCountry::deserialize(deserializer)?;
        Ok(match raw {
            RawCountry::Record { id, name } => {
                let id = match id {
                    Some(Value::String(text)) if !text.is_empty() => text,
                    Some(Value::Number(number)) => number.to_string(),
                    _ => name.clone(),
                };
                Country { id, name }
            }
            RawCountry::Name(name) => Country {
                id: name.clone(),
                name,
            },
        })
    }
}

/// Emoji flag for a country name; unknown names get a globe.
pub fn flag_for(name: &str) -> &'static str {
    let normalized = name.trim().to_lowercase();
    FLAGS.get(normalized.as_str()).copied().unwrap_or(UNKNOWN_FLAG)
}

static FLAGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("united arab emirates", "🇦🇪"),
        ("saudi arabia", "🇸🇦"),
        ("kuwait", "🇰🇼"),
        ("qatar", "🇶🇦"),
        ("bahrain", "🇧🇭"),
        ("oman", "🇴🇲"),
        ("jordan", "🇯🇴"),
        ("lebanon", "🇱🇧"),
        ("syria", "🇸🇾"),
        ("iraq", "🇮🇶"),
        ("yemen", "🇾🇪"),
        ("egypt", "🇪🇬"),
        ("morocco", "🇲🇦"),
        ("algeria", "🇩🇿"),
        ("tunisia", "🇹🇳"),
        ("libya", "🇱🇾"),
        ("sudan", "🇸🇩"),
        ("south sudan", "🇸🇸"),
        ("ethiopia", "🇪🇹"),
        ("somalia", "🇸🇴"),
        ("djibouti", "🇩🇯"),
        ("comoros", "🇰🇲"),
        ("mauritania", "🇲🇷"),
        ("mali", "🇲🇱"),
        ("niger", "🇳🇪"),
        ("chad", "🇹🇩"),
        ("cameroon", "🇨🇲"),
        ("nigeria", "🇳🇬"),
        ("ghana", "🇬🇭"),
        ("senegal", "🇸🇳"),
        ("gambia", "🇬🇲"),
        ("guinea-bissau", "🇬🇼"),
        ("guinea", "🇬🇳"),
        ("sierra leone", "🇸🇱"),
        ("liberia", "🇱🇷"),
        ("ivory coast", "🇨🇮"),
        ("burkina faso", "🇧🇫"),
        ("togo", "🇹🇬"),
        ("benin", "🇧🇯"),
        ("central african republic", "🇨🇫"),
        ("congo", "🇨🇬"),
        ("democratic republic of the congo", "🇨🇩"),
        ("gabon", "🇬🇦"),
        ("equatorial guinea", "🇬🇶"),
        ("sao tome and principe", "🇸🇹"),
        ("angola", "🇦🇴"),
        ("zambia", "🇿🇲"),
        ("malawi", "🇲🇼"),
        ("mozambique", "🇲🇿"),
        ("zimbabwe", "🇿🇼"),
        ("botswana", "🇧🇼"),
        ("namibia", "🇳🇦"),
        ("south africa", "🇿🇦"),
        ("lesotho", "🇱🇸"),
        ("eswatini", "🇸🇿"),
        ("madagascar", "🇲🇬"),
        ("mauritius", "🇲🇺"),
        ("seychelles", "🇸🇨"),
        ("kenya", "🇰🇪"),
        ("uganda", "🇺🇬"),
        ("tanzania", "🇹🇿"),
        ("burundi", "🇧🇮"),
        ("rwanda", "🇷🇼"),
        ("united states", "🇺🇸"),
        ("canada", "🇨🇦"),
        ("mexico", "🇲🇽"),
        ("brazil", "🇧🇷"),
        ("argentina", "🇦🇷"),
        ("chile", "🇨🇱"),
        ("peru", "🇵🇪"),
        ("colombia", "🇨🇴"),
        ("venezuela", "🇻🇪"),
        ("ecuador", "🇪🇨"),
        ("bolivia", "🇧🇴"),
        ("paraguay", "🇵🇾"),
        ("uruguay", "🇺🇾"),
        ("guyana", "🇬🇾"),
        ("suriname", "🇸🇷"),
        ("french guiana", "🇬🇫"),
        ("united kingdom", "🇬🇧"),
        ("france", "🇫🇷"),
        ("germany", "🇩🇪"),
        ("italy", "🇮🇹"),
        ("spain", "🇪🇸"),
        ("portugal", "🇵🇹"),
        ("netherlands", "🇳🇱"),
        ("belgium", "🇧🇪"),
        ("switzerland", "🇨🇭"),
        ("austria", "🇦🇹"),
        ("sweden", "🇸🇪"),
        ("norway", "🇳🇴"),
        ("denmark", "🇩🇰"),
        ("finland", "🇫🇮"),
        ("iceland", "🇮🇸"),
        ("ireland", "🇮🇪"),
        ("poland", "🇵🇱"),
        ("czech republic", "🇨🇿"),
        ("slovakia", "🇸🇰"),
        ("hungary", "🇭🇺"),
        ("romania", "🇷🇴"),
        ("bulgaria", "🇧🇬"),
        ("croatia", "🇭🇷"),
        ("slovenia", "🇸🇮"),
        ("serbia", "🇷🇸"),
        ("montenegro", "🇲🇪"),
        ("bosnia and herzegovina", "🇧🇦"),
        ("macedonia", "🇲🇰"),
        ("albania", "🇦🇱"),
        ("greece", "🇬🇷"),
        ("cyprus", "🇨🇾"),
        ("malta", "🇲🇹"),
        ("russia", "🇷🇺"),
        ("ukraine", "🇺🇦"),
        ("belarus", "🇧🇾"),
        ("moldova", "🇲🇩"),
        ("latvia", "🇱🇻"),
        ("lithuania", "🇱🇹"),
        ("estonia", "🇪🇪"),
        ("georgia", "🇬🇪"),
        ("armenia", "🇦🇲"),
        ("azerbaijan", "🇦🇿"),
        ("kazakhstan", "🇰🇿"),
        ("uzbekistan", "🇺🇿"),
        ("turkmenistan", "🇹🇲"),
        ("kyrgyzstan", "🇰🇬"),
        ("tajikistan", "🇹🇯"),
        ("china", "🇨🇳"),
        ("japan", "🇯🇵"),
        ("south korea", "🇰🇷"),
        ("north korea", "🇰🇵"),
        ("mongolia", "🇲🇳"),
        ("india", "🇮🇳"),
        ("pakistan", "🇵🇰"),
        ("bangladesh", "🇧🇩"),
        ("sri lanka", "🇱🇰"),
        ("nepal", "🇳🇵"),
        ("bhutan", "🇧🇹"),
        ("myanmar", "🇲🇲"),
        ("thailand", "🇹🇭"),
        ("laos", "🇱🇦"),
        ("cambodia", "🇰🇭"),
        ("vietnam", "🇻🇳"),
        ("malaysia", "🇲🇾"),
        ("singapore", "🇸🇬"),
        ("indonesia", "🇮🇩"),
        ("philippines", "🇵🇭"),
        ("brunei", "🇧🇳"),
        ("east timor", "🇹🇱"),
        ("australia", "🇦🇺"),
        ("new zealand", "🇳🇿"),
        ("papua new guinea", "🇵🇬"),
        ("fiji", "🇫🇯"),
        ("solomon islands", "🇸🇧"),
        ("vanuatu", "🇻🇺"),
        ("new caledonia", "🇳🇨"),
        ("french polynesia", "🇵🇫"),
        ("samoa", "🇼🇸"),
        ("tonga", "🇹🇴"),
        ("kiribati", "🇰🇮"),
        ("tuvalu", "🇹🇻"),
        ("nauru", "🇳🇷"),
        ("palau", "🇵🇼"),
        ("marshall islands", "🇲🇭"),
        ("micronesia", "🇫🇲"),
        ("turkey", "🇹🇷"),
        ("iran", "🇮🇷"),
        ("afghanistan", "🇦🇫"),
        ("israel", "🇮🇱"),
        ("palestine", "🇵🇸"),
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_ignore_case_and_padding() {
        assert_eq!(flag_for("  United Arab Emirates "), "🇦🇪");
        assert_eq!(flag_for("Atlantis"), "🌍");
    }

    #[test]
    fn deserializes_records_and_bare_names() {
        let parsed: Vec<Country> =
            serde_json::from_str(r#"[{"id": 7, "name": "Oman"}, "Kenya", {"name": "Peru"}]"#)
                .unwrap();
        assert_eq!(parsed[0], Country::new("7", "Oman"));
        assert_eq!(parsed[1], Country::new("Kenya", "Kenya"));
        assert_eq!(parsed[2], Country::new("Peru", "Peru"));
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let country = Country::new("1", "United Kingdom");
        assert!(country.matches("kING"));
        assert!(country.matches(""));
        assert!(!country.matches("france"));
    }
}
