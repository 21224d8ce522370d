use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::{DocumentSlot, VisaType};

/// Submitted application as returned by the collection endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(deserialize_with = "lenient_id")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub nationality: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub visa_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub people_count: Option<u32>,
    #[serde(default, deserialize_with = "lenient_people")]
    pub people: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub property: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub passport: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub eid: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub visa_copy: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub studio_photo: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub health_insurance: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_at: Option<String>,
}

impl Application {
    /// Stored path of the uploaded document for a slot, if any.
    pub fn document_path(&self, slot: DocumentSlot) -> Option<&str> {
        let path = match slot {
            DocumentSlot::PropertyCopy => &self.property,
            DocumentSlot::PassportCopy => &self.passport,
            DocumentSlot::EidCopy => &self.eid,
            DocumentSlot::VisaCopy => &self.visa_copy,
            DocumentSlot::StudioPhoto => &self.studio_photo,
            DocumentSlot::HealthInsurance => &self.health_insurance,
        };
        path.as_deref().filter(|value| !value.trim().is_empty())
    }

    pub fn documents(&self) -> impl Iterator<Item = (DocumentSlot, &str)> + '_ {
        DocumentSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.document_path(slot).map(|path| (slot, path)))
    }

    pub fn kind(&self) -> Option<VisaType> {
        self.visa_type.as_deref().and_then(VisaType::parse)
    }

    pub fn kind_label(&self) -> &str {
        match self.kind() {
            Some(kind) => kind.title(),
            None => self.visa_type.as_deref().unwrap_or("N/A"),
        }
    }

    pub fn people_label(&self) -> String {
        match &self.people {
            Some(people) if !people.is_empty() => people.join(", "),
            _ => "N/A".into(),
        }
    }

    /// Backend creation timestamp; accepts RFC 3339 and `YYYY-MM-DD HH:MM:SS`.
    pub fn submitted_at(&self) -> Option<NaiveDateTime> {
        let raw = self.created_at.as_deref()?.trim();
        DateTime::parse_from_rfc3339(raw)
            .map(|value| value.naive_utc())
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
            .ok()
    }

    pub fn submitted_label(&self) -> String {
        self.submitted_at()
            .map(|value| value.format("%B %-d, %Y %H:%M").to_string())
            .unwrap_or_else(|| "N/A".into())
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    number_from(&value).ok_or_else(|| serde::de::Error::custom(format!("invalid id: {}", value)))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from)
        .and_then(|count| u32::try_from(count).ok()))
}

/// Strings pass through and numbers are stringified; any other shape reads
/// as absent rather than failing the whole record.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(text_from))
}

/// Relationship list sent as an array of names, an array of
/// `{relationship}` objects, or a JSON-encoded array string.
fn lenient_people<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(people_from))
}

fn people_from(value: Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| match item {
                    Value::Object(map) => map.get("relationship").and_then(text_from),
                    other => text_from(other),
                })
                .collect(),
        ),
        Value::String(encoded) => match serde_json::from_str::<Value>(&encoded) {
            Ok(decoded @ Value::Array(_)) => people_from(decoded),
            _ => None,
        },
        _ => None,
    }
}

fn text_from(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn number_from(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
