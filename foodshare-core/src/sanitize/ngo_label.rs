use geojson::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// label used for an NGO when none of the [`NgoLabelSource::CANDIDATES`] yields text.
pub const NGO_LABEL_FALLBACK: &str = "NGO";

/// where the display label of an NGO record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NgoLabelSource {
    NgoName,
    Name,
    RegistrationClean,
    Fallback,
}

impl NgoLabelSource {
    /// candidate properties in priority order. the first one holding text wins.
    pub const CANDIDATES: [NgoLabelSource; 3] = [
        NgoLabelSource::NgoName,
        NgoLabelSource::Name,
        NgoLabelSource::RegistrationClean,
    ];

    pub fn property_key(&self) -> Option<&'static str> {
        match self {
            NgoLabelSource::NgoName => Some("ngo_name"),
            NgoLabelSource::Name => Some("name"),
            NgoLabelSource::RegistrationClean => Some("registration_clean"),
            NgoLabelSource::Fallback => None,
        }
    }

    /// reads this candidate from a feature's properties, if it holds text.
    pub fn read(&self, properties: &JsonObject) -> Option<String> {
        let key = self.property_key()?;
        properties.get(key).and_then(non_empty_text)
    }
}

/// the text content of a property value. empty or whitespace-only strings are
/// treated as absent, as are null, booleans, arrays and objects. numbers keep
/// their JSON representation (registration identifiers are sometimes numeric).
pub fn non_empty_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// derives the display label for an NGO from its properties, walking
/// [`NgoLabelSource::CANDIDATES`] in order. never returns an empty label.
pub fn derive_ngo_label(properties: Option<&JsonObject>) -> (String, NgoLabelSource) {
    properties
        .and_then(|props| {
            NgoLabelSource::CANDIDATES
                .iter()
                .find_map(|source| source.read(props).map(|label| (label, *source)))
        })
        .unwrap_or_else(|| (String::from(NGO_LABEL_FALLBACK), NgoLabelSource::Fallback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            other => panic!("test fixture must be an object, found {other}"),
        }
    }

    #[test]
    fn test_empty_primary_name_falls_through() {
        let p = props(json!({ "ngo_name": "", "name": "Helping Hands" }));
        let (label, source) = derive_ngo_label(Some(&p));
        assert_eq!(label, "Helping Hands");
        assert_eq!(source, NgoLabelSource::Name);
    }

    #[test]
    fn test_primary_name_wins() {
        let p = props(json!({
            "ngo_name": "Robin Hood Army",
            "name": "RHA",
            "registration_clean": "MH/2019/0123"
        }));
        let (label, source) = derive_ngo_label(Some(&p));
        assert_eq!(label, "Robin Hood Army");
        assert_eq!(source, NgoLabelSource::NgoName);
    }

    #[test]
    fn test_registration_used_when_names_missing() {
        let p = props(json!({ "ngo_name": null, "name": "   ", "registration_clean": "MH/2019/0123" }));
        let (label, source) = derive_ngo_label(Some(&p));
        assert_eq!(label, "MH/2019/0123");
        assert_eq!(source, NgoLabelSource::RegistrationClean);
    }

    #[test]
    fn test_numeric_registration_is_text() {
        let p = props(json!({ "registration_clean": 40123 }));
        let (label, _) = derive_ngo_label(Some(&p));
        assert_eq!(label, "40123");
    }

    #[test]
    fn test_fallback_label() {
        let p = props(json!({ "ngo_name": "", "name": false, "cluster": 3 }));
        assert_eq!(
            derive_ngo_label(Some(&p)),
            (String::from(NGO_LABEL_FALLBACK), NgoLabelSource::Fallback)
        );
        assert_eq!(
            derive_ngo_label(None),
            (String::from(NGO_LABEL_FALLBACK), NgoLabelSource::Fallback)
        );
    }

    #[test]
    fn test_label_is_reproducible() {
        let p = props(json!({ "name": "Annapurna Trust" }));
        assert_eq!(derive_ngo_label(Some(&p)), derive_ngo_label(Some(&p)));
    }
}
