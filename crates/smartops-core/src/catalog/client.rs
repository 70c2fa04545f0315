use serde::{Deserialize, Serialize};

use crate::lenient;

/// A person to reach at a client site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    #[serde(deserialize_with = "lenient::option")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient::option")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::option")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::option")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::option")]
    pub cellphone: Option<String>,
    #[serde(deserialize_with = "lenient::option")]
    pub client_id: Option<i64>,
}

/// An installation or service visit performed for a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    #[serde(deserialize_with = "lenient::option")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient::option")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient::option")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub equipment_installed: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::list")]
    pub images: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::option")]
    pub notes: Option<String>,
    #[serde(deserialize_with = "lenient::option")]
    pub invoice_id: Option<i64>,
    #[serde(deserialize_with = "lenient::option")]
    pub client_id: Option<i64>,
}

/// A customer account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    #[serde(deserialize_with = "lenient::option")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient::option")]
    pub company_name: Option<String>,
    #[serde(deserialize_with = "lenient::option")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient::option")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient::option")]
    pub state: Option<String>,
    #[serde(deserialize_with = "lenient::option")]
    pub zip: Option<String>,
    #[serde(deserialize_with = "lenient::option")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub contacts: Option<Vec<Contact>>,
    #[serde(deserialize_with = "lenient::list")]
    pub jobs: Option<Vec<Job>>,
}

impl Client {
    pub fn display_name(&self) -> &str {
        self.company_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("Unnamed client")
    }

    /// "City, ST 12345" with whichever parts are present.
    pub fn location(&self) -> Option<String> {
        let city_state = match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) => Some(format!("{}, {}", city, state)),
            (Some(part), None) | (None, Some(part)) => Some(part.to_string()),
            (None, None) => None,
        };
        match (city_state, self.zip.as_deref()) {
            (Some(cs), Some(zip)) => Some(format!("{} {}", cs, zip)),
            (Some(cs), None) => Some(cs),
            (None, Some(zip)) => Some(zip.to_string()),
            (None, None) => None,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        self.contacts.as_deref().unwrap_or_default()
    }

    pub fn jobs(&self) -> &[Job] {
        self.jobs.as_deref().unwrap_or_default()
    }
}
