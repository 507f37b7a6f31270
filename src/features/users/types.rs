//! Response types for the random user API. The payload is API-defined and
//! treated as immutable once received; the view only ever replaces the whole
//! collection, never individual fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Envelope returned by the API: the `results` array drives the view, the
/// `info` block is metadata about the generated batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsersResponse {
    pub results: Vec<User>,
    pub info: BatchInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchInfo {
    pub seed: String,
    pub results: u32,
    pub page: u32,
    pub version: String,
}

/// One randomly generated profile record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub gender: String,
    pub name: Name,
    pub location: Location,
    pub email: String,
    pub login: LoginInfo,
    pub dob: Dob,
    pub phone: String,
    pub cell: String,
    pub picture: Picture,
    pub nat: String,
}

impl User {
    /// Full display name, e.g. `Jane Doe`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Name {
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: Postcode,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Street {
    pub number: u32,
    pub name: String,
}

/// Postcodes arrive as bare numbers or strings depending on the locale of
/// the generated profile, so both shapes must deserialize.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Postcode {
    Number(u64),
    Text(String),
}

impl fmt::Display for Postcode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postcode::Number(value) => write!(formatter, "{value}"),
            Postcode::Text(value) => write!(formatter, "{value}"),
        }
    }
}

/// Demo credentials returned by the API; the `uuid` is the stable identity
/// used to key list rows. These are generated values, not real secrets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginInfo {
    pub uuid: String,
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dob {
    pub date: String,
    pub age: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}

#[cfg(test)]
mod tests {
    use super::{Postcode, User, UsersResponse};
    use serde_json::json;

    fn sample_payload() -> serde_json::Value {
        json!({
            "results": [
                {
                    "gender": "female",
                    "name": { "title": "Miss", "first": "Jennie", "last": "Nichols" },
                    "location": {
                        "street": { "number": 8929, "name": "Valwood Pkwy" },
                        "city": "Billings",
                        "state": "Michigan",
                        "country": "United States",
                        "postcode": 63104
                    },
                    "email": "jennie.nichols@example.com",
                    "login": {
                        "uuid": "7a0eed16-9430-4d68-901f-c0d4c1c3bf00",
                        "username": "yellowpeacock117",
                        "password": "addison"
                    },
                    "dob": { "date": "1992-03-08T15:13:16.688Z", "age": 30 },
                    "phone": "(272) 790-0888",
                    "cell": "(489) 330-2385",
                    "picture": {
                        "large": "https://randomuser.me/api/portraits/women/75.jpg",
                        "medium": "https://randomuser.me/api/portraits/med/women/75.jpg",
                        "thumbnail": "https://randomuser.me/api/portraits/thumb/women/75.jpg"
                    },
                    "nat": "US"
                },
                {
                    "gender": "male",
                    "name": { "title": "Mr", "first": "Storm", "last": "Mortensen" },
                    "location": {
                        "street": { "number": 5034, "name": "Fasanvænget" },
                        "city": "Jerslev Sj",
                        "state": "Hovedstaden",
                        "country": "Denmark",
                        "postcode": "8620"
                    },
                    "email": "storm.mortensen@example.com",
                    "login": {
                        "uuid": "b6dbcf29-61f5-4caf-b77e-f4b2a4a1b3a6",
                        "username": "bluefrog447",
                        "password": "monkey12"
                    },
                    "dob": { "date": "1968-02-27T04:40:31.412Z", "age": 54 },
                    "phone": "04690518",
                    "cell": "61469393",
                    "picture": {
                        "large": "https://randomuser.me/api/portraits/men/15.jpg",
                        "medium": "https://randomuser.me/api/portraits/med/men/15.jpg",
                        "thumbnail": "https://randomuser.me/api/portraits/thumb/men/15.jpg"
                    },
                    "nat": "DK"
                }
            ],
            "info": { "seed": "56d27f4a53bd5441", "results": 2, "page": 1, "version": "1.4" }
        })
    }

    #[test]
    fn deserializes_a_realistic_payload() {
        let response: UsersResponse =
            serde_json::from_value(sample_payload()).expect("Failed to deserialize");

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.info.results, 2);

        let jennie = &response.results[0];
        assert_eq!(jennie.full_name(), "Jennie Nichols");
        assert_eq!(jennie.nat, "US");
        assert_eq!(jennie.dob.age, 30);
        assert_eq!(jennie.location.postcode, Postcode::Number(63104));

        let storm = &response.results[1];
        assert_eq!(storm.gender, "male");
        assert_eq!(
            storm.location.postcode,
            Postcode::Text("8620".to_string())
        );
    }

    #[test]
    fn postcode_displays_both_shapes() {
        assert_eq!(Postcode::Number(63104).to_string(), "63104");
        assert_eq!(Postcode::Text("EC1A 1BB".to_string()).to_string(), "EC1A 1BB");
    }

    #[test]
    fn user_roundtrips_through_json() {
        let response: UsersResponse =
            serde_json::from_value(sample_payload()).expect("Failed to deserialize");
        let user = response.results[0].clone();

        let json = serde_json::to_string(&user).expect("Failed to serialize");
        assert!(json.contains("yellowpeacock117"));
        assert!(json.contains("Valwood Pkwy"));

        let back: User = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(back, user);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut payload = sample_payload();
        payload["results"][0]["registered"] =
            json!({ "date": "2007-07-09T05:51:59.390Z", "age": 14 });
        payload["results"][0]["id"] = json!({ "name": "SSN", "value": "405-88-3636" });

        let response: UsersResponse =
            serde_json::from_value(payload).expect("Failed to deserialize");
        assert_eq!(response.results[0].email, "jennie.nichols@example.com");
    }
}
