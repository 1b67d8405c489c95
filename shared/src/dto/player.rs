use log::debug;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dto::common::ApiEnvelope;

/// Reads a missing or `null` value as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Player record as the roster API returns it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub breed: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// `null` while the player is not on a team
    #[serde(default)]
    pub team_id: Option<i64>,
    #[serde(default)]
    pub cohort_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlayerList {
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerDetail {
    pub player: Player,
}

/// `{data: {players: [...]}}`
pub type PlayerListResponse = ApiEnvelope<PlayerList>;

/// `{data: {player: {...}}}`
pub type PlayerDetailResponse = ApiEnvelope<PlayerDetail>;

/// Field values collected from the creation form, sent as-is.
///
/// Entries keep the order the form produced them in. A name that appears
/// twice keeps its first position and its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPlayerInput {
    fields: Vec<(String, String)>,
}

impl NewPlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut input = Self::new();
        for (name, value) in entries {
            input.insert(name, value);
        }
        input
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => {
                debug!("Form field '{}' repeated, keeping last value", name);
                entry.1 = value;
            }
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for NewPlayerInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    fn sample_player_json() -> serde_json::Value {
        json!({
            "id": 4821,
            "name": "Crumpet",
            "breed": "American Staffordshire Terrier",
            "status": "bench",
            "imageUrl": "http://r.ddmcdn.com/crumpet.jpg",
            "createdAt": "2023-04-17T20:12:45.924Z",
            "updatedAt": "2023-04-17T20:12:45.924Z",
            "teamId": null,
            "cohortId": 2096
        })
    }

    #[test]
    fn test_player_deserializes_camel_case_fields() {
        let player: Player = serde_json::from_value(sample_player_json()).unwrap();

        assert_eq!(player.id, 4821);
        assert_eq!(player.name, "Crumpet");
        assert_eq!(player.breed, "American Staffordshire Terrier");
        assert_eq!(player.status, "bench");
        assert_eq!(player.image_url, "http://r.ddmcdn.com/crumpet.jpg");
        assert_eq!(player.team_id, None);
        assert_eq!(player.cohort_id, Some(2096));
        assert_eq!(player.created_at.as_deref(), Some("2023-04-17T20:12:45.924Z"));
    }

    #[test]
    fn test_list_response_unwraps_players() {
        let body = json!({
            "success": true,
            "error": null,
            "data": { "players": [sample_player_json(), sample_player_json()] }
        });

        let response: PlayerListResponse = serde_json::from_value(body).unwrap();
        let list = response.into_data().unwrap();
        assert_eq!(list.players.len(), 2);
    }

    #[test]
    fn test_detail_response_unwraps_player() {
        let body = json!({ "data": { "player": sample_player_json() } });

        let response: PlayerDetailResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.into_data().unwrap().player.name, "Crumpet");
    }

    #[test]
    fn test_null_text_fields_keep_the_rest_of_the_list() {
        let mut sparse = sample_player_json();
        sparse["id"] = json!(4822);
        sparse["breed"] = json!(null);
        sparse["imageUrl"] = json!(null);
        sparse["status"] = json!(null);
        let body = json!({ "data": { "players": [sample_player_json(), sparse] } });

        let response: PlayerListResponse = serde_json::from_value(body).unwrap();
        let players = response.into_data().unwrap().players;
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].breed, "American Staffordshire Terrier");
        assert_eq!(players[1].id, 4822);
        assert_eq!(players[1].breed, "");
        assert_eq!(players[1].image_url, "");
        assert_eq!(players[1].status, "");
    }

    #[test]
    fn test_missing_text_fields_default() {
        let player: Player = serde_json::from_value(json!({ "id": 1, "name": "Solo" })).unwrap();
        assert_eq!(player.breed, "");
        assert_eq!(player.team_id, None);
    }

    #[test]
    fn test_list_response_without_players_fails_to_parse() {
        let body = json!({ "data": { "teams": [] } });

        let parsed = serde_json::from_value::<PlayerListResponse>(body).map_err(ApiError::from);
        assert!(matches!(parsed, Err(ApiError::Parse(_))));
    }

    #[test]
    fn test_new_player_input_serializes_form_fields_verbatim() {
        let input = NewPlayerInput::from_entries([
            ("name", "Biscuit"),
            ("breed", "Beagle"),
            ("status", "Field"),
            ("image_url", "http://example.com/biscuit.png"),
            ("teamID", "12"),
            ("details", ""),
        ]);

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Biscuit",
                "breed": "Beagle",
                "status": "Field",
                "image_url": "http://example.com/biscuit.png",
                "teamID": "12",
                "details": ""
            })
        );
        assert_eq!(
            input.names().collect::<Vec<_>>(),
            vec!["name", "breed", "status", "image_url", "teamID", "details"]
        );
    }

    #[test_case(&[("name", "A"), ("name", "B")], "B" ; "last value wins")]
    #[test_case(&[("name", "A")], "A" ; "single value")]
    fn test_new_player_input_duplicate_names(entries: &[(&str, &str)], expected: &str) {
        let input = NewPlayerInput::from_entries(entries.iter().copied());
        assert_eq!(input.len(), 1);
        assert_eq!(input.get("name"), Some(expected));
    }
}
