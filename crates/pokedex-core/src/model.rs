//! Catalog Models
//!
//! Wire payloads of the list and detail endpoints and the domain types built
//! from them.

use serde::Deserialize;

/// Page tokens of the most recently loaded page. `None` marks a boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationCursors {
    pub previous: Option<String>,
    pub next: Option<String>,
}

/// One list entry: the display name and the URL of its detail payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemSummaryRef {
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "url")]
    pub detail_locator: String,
}

/// A page returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageResult {
    pub previous: Option<String>,
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<ItemSummaryRef>,
}

impl PageResult {
    pub fn cursors(&self) -> NavigationCursors {
        NavigationCursors {
            previous: self.previous.clone(),
            next: self.next.clone(),
        }
    }
}

// ========================
// Detail payload (wire)
// ========================

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct AbilitySlot {
    ability: NamedResource,
}

#[derive(Debug, Deserialize)]
struct MoveSlot {
    #[serde(rename = "move")]
    move_ref: NamedResource,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    type_ref: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
struct Sprites {
    front_shiny: Option<String>,
    back_shiny: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailPayload {
    name: String,
    height: u32,
    weight: u32,
    #[serde(default)]
    abilities: Vec<AbilitySlot>,
    #[serde(default)]
    moves: Vec<MoveSlot>,
    #[serde(default)]
    sprites: Sprites,
    #[serde(default)]
    types: Vec<TypeSlot>,
    #[serde(default)]
    forms: Vec<NamedResource>,
}

/// Full data for one item, built fresh from every detail response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "DetailPayload")]
pub struct ItemDetail {
    pub name: String,
    /// `forms[0].name`, shown as the title of the detail view
    pub form_name: Option<String>,
    pub height: u32,
    pub weight: u32,
    pub abilities: Vec<String>,
    pub moves: Vec<String>,
    pub sprite_front: Option<String>,
    pub sprite_back: Option<String>,
    pub types: Vec<String>,
}

impl From<DetailPayload> for ItemDetail {
    fn from(payload: DetailPayload) -> Self {
        Self {
            name: payload.name,
            form_name: payload.forms.into_iter().next().map(|form| form.name),
            height: payload.height,
            weight: payload.weight,
            abilities: payload.abilities.into_iter().map(|slot| slot.ability.name).collect(),
            moves: payload.moves.into_iter().map(|slot| slot.move_ref.name).collect(),
            sprite_front: payload.sprites.front_shiny,
            sprite_back: payload.sprites.back_shiny,
            types: payload.types.into_iter().map(|slot| slot.type_ref.name).collect(),
        }
    }
}

impl ItemDetail {
    /// Name for the detail view: the first form's name, else the item name
    pub fn display_name(&self) -> &str {
        self.form_name.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::detail_json;
    use serde_json::json;

    #[test]
    fn test_page_result_from_list_response() {
        let body = json!({
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=16&limit=16",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        });
        let page: PageResult = serde_json::from_value(body).unwrap();

        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].display_name, "bulbasaur");
        assert_eq!(page.results[1].detail_locator, "https://pokeapi.co/api/v2/pokemon/2/");
        assert_eq!(
            page.cursors(),
            NavigationCursors {
                previous: None,
                next: Some("https://pokeapi.co/api/v2/pokemon?offset=16&limit=16".to_string()),
            }
        );
    }

    #[test]
    fn test_item_detail_flattens_nested_names() {
        let detail: ItemDetail = serde_json::from_str(&detail_json("pikachu", 8)).unwrap();

        assert_eq!(detail.name, "pikachu");
        assert_eq!(detail.display_name(), "pikachu");
        assert_eq!(detail.abilities, vec!["static", "lightning-rod"]);
        assert_eq!(detail.moves.len(), 8);
        assert_eq!(detail.moves[0], "move-0");
        assert_eq!(detail.types, vec!["electric"]);
        assert_eq!(detail.sprite_front.as_deref(), Some("https://img.example/pikachu/front_shiny.png"));
        assert_eq!(detail.sprite_back.as_deref(), Some("https://img.example/pikachu/back_shiny.png"));
    }

    #[test]
    fn test_item_detail_tolerates_null_sprites_and_missing_forms() {
        let body = json!({
            "name": "missingno",
            "height": 10,
            "weight": 100,
            "sprites": { "front_shiny": null, "back_shiny": null },
            "abilities": [],
            "moves": [],
            "types": []
        });
        let detail: ItemDetail = serde_json::from_value(body).unwrap();

        assert_eq!(detail.form_name, None);
        assert_eq!(detail.display_name(), "missingno");
        assert_eq!(detail.sprite_front, None);
    }

    #[test]
    fn test_form_name_wins_for_display() {
        let body = json!({
            "name": "deoxys-normal",
            "height": 17,
            "weight": 608,
            "forms": [{ "name": "deoxys" }]
        });
        let detail: ItemDetail = serde_json::from_value(body).unwrap();
        assert_eq!(detail.display_name(), "deoxys");
    }

    #[test]
    fn test_list_body_is_not_a_detail() {
        let body = json!({ "count": 0, "next": null, "previous": null, "results": [] });
        assert!(serde_json::from_value::<ItemDetail>(body).is_err());
    }
}
