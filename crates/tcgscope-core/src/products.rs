use serde::{Deserialize, Serialize};

/// Tri-state availability of a product line at a store.
///
/// `Unknown` (no data) is distinct from `Absent` (confirmed not stocked);
/// a product filter only matches `Present`. On the wire this is the
/// dataset's historical `true` / `false` / `null` encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Availability {
    Present,
    Absent,
    #[default]
    Unknown,
}

impl Availability {
    /// Confirmed present. `Unknown` does not count.
    #[must_use]
    pub fn is_present(self) -> bool {
        self == Availability::Present
    }
}

impl From<Option<bool>> for Availability {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Availability::Present,
            Some(false) => Availability::Absent,
            None => Availability::Unknown,
        }
    }
}

impl From<Availability> for Option<bool> {
    fn from(value: Availability) -> Self {
        match value {
            Availability::Present => Some(true),
            Availability::Absent => Some(false),
            Availability::Unknown => None,
        }
    }
}

/// The fixed set of tracked product lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductKey {
    PokemonEn,
    PokemonJp,
    PokemonKr,
    PokemonCn,
    OnePieceEn,
    OnePieceJp,
    Mtg,
    RiftboundEn,
    RiftboundCn,
    Lorcana,
    Topps,
    Yugioh,
}

impl ProductKey {
    pub const ALL: [ProductKey; 12] = [
        ProductKey::PokemonEn,
        ProductKey::PokemonJp,
        ProductKey::PokemonKr,
        ProductKey::PokemonCn,
        ProductKey::OnePieceEn,
        ProductKey::OnePieceJp,
        ProductKey::Mtg,
        ProductKey::RiftboundEn,
        ProductKey::RiftboundCn,
        ProductKey::Lorcana,
        ProductKey::Topps,
        ProductKey::Yugioh,
    ];

    /// The dataset field name for this key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProductKey::PokemonEn => "pokemonEn",
            ProductKey::PokemonJp => "pokemonJp",
            ProductKey::PokemonKr => "pokemonKr",
            ProductKey::PokemonCn => "pokemonCn",
            ProductKey::OnePieceEn => "onePieceEn",
            ProductKey::OnePieceJp => "onePieceJp",
            ProductKey::Mtg => "mtg",
            ProductKey::RiftboundEn => "riftboundEn",
            ProductKey::RiftboundCn => "riftboundCn",
            ProductKey::Lorcana => "lorcana",
            ProductKey::Topps => "topps",
            ProductKey::Yugioh => "yugioh",
        }
    }

    /// Human-readable label for listings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProductKey::PokemonEn => "Pokémon (EN)",
            ProductKey::PokemonJp => "Pokémon (JP)",
            ProductKey::PokemonKr => "Pokémon (KR)",
            ProductKey::PokemonCn => "Pokémon (CN)",
            ProductKey::OnePieceEn => "One Piece (EN)",
            ProductKey::OnePieceJp => "One Piece (JP)",
            ProductKey::Mtg => "Magic: The Gathering",
            ProductKey::RiftboundEn => "Riftbound (EN)",
            ProductKey::RiftboundCn => "Riftbound (CN)",
            ProductKey::Lorcana => "Lorcana",
            ProductKey::Topps => "TOPPS",
            ProductKey::Yugioh => "Yu-Gi-Oh!",
        }
    }

    /// Look a key up by its dataset field name.
    #[must_use]
    pub fn parse(name: &str) -> Option<ProductKey> {
        ProductKey::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

/// Availability of every tracked product line at one store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductShelf {
    #[serde(default)]
    pub pokemon_en: Availability,
    #[serde(default)]
    pub pokemon_jp: Availability,
    #[serde(default)]
    pub pokemon_kr: Availability,
    #[serde(default)]
    pub pokemon_cn: Availability,
    #[serde(default)]
    pub one_piece_en: Availability,
    #[serde(default)]
    pub one_piece_jp: Availability,
    #[serde(default)]
    pub mtg: Availability,
    #[serde(default)]
    pub riftbound_en: Availability,
    #[serde(default)]
    pub riftbound_cn: Availability,
    #[serde(default)]
    pub lorcana: Availability,
    #[serde(default)]
    pub topps: Availability,
    #[serde(default)]
    pub yugioh: Availability,
}

impl ProductShelf {
    #[must_use]
    pub fn get(&self, key: ProductKey) -> Availability {
        match key {
            ProductKey::PokemonEn => self.pokemon_en,
            ProductKey::PokemonJp => self.pokemon_jp,
            ProductKey::PokemonKr => self.pokemon_kr,
            ProductKey::PokemonCn => self.pokemon_cn,
            ProductKey::OnePieceEn => self.one_piece_en,
            ProductKey::OnePieceJp => self.one_piece_jp,
            ProductKey::Mtg => self.mtg,
            ProductKey::RiftboundEn => self.riftbound_en,
            ProductKey::RiftboundCn => self.riftbound_cn,
            ProductKey::Lorcana => self.lorcana,
            ProductKey::Topps => self.topps,
            ProductKey::Yugioh => self.yugioh,
        }
    }

    /// `true` only when every given key is confirmed `Present`.
    #[must_use]
    pub fn stocks_all(&self, keys: &[ProductKey]) -> bool {
        keys.iter().all(|key| self.get(*key).is_present())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_roundtrips_the_nullable_bool_encoding() {
        assert_eq!(Availability::from(Some(true)), Availability::Present);
        assert_eq!(Availability::from(Some(false)), Availability::Absent);
        assert_eq!(Availability::from(None), Availability::Unknown);
        assert_eq!(Option::<bool>::from(Availability::Unknown), None);
    }

    #[test]
    fn only_present_counts_as_present() {
        assert!(Availability::Present.is_present());
        assert!(!Availability::Absent.is_present());
        assert!(!Availability::Unknown.is_present());
    }

    #[test]
    fn shelf_deserialises_nullable_bools() {
        let shelf: ProductShelf = serde_json::from_str(
            r#"{"pokemonEn": true, "mtg": false, "lorcana": null, "yugioh": true}"#,
        )
        .expect("valid shelf JSON");
        assert_eq!(shelf.pokemon_en, Availability::Present);
        assert_eq!(shelf.mtg, Availability::Absent);
        assert_eq!(shelf.lorcana, Availability::Unknown);
        // Missing fields default to unknown, not absent.
        assert_eq!(shelf.topps, Availability::Unknown);
    }

    #[test]
    fn shelf_serialises_unknown_as_null() {
        let shelf = ProductShelf {
            pokemon_en: Availability::Present,
            ..ProductShelf::default()
        };
        let json = serde_json::to_value(&shelf).expect("serializable");
        assert_eq!(json["pokemonEn"], serde_json::json!(true));
        assert_eq!(json["mtg"], serde_json::Value::Null);
    }

    #[test]
    fn stocks_all_is_a_conjunction() {
        let shelf = ProductShelf {
            pokemon_en: Availability::Present,
            mtg: Availability::Present,
            lorcana: Availability::Unknown,
            ..ProductShelf::default()
        };
        assert!(shelf.stocks_all(&[ProductKey::PokemonEn, ProductKey::Mtg]));
        assert!(!shelf.stocks_all(&[ProductKey::PokemonEn, ProductKey::Lorcana]));
        assert!(shelf.stocks_all(&[]), "empty selection always passes");
    }

    #[test]
    fn product_key_parse_matches_wire_names() {
        for key in ProductKey::ALL {
            assert_eq!(ProductKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(ProductKey::parse("pokemonDE"), None);
    }

    #[test]
    fn product_key_serde_names_match_as_str() {
        for key in ProductKey::ALL {
            let json = serde_json::to_value(key).expect("serializable");
            assert_eq!(json, serde_json::json!(key.as_str()));
        }
    }
}
