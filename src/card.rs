use serde::Deserialize;

use scraper::{Html, Node};

/// One entry of a set list. PSA delivers the card name as an HTML anchor in
/// string form; the display name and the trailing segment of the anchor's
/// link are pulled out at decode time.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawCard")]
pub struct Card {
    pub number: String,
    pub raw_name: String,
    name: String,
    identifier: String,
}

impl Card {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque token used to reference this card in follow-up queries.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

#[derive(Deserialize)]
struct RawCard {
    #[serde(rename = "CardNumber", default)]
    number: String,
    #[serde(rename = "CardName", default)]
    raw_name: String,
}

impl From<RawCard> for Card {
    fn from(raw: RawCard) -> Self {
        let (name, identifier) = extract(&raw.raw_name);

        Self {
            number: raw.number,
            raw_name: raw.raw_name,
            name,
            identifier,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetList {
    pub draw: i64,
    pub records_total: i64,
    pub records_filtered: i64,
    pub has_check_list_items: bool,
    pub data: Vec<Card>,
}

fn extract(raw_name: &str) -> (String, String) {
    let fragment = Html::parse_fragment(raw_name);

    let mut name = String::new();
    let mut identifier = String::new();

    for node in fragment.root_element().descendants() {
        match node.value() {
            // A raw name holds a single meaningful text node, but nothing
            // guarantees that; the last one seen wins.
            Node::Text(text) => name = text.to_string(),
            Node::Element(element) => {
                if let Some(href) = element.attr("href") {
                    identifier = href.rsplit('/').next().unwrap_or(href).to_owned();
                }
            }
            _ => {}
        }
    }

    (name, identifier)
}
