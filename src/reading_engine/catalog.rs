//! Static card and spread tables, plus the validated card catalog view.
//!
//! Only the Major Arcana 0..=13 are in the card table so far. Spread entries
//! carry their own [`SpreadAction`], so registering a layout is one entry here.

use crate::reading_engine::{
    error::{ReadingError, ReadingResult},
    models::{Card, SpreadAction::{self, NotImplemented, Positional}, SpreadLayout},
};

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

const fn card(id: u32, name: &'static str, upright: &'static str, reversed: &'static str) -> Card {
    Card { id, name, upright, reversed }
}

pub static MAJOR_ARCANA: [Card; 14] = [
    card(0, "The Fool",
        "New beginnings, optimism, trust in life",
        "Recklessness, foolishness, naivete"),
    card(1, "The Magician",
        "Focus, willpower, making things real",
        "Manipulation, poor planning, untapped talents"),
    card(2, "The High Priestess",
        "Intuition, sacred knowledge, divine feminine",
        "Secrets, disconnected from intuition, withdrawal and silence"),
    card(3, "The Empress",
        "Femininity, beauty, nature, nurturing, abundance",
        "Creative block, dependence on others"),
    card(4, "The Emperor",
        "Authority, establishment, structure, a father figure",
        "Domination, excessive control, lack of discipline, inflexibility"),
    card(5, "The Hierophant",
        "Spiritual wisdom, religious beliefs, conformity, tradition, institutions",
        "Personal beliefs, freedom, challenging the status quo"),
    card(6, "The Lovers",
        "Love, harmony, relationships, values alignment, choices",
        "Self-love, disharmony, imbalance, misalignment of values"),
    card(7, "The Chariot",
        "Control, willpower, success, action, determination",
        "Self-discipline, opposition, lack of direction"),
    card(8, "Strength",
        "Strength, courage, persuasion, influence, compassion",
        "Inner strength, self-doubt, low energy, raw emotion"),
    card(9, "The Hermit",
        "Soul-searching, introspection, being alone, inner guidance",
        "Isolation, loneliness, withdrawal"),
    card(10, "Wheel of Fortune",
        "Good luck, karma, life cycles, destiny, a turning point",
        "Bad luck, resistance to change, breaking cycles"),
    card(11, "Justice",
        "Justice, fairness, truth, cause and effect, law",
        "Unfairness, lack of accountability, dishonesty"),
    card(12, "The Hanged Man",
        "Pause, surrender, letting go, new perspectives",
        "Delays, resistance, stalling, indecision"),
    card(13, "Death",
        "Endings, change, transformation, transition",
        "Fear of change, holding on, stagnation"),
];

/// Read-only view over a card table, checked once on construction.
///
/// Ids must be dense (`0..len`, in order) because the shuffler deals ids
/// `0..catalog_size`; any gap would surface later as a data-integrity error.
#[derive(Debug, Clone, Copy)]
pub struct CardCatalog<'a> {
    cards: &'a [Card],
}

impl CardCatalog<'static> {
    /// The built-in Major Arcana table.
    pub fn major_arcana() -> ReadingResult<Self> {
        CardCatalog::new(&MAJOR_ARCANA)
    }
}

impl<'a> CardCatalog<'a> {
    pub fn new(cards: &'a [Card]) -> ReadingResult<Self> {
        if cards.is_empty() {
            return Err(ReadingError::InvalidCatalog("card catalog is empty".into()));
        }
        for (index, card) in cards.iter().enumerate() {
            if card.id as usize != index {
                return Err(ReadingError::InvalidCatalog(format!(
                    "card {:?} has id {} but sits at position {}",
                    card.name, card.id, index
                )));
            }
            if card.name.is_empty() || card.upright.is_empty() || card.reversed.is_empty() {
                return Err(ReadingError::InvalidCatalog(format!(
                    "card {} has an empty name or meaning",
                    card.id
                )));
            }
        }
        Ok(CardCatalog { cards })
    }

    /// Ids are dense, so the id is the index.
    pub fn get(&self, card_id: u32) -> Option<&'a Card> {
        self.cards.get(card_id as usize)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &'a [Card] {
        self.cards
    }
}

// ---------------------------------------------------------------------------
// Spreads
// ---------------------------------------------------------------------------

const fn spread(
    id: u32,
    card_count: u32,
    name: &'static str,
    positions: &'static [&'static str],
    description: &'static str,
    action: SpreadAction,
) -> SpreadLayout {
    SpreadLayout { id, card_count, name, positions, description, action }
}

pub static SPREADS: [SpreadLayout; 19] = [
    spread(0, 1, "Daily Card", &["Daily Card"],
        "A single card to provide insight for the day ahead.", Positional),
    spread(1, 1, "Yes/No", &["Answer"],
        "A single card to answer a yes or no question.", NotImplemented),
    spread(2, 1, "Advice", &["Advice"],
        "A single card offering guidance or advice.", Positional),
    spread(3, 2, "Situation and Advice", &["Situation", "Advice"],
        "Two cards: one representing the current situation and the other offering advice.", Positional),
    spread(4, 2, "You and Them", &["You", "Them"],
        "Two cards: one for you and one for another person involved.", Positional),
    spread(5, 2, "One or the Other", &["Option One", "Option Two"],
        "Two cards representing two different options or paths.", Positional),
    spread(6, 3, "Past, Present, Future", &["Past", "Present", "Future"],
        "Three cards representing the past, present, and future of a situation.", Positional),
    spread(7, 3, "Mind, Body, Spirit", &["Mind", "Body", "Spirit"],
        "Three cards representing the mental, physical, and spiritual aspects of a situation.", Positional),
    spread(8, 3, "Situation, Obstacle, Advice", &["Situation", "Obstacle", "Advice"],
        "Three cards representing the current situation, recommended action, and potential outcome.", Positional),
    spread(9, 3, "Strength, Weakness, Guidance", &["Strength", "Weakness", "Guidance"],
        "Three cards representing strengths, weaknesses, and guidance.", Positional),
    spread(10, 3, "You, Them, Relationship", &["You", "Them", "Relationship"],
        "Three cards representing you, another person, and the relationship between you.", Positional),
    spread(11, 3, "Stop, Start, Continue", &["Stop", "Start", "Continue"],
        "Three cards representing what to stop, start, and continue doing.", Positional),
    spread(12, 4, "Cross", &["Situation", "Challenge", "Advice", "Outcome"],
        "Four cards representing the situation, challenge, advice, and outcome.", Positional),
    spread(13, 5, "Decision",
        &["Situation", "Options", "Advice", "Potential Outcome", "Final Outcome"],
        "Five cards representing the situation, options, advice, potential outcome, and final outcome.", Positional),
    spread(14, 5, "Goals",
        &["Current State", "Desired State", "Obstacles", "Resources", "Next Steps"],
        "Five cards representing current state, desired state, obstacles, resources, and next steps.", Positional),
    spread(15, 7, "Horseshoe",
        &["Past Influences", "Present Situation", "Hidden Influences", "Obstacles",
          "Attitudes", "External Influences", "Outcome"],
        "Seven cards representing past influences, present situation, hidden influences, obstacles, attitudes, external influences, and outcome.", Positional),
    spread(16, 7, "Relationship",
        &["You", "Them", "The Relationship", "Strengths", "Weaknesses", "Advice", "Outcome"],
        "Seven cards representing you, them, the relationship, strengths, weaknesses, advice, and outcome.", Positional),
    // Row/column meanings for the grid are not settled yet.
    spread(17, 9, "3x3",
        &["Top Left", "Top Center", "Top Right",
          "Middle Left", "Center", "Middle Right",
          "Bottom Left", "Bottom Center", "Bottom Right"],
        "Nine cards laid out in a 3x3 grid; a more indepth version of the 3-card spreads.", NotImplemented),
    spread(18, 10, "Celtic Cross",
        &["Present", "Challenge", "Past", "Future", "Above", "Below", "Advice",
          "External Influences", "Hopes and Fears", "Outcome"],
        "Ten cards representing the present, challenge, past, future, above, below, advice, external influences, hopes and fears, and outcome.", Positional),
];
