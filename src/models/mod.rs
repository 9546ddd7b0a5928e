pub mod content;
pub mod quality;
pub mod review_item;
pub mod review_session;
pub mod session_card;
pub mod sm2;

pub use content::{ContentDeck, Sentence, Word};
pub use quality::{Quality, Rating};
pub use review_item::{ItemKey, ItemType, ReviewItem};
pub use review_session::ReviewSession;
pub use session_card::SessionCard;
