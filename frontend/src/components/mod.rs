pub mod ad_card;
pub mod board;
pub mod card_grid;
