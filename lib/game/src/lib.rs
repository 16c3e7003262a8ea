pub mod representations {
	pub mod square;
	pub mod piece;
	pub mod board;
	pub mod state;
}

pub mod moves {
	pub mod rays;
	pub mod move_list;
	pub mod move_gen;
	pub mod apply;
}

pub mod constants;
pub mod util;

pub use moves::{
	apply::{ClickOutcome, Commit, MoveError},
	move_list::MoveList,
};
pub use representations::{
	board::Board,
	piece::{Color, Piece, PieceId, PieceKind},
	square::Square,
	state::{GameState, Selection},
};
