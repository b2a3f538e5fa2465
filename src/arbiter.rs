use crate::boards::Board;
use crate::chess_errors::Rejection;
use crate::moves::MoveRecord;
use crate::pieces::*;
use crate::positions::{Position, GRID_SIZE};
use crate::rules;
use std::fmt::{self, Display};

// ---------------------------------------------
// Move Arbiter
// ---------------------------------------------

/// How a finished game ended. Stalemate counts as a draw; there is no
/// winner to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: PieceColor },
    Stalemate,
}

impl Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "Checkmate, {} wins", winner),
            GameOutcome::Stalemate => write!(f, "Stalemate, the game is a draw"),
        }
    }
}

/// A pawn that reached its promotion rank and now waits for the choice of
/// replacement piece. While this is set the turn does not pass and no
/// other move may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    pub position: Position,
    pub color: PieceColor,
}

/// The arbiter: full game state plus the rules for changing it. Moves
/// enter through `attempt_move`, promotion choices through `promote`;
/// everything else is read-only. A rejected request leaves the state
/// byte-for-byte untouched, and every accepted move replaces the board
/// wholesale, so readers never observe a half-applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: PieceColor,
    pending_promotion: Option<PendingPromotion>,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// A fresh game from the standard setup, white to move.
    pub fn new() -> GameState {
        GameState {
            board: Board::standard_setup(),
            side_to_move: PieceColor::White,
            pending_promotion: None,
            outcome: None,
        }
    }

    /// A game starting from an arbitrary position, for puzzles and tests.
    /// The outcome is evaluated immediately, so a position with no legal
    /// moves for `side_to_move` starts out already finished.
    pub fn with_board(board: Board, side_to_move: PieceColor) -> GameState {
        let mut state = GameState {
            board,
            side_to_move,
            pending_promotion: None,
            outcome: None,
        };
        state.refresh_outcome();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.side_to_move
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending_promotion
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Whether the given color's king currently stands attacked.
    pub fn is_in_check(&self, color: PieceColor) -> bool {
        self.board
            .king_position(color)
            .map_or(false, |king| self.board.tile_is_attacked(king, color.opposite()))
    }

    /// Tries to move the grabbed piece from source to target. Returns
    /// whether the move was committed; a refused move changes nothing.
    pub fn attempt_move(&mut self, piece: Piece, source: Position, target: Position) -> bool {
        self.try_move(piece, source, target).is_ok()
    }

    /// Completes a pending promotion with the chosen piece kind. Returns
    /// whether the promotion was performed; only then does the turn pass.
    pub fn promote(&mut self, kind: PieceKind) -> bool {
        self.try_promote(kind).is_ok()
    }

    /// Throws away the current game and starts over from the standard
    /// setup.
    pub fn restart(&mut self) {
        *self = GameState::new();
    }

    /// All targets `attempt_move` would accept for the piece standing on
    /// source. Empty whenever the piece cannot move at all right now:
    /// wrong turn, mismatched piece, finished game, pending promotion.
    pub fn legal_moves(&self, piece: Piece, source: Position) -> Vec<Position> {
        if self.outcome.is_some() || self.pending_promotion.is_some() {
            return Vec::new();
        }
        if !source.in_bounds() || piece.is_empty() || self.board.piece_at(source) != piece {
            return Vec::new();
        }
        let color = match piece.color() {
            Some(c) if c == self.side_to_move => c,
            _ => return Vec::new(),
        };
        rules::valid_moves(piece, source, &self.board)
            .into_iter()
            .filter(|&target| self.move_is_king_safe(piece, source, target, color))
            .collect()
    }

    pub(crate) fn try_move(
        &mut self,
        piece: Piece,
        source: Position,
        target: Position,
    ) -> Result<(), Rejection> {
        if self.outcome.is_some() {
            return Err(Rejection::GameOver);
        }
        if self.pending_promotion.is_some() {
            return Err(Rejection::PromotionPending);
        }
        if !source.in_bounds() || !target.in_bounds() {
            return Err(Rejection::OutOfBounds);
        }
        // the grabbed piece must be the one actually standing there
        if piece.is_empty() || self.board.piece_at(source) != piece {
            return Err(Rejection::NoSuchPiece);
        }
        let color = match piece.color() {
            Some(c) => c,
            None => return Err(Rejection::NoSuchPiece),
        };
        if color != self.side_to_move {
            return Err(Rejection::OutOfTurn);
        }
        let en_passant = self.board.move_is_en_passant(source, target);
        if !en_passant && !rules::is_valid_move(piece, source, target, &self.board) {
            return Err(self.classify_rejection(piece, source, target));
        }
        let castling = piece.kind() == PieceKind::King && (target.x - source.x).abs() == 2;
        if !self.move_is_king_safe(piece, source, target, color) {
            return Err(Rejection::SelfCheck);
        }
        self.commit(piece, source, target, color, en_passant, castling);
        Ok(())
    }

    pub(crate) fn try_promote(&mut self, kind: PieceKind) -> Result<(), Rejection> {
        if self.outcome.is_some() {
            return Err(Rejection::GameOver);
        }
        let pending = self.pending_promotion.ok_or(Rejection::InvalidPromotion)?;
        if !kind.is_promotable() {
            return Err(Rejection::InvalidPromotion);
        }
        let mut next = self.board.clone();
        next.set(pending.position, Piece::new(kind, pending.color).moved());
        self.board = next;
        self.pending_promotion = None;
        self.finish_turn();
        Ok(())
    }

    /// Builds the successor board and installs it. Capture removal falls
    /// out of overwriting the target tile; en passant and castling get
    /// their extra relocations here.
    fn commit(
        &mut self,
        piece: Piece,
        source: Position,
        target: Position,
        color: PieceColor,
        en_passant: bool,
        castling: bool,
    ) {
        let mut next = self.board.clone();
        next.set(source, Piece::Empty);
        next.set(target, piece.moved());
        if en_passant {
            // the captured pawn stands beside the mover, not on the target
            next.set(Position::new(target.x, source.y), Piece::Empty);
        }
        if castling {
            let short = target.x > source.x;
            let corner = Position::new(if short { GRID_SIZE - 1 } else { 0 }, source.y);
            let rook = next.piece_at(corner);
            next.set(corner, Piece::Empty);
            // the rook lands on the tile the king crossed
            let rook_x = if short { target.x - 1 } else { target.x + 1 };
            next.set(Position::new(rook_x, source.y), rook.moved());
        }
        next.record_move(MoveRecord::new(piece.kind(), color, source, target));
        self.board = next;
        if piece.kind() == PieceKind::Pawn && target.y == color.promotion_rank() {
            // the turn passes only once the promotion choice is in
            self.pending_promotion = Some(PendingPromotion {
                position: target,
                color,
            });
            return;
        }
        self.finish_turn();
    }

    fn finish_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        self.refresh_outcome();
    }

    /// Declares checkmate or stalemate when the side to move has no legal
    /// move left.
    fn refresh_outcome(&mut self) {
        let color = self.side_to_move;
        if self.has_any_legal_move(color) {
            return;
        }
        self.outcome = Some(if self.is_in_check(color) {
            GameOutcome::Checkmate {
                winner: color.opposite(),
            }
        } else {
            GameOutcome::Stalemate
        });
    }

    fn has_any_legal_move(&self, color: PieceColor) -> bool {
        Position::all_positions().any(|source| {
            let piece = self.board.piece_at(source);
            piece.is_color(color)
                && rules::valid_moves(piece, source, &self.board)
                    .into_iter()
                    .any(|target| self.move_is_king_safe(piece, source, target, color))
        })
    }

    /// One-ply simulation: relocate and ask whether the mover's king ends
    /// up attacked. Castling is exempt since its legality check already
    /// forbids every attacked tile on the king's way, and en passant is
    /// exempt because the relocation model does not remove the captured
    /// pawn.
    fn move_is_king_safe(
        &self,
        piece: Piece,
        source: Position,
        target: Position,
        color: PieceColor,
    ) -> bool {
        if piece.kind() == PieceKind::King && (target.x - source.x).abs() == 2 {
            return true;
        }
        if self.board.move_is_en_passant(source, target) {
            return true;
        }
        let sim = self.board.clone_with_relocation(source, target);
        sim.king_position(color)
            .map_or(true, |king| !sim.tile_is_attacked(king, color.opposite()))
    }

    /// Picks the most descriptive rejection for a move that failed shape
    /// legality. Purely diagnostic; by the time this runs the move is
    /// refused either way.
    fn classify_rejection(&self, piece: Piece, source: Position, target: Position) -> Rejection {
        if !rules::fits_shape(piece, source, target) {
            return Rejection::IllegalShape;
        }
        if let Some(color) = piece.color() {
            if self.board.tile_is_occupied_by(target, color) {
                return Rejection::OwnPieceOnTarget;
            }
        }
        match piece.kind() {
            // a knight whose shape fits and whose target is clear cannot
            // actually fail, so anything left is a shape problem
            PieceKind::Knight => Rejection::IllegalShape,
            PieceKind::Pawn => {
                // straight pawn moves must land on a free tile
                if target.x == source.x && self.board.straight_path_occupied(source, target, true) {
                    Rejection::PathBlocked
                } else {
                    Rejection::IllegalShape
                }
            }
            PieceKind::King => {
                if (target.x - source.x).abs() != 2 {
                    return Rejection::IllegalShape;
                }
                let short = target.x > source.x;
                let corner = Position::new(if short { GRID_SIZE - 1 } else { 0 }, source.y);
                let corner_piece = self.board.piece_at(corner);
                if !(corner_piece.kind() == PieceKind::Rook && !corner_piece.has_moved()) {
                    Rejection::IllegalShape
                } else if self.board.straight_path_occupied(source, corner, false) {
                    Rejection::PathBlocked
                } else {
                    // only the attacked-tile conditions are left
                    Rejection::SelfCheck
                }
            }
            _ => {
                if self.board.straight_path_occupied(source, target, false) {
                    Rejection::PathBlocked
                } else {
                    Rejection::IllegalShape
                }
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Turn {}, {} to move",
            self.board.history().len() / 2 + 1,
            self.side_to_move
        )?;
        write!(f, "{}", self.board)
    }
}
