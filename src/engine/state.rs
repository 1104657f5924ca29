//! Mistake and success counters

/// Counters for one game session
///
/// `mistake_count` never exceeds `mistake_limit - 1`: the wrong guess that
/// would reach the limit ends the game instead of incrementing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    mistake_count: u32,
    mistake_limit: u32,
    success_count: u32,
    is_game_over: bool,
}

impl GameState {
    /// Fresh counters with the given limit
    ///
    /// A limit of zero is raised to one so the game can always end.
    #[must_use]
    pub const fn new(mistake_limit: u32) -> Self {
        Self {
            mistake_count: 0,
            mistake_limit: if mistake_limit == 0 { 1 } else { mistake_limit },
            success_count: 0,
            is_game_over: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn mistake_count(&self) -> u32 {
        self.mistake_count
    }

    #[inline]
    #[must_use]
    pub const fn mistake_limit(&self) -> u32 {
        self.mistake_limit
    }

    #[inline]
    #[must_use]
    pub const fn success_count(&self) -> u32 {
        self.success_count
    }

    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Whether the next wrong guess ends the game
    #[inline]
    #[must_use]
    pub const fn on_last_try(&self) -> bool {
        self.mistake_count + 1 == self.mistake_limit
    }

    pub(crate) fn record_success(&mut self) {
        debug_assert!(!self.is_game_over);
        self.success_count += 1;
    }

    pub(crate) fn record_mistake(&mut self) {
        debug_assert!(!self.is_game_over && !self.on_last_try());
        self.mistake_count += 1;
    }

    pub(crate) fn end_game(&mut self) {
        self.is_game_over = true;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new(self.mistake_limit);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_zeroed() {
        let state = GameState::new(5);
        assert_eq!(state.mistake_count(), 0);
        assert_eq!(state.success_count(), 0);
        assert_eq!(state.mistake_limit(), 5);
        assert!(!state.is_game_over());
    }

    #[test]
    fn zero_limit_is_raised() {
        let state = GameState::new(0);
        assert_eq!(state.mistake_limit(), 1);
        assert!(state.on_last_try());
    }

    #[test]
    fn last_try_detection() {
        let mut state = GameState::new(3);
        assert!(!state.on_last_try());
        state.record_mistake();
        assert!(!state.on_last_try());
        state.record_mistake();
        assert!(state.on_last_try());
    }

    #[test]
    fn reset_keeps_limit() {
        let mut state = GameState::new(4);
        state.record_mistake();
        state.record_success();
        state.end_game();
        state.reset();
        assert_eq!(state, GameState::new(4));
    }
}
