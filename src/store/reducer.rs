//! Pure state transition function

use crate::state::TimersState;

use super::Action;

/// Compute the next state from the current state and an action
///
/// Pure and total: no side effects, no I/O, never fails. Every call builds a
/// fresh snapshot and leaves the input untouched, so callers can compare old
/// and new values to detect change.
pub fn reduce(state: &TimersState, action: &Action) -> TimersState {
    match action {
        Action::StartTimers => TimersState {
            is_running: true,
            timers: state.timers.clone(),
        },
        Action::StopTimers => TimersState {
            is_running: false,
            timers: state.timers.clone(),
        },
        Action::AddTimer(timer) => {
            let mut timers = state.timers.clone();
            timers.push(timer.clone());
            TimersState {
                is_running: state.is_running,
                timers,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Timer;

    #[test]
    fn start_sets_running_and_keeps_timers() {
        let state = TimersState {
            is_running: false,
            timers: vec![Timer::new("Study", 25.0)],
        };

        let next = reduce(&state, &Action::StartTimers);
        assert!(next.is_running);
        assert_eq!(next.timers, state.timers);
    }

    #[test]
    fn stop_clears_running_and_keeps_timers() {
        let state = TimersState {
            is_running: true,
            timers: vec![Timer::new("Study", 25.0)],
        };

        let next = reduce(&state, &Action::StopTimers);
        assert!(!next.is_running);
        assert_eq!(next.timers, state.timers);
    }

    #[test]
    fn start_is_idempotent() {
        let state = TimersState::new();
        let once = reduce(&state, &Action::StartTimers);
        let twice = reduce(&once, &Action::StartTimers);
        assert!(once.is_running);
        assert!(twice.is_running);
    }

    #[test]
    fn stop_is_idempotent() {
        let state = TimersState::new();
        let once = reduce(&state, &Action::StopTimers);
        let twice = reduce(&once, &Action::StopTimers);
        assert!(!once.is_running);
        assert!(!twice.is_running);
    }

    #[test]
    fn add_appends_and_preserves_running_flag() {
        let state = TimersState {
            is_running: true,
            timers: vec![Timer::new("Study", 25.0)],
        };

        let added = Timer::new("Break", 5.0);
        let next = reduce(&state, &Action::AddTimer(added.clone()));
        assert_eq!(next.timers.len(), state.timers.len() + 1);
        assert_eq!(next.timers.last(), Some(&added));
        assert!(next.is_running);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let a = Timer::new("A", 1.0);
        let b = Timer::new("B", 2.0);

        let state = TimersState::new();
        let state = reduce(&state, &Action::AddTimer(a.clone()));
        let state = reduce(&state, &Action::AddTimer(b.clone()));

        assert_eq!(state.timers, vec![a, b]);
    }

    #[test]
    fn duplicates_and_unvalidated_payloads_are_accepted() {
        let odd = Timer::new("", -3.5);

        let state = TimersState::new();
        let state = reduce(&state, &Action::AddTimer(odd.clone()));
        let state = reduce(&state, &Action::AddTimer(odd.clone()));

        assert_eq!(state.timers, vec![odd.clone(), odd]);
    }

    #[test]
    fn input_state_is_left_untouched() {
        let state = TimersState::new();
        let before = state.clone();

        let _ = reduce(&state, &Action::StartTimers);
        let _ = reduce(&state, &Action::AddTimer(Timer::new("Study", 25.0)));

        assert_eq!(state, before);
    }

    #[test]
    fn add_on_initial_state_matches_expected_snapshot() {
        let state = reduce(
            &TimersState::new(),
            &Action::AddTimer(Timer::new("Study", 25.0)),
        );

        assert!(!state.is_running);
        assert_eq!(state.timers, vec![Timer::new("Study", 25.0)]);
    }

    #[test]
    fn start_then_add_keeps_running_and_order() {
        let state = reduce(
            &TimersState::new(),
            &Action::AddTimer(Timer::new("Study", 25.0)),
        );
        let state = reduce(&state, &Action::StartTimers);
        let state = reduce(&state, &Action::AddTimer(Timer::new("Break", 5.0)));

        assert!(state.is_running);
        assert_eq!(
            state.timers,
            vec![Timer::new("Study", 25.0), Timer::new("Break", 5.0)]
        );
    }

    #[test]
    fn stop_on_stopped_initial_state_is_a_value_no_op() {
        let state = reduce(&TimersState::new(), &Action::StopTimers);
        assert_eq!(state, TimersState::new());
    }
}
