//! Dashboard view state and the reducer that drives it.
//!
//! The state is a plain value; every user interaction is an [`Action`] and
//! produces a new state through [`DashboardState::reduce`].

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Yearly,
    Monthly,
    Weekly,
}

impl View {
    pub const ALL: [View; 3] = [View::Yearly, View::Monthly, View::Weekly];

    pub fn index(self) -> usize {
        match self {
            View::Yearly => 0,
            View::Monthly => 1,
            View::Weekly => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Yearly => "Yearly",
            View::Monthly => "Monthly",
            View::Weekly => "Weekly",
        }
    }

    fn next(self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    fn previous(self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetView(View),
    NextView,
    PreviousView,
    SelectYear(i32),
    NextYear,
    PreviousYear,
    /// Data arrived; carries the sorted year list.
    Loaded(Vec<i32>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    pub view: View,
    pub selected_year: Option<i32>,
    pub years: Vec<i32>,
}

impl DashboardState {
    /// State right after a load: yearly view, latest year selected.
    pub fn loaded(years: Vec<i32>) -> Self {
        Self::default().reduce(Action::Loaded(years))
    }

    pub fn reduce(&self, action: Action) -> DashboardState {
        let mut next = self.clone();
        match action {
            Action::SetView(view) => next.view = view,
            Action::NextView => next.view = self.view.next(),
            Action::PreviousView => next.view = self.view.previous(),
            Action::SelectYear(year) => next.selected_year = Some(year),
            Action::NextYear => next.selected_year = self.step_year(true),
            Action::PreviousYear => next.selected_year = self.step_year(false),
            Action::Loaded(years) => {
                next.selected_year = years.last().copied();
                next.years = years;
            }
        }
        next
    }

    pub fn has_previous_year(&self) -> bool {
        match (self.selected_year, self.years.first()) {
            (Some(year), Some(first)) => year > *first,
            _ => false,
        }
    }

    pub fn has_next_year(&self) -> bool {
        match (self.selected_year, self.years.last()) {
            (Some(year), Some(last)) => year < *last,
            _ => false,
        }
    }

    // Clamped at both ends. A year outside the list moves to the nearest
    // listed year in the requested direction.
    fn step_year(&self, forward: bool) -> Option<i32> {
        let Some(current) = self.selected_year else {
            return self.years.last().copied();
        };
        let candidate = if forward {
            self.years.iter().copied().find(|y| *y > current)
        } else {
            self.years.iter().rev().copied().find(|y| *y < current)
        };
        candidate.or(Some(current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = DashboardState::default();
        assert_eq!(state.view, View::Yearly);
        assert_eq!(state.selected_year, None);
    }

    #[test]
    fn test_loaded_selects_latest_year() {
        let state = DashboardState::loaded(vec![2022, 2023, 2024]);
        assert_eq!(state.view, View::Yearly);
        assert_eq!(state.selected_year, Some(2024));

        let empty = DashboardState::loaded(Vec::new());
        assert_eq!(empty.selected_year, None);
    }

    #[test]
    fn test_loaded_keeps_view() {
        let state = DashboardState::default()
            .reduce(Action::SetView(View::Weekly))
            .reduce(Action::Loaded(vec![2021]));
        assert_eq!(state.view, View::Weekly);
        assert_eq!(state.selected_year, Some(2021));
    }

    #[test]
    fn test_every_view_reachable_from_every_view() {
        for from in View::ALL {
            for to in View::ALL {
                let state = DashboardState::default().reduce(Action::SetView(from));
                assert_eq!(state.reduce(Action::SetView(to)).view, to);
            }
        }
    }

    #[test]
    fn test_view_cycling_wraps() {
        let state = DashboardState::default();
        assert_eq!(state.reduce(Action::NextView).view, View::Monthly);
        assert_eq!(state.reduce(Action::PreviousView).view, View::Weekly);
        let weekly = state.reduce(Action::SetView(View::Weekly));
        assert_eq!(weekly.reduce(Action::NextView).view, View::Yearly);
    }

    #[test]
    fn test_reduce_returns_new_value() {
        let state = DashboardState::loaded(vec![2023, 2024]);
        let _ = state.reduce(Action::SelectYear(2023));
        assert_eq!(state.selected_year, Some(2024));
    }

    #[test]
    fn test_year_stepping_is_clamped() {
        let state = DashboardState::loaded(vec![2022, 2023, 2024]);
        assert!(!state.has_next_year());
        assert_eq!(state.reduce(Action::NextYear).selected_year, Some(2024));

        let back = state.reduce(Action::PreviousYear).reduce(Action::PreviousYear);
        assert_eq!(back.selected_year, Some(2022));
        assert!(!back.has_previous_year());
        assert_eq!(back.reduce(Action::PreviousYear).selected_year, Some(2022));
    }

    #[test]
    fn test_any_year_can_be_selected() {
        let state = DashboardState::loaded(vec![2022, 2024]).reduce(Action::SelectYear(2023));
        assert_eq!(state.selected_year, Some(2023));
        assert_eq!(state.reduce(Action::NextYear).selected_year, Some(2024));
        assert_eq!(state.reduce(Action::PreviousYear).selected_year, Some(2022));
    }

    #[test]
    fn test_stepping_without_years_is_noop() {
        let state = DashboardState::default();
        assert_eq!(state.reduce(Action::NextYear).selected_year, None);
        let selected = state.reduce(Action::SelectYear(2020));
        assert_eq!(selected.reduce(Action::PreviousYear).selected_year, Some(2020));
    }
}
