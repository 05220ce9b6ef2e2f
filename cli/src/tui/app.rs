use crossterm::event::KeyCode;
use sales_core::{Action, DashboardSnapshot, DashboardState, Dataset, View};

pub enum Command {
    Quit,
    Dispatch(Action),
    ScrollDown,
    ScrollUp,
}

pub struct App {
    pub dataset: Dataset,
    pub state: DashboardState,
    pub scroll: usize,
}

impl App {
    pub fn new(dataset: Dataset) -> App {
        let state = DashboardState::loaded(dataset.years.clone());
        App {
            dataset,
            state,
            scroll: 0,
        }
    }

    /// Recomputed for every frame.
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot::build(&self.dataset, &self.state)
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "Dispatching");
        let next = self.state.reduce(action);
        if next.view != self.state.view || next.selected_year != self.state.selected_year {
            self.scroll = 0;
        }
        self.state = next;
    }

    pub fn scroll_down(&mut self, rows: usize) {
        if self.scroll + 1 < rows {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

pub fn command_for(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('1') | KeyCode::Char('y') => Command::Dispatch(Action::SetView(View::Yearly)),
        KeyCode::Char('2') | KeyCode::Char('m') => Command::Dispatch(Action::SetView(View::Monthly)),
        KeyCode::Char('3') | KeyCode::Char('w') => Command::Dispatch(Action::SetView(View::Weekly)),
        KeyCode::Tab => Command::Dispatch(Action::NextView),
        KeyCode::BackTab => Command::Dispatch(Action::PreviousView),
        KeyCode::Left | KeyCode::Char('h') => Command::Dispatch(Action::PreviousYear),
        KeyCode::Right | KeyCode::Char('l') => Command::Dispatch(Action::NextYear),
        KeyCode::Down | KeyCode::Char('j') => Command::ScrollDown,
        KeyCode::Up | KeyCode::Char('k') => Command::ScrollUp,
        _ => return None,
    };
    Some(command)
}
